use rand::{rng, Rng};
use snowflake_gen::Snowflake;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=snowflake_gen=trace shows sequence exhaustion waits
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // One generator per simulated machine in data center 1, each shared by worker threads
    let nodes: Vec<_> = (0..4)
        .map(|machine_id| Arc::new(Snowflake::new(1, machine_id).unwrap()))
        .collect();
    let mut handles = vec![];

    for (machine_id, generator) in nodes.iter().enumerate() {
        for worker in 0..2 {
            let generator = Arc::clone(generator);
            handles.push(thread::spawn(move || {
                let mut ids = HashSet::new();
                let mut rng = rng();

                for _ in 0..5 {
                    let id = generator.next_id().unwrap();
                    println!(
                        "machine {} worker {} generated {} ({})",
                        machine_id,
                        worker,
                        id,
                        generator.format_id(id)
                    );
                    assert!(ids.insert(id), "Duplicate ID generated!");

                    // Random delay to simulate work
                    let delay = rng.random_range(0..=9);
                    thread::sleep(Duration::from_millis(delay));
                }
                ids
            }));
        }
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
    assert_eq!(all_ids.len(), 4 * 2 * 5);
    println!("No collisions across machines!");
}
