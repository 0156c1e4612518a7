use snowflake_gen::Snowflake;

fn main() {
    // Data center 1, machine 1
    let generator = Snowflake::new(1, 1).unwrap();

    let id1 = generator.next_id().unwrap();
    let id2 = generator.next_id().unwrap();
    let id3 = generator.next_id().unwrap();

    println!("Generated IDs (guaranteed to be increasing):");
    for id in [id1, id2, id3] {
        println!("  ID: {id}, {}", generator.format_id(id));
    }

    // Or extract components individually
    let layout = generator.layout();
    println!("\nComponents of ID2 (extracted individually):");
    println!("  Timestamp: {} ms since epoch", layout.timestamp(id2));
    println!("  Data center: {}", layout.data_center_id(id2));
    println!("  Machine: {}", layout.machine_id(id2));
    println!("  Sequence: {}", layout.sequence(id2));
}
