use snowflake_gen::{Snowflake, SnowflakeConfig};

fn main() {
    // 3 bits of data center, 8 bits of machine, 10 bits of sequence
    let config = SnowflakeConfig::builder()
        .layout(3, 8, 10)
        .unwrap()
        .epoch(1704067200000) // 2024-01-01
        .build();

    println!("Config: {config}");

    let generator = Snowflake::with_config(5, 200, config).unwrap();
    for _ in 0..3 {
        let id = generator.next_id().unwrap();
        let parts = generator.decode(id);
        println!(
            "ID: {id} (ts={}, dc={}, machine={}, seq={}) created at {:?}",
            parts.timestamp,
            parts.data_center_id,
            parts.machine_id,
            parts.sequence,
            parts.datetime(config.epoch())
        );
    }
}
