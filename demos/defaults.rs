//! Example demonstrating defaults, both text and already-typed

use chrono::Utc;
use envfetch::{fetch, Kind};

fn main() -> anyhow::Result<()> {
    // None of these variables are set
    std::env::remove_var("SERVER_ADDR");
    std::env::remove_var("WORKER_COUNT");
    std::env::remove_var("DEPLOYED_AT");

    // Text defaults are coerced exactly like environment text
    let server_addr = fetch("SERVER_ADDR").default("127.0.0.1:8080").resolve()?;
    let worker_count = fetch("WORKER_COUNT")
        .kind(Kind::Integer)
        .default("4")
        .resolve()?;

    // An already-typed default passes through coercion unchanged
    let deployed_at = fetch("DEPLOYED_AT")
        .kind(Kind::Timestamp)
        .default(Utc::now())
        .resolve()?;

    println!("Configuration with defaults:");
    println!("  Server Address: {:?}", server_addr);
    println!("  Worker Count: {:?}", worker_count);
    println!("  Deployed At: {:?}", deployed_at);

    Ok(())
}
