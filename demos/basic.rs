//! Basic usage example

use envfetch::{fetch, Kind};

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("MAX_CONNECTIONS", "20");
    std::env::set_var("DEBUG_MODE", "on");

    // String is the default kind
    let database_url = fetch("DATABASE_URL").resolve()?;

    // Numeric and boolean kinds
    let max_connections = fetch("MAX_CONNECTIONS").kind(Kind::Integer).resolve()?;
    let debug_mode = fetch("DEBUG_MODE").kind(Kind::Boolean).resolve()?;

    println!("Configuration loaded:");
    println!("  Database URL: {:?}", database_url);
    println!("  Max Connections: {:?}", max_connections);
    println!("  Debug Mode: {:?}", debug_mode);

    Ok(())
}
