//! Example demonstrating required values and error branching

use envfetch::{fetch, EnvError, Kind};

fn main() -> anyhow::Result<()> {
    std::env::remove_var("API_KEY");
    std::env::set_var("TIMEOUT_SECS", "soon");

    // Required but absent
    match fetch("API_KEY").required().resolve() {
        Err(EnvError::Missing { name }) => println!("missing required variable: {name}"),
        other => println!("unexpected result: {other:?}"),
    }

    // Present but unparseable
    match fetch("TIMEOUT_SECS").kind(Kind::Integer).resolve() {
        Err(err @ EnvError::Coerce { .. }) => println!("coercion failed: {err}"),
        other => println!("unexpected result: {other:?}"),
    }

    std::env::remove_var("TIMEOUT_SECS");
    Ok(())
}
