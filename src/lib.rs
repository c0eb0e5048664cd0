//! Typed one-shot accessor for environment variables
//!
//! This library resolves a single named value from the process environment:
//! it reads the variable, coerces it to a declared kind, substitutes a
//! default when the variable is absent, and optionally enforces presence.
//! It is a configuration-value accessor, not a configuration framework:
//! there is no file parsing, no hierarchical merging, and no caching.
//!
//! # Features
//!
//! - **Typed coercion**: `string`, `symbol`, `integer`, `boolean`,
//!   `timestamp`, and `date` kinds, each with an explicit parsing rule
//! - **Defaults**: plain text or already-typed values, used only when the
//!   variable is absent; an ill-typed default is an error, never ignored
//! - **Presence enforcement**: `required()` rejects a lookup whose final
//!   coerced value is absent
//! - **Classified errors**: coercion failures and required-but-absent
//!   failures are distinct [`EnvError`] variants a caller can match on
//!
//! # Value Parsing
//!
//! - Strings: `DATABASE_URL=postgres://localhost/db` (a present empty
//!   string is a value, not an absence)
//! - Integers: `MAX_CONNECTIONS=42`, parsed as `i64`
//! - Booleans: `DEBUG=true` (`1 t true y yes on` / `0 f false n no off`,
//!   case-insensitive)
//! - Timestamps: `DEPLOYED_AT=2020-01-01T00:00:00Z`, RFC 3339 normalized
//!   to UTC
//! - Dates: `CUTOFF=2020-12-31`
//!
//! # Example
//!
//! ```rust
//! use envfetch::{fetch, Kind};
//!
//! std::env::set_var("PORT", "8080");
//!
//! // Present variable, coerced to the requested kind
//! let port = fetch("PORT").kind(Kind::Integer).resolve()?;
//! assert_eq!(port.unwrap().as_integer(), Some(8080));
//!
//! // Absent variable without a default resolves to None
//! std::env::remove_var("THREADS");
//! assert_eq!(fetch("THREADS").kind(Kind::Integer).resolve()?, None);
//!
//! // Absent variable with a typed default returns the default unchanged
//! let threads = fetch("THREADS").kind(Kind::Integer).default(4).resolve()?;
//! assert_eq!(threads.unwrap().as_integer(), Some(4));
//! # std::env::remove_var("PORT");
//! # Ok::<(), envfetch::EnvError>(())
//! ```
//!
//! # Required values
//!
//! `required()` fires on the *final coerced value*: a default that itself
//! resolves to nothing does not satisfy it.
//!
//! ```rust
//! use envfetch::{fetch, EnvError, Kind};
//!
//! std::env::remove_var("API_KEY");
//! let err = fetch("API_KEY").required().resolve().unwrap_err();
//! assert!(matches!(err, EnvError::Missing { .. }));
//! ```
//!
//! # Errors
//!
//! Every failure is synchronous and terminal at this layer. The component
//! performs no logging and never substitutes a fallback on error; the
//! caller decides whether to abort, log, or recover.

mod coerce;
mod error;
mod fetch;

pub use coerce::{CoerceError, Kind, Symbol, Value};
pub use error::EnvError;
pub use fetch::{fetch, Fetch};
