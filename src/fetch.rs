//! The value resolver: one environment lookup, end to end

use std::env;

use crate::coerce::{Kind, Value};
use crate::error::EnvError;

/// A single pending environment lookup.
///
/// Built by [`fetch`], configured with [`kind`](Fetch::kind),
/// [`default`](Fetch::default) and [`required`](Fetch::required), and
/// executed by [`resolve`](Fetch::resolve). Each lookup is independent and
/// stateless; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Fetch {
    key: String,
    kind: Kind,
    default: Option<Value>,
    required: bool,
}

/// Start a lookup for the environment variable `key`.
///
/// The kind defaults to [`Kind::String`], with no default value and no
/// presence requirement.
///
/// ```rust
/// use envfetch::{fetch, Kind};
///
/// std::env::set_var("WORKER_COUNT", "4");
/// let value = fetch("WORKER_COUNT").kind(Kind::Integer).resolve()?;
/// assert_eq!(value.unwrap().as_integer(), Some(4));
/// # std::env::remove_var("WORKER_COUNT");
/// # Ok::<(), envfetch::EnvError>(())
/// ```
pub fn fetch(key: impl Into<String>) -> Fetch {
    Fetch {
        key: key.into(),
        kind: Kind::default(),
        default: None,
        required: false,
    }
}

impl Fetch {
    /// Select the kind the raw value is coerced to.
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Supply a fallback used when the variable is absent from the
    /// environment.
    ///
    /// The default may already be typed (an integer, a timestamp, ...);
    /// a correctly shaped default passes through coercion unchanged,
    /// while a text default is parsed like environment text. An
    /// ill-typed default is a coercion error, not a silent absence.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Reject an absent final value.
    ///
    /// The check runs on the coerced result, after any default has been
    /// applied, so supplying a default does not by itself satisfy it.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Execute the lookup.
    ///
    /// Reads the variable from the process environment (a present empty
    /// string counts as present), falls back to the default when absent,
    /// coerces to the configured kind, and enforces the required flag.
    pub fn resolve(self) -> Result<Option<Value>, EnvError> {
        let raw = match env::var(&self.key) {
            Ok(text) => Some(Value::Text(text)),
            Err(_) => self.default,
        };

        let value = self
            .kind
            .coerce(raw)
            .map_err(|e| EnvError::coerce_error(&self.key, self.kind, e))?;

        if self.required && value.is_none() {
            return Err(EnvError::missing(&self.key));
        }

        Ok(value)
    }
}
