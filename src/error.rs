//! Error types for environment value resolution

use crate::coerce::Kind;

/// Errors that can occur when resolving a value from the environment.
///
/// This error type covers the two failure scenarios of a resolution:
/// - Coercion failures, when the raw value (or the supplied default)
///   cannot be converted to the requested kind
/// - Required-but-absent failures, when the final resolved value is
///   absent and the lookup demands presence
///
/// Both are terminal at this layer: nothing is retried or substituted.
/// A caller that wants to branch can match on the variant.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// Environment variable resolved to nothing but was marked required.
    ///
    /// Fires on the final coerced value, so a default that itself
    /// coerces to nothing still triggers it.
    #[error("environment variable '{name}' is required but not set")]
    Missing {
        /// Name of the missing environment variable
        name: String,
    },

    /// Failed to coerce the raw value into the requested kind.
    ///
    /// Raised both for unparseable environment text and for ill-typed
    /// defaults; an ill-typed default is never silently ignored.
    #[error("unable to coerce environment variable '{name}' as {kind}: {message}")]
    Coerce {
        /// Name of the environment variable being coerced
        name: String,
        /// Kind the coercion was attempted for
        kind: Kind,
        /// Diagnostic from the underlying parser
        message: String,
    },
}

impl EnvError {
    /// Create a coercion error (used by the resolver)
    #[doc(hidden)]
    pub fn coerce_error(
        name: impl Into<String>,
        kind: Kind,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::Coerce {
            name: name.into(),
            kind,
            message: message.to_string(),
        }
    }

    /// Create a required-but-absent error (used by the resolver)
    #[doc(hidden)]
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }
}
