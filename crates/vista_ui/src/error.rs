//! Validation and configuration errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected component prop values.
///
/// Props with a closed set of accepted values parse through `FromStr`/`TryFrom` and report the
/// offending input here instead of being coerced to a default.
pub enum PropError {
    /// The value is not one of `default`, `contained`, `outlined`, `text`.
    #[error("invalid variant `{0}`; expected one of default, contained, outlined, text")]
    InvalidVariant(String),
    /// The value is not one of `default`, `comfortable`, `compact`.
    #[error("invalid density `{0}`; expected one of default, comfortable, compact")]
    InvalidDensity(String),
    /// The value is not an integer between 0 and 24.
    #[error("invalid elevation `{0}`; expected an integer between 0 and 24")]
    InvalidElevation(String),
    /// The value is not a usable element name.
    #[error("invalid tag name `{0}`")]
    InvalidTag(String),
}

#[derive(Debug, Error)]
/// Errors raised while loading [`crate::UiConfig`].
pub enum ConfigError {
    /// The JSON document could not be decoded.
    #[error("ui config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}
