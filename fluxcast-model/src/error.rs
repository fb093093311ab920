use thiserror::Error;

/// Errors produced by the model layer.
///
/// Exactly two failure modes exist here: rejecting a wire token that does
/// not belong to a closed enumeration, and rejecting a duplicate key in a
/// strict map insert. Service-side failures (validation, throttling,
/// authorization) belong to the transport layer and never surface as a
/// `ModelError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A string did not match any member of a closed enumeration.
    #[error("invalid value for {kind}: {value:?}")]
    InvalidValue {
        /// Name of the enumeration that rejected the token.
        kind: &'static str,
        /// The offending input, verbatim.
        value: String,
    },
    /// A strict map insert was called with a key that is already present.
    #[error("duplicate key {key:?}")]
    DuplicateKey {
        /// The key that was already present.
        key: String,
    },
}

impl ModelError {
    pub(crate) fn invalid_value(
        kind: &'static str,
        value: impl Into<String>,
    ) -> Self {
        ModelError::InvalidValue {
            kind,
            value: value.into(),
        }
    }

    pub(crate) fn duplicate_key(key: impl Into<String>) -> Self {
        ModelError::DuplicateKey { key: key.into() }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
