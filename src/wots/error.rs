// Error types for WOTS+ public key construction

use thiserror::Error;

/// Reason a WOTS+ public key was rejected at construction.
///
/// Both variants are terminal for the construction call. Signature
/// verification must treat either one as a rejected key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyError {
    /// A required input (params, the chain sequence, or one chain) is absent
    #[error("Invalid argument: {0} is absent")]
    InvalidArgument(&'static str),

    /// Input is present but has the wrong shape for the parameter set
    #[error("Invalid format: {0}")]
    InvalidFormat(&'static str),
}

/// Coarse classification of a [`KeyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyErrorKind {
    InvalidArgument,
    InvalidFormat,
}

impl KeyError {
    pub(crate) const PARAMS: Self = KeyError::InvalidArgument("params");
    pub(crate) const PUBLIC_KEY: Self = KeyError::InvalidArgument("publicKey");
    pub(crate) const PUBLIC_KEY_ELEMENT: Self = KeyError::InvalidArgument("publicKey element");
    pub(crate) const WRONG_SIZE: Self = KeyError::InvalidFormat("wrong publicKey size");
    pub(crate) const WRONG_FORMAT: Self = KeyError::InvalidFormat("wrong publicKey format");

    pub fn kind(&self) -> KeyErrorKind {
        match self {
            KeyError::InvalidArgument(_) => KeyErrorKind::InvalidArgument,
            KeyError::InvalidFormat(_) => KeyErrorKind::InvalidFormat,
        }
    }

    /// The bare reason, without the kind prefix used by `Display`
    pub fn reason(&self) -> &'static str {
        match self {
            KeyError::InvalidArgument(reason) | KeyError::InvalidFormat(reason) => reason,
        }
    }
}
