pub mod wots;

// Re-export main types
pub use wots::{
    DocumentError, KeyError, KeyErrorKind, ParameterSet, PublicKeyDocument, SchemeParameters,
    WotsParameters, WotsPlusPublicKey,
};
