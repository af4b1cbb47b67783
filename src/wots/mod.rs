// WOTS+ public key module
//
// Holds the validated, immutable representation of a WOTS+ public key and the
// parameter descriptors it is checked against. No hashing happens here: chain
// evaluation, key generation and verification live with the callers.

pub mod config;
pub mod document;
pub mod error;
pub mod public_key;

pub use config::{ParameterSet, SchemeParameters, WotsParameters};
pub use document::{DocumentError, PublicKeyDocument};
pub use error::{KeyError, KeyErrorKind};
pub use public_key::WotsPlusPublicKey;
