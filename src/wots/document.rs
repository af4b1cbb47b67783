// JSON document form of a WOTS+ public key
//
// External data can carry `null` in places the typed constructors rule out,
// so this is where the absence checks of key construction actually fire.

use crate::wots::{
    config::{SchemeParameters, WotsParameters},
    error::KeyError,
    public_key::WotsPlusPublicKey,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DocumentError {
    /// Document is not well-formed JSON of the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A chain value could not be decoded from hex
    #[error("Chain {index} is not valid hex: {source}")]
    Hex {
        index: usize,
        #[source]
        source: hex::FromHexError,
    },

    /// Decoded content failed key validation
    #[error(transparent)]
    Key(#[from] KeyError),
}

/// Serialized WOTS+ public key.
///
/// ```json
/// { "parameters": { "chain_count": 2, "digest_size": 4 },
///   "chains": ["01020304", "05060708"] }
/// ```
///
/// Every field may be `null` or missing; [`PublicKeyDocument::to_public_key`]
/// reports which one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyDocument {
    #[serde(default)]
    pub parameters: Option<WotsParameters>,
    #[serde(default)]
    pub chains: Option<Vec<Option<String>>>,
}

impl PublicKeyDocument {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate against the parameters recorded in the document
    pub fn to_public_key(&self) -> Result<WotsPlusPublicKey, DocumentError> {
        self.to_public_key_with(self.parameters.as_ref())
    }

    /// Validate against caller-chosen parameters, ignoring the recorded ones.
    ///
    /// Missing parameters, chain list or chain are reported before any hex
    /// is decoded; shape checks run on the decoded bytes.
    pub fn to_public_key_with<P>(&self, params: Option<&P>) -> Result<WotsPlusPublicKey, DocumentError>
    where
        P: SchemeParameters + ?Sized,
    {
        debug!(
            chains = self.chains.as_ref().map(Vec::len),
            "decoding WOTS+ public key document"
        );

        let params = params.ok_or(KeyError::PARAMS)?;
        let chains = self.chains.as_deref().ok_or(KeyError::PUBLIC_KEY)?;
        let encoded = chains
            .iter()
            .map(Option::as_deref)
            .collect::<Option<Vec<&str>>>()
            .ok_or(KeyError::PUBLIC_KEY_ELEMENT)?;

        let decoded = encoded
            .into_iter()
            .enumerate()
            .map(|(index, chain)| {
                let digits = chain.strip_prefix("0x").unwrap_or(chain);
                hex::decode(digits).map_err(|source| DocumentError::Hex { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WotsPlusPublicKey::new(params, decoded)?)
    }
}

impl From<&WotsPlusPublicKey> for PublicKeyDocument {
    fn from(key: &WotsPlusPublicKey) -> Self {
        Self {
            parameters: Some(WotsParameters::new(key.chain_count(), key.digest_size())),
            chains: Some(key.chains().map(|chain| Some(hex::encode(chain))).collect()),
        }
    }
}
