// Validated immutable WOTS+ public key

use crate::wots::{config::SchemeParameters, error::KeyError};
use std::fmt;
use tracing::{debug, trace};

/// WOTS+ public key: `chain_count` terminal chain values of `digest_size` bytes each.
///
/// A value of this type always matches the parameters it was built against.
/// The chain values live in one buffer owned by the key; nothing handed in by
/// a caller is retained and nothing handed out can write back into it.
///
/// Position is significant: chain `i` is the end of the `i`-th Winternitz chain.
/// The digest bytes themselves are not inspected.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct WotsPlusPublicKey {
    bytes: Box<[u8]>,
    chain_count: usize,
    digest_size: usize,
}

impl WotsPlusPublicKey {
    /// Build a key from chain values the caller hands over.
    ///
    /// Errors:
    /// - `InvalidFormat("wrong publicKey size")` if there are not exactly
    ///   `params.chain_count()` chains
    /// - `InvalidFormat("wrong publicKey format")` if any chain is not
    ///   `params.digest_size()` bytes
    pub fn new<P>(params: &P, chains: Vec<Vec<u8>>) -> Result<Self, KeyError>
    where
        P: SchemeParameters + ?Sized,
    {
        Self::from_chains(params, &chains)
    }

    /// Build a key by copying borrowed chain values.
    ///
    /// Fails like [`WotsPlusPublicKey::new`]. The caller keeps its buffers and
    /// may reuse them freely; the key holds its own copy.
    pub fn from_chains<P, C>(params: &P, chains: &[C]) -> Result<Self, KeyError>
    where
        P: SchemeParameters + ?Sized,
        C: AsRef<[u8]>,
    {
        let chain_count = params.chain_count();
        let digest_size = params.digest_size();

        if chains.len() != chain_count {
            return Err(reject(KeyError::WRONG_SIZE, chain_count, digest_size));
        }
        if chains.iter().any(|chain| chain.as_ref().len() != digest_size) {
            return Err(reject(KeyError::WRONG_FORMAT, chain_count, digest_size));
        }

        let mut bytes = Vec::with_capacity(chain_count * digest_size);
        for chain in chains {
            bytes.extend_from_slice(chain.as_ref());
        }

        trace!(chain_count, digest_size, "constructed WOTS+ public key");
        Ok(Self {
            bytes: bytes.into_boxed_slice(),
            chain_count,
            digest_size,
        })
    }

    /// Build a key from input where the parameters, the chain list or single
    /// chains may be missing, e.g. decoded external data.
    ///
    /// Checks run in order and the first failure is returned:
    /// 1. `params` missing: `InvalidArgument("params")`
    /// 2. `chains` missing: `InvalidArgument("publicKey")`
    /// 3. any chain missing: `InvalidArgument("publicKey element")`
    /// 4. wrong chain count: `InvalidFormat("wrong publicKey size")`
    /// 5. wrong chain width: `InvalidFormat("wrong publicKey format")`
    pub fn create<P, C>(params: Option<&P>, chains: Option<&[Option<C>]>) -> Result<Self, KeyError>
    where
        P: SchemeParameters + ?Sized,
        C: AsRef<[u8]>,
    {
        let Some(params) = params else {
            return Err(reject(KeyError::PARAMS, 0, 0));
        };
        let (chain_count, digest_size) = (params.chain_count(), params.digest_size());

        let Some(chains) = chains else {
            return Err(reject(KeyError::PUBLIC_KEY, chain_count, digest_size));
        };

        let present = chains
            .iter()
            .map(|chain| chain.as_ref().map(AsRef::as_ref))
            .collect::<Option<Vec<&[u8]>>>()
            .ok_or_else(|| reject(KeyError::PUBLIC_KEY_ELEMENT, chain_count, digest_size))?;

        Self::from_chains(params, &present)
    }

    /// Build a key from its flat form: all chains concatenated in order.
    ///
    /// The input must be exactly `chain_count * digest_size` bytes, otherwise
    /// `InvalidFormat("wrong publicKey size")` is returned.
    pub fn from_flat_bytes<P>(params: &P, bytes: &[u8]) -> Result<Self, KeyError>
    where
        P: SchemeParameters + ?Sized,
    {
        let chain_count = params.chain_count();
        let digest_size = params.digest_size();

        match chain_count.checked_mul(digest_size) {
            Some(expected) if expected == bytes.len() => Ok(Self {
                bytes: bytes.into(),
                chain_count,
                digest_size,
            }),
            _ => Err(reject(KeyError::WRONG_SIZE, chain_count, digest_size)),
        }
    }

    pub fn chain_count(&self) -> usize {
        self.chain_count
    }

    pub fn digest_size(&self) -> usize {
        self.digest_size
    }

    /// Terminal value of chain `index`, if in range
    pub fn chain(&self, index: usize) -> Option<&[u8]> {
        if index >= self.chain_count {
            return None;
        }
        let start = index * self.digest_size;
        Some(&self.bytes[start..start + self.digest_size])
    }

    /// Read-only view of every chain value, in chain order
    pub fn chains(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        (0..self.chain_count).map(move |index| {
            let start = index * self.digest_size;
            &self.bytes[start..start + self.digest_size]
        })
    }

    /// Fresh copy of every chain value, in chain order.
    ///
    /// Each call allocates new buffers; changing them never affects the key.
    pub fn to_bytes(&self) -> Vec<Vec<u8>> {
        self.chains().map(<[u8]>::to_vec).collect()
    }

    /// Flat form of the key without copying
    pub fn as_flat_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Flat form of the key: `chain_count * digest_size` bytes
    pub fn to_flat_bytes(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }
}

fn reject(err: KeyError, chain_count: usize, digest_size: usize) -> KeyError {
    debug!(
        reason = err.reason(),
        chain_count, digest_size, "rejected WOTS+ public key"
    );
    err
}

impl fmt::Debug for WotsPlusPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WotsPlusPublicKey")
            .field("chain_count", &self.chain_count)
            .field("digest_size", &self.digest_size)
            .field("chains", &self.chains().map(hex::encode).collect::<Vec<_>>())
            .finish()
    }
}
