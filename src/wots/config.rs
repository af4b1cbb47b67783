// Parameter descriptors a WOTS+ public key is validated against

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two dimensions a WOTS+ public key must match.
///
/// Implementations are treated as already validated: both values are assumed
/// to be positive and are not re-checked here.
pub trait SchemeParameters {
    /// Number of hash chains in a key ("len")
    fn chain_count(&self) -> usize;

    /// Byte length of each chain's terminal value ("n")
    fn digest_size(&self) -> usize;
}

impl<T: SchemeParameters + ?Sized> SchemeParameters for &T {
    fn chain_count(&self) -> usize {
        (**self).chain_count()
    }

    fn digest_size(&self) -> usize {
        (**self).digest_size()
    }
}

/// Explicit chain count and digest size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WotsParameters {
    pub chain_count: usize,
    pub digest_size: usize,
}

impl WotsParameters {
    pub const fn new(chain_count: usize, digest_size: usize) -> Self {
        Self {
            chain_count,
            digest_size,
        }
    }

    /// Size of the flat byte form of a key under these parameters
    pub const fn public_key_size_bytes(&self) -> usize {
        self.chain_count * self.digest_size
    }
}

impl SchemeParameters for WotsParameters {
    fn chain_count(&self) -> usize {
        self.chain_count
    }

    fn digest_size(&self) -> usize {
        self.digest_size
    }
}

/// Named WOTS+ parameter sets
///
/// Constants follow RFC 8391 and NIST SP 800-208. All sets use Winternitz
/// parameter w = 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ParameterSet {
    /// SHA2-256, n = 32, len = 67
    WOTSP_SHA2_256,
    /// SHA2-512, n = 64, len = 131
    WOTSP_SHA2_512,
    /// SHAKE128, n = 32, len = 67
    WOTSP_SHAKE_256,
    /// SHAKE256, n = 64, len = 131
    WOTSP_SHAKE_512,
    /// SHA2-256 truncated to 192 bits, n = 24, len = 51
    WOTSP_SHA2_192,
    /// SHAKE256 with 256-bit output, n = 32, len = 67
    WOTSP_SHAKE256_256,
    /// SHAKE256 with 192-bit output, n = 24, len = 51
    WOTSP_SHAKE256_192,
}

impl ParameterSet {
    pub const ALL: [ParameterSet; 7] = [
        ParameterSet::WOTSP_SHA2_256,
        ParameterSet::WOTSP_SHA2_512,
        ParameterSet::WOTSP_SHAKE_256,
        ParameterSet::WOTSP_SHAKE_512,
        ParameterSet::WOTSP_SHA2_192,
        ParameterSet::WOTSP_SHAKE256_256,
        ParameterSet::WOTSP_SHAKE256_192,
    ];

    /// Registry name of this parameter set
    pub fn name(&self) -> &'static str {
        match self {
            ParameterSet::WOTSP_SHA2_256 => "WOTSP-SHA2_256",
            ParameterSet::WOTSP_SHA2_512 => "WOTSP-SHA2_512",
            ParameterSet::WOTSP_SHAKE_256 => "WOTSP-SHAKE_256",
            ParameterSet::WOTSP_SHAKE_512 => "WOTSP-SHAKE_512",
            ParameterSet::WOTSP_SHA2_192 => "WOTSP-SHA2_192",
            ParameterSet::WOTSP_SHAKE256_256 => "WOTSP-SHAKE256_256",
            ParameterSet::WOTSP_SHAKE256_192 => "WOTSP-SHAKE256_192",
        }
    }

    pub fn parameters(&self) -> WotsParameters {
        match self {
            ParameterSet::WOTSP_SHA2_256
            | ParameterSet::WOTSP_SHAKE_256
            | ParameterSet::WOTSP_SHAKE256_256 => WotsParameters::new(67, 32),
            ParameterSet::WOTSP_SHA2_512 | ParameterSet::WOTSP_SHAKE_512 => {
                WotsParameters::new(131, 64)
            }
            ParameterSet::WOTSP_SHA2_192 | ParameterSet::WOTSP_SHAKE256_192 => {
                WotsParameters::new(51, 24)
            }
        }
    }

    pub fn public_key_size_bytes(&self) -> usize {
        self.parameters().public_key_size_bytes()
    }
}

impl SchemeParameters for ParameterSet {
    fn chain_count(&self) -> usize {
        self.parameters().chain_count
    }

    fn digest_size(&self) -> usize {
        self.parameters().digest_size
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown parameter set name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown WOTS+ parameter set: {0}")]
pub struct UnknownParameterSet(pub String);

impl FromStr for ParameterSet {
    type Err = UnknownParameterSet;

    /// Accepts registry names case-insensitively, with `-` and `_` interchangeable
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        ParameterSet::ALL
            .into_iter()
            .find(|set| normalize(set.name()) == wanted)
            .ok_or_else(|| UnknownParameterSet(s.to_string()))
    }
}

fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c == '-' { '_' } else { c.to_ascii_uppercase() })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_set_sha2_256_constants() {
        let params = ParameterSet::WOTSP_SHA2_256.parameters();

        assert_eq!(params.chain_count, 67, "len for n=32, w=16 should be 67");
        assert_eq!(params.digest_size, 32);
        assert_eq!(params.public_key_size_bytes(), 67 * 32);
    }

    #[test]
    fn test_parameter_set_512_constants() {
        for set in [ParameterSet::WOTSP_SHA2_512, ParameterSet::WOTSP_SHAKE_512] {
            let params = set.parameters();
            assert_eq!(params.chain_count, 131, "len for n=64 should be 131");
            assert_eq!(params.digest_size, 64);
        }
    }

    #[test]
    fn test_parameter_set_192_constants() {
        for set in [
            ParameterSet::WOTSP_SHA2_192,
            ParameterSet::WOTSP_SHAKE256_192,
        ] {
            assert_eq!(set.chain_count(), 51, "len for n=24 should be 51");
            assert_eq!(set.digest_size(), 24);
        }
    }

    #[test]
    fn test_chain_count_matches_winternitz_16_formula() {
        // len1 = 8n / 4, len2 = floor(log2(len1 * 15) / 4) + 1
        for set in ParameterSet::ALL {
            let n = set.digest_size();
            let len1 = 8 * n / 4;
            let len2 = (usize::BITS - 1 - (len1 * 15).leading_zeros()) as usize / 4 + 1;
            assert_eq!(set.chain_count(), len1 + len2, "mismatch for {}", set);
        }
    }

    #[test]
    fn test_names_round_trip_through_from_str() {
        for set in ParameterSet::ALL {
            assert_eq!(set.name().parse::<ParameterSet>(), Ok(set));
        }
    }

    #[test]
    fn test_from_str_is_lenient() {
        assert_eq!(
            "wotsp_sha2_256".parse::<ParameterSet>(),
            Ok(ParameterSet::WOTSP_SHA2_256)
        );
        assert_eq!(
            " WOTSP-SHAKE256-192 ".parse::<ParameterSet>(),
            Ok(ParameterSet::WOTSP_SHAKE256_192)
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "XMSS-SHA2_10_256".parse::<ParameterSet>().unwrap_err();
        assert!(err.to_string().contains("XMSS-SHA2_10_256"));
    }

    #[test]
    fn test_reference_impl_forwards() {
        fn dims<P: SchemeParameters>(params: P) -> (usize, usize) {
            (params.chain_count(), params.digest_size())
        }

        let params = WotsParameters::new(4, 32);
        let by_ref: &dyn SchemeParameters = &params;
        assert_eq!(dims(&params), (4, 32));
        assert_eq!(dims(by_ref), (4, 32));
    }

    #[test]
    fn test_wots_parameters_json_shape() {
        let json = serde_json::to_value(WotsParameters::new(2, 4)).unwrap();
        assert_eq!(json, serde_json::json!({ "chain_count": 2, "digest_size": 4 }));
    }
}
