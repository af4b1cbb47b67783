//! Property-based tests for WOTS+ public keys using proptest
//!
//! These tests verify invariants that should hold for all valid inputs.

use proptest::prelude::*;
use wots_plus_pubkey::{KeyError, WotsParameters, WotsPlusPublicKey};

// ============================================
// Strategies
// ============================================

/// Parameters together with matching chain values
fn arb_valid_key_input() -> impl Strategy<Value = (WotsParameters, Vec<Vec<u8>>)> {
    (1usize..=20, 1usize..=64).prop_flat_map(|(chain_count, digest_size)| {
        (
            Just(WotsParameters::new(chain_count, digest_size)),
            prop::collection::vec(
                prop::collection::vec(any::<u8>(), digest_size),
                chain_count,
            ),
        )
    })
}

// ============================================
// Properties
// ============================================

proptest! {
    #[test]
    fn prop_round_trip((params, chains) in arb_valid_key_input()) {
        let key = WotsPlusPublicKey::new(&params, chains.clone()).unwrap();
        prop_assert_eq!(key.to_bytes(), chains);
    }

    #[test]
    fn prop_flat_round_trip((params, chains) in arb_valid_key_input()) {
        let key = WotsPlusPublicKey::new(&params, chains.clone()).unwrap();
        let flat = key.to_flat_bytes();

        prop_assert_eq!(flat.clone(), chains.concat());
        prop_assert_eq!(WotsPlusPublicKey::from_flat_bytes(&params, &flat).unwrap(), key);
    }

    #[test]
    fn prop_input_mutation_invisible(
        (params, chains) in arb_valid_key_input(),
        flip in any::<u8>().prop_filter("non-zero", |b| *b != 0),
    ) {
        let mut input = chains.clone();
        let key = WotsPlusPublicKey::from_chains(&params, &input).unwrap();

        for chain in input.iter_mut() {
            for byte in chain.iter_mut() {
                *byte ^= flip;
            }
        }

        prop_assert_eq!(key.to_bytes(), chains);
    }

    #[test]
    fn prop_export_mutation_invisible((params, chains) in arb_valid_key_input()) {
        let key = WotsPlusPublicKey::new(&params, chains.clone()).unwrap();

        let mut exported = key.to_bytes();
        exported[0].push(0xAA);
        exported.reverse();
        exported.truncate(1);

        prop_assert_eq!(key.to_bytes(), chains);
    }

    #[test]
    fn prop_wrong_count_rejected(
        (params, mut chains) in arb_valid_key_input(),
        extra in any::<bool>(),
    ) {
        if extra {
            chains.push(vec![0u8; params.digest_size]);
        } else {
            chains.pop();
        }

        prop_assert_eq!(
            WotsPlusPublicKey::new(&params, chains).unwrap_err(),
            KeyError::InvalidFormat("wrong publicKey size")
        );
    }

    #[test]
    fn prop_wrong_width_rejected(
        (params, mut chains) in arb_valid_key_input(),
        index in any::<prop::sample::Index>(),
        grow in any::<bool>(),
    ) {
        let target = index.index(chains.len());
        if grow {
            chains[target].push(0);
        } else {
            chains[target].pop();
        }

        prop_assert_eq!(
            WotsPlusPublicKey::new(&params, chains).unwrap_err(),
            KeyError::InvalidFormat("wrong publicKey format")
        );
    }

    #[test]
    fn prop_missing_element_rejected(
        (params, chains) in arb_valid_key_input(),
        index in any::<prop::sample::Index>(),
    ) {
        let mut optional: Vec<Option<Vec<u8>>> = chains.into_iter().map(Some).collect();
        let target = index.index(optional.len());
        optional[target] = None;

        prop_assert_eq!(
            WotsPlusPublicKey::create(Some(&params), Some(&optional[..])).unwrap_err(),
            KeyError::InvalidArgument("publicKey element")
        );
    }
}
