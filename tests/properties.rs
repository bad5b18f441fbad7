//! Property-based tests for splitting, recovery and the share token format.

use blob_sss::{decode_secret, encode_secret_with_rng, validate, Share};
use proptest::prelude::*;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

/// Printable and control ASCII alike, 1..=max_len characters.
fn ascii_secret(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..128, 1..=max_len)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
}

/// `(n, k)` with `2 <= k <= n <= 255`.
fn share_params() -> impl Strategy<Value = (u16, u16)> {
    (2u16..=255).prop_flat_map(|n| (Just(n), 2u16..=n))
}

/// A split plus a `k`-sized subset of participant positions, picked by
/// shuffling all positions with the proptest-supplied permutation.
fn split_case() -> impl Strategy<Value = (String, u16, u16, [u8; 32], Vec<usize>)> {
    (ascii_secret(16), share_params(), any::<[u8; 32]>()).prop_flat_map(|(secret, (n, k), seed)| {
        let picks = Just((0..n as usize).collect::<Vec<_>>())
            .prop_shuffle()
            .prop_map(move |mut order| {
                order.truncate(k as usize);
                order
            });
        (Just(secret), Just(n), Just(k), Just(seed), picks)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn any_k_subset_recovers((secret, n, k, seed, picks) in split_case()) {
        let mut rng = ChaCha20Rng::from_seed(seed);
        let shares = encode_secret_with_rng(&secret, n, k, &mut rng).unwrap();
        prop_assert_eq!(shares.len(), n as usize);
        prop_assert!(shares.iter().all(|s| s.len() == secret.len()));

        let subset: Vec<Share> = picks.iter().map(|&i| shares[i].clone()).collect();
        prop_assert_eq!(validate(&subset), Ok(()));
        let recovered = decode_secret(&subset).unwrap();
        prop_assert_eq!(recovered.as_str(), secret.as_str());
    }

    #[test]
    fn tokens_roundtrip(secret in ascii_secret(64), seed in any::<[u8; 32]>()) {
        let mut rng = ChaCha20Rng::from_seed(seed);
        let shares = encode_secret_with_rng(&secret, 4, 2, &mut rng).unwrap();
        for share in &shares {
            let token = share.to_token();
            let prefix = format!("{}:", share.x());
            prop_assert!(token.starts_with(&prefix));
            prop_assert_eq!(&Share::from_token(&token).unwrap(), share);
        }
    }

    #[test]
    fn parsed_tokens_stay_in_field(x in 1u16..=256, ys in prop::collection::vec(0u16..257, 1..32)) {
        let share = Share::new(x, ys);
        let parsed: Share = share.to_token().parse().unwrap();
        prop_assert!(parsed.y().iter().all(|&y| y < 257));
        prop_assert_eq!(parsed, share);
    }

    #[test]
    fn arbitrary_text_never_panics(token in ".*") {
        let _ = Share::from_token(&token);
    }
}

#[test]
fn hi_scenario_with_tokens() {
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
    let shares = encode_secret_with_rng("Hi", 5, 3, &mut rng).unwrap();
    let tokens: Vec<String> = shares.iter().map(Share::to_token).collect();

    let collected: Vec<Share> = [&tokens[0], &tokens[2], &tokens[4]]
        .iter()
        .map(|t| t.parse().unwrap())
        .collect();
    validate(&collected).unwrap();
    assert_eq!(decode_secret(&collected).unwrap().as_str(), "Hi");
}

#[test]
fn duplicate_index_scenario() {
    let a: Share = "1:AEgAaQ==".parse().unwrap();
    let b: Share = "1:AEkAag==".parse().unwrap();
    let err = validate(&[a, b]).unwrap_err();
    assert_eq!(err.to_string(), "Duplicate share indices.");
}
