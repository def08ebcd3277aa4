//! Property tests for selection-token splitting.

use proptest::prelude::*;

use shipmate::resolver::split_tokens;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Splitting never panics and never yields empty or padded tokens.
    #[test]
    fn property_split_yields_clean_tokens(raw in ".*") {
        let tokens = split_tokens(&raw);
        for token in &tokens {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.trim(), token.as_str());
            prop_assert!(!token.contains(','));
        }
    }

    /// PROPERTY: Joining split tokens with commas and splitting again is a fixpoint.
    #[test]
    fn property_split_is_stable_under_rejoin(raw in ".*") {
        let tokens = split_tokens(&raw);
        let rejoined = tokens.join(",");
        prop_assert_eq!(split_tokens(&rejoined), tokens);
    }

    /// PROPERTY: Whitespace padding around segments never changes the result.
    #[test]
    fn property_split_ignores_padding(
        segments in proptest::collection::vec("[a-z0-9_-]{1,8}", 0..6),
        pad in proptest::collection::vec(" {0,3}", 12),
    ) {
        let plain = segments.join(",");
        let padded = segments
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}{}{}", pad[i % pad.len()], s, pad[(i + 1) % pad.len()]))
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(split_tokens(&padded), split_tokens(&plain));
    }
}
