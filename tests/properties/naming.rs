//! Property tests for component name derivation.

use proptest::prelude::*;

use iconpack::naming::{pascal_case, validate_identifier};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: pascal_case never panics and never keeps a separator.
    #[test]
    fn property_pascal_case_is_separator_free(stem in "[A-Za-z0-9 _.-]{0,64}") {
        let name = pascal_case(&stem);
        prop_assert!(!name.chars().any(|c| matches!(c, '-' | '_' | '.') || c.is_whitespace()));
    }

    /// PROPERTY: Only separators are dropped; every letter and digit survives.
    #[test]
    fn property_pascal_case_keeps_alphanumerics(stem in "[A-Za-z0-9 _.-]{0,64}") {
        let name = pascal_case(&stem);
        let expected: String = stem
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        prop_assert_eq!(name.to_ascii_lowercase(), expected);
    }

    /// PROPERTY: Kebab-case stems that start with a letter always yield a usable name.
    #[test]
    fn property_kebab_stems_are_valid(
        words in proptest::collection::vec("[a-z][a-z0-9]{0,8}", 1..=5),
    ) {
        let stem = words.join("-");
        let name = pascal_case(&stem);
        prop_assert!(name.chars().next().unwrap().is_ascii_uppercase());
        if name != "React" && name != "ForwardRef" {
            prop_assert!(validate_identifier(&name).is_ok(), "{} -> {}", stem, name);
        }
    }

    /// PROPERTY: pascal_case is idempotent on its own output.
    #[test]
    fn property_pascal_case_idempotent(
        words in proptest::collection::vec("[a-z]{2,8}", 1..=5),
    ) {
        let once = pascal_case(&words.join("-"));
        prop_assert_eq!(pascal_case(&once), once.clone());
    }
}
