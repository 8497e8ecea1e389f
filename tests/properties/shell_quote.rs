//! Property tests for command-line display quoting.

use proptest::prelude::*;

use buildprep::domain::step::shell_quote;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Safe tokens are displayed as-is.
    #[test]
    fn property_safe_tokens_unchanged(token in "[A-Za-z0-9._/=:,+@%-]{1,32}") {
        prop_assert_eq!(shell_quote(&token), token);
    }

    /// PROPERTY: Anything else is wrapped in single quotes.
    #[test]
    fn property_unsafe_tokens_are_quoted(token in "(?s).{0,32}") {
        let quoted = shell_quote(&token);
        let safe = !token.is_empty()
            && token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c));
        if !safe {
            prop_assert!(quoted.starts_with('\''));
            prop_assert!(quoted.ends_with('\''));
        }
    }
}
