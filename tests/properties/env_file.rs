//! Property tests for env file parsing.

use proptest::prelude::*;
use std::path::Path;

use buildprep::infrastructure::env_file::parse;

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z_][A-Z0-9_]{0,15}").unwrap()
}

fn plain_value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9./:_-]{0,32}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary content returns Ok or Err, never panics.
    #[test]
    fn property_parse_never_panics(content in "(?s).{0,256}") {
        let _ = parse(&content, Path::new(".env"));
    }

    /// PROPERTY: Unquoted simple values come back unchanged.
    #[test]
    fn property_simple_pairs_are_preserved(key in key(), value in plain_value()) {
        let vars = parse(&format!("{key}={value}\n"), Path::new(".env")).unwrap();
        prop_assert_eq!(vars, vec![(key, value)]);
    }

    /// PROPERTY: Double-quoted values keep spaces and `#`.
    #[test]
    fn property_double_quotes_keep_hash(key in key(), value in plain_value()) {
        let quoted = format!("{value} # not a comment");
        let vars = parse(&format!("{key}=\"{quoted}\""), Path::new(".env")).unwrap();
        prop_assert_eq!(vars, vec![(key, quoted)]);
    }

    /// PROPERTY: Double-quoted values keep embedded newlines.
    #[test]
    fn property_double_quoted_values_span_lines(
        key in key(),
        lines in proptest::collection::vec(plain_value(), 1..4),
    ) {
        let value = lines.join("\n");
        let content = format!("{key}=\"{value}\"\nAFTER=1\n");
        let vars = parse(&content, Path::new(".env")).unwrap();
        prop_assert_eq!(
            vars,
            vec![(key, value), ("AFTER".to_string(), "1".to_string())]
        );
    }
}
