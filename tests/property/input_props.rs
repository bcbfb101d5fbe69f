//! Property tests for the input grammar and the full pipeline.

use super::common::{query_text, sorted_strategy};
use super::oracles::oracle_first_index;
use locator::{parse_query, InputParseError, Item, Locator, Query};
use proptest::prelude::*;

/// Whitespace runs the tokenizer must treat as a single separator.
fn separator_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\r\n]{1,4}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: formatting a query and parsing it back is the identity.
    #[test]
    fn prop_parse_formatted_query(seq in sorted_strategy(), target in any::<i64>()) {
        let parsed = parse_query(&query_text(&seq, target)).unwrap();
        prop_assert_eq!(parsed, Query::new(seq, target));
    }

    /// Property: the kind of whitespace between tokens doesn't matter.
    #[test]
    fn prop_whitespace_insensitive(
        seq in prop::collection::vec(-100i64..100, 0..16),
        target in -100i64..100,
        sep in separator_strategy()
    ) {
        let mut tokens = vec![seq.len().to_string()];
        tokens.extend(seq.iter().map(i64::to_string));
        tokens.push(target.to_string());

        let parsed = parse_query(&tokens.join(sep.as_str())).unwrap();
        prop_assert_eq!(parsed, Query::new(seq, target));
    }

    /// Property: dropping the last token always reports a missing item.
    #[test]
    fn prop_truncated_input_is_missing_token(seq in prop::collection::vec(-9i64..9, 0..16)) {
        let text = format!(
            "{} {}",
            seq.len(),
            seq.iter().map(i64::to_string).collect::<Vec<_>>().join(" ")
        );
        prop_assert_eq!(
            parse_query(&text),
            Err(InputParseError::MissingToken { item: Item::Target })
        );
    }

    /// Property: the printed line matches the oracle for every query.
    #[test]
    fn prop_pipeline_matches_oracle(seq in sorted_strategy(), target in -25i64..25) {
        let mut out = Vec::new();
        Locator::default()
            .run(query_text(&seq, target).as_bytes(), &mut out)
            .unwrap();

        let expected = format!("{}\n", oracle_first_index(&seq, &target));
        prop_assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    /// Property: parsing never panics on arbitrary text.
    #[test]
    fn prop_parse_never_panics(text in "\\PC{0,64}") {
        let _ = parse_query(&text);
    }
}
