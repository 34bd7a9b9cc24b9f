//! Property-based tests for level parsing and field merging

use proptest::prelude::*;
use splitlog::prelude::*;

/// Randomize the case of each character in a token
fn mixed_case(token: &str, mask: u32) -> String {
    token
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if mask & (1 << (i % 32)) != 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn recognized_tokens_parse_in_any_case(
        index in 0usize..7,
        mask in any::<u32>(),
    ) {
        let tokens = ["debug", "info", "warn", "error", "dpanic", "panic", "fatal"];
        let token = mixed_case(tokens[index], mask);
        let parsed: LogLevel = token.parse().expect("recognized token");
        prop_assert_eq!(parsed.to_str().to_lowercase(), tokens[index]);
    }

    #[test]
    fn explicit_fields_always_win(
        key in "[a-zA-Z][a-zA-Z0-9_]{0,12}",
        explicit in "\\PC{0,16}",
        contextual in "\\PC{0,16}",
    ) {
        let mut merged = LogContext::new().with_field(key.as_str(), explicit.as_str());
        let defaults = LogContext::new().with_field(key.as_str(), contextual.as_str());
        merged.merge_missing(&defaults);

        prop_assert_eq!(
            merged.fields().get(key.as_str()),
            Some(&FieldValue::String(explicit.clone()))
        );
        prop_assert_eq!(merged.len(), 1);
    }

    #[test]
    fn merge_is_a_union_on_distinct_keys(
        key_a in "a[a-z0-9]{0,8}",
        key_b in "b[a-z0-9]{0,8}",
        value in "\\PC{0,16}",
    ) {
        let mut merged = LogContext::new().with_field(key_a.as_str(), value.as_str());
        let defaults = LogContext::new().with_field(key_b.as_str(), value.as_str());
        merged.merge_missing(&defaults);

        prop_assert_eq!(merged.len(), 2);
        prop_assert!(merged.fields().contains_key(key_a.as_str()));
        prop_assert!(merged.fields().contains_key(key_b.as_str()));
    }
}
