//! Tokenizer behavior at the integration surface.

use gridfall_command::tokenize;

#[test]
fn quoted_span_with_trailing_word() {
    assert_eq!(
        tokenize(r#"say "hello world" now"#),
        vec!["say".to_string(), "hello world".to_string(), "now".to_string()]
    );
}

#[test]
fn whitespace_only_line_yields_empty_sequence() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t  ").is_empty());
}

#[test]
fn hyphenated_names_survive() {
    assert_eq!(
        tokenize("look map-scrap"),
        vec!["look".to_string(), "map-scrap".to_string()]
    );
}

#[test]
fn same_line_same_tokens() {
    let line = r#"open "supply crate" lid"#;
    assert_eq!(tokenize(line), tokenize(line));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn tokens_never_contain_quotes(input in ".*") {
            for token in tokenize(&input) {
                prop_assert!(!token.contains('"'));
            }
        }

        #[test]
        fn whitespace_never_leaks_outside_quotes(input in "[a-z \t-]*") {
            for token in tokenize(&input) {
                prop_assert!(!token.contains(' '));
                prop_assert!(!token.contains('\t'));
            }
        }
    }
}

