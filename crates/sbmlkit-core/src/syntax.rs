//! Identifier lexical rules.
//!
//! Element identifiers (`id` attributes) follow the SId grammar:
//!
//! ```text
//! letter ::= 'a'..'z' | 'A'..'Z'
//! digit  ::= '0'..'9'
//! SId    ::= (letter | '_') (letter | digit | '_')*
//! ```
//!
//! Meta-identifiers (`metaid` attributes) follow the XML ID production,
//! approximated here as an NCName over the ASCII range.

/// Whether `value` satisfies the SId grammar.
///
/// The empty string is not a valid SId; callers treat it as the unset
/// marker before this check applies.
pub fn is_valid_sid(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Whether `value` satisfies the XML ID production (NCName approximation).
pub fn is_valid_meta_id(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_valid_sids() {
        assert!(is_valid_sid("mitochondria"));
        assert!(is_valid_sid("My_Favorite_Factory"));
        assert!(is_valid_sid("_hidden"));
        assert!(is_valid_sid("s1"));
        assert!(is_valid_sid("C"));
    }

    #[test]
    fn test_invalid_sids() {
        assert!(!is_valid_sid(""));
        assert!(!is_valid_sid("1species"));
        assert!(!is_valid_sid("my-species"));
        assert!(!is_valid_sid("my species"));
        assert!(!is_valid_sid("spécies"));
        assert!(!is_valid_sid("a.b"));
    }

    #[test]
    fn test_valid_meta_ids() {
        assert!(is_valid_meta_id("meta1"));
        assert!(is_valid_meta_id("_m-1.2"));
        assert!(is_valid_meta_id("section.intro"));
    }

    #[test]
    fn test_invalid_meta_ids() {
        assert!(!is_valid_meta_id(""));
        assert!(!is_valid_meta_id("1meta"));
        assert!(!is_valid_meta_id("-meta"));
        assert!(!is_valid_meta_id(".meta"));
        assert!(!is_valid_meta_id("meta id"));
    }

    proptest! {
        #[test]
        fn prop_sid_grammar_accepted(s in "[A-Za-z_][A-Za-z0-9_]*") {
            prop_assert!(is_valid_sid(&s));
        }

        #[test]
        fn prop_leading_digit_rejected(s in "[0-9][A-Za-z0-9_]*") {
            prop_assert!(!is_valid_sid(&s));
        }

        #[test]
        fn prop_every_sid_is_a_meta_id(s in "[A-Za-z_][A-Za-z0-9_]*") {
            prop_assert!(is_valid_meta_id(&s));
        }
    }
}
