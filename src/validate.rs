//! Contact form field validation

use regex::Regex;
use std::sync::LazyLock;

/// Email shape: a local part (dotted atoms or a quoted string) at a domain
/// (dotted labels ending in a 2+ letter TLD, or a bracketed IPv4 literal)
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern compiles")
});

/// Whether the value matches the email shape pattern
pub fn email_matches_pattern(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Full email verdict: the shape pattern AND a literal dot somewhere in the
/// value. The dot check stays a separate condition from the pattern.
pub fn is_valid_email(value: &str) -> bool {
    email_matches_pattern(value) && value.contains('.')
}

/// Whether a required field counts as filled. Raw comparison against the
/// empty string; whitespace is not trimmed.
pub fn is_filled(value: &str) -> bool {
    !value.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email {
        use super::*;

        #[test]
        fn test_plain_address_is_valid() {
            assert!(is_valid_email("user@example.com"));
        }

        #[test]
        fn test_dotted_local_part_is_valid() {
            assert!(is_valid_email("user.name@mail.example.co"));
        }

        #[test]
        fn test_quoted_local_part_is_valid() {
            assert!(is_valid_email("\"odd name\"@example.com"));
        }

        #[test]
        fn test_ip_literal_domain_is_valid() {
            assert!(email_matches_pattern("user@[192.168.0.1]"));
            assert!(is_valid_email("user@[192.168.0.1]"));
        }

        #[test]
        fn test_bare_hostname_is_invalid() {
            assert!(!is_valid_email("user@localhost"));
        }

        #[test]
        fn test_not_an_email_is_invalid() {
            assert!(!is_valid_email("not-an-email"));
        }

        #[test]
        fn test_empty_is_invalid() {
            assert!(!is_valid_email(""));
        }

        #[test]
        fn test_missing_local_part_is_invalid() {
            assert!(!is_valid_email("@example.com"));
        }

        #[test]
        fn test_missing_tld_is_invalid() {
            assert!(!is_valid_email("user@example"));
        }

        #[test]
        fn test_single_letter_tld_is_invalid() {
            assert!(!is_valid_email("user@example.c"));
        }

        #[test]
        fn test_spaces_are_invalid() {
            assert!(!is_valid_email("user name@example.com"));
            assert!(!is_valid_email(" user@example.com"));
        }

        #[test]
        fn test_consecutive_dots_in_local_part_are_invalid() {
            assert!(!is_valid_email("user..name@example.com"));
        }

        #[test]
        fn test_verdict_is_pattern_and_dot() {
            // Both conditions must hold, not just the pattern
            assert!(email_matches_pattern("user@example.com"));
            assert!("user@example.com".contains('.'));
            assert!(is_valid_email("user@example.com"));
        }
    }

    mod filled {
        use super::*;

        #[test]
        fn test_empty_is_not_filled() {
            assert!(!is_filled(""));
        }

        #[test]
        fn test_text_is_filled() {
            assert!(is_filled("x"));
        }

        #[test]
        fn test_whitespace_counts_as_filled() {
            // No trimming: a lone space passes the required check
            assert!(is_filled(" "));
        }
    }
}
