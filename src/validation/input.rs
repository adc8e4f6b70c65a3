//! Input validation for user-supplied strings.
//!
//! Pure syntactic predicates over raw text. None of these touch the
//! filesystem or the network, and rejected input is reported as `false`,
//! never as an error or panic.

use idna::domain_to_ascii;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Printable characters that may not appear anywhere in a path.
///
/// Windows reserved-character semantics are hardcoded so results do not
/// vary by host (Rust's std exposes no invalid-path-chars API). ASCII
/// control characters (U+0000..=U+001F) are additionally invalid.
pub const INVALID_PATH_CHARS: &[char] = &['"', '<', '>', '|'];

/// Printable characters that may not appear anywhere in a filename.
///
/// Superset of [`INVALID_PATH_CHARS`]: filenames also reject path
/// separators, the drive separator, and wildcards. ASCII control
/// characters (U+0000..=U+001F) are additionally invalid.
pub const INVALID_FILE_NAME_CHARS: &[char] = &['"', '<', '>', '|', ':', '*', '?', '\\', '/'];

fn is_invalid_path_char(c: char) -> bool {
    c <= '\u{1f}' || INVALID_PATH_CHARS.contains(&c)
}

fn is_invalid_file_name_char(c: char) -> bool {
    c <= '\u{1f}' || INVALID_FILE_NAME_CHARS.contains(&c)
}

/// Whether `value` is syntactically usable as a filesystem path.
///
/// Empty and whitespace-only strings are rejected, as is any string
/// containing a character from the invalid-path set. Existence of the
/// path is not checked.
///
/// # Example
///
/// ```rust
/// use data_validation_sdk::validation::input::is_valid_path;
///
/// assert!(is_valid_path("c:\\"));
/// assert!(is_valid_path("data/file.json"));
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("a<b"));
/// ```
pub fn is_valid_path(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }

    !value.chars().any(is_invalid_path_char)
}

/// Whether `value` is syntactically usable as a filename.
///
/// Empty and whitespace-only strings are rejected, as is any string
/// containing a character from the invalid-filename set. Length limits,
/// reserved device names, and trailing dots/spaces are not checked.
///
/// # Example
///
/// ```rust
/// use data_validation_sdk::validation::input::is_valid_file_name;
///
/// assert!(is_valid_file_name("test.txt"));
/// assert!(!is_valid_file_name("dir/test.txt"));
/// assert!(!is_valid_file_name("   "));
/// ```
pub fn is_valid_file_name(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }

    !value.chars().any(is_invalid_file_name_char)
}

// Grammar, matched case-insensitively against the IDN-normalized input:
//   local part  - quoted string with backslash escapes, or dot-separated
//                 atoms (leading and trailing alphanumeric, restricted
//                 symbols inside), no leading/trailing/consecutive dots
//   domain part - bracketed dotted-quad IPv4 literal, or dot-terminated
//                 labels followed by a 2-24 character top-level label
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)^(?:"(?:[^"\\]|\\.)+"|[0-9a-z](?:[-!#$%&'*+/=?^_`{|}~\w]*[0-9a-z])?(?:\.[0-9a-z](?:[-!#$%&'*+/=?^_`{|}~\w]*[0-9a-z])?)*)@(?:\[(?:[0-9]{1,3}\.){3}[0-9]{1,3}\]|(?:[0-9a-z](?:[-\w]*[0-9a-z])?\.)+[a-z0-9][-a-z0-9]{0,22}[a-z0-9])$"#,
    )
    .unwrap()
});

/// Whether `value` is a syntactically valid email address.
///
/// The domain part (everything after the first `@`) is first mapped to
/// its ASCII-compatible (Punycode) form, so internationalized domains
/// such as `user@bücher.example` are accepted. A domain that fails IDN
/// mapping makes the address invalid.
///
/// Note: unlike [`is_valid_path`] and [`is_valid_file_name`], only empty
/// input is short-circuited here; whitespace-only input falls through to
/// the grammar, which rejects it.
///
/// # Example
///
/// ```rust
/// use data_validation_sdk::validation::input::is_valid_email_address;
///
/// assert!(is_valid_email_address("steve@mac.com"));
/// assert!(!is_valid_email_address("no-at-sign"));
/// assert!(!is_valid_email_address(""));
/// ```
pub fn is_valid_email_address(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }

    let normalized = match ascii_domain_form(value) {
        Some(normalized) => normalized,
        None => {
            debug!(value, "email rejected: domain failed IDN mapping");
            return false;
        }
    };

    EMAIL_REGEX.is_match(&normalized)
}

/// Rewrite the domain part (after the first `@`) to its ASCII form.
/// No `@` means there is no domain to map and the input passes through.
fn ascii_domain_form(value: &str) -> Option<String> {
    match value.split_once('@') {
        Some((local, domain)) => {
            let ascii = domain_to_ascii(domain).ok()?;
            Some(format!("{local}@{ascii}"))
        }
        None => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_path() {
        assert!(is_valid_path("c:\\"));
        assert!(is_valid_path("data/file.json"));
        assert!(is_valid_path("/var/log/app.log"));

        assert!(!is_valid_path(""));
        assert!(!is_valid_path("   "));
        assert!(!is_valid_path("data|file"));
        assert!(!is_valid_path("a\u{0}b"));

        // A string built only from the invalid set
        let all_invalid: String = INVALID_PATH_CHARS.iter().collect();
        assert!(!is_valid_path(&all_invalid));
    }

    #[test]
    fn test_is_valid_file_name() {
        assert!(is_valid_file_name("test.txt"));
        assert!(is_valid_file_name("report-2024.final.csv"));

        assert!(!is_valid_file_name(""));
        assert!(!is_valid_file_name("   "));
        assert!(!is_valid_file_name("dir/test.txt"));
        assert!(!is_valid_file_name("dir\\test.txt"));
        assert!(!is_valid_file_name("c:file"));

        let all_invalid: String = INVALID_FILE_NAME_CHARS.iter().collect();
        assert!(!is_valid_file_name(&all_invalid));
    }

    #[test]
    fn test_is_valid_email_address() {
        assert!(is_valid_email_address("steve@mac.com"));
        assert!(is_valid_email_address("first.last@sub.example.org"));
        assert!(is_valid_email_address("a@[192.168.0.1]"));
        assert!(is_valid_email_address("\"quoted local\"@example.com"));

        assert!(!is_valid_email_address(""));
        assert!(!is_valid_email_address("no-at-sign"));
        assert!(!is_valid_email_address("double..dot@example.com"));
        assert!(!is_valid_email_address(".leading@example.com"));
        assert!(!is_valid_email_address("trailing.@example.com"));
        assert!(!is_valid_email_address("user@nodot"));
        assert!(!is_valid_email_address("short.tld@example.a"));
    }

    #[test]
    fn test_email_idn_domain_is_mapped() {
        assert!(is_valid_email_address("user@bücher.example"));
        assert!(is_valid_email_address("user@münchen.de"));

        // Broken domains are invalid, not a panic
        assert!(!is_valid_email_address("user@exa mple.com"));
        assert!(!is_valid_email_address("user@xn--0.example"));
    }

    #[test]
    fn test_email_whitespace_only_fails_grammar() {
        // Whitespace-only input is not short-circuited; it fails the match
        assert!(!is_valid_email_address("   "));
    }
}
