//! Text normalization used by both search passes

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("static pattern is valid"));

static TOKEN_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,|;/]+").expect("static pattern is valid"));

/// Lowercase, collapse every run of non `[a-z0-9]` characters to a single
/// space and trim. Missing values normalize to an empty string.
pub fn normalize_text(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };

    let lowered = value.to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lowered, " ")
        .trim()
        .to_string()
}

/// Split a compatibility field into tokens on runs of `,` `|` `;` `/`.
///
/// Consecutive separators count as one, but a leading or trailing separator
/// still yields an empty token at that end.
pub fn split_tokens(value: &str) -> Vec<&str> {
    TOKEN_SEPARATORS.split(value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_punctuation() {
        assert_eq!(normalize_text(Some("  iPhone-11,  Pro!! ")), "iphone 11 pro");
        assert_eq!(normalize_text(Some("Galaxy S9 / S9+")), "galaxy s9 s9");
    }

    #[test]
    fn test_normalize_missing_and_blank() {
        assert_eq!(normalize_text(None), "");
        assert_eq!(normalize_text(Some("")), "");
        assert_eq!(normalize_text(Some(" -- ")), "");
    }

    #[test]
    fn test_normalize_drops_non_ascii_letters() {
        // Lowercased non-ASCII letters fall outside [a-z0-9]
        assert_eq!(normalize_text(Some("Moto G5ü Plus")), "moto g5 plus");
    }

    #[test]
    fn test_split_tokens_collapses_separator_runs() {
        assert_eq!(split_tokens("A100;;B200||C300"), vec!["A100", "B200", "C300"]);
        assert_eq!(split_tokens("A100, B200 / C300"), vec!["A100", " B200 ", " C300"]);
    }

    #[test]
    fn test_split_tokens_edges() {
        assert_eq!(split_tokens("no separators"), vec!["no separators"]);
        assert_eq!(split_tokens(",A100"), vec!["", "A100"]);
    }
}
