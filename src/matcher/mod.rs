//! Compatibility search over a loaded table
//!
//! A search runs up to two passes over the compatibility column:
//! - whole field: the raw field contains the query (case-insensitive), or the
//!   normalized field contains the normalized query
//! - per token (only with `split`): the same test applied to each
//!   `,` `|` `;` `/` separated token of the raw field
//!
//! Rows from the token pass are appended after the whole-field rows and the
//! combined result holds each `(model, compat)` pair once.

pub mod normalize;

use log::debug;
use std::collections::HashSet;

use crate::table::{ColumnRef, Table};

pub use normalize::{normalize_text, split_tokens};

/// One result row, projected onto the model and compatibility columns
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchRow {
    pub model: Option<String>,
    pub compat: Option<String>,
}

/// A query prepared for matching: lowercased raw form plus normalized form
#[derive(Debug, Clone)]
pub struct Query {
    raw: String,
    normalized: String,
}

impl Query {
    pub fn new(query: &str) -> Self {
        Self {
            raw: query.to_lowercase(),
            normalized: normalize_text(Some(query)),
        }
    }

    /// Whether `text` matches this query, raw or normalized. A query with
    /// no letters or digits normalizes to `""` and so matches any text.
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.raw)
            || normalize_text(Some(text)).contains(&self.normalized)
    }

    /// Empty tokens (from leading or trailing separators) never match.
    fn matches_any_token(&self, text: &str) -> bool {
        split_tokens(text)
            .into_iter()
            .filter(|token| !token.is_empty())
            .any(|token| self.matches(token))
    }
}

/// Search `table` for rows whose compatibility field matches `query`.
///
/// Callers must not pass an empty query. Rows with no compatibility value
/// never match.
pub fn search(
    table: &Table,
    model: &ColumnRef,
    compat: &ColumnRef,
    query: &str,
    split: bool,
) -> Vec<MatchRow> {
    let query = Query::new(query);
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    collect_matches(
        table,
        model,
        compat,
        |text| query.matches(text),
        &mut seen,
        &mut results,
    );
    let whole_field = results.len();

    if split {
        collect_matches(
            table,
            model,
            compat,
            |text| query.matches_any_token(text),
            &mut seen,
            &mut results,
        );
    }

    debug!(
        "Search for {:?} (split={}): {} whole-field, {} extra from tokens",
        query.raw,
        split,
        whole_field,
        results.len() - whole_field
    );

    results
}

/// Append rows whose compatibility value satisfies `matches`, skipping pairs
/// already in `seen`.
fn collect_matches(
    table: &Table,
    model: &ColumnRef,
    compat: &ColumnRef,
    matches: impl Fn(&str) -> bool,
    seen: &mut HashSet<MatchRow>,
    results: &mut Vec<MatchRow>,
) {
    for (model_value, compat_value) in table.project(model, compat) {
        let Some(compat_value) = compat_value else {
            continue;
        };
        if !matches(compat_value) {
            continue;
        }

        let row = MatchRow {
            model: model_value.map(str::to_string),
            compat: Some(compat_value.to_string()),
        };
        if seen.insert(row.clone()) {
            results.push(row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, Option<&str>)]) -> Table {
        Table::new(
            vec!["model".to_string(), "compatible".to_string()],
            rows.iter()
                .map(|(m, c)| vec![Some(m.to_string()), c.map(str::to_string)])
                .collect(),
        )
    }

    fn run(table: &Table, query: &str, split: bool) -> Vec<MatchRow> {
        let model = table.column("model").unwrap();
        let compat = table.column("compatible").unwrap();
        search(table, &model, &compat, query, split)
    }

    fn models(rows: &[MatchRow]) -> Vec<&str> {
        rows.iter().filter_map(|r| r.model.as_deref()).collect()
    }

    #[test]
    fn test_query_matches_raw_and_normalized() {
        let query = Query::new("iphone 11 pro");
        assert!(query.matches("iPhone 11 Pro Max"));
        assert!(query.matches("iPhone-11, Pro"));
        assert!(!query.matches("iPhone 11"));
    }

    #[test]
    fn test_substring_not_token_equality() {
        let t = table(&[("X1", Some("iPhone 8080"))]);
        assert_eq!(models(&run(&t, "80", false)), vec!["X1"]);
        assert_eq!(models(&run(&t, "80", true)), vec!["X1"]);
    }

    #[test]
    fn test_normalized_whole_field_match() {
        let t = table(&[("X1", Some("iPhone-11, Pro"))]);
        assert_eq!(models(&run(&t, "iphone 11 pro", false)), vec!["X1"]);
    }

    #[test]
    fn test_missing_compat_never_matches() {
        let t = table(&[("X1", None), ("X2", Some(""))]);
        assert!(run(&t, "a", true).is_empty());
        assert!(run(&t, "!!!", true).is_empty());
    }

    #[test]
    fn test_query_without_letters_or_digits_matches_every_value() {
        let t = table(&[("X1", Some("A10, A20")), ("X2", Some("iPhone 8")), ("X3", None)]);
        assert_eq!(models(&run(&t, "!!!", false)), vec!["X1", "X2"]);
        assert_eq!(models(&run(&t, "-", true)), vec!["X1", "X2"]);
        assert_eq!(models(&run(&t, "  ", true)), vec!["X1", "X2"]);
    }

    #[test]
    fn test_empty_tokens_never_match() {
        let query = Query::new("!!!");
        assert!(!query.matches_any_token(","));
        assert!(query.matches_any_token(",A10"));
    }

    #[test]
    fn test_separator_inside_query_text_does_not_match() {
        // no single token of X1 contains "b200", raw or normalized
        let t = table(&[("X1", Some("A100;B2,00;C300")), ("X2", Some("B200"))]);
        assert_eq!(models(&run(&t, "B200", true)), vec!["X2"]);
        assert_eq!(models(&run(&t, "B200", false)), vec!["X2"]);
    }

    #[test]
    fn test_duplicate_pairs_collapse() {
        let t = table(&[
            ("X1", Some("Galaxy S9")),
            ("X1", Some("Galaxy S9")),
            ("X2", Some("Galaxy S9")),
        ]);
        assert_eq!(models(&run(&t, "galaxy", true)), vec!["X1", "X2"]);
    }
}
