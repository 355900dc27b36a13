use compat_finder::{MatchRow, Table, search};

fn table(rows: &[(&str, Option<&str>)]) -> Table {
    Table::new(
        vec!["Model".to_string(), "Compatible Models".to_string()],
        rows.iter()
            .map(|(model, compat)| vec![Some(model.to_string()), compat.map(str::to_string)])
            .collect(),
    )
}

fn run(table: &Table, query: &str, split: bool) -> Vec<MatchRow> {
    let model = table.column("model").unwrap();
    let compat = table.column("compatible models").unwrap();
    search(table, &model, &compat, query, split)
}

fn row(model: &str, compat: &str) -> MatchRow {
    MatchRow {
        model: Some(model.to_string()),
        compat: Some(compat.to_string()),
    }
}

fn phones() -> Table {
    table(&[
        ("X1", Some("iPhone 8, iPhone 8 Plus")),
        ("X2", Some("Galaxy S9 / S9+")),
        ("X3", None),
        ("X4", Some("IPHONE X|iphone xs")),
        ("X1", Some("iPhone 8, iPhone 8 Plus")),
        ("X5", Some("A100;B200;C300")),
        ("X6", Some("A100;B2,00;C300")),
    ])
}

#[test]
fn test_end_to_end_scenario() {
    let t = table(&[
        ("X1", Some("iPhone 8, iPhone 8 Plus")),
        ("X2", Some("Galaxy S9 / S9+")),
    ]);

    assert_eq!(run(&t, "iphone 8", true), vec![row("X1", "iPhone 8, iPhone 8 Plus")]);
}

#[test]
fn test_search_is_idempotent() {
    let t = phones();
    for query in ["iphone", "s9", "B200", "8"] {
        for split in [true, false] {
            assert_eq!(run(&t, query, split), run(&t, query, split));
        }
    }
}

#[test]
fn test_results_have_no_duplicate_pairs() {
    let t = phones();
    for query in ["iphone", "a100", "0", "plus"] {
        let results = run(&t, query, true);
        for (i, a) in results.iter().enumerate() {
            assert!(!results[i + 1..].contains(a), "duplicate {:?} for {}", a, query);
        }
    }
}

#[test]
fn test_split_only_adds_rows() {
    let t = phones();
    for query in ["iphone", "s9+", "B200", "x", "c300"] {
        let without = run(&t, query, false);
        let with = run(&t, query, true);
        assert!(without.len() <= with.len());
        assert_eq!(&with[..without.len()], &without[..]);
    }
}

#[test]
fn test_case_insensitive() {
    let t = phones();
    for split in [true, false] {
        assert_eq!(run(&t, "IPHONE", split), run(&t, "iphone", split));
        assert_eq!(run(&t, "iPhone X", split), run(&t, "iphone x", split));
    }
}

#[test]
fn test_results_keep_table_order() {
    let t = phones();
    let models: Vec<_> = run(&t, "iphone", true)
        .into_iter()
        .map(|r| r.model.unwrap())
        .collect();
    assert_eq!(models, vec!["X1", "X4"]);
}

#[test]
fn test_normalization_collapses_punctuation() {
    let t = table(&[("X1", Some("iPhone-11, Pro"))]);
    assert_eq!(run(&t, "iphone 11 pro", false), vec![row("X1", "iPhone-11, Pro")]);
}

#[test]
fn test_token_isolation() {
    let t = table(&[("X5", Some("A100;B200;C300"))]);
    assert_eq!(run(&t, "B200", true).len(), 1);
    assert_eq!(run(&t, "B200", false).len(), 1);

    let t = table(&[("X6", Some("A100;B2,00;C300"))]);
    assert!(run(&t, "B200", true).is_empty());
    assert!(run(&t, "B200", false).is_empty());
}

#[test]
fn test_missing_compat_never_returned() {
    let t = phones();
    for query in ["x3", "nan", "none", "a", "!", " "] {
        assert!(
            run(&t, query, true).iter().all(|r| r.model.as_deref() != Some("X3")),
            "X3 matched {:?}",
            query
        );
    }
}

#[test]
fn test_no_match_is_empty() {
    let t = phones();
    assert!(run(&t, "pixel", true).is_empty());
    assert!(run(&t, "pixel", false).is_empty());
}

#[test]
fn test_query_is_literal_text() {
    let t = table(&[("X1", Some("Moto G (5) Plus")), ("X2", Some("Moto G5"))]);
    assert_eq!(run(&t, "g (5)", false), vec![row("X1", "Moto G (5) Plus")]);
    assert!(run(&t, r"g\d", true).is_empty());
}

#[test]
fn test_whitespace_cell_is_text_not_missing() {
    let t = table(&[("X1", Some("   ")), ("X2", None)]);
    assert_eq!(run(&t, " ", false), vec![row("X1", "   ")]);
}
