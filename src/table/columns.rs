//! Column auto-detection and name suggestions

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use log::debug;

use super::{ColumnRef, Table};

/// Result of guessing which columns hold the model and compatibility data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectedColumns {
    pub model: Option<ColumnRef>,
    pub compat: Option<ColumnRef>,
}

fn is_compat_header(header: &str) -> bool {
    // "compatible" contains "compat" as well
    header.contains("compat")
}

/// Guess the model and compatibility columns from the (normalized) headers.
///
/// The first header mentioning `compat` is the compatibility column. The
/// first header mentioning `model` that is not itself a compatibility
/// candidate is the model column.
pub fn detect_columns(table: &Table) -> DetectedColumns {
    let headers = table.headers();

    let compat = headers
        .iter()
        .position(|h| is_compat_header(h))
        .and_then(|index| table.column_at(index));

    let model = headers
        .iter()
        .position(|h| h.contains("model") && !is_compat_header(h))
        .and_then(|index| table.column_at(index));

    debug!(
        "Detected columns: model={:?}, compat={:?}",
        model.as_ref().map(ColumnRef::name),
        compat.as_ref().map(ColumnRef::name)
    );

    DetectedColumns { model, compat }
}

/// Best fuzzy match for `name` among `headers`, if any header matches at all.
pub(crate) fn closest_header<'a>(name: &str, headers: &'a [String]) -> Option<&'a str> {
    if name.is_empty() {
        return None;
    }

    let matcher = SkimMatcherV2::default();
    headers
        .iter()
        .filter_map(|header| {
            matcher
                .fuzzy_match(header, name)
                .map(|score| (header.as_str(), score))
        })
        .max_by_key(|(_, score)| *score)
        .map(|(header, _)| header)
}
