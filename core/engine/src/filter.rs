//! FILENAME: core/engine/src/filter.rs
//! Single-field substring search over the record list.
//!
//! The view exposes one active search field at a time. Matching is a
//! case-insensitive substring test against that field only. Name
//! search additionally hides zero-stock records; searches on the
//! other fields do not. The asymmetry is observed behavior of the
//! production view and is kept as-is.

use serde::{Deserialize, Serialize};

use crate::record::EquipmentRecord;

/// Which record field the search term applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    #[default]
    Name,
    Id,
    Category,
    Service,
}

/// Returns the ordered subsequence of `records` whose selected field
/// contains `term`, case-insensitively. An empty term passes every
/// record, modulo the zero-quantity rule for name search.
///
/// Pure: same inputs always yield the same output.
pub fn filter_records<'a>(
    records: &'a [EquipmentRecord],
    field: SearchField,
    term: &str,
) -> Vec<&'a EquipmentRecord> {
    let term = term.to_lowercase();

    records
        .iter()
        .filter(|record| match field {
            SearchField::Id => record.id.to_string().contains(&term),
            SearchField::Category => optional_contains(&record.category_name, &term),
            SearchField::Service => optional_contains(&record.service_name, &term),
            SearchField::Name => {
                // Zero-stock items never appear in name search results.
                record.name.to_lowercase().contains(&term) && record.quantity > 0
            }
        })
        .collect()
}

/// Missing optional labels match like an empty string: every record
/// passes an empty term, none pass a non-empty one.
fn optional_contains(value: &Option<String>, term: &str) -> bool {
    value
        .as_deref()
        .unwrap_or("")
        .to_lowercase()
        .contains(term)
}
