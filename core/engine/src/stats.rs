//! FILENAME: core/engine/src/stats.rs
//! Global totals and per-key quantity breakdowns.
//!
//! All three breakdowns (category, service, state) are computed on
//! every pass regardless of which grouping mode the view currently
//! displays: the statistics panels show them simultaneously, and
//! keeping them independent projections lets each be validated on its
//! own. Sums are exact integer arithmetic over the record quantities.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::grouping::GroupKey;
use crate::record::EquipmentRecord;

/// One label and the summed quantity of the records carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityBreakdown {
    pub label: String,
    pub quantity: u64,
}

/// Aggregate statistics over the filtered record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    /// Number of filtered records.
    pub total_records: usize,

    /// Sum of `quantity` across all filtered records, zeros included.
    pub total_quantity: u64,

    pub by_category: Vec<QuantityBreakdown>,
    pub by_service: Vec<QuantityBreakdown>,
    pub by_state: Vec<QuantityBreakdown>,
}

impl InventoryStats {
    /// The breakdown for one grouping key.
    pub fn breakdown(&self, key: GroupKey) -> &[QuantityBreakdown] {
        match key {
            GroupKey::Category => &self.by_category,
            GroupKey::Service => &self.by_service,
            GroupKey::State => &self.by_state,
        }
    }
}

/// Computes the full statistics block for the filtered set.
pub fn compute_stats(filtered: &[&EquipmentRecord]) -> InventoryStats {
    InventoryStats {
        total_records: filtered.len(),
        total_quantity: filtered.iter().map(|r| u64::from(r.quantity)).sum(),
        by_category: sum_by_key(filtered, GroupKey::Category),
        by_service: sum_by_key(filtered, GroupKey::Service),
        by_state: sum_by_key(filtered, GroupKey::State),
    }
}

/// Label → summed quantity, labels in first-encounter order.
fn sum_by_key(filtered: &[&EquipmentRecord], key: GroupKey) -> Vec<QuantityBreakdown> {
    let mut entries: Vec<QuantityBreakdown> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();

    for record in filtered {
        let label = key.label_of(record);
        let slot = *index.entry(label.to_string()).or_insert_with(|| {
            entries.push(QuantityBreakdown {
                label: label.to_string(),
                quantity: 0,
            });
            entries.len() - 1
        });
        entries[slot].quantity += u64::from(record.quantity);
    }

    entries
}
