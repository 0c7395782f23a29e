//! FILENAME: core/engine/src/grouping.rs
//! Partitioning the filtered list into labelled buckets.
//!
//! A bucket maps one label (category, service or state value, or the
//! sentinel when absent) to the ordered subset of records sharing it.
//! Buckets partition the filtered set exactly: every record lands in
//! exactly one bucket and the union of buckets equals the input.
//! Label order follows first encounter in the filtered list.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::record::{label_or_unspecified, EquipmentRecord};

/// The record field the filtered list is partitioned by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupKey {
    Category,
    Service,
    State,
}

impl GroupKey {
    /// The grouping label of `record` under this key, sentinel-normalized.
    pub fn label_of<'a>(&self, record: &'a EquipmentRecord) -> &'a str {
        match self {
            GroupKey::Category => label_or_unspecified(&record.category_name),
            GroupKey::Service => label_or_unspecified(&record.service_name),
            GroupKey::State => label_or_unspecified(&record.state),
        }
    }
}

/// One named partition of the filtered record set.
#[derive(Debug, Clone)]
pub struct GroupBucket<'a> {
    /// The shared label, or the sentinel for records without one.
    pub label: String,

    /// Records in this bucket, in filtered-list order.
    pub records: Vec<&'a EquipmentRecord>,
}

/// Partitions `filtered` into buckets keyed by `key`.
///
/// Buckets come back in first-encounter order of their labels, not
/// sorted; the view renders them in exactly this order.
pub fn group_records<'a>(
    filtered: &[&'a EquipmentRecord],
    key: GroupKey,
) -> Vec<GroupBucket<'a>> {
    let mut buckets: Vec<GroupBucket<'a>> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();

    for record in filtered {
        let label = key.label_of(record);
        let slot = *index.entry(label.to_string()).or_insert_with(|| {
            buckets.push(GroupBucket {
                label: label.to_string(),
                records: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[slot].records.push(record);
    }

    buckets
}
