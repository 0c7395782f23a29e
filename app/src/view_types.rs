//! FILENAME: app/src/view_types.rs
// PURPOSE: Shared type definitions for the view layer.
// CONTEXT: All structs use camelCase serialization for frontend
// interoperability. These are render-ready projections: optional
// record fields arrive here already normalized to the sentinel.

use serde::{Deserialize, Serialize};

use engine::{ChartSeries, EquipmentRecord};

use crate::DisplayMode;

/// One table row, every cell ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRow {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    pub location: String,
    pub state: String,
    pub category: String,
    pub service: String,
}

impl RecordRow {
    pub fn from_record(record: &EquipmentRecord) -> Self {
        RecordRow {
            id: record.id,
            name: record.name.clone(),
            quantity: record.quantity,
            location: record.location_label().to_string(),
            state: record.state_label().to_string(),
            category: record.category_label().to_string(),
            service: record.service_label().to_string(),
        }
    }
}

/// One rendered bucket in the grouped modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketView {
    pub label: String,
    pub rows: Vec<RecordRow>,
}

/// Pagination summary for the global mode footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: usize,
    pub page_count: usize,
    /// False at the first page; the "Précédent" button disables.
    pub has_prev: bool,
    /// False at the last page; the "Suivant" button disables.
    pub has_next: bool,
}

/// The full renderable list view for the current display state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    pub mode: DisplayMode,

    /// Current page of rows; populated in global mode only.
    pub rows: Vec<RecordRow>,

    /// Bucketed rows; populated in the grouped modes only.
    pub buckets: Vec<BucketView>,

    /// Pagination footer; present in global mode only.
    pub page: Option<PageInfo>,

    /// Size of the whole filtered set, across all pages and buckets.
    pub total_filtered: usize,

    /// True when the filtered set is empty ("Aucun matériel trouvé").
    pub empty: bool,
}

/// The three chart series, always produced together so the detail
/// panel stays synchronized with the statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBundle {
    pub category: ChartSeries,
    pub service: ChartSeries,
    pub state: ChartSeries,
}
