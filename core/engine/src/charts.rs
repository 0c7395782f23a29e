//! FILENAME: core/engine/src/charts.rs
//! Chart-ready projections of the quantity breakdowns.
//!
//! Each grouping key renders as a fixed chart kind: category as a pie,
//! service as a bar chart, state as a doughnut. A series is a label
//! array with a parallel numeric value array plus the colors the view
//! paints with. Series are rebuilt from the statistics on every
//! filtered-set change; nothing here is cached.

use serde::{Deserialize, Serialize};

use crate::grouping::GroupKey;
use crate::stats::{InventoryStats, QuantityBreakdown};

/// Palette for the category pie chart.
const CATEGORY_PALETTE: &[&str] = &[
    "#FF6B6B", "#4ECDC4", "#FFD93D", "#6AB04C", "#A66CFF", "#FF9F40",
];

/// Single fill color for the service bar chart.
const SERVICE_BAR_COLOR: &[&str] = &["#4B9CFF"];

/// Palette for the state doughnut chart.
const STATE_PALETTE: &[&str] = &["#48BB78", "#ECC94B", "#F56565", "#A0AEC0"];

/// Supported chart renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Pie,
    Bar,
    Doughnut,
}

/// A renderable dataset: labels and values are index-parallel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub kind: ChartKind,

    /// Legend title for kinds that display one (the service bar).
    pub dataset_label: Option<String>,

    pub labels: Vec<String>,
    pub values: Vec<u64>,

    /// Background colors, cycled when there are more labels than colors.
    pub colors: Vec<String>,
}

/// Projects the breakdown for `key` into its chart series.
pub fn chart_for_key(stats: &InventoryStats, key: GroupKey) -> ChartSeries {
    let (kind, dataset_label, palette) = match key {
        GroupKey::Category => (ChartKind::Pie, None, CATEGORY_PALETTE),
        GroupKey::Service => (
            ChartKind::Bar,
            Some("Quantité par service".to_string()),
            SERVICE_BAR_COLOR,
        ),
        GroupKey::State => (ChartKind::Doughnut, None, STATE_PALETTE),
    };
    project(stats.breakdown(key), kind, dataset_label, palette)
}

fn project(
    breakdown: &[QuantityBreakdown],
    kind: ChartKind,
    dataset_label: Option<String>,
    palette: &[&str],
) -> ChartSeries {
    ChartSeries {
        kind,
        dataset_label,
        labels: breakdown.iter().map(|e| e.label.clone()).collect(),
        values: breakdown.iter().map(|e| e.quantity).collect(),
        colors: breakdown
            .iter()
            .enumerate()
            .map(|(i, _)| palette[i % palette.len()].to_string())
            .collect(),
    }
}
