//! FILENAME: core/engine/src/lib.rs
//! Equipment list data-shaping engine.
//!
//! This crate holds the pure, recomputable projections applied to the
//! flat equipment list fetched from the inventory API. It performs no
//! I/O: every function maps inputs to outputs deterministically so the
//! application layer can re-run the whole pipeline on any state change.
//!
//! Layers:
//! - `record`: The equipment record model and label normalization
//! - `filter`: Single-field substring search over the record list
//! - `grouping`: Partitioning the filtered list into labelled buckets
//! - `stats`: Global totals and per-key quantity breakdowns
//! - `paginate`: Fixed-size page windows for the ungrouped view
//! - `charts`: Label/value series for pie, bar and doughnut rendering

pub mod record;
pub mod filter;
pub mod grouping;
pub mod stats;
pub mod paginate;
pub mod charts;

pub use record::{EquipmentRecord, UNSPECIFIED_LABEL};
pub use filter::{filter_records, SearchField};
pub use grouping::{group_records, GroupBucket, GroupKey};
pub use stats::{compute_stats, InventoryStats, QuantityBreakdown};
pub use paginate::{page_count, paginate, PAGE_SIZE};
pub use charts::{chart_for_key, ChartKind, ChartSeries};
