//! FILENAME: app/src/lib.rs
// PURPOSE: Main library entry point for the equipment console.
// CONTEXT: Owns the record store and the ephemeral view state; every
// derived structure (filtered list, buckets, stats, charts, pages) is
// recomputed from these on demand and never written back.

use std::sync::atomic::AtomicBool;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use engine::{EquipmentRecord, SearchField};
use exporter::ReportMode;

pub mod api_client;
pub mod commands;
pub mod debounce;
pub mod logging;
pub mod prefs;
pub mod view_types;

pub use api_client::{ApiClient, ApiError};
pub use commands::{action_route, ConfirmPrompt, DeleteOutcome, Notifier, RecordAction};
pub use debounce::{SearchDebouncer, SEARCH_DEBOUNCE};
pub use logging::{init_log_file, next_seq, write_log};
pub use prefs::{JsonFileStore, KeyValueStore, UiPrefs};
pub use view_types::{BucketView, ChartBundle, ListView, PageInfo, RecordRow};

// ============================================================================
// DISPLAY STATE
// ============================================================================

/// How the filtered list is laid out on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum DisplayMode {
    /// Ungrouped, paginated table.
    #[default]
    Global,
    /// One table per category bucket.
    Category,
    /// One table per service bucket.
    Service,
}

impl From<DisplayMode> for ReportMode {
    fn from(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Global => ReportMode::Global,
            DisplayMode::Category => ReportMode::ByCategory,
            DisplayMode::Service => ReportMode::ByService,
        }
    }
}

/// Expand/collapse flags for the three statistics panels. Collapse
/// state affects rendering only, never computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatsPanels {
    pub category: bool,
    pub service: bool,
    pub state: bool,
}

/// Ephemeral view state. Initialized on mount, mutated by user
/// interaction, discarded on navigation away; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    pub search_field: SearchField,
    pub search_term: String,
    pub display_mode: DisplayMode,
    /// 1-based page number, meaningful in global mode only.
    pub current_page: usize,
    /// True while an export is being produced.
    pub exporting: bool,
    pub stats_panels: StatsPanels,
}

impl Default for DisplayState {
    fn default() -> Self {
        DisplayState {
            search_field: SearchField::Name,
            search_term: String::new(),
            display_mode: DisplayMode::Global,
            current_page: 1,
            exporting: false,
            stats_panels: StatsPanels::default(),
        }
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Shared application state.
///
/// The record store exclusively owns the authoritative list; a refresh
/// replaces it wholesale. `loading` gates concurrent fetches: a second
/// trigger while one is in flight is ignored.
pub struct AppState {
    pub records: Mutex<Vec<EquipmentRecord>>,
    pub display: Mutex<DisplayState>,
    pub loading: AtomicBool,
    /// Last fetch failure; while set, derived views are blocked and
    /// the UI offers a retry affordance.
    pub fetch_error: Mutex<Option<String>>,
}

/// Creates the initial application state.
pub fn create_app_state() -> AppState {
    AppState {
        records: Mutex::new(Vec::new()),
        display: Mutex::new(DisplayState::default()),
        loading: AtomicBool::new(false),
        fetch_error: Mutex::new(None),
    }
}
