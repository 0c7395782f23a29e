//! FILENAME: app/src/commands.rs
// PURPOSE: View-layer operations over the application state.
// CONTEXT: Every read command recomputes its projection in full from
// the record store; mutating commands (delete) go through the server
// first and never remove optimistically.

use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;

use serde::{Deserialize, Serialize};

use engine::{
    chart_for_key, compute_stats, filter_records, group_records, page_count, paginate,
    GroupKey, InventoryStats,
};
use exporter::{export_filename, save_report, ReportMode};

use crate::api_client::ApiClient;
use crate::view_types::{BucketView, ChartBundle, ListView, PageInfo, RecordRow};
use crate::{log_debug, log_enter_info, log_error, log_exit_info, log_info};
use crate::{AppState, DisplayMode};

// ============================================================================
// COLLABORATOR HOOKS
// ============================================================================

/// Blocking confirmation dialog shown before a destructive action.
/// Further input is blocked until the prompt resolves.
pub trait ConfirmPrompt {
    fn confirm(&self, title: &str, text: &str) -> bool;
}

/// Toast-style user notifications for action outcomes.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Result of a confirmation-gated delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

/// Row actions that route to peer screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordAction {
    /// "Affecter" — assignment creation screen.
    Assign,
    /// "Mouvement" — stock movement creation screen.
    Movement,
}

/// The route a row action navigates to, carrying the record id.
pub fn action_route(action: RecordAction, id: u32) -> String {
    match action {
        RecordAction::Assign => format!("/admin/ajout-affectation/{}", id),
        RecordAction::Movement => format!("/admin/ajout-mouvement/{}", id),
    }
}

// ============================================================================
// RECORD STORE
// ============================================================================

/// Fetches the equipment list and replaces the store wholesale.
///
/// A trigger while a fetch is already in flight is ignored and reports
/// the current record count. On failure the prior list is retained but
/// derived views are blocked until a retry succeeds.
pub async fn refresh_materiels(state: &AppState, api: &ApiClient) -> Result<usize, String> {
    if state.loading.swap(true, Ordering::SeqCst) {
        log_info!("CMD", "refresh_materiels ignored: fetch already in flight");
        let count = state.records.lock().unwrap().len();
        return Ok(count);
    }

    log_enter_info!("CMD", "refresh_materiels");
    let outcome = match api.fetch_materiels().await {
        Ok(records) => {
            let count = records.len();
            *state.records.lock().unwrap() = records;
            *state.fetch_error.lock().unwrap() = None;
            log_exit_info!("CMD", "refresh_materiels", "{} records", count);
            Ok(count)
        }
        Err(err) => {
            let message = err.to_string();
            log_error!("CMD", "refresh_materiels failed: {}", message);
            *state.fetch_error.lock().unwrap() = Some(message.clone());
            Err(message)
        }
    };
    state.loading.store(false, Ordering::SeqCst);
    outcome
}

/// While the last fetch failed, every derived view is blocked; the UI
/// renders the error with a retry affordance instead.
fn guard_fetch_error(state: &AppState) -> Result<(), String> {
    match state.fetch_error.lock().unwrap().as_ref() {
        Some(message) => Err(message.clone()),
        None => Ok(()),
    }
}

// ============================================================================
// DERIVED VIEWS
// ============================================================================

/// The renderable list for the current display state.
pub fn list_view(state: &AppState) -> Result<ListView, String> {
    guard_fetch_error(state)?;
    let records = state.records.lock().unwrap();
    let display = state.display.lock().unwrap().clone();

    let filtered = filter_records(&records, display.search_field, &display.search_term);
    let total_filtered = filtered.len();

    let view = match display.display_mode {
        DisplayMode::Global => {
            let count = page_count(total_filtered);
            let page = display.current_page.clamp(1, count);
            let rows = paginate(&filtered, page)
                .iter()
                .map(|r| RecordRow::from_record(r))
                .collect();
            ListView {
                mode: DisplayMode::Global,
                rows,
                buckets: Vec::new(),
                page: Some(PageInfo {
                    current_page: page,
                    page_count: count,
                    has_prev: page > 1,
                    has_next: page < count,
                }),
                total_filtered,
                empty: total_filtered == 0,
            }
        }
        mode => {
            let key = match mode {
                DisplayMode::Category => GroupKey::Category,
                _ => GroupKey::Service,
            };
            let buckets = group_records(&filtered, key)
                .into_iter()
                .map(|bucket| BucketView {
                    label: bucket.label,
                    rows: bucket
                        .records
                        .iter()
                        .map(|r| RecordRow::from_record(r))
                        .collect(),
                })
                .collect();
            ListView {
                mode,
                rows: Vec::new(),
                buckets,
                page: None,
                total_filtered,
                empty: total_filtered == 0,
            }
        }
    };

    Ok(view)
}

/// Statistics over the filtered set: global totals plus all three
/// breakdowns, independent of the displayed grouping mode.
pub fn stats_view(state: &AppState) -> Result<InventoryStats, String> {
    guard_fetch_error(state)?;
    let records = state.records.lock().unwrap();
    let display = state.display.lock().unwrap().clone();
    let filtered = filter_records(&records, display.search_field, &display.search_term);
    Ok(compute_stats(&filtered))
}

/// The three chart series, rebuilt from the current filtered set.
pub fn chart_data(state: &AppState) -> Result<ChartBundle, String> {
    let stats = stats_view(state)?;
    Ok(ChartBundle {
        category: chart_for_key(&stats, GroupKey::Category),
        service: chart_for_key(&stats, GroupKey::Service),
        state: chart_for_key(&stats, GroupKey::State),
    })
}

// ============================================================================
// DISPLAY STATE MUTATIONS
// ============================================================================

/// Switches the active search field. The current page is kept: only a
/// term commit or a mode switch resets it.
pub fn set_search_field(state: &AppState, field: engine::SearchField) {
    state.display.lock().unwrap().search_field = field;
}

/// Commits a debounced search term and resets to the first page.
pub fn commit_search_term(state: &AppState, term: &str) {
    log_debug!("CMD", "commit_search_term term={:?}", term);
    let mut display = state.display.lock().unwrap();
    display.search_term = term.to_string();
    display.current_page = 1;
}

/// Switches the display mode and resets to the first page.
pub fn set_display_mode(state: &AppState, mode: DisplayMode) {
    let mut display = state.display.lock().unwrap();
    display.display_mode = mode;
    display.current_page = 1;
}

/// Advances one page, clamped at the last page.
pub fn next_page(state: &AppState) -> usize {
    let records = state.records.lock().unwrap();
    let mut display = state.display.lock().unwrap();
    let filtered = filter_records(&records, display.search_field, &display.search_term);
    let count = page_count(filtered.len());
    display.current_page = (display.current_page + 1).min(count);
    display.current_page
}

/// Steps back one page, clamped at page 1.
pub fn prev_page(state: &AppState) -> usize {
    let mut display = state.display.lock().unwrap();
    display.current_page = display.current_page.saturating_sub(1).max(1);
    display.current_page
}

/// Toggles one statistics panel. Rendering only; computation is
/// unaffected.
pub fn toggle_stats_panel(state: &AppState, key: GroupKey) {
    let mut display = state.display.lock().unwrap();
    let panel = match key {
        GroupKey::Category => &mut display.stats_panels.category,
        GroupKey::Service => &mut display.stats_panels.service,
        GroupKey::State => &mut display.stats_panels.state,
    };
    *panel = !*panel;
}

// ============================================================================
// DELETE & EXPORT
// ============================================================================

/// Confirmation-gated delete.
///
/// On server rejection the local list is left unchanged (no optimistic
/// removal) and the notifier carries the error to the user.
pub async fn delete_materiel(
    state: &AppState,
    api: &ApiClient,
    id: u32,
    prompt: &dyn ConfirmPrompt,
    notifier: &dyn Notifier,
) -> Result<DeleteOutcome, String> {
    if !prompt.confirm(
        "Êtes-vous sûr ?",
        "Ce matériel sera définitivement supprimé.",
    ) {
        return Ok(DeleteOutcome::Cancelled);
    }

    log_enter_info!("CMD", "delete_materiel", "id={}", id);
    match api.delete_materiel(id).await {
        Ok(()) => {
            state.records.lock().unwrap().retain(|r| r.id != id);
            notifier.success("Le matériel a été supprimé avec succès.");
            log_exit_info!("CMD", "delete_materiel", "deleted id={}", id);
            Ok(DeleteOutcome::Deleted)
        }
        Err(err) => {
            let message = err.to_string();
            log_error!("CMD", "delete_materiel failed: {}", message);
            notifier.error(&message);
            Err(message)
        }
    }
}

/// Exports the currently selected display mode to a spreadsheet in
/// `output_dir`, returning the written path. The export covers the
/// whole filtered set, not just the visible page.
pub fn export_current_view(
    state: &AppState,
    output_dir: &Path,
    notifier: &dyn Notifier,
) -> Result<PathBuf, String> {
    guard_fetch_error(state)?;
    {
        let mut display = state.display.lock().unwrap();
        if display.exporting {
            return Err("Exportation déjà en cours.".to_string());
        }
        display.exporting = true;
    }

    let result = run_export(state, output_dir);
    state.display.lock().unwrap().exporting = false;

    match &result {
        Ok(path) => {
            log_info!("EXPORT", "wrote {:?}", path);
            notifier.success("Le fichier Excel a été généré avec succès.");
        }
        Err(err) => {
            log_error!("EXPORT", "failed: {}", err);
            notifier.error("Erreur lors de l'exportation Excel.");
        }
    }
    result
}

fn run_export(state: &AppState, output_dir: &Path) -> Result<PathBuf, String> {
    let records = state.records.lock().unwrap();
    let display = state.display.lock().unwrap().clone();

    let filtered = filter_records(&records, display.search_field, &display.search_term);
    let mode: ReportMode = display.display_mode.into();
    let path = output_dir.join(export_filename(mode));
    save_report(mode, &filtered, &path).map_err(|e| e.to_string())?;
    Ok(path)
}
