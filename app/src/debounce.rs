//! FILENAME: app/src/debounce.rs
// PURPOSE: Debounced search input.
// CONTEXT: A single pending-value slot overwritten on each keystroke.
// Each submission cancels the previously scheduled commit; only the
// value still pending after the quiet period reaches the filter, so
// intermediate keystrokes are never queued.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::commands;
use crate::AppState;

/// Quiet period before a pending search term is committed.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Coalesces keystrokes into at most one filter recomputation per
/// quiet period. The displayed input updates immediately on the UI
/// side; the committed term lags by the debounce delay.
pub struct SearchDebouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl SearchDebouncer {
    pub fn new() -> Self {
        Self::with_delay(SEARCH_DEBOUNCE)
    }

    /// A debouncer with a custom quiet period (shorter in tests).
    pub fn with_delay(delay: Duration) -> Self {
        SearchDebouncer {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedules `value` for commit after the quiet period, replacing
    /// any commit still pending.
    pub fn submit(&self, state: Arc<AppState>, value: String) {
        let mut pending = self.pending.lock().unwrap();
        if let Some(task) = pending.take() {
            task.abort();
        }

        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            commands::commit_search_term(&state, &value);
        }));
    }

    /// Drops any pending commit without running it.
    pub fn cancel(&self) {
        if let Some(task) = self.pending.lock().unwrap().take() {
            task.abort();
        }
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new()
    }
}
