//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for console integration tests.

use std::sync::Mutex;

use console_lib::{create_app_state, AppState, ConfirmPrompt, Notifier};
use engine::EquipmentRecord;

/// Test harness for creating and managing application state.
pub struct TestHarness {
    pub state: AppState,
}

impl TestHarness {
    /// Create a new harness with empty state.
    pub fn new() -> Self {
        TestHarness {
            state: create_app_state(),
        }
    }

    /// Create a harness pre-loaded with the inventory fixture.
    pub fn with_sample_data() -> Self {
        let harness = Self::new();
        harness.set_records(MaterielFixture::records());
        harness
    }

    /// Replace the record store contents.
    pub fn set_records(&self, records: Vec<EquipmentRecord>) {
        *self.state.records.lock().unwrap() = records;
    }

    /// Simulate a failed fetch so derived views are blocked.
    pub fn set_fetch_error(&self, message: &str) {
        *self.state.fetch_error.lock().unwrap() = Some(message.to_string());
    }
}

/// Build one equipment record with optional labels.
pub fn materiel(
    id: u32,
    name: &str,
    quantity: u32,
    category: Option<&str>,
    service: Option<&str>,
    state: Option<&str>,
) -> EquipmentRecord {
    let mut record = EquipmentRecord::new(id, name, quantity);
    record.category_name = category.map(str::to_string);
    record.service_name = service.map(str::to_string);
    record.state = state.map(str::to_string);
    record
}

/// Inventory fixture: 23 records across three categories and services,
/// one of them out of stock.
pub struct MaterielFixture;

impl MaterielFixture {
    pub fn records() -> Vec<EquipmentRecord> {
        let mut records = vec![
            materiel(1, "Ordinateur portable", 5, Some("Informatique"), Some("Comptabilité"), Some("bon")),
            materiel(2, "Imprimante laser", 2, Some("Informatique"), Some("RH"), Some("moyen")),
            materiel(3, "Bureau réglable", 4, Some("Mobilier"), Some("RH"), Some("bon")),
            materiel(4, "Chaise cassée", 0, Some("Mobilier"), Some("Comptabilité"), Some("mauvais")),
            materiel(5, "Vidéoprojecteur", 1, None, None, None),
        ];
        for i in 6..=23 {
            let category = ["Informatique", "Mobilier", "Fournitures"][(i % 3) as usize];
            let service = ["Comptabilité", "RH", "Direction"][(i % 3) as usize];
            let state = ["bon", "moyen", "mauvais"][(i % 3) as usize];
            records.push(materiel(
                i,
                &format!("Matériel {}", i),
                i % 7 + 1,
                Some(category),
                Some(service),
                Some(state),
            ));
        }
        records
    }

    /// Count of fixture records with stock, i.e. what an empty name
    /// search shows.
    pub fn in_stock_count() -> usize {
        Self::records().iter().filter(|r| r.quantity > 0).count()
    }
}

/// Confirmation stub with a fixed answer.
pub struct StubPrompt {
    pub accept: bool,
}

impl ConfirmPrompt for StubPrompt {
    fn confirm(&self, _title: &str, _text: &str) -> bool {
        self.accept
    }
}

/// Notifier that records every message for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    pub successes: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
