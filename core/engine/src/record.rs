//! FILENAME: core/engine/src/record.rs
//! The equipment record model.
//!
//! Records are immutable snapshots of the server's inventory state,
//! one entry per item lot. The server resolves the category/service
//! foreign references to denormalized labels before sending; missing
//! labels are normalized to the sentinel on display, never stored.

use serde::{Deserialize, Serialize};

/// Sentinel label used wherever an optional field is absent.
pub const UNSPECIFIED_LABEL: &str = "Non spécifié";

/// A single equipment record as reported by the inventory server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRecord {
    /// Unique identifier.
    pub id: u32,

    /// Display name, non-empty.
    pub name: String,

    /// Authoritative stock count as last reported by the server.
    pub quantity: u32,

    /// Free-text storage location.
    pub location: Option<String>,

    /// Condition label (e.g. "bon", "moyen", "mauvais").
    pub state: Option<String>,

    /// Denormalized category label resolved by the server.
    pub category_name: Option<String>,

    /// Denormalized service label resolved by the server.
    pub service_name: Option<String>,
}

impl EquipmentRecord {
    /// Creates a record with the required fields; optional labels unset.
    pub fn new(id: u32, name: impl Into<String>, quantity: u32) -> Self {
        EquipmentRecord {
            id,
            name: name.into(),
            quantity,
            location: None,
            state: None,
            category_name: None,
            service_name: None,
        }
    }

    /// Location label with sentinel normalization.
    pub fn location_label(&self) -> &str {
        label_or_unspecified(&self.location)
    }

    /// State label with sentinel normalization.
    pub fn state_label(&self) -> &str {
        label_or_unspecified(&self.state)
    }

    /// Category label with sentinel normalization.
    pub fn category_label(&self) -> &str {
        label_or_unspecified(&self.category_name)
    }

    /// Service label with sentinel normalization.
    pub fn service_label(&self) -> &str {
        label_or_unspecified(&self.service_name)
    }
}

/// Normalizes an optional label: `None` and empty strings both map to
/// the sentinel, matching how the view treats falsy server values.
pub fn label_or_unspecified(value: &Option<String>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => UNSPECIFIED_LABEL,
    }
}
