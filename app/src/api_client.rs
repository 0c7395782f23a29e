//! FILENAME: app/src/api_client.rs
// PURPOSE: HTTP client for the external inventory API.
// CONTEXT: The server owns every business rule (stock decrements,
// referential integrity); this client only lists and deletes. The wire
// format keeps the server's French field names and is converted to the
// engine's record type at the boundary.

use serde::Deserialize;
use thiserror::Error;

use engine::EquipmentRecord;

/// Errors surfaced by the inventory API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("Erreur de configuration du client HTTP.")]
    Config(#[source] reqwest::Error),

    /// The request never produced a server response.
    #[error("Erreur réseau. Vérifiez votre connexion.")]
    Network(#[source] reqwest::Error),

    /// The server answered with a failure status.
    #[error("Erreur: {message}")]
    Server { status: u16, message: String },
}

/// An equipment record as the server serializes it.
#[derive(Debug, Clone, Deserialize)]
struct RawMateriel {
    id_materiel: u32,
    nom_materiel: String,
    quantite: u32,
    localisation: Option<String>,
    etat: Option<String>,
    nom_categorie: Option<String>,
    nom_service: Option<String>,
}

impl From<RawMateriel> for EquipmentRecord {
    fn from(raw: RawMateriel) -> Self {
        EquipmentRecord {
            id: raw.id_materiel,
            name: raw.nom_materiel,
            quantity: raw.quantite,
            location: raw.localisation,
            state: raw.etat,
            category_name: raw.nom_categorie,
            service_name: raw.nom_service,
        }
    }
}

/// Client for the `materiels` endpoints.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client against `base_url` (e.g. `http://localhost:3000/api`).
    /// Construction fails rather than falling back to a client without
    /// the request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(ApiError::Config)?;

        Ok(ApiClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// `GET /materiels` — the full equipment list.
    pub async fn fetch_materiels(&self) -> Result<Vec<EquipmentRecord>, ApiError> {
        let url = format!("{}/materiels", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::Network)?;

        if !response.status().is_success() {
            return Err(server_error(response, "Erreur serveur").await);
        }

        let raw: Vec<RawMateriel> = response.json().await.map_err(ApiError::Network)?;
        Ok(raw.into_iter().map(EquipmentRecord::from).collect())
    }

    /// `DELETE /materiels/{id}` — success removes the record server-side;
    /// on error the record is unchanged.
    pub async fn delete_materiel(&self, id: u32) -> Result<(), ApiError> {
        let url = format!("{}/materiels/{}", self.base_url, id);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(ApiError::Network)?;

        if !response.status().is_success() {
            return Err(server_error(response, "Impossible de supprimer ce matériel.").await);
        }

        Ok(())
    }
}

/// Builds a `Server` error from a failure response, preferring the
/// server-supplied `message` field when the body carries one.
async fn server_error(response: reqwest::Response, fallback: &str) -> ApiError {
    let status = response.status().as_u16();
    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| fallback.to_string());

    ApiError::Server { status, message }
}
