//! Backend collaborators: venue lookup and seat-map read/create/update.
//!
//! The editor core consumes a REST-style JSON API but never defines its
//! routes; [`Backend`] is the seam, [`HttpBackend`] the production
//! implementation over `reqwest`. Tests substitute an in-memory `Backend`.
//!
//! ERROR HANDLING
//! ==============
//! Backend rejections carry the backend's own message (and optional
//! field-level errors) upward unchanged as [`ApiError::Rejected`]. There are
//! no retries at this layer.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::wire::{CreateSeatMapRequest, SeatMapDetails, UpdateSeatMapRequest};

// =============================================================================
// TYPES
// =============================================================================

/// A venue as returned by the venue lookup endpoint. Read-only from the
/// editor's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub address: String,
}

/// Field-level detail attached to a backend validation rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Error body shape shared by all backend endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

/// Failures of backend calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),
    /// The backend rejected the request; message and field errors are the
    /// backend's verbatim.
    #[error("{message}")]
    Rejected { message: String, errors: Vec<FieldError> },
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
}

// =============================================================================
// SEAM
// =============================================================================

/// The remote ticketing backend as seen by the editor core.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Look up a venue for display/routing.
    async fn fetch_venue(&self, venue_id: &str) -> Result<Venue, ApiError>;

    /// Read full seat-map details, or [`ApiError::NotFound`].
    async fn fetch_seat_map(&self, map_id: &str) -> Result<SeatMapDetails, ApiError>;

    /// Create a seat map, returning the persisted entity with backend ids.
    async fn create_seat_map(&self, req: &CreateSeatMapRequest) -> Result<SeatMapDetails, ApiError>;

    /// Full-replace update, returning the reconciled entity.
    async fn update_seat_map(
        &self,
        map_id: &str,
        req: &UpdateSeatMapRequest,
    ) -> Result<SeatMapDetails, ApiError>;
}

// =============================================================================
// HTTP IMPLEMENTATION
// =============================================================================

/// `Backend` over HTTP against a base URL (e.g. `https://api.example.com`).
#[derive(Clone)]
pub struct HttpBackend {
    base_url: String,
    http: reqwest::Client,
}

impl HttpBackend {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, http: reqwest::Client::new() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Decode a response, mapping non-success statuses onto [`ApiError`].
    async fn decode<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
        what: &str,
    ) -> Result<T, ApiError> {
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(what.to_string()));
        }
        if !status.is_success() {
            return match resp.json::<ErrorBody>().await {
                Ok(body) => Err(ApiError::Rejected { message: body.message, errors: body.errors }),
                Err(_) => Err(ApiError::Rejected {
                    message: format!("{what}: backend returned {status}"),
                    errors: Vec::new(),
                }),
            };
        }
        Ok(resp.json::<T>().await?)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn fetch_venue(&self, venue_id: &str) -> Result<Venue, ApiError> {
        let resp = self.http.get(self.url(&format!("/api/venues/{venue_id}"))).send().await?;
        Self::decode(resp, venue_id).await
    }

    async fn fetch_seat_map(&self, map_id: &str) -> Result<SeatMapDetails, ApiError> {
        let resp = self.http.get(self.url(&format!("/api/seat-maps/{map_id}"))).send().await?;
        Self::decode(resp, map_id).await
    }

    async fn create_seat_map(&self, req: &CreateSeatMapRequest) -> Result<SeatMapDetails, ApiError> {
        let resp = self.http.post(self.url("/api/seat-maps")).json(req).send().await?;
        Self::decode(resp, &req.name).await
    }

    async fn update_seat_map(
        &self,
        map_id: &str,
        req: &UpdateSeatMapRequest,
    ) -> Result<SeatMapDetails, ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/api/seat-maps/{map_id}")))
            .json(req)
            .send()
            .await?;
        Self::decode(resp, map_id).await
    }
}
