//! Editor session controller: sequences edits, saves, and navigation.
//!
//! DESIGN
//! ======
//! One `EditorSession` owns the aggregate under edit plus the designer's
//! tool/selection state, constructed fresh per session and discarded on
//! navigation. Saving is split into `begin_save` (guard + payload build)
//! and `finish_save` (apply the backend result), which the async [`save`]
//! composes; the split keeps the single-in-flight guard observable to the
//! host event loop that drives it.
//!
//! ERROR HANDLING
//! ==============
//! Local validation failures never enter the `Saving` phase. A backend
//! rejection returns the session to `Editing` with every unsaved edit
//! intact, so the user can fix and resubmit. The aggregate is only
//! rewritten from a fully successful, backend-confirmed response.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tracing::{debug, info, warn};

use crate::api::{ApiError, Backend};
use crate::designer::DesignerState;
use crate::map::{MapError, SeatMap};
use crate::wire::{self, CreateSeatMapRequest, SeatMapDetails, UpdateSeatMapRequest};

// =============================================================================
// TYPES
// =============================================================================

/// Lifecycle phase of one editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Accepting edits; no persistence call outstanding.
    Editing,
    /// A save round trip is in flight; further saves are rejected.
    Saving,
    /// The last save succeeded; the host should navigate away.
    Saved,
}

/// The request a save attempt will send, decided by whether the map has a
/// backend id yet.
#[derive(Debug, Clone)]
pub enum SavePlan {
    Create(CreateSeatMapRequest),
    Update { map_id: String, req: UpdateSeatMapRequest },
}

/// Successful save result for the host to act on: navigate to the owning
/// venue's seat-map list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub map_id: String,
    pub venue_id: String,
}

/// Failures of the save sequence.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("a save is already in flight")]
    SaveInFlight,
    #[error("save completed after the session moved on; result discarded")]
    StaleCompletion,
    #[error(transparent)]
    Invalid(#[from] MapError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

// =============================================================================
// SESSION
// =============================================================================

/// One seat-map editing session: the aggregate, the designer state, and the
/// save lifecycle.
#[derive(Debug)]
pub struct EditorSession {
    map: SeatMap,
    designer: DesignerState,
    phase: SessionPhase,
}

impl EditorSession {
    /// Start a session for a brand new map (create mode).
    #[must_use]
    pub fn create(venue_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_map(SeatMap::new(venue_id, name))
    }

    /// Start a session from backend details (edit mode).
    #[must_use]
    pub fn edit(details: SeatMapDetails) -> Self {
        Self::with_map(wire::from_details(details))
    }

    /// Fetch details from the backend and start an edit session.
    ///
    /// # Errors
    ///
    /// Propagates the collaborator's [`ApiError`], including `NotFound`.
    pub async fn load(backend: &dyn Backend, map_id: &str) -> Result<Self, ApiError> {
        let details = backend.fetch_seat_map(map_id).await?;
        debug!(map_id, sections = details.sections.len(), "seat map loaded for editing");
        Ok(Self::edit(details))
    }

    fn with_map(map: SeatMap) -> Self {
        Self { map, designer: DesignerState::new(), phase: SessionPhase::Editing }
    }

    // --- Queries ---

    #[must_use]
    pub fn map(&self) -> &SeatMap {
        &self.map
    }

    /// Mutable aggregate access for editor interactions.
    pub fn map_mut(&mut self) -> &mut SeatMap {
        &mut self.map
    }

    #[must_use]
    pub fn designer(&self) -> &DesignerState {
        &self.designer
    }

    pub fn designer_mut(&mut self) -> &mut DesignerState {
        &mut self.designer
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    // --- Save sequence ---

    /// Validate the aggregate, build the request, and enter `Saving`.
    ///
    /// Exactly one plan may be outstanding at a time; the host sends it and
    /// hands the result to [`Self::finish_save`].
    ///
    /// # Errors
    ///
    /// `SaveInFlight` while a previous plan is outstanding; `Invalid` when
    /// the aggregate fails local validation (the session stays in its
    /// current phase and no request is built).
    pub fn begin_save(&mut self) -> Result<SavePlan, SaveError> {
        if self.phase == SessionPhase::Saving {
            return Err(SaveError::SaveInFlight);
        }
        let plan = match self.map.id() {
            Some(id) => SavePlan::Update {
                map_id: id.to_string(),
                req: wire::to_update_payload(&self.map)?,
            },
            None => SavePlan::Create(wire::to_create_payload(&self.map)?),
        };
        self.phase = SessionPhase::Saving;
        Ok(plan)
    }

    /// Apply the backend's answer to an outstanding save.
    ///
    /// On success the aggregate is replaced wholesale with the confirmed
    /// response (backend-issued ids included; the decorative stage, which is
    /// never persisted, is carried over) and the session becomes `Saved`.
    /// On rejection the session returns to `Editing` with all edits intact.
    ///
    /// # Errors
    ///
    /// `StaleCompletion` when no save is in flight (e.g. the session was
    /// reused after navigation); `Api` for a backend rejection.
    pub fn finish_save(
        &mut self,
        result: Result<SeatMapDetails, ApiError>,
    ) -> Result<SaveOutcome, SaveError> {
        if self.phase != SessionPhase::Saving {
            warn!(phase = ?self.phase, "save completed with no save in flight; result discarded");
            return Err(SaveError::StaleCompletion);
        }
        match result {
            Ok(details) => {
                let outcome = SaveOutcome {
                    map_id: details.id.clone(),
                    venue_id: details.venue_id.clone(),
                };
                let stage = self.map.stage().cloned();
                self.map = wire::from_details(details);
                if let Some(stage) = stage {
                    self.map.set_stage(stage);
                }
                self.phase = SessionPhase::Saved;
                info!(map_id = %outcome.map_id, venue_id = %outcome.venue_id, "seat map saved");
                Ok(outcome)
            }
            Err(err) => {
                self.phase = SessionPhase::Editing;
                Err(SaveError::Api(err))
            }
        }
    }

    /// Full save round trip: [`Self::begin_save`], one backend call,
    /// [`Self::finish_save`].
    ///
    /// # Errors
    ///
    /// See [`Self::begin_save`] and [`Self::finish_save`].
    pub async fn save(&mut self, backend: &dyn Backend) -> Result<SaveOutcome, SaveError> {
        let plan = self.begin_save()?;
        let result = match &plan {
            SavePlan::Create(req) => backend.create_seat_map(req).await,
            SavePlan::Update { map_id, req } => backend.update_seat_map(map_id, req).await,
        };
        self.finish_save(result)
    }
}
