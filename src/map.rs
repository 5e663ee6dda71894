//! Seat-map aggregate: the in-memory tree under edit.
//!
//! DESIGN
//! ======
//! One `SeatMap` exclusively owns its `Section`s, which exclusively own
//! their `Seat`s — a strict tree with no sharing. All mutation is
//! synchronous and local; nothing here touches the network. A failed
//! operation returns an error and leaves the tree exactly as it was.
//!
//! Section capacity is never stored: it is always `seats.len()` at the
//! moment anyone asks, so it cannot go stale between mutations and the
//! persistence adapter cannot copy a stale value into a payload.
//!
//! Ids are tagged: backend-issued ids are carried verbatim as
//! [`EntityId::Persisted`], while objects created in the editor get a local
//! [`EntityId::Pending`] token that must never reach the backend. The
//! adapter relies on this distinction to decide which sections and seats
//! are new.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use std::fmt;

use uuid::Uuid;

use crate::geometry::{GeometryError, Point, Rect};

// =============================================================================
// IDS
// =============================================================================

/// Identifier for a section or seat within the aggregate.
///
/// `Persisted` holds a backend-issued id and is the only variant ever sent
/// back over the wire. `Pending` is a locally generated token for objects
/// that have not completed a save round trip yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityId {
    /// Backend-issued identifier, preserved verbatim.
    Persisted(String),
    /// Local token for a not-yet-persisted object.
    Pending(Uuid),
}

impl EntityId {
    /// Mint a fresh local token.
    #[must_use]
    pub fn pending() -> Self {
        Self::Pending(Uuid::new_v4())
    }

    /// Whether this object still awaits its first successful save.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// The backend id, if this object has been persisted.
    #[must_use]
    pub fn persisted(&self) -> Option<&str> {
        match self {
            Self::Persisted(id) => Some(id),
            Self::Pending(_) => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Persisted(id) => write!(f, "{id}"),
            Self::Pending(token) => write!(f, "pending:{token}"),
        }
    }
}

// =============================================================================
// TYPES
// =============================================================================

/// A single seat within a section.
#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    pub id: EntityId,
    /// Row label as shown on the ticket (e.g. `"A"`).
    pub row_label: String,
    /// Seat number within the row.
    pub seat_number: u32,
    /// Position on the map canvas.
    pub position: Point,
    /// Backend-defined category (e.g. `"standard"`, `"vip"`); opaque here.
    pub seat_type: String,
}

/// A sub-area of the map with its own footprint and seat list.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: EntityId,
    pub name: String,
    /// Display color (CSS color string).
    pub color: String,
    /// Footprint rectangle on the map canvas.
    pub bounds: Rect,
    seats: Vec<Seat>,
}

impl Section {
    /// Reassemble a section from backend-confirmed parts.
    pub(crate) fn assemble(
        id: EntityId,
        name: String,
        color: String,
        bounds: Rect,
        seats: Vec<Seat>,
    ) -> Self {
        Self { id, name, color, bounds, seats }
    }

    /// Seats in insertion order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Derived capacity: always the current seat count, never authored.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.seats.len()
    }
}

/// Decorative stage shape. Rendering metadata only: never selectable and
/// never part of the persisted section/seat graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    /// Opaque path descriptor handed to the renderer.
    pub path: String,
    pub label: String,
}

impl Stage {
    /// Build a rectangular stage shape.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] if `bounds` is not a valid rectangle.
    pub fn rectangular(bounds: Rect, label: impl Into<String>) -> Result<Self, GeometryError> {
        bounds.validate()?;
        Ok(Self { path: bounds.to_path(), label: label.into() })
    }
}

/// Failures of local aggregate operations. The aggregate is unchanged
/// whenever one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("validation: {0}")]
    Validation(String),
    #[error(transparent)]
    InvalidGeometry(#[from] GeometryError),
    #[error("no such object in this map: {0}")]
    NotFound(EntityId),
}

// =============================================================================
// AGGREGATE
// =============================================================================

/// The seat map being edited: metadata plus the owned section/seat tree.
///
/// Created empty for a new map or hydrated from a backend details response
/// for edit mode (see [`crate::wire::from_details`]). Persisted as a whole
/// on save; there are no partial section updates.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatMap {
    /// Backend id; `None` until the first successful create.
    id: Option<String>,
    /// Owning venue, held for routing and display only.
    venue_id: String,
    pub name: String,
    pub description: Option<String>,
    sections: Vec<Section>,
    stage: Option<Stage>,
}

impl SeatMap {
    /// Create an empty map for a venue (new mode). The name is validated at
    /// persist time, not here, so the editor can start from a blank form.
    #[must_use]
    pub fn new(venue_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            venue_id: venue_id.into(),
            name: name.into(),
            description: None,
            sections: Vec::new(),
            stage: None,
        }
    }

    /// Reassemble a map from backend-confirmed parts (edit mode).
    #[must_use]
    pub fn hydrated(
        id: String,
        venue_id: String,
        name: String,
        description: Option<String>,
        sections: Vec<Section>,
    ) -> Self {
        Self { id: Some(id), venue_id, name, description, sections, stage: None }
    }

    // --- Queries ---

    /// Backend id, absent until first persisted.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn venue_id(&self) -> &str {
        &self.venue_id
    }

    /// Sections in insertion order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, id: &EntityId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    /// Look up a seat anywhere in the map.
    #[must_use]
    pub fn seat(&self, id: &EntityId) -> Option<&Seat> {
        self.sections.iter().find_map(|s| s.seats.iter().find(|seat| &seat.id == id))
    }

    /// Total seats across all sections.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.sections.iter().map(Section::capacity).sum()
    }

    #[must_use]
    pub fn stage(&self) -> Option<&Stage> {
        self.stage.as_ref()
    }

    // --- Metadata ---

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Place or replace the decorative stage shape.
    pub fn set_stage(&mut self, stage: Stage) {
        self.stage = Some(stage);
    }

    pub fn clear_stage(&mut self) {
        self.stage = None;
    }

    // --- Section mutations ---

    /// Append a new empty section with a pending id, returning the id.
    ///
    /// # Errors
    ///
    /// `Validation` for a blank name, `InvalidGeometry` for a bad rectangle.
    pub fn add_section(
        &mut self,
        name: &str,
        bounds: Rect,
        color: impl Into<String>,
    ) -> Result<EntityId, MapError> {
        if name.trim().is_empty() {
            return Err(MapError::Validation("section name must not be empty".into()));
        }
        bounds.validate()?;
        let id = EntityId::pending();
        self.sections.push(Section {
            id: id.clone(),
            name: name.to_string(),
            color: color.into(),
            bounds,
            seats: Vec::new(),
        });
        Ok(id)
    }

    /// Remove a section and all of its seats.
    ///
    /// # Errors
    ///
    /// `NotFound` if no section has this id.
    pub fn remove_section(&mut self, id: &EntityId) -> Result<Section, MapError> {
        let idx = self
            .sections
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| MapError::NotFound(id.clone()))?;
        Ok(self.sections.remove(idx))
    }

    /// Rename a section.
    ///
    /// # Errors
    ///
    /// `Validation` for a blank name, `NotFound` for an unknown id.
    pub fn rename_section(&mut self, id: &EntityId, name: &str) -> Result<(), MapError> {
        if name.trim().is_empty() {
            return Err(MapError::Validation("section name must not be empty".into()));
        }
        let section = self.section_mut(id)?;
        section.name = name.to_string();
        Ok(())
    }

    /// Change a section's display color.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub fn set_section_color(&mut self, id: &EntityId, color: impl Into<String>) -> Result<(), MapError> {
        let section = self.section_mut(id)?;
        section.color = color.into();
        Ok(())
    }

    /// Move or resize a section's footprint.
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` for a bad rectangle, `NotFound` for an unknown id.
    pub fn move_section(&mut self, id: &EntityId, bounds: Rect) -> Result<(), MapError> {
        bounds.validate()?;
        let section = self.section_mut(id)?;
        section.bounds = bounds;
        Ok(())
    }

    // --- Seat mutations ---

    /// Append a seat to a section, returning the seat's pending id.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown section, `InvalidGeometry` for a
    /// non-finite position.
    pub fn add_seat(
        &mut self,
        section_id: &EntityId,
        row_label: &str,
        seat_number: u32,
        position: Point,
        seat_type: &str,
    ) -> Result<EntityId, MapError> {
        position.validate()?;
        let section = self.section_mut(section_id)?;
        let id = EntityId::pending();
        section.seats.push(Seat {
            id: id.clone(),
            row_label: row_label.to_string(),
            seat_number,
            position,
            seat_type: seat_type.to_string(),
        });
        Ok(id)
    }

    /// Remove a seat from whichever section holds it.
    ///
    /// # Errors
    ///
    /// `NotFound` if no seat has this id.
    pub fn remove_seat(&mut self, id: &EntityId) -> Result<Seat, MapError> {
        for section in &mut self.sections {
            if let Some(idx) = section.seats.iter().position(|seat| &seat.id == id) {
                return Ok(section.seats.remove(idx));
            }
        }
        Err(MapError::NotFound(id.clone()))
    }

    /// Reposition a seat.
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` for a non-finite position, `NotFound` for an
    /// unknown id.
    pub fn move_seat(&mut self, id: &EntityId, position: Point) -> Result<(), MapError> {
        position.validate()?;
        for section in &mut self.sections {
            if let Some(seat) = section.seats.iter_mut().find(|seat| &seat.id == id) {
                seat.position = position;
                return Ok(());
            }
        }
        Err(MapError::NotFound(id.clone()))
    }

    fn section_mut(&mut self, id: &EntityId) -> Result<&mut Section, MapError> {
        self.sections
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| MapError::NotFound(id.clone()))
    }
}
