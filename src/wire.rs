//! Wire payloads and the persistence adapter.
//!
//! DESIGN
//! ======
//! The adapter is two pure functions plus a hydrator, isolating the
//! aggregate's shape from backend schema drift. Updates are full-replace:
//! the payload carries the entire desired section/seat state and the
//! backend reconciles, so there is no diffing here.
//!
//! The create and update paths are deliberately asymmetric, matching the
//! backend contract: creation sends only per-section capacity plus an
//! opaque layout descriptor, while updates send the full rectangle, color,
//! and seat list. Capacity is recomputed from the seat list on every call;
//! it is never read from authored input.
//!
//! ERROR HANDLING
//! ==============
//! Local problems (blank name, bad geometry) surface as [`MapError`] before
//! any request is built. Nothing in this module performs I/O.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::geometry::{Point, Rect};
use crate::map::{EntityId, MapError, Seat, SeatMap, Section};

// =============================================================================
// TYPES
// =============================================================================

/// A seat as sent to and received from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSeat {
    /// Backend id; omitted for seats the backend has not issued one for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub row_label: String,
    pub seat_number: u32,
    pub x: f64,
    pub y: f64,
    pub seat_type: String,
}

/// A section's full layout rectangle and display color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireLayout {
    pub start_x: f64,
    pub start_y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

/// A section as carried by update requests and details responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSection {
    /// Backend id; omitted for sections created in the editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Recomputed from the seat list at payload build time.
    pub capacity: usize,
    pub layout: WireLayout,
    #[serde(default)]
    pub seats: Vec<WireSeat>,
}

/// Per-section body of a create request. The legacy create path sends no
/// seat geometry, only capacity and an opaque layout object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionBody {
    pub name: String,
    pub capacity: usize,
    /// Opaque key/value layout descriptor.
    pub layout: serde_json::Value,
}

/// Request body for creating a seat map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSeatMapRequest {
    pub venue_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sections: Vec<CreateSectionBody>,
}

/// Request body for updating a seat map. Full-replace: the backend
/// reconciles the entire section/seat set against what is sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSeatMapRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sections: Vec<WireSection>,
}

/// Backend "seat map details" response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatMapDetails {
    pub id: String,
    pub venue_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Absent on some backend responses; treated as empty.
    #[serde(default)]
    pub sections: Vec<WireSection>,
}

// =============================================================================
// AGGREGATE -> WIRE
// =============================================================================

/// Build the creation request for a map that has never been persisted.
///
/// # Errors
///
/// `Validation` for a blank map name, `InvalidGeometry` if any section
/// rectangle is invalid.
pub fn to_create_payload(map: &SeatMap) -> Result<CreateSeatMapRequest, MapError> {
    validate_name(map)?;
    let sections = map
        .sections()
        .iter()
        .map(|section| {
            section.bounds.validate()?;
            Ok(CreateSectionBody {
                name: section.name.clone(),
                capacity: section.capacity(),
                layout: layout_descriptor(section),
            })
        })
        .collect::<Result<Vec<_>, MapError>>()?;

    Ok(CreateSeatMapRequest {
        venue_id: map.venue_id().to_string(),
        name: map.name.clone(),
        description: map.description.clone(),
        sections,
    })
}

/// Build the full-replace update request for a persisted map.
///
/// Pending section and seat ids are omitted from the payload; the backend
/// issues real ids for them and returns the reconciled details.
///
/// # Errors
///
/// `Validation` for a blank map name, `InvalidGeometry` for an invalid
/// section rectangle or non-finite seat coordinate.
pub fn to_update_payload(map: &SeatMap) -> Result<UpdateSeatMapRequest, MapError> {
    validate_name(map)?;
    let sections = map
        .sections()
        .iter()
        .map(to_wire_section)
        .collect::<Result<Vec<_>, MapError>>()?;

    Ok(UpdateSeatMapRequest { name: map.name.clone(), description: map.description.clone(), sections })
}

fn to_wire_section(section: &Section) -> Result<WireSection, MapError> {
    section.bounds.validate()?;
    let seats = section
        .seats()
        .iter()
        .map(|seat| {
            seat.position.validate()?;
            Ok(WireSeat {
                id: seat.id.persisted().map(str::to_string),
                row_label: seat.row_label.clone(),
                seat_number: seat.seat_number,
                x: seat.position.x,
                y: seat.position.y,
                seat_type: seat.seat_type.clone(),
            })
        })
        .collect::<Result<Vec<_>, MapError>>()?;

    Ok(WireSection {
        id: section.id.persisted().map(str::to_string),
        name: section.name.clone(),
        capacity: section.capacity(),
        layout: WireLayout {
            start_x: section.bounds.x,
            start_y: section.bounds.y,
            width: section.bounds.width,
            height: section.bounds.height,
            color: section.color.clone(),
        },
        seats,
    })
}

fn layout_descriptor(section: &Section) -> serde_json::Value {
    json!({
        "startX": section.bounds.x,
        "startY": section.bounds.y,
        "width": section.bounds.width,
        "height": section.bounds.height,
        "color": section.color,
    })
}

fn validate_name(map: &SeatMap) -> Result<(), MapError> {
    if map.name.trim().is_empty() {
        return Err(MapError::Validation("seat map name must not be empty".into()));
    }
    Ok(())
}

// =============================================================================
// WIRE -> AGGREGATE
// =============================================================================

/// Hydrate an aggregate from a backend details response.
///
/// Backend-issued ids are preserved verbatim; an entry arriving without an
/// id (which a well-behaved backend should not send) gets a fresh pending
/// token rather than a fabricated backend id.
#[must_use]
pub fn from_details(details: SeatMapDetails) -> SeatMap {
    let sections = details.sections.into_iter().map(section_from_wire).collect();
    SeatMap::hydrated(details.id, details.venue_id, details.name, details.description, sections)
}

fn section_from_wire(wire: WireSection) -> Section {
    let seats = wire
        .seats
        .into_iter()
        .map(|seat| Seat {
            id: entity_id(seat.id),
            row_label: seat.row_label,
            seat_number: seat.seat_number,
            position: Point::new(seat.x, seat.y),
            seat_type: seat.seat_type,
        })
        .collect();

    Section::assemble(
        entity_id(wire.id),
        wire.name,
        wire.layout.color,
        Rect::new(wire.layout.start_x, wire.layout.start_y, wire.layout.width, wire.layout.height),
        seats,
    )
}

fn entity_id(id: Option<String>) -> EntityId {
    id.map_or_else(EntityId::pending, EntityId::Persisted)
}
