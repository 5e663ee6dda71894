//! Spatial primitives for the seat-map layout.
//!
//! Seats are positioned by plain `(x, y)` pairs and sections occupy
//! axis-aligned rectangles. This module validates both before anything is
//! persisted: non-finite values and degenerate rectangles fail fast here
//! rather than reaching the backend. Overlap and containment checks are not
//! this layer's job; they belong to the renderer and the backend.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A position in seat-map space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check that both coordinates are finite numbers.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinitePoint`] if either coordinate is NaN
    /// or infinite.
    pub fn validate(self) -> Result<(), GeometryError> {
        if self.x.is_finite() && self.y.is_finite() {
            Ok(())
        } else {
            Err(GeometryError::NonFinitePoint { x: self.x, y: self.y })
        }
    }
}

/// An axis-aligned rectangle: a section's footprint on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Check that the rectangle is well-formed: finite origin, strictly
    /// positive finite dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinitePoint`] for a NaN/infinite origin
    /// and [`GeometryError::InvalidRect`] for zero, negative, or non-finite
    /// dimensions.
    pub fn validate(self) -> Result<(), GeometryError> {
        Point::new(self.x, self.y).validate()?;
        // NaN fails the > comparison, so it lands here too.
        if self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0 {
            Ok(())
        } else {
            Err(GeometryError::InvalidRect { width: self.width, height: self.height })
        }
    }

    /// Closed rectangular path descriptor for decorative shapes.
    ///
    /// The format is opaque to this crate; it is handed to the renderer
    /// verbatim and carries no identity.
    #[must_use]
    pub fn to_path(self) -> String {
        format!("M {} {} h {} v {} h {} Z", self.x, self.y, self.width, self.height, -self.width)
    }
}

/// Spatial validation failures. Raised before persistence, never after.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("coordinate is not finite: ({x}, {y})")]
    NonFinitePoint { x: f64, y: f64 },
    #[error("rectangle has invalid dimensions: {width} x {height}")]
    InvalidRect { width: f64, height: f64 },
}
