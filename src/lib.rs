//! Seat-map designer core for the ticketing admin console.
//!
//! This crate owns the client-side state of one seat-map editing session:
//! translating editor interactions into aggregate mutations, maintaining the
//! tool/selection state, and converting the in-memory map into the payloads
//! the ticketing backend expects on save. The host UI layer is responsible
//! only for wiring user events to the [`session::EditorSession`] and for
//! acting on the [`session::SaveOutcome`] it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Points, rectangles, and spatial validation |
//! | [`designer`] | Active tool and selection state machine |
//! | [`map`] | In-memory seat-map aggregate (sections, seats, stage) |
//! | [`wire`] | Backend payload types and the persistence adapter |
//! | [`api`] | Backend collaborator trait and HTTP implementation |
//! | [`session`] | Editor session controller and save sequencing |

pub mod api;
pub mod designer;
pub mod geometry;
pub mod map;
pub mod session;
pub mod wire;
