//! # Almanac UI
//!
//! Placement and drawing contract for the HUD panel.
//!
//! ## Panel Layout (unscaled pixels)
//!
//! ```text
//! 0        40                      120
//! ┌────────┬────────────────────────┐ 0
//! │ clock  │ info box               │
//! │ 40x65  │ 80x65   [wx] [season]  │
//! │        │          HH:MM         │
//! └───┬────┴────────────────────────┤ 63 (counter overlaps by 2)
//!     │ counter 100x32    [item] 42 │
//!     └─────────────────────────────┘ 95
//! ```
//!
//! The whole panel is translated to its anchor and scaled as one unit, so
//! sub-widgets are positioned in unscaled local coordinates.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod layout;
pub mod render;
pub mod style;

pub use layout::{IconSlots, LayoutEngine, PanelGeometry, PanelLayout, Rect};
pub use render::{DrawCommand, DrawingBackend, FixedWidthFont, FontMetrics, RecordingBackend, TextureId};
pub use style::{Color, PanelStyle};
