//! # Almanac Shared
//!
//! Types read by every other Almanac crate.
//!
//! - [`constants`]: day length, panel dimensions, clamp bounds
//! - [`config`]: the flat [`PanelConfig`] record and its shared handle
//! - [`settings`]: tagged-variant settings page descriptors
//!
//! ## RULE
//!
//! This crate must NEVER depend on a drawing backend. The configuration is
//! owned by the settings surface; the core only reads it.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod constants;
pub mod error;
pub mod settings;

pub use config::{HudAnchor, PanelConfig, SettingsStore, SharedSettings};
pub use constants::{DAY_LENGTH, DAYS_PER_WEEK, SEASONS_PER_YEAR, TICKS_PER_HOUR};
pub use error::{ConfigError, ConfigResult};
pub use settings::{ConfigField, FieldDescriptor, FieldKind, FieldValue, SettingsPage};
