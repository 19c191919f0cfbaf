//! # Almanac
//!
//! A farming-calendar style HUD: a half-circle day clock, the day and
//! weekday, weather, season or daily fortune, and a currency counter,
//! composed into one panel at a configurable screen anchor.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        HUD CONTROLLER                            │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  host tick ──> update() ──┬─> TimeCycleTracker (day, clock)      │
//! │                           ├─> SeasonTracker    (always)          │
//! │                           ├─> WeatherTracker                     │
//! │                           ├─> FortuneTracker                     │
//! │                           └─> CurrencyAggregator (once / frame)  │
//! │                                                                  │
//! │  host frame ─> render() ──> LayoutEngine ──> widgets ──> backend │
//! │                                                                  │
//! │  host query ─> should_suppress_host_overlay(reserved)            │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything runs on the host's update/render thread. The configuration is
//! read through a [`SettingsStore`] and never written by the controller.
//!
//! ## Modules
//!
//! - `controller`: the INACTIVE / ACTIVE state machine
//! - `host`: what the HUD needs from the game client
//! - `events`: notifications for host listeners
//! - `widgets`: per-widget drawing

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod controller;
pub mod events;
pub mod host;
pub mod widgets;

// Re-export the layers
pub use almanac_economy as economy;
pub use almanac_shared as shared;
pub use almanac_time as time;
pub use almanac_ui as ui;

pub use almanac_shared::{PanelConfig, SettingsStore, SharedSettings};
pub use controller::{ControllerState, HudController};
pub use events::{EventBus, EventReceiver, EventSender, HudEvent};
pub use host::{EnvironmentSnapshot, HostEnvironment, ScheduledFortunes, SimulatedHost};
