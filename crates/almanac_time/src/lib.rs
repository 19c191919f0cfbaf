//! # Almanac Time
//!
//! Leaf trackers that turn raw host state into displayable fields.
//!
//! ```text
//! raw tick ──┬──> TimeCycleTracker ──> angle, "HH:MM", day, weekday
//!            ├──> SeasonTracker    ──> season (own day counter)
//!            └──> FortuneTracker   ──> daily fortune (optional source)
//! rain/thunder ─> WeatherTracker   ──> Sunny | Rainy | Thunder
//! ```
//!
//! ## Two day counters
//!
//! [`TimeCycleTracker`] accumulates its displayed day so that a day-skip
//! command shows up immediately, while [`SeasonTracker`] divides the raw tick
//! directly. They are independent on purpose. Unifying them changes when
//! seasons roll over after a day skip or reload; it is not a bug fix.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clock;
pub mod fortune;
pub mod season;
pub mod weather;

pub use clock::{clock_angle, format_game_time, DayTransition, DerivedTimeState, TimeCycleTracker, Weekday};
pub use fortune::{DailyFortune, FortuneSource, FortuneTracker};
pub use season::{Season, SeasonChange, SeasonTracker};
pub use weather::{EnvironmentFlags, Weather, WeatherTracker};
