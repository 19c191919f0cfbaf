//! # Time Cycle Tracker
//!
//! Derives the clock-hand angle, the `HH:MM` label, the displayed day and the
//! weekday from the host's raw time tick.
//!
//! ## Day counter policy
//!
//! The displayed day is accumulated, not divided:
//!
//! 1. First observation seeds it from `tick / DAY_LENGTH` (at least 1)
//! 2. A forward day change adds the delta (day-skip commands show at once)
//! 3. A backward change is a reset: `max(1, tick / DAY_LENGTH)`
//!
//! A backward jump (world reload, time command) is a state transition, not an
//! error.

use std::fmt;

use almanac_shared::constants::{DAWN_HOUR, DAYS_PER_WEEK, DAY_LENGTH, TICKS_PER_HOUR};

/// Day of the week. Day 1 is a Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weekday {
    /// Day 1, 8, 15, ...
    #[default]
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Weekday of a 1-based day index.
    #[must_use]
    pub fn of_day(day_index: u64) -> Self {
        let index = day_index.max(1).wrapping_sub(1) % DAYS_PER_WEEK;
        Self::ALL[index as usize]
    }

    /// Index in `[0, 6]`, Monday = 0.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Three-letter abbreviation.
    #[must_use]
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }

    /// Translation key for hosts that localize labels.
    #[must_use]
    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::Monday => "weekday.almanac.monday",
            Self::Tuesday => "weekday.almanac.tuesday",
            Self::Wednesday => "weekday.almanac.wednesday",
            Self::Thursday => "weekday.almanac.thursday",
            Self::Friday => "weekday.almanac.friday",
            Self::Saturday => "weekday.almanac.saturday",
            Self::Sunday => "weekday.almanac.sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// Formats a raw tick as wall-clock `HH:MM`. Tick 0 is 06:00.
#[must_use]
pub fn format_game_time(raw_tick: u64) -> String {
    let hour = (raw_tick / TICKS_PER_HOUR + DAWN_HOUR) % 24;
    let minute = (raw_tick % TICKS_PER_HOUR) * 60 / TICKS_PER_HOUR;
    format!("{hour:02}:{minute:02}")
}

/// Clock-hand angle in degrees, in `[90, 270)`.
///
/// 18:00 → 90°, 00:00 → 135°, 06:00 → 180°, 12:00 → 225°.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn clock_angle(raw_tick: u64) -> f32 {
    let time_of_day = raw_tick % DAY_LENGTH;
    let offset_from_dusk = (time_of_day + DAY_LENGTH / 2) % DAY_LENGTH;
    let progress = offset_from_dusk as f32 / DAY_LENGTH as f32;
    90.0 + progress * 180.0
}

/// Derived, displayable time state.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedTimeState {
    /// Clock-hand angle in `[90, 270)`.
    pub clock_angle_degrees: f32,
    /// `HH:MM` label.
    pub time_label: String,
    /// Displayed day, 1-based.
    pub day_index: u64,
    /// Weekday of `day_index`.
    pub weekday: Weekday,
}

impl Default for DerivedTimeState {
    fn default() -> Self {
        Self {
            clock_angle_degrees: clock_angle(0),
            time_label: "00:00".to_string(),
            day_index: 1,
            weekday: Weekday::Monday,
        }
    }
}

impl DerivedTimeState {
    /// Weekday index in `[0, 6]`; always `(day_index - 1) mod 7`.
    #[inline]
    #[must_use]
    pub const fn weekday_index(&self) -> u8 {
        self.weekday.index()
    }

    /// Rotation to apply to a hand texture that points left from its pivot.
    ///
    /// This is the raw half-circle sweep `90 - progress * 180`.
    #[inline]
    #[must_use]
    pub fn hand_rotation_degrees(&self) -> f32 {
        180.0 - self.clock_angle_degrees
    }

    /// Info-box day line, e.g. `Mon. 12`.
    #[must_use]
    pub fn day_label(&self) -> String {
        format!("{}. {}", self.weekday.abbrev(), self.day_index)
    }
}

/// How the displayed day changed on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayTransition {
    /// First observation.
    Seeded {
        /// Seeded day.
        day: u64,
    },
    /// The raw day moved forward.
    Advanced {
        /// New displayed day.
        day: u64,
        /// Days added.
        delta: u64,
    },
    /// The raw day moved backward; the counter was reset.
    Reversed {
        /// Day after the reset.
        day: u64,
    },
}

/// Tracks the displayed clock, day and weekday.
#[derive(Debug, Clone, Default)]
pub struct TimeCycleTracker {
    state: DerivedTimeState,
    /// `tick / DAY_LENGTH` at the last observation; `None` before the first.
    last_day_from_ticks: Option<u64>,
    /// Set by [`TimeCycleTracker::detach`]: the next tick only re-baselines.
    rebase_pending: bool,
}

impl TimeCycleTracker {
    /// Creates a tracker that has not observed any tick.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current derived state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &DerivedTimeState {
        &self.state
    }

    /// Displayed day, 1-based.
    #[inline]
    #[must_use]
    pub fn day_index(&self) -> u64 {
        self.state.day_index
    }

    /// Returns true once a tick has been observed.
    #[inline]
    #[must_use]
    pub fn is_seeded(&self) -> bool {
        self.last_day_from_ticks.is_some()
    }

    /// Consumes a raw tick. Returns the day transition, if any.
    pub fn on_tick(&mut self, raw_tick: u64) -> Option<DayTransition> {
        self.state.clock_angle_degrees = clock_angle(raw_tick);
        self.state.time_label = format_game_time(raw_tick);

        let day_from_ticks = raw_tick / DAY_LENGTH;
        if self.rebase_pending {
            self.rebase_pending = false;
            self.last_day_from_ticks = Some(day_from_ticks);
            tracing::info!(
                "Day counter carried over: day {} (raw day {})",
                self.state.day_index,
                day_from_ticks
            );
            return None;
        }

        let transition = match self.last_day_from_ticks {
            None => {
                let day = day_from_ticks.max(1);
                tracing::info!(
                    "Day counter seeded: day {} (tick {}, raw day {})",
                    day,
                    raw_tick,
                    day_from_ticks
                );
                Some(DayTransition::Seeded { day })
            }
            Some(last) if day_from_ticks > last => {
                let delta = day_from_ticks - last;
                let day = self.state.day_index.saturating_add(delta);
                tracing::info!("New day: day {} (+{}, raw day {})", day, delta, day_from_ticks);
                Some(DayTransition::Advanced { day, delta })
            }
            Some(last) if day_from_ticks < last => {
                let day = day_from_ticks.max(1);
                tracing::warn!(
                    "Time moved backward (raw day {} -> {}), day counter reset to {}",
                    last,
                    day_from_ticks,
                    day
                );
                Some(DayTransition::Reversed { day })
            }
            Some(_) => None,
        };

        self.last_day_from_ticks = Some(day_from_ticks);
        if let Some(
            DayTransition::Seeded { day }
            | DayTransition::Advanced { day, .. }
            | DayTransition::Reversed { day },
        ) = transition
        {
            self.set_day(day);
        }
        transition
    }

    /// Forces the displayed day. The next tick's raw day is compared against 0.
    pub fn set_current_day(&mut self, day: u64) {
        self.set_day(day.max(1));
        self.last_day_from_ticks = Some(0);
        self.rebase_pending = false;
        tracing::info!("Day counter set manually to {}", self.state.day_index);
    }

    /// Re-aligns the displayed day with `tick / DAY_LENGTH`.
    pub fn sync_with_world_time(&mut self, raw_tick: u64) {
        let day_from_ticks = raw_tick / DAY_LENGTH;
        self.set_day(day_from_ticks.max(1));
        self.last_day_from_ticks = Some(day_from_ticks);
        self.rebase_pending = false;
        tracing::info!(
            "Day counter synced to world time: day {} (tick {})",
            self.state.day_index,
            raw_tick
        );
    }

    /// Keeps the displayed day when the world goes away.
    ///
    /// The first tick afterwards takes the new world's raw day as its
    /// baseline, so a reload neither resets nor double-counts the day.
    pub fn detach(&mut self) {
        self.rebase_pending = self.last_day_from_ticks.is_some();
    }

    /// Forgets all observations.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn set_day(&mut self, day: u64) {
        self.state.day_index = day;
        self.state.weekday = Weekday::of_day(day);
    }
}
