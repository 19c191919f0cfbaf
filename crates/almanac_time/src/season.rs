//! # Season Tracker
//!
//! Season phase from the raw tick, on its own day counter
//! (`tick / DAY_LENGTH`), independent from the displayed day of
//! [`crate::TimeCycleTracker`].
//!
//! Recomputation happens only when the raw day changes, so the icon swap is
//! signalled once per day boundary. The season length is passed in on every
//! call; a configuration change therefore applies from the next day boundary.

use std::fmt;

use almanac_shared::constants::{DAY_LENGTH, SEASONS_PER_YEAR};

/// Season of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Season {
    /// Index 0.
    #[default]
    Spring,
    /// Index 1.
    Summer,
    /// Index 2.
    Autumn,
    /// Index 3.
    Winter,
}

impl Season {
    /// All seasons in order.
    pub const ALL: [Self; 4] = [Self::Spring, Self::Summer, Self::Autumn, Self::Winter];

    /// Season for an index; wraps modulo 4.
    #[must_use]
    pub fn from_index(index: u64) -> Self {
        Self::ALL[(index % SEASONS_PER_YEAR) as usize]
    }

    /// Index in `[0, 3]`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }

    /// Season for a raw day count and a season length.
    #[must_use]
    pub fn for_day(days_from_ticks: u64, season_length_days: u32) -> Self {
        let length = u64::from(season_length_days.max(1));
        Self::from_index(days_from_ticks / length)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Emitted when the raw day changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonChange {
    /// Raw day before the change, `None` on first observation.
    pub previous_day: Option<u64>,
    /// Raw day now.
    pub day: u64,
    /// Season before the change.
    pub from: Season,
    /// Season now.
    pub to: Season,
}

impl SeasonChange {
    /// Returns true if the season itself changed (icon swap needed).
    #[inline]
    #[must_use]
    pub fn season_changed(&self) -> bool {
        self.from != self.to
    }
}

/// Tracks the current season.
#[derive(Debug, Clone, Default)]
pub struct SeasonTracker {
    season: Season,
    last_day_from_ticks: Option<u64>,
}

impl SeasonTracker {
    /// Creates a tracker in Spring that has not observed any tick.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current season.
    #[inline]
    #[must_use]
    pub fn season(&self) -> Season {
        self.season
    }

    /// Raw day at the last recomputation.
    #[inline]
    #[must_use]
    pub fn last_day(&self) -> Option<u64> {
        self.last_day_from_ticks
    }

    /// Consumes a raw tick. Returns a change record only when the raw day
    /// differs from the last observed one.
    pub fn on_tick(&mut self, raw_tick: u64, season_length_days: u32) -> Option<SeasonChange> {
        let day = raw_tick / DAY_LENGTH;
        if self.last_day_from_ticks == Some(day) {
            return None;
        }

        let previous_day = self.last_day_from_ticks.replace(day);
        let from = self.season;
        let to = Season::for_day(day, season_length_days);
        self.season = to;

        if from == to {
            tracing::debug!(
                "Day {:?} -> {}, season stays {} ({} days per season)",
                previous_day,
                day,
                to,
                season_length_days
            );
        } else {
            tracing::debug!(
                "Season icon {} -> {} on day {} ({} days per season)",
                from,
                to,
                day,
                season_length_days
            );
        }

        Some(SeasonChange {
            previous_day,
            day,
            from,
            to,
        })
    }

    /// Back to Spring, nothing observed.
    pub fn reset(&mut self) {
        *self = Self::default();
        tracing::debug!("Season tracker reset");
    }
}
