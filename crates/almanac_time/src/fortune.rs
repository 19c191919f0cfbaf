//! # Fortune Tracker
//!
//! Daily fortune (one positive and one negative effect) supplied by an
//! optional integration. Without a source, or without data for the day, the
//! tracker simply reports "no data"; the panel then leaves the slot empty.

use almanac_shared::constants::DAY_LENGTH;

/// One day's fortune.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DailyFortune {
    /// Positive effect id, if any.
    pub positive: Option<String>,
    /// Negative effect id, if any.
    pub negative: Option<String>,
}

impl DailyFortune {
    /// Returns true if neither effect is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positive.is_none() && self.negative.is_none()
    }
}

/// Optional integration that knows the daily fortune.
pub trait FortuneSource {
    /// Fortune for a raw day, or `None` when unavailable.
    fn daily_fortune(&self, day: u64) -> Option<DailyFortune>;
}

/// Tracks the fortune for the current raw day.
#[derive(Debug, Clone, Default)]
pub struct FortuneTracker {
    fortune: Option<DailyFortune>,
    last_synced_day: Option<u64>,
}

impl FortuneTracker {
    /// Creates a tracker with no data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Polls the source when nothing is synced yet or the raw day changed.
    ///
    /// A synced fortune expires with its day, so a new day without data
    /// reports no data.
    pub fn on_tick(&mut self, raw_tick: u64, source: Option<&dyn FortuneSource>) {
        let day = raw_tick / DAY_LENGTH;
        if self.last_synced_day.is_some_and(|synced| synced != day) {
            tracing::debug!("Fortune for day {:?} expired", self.last_synced_day);
            self.fortune = None;
            self.last_synced_day = None;
        }
        if self.fortune.is_some() && self.last_synced_day == Some(day) {
            return;
        }

        let Some(source) = source else {
            return;
        };

        match source.daily_fortune(day) {
            Some(fortune) => {
                tracing::debug!(
                    "Fortune synced for day {}: +{:?} -{:?}",
                    day,
                    fortune.positive,
                    fortune.negative
                );
                self.fortune = Some(fortune);
                self.last_synced_day = Some(day);
            }
            None => {
                tracing::trace!("No fortune data for day {}", day);
            }
        }
    }

    /// Returns true once the source delivered data.
    #[inline]
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.fortune.is_some()
    }

    /// Returns true if data exists and holds at least one effect.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fortune.as_ref().is_some_and(|f| !f.is_empty())
    }

    /// Current fortune.
    #[inline]
    #[must_use]
    pub fn fortune(&self) -> Option<&DailyFortune> {
        self.fortune.as_ref()
    }

    /// Raw day of the last successful sync.
    #[inline]
    #[must_use]
    pub fn last_synced_day(&self) -> Option<u64> {
        self.last_synced_day
    }

    /// Injects effects directly. The next tick re-polls any attached source.
    pub fn set_for_testing(&mut self, positive: Option<&str>, negative: Option<&str>) {
        self.fortune = Some(DailyFortune {
            positive: positive.map(str::to_string),
            negative: negative.map(str::to_string),
        });
        self.last_synced_day = None;
        tracing::info!("Fortune set manually: +{:?} -{:?}", positive, negative);
    }

    /// Drops all data.
    pub fn reset(&mut self) {
        *self = Self::default();
        tracing::debug!("Fortune tracker reset");
    }
}
