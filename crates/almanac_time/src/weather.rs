//! # Weather Tracker
//!
//! One-shot mapping of host rain/thunder flags. Thunder wins over rain.

/// Host environment flags relevant to weather.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvironmentFlags {
    /// Host reports rain.
    pub is_raining: bool,
    /// Host reports a thunderstorm.
    pub is_thundering: bool,
}

/// Displayed weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weather {
    /// Clear sky.
    #[default]
    Sunny,
    /// Rain without thunder.
    Rainy,
    /// Thunderstorm.
    Thunder,
}

impl Weather {
    /// Maps host flags, thunder taking precedence.
    #[must_use]
    pub const fn from_flags(flags: EnvironmentFlags) -> Self {
        if flags.is_thundering {
            Self::Thunder
        } else if flags.is_raining {
            Self::Rainy
        } else {
            Self::Sunny
        }
    }
}

/// Holds the current weather.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherTracker {
    current: Weather,
}

impl WeatherTracker {
    /// Creates a tracker showing sunny weather.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Weather::Sunny,
        }
    }

    /// Current weather.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> Weather {
        self.current
    }

    /// Consumes host flags.
    pub fn on_tick(&mut self, flags: EnvironmentFlags) -> Weather {
        self.current = Weather::from_flags(flags);
        self.current
    }
}
