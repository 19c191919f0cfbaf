//! # Host Contracts
//!
//! What the HUD consumes from the game client. The host owns the session,
//! the world clock, the player inventory and the item registry; the HUD only
//! reads them during `update` and `render`.

use almanac_economy::{Inventory, InventorySnapshot, ItemRegistry, StaticItemRegistry};
use almanac_shared::constants::DAY_LENGTH;
use almanac_time::{DailyFortune, EnvironmentFlags, FortuneSource};

/// Per-call view of the host environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    /// A world is loaded and a player exists.
    pub session_active: bool,
    /// Monotonic world time in ticks (day time, not game time).
    pub raw_time_tick: u64,
    /// Rain flag.
    pub is_raining: bool,
    /// Thunder flag.
    pub is_thundering: bool,
    /// GUI-scaled screen width.
    pub screen_width: i32,
    /// Id of the frame being produced.
    pub frame_id: u64,
}

impl EnvironmentSnapshot {
    /// Weather flags.
    #[must_use]
    pub const fn flags(&self) -> EnvironmentFlags {
        EnvironmentFlags {
            is_raining: self.is_raining,
            is_thundering: self.is_thundering,
        }
    }
}

/// Game client seen by the HUD.
pub trait HostEnvironment {
    /// Queried on every update and render call.
    fn snapshot(&self) -> EnvironmentSnapshot;

    /// The player's inventory.
    fn inventory(&self) -> &dyn InventorySnapshot;

    /// The item registry used to resolve the tracked token.
    fn item_registry(&self) -> &dyn ItemRegistry;

    /// Daily fortune integration, when installed.
    fn fortune_source(&self) -> Option<&dyn FortuneSource> {
        None
    }
}

/// Fortune source with a fixed schedule, keyed by raw day.
#[derive(Debug, Clone, Default)]
pub struct ScheduledFortunes {
    entries: Vec<(u64, DailyFortune)>,
}

impl ScheduledFortunes {
    /// Empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fortune for a raw day.
    pub fn insert(&mut self, day: u64, fortune: DailyFortune) -> &mut Self {
        self.entries.retain(|(d, _)| *d != day);
        self.entries.push((day, fortune));
        self
    }
}

impl FortuneSource for ScheduledFortunes {
    fn daily_fortune(&self, day: u64) -> Option<DailyFortune> {
        self.entries
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, fortune)| fortune.clone())
    }
}

/// In-process host for replays and tests.
///
/// Time only moves when [`advance`](Self::advance) is called; every call to
/// [`next_frame`](Self::next_frame) bumps the frame id.
#[derive(Debug, Clone)]
pub struct SimulatedHost {
    /// Current environment.
    pub environment: EnvironmentSnapshot,
    /// Player inventory.
    pub inventory: Inventory,
    /// Known items.
    pub registry: StaticItemRegistry,
    /// Fortune integration, absent by default.
    pub fortunes: Option<ScheduledFortunes>,
}

impl SimulatedHost {
    /// An active session at tick 0 on a screen of the given width.
    #[must_use]
    pub fn new(screen_width: i32) -> Self {
        Self {
            environment: EnvironmentSnapshot {
                session_active: true,
                screen_width,
                ..EnvironmentSnapshot::default()
            },
            inventory: Inventory::new(),
            registry: StaticItemRegistry::new(),
            fortunes: None,
        }
    }

    /// Advances world time.
    pub fn advance(&mut self, ticks: u64) {
        self.environment.raw_time_tick = self.environment.raw_time_tick.saturating_add(ticks);
    }

    /// Jumps world time, forward or backward.
    pub fn set_time(&mut self, raw_tick: u64) {
        self.environment.raw_time_tick = raw_tick;
    }

    /// Skips to the start of the next day.
    pub fn skip_to_next_day(&mut self) {
        let day = self.environment.raw_time_tick / DAY_LENGTH;
        self.environment.raw_time_tick = (day + 1) * DAY_LENGTH;
    }

    /// Starts a new frame.
    pub fn next_frame(&mut self) -> u64 {
        self.environment.frame_id += 1;
        self.environment.frame_id
    }

    /// Sets the weather flags.
    pub fn set_weather(&mut self, raining: bool, thundering: bool) {
        self.environment.is_raining = raining;
        self.environment.is_thundering = thundering;
    }

    /// Loads or leaves the world.
    pub fn set_session_active(&mut self, active: bool) {
        self.environment.session_active = active;
    }
}

impl HostEnvironment for SimulatedHost {
    fn snapshot(&self) -> EnvironmentSnapshot {
        self.environment
    }

    fn inventory(&self) -> &dyn InventorySnapshot {
        &self.inventory
    }

    fn item_registry(&self) -> &dyn ItemRegistry {
        &self.registry
    }

    fn fortune_source(&self) -> Option<&dyn FortuneSource> {
        self.fortunes.as_ref().map(|f| f as &dyn FortuneSource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_time() {
        let mut host = SimulatedHost::new(854);
        host.advance(30_000);
        host.skip_to_next_day();
        assert_eq!(host.snapshot().raw_time_tick, 48_000);

        host.set_time(1_000);
        assert_eq!(host.snapshot().raw_time_tick, 1_000);
        assert_eq!(host.next_frame(), 1);
        assert_eq!(host.next_frame(), 2);
    }

    #[test]
    fn test_fortune_schedule() {
        let mut host = SimulatedHost::new(854);
        assert!(host.fortune_source().is_none());

        let mut schedule = ScheduledFortunes::new();
        schedule.insert(
            3,
            DailyFortune {
                positive: Some("minecraft:luck".to_string()),
                negative: None,
            },
        );
        host.fortunes = Some(schedule);

        let source = host.fortune_source().unwrap();
        assert!(source.daily_fortune(2).is_none());
        assert!(source.daily_fortune(3).is_some());
    }
}
