//! # HUD Controller
//!
//! Owns every tracker and drives them from host callbacks.
//!
//! ```text
//!             session reported
//!   INACTIVE ──────────────────> ACTIVE
//!      ^                           │
//!      └───────────────────────────┘
//!             no session
//! ```
//!
//! In INACTIVE, `update` only watches for a session and `render` draws
//! nothing. Leaving a session drops session data (weather, fortune, currency
//! sample) but keeps the accumulated day, which rebases onto the next world's
//! clock.

use almanac_economy::{CountOutcome, CurrencyAggregator, CurrencyHolding};
use almanac_shared::{PanelConfig, SettingsStore};
use almanac_time::{
    DayTransition, DerivedTimeState, FortuneTracker, Season, SeasonTracker, TimeCycleTracker,
    Weather, WeatherTracker,
};
use almanac_ui::{DrawingBackend, FontMetrics, LayoutEngine, PanelGeometry, PanelStyle, Rect};

use crate::events::{EventSender, HudEvent};
use crate::host::{EnvironmentSnapshot, HostEnvironment};
use crate::widgets::{self, info::InfoContent};

/// Session state as seen by the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    /// No world loaded.
    #[default]
    Inactive,
    /// A session is running.
    Active,
}

/// Composition root of the HUD.
pub struct HudController<S: SettingsStore> {
    settings: S,
    state: ControllerState,
    time: TimeCycleTracker,
    season: SeasonTracker,
    weather: WeatherTracker,
    fortune: FortuneTracker,
    counter: CurrencyAggregator,
    layout: LayoutEngine,
    style: PanelStyle,
    events: Option<EventSender>,
}

impl<S: SettingsStore> HudController<S> {
    /// Creates a controller with the built-in coin table and provider bindings.
    pub fn new(settings: S) -> Self {
        Self::with_counter(settings, CurrencyAggregator::with_defaults())
    }

    /// Creates a controller around a configured currency counter.
    pub fn with_counter(settings: S, counter: CurrencyAggregator) -> Self {
        Self {
            settings,
            state: ControllerState::Inactive,
            time: TimeCycleTracker::new(),
            season: SeasonTracker::new(),
            weather: WeatherTracker::new(),
            fortune: FortuneTracker::new(),
            counter,
            layout: LayoutEngine::new(),
            style: PanelStyle::default(),
            events: None,
        }
    }

    /// Sends notifications to `sender` from now on.
    #[must_use]
    pub fn with_events(mut self, sender: EventSender) -> Self {
        self.events = Some(sender);
        self
    }

    /// Replaces the panel style.
    #[must_use]
    pub fn with_style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    /// Per-frame update.
    ///
    /// Trackers for hidden widgets are skipped, except the season tracker:
    /// the choice between season and fortune icon depends on it.
    pub fn update(&mut self, host: &dyn HostEnvironment) {
        let snapshot = host.snapshot();
        if !self.sync_session(&snapshot) {
            return;
        }

        let config = self.config();
        let tick = snapshot.raw_time_tick;

        if config.show_clock || config.show_time_display {
            match self.time.on_tick(tick) {
                Some(DayTransition::Seeded { day }) => self.emit(HudEvent::DayAdvanced { day, delta: 0 }),
                Some(DayTransition::Advanced { day, delta }) => self.emit(HudEvent::DayAdvanced { day, delta }),
                Some(DayTransition::Reversed { day }) => self.emit(HudEvent::TimeReversed { day }),
                None => {}
            }
        }
        if config.show_weather {
            self.weather.on_tick(snapshot.flags());
        }
        if config.show_fortune {
            self.fortune.on_tick(tick, host.fortune_source());
        }
        if config.show_item_counter {
            self.counter.on_tick(
                &config.counter_item_id,
                snapshot.frame_id,
                host.item_registry(),
                host.inventory(),
            );
        }

        if let Some(change) = self.season.on_tick(tick, config.season_length_days) {
            if change.season_changed() {
                self.emit(HudEvent::SeasonChanged {
                    from: change.from,
                    to: change.to,
                    day: change.day,
                });
            }
        }
    }

    /// Draws the panel. Returns the geometry used, or `None` when nothing
    /// was drawn.
    pub fn render<B>(&self, host: &dyn HostEnvironment, backend: &mut B) -> Option<PanelGeometry>
    where
        B: DrawingBackend + FontMetrics + ?Sized,
    {
        let snapshot = host.snapshot();
        let config = self.renderable_config(&snapshot)?;

        let geometry = self.layout.panel_geometry(&config, snapshot.screen_width);
        let layout = self.layout.arrange(&config);

        backend.push_transform();
        #[allow(clippy::cast_precision_loss)]
        backend.translate(geometry.origin_x as f32, geometry.origin_y as f32);
        backend.scale(config.scale);

        if let Some(rect) = layout.counter {
            widgets::counter::draw(
                backend,
                rect,
                self.counter.outcome(),
                self.counter.holding().tracked_identity.as_ref(),
                config.background_alpha,
                &self.style,
            );
        }

        if let Some(rect) = layout.clock {
            widgets::clock::draw(backend, rect, self.time.state(), config.background_alpha);
        }

        if let Some(rect) = layout.info_box {
            let content = InfoContent {
                time: self.time.state(),
                weather: self.weather.current(),
                season: self.season.season(),
                fortune: &self.fortune,
            };
            widgets::info::draw(backend, rect, layout.icons, &config, &content, &self.style);
        }

        backend.pop_transform();
        Some(geometry)
    }

    /// Returns true if the host should skip drawing the overlay occupying
    /// `reserved` this frame.
    ///
    /// Only when the HUD is drawn, the option is on, and the panel
    /// actually covers the region.
    pub fn should_suppress_host_overlay(&self, host: &dyn HostEnvironment, reserved: &Rect) -> bool {
        let snapshot = host.snapshot();
        let Some(config) = self.renderable_config(&snapshot) else {
            return false;
        };
        config.suppress_host_overlay
            && self.layout.overlaps_region(&config, snapshot.screen_width, reserved)
    }

    /// [`Self::should_suppress_host_overlay`] for the host's status-effect
    /// icons at the top-right corner.
    pub fn should_suppress_status_effects(&self, host: &dyn HostEnvironment) -> bool {
        let reserved = self.layout.host_effects_region(host.snapshot().screen_width);
        self.should_suppress_host_overlay(host, &reserved)
    }

    /// Forces the displayed day.
    pub fn set_current_day(&mut self, day: u64) {
        self.time.set_current_day(day);
    }

    /// Re-aligns the displayed day with the world clock.
    pub fn sync_with_world_time(&mut self, host: &dyn HostEnvironment) {
        self.time.sync_with_world_time(host.snapshot().raw_time_tick);
    }

    /// Forces the next update to recount the currency.
    pub fn mark_inventory_changed(&mut self) {
        self.counter.mark_inventory_changed();
    }

    /// Injects fortune effects directly.
    pub fn set_fortune_for_testing(&mut self, positive: Option<&str>, negative: Option<&str>) {
        self.fortune.set_for_testing(positive, negative);
    }

    /// Session state.
    #[must_use]
    pub const fn state(&self) -> ControllerState {
        self.state
    }

    /// Settings handle.
    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Clock, day and weekday.
    #[must_use]
    pub fn time_state(&self) -> &DerivedTimeState {
        self.time.state()
    }

    /// Current season.
    #[must_use]
    pub fn season(&self) -> Season {
        self.season.season()
    }

    /// Current weather.
    #[must_use]
    pub const fn weather(&self) -> Weather {
        self.weather.current()
    }

    /// Fortune tracker.
    #[must_use]
    pub fn fortune(&self) -> &FortuneTracker {
        &self.fortune
    }

    /// Last currency count.
    #[must_use]
    pub const fn count(&self) -> CountOutcome {
        self.counter.outcome()
    }

    /// Last sampled currency holding.
    #[must_use]
    pub const fn holding(&self) -> &CurrencyHolding {
        self.counter.holding()
    }

    /// Currency counter, for late provider registration.
    pub fn counter_mut(&mut self) -> &mut CurrencyAggregator {
        &mut self.counter
    }

    /// Tracks session transitions. Returns true while active.
    fn sync_session(&mut self, snapshot: &EnvironmentSnapshot) -> bool {
        match (self.state, snapshot.session_active) {
            (ControllerState::Inactive, true) => {
                tracing::info!(tick = snapshot.raw_time_tick, "HUD session started");
                self.state = ControllerState::Active;
                self.emit(HudEvent::SessionStarted);
                true
            }
            (ControllerState::Active, false) => {
                tracing::info!("HUD session ended");
                self.state = ControllerState::Inactive;
                self.reset_trackers();
                self.emit(HudEvent::SessionEnded);
                false
            }
            (ControllerState::Active, true) => true,
            (ControllerState::Inactive, false) => false,
        }
    }

    fn renderable_config(&self, snapshot: &EnvironmentSnapshot) -> Option<PanelConfig> {
        if self.state != ControllerState::Active || !snapshot.session_active {
            return None;
        }
        let config = self.config();
        config.enabled.then_some(config)
    }

    /// Settings snapshot with out-of-range values clamped.
    fn config(&self) -> PanelConfig {
        self.settings.current().sanitized()
    }

    fn reset_trackers(&mut self) {
        self.time.detach();
        self.season.reset();
        self.weather = WeatherTracker::new();
        self.fortune.reset();
        self.counter.reset();
    }

    fn emit(&self, event: HudEvent) {
        if let Some(sender) = &self.events {
            sender.send(event);
        }
    }
}

impl<S: SettingsStore + Default> Default for HudController<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
