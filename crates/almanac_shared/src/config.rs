//! # Panel Configuration
//!
//! The flat configuration record owned by the settings surface.
//!
//! ## Ownership
//!
//! The settings surface is the only writer. The HUD core takes a read-only
//! snapshot through [`SettingsStore::current`] once per call and never writes
//! back. Writes happen while the update thread is idle (modal settings screen),
//! so a read-many / write-rare lock is all the exclusion needed.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COUNTER_ITEM, DEFAULT_SEASON_LENGTH_DAYS, MAX_BACKGROUND_ALPHA, MAX_SCALE,
    MIN_BACKGROUND_ALPHA, MIN_SCALE,
};
use crate::error::{ConfigError, ConfigResult};

/// Panel anchor, measured from the screen's right and top edges.
///
/// `(0, 0)` is a sentinel meaning "auto top-right corner".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudAnchor {
    /// Distance of the panel origin from the right screen edge.
    pub x: i32,
    /// Distance of the panel origin from the top screen edge.
    pub y: i32,
}

impl HudAnchor {
    /// The auto-anchor sentinel.
    pub const AUTO: Self = Self { x: 0, y: 0 };

    /// Creates an explicit anchor.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true for the auto top-right sentinel.
    #[inline]
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

/// Flat panel configuration record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Master switch for the panel.
    pub enabled: bool,
    /// Panel anchor; [`HudAnchor::AUTO`] snaps to the top-right corner.
    pub position: HudAnchor,
    /// Panel scale, clamped to [0.1, 5.0].
    pub scale: f32,
    /// Background texture alpha, clamped to [0, 1].
    pub background_alpha: f32,
    /// Identity token of the item the counter tracks.
    pub counter_item_id: String,
    /// Days in one season.
    pub season_length_days: u32,
    /// Show the clock face.
    pub show_clock: bool,
    /// Show the day and time lines.
    pub show_time_display: bool,
    /// Show the weather icon.
    pub show_weather: bool,
    /// Show the fortune icons (only when the season icon is hidden).
    pub show_fortune: bool,
    /// Show the currency counter.
    pub show_item_counter: bool,
    /// Show the season icon.
    pub show_season: bool,
    /// Hide the host's own status-effect overlay when the panel covers it.
    pub suppress_host_overlay: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            position: HudAnchor::AUTO,
            scale: 1.0,
            background_alpha: 1.0,
            counter_item_id: DEFAULT_COUNTER_ITEM.to_string(),
            season_length_days: DEFAULT_SEASON_LENGTH_DAYS,
            show_clock: true,
            show_time_display: true,
            show_weather: true,
            show_fortune: true,
            show_item_counter: true,
            show_season: true,
            suppress_host_overlay: false,
        }
    }
}

impl PanelConfig {
    /// Clamps every field into its documented range.
    ///
    /// NaN scale or alpha fall back to the defaults.
    pub fn sanitize(&mut self) {
        self.scale = clamp_or(self.scale, MIN_SCALE, MAX_SCALE, 1.0);
        self.background_alpha =
            clamp_or(self.background_alpha, MIN_BACKGROUND_ALPHA, MAX_BACKGROUND_ALPHA, 1.0);
        self.season_length_days = self.season_length_days.max(1);
        if self.counter_item_id.trim().is_empty() {
            self.counter_item_id = DEFAULT_COUNTER_ITEM.to_string();
        }
    }

    /// Returns a sanitized copy.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.sanitize();
        self
    }

    /// Returns true if any info-box sub-widget is visible.
    #[inline]
    #[must_use]
    pub const fn shows_info_box(&self) -> bool {
        self.show_time_display || self.show_weather || self.show_fortune || self.show_season
    }

    /// Parses a configuration from TOML, clamping out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not a valid configuration record.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        Ok(config.sanitized())
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads the configuration from `path`.
    ///
    /// A missing file is created with defaults, matching first-run behavior.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed, or if
    /// writing the default file fails.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            tracing::info!("Config not found, wrote defaults to {}", path.display());
            return Ok(config);
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Saves the configuration to `path`.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let text = self.to_toml_string()?;
        std::fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!("Config saved to {}", path.display());
        Ok(())
    }
}

fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

/// Read-only access to the current configuration.
pub trait SettingsStore {
    /// Returns a snapshot of the current configuration.
    fn current(&self) -> PanelConfig;
}

impl SettingsStore for PanelConfig {
    fn current(&self) -> PanelConfig {
        self.clone().sanitized()
    }
}

/// Shared configuration handle.
///
/// Cloning is cheap; all clones see the same record. The settings surface
/// writes through [`SharedSettings::edit`], the HUD reads snapshots.
#[derive(Clone, Debug, Default)]
pub struct SharedSettings {
    inner: Arc<RwLock<PanelConfig>>,
}

impl SharedSettings {
    /// Wraps a configuration, clamping it first.
    #[must_use]
    pub fn new(config: PanelConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config.sanitized())),
        }
    }

    /// Applies an edit, then re-clamps the record.
    pub fn edit<R>(&self, f: impl FnOnce(&mut PanelConfig) -> R) -> R {
        let mut guard = self.inner.write();
        let result = f(&mut guard);
        guard.sanitize();
        result
    }

    /// Replaces the whole record.
    pub fn replace(&self, config: PanelConfig) {
        *self.inner.write() = config.sanitized();
    }
}

impl SettingsStore for SharedSettings {
    fn current(&self) -> PanelConfig {
        self.inner.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_auto_anchored() {
        let config = PanelConfig::default();
        assert!(config.enabled);
        assert!(config.position.is_auto());
        assert_eq!(config.counter_item_id, "minecraft:diamond");
        assert!(!config.suppress_host_overlay);
    }

    #[test]
    fn test_sanitize_clamps_scale_and_alpha() {
        let mut config = PanelConfig {
            scale: 12.0,
            background_alpha: -0.5,
            season_length_days: 0,
            counter_item_id: "   ".to_string(),
            ..PanelConfig::default()
        };
        config.sanitize();

        assert!((config.scale - MAX_SCALE).abs() < f32::EPSILON);
        assert!(config.background_alpha.abs() < f32::EPSILON);
        assert_eq!(config.season_length_days, 1);
        assert_eq!(config.counter_item_id, DEFAULT_COUNTER_ITEM);

        config.scale = 0.01;
        config.background_alpha = f32::NAN;
        config.sanitize();
        assert!((config.scale - MIN_SCALE).abs() < f32::EPSILON);
        assert!((config.background_alpha - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = PanelConfig::from_toml_str("scale = 9.0\nshow_weather = false\n").unwrap();
        assert!((config.scale - MAX_SCALE).abs() < f32::EPSILON);
        assert!(!config.show_weather);
        assert!(config.show_clock);
        assert_eq!(config.season_length_days, DEFAULT_SEASON_LENGTH_DAYS);
    }

    #[test]
    fn test_toml_position_table() {
        let text = "[position]\nx = 150\ny = 20\n";
        let config = PanelConfig::from_toml_str(text).unwrap();
        assert_eq!(config.position, HudAnchor::new(150, 20));
        assert!(!config.position.is_auto());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(matches!(
            PanelConfig::from_toml_str("scale = \"big\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "almanac_config_{}.toml",
            std::process::id()
        ));
        std::fs::remove_file(&path).ok();

        let created = PanelConfig::load_or_default(&path).unwrap();
        assert_eq!(created, PanelConfig::default());
        assert!(path.exists());

        let edited = PanelConfig {
            show_season: false,
            season_length_days: 7,
            ..PanelConfig::default()
        };
        edited.save(&path).unwrap();
        assert_eq!(PanelConfig::load_or_default(&path).unwrap(), edited);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_plain_record_store_clamps() {
        let raw = PanelConfig {
            scale: 50.0,
            background_alpha: 2.0,
            ..PanelConfig::default()
        };
        let current = raw.current();
        assert!((current.scale - MAX_SCALE).abs() < f32::EPSILON);
        assert!((current.background_alpha - MAX_BACKGROUND_ALPHA).abs() < f32::EPSILON);
    }

    #[test]
    fn test_shared_settings_edit_is_visible_and_clamped() {
        let shared = SharedSettings::new(PanelConfig::default());
        let reader = shared.clone();

        shared.edit(|c| c.scale = 40.0);
        assert!((reader.current().scale - MAX_SCALE).abs() < f32::EPSILON);

        shared.replace(PanelConfig {
            enabled: false,
            ..PanelConfig::default()
        });
        assert!(!reader.current().enabled);
    }
}
