//! # Settings Page Descriptors
//!
//! The settings surface is a fixed list of pages, each a fixed list of field
//! descriptors bound to one [`PanelConfig`] field. The surface renders whatever
//! widget fits a [`FieldKind`]; this module owns validation, clamping and
//! per-page reset so that every surface edits the record the same way.
//!
//! Adding a page or field means adding a variant, not a new widget type.

use crate::config::PanelConfig;
use crate::constants::MAX_ITEM_ID_LEN;
use crate::error::{ConfigError, ConfigResult};

/// A settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsPage {
    /// Master switch, tracked item, scale, alpha, position.
    General,
    /// Per-sub-widget visibility.
    Display,
    /// Host overlay interaction.
    Effects,
}

/// A configuration field that a settings page can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    /// `enabled`
    Enabled,
    /// `counter_item_id`
    CounterItemId,
    /// `scale`, edited as a percentage.
    Scale,
    /// `background_alpha`
    BackgroundAlpha,
    /// `position.x`
    PositionX,
    /// `position.y`
    PositionY,
    /// `season_length_days`
    SeasonLengthDays,
    /// `show_clock`
    ShowClock,
    /// `show_weather`
    ShowWeather,
    /// `show_time_display`
    ShowTimeDisplay,
    /// `show_fortune`
    ShowFortune,
    /// `show_season`
    ShowSeason,
    /// `show_item_counter`
    ShowItemCounter,
    /// `suppress_host_overlay`
    SuppressHostOverlay,
}

/// Widget kind and bounds for a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Checkbox.
    Toggle,
    /// Whole number clamped to `[min, max]`.
    Integer {
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },
    /// Percentage clamped to `[min, max]`, stored divided by 100.
    Percent {
        /// Lower bound in percent.
        min: f32,
        /// Upper bound in percent.
        max: f32,
    },
    /// Decimal clamped to `[min, max]`.
    Decimal {
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },
    /// Free text up to `max_len` characters.
    Text {
        /// Maximum length in characters.
        max_len: usize,
    },
}

/// A field bound to its widget kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    /// Bound configuration field.
    pub field: ConfigField,
    /// Widget kind and bounds.
    pub kind: FieldKind,
}

impl FieldDescriptor {
    const fn new(field: ConfigField, kind: FieldKind) -> Self {
        Self { field, kind }
    }
}

/// A value submitted by the settings surface.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Checkbox state.
    Bool(bool),
    /// Whole number.
    Integer(i64),
    /// Decimal (percent for [`FieldKind::Percent`]).
    Decimal(f32),
    /// Text.
    Text(String),
}

const GENERAL_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(ConfigField::Enabled, FieldKind::Toggle),
    FieldDescriptor::new(ConfigField::CounterItemId, FieldKind::Text { max_len: MAX_ITEM_ID_LEN }),
    FieldDescriptor::new(ConfigField::Scale, FieldKind::Percent { min: 10.0, max: 500.0 }),
    FieldDescriptor::new(ConfigField::BackgroundAlpha, FieldKind::Decimal { min: 0.0, max: 1.0 }),
    FieldDescriptor::new(ConfigField::PositionX, FieldKind::Integer { min: 0, max: 10_000 }),
    FieldDescriptor::new(ConfigField::PositionY, FieldKind::Integer { min: 0, max: 10_000 }),
    FieldDescriptor::new(ConfigField::SeasonLengthDays, FieldKind::Integer { min: 1, max: 1_000 }),
];

const DISPLAY_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(ConfigField::ShowClock, FieldKind::Toggle),
    FieldDescriptor::new(ConfigField::ShowWeather, FieldKind::Toggle),
    FieldDescriptor::new(ConfigField::ShowTimeDisplay, FieldKind::Toggle),
    FieldDescriptor::new(ConfigField::ShowFortune, FieldKind::Toggle),
    FieldDescriptor::new(ConfigField::ShowSeason, FieldKind::Toggle),
    FieldDescriptor::new(ConfigField::ShowItemCounter, FieldKind::Toggle),
];

const EFFECTS_FIELDS: &[FieldDescriptor] = &[FieldDescriptor::new(
    ConfigField::SuppressHostOverlay,
    FieldKind::Toggle,
)];

impl SettingsPage {
    /// All pages in tab order.
    pub const ALL: [Self; 3] = [Self::General, Self::Display, Self::Effects];

    /// Translation key of the tab title.
    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::General => "category.almanac.general",
            Self::Display => "category.almanac.display",
            Self::Effects => "category.almanac.effects",
        }
    }

    /// Fields on this page in display order.
    #[must_use]
    pub const fn fields(self) -> &'static [FieldDescriptor] {
        match self {
            Self::General => GENERAL_FIELDS,
            Self::Display => DISPLAY_FIELDS,
            Self::Effects => EFFECTS_FIELDS,
        }
    }
}

impl ConfigField {
    /// Stable key, also used as the translation key suffix.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::CounterItemId => "counterItemId",
            Self::Scale => "scale",
            Self::BackgroundAlpha => "backgroundAlpha",
            Self::PositionX => "positionX",
            Self::PositionY => "positionY",
            Self::SeasonLengthDays => "seasonLengthDays",
            Self::ShowClock => "showClock",
            Self::ShowWeather => "showWeather",
            Self::ShowTimeDisplay => "showTimeDisplay",
            Self::ShowFortune => "showFortune",
            Self::ShowSeason => "showSeason",
            Self::ShowItemCounter => "showItemCounter",
            Self::SuppressHostOverlay => "suppressHostOverlay",
        }
    }

    /// Descriptor for this field.
    #[must_use]
    pub fn descriptor(self) -> FieldDescriptor {
        SettingsPage::ALL
            .iter()
            .flat_map(|page| page.fields().iter())
            .copied()
            .find(|d| d.field == self)
            .unwrap_or(FieldDescriptor::new(self, FieldKind::Toggle))
    }

    /// Reads the field from a configuration as a [`FieldValue`].
    #[must_use]
    pub fn read(self, config: &PanelConfig) -> FieldValue {
        match self {
            Self::Enabled => FieldValue::Bool(config.enabled),
            Self::CounterItemId => FieldValue::Text(config.counter_item_id.clone()),
            Self::Scale => FieldValue::Decimal(config.scale * 100.0),
            Self::BackgroundAlpha => FieldValue::Decimal(config.background_alpha),
            Self::PositionX => FieldValue::Integer(i64::from(config.position.x)),
            Self::PositionY => FieldValue::Integer(i64::from(config.position.y)),
            Self::SeasonLengthDays => FieldValue::Integer(i64::from(config.season_length_days)),
            Self::ShowClock => FieldValue::Bool(config.show_clock),
            Self::ShowWeather => FieldValue::Bool(config.show_weather),
            Self::ShowTimeDisplay => FieldValue::Bool(config.show_time_display),
            Self::ShowFortune => FieldValue::Bool(config.show_fortune),
            Self::ShowSeason => FieldValue::Bool(config.show_season),
            Self::ShowItemCounter => FieldValue::Bool(config.show_item_counter),
            Self::SuppressHostOverlay => FieldValue::Bool(config.suppress_host_overlay),
        }
    }

    fn toggle_mut(self, config: &mut PanelConfig) -> Option<&mut bool> {
        match self {
            Self::Enabled => Some(&mut config.enabled),
            Self::ShowClock => Some(&mut config.show_clock),
            Self::ShowWeather => Some(&mut config.show_weather),
            Self::ShowTimeDisplay => Some(&mut config.show_time_display),
            Self::ShowFortune => Some(&mut config.show_fortune),
            Self::ShowSeason => Some(&mut config.show_season),
            Self::ShowItemCounter => Some(&mut config.show_item_counter),
            Self::SuppressHostOverlay => Some(&mut config.suppress_host_overlay),
            _ => None,
        }
    }
}

/// Applies a typed value to a field, clamping numbers into the field bounds.
///
/// # Errors
///
/// Returns [`ConfigError::FieldKindMismatch`] if the value kind does not fit
/// the field.
pub fn apply_field(config: &mut PanelConfig, field: ConfigField, value: FieldValue) -> ConfigResult<()> {
    let kind = field.descriptor().kind;
    match (kind, field, &value) {
        (FieldKind::Toggle, _, FieldValue::Bool(on)) => match field.toggle_mut(config) {
            Some(slot) => *slot = *on,
            None => return Err(kind_mismatch(field, &value)),
        },
        (FieldKind::Text { max_len }, ConfigField::CounterItemId, FieldValue::Text(text)) => {
            config.counter_item_id = text.trim().chars().take(max_len).collect();
        }
        (FieldKind::Percent { min, max }, ConfigField::Scale, FieldValue::Decimal(percent)) => {
            let percent = if percent.is_nan() { 100.0 } else { (*percent).clamp(min, max) };
            config.scale = percent / 100.0;
        }
        (FieldKind::Decimal { min, max }, ConfigField::BackgroundAlpha, FieldValue::Decimal(alpha)) => {
            config.background_alpha = if alpha.is_nan() { 1.0 } else { (*alpha).clamp(min, max) };
        }
        (FieldKind::Integer { min, max }, _, FieldValue::Integer(raw)) => {
            let clamped = (*raw).clamp(min, max);
            match field {
                ConfigField::PositionX => config.position.x = to_i32(clamped),
                ConfigField::PositionY => config.position.y = to_i32(clamped),
                ConfigField::SeasonLengthDays => {
                    config.season_length_days = u32::try_from(clamped).unwrap_or(u32::MAX);
                }
                _ => return Err(kind_mismatch(field, &value)),
            }
        }
        _ => return Err(kind_mismatch(field, &value)),
    }
    config.sanitize();
    Ok(())
}

fn kind_mismatch(field: ConfigField, value: &FieldValue) -> ConfigError {
    ConfigError::FieldKindMismatch {
        field: field.key(),
        value: format!("{value:?}"),
    }
}

fn to_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Applies raw text typed into a field.
///
/// Unparsable numbers fall back to the field default: scale 100%, alpha 1.0,
/// position 0, season length default. Toggles accept `true`/`false`.
///
/// # Errors
///
/// Returns [`ConfigError::FieldKindMismatch`] for a toggle given anything but
/// `true` or `false`.
pub fn apply_text_input(config: &mut PanelConfig, field: ConfigField, input: &str) -> ConfigResult<()> {
    let input = input.trim();
    let defaults = PanelConfig::default();
    let value = match field.descriptor().kind {
        FieldKind::Toggle => match input {
            "true" => FieldValue::Bool(true),
            "false" => FieldValue::Bool(false),
            other => {
                return Err(ConfigError::FieldKindMismatch {
                    field: field.key(),
                    value: other.to_string(),
                });
            }
        },
        FieldKind::Text { .. } => FieldValue::Text(input.to_string()),
        FieldKind::Percent { .. } => FieldValue::Decimal(input.parse().unwrap_or(100.0)),
        FieldKind::Decimal { .. } => {
            FieldValue::Decimal(input.parse().unwrap_or(defaults.background_alpha))
        }
        FieldKind::Integer { .. } => {
            let fallback = match field {
                ConfigField::SeasonLengthDays => i64::from(defaults.season_length_days),
                _ => 0,
            };
            FieldValue::Integer(input.parse().unwrap_or(fallback))
        }
    };
    apply_field(config, field, value)
}

/// Restores the fields of one page to their defaults.
///
/// # Errors
///
/// Returns [`ConfigError::FieldKindMismatch`] if a field's default does not
/// fit its descriptor.
pub fn reset_page(config: &mut PanelConfig, page: SettingsPage) -> ConfigResult<()> {
    let defaults = PanelConfig::default();
    for descriptor in page.fields() {
        match descriptor.field {
            ConfigField::PositionX => config.position.x = defaults.position.x,
            ConfigField::PositionY => config.position.y = defaults.position.y,
            field => apply_field(config, field, field.read(&defaults))?,
        }
    }
    Ok(())
}
