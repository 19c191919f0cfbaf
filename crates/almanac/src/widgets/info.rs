//! Info box: weather, season or fortune, day line and time line.

use almanac_shared::PanelConfig;
use almanac_time::{DerivedTimeState, FortuneTracker, Season, Weather};
use almanac_ui::style::textures;
use almanac_ui::{DrawingBackend, FontMetrics, IconSlots, PanelStyle, Rect};

use super::icons;

const DAY_LINE_Y: i32 = 11;
const TIME_LINE_Y: i32 = 48;

/// What the info box shows this frame.
#[derive(Debug, Clone, Copy)]
pub struct InfoContent<'a> {
    /// Day, weekday and time label.
    pub time: &'a DerivedTimeState,
    /// Current weather.
    pub weather: Weather,
    /// Current season.
    pub season: Season,
    /// Fortune tracker.
    pub fortune: &'a FortuneTracker,
}

/// Draws the info box.
///
/// Season takes the second icon slot when shown; otherwise the fortune
/// does, if it has data.
pub fn draw<B>(
    backend: &mut B,
    rect: Rect,
    icon_slots: IconSlots,
    config: &PanelConfig,
    content: &InfoContent<'_>,
    style: &PanelStyle,
) where
    B: DrawingBackend + FontMetrics + ?Sized,
{
    super::blit_background(backend, &textures::INFO_BG, rect, config.background_alpha);

    if let Some(slot) = icon_slots.weather {
        icons::draw_weather(backend, content.weather, slot);
    }

    if config.show_season {
        icons::draw_season(backend, content.season, icon_slots.second);
    } else if config.show_fortune && content.fortune.has_data() {
        if let Some(fortune) = content.fortune.fortune() {
            icons::draw_fortune(backend, fortune, icon_slots.second, style);
        }
    }

    if config.show_time_display {
        let day_line = content.time.day_label();
        draw_centered(backend, &day_line, rect.x - 1, rect.width - 4, DAY_LINE_Y, style);
        draw_centered(backend, &content.time.time_label, rect.x - 3, rect.width, TIME_LINE_Y, style);
    }
}

/// Centers unscaled text width on `start + width / 2`, then draws it scaled.
fn draw_centered<B>(backend: &mut B, text: &str, start: i32, width: i32, y: i32, style: &PanelStyle)
where
    B: DrawingBackend + FontMetrics + ?Sized,
{
    let center = start + width / 2;
    let x = center - backend.text_width(text) / 2;
    super::draw_scaled_text(backend, text, x, y, style.info_text_scale, style.info_text, style.text_shadow);
}
