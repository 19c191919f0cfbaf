//! Weather, season and fortune icons.

use almanac_time::{DailyFortune, Season, Weather};
use almanac_ui::style::textures;
use almanac_ui::{DrawingBackend, PanelStyle, TextureId};

/// Texture for a weather state.
#[must_use]
pub const fn weather_texture(weather: Weather) -> TextureId {
    match weather {
        Weather::Sunny => TextureId::from_static("almanac:textures/icons/weather/sunny.png"),
        Weather::Rainy => TextureId::from_static("almanac:textures/icons/weather/rainy.png"),
        Weather::Thunder => TextureId::from_static("almanac:textures/icons/weather/thunder.png"),
    }
}

/// Texture for a season.
#[must_use]
pub const fn season_texture(season: Season) -> TextureId {
    match season {
        Season::Spring => TextureId::from_static("almanac:textures/icons/season/spring.png"),
        Season::Summer => TextureId::from_static("almanac:textures/icons/season/summer.png"),
        Season::Autumn => TextureId::from_static("almanac:textures/icons/season/autumn.png"),
        Season::Winter => TextureId::from_static("almanac:textures/icons/season/winter.png"),
    }
}

/// Texture for a fortune effect id such as `minecraft:luck`.
#[must_use]
pub fn fortune_texture(effect_id: &str) -> TextureId {
    let path = effect_id.rsplit(':').next().unwrap_or_default().trim();
    if path.is_empty() {
        textures::FORTUNE_DEFAULT
    } else {
        TextureId::owned(format!("almanac:textures/icons/fortune/{path}.png"))
    }
}

/// Weather icon, 21x13, drawn 7 pixels left of its slot.
pub fn draw_weather<B>(backend: &mut B, weather: Weather, slot: (i32, i32))
where
    B: DrawingBackend + ?Sized,
{
    backend.blit(&weather_texture(weather), slot.0 - 7, slot.1, 21, 13);
}

/// Season icon, 41x17, drawn 8 pixels left of and 2 above its slot.
pub fn draw_season<B>(backend: &mut B, season: Season, slot: (i32, i32))
where
    B: DrawingBackend + ?Sized,
{
    backend.blit(&season_texture(season), slot.0 - 8, slot.1 - 2, 41, 17);
}

/// Positive then negative fortune icon, side by side.
pub fn draw_fortune<B>(backend: &mut B, fortune: &DailyFortune, slot: (i32, i32), style: &PanelStyle)
where
    B: DrawingBackend + ?Sized,
{
    let size = style.fortune_icon_size;
    if let Some(positive) = &fortune.positive {
        backend.blit(&fortune_texture(positive), slot.0, slot.1, size, size);
    }
    if let Some(negative) = &fortune.negative {
        backend.blit(
            &fortune_texture(negative),
            slot.0 + size + style.fortune_icon_spacing,
            slot.1,
            size,
            size,
        );
    }
}

#[cfg(test)]
mod tests {
    use almanac_ui::RecordingBackend;

    use super::*;

    #[test]
    fn test_fortune_textures() {
        assert_eq!(
            fortune_texture("minecraft:luck").as_str(),
            "almanac:textures/icons/fortune/luck.png"
        );
        assert_eq!(fortune_texture("haste").as_str(), "almanac:textures/icons/fortune/haste.png");
        assert_eq!(fortune_texture(""), textures::FORTUNE_DEFAULT);
    }

    #[test]
    fn test_negative_fortune_offset() {
        let mut backend = RecordingBackend::new();
        let fortune = DailyFortune {
            positive: None,
            negative: Some("minecraft:slowness".to_string()),
        };

        draw_fortune(&mut backend, &fortune, (55, 26), &PanelStyle::default());

        assert_eq!(backend.command_count(), 1);
        assert!(matches!(
            backend.commands()[0],
            almanac_ui::DrawCommand::Blit { x: 72, y: 26, width: 14, .. }
        ));
    }
}
