//! Currency counter strip.
//!
//! The item icon sits at the left, the count is right-aligned at 1.5x. An
//! unresolved token shows a centered `?` instead of icon and count.

use almanac_economy::{CountOutcome, ItemIdentity};
use almanac_ui::style::textures;
use almanac_ui::{DrawingBackend, FontMetrics, PanelStyle, Rect};

const ITEM_LEFT_MARGIN: i32 = 9;
const ITEM_ICON_SIZE: i32 = 16;
const ITEM_VERTICAL_OFFSET: i32 = 4;
const TEXT_RIGHT_MARGIN: i32 = 8;
const SCALE_COMPENSATION: i32 = 4;
const GLYPH_HEIGHT: i32 = 8;

/// Placeholder shown for an unresolved token.
pub const PLACEHOLDER: &str = "?";

/// Draws the counter background, icon and count.
pub fn draw<B>(
    backend: &mut B,
    rect: Rect,
    outcome: CountOutcome,
    identity: Option<&ItemIdentity>,
    background_alpha: f32,
    style: &PanelStyle,
) where
    B: DrawingBackend + FontMetrics + ?Sized,
{
    super::blit_background(backend, &textures::COUNTER_BG, rect, background_alpha);

    match (outcome, identity) {
        (CountOutcome::Counted(count), Some(identity)) => {
            let item_y = rect.y + (rect.height - ITEM_ICON_SIZE) / 2 + ITEM_VERTICAL_OFFSET;
            backend.draw_item(identity.as_str(), rect.x + ITEM_LEFT_MARGIN, item_y);

            let text = count.to_string();
            let text_x = right_aligned_x(backend.text_width(&text), rect, style.counter_text_scale);
            let text_y = rect.y + (rect.height - GLYPH_HEIGHT) / 2 + 3;
            super::draw_scaled_text(
                backend,
                &text,
                text_x,
                text_y,
                style.counter_text_scale,
                style.counter_text,
                style.text_shadow,
            );
        }
        _ => {
            let text_x = rect.x + (rect.width - backend.text_width(PLACEHOLDER)) / 2;
            let text_y = rect.y + (rect.height - GLYPH_HEIGHT) / 2;
            super::draw_scaled_text(
                backend,
                PLACEHOLDER,
                text_x,
                text_y,
                style.counter_text_scale,
                style.counter_text,
                style.text_shadow,
            );
        }
    }
}

/// Left edge that puts scaled text flush with the right margin.
fn right_aligned_x(text_width: i32, rect: Rect, scale: f32) -> i32 {
    let right_edge = rect.right() - TEXT_RIGHT_MARGIN;
    (right_edge as f32 - text_width as f32 * scale) as i32 - SCALE_COMPENSATION
}

#[cfg(test)]
mod tests {
    use almanac_ui::{DrawCommand, RecordingBackend};

    use super::*;

    const RECT: Rect = Rect::new(20, 63, 100, 32);

    #[test]
    fn test_count_right_aligned() {
        let mut backend = RecordingBackend::new();
        let identity = ItemIdentity::parse("minecraft:diamond").unwrap();

        draw(
            &mut backend,
            RECT,
            CountOutcome::Counted(42),
            Some(&identity),
            1.0,
            &PanelStyle::default(),
        );

        assert!(backend.commands().contains(&DrawCommand::Item {
            item: "minecraft:diamond".to_string(),
            x: 29,
            y: 63 + 8 + 4,
        }));
        // "42" is 12 px wide, 18 px at 1.5x: 112 - 18 - 4.
        assert!(backend.commands().contains(&DrawCommand::Translate { x: 90.0, y: 78.0 }));
        assert_eq!(backend.texts(), vec!["42"]);
    }

    #[test]
    fn test_unresolved_placeholder() {
        let mut backend = RecordingBackend::new();

        draw(&mut backend, RECT, CountOutcome::Unresolved, None, 1.0, &PanelStyle::default());

        assert_eq!(backend.texts(), vec![PLACEHOLDER]);
        assert!(!backend
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Item { .. })));
        assert!(backend.commands().contains(&DrawCommand::Translate { x: 67.0, y: 75.0 }));
    }
}
