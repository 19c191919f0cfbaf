//! # Sub-widgets
//!
//! Each widget draws itself at a panel-local rectangle handed out by the
//! layout engine. The panel transform (anchor translation and scale) is
//! already applied by the controller.

// Widget coordinates are small pixel values.
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

pub mod clock;
pub mod counter;
pub mod icons;
pub mod info;

use almanac_ui::{Color, DrawingBackend};

/// Draws a background texture tinted with the configured alpha, then resets
/// the tint.
fn blit_background<B>(backend: &mut B, texture: &almanac_ui::TextureId, rect: almanac_ui::Rect, alpha: f32)
where
    B: DrawingBackend + ?Sized,
{
    backend.set_tint(Color::WHITE.with_alpha(alpha));
    backend.blit(texture, rect.x, rect.y, rect.width, rect.height);
    backend.set_tint(Color::WHITE);
}

/// Draws text with its top-left corner at (x, y), scaled about that corner.
fn draw_scaled_text<B>(backend: &mut B, text: &str, x: i32, y: i32, scale: f32, color: Color, shadow: bool)
where
    B: DrawingBackend + ?Sized,
{
    backend.push_transform();
    backend.translate(x as f32, y as f32);
    backend.scale(scale);
    backend.draw_text(text, 0, 0, color, shadow);
    backend.pop_transform();
}
