//! Styling for the panel.
//!
//! Parchment backgrounds with dark ink text, textures resolved by path.

use crate::render::TextureId;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white, the neutral tint.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from a packed `0xAARRGGBB` value.
    ///
    /// A zero alpha byte means opaque, as in the host's text renderer.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn argb(packed: u32) -> Self {
        let alpha = (packed >> 24) & 0xFF;
        let a = if alpha == 0 { 255 } else { alpha };
        Self::rgba(
            ((packed >> 16) & 0xFF) as f32 / 255.0,
            ((packed >> 8) & 0xFF) as f32 / 255.0,
            (packed & 0xFF) as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Packs into `0xAARRGGBB`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_argb(self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.a) << 24) | (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Texture paths used by the panel.
pub mod textures {
    use super::TextureId;

    /// Clock face background.
    pub const CLOCK_BG: TextureId = TextureId::from_static("almanac:textures/gui/clock_bg.png");
    /// Clock hand, drawn extending left of its pivot.
    pub const CLOCK_HAND: TextureId = TextureId::from_static("almanac:textures/gui/clock_hand.png");
    /// Info box background.
    pub const INFO_BG: TextureId = TextureId::from_static("almanac:textures/gui/info_bg.png");
    /// Counter background.
    pub const COUNTER_BG: TextureId = TextureId::from_static("almanac:textures/gui/counter_bg.png");
    /// Fallback fortune icon.
    pub const FORTUNE_DEFAULT: TextureId = TextureId::from_static("almanac:textures/icons/fortune/default.png");
}

/// Text and icon metrics of the panel.
#[derive(Debug, Clone)]
pub struct PanelStyle {
    /// Info box text color.
    pub info_text: Color,
    /// Info box text scale.
    pub info_text_scale: f32,
    /// Counter text color.
    pub counter_text: Color,
    /// Counter text scale.
    pub counter_text_scale: f32,
    /// Drop shadow on text.
    pub text_shadow: bool,
    /// Side of a fortune icon.
    pub fortune_icon_size: i32,
    /// Gap between the two fortune icons.
    pub fortune_icon_spacing: i32,
}

impl PanelStyle {
    /// The stock parchment style.
    #[must_use]
    pub fn parchment() -> Self {
        Self {
            info_text: Color::argb(0x001A_1A1A),
            info_text_scale: 1.1,
            counter_text: Color::argb(0xFF8B_0000),
            counter_text_scale: 1.5,
            text_shadow: false,
            fortune_icon_size: 14,
            fortune_icon_spacing: 3,
        }
    }
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self::parchment()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_argb() {
        let color = Color::argb(0xFF8B_0000);
        assert!((color.r - 139.0 / 255.0).abs() < 0.001);
        assert!((color.g - 0.0).abs() < 0.001);
        assert!((color.a - 1.0).abs() < 0.001);
        assert_eq!(color.to_argb(), 0xFF8B_0000);
    }

    #[test]
    fn test_zero_alpha_is_opaque() {
        assert_eq!(Color::argb(0x001A_1A1A).to_argb(), 0xFF1A_1A1A);
        assert_eq!(Color::WHITE.with_alpha(0.0).to_argb(), 0x00FF_FFFF);
    }
}
