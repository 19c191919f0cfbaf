//! Drawing contract.
//!
//! The HUD issues a fixed sequence of opaque calls per frame and never reads
//! anything back except glyph widths. Hosts implement [`DrawingBackend`] and
//! [`FontMetrics`] over their own renderer; [`RecordingBackend`] captures the
//! sequence as [`DrawCommand`]s for tests and replays.

use std::borrow::Cow;
use std::fmt;

use crate::style::Color;

/// Handle to a texture known to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureId(pub Cow<'static, str>);

impl TextureId {
    /// Texture with a static path.
    #[must_use]
    pub const fn from_static(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Texture with a computed path.
    #[must_use]
    pub fn owned(path: String) -> Self {
        Self(Cow::Owned(path))
    }

    /// Path of the texture.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Side-effecting calls into the host renderer.
pub trait DrawingBackend {
    /// Draws a whole texture stretched over the rectangle.
    fn blit(&mut self, texture: &TextureId, x: i32, y: i32, width: i32, height: i32);
    /// Draws a line of text with its top-left corner at (x, y).
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color, shadow: bool);
    /// Draws a 16x16 item icon.
    fn draw_item(&mut self, item: &str, x: i32, y: i32);
    /// Saves the current transform.
    fn push_transform(&mut self);
    /// Restores the last saved transform.
    fn pop_transform(&mut self);
    /// Translates the current transform.
    fn translate(&mut self, x: f32, y: f32);
    /// Scales the current transform uniformly.
    fn scale(&mut self, factor: f32);
    /// Rotates the current transform about the z axis.
    fn rotate_z(&mut self, degrees: f32);
    /// Sets the color multiplied into subsequent blits.
    fn set_tint(&mut self, color: Color);
}

/// Glyph measurements.
pub trait FontMetrics {
    /// Width of `text` in unscaled pixels.
    fn text_width(&self, text: &str) -> i32;

    /// Line height in unscaled pixels.
    fn line_height(&self) -> i32 {
        9
    }
}

/// Approximation of the default bitmap font: 6 pixels per glyph with a few
/// narrow glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidthFont {
    /// Advance of a regular glyph.
    pub advance: i32,
}

impl Default for FixedWidthFont {
    fn default() -> Self {
        Self { advance: 6 }
    }
}

impl FontMetrics for FixedWidthFont {
    fn text_width(&self, text: &str) -> i32 {
        text.chars()
            .map(|c| match c {
                '.' | ',' | ':' | ';' | '!' | '\'' | '|' | 'i' => 2,
                'l' | '`' => 3,
                ' ' | 'I' | 't' | '[' | ']' => 4,
                'f' | 'k' | '<' | '>' | '(' | ')' | '{' | '}' | '"' | '*' => 5,
                _ => self.advance,
            })
            .sum()
    }
}

/// A recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Texture blit.
    Blit {
        /// Texture.
        texture: TextureId,
        /// X position.
        x: i32,
        /// Y position.
        y: i32,
        /// Width.
        width: i32,
        /// Height.
        height: i32,
    },
    /// Text.
    Text {
        /// Text content.
        text: String,
        /// X position.
        x: i32,
        /// Y position.
        y: i32,
        /// Text color.
        color: Color,
        /// Drop shadow.
        shadow: bool,
    },
    /// Item icon.
    Item {
        /// Item identity token.
        item: String,
        /// X position.
        x: i32,
        /// Y position.
        y: i32,
    },
    /// Save transform.
    PushTransform,
    /// Restore transform.
    PopTransform,
    /// Translate.
    Translate {
        /// X offset.
        x: f32,
        /// Y offset.
        y: f32,
    },
    /// Uniform scale.
    Scale(f32),
    /// Rotation about z in degrees.
    RotateZ(f32),
    /// Blit tint.
    Tint(Color),
}

/// Backend that records every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    commands: Vec<DrawCommand>,
    depth: usize,
    font: FixedWidthFont,
}

impl RecordingBackend {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(64),
            depth: 0,
            font: FixedWidthFont::default(),
        }
    }

    /// Clears the recording for a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.depth = 0;
    }

    /// Commands recorded since the last [`begin_frame`](Self::begin_frame).
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Takes the recorded commands.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Returns the total command count.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Current transform stack depth.
    #[must_use]
    pub const fn transform_depth(&self) -> usize {
        self.depth
    }

    /// Textures blitted so far, in order.
    #[must_use]
    pub fn blitted_textures(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Blit { texture, .. } => Some(texture.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Text lines drawn so far, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawingBackend for RecordingBackend {
    fn blit(&mut self, texture: &TextureId, x: i32, y: i32, width: i32, height: i32) {
        self.commands.push(DrawCommand::Blit {
            texture: texture.clone(),
            x,
            y,
            width,
            height,
        });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color, shadow: bool) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            color,
            shadow,
        });
    }

    fn draw_item(&mut self, item: &str, x: i32, y: i32) {
        self.commands.push(DrawCommand::Item {
            item: item.to_string(),
            x,
            y,
        });
    }

    fn push_transform(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::PushTransform);
    }

    fn pop_transform(&mut self) {
        if self.depth == 0 {
            tracing::warn!("Transform stack underflow");
        }
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCommand::PopTransform);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::Translate { x, y });
    }

    fn scale(&mut self, factor: f32) {
        self.commands.push(DrawCommand::Scale(factor));
    }

    fn rotate_z(&mut self, degrees: f32) {
        self.commands.push(DrawCommand::RotateZ(degrees));
    }

    fn set_tint(&mut self, color: Color) {
        self.commands.push(DrawCommand::Tint(color));
    }
}

impl FontMetrics for RecordingBackend {
    fn text_width(&self, text: &str) -> i32 {
        self.font.text_width(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_frame() {
        let mut backend = RecordingBackend::new();

        backend.begin_frame();
        backend.push_transform();
        backend.blit(&TextureId::from_static("almanac:textures/gui/clock_bg.png"), 0, 0, 40, 65);
        assert_eq!(backend.transform_depth(), 1);
        backend.pop_transform();

        assert_eq!(backend.command_count(), 3);
        assert_eq!(backend.transform_depth(), 0);
        assert_eq!(backend.blitted_textures(), vec!["almanac:textures/gui/clock_bg.png"]);

        backend.begin_frame();
        assert_eq!(backend.command_count(), 0);
    }

    #[test]
    fn test_font_widths() {
        let font = FixedWidthFont::default();
        assert_eq!(font.text_width("06:00"), 6 * 4 + 2);
        assert_eq!(font.text_width("Mon. 12"), 6 * 5 + 2 + 4);
        assert_eq!(font.text_width(""), 0);
    }
}
