//! Half-circle clock face.
//!
//! The pivot sits two pixels inside the right border, vertically centered.
//! The hand texture extends left of the pivot, so a rotation of 0 points at
//! 9 o'clock (06:00).

use almanac_shared::constants::{CLOCK_HEIGHT, CLOCK_WIDTH};
use almanac_time::DerivedTimeState;
use almanac_ui::style::textures;
use almanac_ui::{DrawingBackend, Rect};

const HAND_LENGTH: i32 = 29;
const HAND_THICKNESS: i32 = 11;

/// Pivot of the hand relative to the clock's top-left corner.
pub const PIVOT: (i32, i32) = (CLOCK_WIDTH - 2, CLOCK_HEIGHT / 2);

/// Draws the clock background and hand.
pub fn draw<B>(backend: &mut B, rect: Rect, state: &DerivedTimeState, background_alpha: f32)
where
    B: DrawingBackend + ?Sized,
{
    super::blit_background(backend, &textures::CLOCK_BG, rect, background_alpha);

    backend.push_transform();
    backend.translate((rect.x + PIVOT.0) as f32, (rect.y + PIVOT.1) as f32);
    backend.rotate_z(state.hand_rotation_degrees());
    backend.blit(
        &textures::CLOCK_HAND,
        -HAND_LENGTH,
        -HAND_THICKNESS / 2,
        HAND_LENGTH,
        HAND_THICKNESS,
    );
    backend.pop_transform();
}
