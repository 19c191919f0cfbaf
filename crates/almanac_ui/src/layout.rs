//! Layout system for panel positioning.
//!
//! Screen coordinates are integer GUI pixels with the origin at the top-left
//! corner. The anchor stored in [`PanelConfig`] is measured from the right
//! edge, so a panel keeps its distance to that edge when the window is
//! resized.

use almanac_shared::constants::{
    AUTO_ANCHOR_MARGIN, CLOCK_HEIGHT, CLOCK_WIDTH, COUNTER_HEIGHT, COUNTER_TOP_MARGIN, COUNTER_WIDTH,
    HOST_EFFECTS_REGION_SIZE, INFO_HEIGHT, INFO_WIDTH, PANEL_HEIGHT, PANEL_WIDTH,
};
use almanac_shared::PanelConfig;

/// First icon slot, relative to the panel origin.
const ICON_SLOT_X: i32 = CLOCK_WIDTH + 15;
const ICON_SLOT_Y: i32 = 26;
const ICON_SPACING: i32 = 24;

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// X position (left edge).
    pub x: i32,
    /// Y position (top edge).
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge (exclusive).
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Returns the bottom edge (exclusive).
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns true if two rectangles share interior area.
    ///
    /// Rectangles that only touch along an edge do not intersect.
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Returns the same rectangle moved by an offset.
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Absolute placement of the panel for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelGeometry {
    /// Left edge in screen pixels.
    pub origin_x: i32,
    /// Top edge in screen pixels.
    pub origin_y: i32,
    /// Scaled width.
    pub width: i32,
    /// Scaled height.
    pub height: i32,
    /// Scale applied to the unscaled layout.
    pub scale: f32,
}

impl PanelGeometry {
    /// Bounds as a rectangle.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::new(self.origin_x, self.origin_y, self.width, self.height)
    }
}

/// Icon positions inside the info box, in panel-local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IconSlots {
    /// Weather icon slot, if weather is shown.
    pub weather: Option<(i32, i32)>,
    /// Slot shared by the season and fortune icons.
    pub second: (i32, i32),
}

/// Sub-widget placement in panel-local (unscaled) coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelLayout {
    /// Counter background, if the counter is shown.
    pub counter: Option<Rect>,
    /// Clock background, if the clock is shown.
    pub clock: Option<Rect>,
    /// Info box background, if any info box content is shown.
    pub info_box: Option<Rect>,
    /// Icon slots in the info box.
    pub icons: IconSlots,
}

/// Computes where the panel and its sub-widgets go.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine {
    /// Distance from the top and right edges in auto mode.
    pub margin: i32,
    /// Side of the square region the host reserves at the top-right corner.
    pub host_region_size: i32,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            margin: AUTO_ANCHOR_MARGIN,
            host_region_size: HOST_EFFECTS_REGION_SIZE,
        }
    }
}

impl LayoutEngine {
    /// Creates a layout engine with the stock margin and reserved region.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a block of `unscaled_width` x `unscaled_height` on screen.
    ///
    /// The auto anchor puts the top-right corner `margin` pixels from both
    /// edges. An explicit anchor is (distance from the right edge, distance
    /// from the top edge) of the panel's left edge.
    #[must_use]
    pub fn compute_geometry(
        &self,
        config: &PanelConfig,
        unscaled_width: i32,
        unscaled_height: i32,
        screen_width: i32,
    ) -> PanelGeometry {
        let width = scale_truncated(unscaled_width, config.scale);
        let height = scale_truncated(unscaled_height, config.scale);

        let (origin_x, origin_y) = if config.position.is_auto() {
            (screen_width - width - self.margin, self.margin)
        } else {
            (screen_width - config.position.x, config.position.y)
        };

        PanelGeometry {
            origin_x,
            origin_y,
            width,
            height,
            scale: config.scale,
        }
    }

    /// Geometry of the full panel.
    #[must_use]
    pub fn panel_geometry(&self, config: &PanelConfig, screen_width: i32) -> PanelGeometry {
        self.compute_geometry(config, PANEL_WIDTH, PANEL_HEIGHT, screen_width)
    }

    /// Strict rectangle intersection.
    #[must_use]
    pub const fn overlaps(panel: &Rect, reserved: &Rect) -> bool {
        panel.intersects(reserved)
    }

    /// The host's status-effect region at the top-right corner.
    #[must_use]
    pub const fn host_effects_region(&self, screen_width: i32) -> Rect {
        Rect::new(
            screen_width - self.host_region_size,
            0,
            self.host_region_size,
            self.host_region_size,
        )
    }

    /// Returns true if the panel covers part of `reserved`.
    #[must_use]
    pub fn overlaps_region(&self, config: &PanelConfig, screen_width: i32, reserved: &Rect) -> bool {
        let panel = self.panel_geometry(config, screen_width).rect();
        Self::overlaps(&panel, reserved)
    }

    /// Returns true if the panel covers part of the host's status-effect region.
    #[must_use]
    pub fn overlaps_host_region(&self, config: &PanelConfig, screen_width: i32) -> bool {
        self.overlaps_region(config, screen_width, &self.host_effects_region(screen_width))
    }

    /// Sub-widget placement for the visible widgets.
    #[must_use]
    pub fn arrange(&self, config: &PanelConfig) -> PanelLayout {
        let counter = config.show_item_counter.then(|| {
            Rect::new(
                PANEL_WIDTH - COUNTER_WIDTH,
                INFO_HEIGHT + COUNTER_TOP_MARGIN,
                COUNTER_WIDTH,
                COUNTER_HEIGHT,
            )
        });
        let clock = config
            .show_clock
            .then(|| Rect::new(0, 0, CLOCK_WIDTH, CLOCK_HEIGHT));
        let info_box = config
            .shows_info_box()
            .then(|| Rect::new(CLOCK_WIDTH, 0, INFO_WIDTH, INFO_HEIGHT));

        let weather = config.show_weather.then_some((ICON_SLOT_X, ICON_SLOT_Y));
        let second_x = if config.show_weather {
            ICON_SLOT_X + ICON_SPACING
        } else {
            ICON_SLOT_X
        };

        PanelLayout {
            counter,
            clock,
            info_box,
            icons: IconSlots {
                weather,
                second: (second_x, ICON_SLOT_Y),
            },
        }
    }
}

/// `unscaled * scale`, truncated toward zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn scale_truncated(unscaled: i32, scale: f32) -> i32 {
    (unscaled as f32 * scale) as i32
}
