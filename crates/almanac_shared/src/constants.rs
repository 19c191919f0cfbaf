//! # Almanac Constants
//!
//! Host time model, panel dimensions and configuration bounds.
//!
//! **NOTE:** Panel dimensions are the unscaled texture sizes. Every on-screen
//! size is derived from them and `PanelConfig::scale` each frame.

// =============================================================================
// TIME MODEL
// =============================================================================

/// Ticks in one in-game day.
pub const DAY_LENGTH: u64 = 24_000;

/// Ticks in one in-game hour.
pub const TICKS_PER_HOUR: u64 = 1_000;

/// Hour shown at tick 0 (the host day starts at dawn).
pub const DAWN_HOUR: u64 = 6;

/// Days in a week.
pub const DAYS_PER_WEEK: u64 = 7;

/// Seasons in a year.
pub const SEASONS_PER_YEAR: u64 = 4;

/// Default days per season.
pub const DEFAULT_SEASON_LENGTH_DAYS: u32 = 28;

// =============================================================================
// PANEL DIMENSIONS (UNSCALED PIXELS)
// =============================================================================

/// Clock face width.
pub const CLOCK_WIDTH: i32 = 40;

/// Clock face height.
pub const CLOCK_HEIGHT: i32 = 65;

/// Info box width.
pub const INFO_WIDTH: i32 = 80;

/// Info box height.
pub const INFO_HEIGHT: i32 = 65;

/// Currency counter width.
pub const COUNTER_WIDTH: i32 = 100;

/// Currency counter height.
pub const COUNTER_HEIGHT: i32 = 32;

/// Vertical gap between the info box and the counter (negative: tucked under).
pub const COUNTER_TOP_MARGIN: i32 = -2;

/// Unscaled width of the composed panel.
pub const PANEL_WIDTH: i32 = CLOCK_WIDTH + INFO_WIDTH;

/// Unscaled height of the composed panel.
pub const PANEL_HEIGHT: i32 = INFO_HEIGHT + COUNTER_TOP_MARGIN + COUNTER_HEIGHT;

/// Distance from the screen edges when the panel is auto-anchored.
pub const AUTO_ANCHOR_MARGIN: i32 = 10;

/// Side length of the host's status-effect overlay in the top-right corner.
pub const HOST_EFFECTS_REGION_SIZE: i32 = 100;

// =============================================================================
// CONFIGURATION BOUNDS
// =============================================================================

/// Smallest accepted panel scale.
pub const MIN_SCALE: f32 = 0.1;

/// Largest accepted panel scale.
pub const MAX_SCALE: f32 = 5.0;

/// Smallest accepted background alpha.
pub const MIN_BACKGROUND_ALPHA: f32 = 0.0;

/// Largest accepted background alpha.
pub const MAX_BACKGROUND_ALPHA: f32 = 1.0;

/// Item tracked by the counter when nothing is configured.
pub const DEFAULT_COUNTER_ITEM: &str = "minecraft:diamond";

/// Longest identity token the settings surface accepts.
pub const MAX_ITEM_ID_LEN: usize = 100;

/// Namespace assumed for identity tokens written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_totals() {
        assert_eq!(PANEL_WIDTH, 120);
        assert_eq!(PANEL_HEIGHT, 95);
    }
}
