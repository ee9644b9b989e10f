/// View and wiring constants for the web front-end.
///
/// World units are metres on the ground plane; the view is top-down with
/// world `+Z` pointing up the screen.
// Element ids expected in index.html
pub const THROTTLE_ID: &str = "throttle";
pub const STEERING_ID: &str = "steering";
pub const CANVAS_ID: &str = "view";
pub const READOUT_ID: &str = "readout";

// Attribute carrying a per-slider speed override
pub const SPEED_ATTR: &str = "data-speed";

// View scale (CSS px per world unit, before devicePixelRatio)
pub const PX_PER_UNIT: f32 = 32.0;
pub const GRID_SPACING: f32 = 1.0; // world units between grid lines
pub const GRID_MAJOR_EVERY: i32 = 5;

// Player marker
pub const ARROW_LENGTH: f32 = 0.9; // world units, tip to tail
pub const ARROW_HALF_WIDTH: f32 = 0.4;

// Colors
pub const CLEAR_COLOR: &str = "#0a0e18";
pub const GRID_MINOR_COLOR: &str = "rgba(80, 110, 150, 0.18)";
pub const GRID_MAJOR_COLOR: &str = "rgba(80, 110, 150, 0.45)";
pub const PLAYER_IDLE_COLOR: &str = "#cfe7ff";
pub const PLAYER_ACTIVE_COLOR: &str = "#ffd166";

// Clamp for frame dt so a backgrounded tab does not teleport the player
pub const MAX_FRAME_DT_SEC: f32 = 0.25;
