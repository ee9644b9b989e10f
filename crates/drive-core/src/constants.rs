use glam::Vec3;

// Shared control tuning constants used by both web and native hosts.

// Slider
pub const NEUTRAL_VALUE: f32 = 0.5; // recenter target while not pressed
pub const SLIDER_MIN: f32 = 0.0;
pub const SLIDER_MAX: f32 = 1.0;

// Default rates
pub const DEFAULT_MOVE_SPEED: f32 = 5.0; // units per second
pub const DEFAULT_ROTATION_SPEED: f32 = 180.0; // degrees per second

// Tag the movement control searches for when no target is configured
pub const PLAYER_TAG: &str = "Player";

// Axes
pub const LOCAL_FORWARD: Vec3 = Vec3::Z;
pub const WORLD_UP: Vec3 = Vec3::Y;
