use crate::catalog::{Environment, Finish};
use crate::color::HexColor;
use glam::Vec3;

// Shared defaults and tuning constants for the configurator.

// Session defaults
pub const DEFAULT_COLOR: HexColor = HexColor::from_rgb(0xdc, 0x26, 0x26); // Racing Red
pub const DEFAULT_FINISH: Finish = Finish::Metallic;
pub const DEFAULT_ENVIRONMENT: Environment = Environment::Studio;

// Persistence
pub const STORAGE_KEY: &str = "carConfiguration"; // single named slot in the key-value store

// Share link query parameters
pub const PARAM_COLOR: &str = "color";
pub const PARAM_FINISH: &str = "finish";
pub const PARAM_FINISH_LEGACY: &str = "material"; // accepted on input only
pub const PARAM_ENVIRONMENT: &str = "env";

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(8.0, 4.0, 8.0);
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;
pub const CAMERA_FOV_DEGREES: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 2000.0;

// Orbit controls
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;
pub const ORBIT_MAX_DISTANCE: f32 = 15.0;
pub const ORBIT_MIN_POLAR: f32 = std::f32::consts::PI / 6.0;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::PI / 2.5;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.3;
pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(10.0, 10.0, 5.0);
pub const KEY_LIGHT_INTENSITY: f32 = 1.0;
pub const KEY_LIGHT_SHADOW_MAP_SIZE: u32 = 2048;
pub const FILL_LIGHT_POSITION: Vec3 = Vec3::new(-10.0, 10.0, -10.0);
pub const FILL_LIGHT_INTENSITY: f32 = 0.5;

// Turntable
pub const TURNTABLE_STEP_RADIANS: f32 = 0.002; // per rendered frame
