//! Preview scene description and the renderer boundary.
//!
//! These types avoid any platform or GPU API. A renderer reads them to build
//! its scene graph, and on every change receives a [`RenderSnapshot`]; it never
//! writes back into the configuration.

use crate::catalog::{Environment, Finish};
use crate::color::HexColor;
use crate::config::Configuration;
use crate::constants::*;
use crate::material::{derive_material_parameters, MaterialParameters, MaterialUniform};
use glam::Vec3;

/// Perspective camera placement for the preview. Projection is the renderer's
/// business.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Default showroom camera for a viewport of the given aspect ratio.
    pub fn showroom(aspect: f32) -> Self {
        Self {
            eye: CAMERA_EYE,
            target: CAMERA_TARGET,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

/// Orbit-control limits around the car. Panning is disabled; polar angles are
/// measured from +Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitLimits {
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar: f32,
    pub max_polar: f32,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            min_polar: ORBIT_MIN_POLAR,
            max_polar: ORBIT_MAX_POLAR,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient {
        intensity: f32,
    },
    Directional {
        position: Vec3,
        intensity: f32,
        shadow_map_size: u32,
    },
    Point {
        position: Vec3,
        intensity: f32,
    },
}

pub const LIGHTS: [Light; 3] = [
    Light::Ambient {
        intensity: AMBIENT_INTENSITY,
    },
    Light::Directional {
        position: KEY_LIGHT_POSITION,
        intensity: KEY_LIGHT_INTENSITY,
        shadow_map_size: KEY_LIGHT_SHADOW_MAP_SIZE,
    },
    Light::Point {
        position: FILL_LIGHT_POSITION,
        intensity: FILL_LIGHT_INTENSITY,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Box { size: Vec3 },
    Cylinder { radius: f32, height: f32, segments: u32 },
    Sphere { radius: f32, segments: u32 },
    /// Horizontal plane, `size` along X and Z.
    Plane { size: f32 },
}

/// How a part is shaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Surface {
    /// Uses the configured paint.
    Paint,
    Fixed {
        color: HexColor,
        metalness: f32,
        roughness: f32,
        emissive: f32,
        opacity: f32,
    },
}

impl Surface {
    const fn fixed(color: HexColor, metalness: f32, roughness: f32) -> Self {
        Surface::Fixed {
            color,
            metalness,
            roughness,
            emissive: 0.0,
            opacity: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenePart {
    pub name: &'static str,
    pub shape: Shape,
    pub position: Vec3,
    pub surface: Surface,
    /// Whether the turntable rotation applies to this part.
    pub spins: bool,
}

const TIRE: HexColor = HexColor::from_rgb(0x33, 0x33, 0x33);
const WHITE: HexColor = HexColor::from_rgb(0xff, 0xff, 0xff);
const GLASS: HexColor = HexColor::from_rgb(0x00, 0x11, 0x22);
const FLOOR: HexColor = HexColor::from_rgb(0x1a, 0x1a, 0x1a);

const fn wheel(name: &'static str, x: f32, z: f32) -> ScenePart {
    ScenePart {
        name,
        shape: Shape::Cylinder {
            radius: 0.6,
            height: 0.3,
            segments: 16,
        },
        position: Vec3::new(x, -0.8, z),
        surface: Surface::fixed(TIRE, 0.8, 0.2),
        spins: false,
    }
}

const fn headlight(name: &'static str, x: f32) -> ScenePart {
    ScenePart {
        name,
        shape: Shape::Sphere {
            radius: 0.3,
            segments: 16,
        },
        position: Vec3::new(x, 0.2, 4.2),
        surface: Surface::Fixed {
            color: WHITE,
            metalness: 0.0,
            roughness: 1.0,
            emissive: 0.2,
            opacity: 1.0,
        },
        spins: false,
    }
}

/// Primitive stand-in for a car model, plus the ground it sits on.
pub const CAR_PARTS: [ScenePart; 10] = [
    ScenePart {
        name: "body",
        shape: Shape::Box {
            size: Vec3::new(4.0, 1.5, 8.0),
        },
        position: Vec3::ZERO,
        surface: Surface::Paint,
        spins: true,
    },
    ScenePart {
        name: "roof",
        shape: Shape::Box {
            size: Vec3::new(3.5, 1.0, 4.0),
        },
        position: Vec3::new(0.0, 1.2, -0.5),
        surface: Surface::Paint,
        spins: false,
    },
    wheel("wheel_front_left", -1.8, 2.5),
    wheel("wheel_front_right", 1.8, 2.5),
    wheel("wheel_rear_left", -1.8, -2.5),
    wheel("wheel_rear_right", 1.8, -2.5),
    headlight("headlight_left", -1.2),
    headlight("headlight_right", 1.2),
    ScenePart {
        name: "windows",
        shape: Shape::Box {
            size: Vec3::new(3.2, 0.8, 3.0),
        },
        position: Vec3::new(0.0, 1.5, 0.5),
        surface: Surface::Fixed {
            color: GLASS,
            metalness: 0.9,
            roughness: 0.1,
            emissive: 0.0,
            opacity: 0.3,
        },
        spins: false,
    },
    ScenePart {
        name: "ground",
        shape: Shape::Plane { size: 50.0 },
        position: Vec3::new(0.0, -1.5, 0.0),
        surface: Surface::fixed(FLOOR, 0.8, 0.4),
        spins: false,
    },
];

/// Slow continuous yaw of the car body, advanced once per rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Turntable {
    pub angle: f32,
    pub step: f32,
}

impl Default for Turntable {
    fn default() -> Self {
        Self {
            angle: 0.0,
            step: TURNTABLE_STEP_RADIANS,
        }
    }
}

impl Turntable {
    /// Advance by `frames` and return the new angle, wrapped to [0, 2pi).
    pub fn advance(&mut self, frames: u32) -> f32 {
        self.angle = (self.angle + self.step * frames as f32).rem_euclid(std::f32::consts::TAU);
        self.angle
    }
}

/// Everything the renderer is given for one configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSnapshot {
    pub color: HexColor,
    pub finish: Finish,
    pub material: MaterialParameters,
    pub uniform: MaterialUniform,
    pub environment: Environment,
    pub environment_preset: &'static str,
}

impl RenderSnapshot {
    pub fn from_config(config: &Configuration) -> Self {
        let material = derive_material_parameters(config.color, config.finish);
        Self {
            color: config.color,
            finish: config.finish,
            material,
            uniform: material.to_uniform(),
            environment: config.environment,
            environment_preset: config.environment.renderer_preset(),
        }
    }

    /// The configuration this snapshot was taken from, without `saved_at`.
    pub fn configuration(&self) -> Configuration {
        Configuration::new(self.color, self.finish, self.environment)
    }
}

/// The renderer boundary. Implementations own scene graph, camera, lights
/// and animation; they only read what they are handed.
pub trait Renderer {
    fn render(&mut self, snapshot: &RenderSnapshot);
}
