//! Finish -> shading parameter mapping consumed by the renderer.

use crate::catalog::Finish;
use crate::color::HexColor;
use bytemuck::{Pod, Zeroable};

/// Shading inputs derived from a color and finish. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialParameters {
    pub base_color: HexColor,
    /// Metalness in [0, 1].
    pub reflectivity: f32,
    /// `1 - roughness`, in [0, 1].
    pub surface_smoothness: f32,
    /// Environment map intensity, >= 0.
    pub environment_reflection_strength: f32,
}

// (reflectivity, smoothness, env strength) per finish
const METALLIC: (f32, f32, f32) = (0.90, 0.90, 1.5);
const MATTE: (f32, f32, f32) = (0.10, 0.10, 0.5);
const GLOSSY: (f32, f32, f32) = (0.30, 1.00, 2.0);

// Plain standard-material defaults: no metalness, fully rough, unit env map.
const PLAIN: (f32, f32, f32) = (0.0, 0.0, 1.0);

impl MaterialParameters {
    fn from_table(base_color: HexColor, (r, s, e): (f32, f32, f32)) -> Self {
        Self {
            base_color,
            reflectivity: r,
            surface_smoothness: s,
            environment_reflection_strength: e,
        }
    }

    /// Untuned material for a bare color.
    pub fn plain(base_color: HexColor) -> Self {
        Self::from_table(base_color, PLAIN)
    }

    pub fn roughness(&self) -> f32 {
        1.0 - self.surface_smoothness
    }

    /// Pack for a GPU uniform buffer.
    pub fn to_uniform(&self) -> MaterialUniform {
        let linear = self.base_color.to_linear();
        MaterialUniform {
            base_color: linear.extend(1.0).to_array(),
            metalness: self.reflectivity,
            roughness: self.roughness(),
            env_intensity: self.environment_reflection_strength,
            _pad: 0.0,
        }
    }
}

pub fn derive_material_parameters(color: HexColor, finish: Finish) -> MaterialParameters {
    let row = match finish {
        Finish::Metallic => METALLIC,
        Finish::Matte => MATTE,
        Finish::Glossy => GLOSSY,
    };
    MaterialParameters::from_table(color, row)
}

/// Like [`derive_material_parameters`] but for an unchecked finish identifier.
///
/// Unknown identifiers silently yield [`MaterialParameters::plain`]. Callers
/// holding external input should validate with `Finish::from_str` first.
pub fn derive_material_parameters_for_id(color: HexColor, finish_id: &str) -> MaterialParameters {
    match Finish::from_id(finish_id) {
        Some(finish) => derive_material_parameters(color, finish),
        None => MaterialParameters::plain(color),
    }
}

/// std140-compatible layout of [`MaterialParameters`], base color in linear space.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MaterialUniform {
    pub base_color: [f32; 4],
    pub metalness: f32,
    pub roughness: f32,
    pub env_intensity: f32,
    pub _pad: f32,
}
