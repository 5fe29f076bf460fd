use crate::constants::{
    DEFAULT_MATERIAL_COLOR, DEFAULT_SEED, LIGHT_DIRECTION, LIGHT_INTENSITY, MAX_PARTICLE_COUNT,
    OBJECT_DISTANCE, PARTICLE_COUNT, PARTICLE_SIZE, PARTICLE_SPREAD, SECTION_X_OFFSETS,
};
use crate::error::ConfigError;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::prelude::*;

/// Parametric mesh kinds used by the sections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
        p: u32,
        q: u32,
    },
}

/// The rotatable object owned by one section.
#[derive(Clone, Debug)]
pub struct SectionObject {
    pub shape: Shape,
    pub position: Vec3,
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
}

impl SectionObject {
    pub fn model_matrix(&self) -> Mat4 {
        let r = self.rotation;
        let q = Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z);
        Mat4::from_rotation_translation(q, self.position)
    }
}

#[derive(Clone, Debug)]
pub struct Particles {
    pub positions: Vec<Vec3>,
    pub size: f32,
}

impl Particles {
    /// Scatter `count` points over the full scroll height of the page.
    ///
    /// Points start half a spacing above the first section and spread down
    /// past the last one so every section has a backdrop.
    pub fn scatter(count: usize, object_spacing: f32, section_count: usize, rng: &mut impl Rng) -> Self {
        let depth = object_spacing * section_count as f32;
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                    object_spacing * 0.5 - rng.gen::<f32>() * depth,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                )
            })
            .collect();
        Self {
            positions,
            size: PARTICLE_SIZE,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub intensity: f32,
}

/// Startup parameters for [`Scene::landing`].
#[derive(Clone, Debug, PartialEq)]
pub struct SceneParams {
    /// Linear RGB shared by the meshes and the particles.
    pub material_color: [f32; 3],
    pub particle_count: usize,
    pub object_spacing: f32,
    pub seed: u64,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            material_color: parse_hex_color(DEFAULT_MATERIAL_COLOR).unwrap_or([1.0, 1.0, 1.0]),
            particle_count: PARTICLE_COUNT,
            object_spacing: OBJECT_DISTANCE,
            seed: DEFAULT_SEED,
        }
    }
}

impl SceneParams {
    /// Apply optional textual overrides; bad values are logged and skipped.
    pub fn with_overrides(mut self, color: Option<&str>, particle_count: Option<&str>) -> Self {
        if let Some(raw) = color {
            match parse_hex_color(raw) {
                Ok(c) => self.material_color = c,
                Err(e) => log::warn!("[config] {}", e),
            }
        }
        if let Some(raw) = particle_count {
            match parse_particle_count(raw) {
                Ok(n) => self.particle_count = n,
                Err(e) => log::warn!("[config] {}", e),
            }
        }
        self
    }
}

/// Everything the renderer draws: section objects, particles and the light.
#[derive(Clone, Debug)]
pub struct Scene {
    pub sections: Vec<SectionObject>,
    pub particles: Particles,
    pub light: DirectionalLight,
    pub material_color: [f32; 3],
}

impl Scene {
    /// The three-section landing page layout.
    pub fn landing(params: &SceneParams) -> Self {
        let shapes = [
            Shape::Torus {
                radius: 1.0,
                tube: 0.4,
                radial_segments: 16,
                tubular_segments: 68,
            },
            Shape::Cone {
                radius: 1.0,
                height: 2.0,
                radial_segments: 32,
            },
            Shape::TorusKnot {
                radius: 0.8,
                tube: 0.35,
                tubular_segments: 100,
                radial_segments: 16,
                p: 2,
                q: 3,
            },
        ];
        let sections: Vec<SectionObject> = shapes
            .iter()
            .zip(SECTION_X_OFFSETS)
            .enumerate()
            .map(|(i, (shape, x))| SectionObject {
                shape: *shape,
                position: Vec3::new(x, -params.object_spacing * i as f32, 0.0),
                rotation: Vec3::ZERO,
            })
            .collect();
        let mut rng = StdRng::seed_from_u64(params.seed);
        let particles = Particles::scatter(
            params.particle_count,
            params.object_spacing,
            sections.len(),
            &mut rng,
        );
        Self {
            sections,
            particles,
            light: DirectionalLight {
                direction: LIGHT_DIRECTION,
                intensity: LIGHT_INTENSITY,
            },
            material_color: params.material_color,
        }
    }

    #[inline]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Bounds-checked lookup by (possibly negative) section index.
    pub fn section_mut(&mut self, index: i32) -> Option<&mut SectionObject> {
        usize::try_from(index)
            .ok()
            .and_then(move |i| self.sections.get_mut(i))
    }

    /// Add `delta` radians to the rotation of section `index`, if it exists.
    pub fn rotate_section(&mut self, index: usize, delta: Vec3) {
        if let Some(s) = self.sections.get_mut(index) {
            s.rotation += delta;
        }
    }

    /// Continuous per-frame spin of every section object.
    pub fn spin(&mut self, dt_sec: f32, rate_x: f32, rate_y: f32) {
        for s in &mut self.sections {
            s.rotation.x += dt_sec * rate_x;
            s.rotation.y += dt_sec * rate_y;
        }
    }
}

/// Parse `#rrggbb` or `#rgb` (leading `#` optional) into linear RGB.
pub fn parse_hex_color(raw: &str) -> Result<[f32; 3], ConfigError> {
    let invalid = || ConfigError::InvalidColor(raw.to_string());
    let hex = raw.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return Err(invalid());
    }
    let channels: [u8; 3] = match hex.len() {
        6 => {
            let mut out = [0u8; 3];
            for (i, c) in out.iter_mut().enumerate() {
                *c = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
            }
            out
        }
        3 => {
            let mut out = [0u8; 3];
            for (i, c) in out.iter_mut().enumerate() {
                let nibble = u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| invalid())?;
                *c = nibble * 17;
            }
            out
        }
        _ => return Err(invalid()),
    };
    Ok(channels.map(|c| srgb_to_linear(c as f32 / 255.0)))
}

pub fn parse_particle_count(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n <= MAX_PARTICLE_COUNT => Ok(n),
        _ => Err(ConfigError::InvalidParticleCount(
            raw.to_string(),
            MAX_PARTICLE_COUNT,
        )),
    }
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
