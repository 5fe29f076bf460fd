use crate::scene::Shape;
use glam::Vec3;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    #[inline]
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        }
    }
}

/// Indexed triangle list with per-vertex normals.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn for_shape(shape: &Shape) -> Self {
        match *shape {
            Shape::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => torus(radius, tube, radial_segments, tubular_segments),
            Shape::Cone {
                radius,
                height,
                radial_segments,
            } => cone(radius, height, radial_segments),
            Shape::TorusKnot {
                radius,
                tube,
                tubular_segments,
                radial_segments,
                p,
                q,
            } => torus_knot(radius, tube, tubular_segments, radial_segments, p, q),
        }
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    // Two triangles per quad of a (rows+1) x (cols+1) vertex grid.
    fn push_grid(&mut self, base: u32, rows: u32, cols: u32) {
        let stride = cols + 1;
        for j in 1..=rows {
            for i in 1..=cols {
                let a = base + stride * j + i - 1;
                let b = base + stride * (j - 1) + i - 1;
                let c = base + stride * (j - 1) + i;
                let d = base + stride * j + i;
                self.indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }
    }
}

/// Ring torus around the Z axis: `radius` to the tube center, `tube` thickness.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let radial = radial_segments.max(2);
    let tubular = tubular_segments.max(3);
    let mut mesh = MeshData::default();
    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * TAU;
            let ring = radius + tube * v.cos();
            let position = Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.vertices.push(MeshVertex::new(position, position - center));
        }
    }
    mesh.push_grid(0, radial, tubular);
    mesh
}

/// Cone along Y with its apex at `+height/2` and a closed base.
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let segments = radial_segments.max(3);
    let half = height * 0.5;
    let slope = radius / height.max(f32::EPSILON);
    let mut mesh = MeshData::default();

    // Side: an apex ring (collapsed to a point) and a base ring.
    for row in 0..=1u32 {
        let r = radius * row as f32;
        let y = half - height * row as f32;
        for x in 0..=segments {
            let theta = x as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            mesh.vertices.push(MeshVertex::new(
                Vec3::new(r * sin, y, r * cos),
                Vec3::new(sin, slope, cos),
            ));
        }
    }
    let stride = segments + 1;
    for x in 0..segments {
        let b = stride + x;
        let c = stride + x + 1;
        let d = x + 1;
        // the apex row is degenerate, so only one triangle per segment
        mesh.indices.extend_from_slice(&[b, c, d]);
    }

    // Base cap facing -Y.
    let center_start = mesh.vertices.len() as u32;
    for _ in 0..segments {
        mesh.vertices
            .push(MeshVertex::new(Vec3::new(0.0, -half, 0.0), Vec3::NEG_Y));
    }
    let ring_start = mesh.vertices.len() as u32;
    for x in 0..=segments {
        let theta = x as f32 / segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        mesh.vertices.push(MeshVertex::new(
            Vec3::new(radius * sin, -half, radius * cos),
            Vec3::NEG_Y,
        ));
    }
    for x in 0..segments {
        let c = center_start + x;
        let i = ring_start + x;
        mesh.indices.extend_from_slice(&[i + 1, i, c]);
    }
    mesh
}

/// (p, q) torus knot swept with a circular tube.
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> MeshData {
    let tubular = tubular_segments.max(3);
    let radial = radial_segments.max(3);
    let p = p.max(1) as f32;
    let q = q as f32;
    let curve = |u: f32| {
        let qu_over_p = q / p * u;
        let cs = qu_over_p.cos();
        Vec3::new(
            radius * (2.0 + cs) * 0.5 * u.cos(),
            radius * (2.0 + cs) * 0.5 * u.sin(),
            radius * qu_over_p.sin() * 0.5,
        )
    };
    let mut mesh = MeshData::default();
    for i in 0..=tubular {
        let u = i as f32 / tubular as f32 * p * TAU;
        let p1 = curve(u);
        let p2 = curve(u + 0.01);
        // Frenet-like frame from the tangent and the position sum.
        let t = p2 - p1;
        let n = p2 + p1;
        let b = t.cross(n).normalize_or_zero();
        let n = b.cross(t).normalize_or_zero();
        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let position = p1 + n * cx + b * cy;
            mesh.vertices.push(MeshVertex::new(position, position - p1));
        }
    }
    mesh.push_grid(0, tubular, radial);
    mesh
}
