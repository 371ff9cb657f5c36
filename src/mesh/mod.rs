//! Model loading and vertex/index buffer preparation.
//!
//! A loaded model goes through three steps before it reaches the GPU:
//! - **Recentering**: the centroid of all triangle corners is moved to the
//!   origin so the model spins in place.
//! - **Texture mapping**: OBJ texture coordinates are not read; every vertex
//!   gets a spherical projection of its direction from the origin instead.
//! - **Deduplication**: bit-identical vertices share one entry in the vertex
//!   buffer and are referenced through the index buffer. Negative zero is
//!   folded into positive zero first, so `-0` and `0` coordinates match.

pub mod obj;

use std::collections::HashMap;
use std::f32::consts::PI;
use std::path::Path;

use anyhow::{Result, bail};

use crate::math::{Vec2, Vec3};
use crate::renderer::vertex::Vertex;

/// Color given to every loaded vertex.
pub const DEFAULT_VERTEX_COLOR: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// Indexed triangle mesh ready for upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Loads an OBJ model and prepares it for rendering.
    ///
    /// # Errors
    /// Fails if the file cannot be read or parsed, or if it contains no faces.
    pub fn load(path: impl AsRef<Path>) -> Result<Mesh> {
        let path = path.as_ref();
        let triangles = obj::load_obj(path)?;
        if triangles.is_empty() {
            bail!("OBJ file {} contains no faces", path.display());
        }
        let mesh = Mesh::from_triangles(&triangles);
        log::debug!(
            "Loaded {}: {} unique vertices, {} triangles",
            path.display(),
            mesh.vertices.len(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Builds an indexed mesh from a triangle list (three positions per triangle).
    pub fn from_triangles(triangles: &[Vec3]) -> Mesh {
        if triangles.is_empty() {
            return Mesh::default();
        }

        let sum = triangles.iter().fold(Vec3::ZERO, |acc, &p| acc + p);
        let center = sum / triangles.len() as f32;

        let mut mesh = Mesh::default();
        let mut unique: HashMap<[u32; 8], u32> = HashMap::new();

        for &position in triangles {
            let pos = without_negative_zero(position - center);
            let vertex = Vertex {
                pos,
                color: DEFAULT_VERTEX_COLOR,
                tex_coord: spherical_tex_coord(pos),
            };

            let key: [u32; 8] = bytemuck::cast(vertex);
            let index = *unique.entry(key).or_insert_with(|| {
                mesh.vertices.push(vertex);
                (mesh.vertices.len() - 1) as u32
            });
            mesh.indices.push(index);
        }

        mesh
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

fn without_negative_zero(v: Vec3) -> Vec3 {
    let fold = |c: f32| if c == 0.0 { 0.0 } else { c };
    Vec3::new(fold(v.x), fold(v.y), fold(v.z))
}

/// Maps a direction from the origin onto the unit square.
///
/// `s` follows the longitude around the y axis and `t` the polar angle from +y.
/// The origin itself has no direction and maps to NaN.
pub fn spherical_tex_coord(pos: Vec3) -> Vec2 {
    let theta = pos.z.atan2(pos.x) / (2.0 * PI);
    let phi = (pos.y / pos.length()).acos() / PI;
    Vec2::new(theta + 0.5, phi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_triangles() -> Vec<Vec3> {
        let (a, b, c, d) = (
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(2.0, 2.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        );
        vec![a, b, c, a, c, d]
    }

    #[test]
    fn test_shared_corners_are_deduplicated() {
        let mesh = Mesh::from_triangles(&square_triangles());
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_positions_are_recentered_on_corner_centroid() {
        let mesh = Mesh::from_triangles(&square_triangles());
        // The centroid counts repeated corners; here it lands on (1, 1, 0).
        assert_eq!(mesh.vertices[0].pos, Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(mesh.vertices[2].pos, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_negative_zero_matches_positive_zero() {
        let (top, left, right) = (
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
        );
        let top_negative = Vec3::new(-0.0, 2.0, -0.0);
        let mesh = Mesh::from_triangles(&[top, left, right, top_negative, left, right]);

        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 1, 2]);
        assert!(mesh.vertices[0].pos.x.is_sign_positive());
        assert!(mesh.vertices[0].pos.z.is_sign_positive());
    }

    #[test]
    fn test_vertices_are_white() {
        let mesh = Mesh::from_triangles(&square_triangles());
        assert!(mesh.vertices.iter().all(|v| v.color == DEFAULT_VERTEX_COLOR));
    }

    #[test]
    fn test_empty_input_gives_empty_mesh() {
        assert_eq!(Mesh::from_triangles(&[]), Mesh::default());
    }

    #[test]
    fn test_spherical_tex_coord_poles_and_equator() {
        let north = spherical_tex_coord(Vec3::Y);
        assert!((north.t - 0.0).abs() < 1e-6);
        let south = spherical_tex_coord(-Vec3::Y);
        assert!((south.t - 1.0).abs() < 1e-6);

        let east = spherical_tex_coord(Vec3::X);
        assert!((east.s - 0.5).abs() < 1e-6);
        assert!((east.t - 0.5).abs() < 1e-6);

        let front = spherical_tex_coord(Vec3::Z);
        assert!((front.s - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_spherical_tex_coord_of_origin_is_nan() {
        assert!(spherical_tex_coord(Vec3::ZERO).t.is_nan());
    }

    #[test]
    fn test_load_parses_and_indexes_file() {
        let path = std::env::temp_dir().join(format!("scop-mesh-{}.obj", std::process::id()));
        std::fs::write(&path, "v -1 0 0\nv 1 0 0\nv 0 1 0\nv 0 -1 0\nf 1 2 3\nf 1 4 2\n")
            .unwrap();
        let mesh = Mesh::load(&path);
        std::fs::remove_file(&path).unwrap();

        let mesh = mesh.unwrap();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 3, 1]);
    }

    #[test]
    fn test_load_rejects_file_without_faces() {
        let path = std::env::temp_dir().join(format!("scop-empty-{}.obj", std::process::id()));
        std::fs::write(&path, "v 0 0 0\n").unwrap();
        let result = Mesh::load(&path);
        std::fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("no faces"), "{err}");
    }
}
