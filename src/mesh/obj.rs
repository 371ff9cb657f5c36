//! Wavefront OBJ parsing.
//!
//! Only positions and faces are read. Faces may be arbitrary convex polygons;
//! they are fan-triangulated around their first corner. Texture coordinate and
//! normal references on face corners are accepted but ignored.

use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};

use crate::math::Vec3;

/// Reads and parses the OBJ file at `path`.
///
/// See [`parse_obj`] for the returned layout.
pub fn load_obj(path: impl AsRef<Path>) -> Result<Vec<Vec3>> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read OBJ file {}", path.display()))?;
    parse_obj(&source).with_context(|| format!("Failed to parse OBJ file {}", path.display()))
}

/// Parses OBJ source into a triangle list: three positions per triangle, in
/// face order.
pub fn parse_obj(source: &str) -> Result<Vec<Vec3>> {
    let mut positions = Vec::new();
    let mut corners: Vec<(usize, u32)> = Vec::new();

    for (number, line) in source.lines().enumerate() {
        let number = number + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => positions.push(parse_position(tokens, number)?),
            Some("f") => {
                let polygon = tokens
                    .map(|corner| parse_corner(corner, number))
                    .collect::<Result<Vec<_>>>()?;
                if polygon.len() < 3 {
                    bail!("line {number}: face needs at least 3 vertices, got {}", polygon.len());
                }
                for i in 1..polygon.len() - 1 {
                    corners.push((number, polygon[0]));
                    corners.push((number, polygon[i]));
                    corners.push((number, polygon[i + 1]));
                }
            }
            Some(other) => log::trace!("line {number}: skipping unsupported statement `{other}`"),
            None => {}
        }
    }

    let triangles = corners
        .into_iter()
        .map(|(number, index)| {
            positions.get(index as usize).copied().ok_or_else(|| {
                anyhow!(
                    "line {number}: vertex index {} out of range ({} vertices declared)",
                    index + 1,
                    positions.len()
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "Parsed OBJ: {} vertices, {} triangles",
        positions.len(),
        triangles.len() / 3
    );
    Ok(triangles)
}

fn parse_position<'a>(mut tokens: impl Iterator<Item = &'a str>, number: usize) -> Result<Vec3> {
    let mut component = || -> Result<f32> {
        let token = tokens
            .next()
            .ok_or_else(|| anyhow!("line {number}: vertex needs 3 coordinates"))?;
        token
            .parse()
            .with_context(|| format!("line {number}: invalid vertex coordinate `{token}`"))
    };
    Ok(Vec3::new(component()?, component()?, component()?))
}

/// Parses one face corner (`i`, `i/t`, `i//n` or `i/t/n`) into a 0-based position index.
fn parse_corner(corner: &str, number: usize) -> Result<u32> {
    let index = corner.split('/').next().unwrap_or_default();
    let index: u32 = index
        .parse()
        .with_context(|| format!("line {number}: invalid face index `{corner}`"))?;
    if index == 0 {
        bail!("line {number}: face indices start at 1");
    }
    Ok(index - 1)
}
