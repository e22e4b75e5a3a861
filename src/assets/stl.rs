//! STL mesh decoding, binary and ASCII.
//!
//! Both variants are recognized by content. The binary check is the strong
//! one (the 50-byte-per-triangle length equation), so a binary file whose
//! 80-byte header happens to start with `solid` is still decoded as
//! binary.

use glam::Vec3;

use crate::assets::geometry::flat_normal;
use crate::assets::{Geometry, MeshFormat, MeshOptions};
use crate::errors::{EngineError, Result};

const HEADER_LEN: usize = 80;
const COUNT_LEN: usize = 4;
const TRIANGLE_LEN: usize = 50;

#[derive(Debug, Default, Clone, Copy)]
pub struct StlFormat;

impl MeshFormat for StlFormat {
    fn name(&self) -> &str {
        "stl"
    }

    fn sniff(&self, bytes: &[u8]) -> bool {
        binary_triangle_count(bytes).is_some() || looks_ascii(bytes)
    }

    fn decode(&self, bytes: &[u8], options: &MeshOptions) -> Result<Geometry> {
        let mut geometry = if binary_triangle_count(bytes).is_some() {
            decode_binary(bytes, options)?
        } else {
            decode_ascii(bytes, options)?
        };
        geometry.fill_color(options.color);
        Ok(geometry)
    }
}

/// Triangle count if `bytes` is a well-formed binary STL, i.e. the declared
/// count exactly accounts for the file length.
fn binary_triangle_count(bytes: &[u8]) -> Option<usize> {
    if bytes.len() < HEADER_LEN + COUNT_LEN {
        return None;
    }
    let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]) as usize;
    let expected = count
        .checked_mul(TRIANGLE_LEN)?
        .checked_add(HEADER_LEN + COUNT_LEN)?;
    (bytes.len() == expected).then_some(count)
}

fn looks_ascii(bytes: &[u8]) -> bool {
    let prefix = &bytes[..bytes.len().min(1024)];
    let Ok(text) = std::str::from_utf8(prefix) else {
        return false;
    };
    text.trim_start().starts_with("solid") && (text.contains("facet") || text.contains("endsolid"))
}

fn decode_binary(bytes: &[u8], options: &MeshOptions) -> Result<Geometry> {
    let count = binary_triangle_count(bytes).ok_or_else(|| {
        EngineError::MeshDecode("binary stl length does not match its triangle count".into())
    })?;

    let mut geometry = Geometry::new();
    geometry.positions.reserve(count * 3);
    geometry.normals.reserve(count * 3);

    for triangle in bytes[HEADER_LEN + COUNT_LEN..].chunks_exact(TRIANGLE_LEN) {
        let file_normal = read_vec3(&triangle[0..12]);
        let a = read_vec3(&triangle[12..24]);
        let b = read_vec3(&triangle[24..36]);
        let c = read_vec3(&triangle[36..48]);
        // Two trailing attribute bytes per triangle are ignored.
        geometry.positions.extend([a, b, c]);

        let normal = if options.recompute_normals || file_normal == Vec3::ZERO {
            flat_normal(a, b, c)
        } else {
            file_normal.normalize_or_zero()
        };
        geometry.normals.extend([normal; 3]);
    }
    Ok(geometry)
}

fn decode_ascii(bytes: &[u8], options: &MeshOptions) -> Result<Geometry> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| EngineError::MeshDecode("ascii stl is not valid utf-8".into()))?;

    let mut positions = Vec::new();
    let mut file_normals = Vec::new();
    let mut tokens = text.split_whitespace();
    while let Some(token) = tokens.next() {
        match token {
            "facet" => {
                if tokens.next() != Some("normal") {
                    return Err(EngineError::MeshDecode(
                        "ascii stl facet without a normal".into(),
                    ));
                }
                file_normals.push(parse_vec3(&mut tokens)?);
            }
            "vertex" => {
                positions.push(parse_vec3(&mut tokens)?);
            }
            _ => {}
        }
    }
    if positions.len() % 3 != 0 {
        return Err(EngineError::MeshDecode(format!(
            "ascii stl has {} vertices, not a multiple of three",
            positions.len()
        )));
    }

    let mut geometry = Geometry {
        positions,
        ..Geometry::new()
    };
    let use_file_normals =
        !options.recompute_normals && file_normals.len() == geometry.triangle_count();
    if use_file_normals {
        for (triangle, file_normal) in geometry.positions.chunks_exact(3).zip(&file_normals) {
            let normal = if *file_normal == Vec3::ZERO {
                flat_normal(triangle[0], triangle[1], triangle[2])
            } else {
                file_normal.normalize_or_zero()
            };
            geometry.normals.extend([normal; 3]);
        }
    } else {
        geometry.compute_flat_normals();
    }
    Ok(geometry)
}

fn parse_vec3<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<Vec3> {
    let mut components = [0.0f32; 3];
    for component in &mut components {
        let token = tokens
            .next()
            .ok_or_else(|| EngineError::MeshDecode("ascii stl ends mid-number".into()))?;
        *component = token.parse().map_err(|_| {
            EngineError::MeshDecode(format!("malformed number in ascii stl: {token}"))
        })?;
    }
    Ok(Vec3::from_array(components))
}

fn read_f32(bytes: &[u8]) -> f32 {
    f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn read_vec3(bytes: &[u8]) -> Vec3 {
    Vec3::new(
        read_f32(&bytes[0..4]),
        read_f32(&bytes[4..8]),
        read_f32(&bytes[8..12]),
    )
}
