//! Mesh payload encoding and decoding

use trifan_core::{Error, Point2f, Result, Triangle};

use crate::point_set::{decode_point_set, encode_point_set};
use crate::{read_u32, HEADER_SIZE, POINT_SIZE, TRIANGLE_SIZE};

/// Encode a point set and its triangulation into a mesh payload.
///
/// Every triangle index must reference an existing point; a violation is
/// rejected before any triangle bytes are emitted.
pub fn encode_mesh(points: &[Point2f], triangles: &[Triangle]) -> Result<Vec<u8>> {
    let mut payload = encode_point_set(points)?;

    for triangle in triangles {
        for &idx in triangle {
            if idx as usize >= points.len() {
                return Err(Error::Serialization(format!(
                    "Triangle index out of bounds: {idx} (point count {})",
                    points.len()
                )));
            }
        }
    }

    let tri_count = u32::try_from(triangles.len()).map_err(|_| {
        Error::Serialization(format!("Triangle count {} exceeds u32 range", triangles.len()))
    })?;

    payload.reserve(HEADER_SIZE + triangles.len() * TRIANGLE_SIZE);
    payload.extend_from_slice(&tri_count.to_be_bytes());
    for &[a, b, c] in triangles {
        payload.extend_from_slice(&a.to_be_bytes());
        payload.extend_from_slice(&b.to_be_bytes());
        payload.extend_from_slice(&c.to_be_bytes());
    }

    Ok(payload)
}

/// Decode a mesh payload into its point set and triangle list.
///
/// The point section follows the same header-and-length rules as
/// [`decode_point_set`], but the total buffer length must match the
/// declared sections exactly; unlike point-set decoding, trailing bytes
/// are an error here.
pub fn decode_mesh(data: &[u8]) -> Result<(Vec<Point2f>, Vec<Triangle>)> {
    if data.len() < HEADER_SIZE {
        return Err(Error::Serialization("Payload too short".to_string()));
    }

    let point_count = read_u32(data, 0) as usize;
    let points_end = HEADER_SIZE + point_count * POINT_SIZE;
    if data.len() < points_end {
        return Err(Error::Serialization(
            "Payload too short for points".to_string(),
        ));
    }
    let points = decode_point_set(&data[..points_end])?;

    if data.len() < points_end + HEADER_SIZE {
        return Err(Error::Serialization(
            "Missing triangle count header".to_string(),
        ));
    }
    let tri_count = read_u32(data, points_end) as usize;

    let expected_total = points_end + HEADER_SIZE + tri_count * TRIANGLE_SIZE;
    if data.len() != expected_total {
        return Err(Error::Serialization(
            "Payload size mismatch for triangles section".to_string(),
        ));
    }

    let mut triangles = Vec::with_capacity(tri_count);
    let mut offset = points_end + HEADER_SIZE;
    for _ in 0..tri_count {
        triangles.push([
            read_u32(data, offset),
            read_u32(data, offset + 4),
            read_u32(data, offset + 8),
        ]);
        offset += TRIANGLE_SIZE;
    }

    Ok((points, triangles))
}
