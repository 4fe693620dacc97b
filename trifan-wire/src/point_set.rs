//! Point-set payload encoding and decoding

use trifan_core::{Error, Point2f, Result};

use crate::{read_f32, read_u32, HEADER_SIZE, POINT_SIZE};

/// Encode a point set into its wire payload.
///
/// Coordinates are emitted as big-endian IEEE-754 bit patterns; infinity
/// and NaN pass through without rejection. Fails only when the point
/// count does not fit the 32-bit header.
pub fn encode_point_set(points: &[Point2f]) -> Result<Vec<u8>> {
    let count = u32::try_from(points.len()).map_err(|_| {
        Error::Serialization(format!("Point count {} exceeds u32 range", points.len()))
    })?;

    let mut payload = Vec::with_capacity(HEADER_SIZE + points.len() * POINT_SIZE);
    payload.extend_from_slice(&count.to_be_bytes());
    for point in points {
        payload.extend_from_slice(&point.x.to_be_bytes());
        payload.extend_from_slice(&point.y.to_be_bytes());
    }

    Ok(payload)
}

/// Decode a point-set payload.
///
/// The buffer must hold the 4-byte count header and every declared point.
/// Trailing bytes beyond the declared payload are tolerated and ignored;
/// a short buffer is an error.
pub fn decode_point_set(data: &[u8]) -> Result<Vec<Point2f>> {
    if data.len() < HEADER_SIZE {
        return Err(Error::Serialization(
            "Payload too short to contain header".to_string(),
        ));
    }

    let count = read_u32(data, 0) as usize;
    let expected_size = HEADER_SIZE + count * POINT_SIZE;
    if data.len() < expected_size {
        return Err(Error::Serialization(
            "Payload smaller than expected".to_string(),
        ));
    }

    let mut points = Vec::with_capacity(count);
    let mut offset = HEADER_SIZE;
    for _ in 0..count {
        let x = read_f32(data, offset);
        let y = read_f32(data, offset + 4);
        points.push(Point2f::new(x, y));
        offset += POINT_SIZE;
    }

    Ok(points)
}
