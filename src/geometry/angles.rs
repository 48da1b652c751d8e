//! Angle arithmetic for regular polygons and compass headings
//!
//! Headings are measured in degrees **clockwise** from north (+y), so east (+x) is 90 and
//! west is 270. Every heading or turn returned from this module lies in `[0, 360)`.

use crate::error::{GeometryError, Result};

const STRAIGHT_ANGLE: f64 = 180.0;
const FULL_TURN: f64 = 360.0;

/// Map any finite angle in degrees into `[0, 360)`
pub fn normalize_heading(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Interior angle of a regular polygon with `sides` sides, in degrees
///
/// # Errors
/// * `TooFewSides` if `sides <= 2`
pub fn regular_polygon_interior_angle(sides: u32) -> Result<f64> {
    if sides <= 2 {
        return Err(GeometryError::TooFewSides(sides));
    }
    let n = sides as f64;
    Ok((n - 2.0) * STRAIGHT_ANGLE / n)
}

/// Infer the side count of a regular polygon from its interior angle
///
/// Works through the exterior angle (`180 - angle`), which sums to 360 around any convex
/// polygon. The quotient is rounded half away from zero.
///
/// # Errors
/// * `AngleOutOfRange` if `angle` is not finite or not strictly inside `(0, 180)`
/// * `TooManySides` if `angle` is so close to 180 that the count does not fit a `u32`
pub fn sides_from_interior_angle(angle: f64) -> Result<u32> {
    if !angle.is_finite() || angle <= 0.0 || angle >= STRAIGHT_ANGLE {
        return Err(GeometryError::AngleOutOfRange(angle));
    }
    let exterior = STRAIGHT_ANGLE - angle;
    let sides = (FULL_TURN / exterior).round();
    if sides > u32::MAX as f64 {
        return Err(GeometryError::TooManySides { angle, sides });
    }
    Ok(sides as u32)
}

/// Clockwise turn that makes a turtle at `(current_x, current_y)` facing `current_heading`
/// face `(target_x, target_y)`
///
/// `current_heading` need not be normalized. Returns 0 when the target is the current
/// position.
pub fn heading_to_point(
    current_heading: f64,
    current_x: i32,
    current_y: i32,
    target_x: i32,
    target_y: i32,
) -> f64 {
    let dx = target_x as f64 - current_x as f64;
    let dy = target_y as f64 - current_y as f64;
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }

    // atan2(dx, dy) rather than atan2(dy, dx): bearings are measured from +y, clockwise
    let bearing = normalize_heading(dx.atan2(dy).to_degrees());
    normalize_heading(bearing - current_heading)
}
