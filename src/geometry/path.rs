use log::debug;

use super::angles::{heading_to_point, normalize_heading};
use crate::domain::Point;
use crate::error::{GeometryError, Result};

/// Plan the clockwise turns needed to visit `points` in order
///
/// The turtle starts on `points[0]` facing north. Each entry is the turn to make at
/// `points[i]` before moving to `points[i + 1]`, relative to the heading left over from the
/// previous move. The result has `points.len() - 1` entries, or none for fewer than two
/// points.
pub fn headings_for_path(points: &[Point]) -> Vec<f64> {
    let mut turns = Vec::with_capacity(points.len().saturating_sub(1));
    let mut heading = 0.0;

    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let turn = heading_to_point(heading, from.x, from.y, to.x, to.y);
        heading = normalize_heading(heading + turn);
        debug!("{} -> {}: turn {:.3}, now facing {:.3}", from, to, turn, heading);
        turns.push(turn);
    }

    turns
}

/// [`headings_for_path`] over parallel coordinate lists
///
/// # Errors
/// * `MismatchedLengths` if `xs` and `ys` differ in length
pub fn headings_for_coords(xs: &[i32], ys: &[i32]) -> Result<Vec<f64>> {
    if xs.len() != ys.len() {
        return Err(GeometryError::MismatchedLengths {
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }

    let points: Vec<Point> = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| Point::new(x, y))
        .collect();
    Ok(headings_for_path(&points))
}
