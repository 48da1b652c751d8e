use geo::{LineString, Simplify};

/// Drop vertices that deviate less than `epsilon` from the line through their neighbours
/// (Ramer-Douglas-Peucker). Endpoints are always kept.
pub fn simplify_polyline(points: &[(f32, f32)], epsilon: f32) -> Vec<(f32, f32)> {
    if points.len() < 3 || epsilon <= 0.0 {
        return points.to_vec();
    }

    let line: LineString<f32> = points
        .iter()
        .map(|&(x, y)| geo::coord! { x: x, y: y })
        .collect();

    let simplified = line.simplify(&epsilon);

    simplified.0.into_iter().map(|c| (c.x, c.y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplify_short_untouched() {
        let points = vec![(0.0, 0.0), (1.0, 1.0)];
        assert_eq!(simplify_polyline(&points, 1.0), points);
    }

    #[test]
    fn test_simplify_drops_collinear() {
        // Four forward calls in the same direction
        let points = vec![(0.0, 0.0), (0.0, 10.0), (0.0, 20.0), (0.0, 30.0), (0.0, 40.0)];
        let result = simplify_polyline(&points, 0.01);
        assert_eq!(result, vec![(0.0, 0.0), (0.0, 40.0)]);
    }

    #[test]
    fn test_simplify_keeps_corners() {
        let square = vec![(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)];
        let result = simplify_polyline(&square, 0.01);
        assert_eq!(result.len(), 5);
    }
}
