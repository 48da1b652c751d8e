use super::{MeshBuilder, Triangle};

/// Longest miter offset allowed, as a multiple of half the ribbon width
const MITER_LIMIT: f32 = 4.0;

/// Extrude a 2D polyline into a solid ribbon between `z_bottom` and `z_top`
///
/// Corners get a mitered join. A polyline whose last point repeats its first is treated as a
/// closed loop: the closing corner is mitered as well and no end caps are emitted.
///
/// # Arguments
/// * `points` - 2D points in mm [(x, y), ...]
/// * `width` - Ribbon width in mm
pub fn extrude_ribbon(points: &[(f32, f32)], width: f32, z_bottom: f32, z_top: f32) -> Vec<Triangle> {
    let closed = points.len() > 3 && same_point(points[0], points[points.len() - 1]);
    let path = if closed {
        &points[..points.len() - 1]
    } else {
        points
    };
    if path.len() < 2 {
        return Vec::new();
    }

    let half_width = width / 2.0;
    let n = path.len();

    let edges: Vec<([f32; 2], [f32; 2])> = (0..n)
        .map(|i| {
            let incoming = if i > 0 {
                Some(direction(path[i - 1], path[i]))
            } else if closed {
                Some(direction(path[n - 1], path[0]))
            } else {
                None
            };
            let outgoing = if i + 1 < n {
                Some(direction(path[i], path[i + 1]))
            } else if closed {
                Some(direction(path[n - 1], path[0]))
            } else {
                None
            };

            let (dir, offset) = match (incoming, outgoing) {
                (Some(d1), Some(d2)) => miter(d1, d2, half_width),
                (Some(d), None) | (None, Some(d)) => (d, half_width),
                (None, None) => ((1.0, 0.0), half_width),
            };

            // Left-hand perpendicular
            let (px, py) = (-dir.1, dir.0);
            let (x, y) = path[i];
            let left = [x + px * offset, y + py * offset];
            let right = [x - px * offset, y - py * offset];
            (left, right)
        })
        .collect();

    let mut mesh = MeshBuilder::new();
    let segment_count = if closed { n } else { n - 1 };
    for i in 0..segment_count {
        let (l0, r0) = edges[i];
        let (l1, r1) = edges[(i + 1) % n];

        let at = |p: [f32; 2], z: f32| [p[0], p[1], z];

        // Top faces up, bottom faces down
        mesh.add_quad(at(r0, z_top), at(r1, z_top), at(l1, z_top), at(l0, z_top));
        mesh.add_quad(at(l0, z_bottom), at(l1, z_bottom), at(r1, z_bottom), at(r0, z_bottom));
        // Sides
        mesh.add_quad(at(l0, z_bottom), at(l0, z_top), at(l1, z_top), at(l1, z_bottom));
        mesh.add_quad(at(r0, z_bottom), at(r1, z_bottom), at(r1, z_top), at(r0, z_top));
    }

    if !closed {
        let at = |p: [f32; 2], z: f32| [p[0], p[1], z];
        let (l, r) = edges[0];
        mesh.add_quad(at(l, z_bottom), at(r, z_bottom), at(r, z_top), at(l, z_top));
        let (l, r) = edges[n - 1];
        mesh.add_quad(at(r, z_bottom), at(l, z_bottom), at(l, z_top), at(r, z_top));
    }

    mesh.finish()
}

/// Direction and offset length for a join between two unit directions
fn miter(d1: (f32, f32), d2: (f32, f32), half_width: f32) -> ((f32, f32), f32) {
    let sum = (d1.0 + d2.0, d1.1 + d2.1);
    if sum.0.abs() < 1e-6 && sum.1.abs() < 1e-6 {
        // Full reversal: no sensible miter, fall back to the outgoing direction
        return (d2, half_width);
    }
    let m = normalize(sum);
    let cos_half = (m.0 * d2.0 + m.1 * d2.1).max(1.0 / MITER_LIMIT);
    (m, half_width / cos_half)
}

fn same_point(a: (f32, f32), b: (f32, f32)) -> bool {
    (a.0 - b.0).abs() < 1e-4 && (a.1 - b.1).abs() < 1e-4
}

/// Calculate normalized direction vector between two points
fn direction(p1: (f32, f32), p2: (f32, f32)) -> (f32, f32) {
    normalize((p2.0 - p1.0, p2.1 - p1.1))
}

fn normalize((x, y): (f32, f32)) -> (f32, f32) {
    let len = (x * x + y * y).sqrt();
    if len > 1e-10 {
        (x / len, y / len)
    } else {
        (1.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extrude_simple_segment() {
        let triangles = extrude_ribbon(&[(0.0, 0.0), (10.0, 0.0)], 2.0, 0.0, 1.0);

        // 8 triangles for the segment plus 4 for the end caps
        assert_eq!(triangles.len(), 12);
    }

    #[test]
    fn test_extrude_too_short() {
        assert!(extrude_ribbon(&[], 2.0, 0.0, 1.0).is_empty());
        assert!(extrude_ribbon(&[(0.0, 0.0)], 2.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn test_closed_loop_has_no_caps() {
        let square = [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)];
        let triangles = extrude_ribbon(&square, 1.0, 0.0, 1.0);
        assert_eq!(triangles.len(), 4 * 8);
    }

    #[test]
    fn test_top_faces_point_up() {
        let triangles = extrude_ribbon(&[(0.0, 0.0), (0.0, 10.0), (5.0, 12.0)], 1.0, 2.0, 3.0);
        let tops: Vec<&Triangle> = triangles
            .iter()
            .filter(|t| t.vertices.iter().all(|v| v[2] == 3.0))
            .collect();
        assert_eq!(tops.len(), 4);
        assert!(tops.iter().all(|t| t.normal[2] > 0.99));
    }

    #[test]
    fn test_end_caps_face_outward() {
        let triangles = extrude_ribbon(&[(0.0, 0.0), (10.0, 0.0)], 2.0, 0.0, 1.0);
        let start_cap: Vec<&Triangle> = triangles
            .iter()
            .filter(|t| t.vertices.iter().all(|v| v[0] == 0.0))
            .collect();
        assert_eq!(start_cap.len(), 2);
        assert!(start_cap.iter().all(|t| t.normal[0] < -0.99));
    }

    #[test]
    fn test_miter_widens_corners() {
        let (dir, offset) = miter((0.0, 1.0), (1.0, 0.0), 1.0);
        let s = std::f32::consts::FRAC_1_SQRT_2;
        assert!((dir.0 - s).abs() < 1e-5 && (dir.1 - s).abs() < 1e-5);
        assert!((offset - std::f32::consts::SQRT_2).abs() < 1e-4);
    }
}
