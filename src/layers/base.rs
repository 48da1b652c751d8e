use crate::mesh::{MeshBuilder, Triangle};

/// Generate the base plate: a `size_mm` square box from z = 0 up to `thickness`
pub fn generate_base_plate(size_mm: f32, thickness: f32) -> Vec<Triangle> {
    let (x0, x1) = (0.0, size_mm);
    let (y0, y1) = (0.0, size_mm);
    let (zb, zt) = (0.0, thickness);

    let mut mesh = MeshBuilder::new();

    // Bottom (facing down) and top (facing up)
    mesh.add_quad([x0, y0, zb], [x0, y1, zb], [x1, y1, zb], [x1, y0, zb]);
    mesh.add_quad([x0, y0, zt], [x1, y0, zt], [x1, y1, zt], [x0, y1, zt]);
    // Front (y = 0) and back (y = size)
    mesh.add_quad([x0, y0, zb], [x1, y0, zb], [x1, y0, zt], [x0, y0, zt]);
    mesh.add_quad([x1, y1, zb], [x0, y1, zb], [x0, y1, zt], [x1, y1, zt]);
    // Left (x = 0) and right (x = size)
    mesh.add_quad([x0, y1, zb], [x0, y0, zb], [x0, y0, zt], [x0, y1, zt]);
    mesh.add_quad([x1, y0, zb], [x1, y1, zb], [x1, y1, zt], [x1, y0, zt]);

    mesh.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_plate_triangle_count() {
        // 6 faces * 2 triangles each
        assert_eq!(generate_base_plate(100.0, 2.0).len(), 12);
    }

    #[test]
    fn test_base_plate_normals_point_outward() {
        let centre = [50.0, 50.0, 1.0];
        for tri in generate_base_plate(100.0, 2.0) {
            let v = tri.vertices[0];
            let outward = [v[0] - centre[0], v[1] - centre[1], v[2] - centre[2]];
            let dot: f32 = (0..3).map(|i| outward[i] * tri.normal[i]).sum();
            assert!(dot > 0.0, "inward normal {:?}", tri.normal);
        }
    }
}
