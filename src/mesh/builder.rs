/// A triangle for STL output
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Three vertices: [[x, y, z], [x, y, z], [x, y, z]]
    pub vertices: [[f32; 3]; 3],
    /// Unit normal [nx, ny, nz]
    pub normal: [f32; 3],
}

impl Triangle {
    /// Create a new triangle; the normal follows the right-hand rule over `v0, v1, v2`
    pub fn new(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> Self {
        let vertices = [v0, v1, v2];
        Self {
            normal: face_normal(&vertices),
            vertices,
        }
    }

    /// Area of the triangle in square mm
    pub fn area(&self) -> f32 {
        0.5 * length(cross(&self.vertices))
    }
}

fn cross(vertices: &[[f32; 3]; 3]) -> [f32; 3] {
    let [v0, v1, v2] = vertices;
    let u = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
    let v = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

fn length(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Unit normal of a triangle, or +Z for degenerate triangles
pub fn face_normal(vertices: &[[f32; 3]; 3]) -> [f32; 3] {
    let n = cross(vertices);
    let len = length(n);
    if len > 1e-10 {
        [n[0] / len, n[1] / len, n[2] / len]
    } else {
        [0.0, 0.0, 1.0]
    }
}

/// Accumulator for building triangle meshes
#[derive(Debug, Default)]
pub struct MeshBuilder {
    triangles: Vec<Triangle>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_triangle(&mut self, v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) {
        self.triangles.push(Triangle::new(v0, v1, v2));
    }

    /// Add a quad as two triangles. Vertices go counter-clockwise seen from outside.
    pub fn add_quad(&mut self, v0: [f32; 3], v1: [f32; 3], v2: [f32; 3], v3: [f32; 3]) {
        self.add_triangle(v0, v1, v2);
        self.add_triangle(v0, v2, v3);
    }

    pub fn extend(&mut self, triangles: impl IntoIterator<Item = Triangle>) {
        self.triangles.extend(triangles);
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn finish(self) -> Vec<Triangle> {
        self.triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_normal() {
        let tri = Triangle::new([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);

        assert!((tri.normal[0]).abs() < 0.001);
        assert!((tri.normal[1]).abs() < 0.001);
        assert!((tri.normal[2] - 1.0).abs() < 0.001);
        assert!((tri.area() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_degenerate_normal_defaults_up() {
        let tri = Triangle::new([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]);
        assert_eq!(tri.normal, [0.0, 0.0, 1.0]);
        assert_eq!(tri.area(), 0.0);
    }

    #[test]
    fn test_mesh_builder() {
        let mut builder = MeshBuilder::new();
        assert!(builder.is_empty());
        builder.add_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        builder.add_quad(
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        );

        assert_eq!(builder.len(), 3);
        assert_eq!(builder.finish().len(), 3);
    }
}
