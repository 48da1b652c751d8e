//! Clean-up pass run over a mesh before it is written
//!
//! Drops triangles with NaN/Inf coordinates or (near) zero area and recomputes every normal
//! from its winding.

use log::warn;

use super::Triangle;
use super::builder::face_normal;

/// Minimum area for a triangle to be kept, in square mm
const MIN_TRIANGLE_AREA: f32 = 1e-10;

/// What the clean-up pass found
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub total: usize,
    pub degenerate: usize,
    pub invalid_coords: usize,
    pub invalid_normal: usize,
}

impl ValidationReport {
    pub fn has_issues(&self) -> bool {
        self.degenerate > 0 || self.invalid_coords > 0 || self.invalid_normal > 0
    }

    pub fn summary(&self) -> String {
        if !self.has_issues() {
            format!("Mesh valid: {} triangles, no issues", self.total)
        } else {
            format!(
                "Mesh issues: {} total, {} degenerate, {} invalid coords, {} bad normals",
                self.total, self.degenerate, self.invalid_coords, self.invalid_normal
            )
        }
    }
}

fn has_invalid_coords(tri: &Triangle) -> bool {
    tri.vertices
        .iter()
        .flatten()
        .chain(tri.normal.iter())
        .any(|c| !c.is_finite())
}

fn is_degenerate(tri: &Triangle) -> bool {
    tri.area() < MIN_TRIANGLE_AREA
}

/// Unit length and finite
fn is_normal_valid(normal: &[f32; 3]) -> bool {
    let len_sq = normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2];
    len_sq.is_finite() && (0.99..=1.01).contains(&len_sq)
}

/// Inspect a mesh without changing it
pub fn validate_mesh(triangles: &[Triangle]) -> ValidationReport {
    let mut report = ValidationReport {
        total: triangles.len(),
        ..Default::default()
    };

    for tri in triangles {
        if has_invalid_coords(tri) {
            report.invalid_coords += 1;
            continue;
        }
        if is_degenerate(tri) {
            report.degenerate += 1;
        }
        if !is_normal_valid(&tri.normal) {
            report.invalid_normal += 1;
        }
    }

    report
}

/// Validate, recompute normals and drop unusable triangles
pub fn validate_and_fix(triangles: Vec<Triangle>) -> (Vec<Triangle>, ValidationReport) {
    let report = validate_mesh(&triangles);
    if report.has_issues() {
        warn!("{}", report.summary());
    }

    let cleaned = triangles
        .into_iter()
        .filter(|tri| !has_invalid_coords(tri) && !is_degenerate(tri))
        .map(|mut tri| {
            tri.normal = face_normal(&tri.vertices);
            tri
        })
        .collect();

    (cleaned, report)
}
