use log::debug;

use crate::config::RenderConfig;
use crate::domain::PenColor;
use crate::geometry::Scaler;
use crate::geometry::simplify::simplify_polyline;
use crate::mesh::{Triangle, extrude_ribbon};

/// Height assigned to one pen color
#[derive(Debug, Clone, PartialEq)]
pub struct ColorLayer {
    pub color: PenColor,
    /// Absolute top of the lines drawn in this color, in mm
    pub z_top: f32,
}

/// Extrude every polyline of a trace into a ribbon standing on the base plate
///
/// Pen colors are stacked in order of first use: the first color reaches
/// `base_height + line_height`, each later one `color_step` higher. Returns the triangles and
/// the color layers in stacking order.
pub fn generate_trace_meshes(
    polylines: &[(Vec<(f64, f64)>, PenColor)],
    scaler: &Scaler,
    config: &RenderConfig,
) -> (Vec<Triangle>, Vec<ColorLayer>) {
    let mut layers: Vec<ColorLayer> = Vec::new();
    let mut triangles = Vec::new();

    for (points, color) in polylines {
        let z_top = match layers.iter().find(|l| l.color == *color) {
            Some(layer) => layer.z_top,
            None => {
                let z_top = config.base_height
                    + config.line_height
                    + layers.len() as f32 * config.color_step;
                layers.push(ColorLayer {
                    color: *color,
                    z_top,
                });
                z_top
            }
        };

        let scaled = scaler.scale_points(points);
        let simplified = simplify_polyline(&scaled, config.simplify_epsilon);
        debug!(
            "{} polyline: {} -> {} points, top at {:.1}mm",
            color.name(),
            scaled.len(),
            simplified.len(),
            z_top
        );

        // Bottom sits inside the plate so the columns fuse with it
        let z_bottom = config.base_height * 0.5;
        triangles.extend(extrude_ribbon(&simplified, config.line_width, z_bottom, z_top));
    }

    (triangles, layers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Bounds;

    fn scaler() -> Scaler {
        let bounds = Bounds::from_points(&[(0.0, 0.0), (100.0, 100.0)]).unwrap();
        Scaler::from_bounds(&bounds, 100.0)
    }

    #[test]
    fn test_empty_trace() {
        let (triangles, layers) = generate_trace_meshes(&[], &scaler(), &RenderConfig::default());
        assert!(triangles.is_empty());
        assert!(layers.is_empty());
    }

    #[test]
    fn test_colors_stack_in_first_use_order() {
        let config = RenderConfig::default();
        let line = vec![(0.0, 0.0), (0.0, 50.0)];
        let polylines = vec![
            (line.clone(), PenColor::Red),
            (line.clone(), PenColor::Green),
            (line, PenColor::Red),
        ];

        let (triangles, layers) = generate_trace_meshes(&polylines, &scaler(), &config);

        assert_eq!(triangles.len(), 3 * 12);
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].color, PenColor::Red);
        assert_eq!(layers[1].color, PenColor::Green);
        let first_top = config.base_height + config.line_height;
        assert!((layers[0].z_top - first_top).abs() < 1e-6);
        assert!((layers[1].z_top - first_top - config.color_step).abs() < 1e-6);
    }

    #[test]
    fn test_collinear_moves_become_one_segment() {
        let line = vec![(0.0, 0.0), (0.0, 25.0), (0.0, 50.0), (0.0, 75.0)];
        let (triangles, _) =
            generate_trace_meshes(&[(line, PenColor::Black)], &scaler(), &RenderConfig::default());
        assert_eq!(triangles.len(), 12);
    }
}
