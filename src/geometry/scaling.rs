/// Bounding box of a trace in turtle units
#[derive(Debug, Clone)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds from a set of points
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        let mut iter = points.iter();
        let &(x0, y0) = iter.next()?;
        let mut bounds = Self {
            min_x: x0,
            max_x: x0,
            min_y: y0,
            max_y: y0,
        };
        bounds.expand(iter.as_slice());
        Some(bounds)
    }

    /// Expand bounds to include another set of points
    pub fn expand(&mut self, points: &[(f64, f64)]) {
        for &(x, y) in points {
            self.min_x = self.min_x.min(x);
            self.max_x = self.max_x.max(x);
            self.min_y = self.min_y.min(y);
            self.max_y = self.max_y.max(y);
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Maps turtle units onto a square plate measured in mm
#[derive(Debug, Clone)]
pub struct Scaler {
    /// Scale factor: mm per turtle unit
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Scaler {
    /// Fit `bounds` into a `target_mm` square plate with no margin
    pub fn from_bounds(bounds: &Bounds, target_mm: f64) -> Self {
        Self::from_bounds_with_margin(bounds, target_mm, 0.0)
    }

    /// Fit `bounds` into a `target_mm` square plate, keeping `margin_mm` free on every side
    ///
    /// The larger trace dimension fills the usable area; the drawing is centered on the plate.
    pub fn from_bounds_with_margin(bounds: &Bounds, target_mm: f64, margin_mm: f64) -> Self {
        let width = bounds.width();
        let height = bounds.height();

        let usable = (target_mm - 2.0 * margin_mm).max(0.0);
        let max_dim = width.max(height);

        let scale = if max_dim > 0.0 { usable / max_dim } else { 1.0 };

        let offset_x = (target_mm - width * scale) / 2.0 - bounds.min_x * scale;
        let offset_y = (target_mm - height * scale) / 2.0 - bounds.min_y * scale;

        Self {
            scale,
            offset_x,
            offset_y,
        }
    }

    /// Scale a point from turtle units to mm
    pub fn scale(&self, x: f64, y: f64) -> (f32, f32) {
        let scaled_x = x * self.scale + self.offset_x;
        let scaled_y = y * self.scale + self.offset_y;
        (scaled_x as f32, scaled_y as f32)
    }

    pub fn scale_points(&self, points: &[(f64, f64)]) -> Vec<(f32, f32)> {
        points.iter().map(|&(x, y)| self.scale(x, y)).collect()
    }

    /// Get the scale factor (mm per turtle unit)
    pub fn scale_factor(&self) -> f64 {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_points() {
        let points = vec![(0.0, 0.0), (100.0, -200.0), (50.0, 10.0)];
        let bounds = Bounds::from_points(&points).unwrap();

        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 100.0);
        assert_eq!(bounds.min_y, -200.0);
        assert_eq!(bounds.max_y, 10.0);
        assert_eq!(bounds.height(), 210.0);
    }

    #[test]
    fn test_bounds_empty() {
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn test_scaler() {
        let bounds = Bounds::from_points(&[(0.0, 0.0), (100.0, 100.0)]).unwrap();
        let scaler = Scaler::from_bounds(&bounds, 200.0);

        assert!((scaler.scale_factor() - 2.0).abs() < 1e-9);

        let (x, y) = scaler.scale(50.0, 50.0);
        assert!((x - 100.0).abs() < 1e-3);
        assert!((y - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_scaler_margin_and_centering() {
        // Wide, flat trace: 100 x 20 units
        let bounds = Bounds::from_points(&[(-50.0, 0.0), (50.0, 20.0)]).unwrap();
        let scaler = Scaler::from_bounds_with_margin(&bounds, 220.0, 10.0);

        // 200mm usable over 100 units
        assert!((scaler.scale_factor() - 2.0).abs() < 1e-9);

        let (left, bottom) = scaler.scale(-50.0, 0.0);
        let (right, top) = scaler.scale(50.0, 20.0);
        assert!((left - 10.0).abs() < 1e-3);
        assert!((right - 210.0).abs() < 1e-3);
        assert!(((bottom + top) / 2.0 - 110.0).abs() < 1e-3);
    }

    #[test]
    fn test_scaler_single_point() {
        let bounds = Bounds::from_points(&[(3.0, 4.0)]).unwrap();
        let scaler = Scaler::from_bounds(&bounds, 100.0);
        let (x, y) = scaler.scale(3.0, 4.0);
        assert!((x - 50.0).abs() < 1e-3);
        assert!((y - 50.0).abs() < 1e-3);
    }
}
