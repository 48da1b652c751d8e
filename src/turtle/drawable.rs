use log::trace;

use super::Turtle;
use crate::domain::{PenColor, Segment};
use crate::geometry::normalize_heading;

/// Turtle that tracks its pose and keeps every line it draws
///
/// Starts at the origin facing north (heading 0) with a black pen.
#[derive(Debug, Default, Clone)]
pub struct DrawableTurtle {
    x: f64,
    y: f64,
    heading: f64,
    color: PenColor,
    segments: Vec<Segment>,
}

impl DrawableTurtle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Current heading in degrees clockwise from north, in `[0, 360)`
    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn color(&self) -> PenColor {
        self.color
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// All segment endpoints, for bounding-box computation
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        self.segments
            .iter()
            .flat_map(|s| [s.start, s.end])
            .collect()
    }

    /// Merge the trace into continuous single-colored polylines
    ///
    /// A segment extends the current polyline when it starts where the previous one ended and
    /// was drawn with the same pen color.
    pub fn polylines(&self) -> Vec<(Vec<(f64, f64)>, PenColor)> {
        let mut lines: Vec<(Vec<(f64, f64)>, PenColor)> = Vec::new();

        for seg in &self.segments {
            let continues = matches!(
                lines.last(),
                Some((points, color)) if *color == seg.color && points.last() == Some(&seg.start)
            );
            match lines.last_mut() {
                Some((points, _)) if continues => points.push(seg.end),
                _ => lines.push((vec![seg.start, seg.end], seg.color)),
            }
        }

        lines
    }
}

impl Turtle for DrawableTurtle {
    fn forward(&mut self, distance: i32) {
        if distance == 0 {
            return;
        }

        let (sin, cos) = self.heading.to_radians().sin_cos();
        let d = distance as f64;
        let start = (self.x, self.y);
        // Heading 0 is +y and grows clockwise, so x follows sin and y follows cos
        self.x += d * sin;
        self.y += d * cos;

        trace!("forward {} -> ({:.3}, {:.3})", distance, self.x, self.y);
        self.segments
            .push(Segment::new(start, (self.x, self.y), self.color));
    }

    fn turn(&mut self, degrees: f64) {
        self.heading = normalize_heading(self.heading + degrees);
    }

    fn set_color(&mut self, color: PenColor) {
        self.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn test_starts_at_origin_facing_north() {
        let mut t = DrawableTurtle::new();
        assert_eq!(t.position(), (0.0, 0.0));
        assert_eq!(t.heading(), 0.0);

        t.forward(10);
        assert!(close(t.position(), (0.0, 10.0)));
        assert_eq!(t.color(), PenColor::Black);
    }

    #[test]
    fn test_turn_is_clockwise() {
        let mut t = DrawableTurtle::new();
        t.turn(90.0);
        t.forward(5);
        assert!(close(t.position(), (5.0, 0.0)));

        t.turn(-180.0);
        assert_eq!(t.heading(), 270.0);
        t.forward(10);
        assert!(close(t.position(), (-5.0, 0.0)));
    }

    #[test]
    fn test_negative_distance_moves_backwards() {
        let mut t = DrawableTurtle::new();
        t.forward(-7);
        assert!(close(t.position(), (0.0, -7.0)));
        assert_eq!(t.heading(), 0.0);
    }

    #[test]
    fn test_zero_forward_draws_nothing() {
        let mut t = DrawableTurtle::new();
        t.forward(0);
        assert!(t.segments().is_empty());
    }

    #[test]
    fn test_color_applies_to_later_lines() {
        let mut t = DrawableTurtle::new();
        t.forward(1);
        t.set_color(PenColor::Red);
        t.forward(1);

        let colors: Vec<PenColor> = t.segments().iter().map(|s| s.color).collect();
        assert_eq!(colors, vec![PenColor::Black, PenColor::Red]);
        assert_eq!(t.color(), PenColor::Red);
    }

    #[test]
    fn test_polylines_merge_by_color() {
        let mut t = DrawableTurtle::new();
        t.forward(10);
        t.turn(90.0);
        t.forward(10);
        t.set_color(PenColor::Green);
        t.forward(10);

        let lines = t.polylines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0.len(), 3);
        assert_eq!(lines[0].1, PenColor::Black);
        assert_eq!(lines[1].0.len(), 2);
        assert_eq!(lines[1].1, PenColor::Green);
    }
}
