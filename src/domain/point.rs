use std::fmt;
use std::str::FromStr;

use super::PenColor;

/// An integer coordinate pair. Larger `y` is north, larger `x` is east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        dx.hypot(dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Parses `"x,y"` (whitespace around either number is ignored)
impl FromStr for Point {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected `x,y`, got `{}`", s))?;
        let x = x
            .trim()
            .parse()
            .map_err(|e| format!("invalid x coordinate `{}`: {}", x.trim(), e))?;
        let y = y
            .trim()
            .parse()
            .map_err(|e| format!("invalid y coordinate `{}`: {}", y.trim(), e))?;
        Ok(Self { x, y })
    }
}

/// A straight line left behind by a single `forward` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start position as (x, y) in turtle units
    pub start: (f64, f64),
    /// End position as (x, y) in turtle units
    pub end: (f64, f64),
    /// Pen color at the time the line was drawn
    pub color: PenColor,
}

impl Segment {
    pub fn new(start: (f64, f64), end: (f64, f64), color: PenColor) -> Self {
        Self { start, end, color }
    }

    pub fn length(&self) -> f64 {
        (self.end.0 - self.start.0).hypot(self.end.1 - self.start.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!("3,4".parse::<Point>().unwrap(), Point::new(3, 4));
        assert_eq!(" -5 , 12 ".parse::<Point>().unwrap(), Point::new(-5, 12));
        assert!("3".parse::<Point>().is_err());
        assert!("a,4".parse::<Point>().is_err());
    }

    #[test]
    fn test_distance() {
        let d = Point::new(0, 0).distance_to(Point::new(3, 4));
        assert!((d - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_across_full_range() {
        let west = Point::new(-2_000_000_000, 0);
        let east = Point::new(2_000_000_000, 0);
        assert_eq!(west.distance_to(east), 4_000_000_000.0);

        let d = Point::new(i32::MIN, i32::MIN).distance_to(Point::new(i32::MAX, i32::MAX));
        let side = i32::MAX as f64 - i32::MIN as f64;
        assert!((d - side * std::f64::consts::SQRT_2).abs() < 1.0);
    }

    #[test]
    fn test_segment_length() {
        let seg = Segment::new((1.0, 1.0), (1.0, 11.0), PenColor::Red);
        assert!((seg.length() - 10.0).abs() < 1e-9);
    }
}
