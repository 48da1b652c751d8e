//! Figures composed from the three turtle primitives

use log::debug;

use crate::domain::{PenColor, Point};
use crate::error::{GeometryError, Result};
use crate::geometry::{headings_for_path, regular_polygon_interior_angle};
use crate::turtle::Turtle;

const SQUARE_SIDES: u32 = 4;

fn check_side_length(side_length: i32) -> Result<()> {
    if side_length <= 0 {
        return Err(GeometryError::NonPositiveSideLength(side_length));
    }
    Ok(())
}

/// Draw a square clockwise from the turtle's current pose
pub fn draw_square<T: Turtle + ?Sized>(turtle: &mut T, side_length: i32) -> Result<()> {
    check_side_length(side_length)?;
    for _ in 0..SQUARE_SIDES {
        turtle.forward(side_length);
        turtle.turn(90.0);
    }
    Ok(())
}

/// Draw a regular polygon using only right-hand turns
///
/// Each corner turns by the exterior angle, so the turtle ends where it started, facing the
/// way it started.
pub fn draw_regular_polygon<T: Turtle + ?Sized>(
    turtle: &mut T,
    sides: u32,
    side_length: i32,
) -> Result<()> {
    check_side_length(side_length)?;
    let exterior = 180.0 - regular_polygon_interior_angle(sides)?;
    debug!("polygon: {} sides of {}, turning {:.3}", sides, side_length, exterior);

    for _ in 0..sides {
        turtle.forward(side_length);
        turtle.turn(exterior);
    }
    Ok(())
}

const ROSETTE_PETALS: u32 = 36;
const ROSETTE_PETAL_SIDES: u32 = 6;
const ROSETTE_PETAL_SIDE: i32 = 40;
const ROSETTE_PALETTE: [PenColor; 3] = [PenColor::Red, PenColor::Orange, PenColor::Magenta];

/// A rosette of hexagons, each rotated a little further round the start point
pub fn draw_personal_art<T: Turtle + ?Sized>(turtle: &mut T) -> Result<()> {
    let step = 360.0 / ROSETTE_PETALS as f64;
    for petal in 0..ROSETTE_PETALS {
        let color = ROSETTE_PALETTE[petal as usize % ROSETTE_PALETTE.len()];
        turtle.set_color(color);
        draw_regular_polygon(turtle, ROSETTE_PETAL_SIDES, ROSETTE_PETAL_SIDE)?;
        turtle.turn(step);
    }
    Ok(())
}

/// Walk the turtle through `points` in order, assuming it starts on `points[0]` facing north
///
/// At each point the turtle turns by the planned amount and moves forward the distance to the
/// next point, rounded to the nearest whole unit. Returns the turns that were made.
pub fn walk_path<T: Turtle + ?Sized>(turtle: &mut T, points: &[Point]) -> Vec<f64> {
    let turns = headings_for_path(points);
    for (pair, &turn) in points.windows(2).zip(&turns) {
        turtle.turn(turn);
        turtle.forward(pair[0].distance_to(pair[1]).round() as i32);
    }
    turns
}
