//! The drawing surface the shape routines talk to
//!
//! Shape routines only ever issue three primitive calls. Anything that implements [`Turtle`]
//! can sit behind them: [`RecordingTurtle`] captures the calls for inspection and
//! [`DrawableTurtle`] turns them into line segments.

pub mod drawable;
pub mod recording;

pub use drawable::DrawableTurtle;
pub use recording::{Command, RecordingTurtle};

use crate::domain::PenColor;

pub trait Turtle {
    /// Move `distance` units along the current heading, drawing as it goes. Negative
    /// distances move backwards.
    fn forward(&mut self, distance: i32);

    /// Rotate the heading clockwise by `degrees` (negative for counter-clockwise)
    fn turn(&mut self, degrees: f64);

    /// Pen color used by subsequent `forward` calls
    fn set_color(&mut self, color: PenColor);
}
