use std::fmt;

use super::Turtle;
use crate::domain::PenColor;

/// A single primitive call made on a turtle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Forward(i32),
    Turn(f64),
    SetColor(PenColor),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Forward(d) => write!(f, "forward {}", d),
            Command::Turn(deg) => write!(f, "turn {}", deg),
            Command::SetColor(c) => write!(f, "color {}", c.name()),
        }
    }
}

/// Turtle that remembers every call instead of drawing
#[derive(Debug, Default, Clone)]
pub struct RecordingTurtle {
    commands: Vec<Command>,
}

impl RecordingTurtle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn forward_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Forward(_)))
            .count()
    }

    pub fn turns(&self) -> Vec<f64> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Turn(deg) => Some(*deg),
                _ => None,
            })
            .collect()
    }

    /// Sum of all turn angles, unnormalized
    pub fn total_turn(&self) -> f64 {
        self.turns().iter().sum()
    }

    /// Replay the recorded calls onto another turtle
    pub fn replay(&self, target: &mut impl Turtle) {
        for cmd in &self.commands {
            match *cmd {
                Command::Forward(d) => target.forward(d),
                Command::Turn(deg) => target.turn(deg),
                Command::SetColor(c) => target.set_color(c),
            }
        }
    }
}

impl Turtle for RecordingTurtle {
    fn forward(&mut self, distance: i32) {
        self.commands.push(Command::Forward(distance));
    }

    fn turn(&mut self, degrees: f64) {
        self.commands.push(Command::Turn(degrees));
    }

    fn set_color(&mut self, color: PenColor) {
        self.commands.push(Command::SetColor(color));
    }
}
