//! The rover state machine: directions, commands, turns, and moves.

use std::fmt;
use std::str::FromStr;

use crate::errors::{CannotMoveReason, DeployError};
use crate::grid::{Grid, Position};

/// Compass direction a rover can face.
///
/// Clockwise order is North, East, South, West; a turn steps through this
/// cycle one position at a time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The facing after one 90° clockwise turn.
    pub fn turned_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// The facing after one 90° counter-clockwise turn.
    pub fn turned_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Unit `(x, y)` offset applied when driving forward while facing this
    /// direction. `x` advances on north/south travel and `y` on east/west
    /// travel; the backward offset is the negation.
    pub fn forward_offset(self) -> (i32, i32) {
        match self {
            Direction::North => (1, 0),
            Direction::South => (-1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// The single-letter form used in coordinate strings.
    pub fn letter(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
        }
    }
}

impl fmt::Display for Direction {
    /// Displays as the full uppercase name, e.g. `NORTH`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
        })
    }
}

impl FromStr for Direction {
    type Err = DeployError;

    /// Parse the single-letter form. The error echoes the rejected token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Direction::North),
            "S" => Ok(Direction::South),
            "E" => Ok(Direction::East),
            "W" => Ok(Direction::West),
            other => Err(DeployError::InvalidDirection(other.to_owned())),
        }
    }
}

/// A single instruction from a deployment command sequence.
///
/// `Forward`/`Backward` move the rover one cell along its facing;
/// `Left`/`Right` turn it in place. A command never does both.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    Forward,
    Backward,
    Left,
    Right,
}

impl FromStr for Command {
    type Err = DeployError;

    /// Parse the single-letter form. The error echoes the rejected token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "f" => Ok(Command::Forward),
            "b" => Ok(Command::Backward),
            "l" => Ok(Command::Left),
            "r" => Ok(Command::Right),
            other => Err(DeployError::InvalidCommand(other.to_owned())),
        }
    }
}

/// Transient simulation state for one deployment: a cell and a facing.
///
/// Built fresh for each deployment and discarded once its final state has
/// been copied into the result and the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Rover {
    position: Position,
    facing: Direction,
}

impl Rover {
    /// Construct a rover at the given cell and facing.
    pub fn new(position: Position, facing: Direction) -> Self {
        Self { position, facing }
    }

    /// The cell the rover currently occupies.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The direction the rover currently faces.
    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Apply one command.
    ///
    /// Turns always succeed and never touch the coordinates. A move
    /// commits the target cell only if it is on the grid and vacant;
    /// otherwise the rover stays where it is and the reason is returned.
    pub fn apply(&mut self, command: Command, grid: &Grid) -> Result<(), CannotMoveReason> {
        match command {
            Command::Left => self.facing = self.facing.turned_left(),
            Command::Right => self.facing = self.facing.turned_right(),
            Command::Forward => {
                let (dx, dy) = self.facing.forward_offset();
                self.drive(dx, dy, grid)?;
            }
            Command::Backward => {
                let (dx, dy) = self.facing.forward_offset();
                self.drive(-dx, -dy, grid)?;
            }
        }
        Ok(())
    }

    fn drive(&mut self, dx: i32, dy: i32, grid: &Grid) -> Result<(), CannotMoveReason> {
        let target = self.position.offset(dx, dy);
        match grid.is_occupied(target) {
            Err(_) => Err(CannotMoveReason::OutOfBounds),
            Ok(true) => Err(CannotMoveReason::Collision),
            Ok(false) => {
                self.position = target;
                Ok(())
            }
        }
    }
}
