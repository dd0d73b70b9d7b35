//! Errors reported by the grid, the rover, and the deployment engine.

use thiserror::Error;

use crate::grid::Position;

/// Reason a deployment request was rejected.
///
/// Every variant aborts the deployment with no partial result and no grid
/// mutation. An in-flight collision with a settled rover is deliberately
/// absent: it halts the command replay but still produces a normal result
/// (see [`DeploymentEngine::deploy`][crate::engine::DeploymentEngine::deploy]).
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum DeployError {
    /// The coordinate string did not have the shape `x,y,D` with integer
    /// `x` and `y`.
    #[error("invalid coordinates; specify in the format of e.g. 3,4,N")]
    InvalidFormat,

    /// The direction field was not one of `N`, `S`, `E`, `W`.
    #[error("invalid direction: {0}")]
    InvalidDirection(String),

    /// A command token was not one of `f`, `b`, `l`, `r`.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// The start cell or an in-flight move target was outside the grid.
    #[error("out of mars boundary")]
    OutOfBounds,

    /// Another rover already settled on the requested start cell.
    #[error("there is an existing rover at this coordinate")]
    OccupiedStart,
}

/// Reason a rover could not advance to the cell targeted by a move command.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotMoveReason {
    /// The target cell is outside the grid.
    #[error("out of mars boundary")]
    OutOfBounds,
    /// The target cell holds a settled rover.
    #[error("collision detected")]
    Collision,
}

/// Error returned when querying a cell outside the grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("coordinate {position} is out of bounds for a {width}x{height} grid")]
pub struct OutOfBounds {
    position: Position,
    width: usize,
    height: usize,
}

impl OutOfBounds {
    pub(crate) fn new(position: Position, width: usize, height: usize) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// The queried position.
    pub fn position(&self) -> Position {
        self.position
    }
}
