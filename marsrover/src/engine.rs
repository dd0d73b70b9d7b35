//! The deployment engine: request validation, command replay, settling.

use crate::errors::{CannotMoveReason, DeployError};
use crate::grid::{Grid, Position};
use crate::rover::{Command, Direction, Rover};

/// Final resting state of a settled rover.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Deployment {
    /// The cell the rover settled on.
    pub position: Position,
    /// The direction the rover faced when it settled.
    pub facing: Direction,
}

/// Validates deployment requests and replays their command sequences
/// against the shared occupancy grid.
///
/// The engine owns the grid for its lifetime, so every rover it settles
/// stays visible to later deployments. [`deploy`][Self::deploy] takes
/// `&mut self`: a single engine never interleaves two deployments. Put it
/// behind a mutex to share it between concurrent callers, holding the lock
/// for the whole call.
#[derive(Debug)]
pub struct DeploymentEngine {
    grid: Grid,
}

impl DeploymentEngine {
    /// Engine over the default 99x99 surface.
    pub fn new() -> Self {
        Self::with_grid(Grid::default())
    }

    /// Engine over a caller-provided grid, for tests and smaller surfaces.
    pub fn with_grid(grid: Grid) -> Self {
        Self { grid }
    }

    /// The occupancy grid the engine settles rovers on.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Deploy a rover and replay its command sequence.
    ///
    /// `coordinates` has the shape `x,y,D` (e.g. `3,4,N`) and `commands`
    /// is a comma-separated sequence of command letters (e.g.
    /// `f,f,r,f,f`). Tokens are not trimmed; `"f f"` is one bad token. On
    /// success the rover's final cell is marked occupied and its state
    /// returned.
    ///
    /// A move into a cell held by a settled rover halts the replay: the
    /// remaining commands are dropped and the rover settles one cell
    /// short, keeping the facing it had at the moment of the collision.
    /// That is a normal result, not an error — even when the very first
    /// move collides and the rover settles on its start cell. Every other
    /// failure aborts the deployment without touching the grid.
    pub fn deploy(&mut self, coordinates: &str, commands: &str) -> Result<Deployment, DeployError> {
        let (start, facing) = self.validate_start(coordinates)?;
        let mut rover = Rover::new(start, facing);
        for token in commands.split(',') {
            let command = token.parse::<Command>()?;
            match rover.apply(command, &self.grid) {
                Ok(()) => {}
                Err(CannotMoveReason::Collision) => break,
                Err(CannotMoveReason::OutOfBounds) => return Err(DeployError::OutOfBounds),
            }
        }
        self.grid.occupy(rover.position());
        Ok(Deployment {
            position: rover.position(),
            facing: rover.facing(),
        })
    }

    /// Parse and validate the `x,y,D` start parameters: field count,
    /// integer coordinates, direction letter, bounds, then occupancy, in
    /// that order.
    fn validate_start(&self, coordinates: &str) -> Result<(Position, Direction), DeployError> {
        let fields: Vec<&str> = coordinates.split(',').collect();
        if fields.len() != 3 {
            return Err(DeployError::InvalidFormat);
        }
        let x = fields[0]
            .parse::<i32>()
            .map_err(|_| DeployError::InvalidFormat)?;
        let y = fields[1]
            .parse::<i32>()
            .map_err(|_| DeployError::InvalidFormat)?;
        let facing = fields[2].parse::<Direction>()?;
        let start = Position::new(x, y);
        match self.grid.is_occupied(start) {
            Err(_) => Err(DeployError::OutOfBounds),
            Ok(true) => Err(DeployError::OccupiedStart),
            Ok(false) => Ok((start, facing)),
        }
    }
}

impl Default for DeploymentEngine {
    fn default() -> Self {
        Self::new()
    }
}
