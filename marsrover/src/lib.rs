//! Simulation of wheeled rovers deployed onto a shared Mars surface grid.
//!
//! The crate is built from three pieces:
//!
//! - [`Grid`]: the process-lifetime occupancy map recording where earlier
//!   rovers settled.
//! - [`Rover`]: the per-deployment state machine, a cell plus a facing,
//!   advanced one [`Command`] at a time.
//! - [`DeploymentEngine`]: validates a deployment request, replays its
//!   command sequence against the grid, and settles the rover's final
//!   cell.
//!
//! ```
//! use marsrover::{DeployError, DeploymentEngine, Direction};
//!
//! let mut engine = DeploymentEngine::new();
//! let deployment = engine.deploy("42,42,N", "r,f,f,f,f")?;
//! assert_eq!((deployment.position.x, deployment.position.y), (42, 46));
//! assert_eq!(deployment.facing, Direction::East);
//! # Ok::<(), DeployError>(())
//! ```

pub mod engine;
pub mod errors;
pub mod grid;
pub mod rover;

pub use engine::{Deployment, DeploymentEngine};
pub use errors::{CannotMoveReason, DeployError, OutOfBounds};
pub use grid::{Grid, Position, DEFAULT_SIZE};
pub use rover::{Command, Direction, Rover};
