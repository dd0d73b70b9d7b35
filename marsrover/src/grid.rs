//! The shared occupancy map standing in for the planetary surface.

use std::fmt;

use crate::errors::OutOfBounds;

/// Default edge length of the simulated surface.
pub const DEFAULT_SIZE: usize = 99;

/// A cell index pair on the grid.
///
/// `x` advances with north/south travel and `y` with east/west travel,
/// matching the coordinate convention of the deployment wire contract.
/// Components are signed so that an off-grid candidate cell (e.g. backing
/// up from row 0) stays representable and gets rejected by the bounds
/// check instead of wrapping.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    /// Row index, advanced by north/south travel.
    pub x: i32,
    /// Column index, advanced by east/west travel.
    pub y: i32,
}

impl Position {
    /// Construct a [`Position`] from the given `x` and `y`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell offset from this one by `(dx, dy)`.
    pub(crate) fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Position {
    /// Construct a [`Position`] from the given `(x, y)` pair.
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    /// Displays in the wire shape `x,y`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Process-lifetime occupancy map recording where rovers have settled.
///
/// Owned by the [`DeploymentEngine`][crate::engine::DeploymentEngine] and
/// consulted by rovers during movement; callers never index the storage
/// directly. Occupancy only grows: a cell, once marked, stays marked for
/// the lifetime of the grid. There is no removal or relocation.
#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    occupied: Box<[bool]>,
}

impl Grid {
    /// Create a fully vacant grid with the given dimensions.
    /// Panics if `width` or `height` is 0.
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Grid dimensions must be nonzero, got {}x{}", width, height);
        }
        Self {
            width,
            height,
            occupied: vec![false; width * height].into_boxed_slice(),
        }
    }

    /// Width of the grid. Valid `x` values are `[0, width)`.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid. Valid `y` values are `[0, height)`.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check that the position is in bounds and return its linear index,
    /// otherwise return `None`.
    fn try_linearize(&self, position: Position) -> Option<usize> {
        if position.x < 0
            || position.x >= self.width as i32
            || position.y < 0
            || position.y >= self.height as i32
        {
            None
        } else {
            Some(position.x as usize * self.height + position.y as usize)
        }
    }

    /// Whether a previously settled rover occupies the given cell.
    /// Fails if the position lies outside the grid.
    pub fn is_occupied(&self, position: Position) -> Result<bool, OutOfBounds> {
        match self.try_linearize(position) {
            Some(idx) => Ok(self.occupied[idx]),
            None => Err(OutOfBounds::new(position, self.width, self.height)),
        }
    }

    /// Mark the given cell as holding a settled rover. Idempotent.
    ///
    /// Panics if the position is out of bounds: the engine only settles
    /// rovers on cells it has already bounds-checked, so an out-of-bounds
    /// argument is a bug in the caller.
    pub fn occupy(&mut self, position: Position) {
        match self.try_linearize(position) {
            Some(idx) => self.occupied[idx] = true,
            None => panic!(
                "{:?} is out of bounds for a {}x{} grid",
                position, self.width, self.height
            ),
        }
    }
}

impl Default for Grid {
    /// The standard Mars surface: a vacant 99x99 grid.
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}
