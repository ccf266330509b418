//! Addressing cubies by their grid coordinates.
//!
//! Every cube stores its cubies in a flat buffer. The slot of a cubie is
//! always `x + size * y + size² * z`, and every other module goes through
//! [`index`] and [`position`] to get there.

use std::{
    fmt::Display,
    ops::{Index, IndexMut},
};

use itertools::iproduct;
use serde::{Deserialize, Serialize};

use crate::face::Axis;

/// A cubie coordinate, each component in `[0, size)`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize, z: usize) -> Position {
        Position { x, y, z }
    }

    /// Whether every component lies in `[0, size)`.
    #[must_use]
    pub fn in_bounds(self, size: usize) -> bool {
        self.x < size && self.y < size && self.z < size
    }

    /// Build a position from a layer coordinate and its `(i, j)` cell.
    /// The inverse of [`Position::cell`].
    #[must_use]
    pub fn from_cell(axis: Axis, index: usize, (i, j): (usize, usize)) -> Position {
        let (row_axis, col_axis) = axis.cell_axes();

        let mut pos = Position::default();
        pos[axis] = index;
        pos[row_axis] = i;
        pos[col_axis] = j;
        pos
    }

    /// The `(i, j)` cell of this position inside the layer orthogonal to
    /// `axis`.
    #[must_use]
    pub fn cell(self, axis: Axis) -> (usize, usize) {
        let (row_axis, col_axis) = axis.cell_axes();
        (self[row_axis], self[col_axis])
    }
}

impl Index<Axis> for Position {
    type Output = usize;

    fn index(&self, axis: Axis) -> &Self::Output {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl IndexMut<Axis> for Position {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Flat slot of `pos` in a cube of side `size`.
#[must_use]
pub fn index(pos: Position, size: usize) -> usize {
    debug_assert!(pos.in_bounds(size), "{pos} is outside a cube of size {size}");
    pos.x + size * pos.y + size * size * pos.z
}

/// Inverse of [`index`].
#[must_use]
pub fn position(index: usize, size: usize) -> Position {
    debug_assert!(index < size.pow(3));
    Position::new(index % size, index / size % size, index / (size * size))
}

/// Every position of a cube of side `size`, in slot order.
pub fn positions(size: usize) -> impl Iterator<Item = Position> {
    iproduct!(0..size, 0..size, 0..size).map(|(z, y, x)| Position::new(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_a_bijection() {
        for size in 1..=5 {
            let indices = positions(size).map(|pos| index(pos, size)).collect::<Vec<_>>();
            assert_eq!(indices, (0..size.pow(3)).collect::<Vec<_>>());

            for (i, pos) in positions(size).enumerate() {
                assert_eq!(position(i, size), pos);
            }
        }
    }

    #[test]
    fn cells_round_trip() {
        let pos = Position::new(1, 2, 3);
        for axis in Axis::ALL {
            let cell = pos.cell(axis);
            assert_eq!(Position::from_cell(axis, pos[axis], cell), pos);
        }
        assert_eq!(pos.cell(Axis::X), (2, 3));
        assert_eq!(pos.cell(Axis::Y), (1, 3));
        assert_eq!(pos.cell(Axis::Z), (1, 2));
    }
}
