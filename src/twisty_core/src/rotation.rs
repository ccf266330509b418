//! Quarter turns of a single layer.
//!
//! A layer orthogonal to `axis` is viewed as a `size`×`size` grid of `(i, j)`
//! cells, see [`Axis::cell_axes`]. One quarter turn fills cell `(i, j)` with
//! the cubie previously at `(size - 1 - j, i)` and relabels the sticker slots
//! of every moved cubie with [`Axis::cycle`]. Seen from the positive end of
//! the axis this is a clockwise turn for X and Z, and an anticlockwise turn
//! for Y.

use itertools::iproduct;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    cubie::Cubie,
    error::CubeError,
    face::{Axis, Face},
    grid::{Position, index},
};

/// All cubies sharing one coordinate along `axis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layer {
    pub axis: Axis,
    pub index: usize,
}

impl Layer {
    #[must_use]
    pub const fn new(axis: Axis, index: usize) -> Layer {
        Layer { axis, index }
    }

    /// The outermost layer on the side of `face`.
    #[must_use]
    pub const fn of_face(face: Face, size: usize) -> Layer {
        Layer::new(face.axis(), face.boundary_index(size))
    }

    #[must_use]
    pub fn contains(self, pos: Position) -> bool {
        pos[self.axis] == self.index
    }

    /// # Errors
    ///
    /// If the layer does not exist on a cube of side `size`.
    pub fn validate(self, size: usize) -> Result<(), CubeError> {
        if self.index < size {
            Ok(())
        } else {
            Err(CubeError::LayerOutOfRange {
                index: self.index,
                size,
            })
        }
    }

    /// Every position in the layer, in `(i, j)` row-major order.
    pub fn positions(self, size: usize) -> impl Iterator<Item = Position> {
        iproduct!(0..size, 0..size)
            .map(move |cell| Position::from_cell(self.axis, self.index, cell))
    }
}

/// The number of quarter turns in `[0, 4)` equivalent to `turns`.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn normalize_turns(turns: i32) -> usize {
    turns.rem_euclid(4) as usize
}

/// Turn `layer` of the cube by `turns` quarter turns. Negative turns rotate
/// the other way. `cubies` must be the slot-ordered buffer of a cube of side
/// `size`.
///
/// The new layer is built in a scratch buffer and committed at the end, so
/// nothing is written if the layer is out of range.
///
/// # Errors
///
/// If the layer does not exist on the cube.
pub fn rotate_layer(
    size: usize,
    cubies: &mut [Cubie],
    layer: Layer,
    turns: i32,
) -> Result<(), CubeError> {
    debug_assert_eq!(cubies.len(), size.pow(3));
    layer.validate(size)?;

    let quarter_turns = normalize_turns(turns);
    if quarter_turns == 0 {
        return Ok(());
    }

    trace!("Turning {layer:?} by {quarter_turns} quarter turns");

    let mut scratch = layer
        .positions(size)
        .map(|pos| cubies[index(pos, size)].clone())
        .collect::<Vec<_>>();

    for _ in 0..quarter_turns {
        scratch = iproduct!(0..size, 0..size)
            .map(|(i, j)| {
                let mut cubie = scratch[(size - 1 - j) * size + i].clone();
                cubie.relocate(Position::from_cell(layer.axis, layer.index, (i, j)));
                cubie.apply_orientation_cycle(layer.axis.cycle());
                cubie
            })
            .collect();
    }

    for cubie in scratch {
        let slot = index(cubie.position(), size);
        cubies[slot] = cubie;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::positions;
    use itertools::Itertools;

    fn solved(size: usize) -> Vec<Cubie> {
        positions(size).map(|pos| Cubie::new(pos, size)).collect()
    }

    #[test]
    fn turns_are_taken_modulo_four() {
        assert_eq!(normalize_turns(0), 0);
        assert_eq!(normalize_turns(5), 1);
        assert_eq!(normalize_turns(-1), 3);
        assert_eq!(normalize_turns(-4), 0);
    }

    #[test]
    fn out_of_range_layer_is_rejected_untouched() {
        let mut cubies = solved(3);
        let before = cubies.clone();
        assert_eq!(
            rotate_layer(3, &mut cubies, Layer::new(Axis::X, 3), 1),
            Err(CubeError::LayerOutOfRange { index: 3, size: 3 })
        );
        assert_eq!(cubies, before);
    }

    // Every side face of a middle layer has one centre-of-edge cubie whose only
    // sticker faces that side. After a turn the sticker must face the side the
    // cubie was moved to.
    #[test]
    fn cycles_agree_with_the_position_permutation() {
        for axis in Axis::ALL {
            for face in Face::ALL.into_iter().filter(|face| face.axis() != axis) {
                let mut home = Position::new(1, 1, 1);
                home[face.axis()] = face.boundary_index(3);

                let mut cubies = solved(3);
                rotate_layer(3, &mut cubies, Layer::new(axis, 1), 1).unwrap();

                let cubie = cubies.iter().find(|cubie| cubie.home() == home).unwrap();
                let stickers = cubie.stickers().collect_vec();
                assert_eq!(stickers.len(), 1);
                let (slot, color) = stickers[0];
                assert_eq!(color, face.color());
                assert_eq!(cubie.position()[slot.axis()], slot.boundary_index(3));
            }
        }
    }

    #[test]
    fn one_turn_maps_cells_clockwise() {
        let mut cubies = solved(3);
        let layer = Layer::new(Axis::Z, 2);
        rotate_layer(3, &mut cubies, layer, 1).unwrap();

        // Cell (i, j) now holds the cubie from (2 - j, i)
        for pos in layer.positions(3) {
            let (i, j) = pos.cell(Axis::Z);
            let cubie = &cubies[index(pos, 3)];
            assert_eq!(cubie.position(), pos);
            assert_eq!(cubie.home(), Position::from_cell(Axis::Z, 2, (2 - j, i)));
        }
    }
}
