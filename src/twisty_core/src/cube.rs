use std::{fmt::Display, ops::Index};

use itertools::Itertools;
use log::debug;

use crate::{
    cubie::Cubie,
    error::CubeError,
    face::{Color, Face},
    grid::{Position, index, positions},
    notation::{Move, MoveSequence},
    rotation::{Layer, rotate_layer},
};

/// The full state of an N×N×N cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    size: usize,
    // cubies[index(pos, size)].position() == pos
    cubies: Vec<Cubie>,
}

impl Cube {
    /// The largest supported side length.
    pub const MAX_SIZE: usize = 128;

    /// A solved cube of side `size`.
    ///
    /// # Errors
    ///
    /// If `size` is zero or larger than [`Cube::MAX_SIZE`].
    pub fn new(size: usize) -> Result<Cube, CubeError> {
        if !(1..=Cube::MAX_SIZE).contains(&size) {
            return Err(CubeError::InvalidSize(size));
        }

        let cubies = positions(size).map(|pos| Cubie::new(pos, size)).collect_vec();
        debug!("Created a {size}x{size}x{size} cube with {} cubies", cubies.len());

        Ok(Cube { size, cubies })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Every cubie, ordered by current position.
    #[must_use]
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    #[must_use]
    pub fn cubie_at(&self, pos: Position) -> Option<&Cubie> {
        pos.in_bounds(self.size)
            .then(|| &self.cubies[index(pos, self.size)])
    }

    /// Turn `layer` by `turns` quarter turns, see [`crate::rotation`] for the
    /// sense of a positive turn.
    ///
    /// # Errors
    ///
    /// If the layer does not exist on this cube. The cube is left untouched.
    pub fn rotate(&mut self, layer: Layer, turns: i32) -> Result<(), CubeError> {
        rotate_layer(self.size, &mut self.cubies, layer, turns)
    }

    /// # Errors
    ///
    /// If the move reaches deeper than the cube. The cube is left untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), CubeError> {
        let (layer, turns) = mv.to_layer_turns(self.size)?;
        self.rotate(layer, turns)
    }

    /// Apply every move of `sequence` in order.
    ///
    /// # Errors
    ///
    /// If any move reaches deeper than the cube. Every move is checked before
    /// the first one is applied, so the cube is left untouched.
    pub fn apply_sequence(&mut self, sequence: &MoveSequence) -> Result<(), CubeError> {
        let turns = sequence
            .iter()
            .map(|mv| mv.to_layer_turns(self.size))
            .collect::<Result<Vec<_>, _>>()?;

        for (layer, turns) in turns {
            self.rotate(layer, turns)?;
        }

        Ok(())
    }

    /// The colours currently visible on `face`.
    #[must_use]
    pub fn face_grid(&self, face: Face) -> FaceGrid {
        let colors = Layer::of_face(face, self.size)
            .positions(self.size)
            .map(|pos| self.cubies[index(pos, self.size)].color_at(face))
            .collect();

        FaceGrid {
            face,
            size: self.size,
            colors,
        }
    }

    /// Whether every face shows a single colour.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Face::ALL
            .into_iter()
            .all(|face| self.face_grid(face).colors.iter().all_equal())
    }

    /// The cube unfolded into a cross shaped net, `3 * size` rows of
    /// `4 * size` cells. U sits above F, D below it, and L F R B run left to
    /// right. Cells outside of the net are `None`.
    #[must_use]
    pub fn net(&self) -> Vec<Vec<Option<Color>>> {
        let n = self.size;
        let mut net = vec![vec![None; 4 * n]; 3 * n];

        let placements = [
            (Face::U, 0, n),
            (Face::L, n, 0),
            (Face::F, n, n),
            (Face::R, n, 2 * n),
            (Face::B, n, 3 * n),
            (Face::D, 2 * n, n),
        ];

        for (face, top, left) in placements {
            for (r, row) in self.face_grid(face).facing_rows().into_iter().enumerate() {
                for (c, color) in row.into_iter().enumerate() {
                    net[top + r][left + c] = Some(color);
                }
            }
        }

        net
    }
}

impl Display for Cube {
    /// One letter per sticker, naming the face whose colour it carries.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = |color: Color| {
            Face::ALL
                .into_iter()
                .find(|face| face.color() == color)
                .map_or_else(|| "?".to_owned(), |face| face.to_string())
        };

        for row in self.net() {
            let line = row
                .into_iter()
                .map(|cell| cell.map_or_else(|| " ".to_owned(), &letter))
                .join("");
            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}

/// The `size`×`size` colours of one face. `grid[i][j]` is the cell at
/// `(i, j)` of the face's layer, see [`crate::face::Axis::cell_axes`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceGrid {
    face: Face,
    size: usize,
    colors: Vec<Color>,
}

impl FaceGrid {
    #[must_use]
    pub fn face(&self) -> Face {
        self.face
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.colors.chunks(self.size)
    }

    /// The grid as seen from outside the cube, listed top row first. Side
    /// faces are seen with U up, U is seen with F at the bottom and D with F
    /// at the top.
    #[must_use]
    pub fn facing_rows(&self) -> Vec<Vec<Color>> {
        let n = self.size;
        let last = n - 1;

        (0..n)
            .map(|r| {
                (0..n)
                    .map(|c| match self.face {
                        Face::U => self[c][r],
                        Face::D | Face::F => self[c][last - r],
                        Face::L => self[last - r][c],
                        Face::R => self[last - r][last - c],
                        Face::B => self[last - c][last - r],
                    })
                    .collect()
            })
            .collect()
    }
}

impl Index<usize> for FaceGrid {
    type Output = [Color];

    fn index(&self, i: usize) -> &Self::Output {
        &self.colors[i * self.size..(i + 1) * self.size]
    }
}
