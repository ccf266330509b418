use itertools::Itertools;

use crate::{
    face::{Color, Face, has_distinct_faces},
    grid::Position,
};

/// A single sub-cube and the stickers it carries.
///
/// Stickers never change colour and are never created or removed. A rotation
/// only moves the cubie and changes which of its six slots each sticker faces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cubie {
    position: Position,
    home: Position,
    stickers: [Color; 6],
}

impl Cubie {
    /// The cubie that starts at `home` on a solved cube of side `size`. A slot
    /// holds its face's colour if `home` lies on that face's boundary layer
    /// and [`Color::NONE`] otherwise.
    #[must_use]
    pub fn new(home: Position, size: usize) -> Cubie {
        let stickers = Face::ALL.map(|face| {
            if home[face.axis()] == face.boundary_index(size) {
                face.color()
            } else {
                Color::NONE
            }
        });

        Cubie {
            position: home,
            home,
            stickers,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Where this cubie was on the solved cube. Doubles as its identity.
    #[must_use]
    pub fn home(&self) -> Position {
        self.home
    }

    #[must_use]
    pub fn color_at(&self, face: Face) -> Color {
        self.stickers[face as usize]
    }

    /// The visible stickers and the slots they currently face.
    pub fn stickers(&self) -> impl Iterator<Item = (Face, Color)> + '_ {
        Face::ALL
            .into_iter()
            .map(|face| (face, self.color_at(face)))
            .filter(|(_, color)| !color.is_none())
    }

    /// Permute the sticker slots along `cycle`: every face of the cycle takes
    /// the sticker of the face after it, the last one wrapping around to the
    /// first. Faces outside of the cycle keep their stickers.
    ///
    /// # Panics
    ///
    /// If a face appears twice in `cycle`.
    pub fn apply_orientation_cycle(&mut self, cycle: &[Face; 4]) {
        assert!(
            has_distinct_faces(cycle),
            "{cycle:?} is not a cycle of four distinct faces"
        );
        let old = self.stickers;

        for (to, from) in cycle.iter().cycle().tuple_windows().take(cycle.len()) {
            self.stickers[*to as usize] = old[*from as usize];
        }
    }

    pub fn relocate(&mut self, position: Position) {
        self.position = position;
    }

    /// Whether the cubie is back at its home position with every sticker
    /// facing its original slot.
    #[must_use]
    pub fn is_home(&self, size: usize) -> bool {
        *self == Cubie::new(self.home, size)
    }
}
