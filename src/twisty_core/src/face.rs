//! The fixed catalog of axes, faces and sticker colours.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CubeError;

// X is left to right, Y is down to up, and Z is back to front. The coordinate
// system is right-handed.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The two axes indexing the `(i, j)` cells of a layer orthogonal to this
    /// axis: the remaining axes in `x < y < z` order.
    #[must_use]
    pub const fn cell_axes(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }

    /// The orientation cycle applied to every cubie of a layer on this axis
    /// during one quarter turn. Read `[a, b, c, d]` as "`a` receives the
    /// sticker facing `b`, `b` receives `c`'s, `c` receives `d`'s and `d`
    /// receives `a`'s".
    #[must_use]
    pub fn cycle(self) -> &'static [Face; 4] {
        &AXIS_CYCLES[self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Negative,
    Positive,
}

impl Direction {
    /// The coordinate of the boundary layer in this direction.
    #[must_use]
    pub const fn boundary(self, size: usize) -> usize {
        match self {
            Direction::Negative => 0,
            Direction::Positive => size - 1,
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Direction {
        match self {
            Direction::Negative => Direction::Positive,
            Direction::Positive => Direction::Negative,
        }
    }
}

/// One of the six faces of the whole cube, and equivalently one of the six
/// sticker slots of a cubie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    L,
    R,
    D,
    U,
    B,
    F,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [L, R, D, U, B, F];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Face::L | Face::R => Axis::X,
            Face::D | Face::U => Axis::Y,
            Face::B | Face::F => Axis::Z,
        }
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Face::L | Face::D | Face::B => Direction::Negative,
            Face::R | Face::U | Face::F => Direction::Positive,
        }
    }

    /// The official colour of this face on a solved cube.
    #[must_use]
    pub const fn color(self) -> Color {
        FACE_COLORS[self as usize]
    }

    /// The face lying on `axis` in `direction`.
    #[must_use]
    pub const fn on(axis: Axis, direction: Direction) -> Face {
        match (axis, direction) {
            (Axis::X, Direction::Negative) => Face::L,
            (Axis::X, Direction::Positive) => Face::R,
            (Axis::Y, Direction::Negative) => Face::D,
            (Axis::Y, Direction::Positive) => Face::U,
            (Axis::Z, Direction::Negative) => Face::B,
            (Axis::Z, Direction::Positive) => Face::F,
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Face {
        Face::on(self.axis(), self.direction().flipped())
    }

    /// The coordinate along [`Face::axis`] of the layer carrying this face's
    /// stickers.
    #[must_use]
    pub const fn boundary_index(self, size: usize) -> usize {
        self.direction().boundary(size)
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for Face {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(Face::L),
            "R" => Ok(Face::R),
            "D" => Ok(Face::D),
            "U" => Ok(Face::U),
            "B" => Ok(Face::B),
            "F" => Ok(Face::F),
            _ => Err(CubeError::UnknownFace(s.to_owned())),
        }
    }
}

/// An RGBA sticker colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// The colour of a sticker slot that faces the inside of the cube.
    pub const NONE: Color = Color::rgba(0, 0, 0, 0);

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const ORANGE: Color = Color::rgb(255, 128, 0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::rgba(r, g, b, 255)
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0 && self.a == 0
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = CubeError;

    /// Parse `#rrggbb` or `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CubeError::Parse(format!("`{s}` is not a `#rrggbb[aa]` colour"));

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { channel(6)? } else { 255 };

        Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl TryFrom<String> for Color {
    type Error = CubeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_string()
    }
}

const FACE_COLORS: [Color; 6] = [
    Color::ORANGE,
    Color::RED,
    Color::YELLOW,
    Color::WHITE,
    Color::BLUE,
    Color::GREEN,
];

// A turn of +1 maps cell (i, j) onto (j, size - 1 - i), so the sticker facing
// +i ends up facing -j and the sticker facing +j ends up facing +i.
static AXIS_CYCLES: [[Face; 4]; 3] = {
    use Face::*;
    let cycles = [[D, B, U, F], [R, F, L, B], [R, U, L, D]];

    let mut a = 0;
    while a < cycles.len() {
        assert!(is_side_cycle(Axis::ALL[a], &cycles[a]));
        a += 1;
    }

    cycles
};

/// Whether `cycle` is four distinct faces, none of which lies on `axis`.
const fn is_side_cycle(axis: Axis, cycle: &[Face; 4]) -> bool {
    if !has_distinct_faces(cycle) {
        return false;
    }

    let mut i = 0;
    while i < cycle.len() {
        if cycle[i].axis() as u8 == axis as u8 {
            return false;
        }
        i += 1;
    }

    true
}

/// Whether no face appears twice in `faces`.
pub(crate) const fn has_distinct_faces(faces: &[Face]) -> bool {
    let mut seen = [false; 6];

    let mut i = 0;
    while i < faces.len() {
        let face = faces[i] as usize;
        if seen[face] {
            return false;
        }
        seen[face] = true;
        i += 1;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn faces_have_unique_axis_direction_pairs() {
        for face in Face::ALL {
            assert_eq!(Face::on(face.axis(), face.direction()), face);
            assert_ne!(face.opposite(), face);
            assert_eq!(face.opposite().opposite(), face);
            assert_eq!(face.to_string().parse::<Face>().unwrap(), face);
        }
        assert!(matches!("X".parse::<Face>(), Err(CubeError::UnknownFace(_))));
    }

    #[test]
    fn face_colors_are_distinct_and_visible() {
        assert!(
            Face::ALL
                .iter()
                .tuple_combinations()
                .all(|(a, b)| a.color() != b.color())
        );
        assert!(Face::ALL.iter().all(|face| !face.color().is_none()));
        assert!(Color::NONE.is_none());
    }

    #[test]
    fn rejects_malformed_cycles() {
        use Face::*;
        assert!(is_side_cycle(Axis::Y, &[R, F, L, B]));
        assert!(!is_side_cycle(Axis::Y, &[B, F, R, B]));
        assert!(!is_side_cycle(Axis::Y, &[U, F, L, B]));
        assert!(has_distinct_faces(&[L, R, D, U, B, F]));
        assert!(!has_distinct_faces(&[R, U, R, F]));
    }

    #[test]
    fn parses_colors() {
        assert_eq!("#ff8000".parse::<Color>().unwrap(), Color::ORANGE);
        assert_eq!("#00000000".parse::<Color>().unwrap(), Color::NONE);
        assert_eq!(Color::RED.to_string(), "#ff0000ff");
        assert!("ff0000".parse::<Color>().is_err());
        assert!("#ff00".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
    }
}
