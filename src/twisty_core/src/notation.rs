//! Face turn notation.
//!
//! A move is written `[depth]FACE[amount]`: `3R'` turns the third layer from
//! the right anticlockwise as seen from the right. `depth` defaults to 1 and
//! `amount` is empty for a clockwise quarter turn, `'` for an anticlockwise
//! one and `2` for a half turn.

use std::{
    fmt::Display,
    num::NonZeroUsize,
    ops::Deref,
    str::FromStr,
};

use itertools::Itertools;

use crate::{
    error::CubeError,
    face::{Direction, Face},
    rotation::Layer,
};

/// How far to turn a layer, as seen from the face naming the move.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Amount {
    Normal,
    Prime,
    Double,
}

impl Amount {
    #[must_use]
    pub fn invert(self) -> Self {
        match self {
            Amount::Normal => Amount::Prime,
            Amount::Prime => Amount::Normal,
            Amount::Double => Amount::Double,
        }
    }

    /// Clockwise quarter turns.
    #[must_use]
    pub fn quarter_turns(self) -> i32 {
        match self {
            Amount::Normal => 1,
            Amount::Prime => -1,
            Amount::Double => 2,
        }
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Amount::Normal => write!(f, ""),
            Amount::Prime => write!(f, "'"),
            Amount::Double => write!(f, "2"),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Move {
    pub face: Face,
    pub depth: NonZeroUsize,
    pub amount: Amount,
}

impl Move {
    /// A turn of the outermost layer of `face`.
    #[must_use]
    pub fn new(face: Face, amount: Amount) -> Self {
        Self {
            face,
            depth: NonZeroUsize::MIN,
            amount,
        }
    }

    #[must_use]
    pub fn with_depth(self, depth: NonZeroUsize) -> Self {
        Self { depth, ..self }
    }

    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            amount: self.amount.invert(),
            ..*self
        }
    }

    /// The layer this move turns on a cube of side `size`, and the turns to
    /// pass to [`crate::Cube::rotate`].
    ///
    /// # Errors
    ///
    /// If the move reaches deeper than the cube.
    pub fn to_layer_turns(&self, size: usize) -> Result<(Layer, i32), CubeError> {
        let depth = self.depth.get();
        if depth > size {
            return Err(CubeError::LayerOutOfRange {
                index: depth - 1,
                size,
            });
        }

        let index = match self.face.direction() {
            Direction::Negative => depth - 1,
            Direction::Positive => size - depth,
        };

        Ok((
            Layer::new(self.face.axis(), index),
            clockwise_turns(self.face) * self.amount.quarter_turns(),
        ))
    }
}

/// The layer turns making one clockwise quarter turn as seen from `face`.
const fn clockwise_turns(face: Face) -> i32 {
    match face {
        Face::R | Face::F | Face::D => 1,
        Face::L | Face::B | Face::U => -1,
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.depth.get() > 1 {
            write!(f, "{}", self.depth)?;
        }
        write!(f, "{}{}", self.face, self.amount)
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CubeError::Parse(format!("move `{s}`"));

        let face_start = s.find(|c: char| !c.is_ascii_digit()).ok_or_else(invalid)?;
        let (depth, rest) = s.split_at(face_start);
        let depth = if depth.is_empty() {
            NonZeroUsize::MIN
        } else {
            depth.parse().map_err(|_| invalid())?
        };

        let face_end = rest.chars().next().ok_or_else(invalid)?.len_utf8();
        let (face, amount) = rest.split_at(face_end);
        let face = face.parse()?;
        let amount = match amount {
            "" => Amount::Normal,
            "'" => Amount::Prime,
            "2" => Amount::Double,
            _ => return Err(invalid()),
        };

        Ok(Move::new(face, amount).with_depth(depth))
    }
}

/// A sequence of moves, used for scrambles and to replay a cube's history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MoveSequence(Vec<Move>);

impl MoveSequence {
    /// The sequence undoing this one.
    #[must_use]
    pub fn invert(&self) -> Self {
        MoveSequence(self.iter().rev().map(Move::invert).collect())
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        MoveSequence(moves)
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}

impl FromStr for MoveSequence {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map(MoveSequence)
    }
}

impl Deref for MoveSequence {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
