#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! The state of an N×N×N twisty cube: where every cubie is, which way its
//! stickers face, and what each face of the cube looks like after any
//! sequence of layer turns.

pub mod cube;
pub mod cubie;
pub mod error;
pub mod face;
pub mod grid;
pub mod notation;
pub mod rotation;
pub mod snapshot;

pub use cube::{Cube, FaceGrid};
pub use cubie::Cubie;
pub use error::CubeError;
pub use face::{Axis, Color, Direction, Face};
pub use grid::Position;
pub use notation::{Amount, Move, MoveSequence};
pub use rotation::Layer;
pub use snapshot::{CubeSnapshot, FaceSnapshot};
