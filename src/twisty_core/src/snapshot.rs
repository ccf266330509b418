//! A plain data copy of what a cube looks like, for handing to a renderer.

use serde::{Deserialize, Serialize};

use crate::{
    cube::{Cube, FaceGrid},
    face::{Color, Face},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeSnapshot {
    pub size: usize,
    pub faces: Vec<FaceSnapshot>,
}

/// `grid[i][j]` follows the same convention as [`crate::FaceGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceSnapshot {
    pub face: Face,
    pub grid: Vec<Vec<Color>>,
}

impl CubeSnapshot {
    #[must_use]
    pub fn face(&self, face: Face) -> Option<&FaceSnapshot> {
        self.faces.iter().find(|snapshot| snapshot.face == face)
    }
}

impl From<&FaceGrid> for FaceSnapshot {
    fn from(grid: &FaceGrid) -> Self {
        FaceSnapshot {
            face: grid.face(),
            grid: grid.rows().map(<[Color]>::to_vec).collect(),
        }
    }
}

impl Cube {
    #[must_use]
    pub fn snapshot(&self) -> CubeSnapshot {
        let faces = Face::ALL
            .into_iter()
            .map(|face| FaceSnapshot::from(&self.face_grid(face)))
            .collect();

        CubeSnapshot {
            size: self.size(),
            faces,
        }
    }
}
