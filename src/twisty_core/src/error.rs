use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("A cube must have a size between 1 and 128, got {0}")]
    InvalidSize(usize),
    #[error("Layer {index} does not exist on a cube of size {size}")]
    LayerOutOfRange { index: usize, size: usize },
    #[error("Unknown face `{0}`, expected one of L, R, D, U, B, F")]
    UnknownFace(String),
    #[error("Could not parse {0}")]
    Parse(String),
}
