use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatmulError {
    #[error("matrix {operand} is {got}x{got}, expected {expected}x{expected}")]
    DimensionMismatch {
        operand: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("shape mismatch: {n}x{n} matrix needs {expected} elements, got {got}")]
    ShapeMismatch { n: usize, expected: usize, got: usize },
    #[error("invalid tile size {input:?}: not an integer")]
    InvalidTileSize { input: String },
    #[error("tile size {input:?} is out of range")]
    TileSizeOutOfRange { input: String },
    #[error("matrix size must be positive, got {0}")]
    InvalidSize(usize),
    #[error("matrix size {0} is too large: {0}x{0} f64 elements don't fit in memory")]
    SizeOutOfRange(usize),
}

pub type Result<T> = std::result::Result<T, MatmulError>;
