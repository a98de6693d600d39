//! Algorithm selection and run configuration.

use std::fmt;
use std::num::{IntErrorKind, NonZeroUsize};

use crate::error::{MatmulError, Result};
use crate::matrix::{Matrix, checked_len};

/// Matrix dimension used when none is given on the command line.
pub const DEFAULT_SIZE: usize = 1024;

/// Positive tile extent for the blocked multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSize(NonZeroUsize);

impl TileSize {
    /// `None` for zero.
    pub fn new(tile: usize) -> Option<Self> {
        NonZeroUsize::new(tile).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which multiplier a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Triple loop in i-j-k order.
    #[default]
    Naive,
    /// Tiled loop nest with the given tile size.
    Blocked(TileSize),
}

impl Algorithm {
    /// A tile size of 0 selects the naive multiplier.
    pub fn from_tile(tile: usize) -> Self {
        match TileSize::new(tile) {
            Some(tile) => Self::Blocked(tile),
            None => Self::Naive,
        }
    }

    /// Parse a tile-size argument.
    ///
    /// Accepts a non-negative decimal integer (surrounding whitespace
    /// ignored); `"0"` selects [`Algorithm::Naive`]. Negative or overflowing
    /// values are [`MatmulError::TileSizeOutOfRange`], anything else that
    /// isn't an integer is [`MatmulError::InvalidTileSize`].
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        match trimmed.parse::<i64>() {
            Ok(value) => match usize::try_from(value) {
                Ok(tile) => Ok(Self::from_tile(tile)),
                Err(_) => Err(MatmulError::TileSizeOutOfRange {
                    input: input.to_string(),
                }),
            },
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(MatmulError::TileSizeOutOfRange {
                        input: input.to_string(),
                    })
                }
                _ => Err(MatmulError::InvalidTileSize {
                    input: input.to_string(),
                }),
            },
        }
    }

    /// Tile size, if blocked.
    pub fn tile(self) -> Option<TileSize> {
        match self {
            Self::Naive => None,
            Self::Blocked(tile) => Some(tile),
        }
    }

    /// Run the selected multiplier: C += A * B.
    pub fn apply(self, c: &mut Matrix, a: &Matrix, b: &Matrix) -> Result<()> {
        match self {
            Self::Naive => crate::multiply(c, a, b),
            Self::Blocked(tile) => crate::block_multiply(tile, c, a, b),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naive => write!(f, "naive"),
            Self::Blocked(tile) => write!(f, "blocked(tile={})", tile),
        }
    }
}

/// Everything a single benchmark run needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Matrix dimension N.
    pub size: usize,
    pub algorithm: Algorithm,
    /// Recompute with the naive multiplier and report the deviation.
    pub verify: bool,
}

impl RunConfig {
    pub fn new(size: usize, algorithm: Algorithm) -> Self {
        Self {
            size,
            algorithm,
            verify: false,
        }
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(MatmulError::InvalidSize(self.size));
        }
        checked_len(self.size)?;
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, Algorithm::Naive)
    }
}
