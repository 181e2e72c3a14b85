use crate::error::{NestError, Result};
use crate::geometry::primitives::Rect;
use serde::{Deserialize, Serialize};

/// The single raw-material sheet of one solve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub width: f64,
    pub height: f64,
}

impl Board {
    /// Creates a board, failing with [`NestError::InvalidBoard`] if a dimension is not positive
    pub fn try_new(width: f64, height: f64) -> Result<Self> {
        let board = Board { width, height };
        board.validate()?;
        Ok(board)
    }

    pub fn validate(&self) -> Result<()> {
        self.bounds().map(|_| ())
    }

    /// The whole board as a rectangle, failing with [`NestError::InvalidBoard`] if a dimension is not positive and finite
    pub fn bounds(&self) -> Result<Rect> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        let bounds = match valid(self.width) && valid(self.height) {
            true => Rect::try_new(0.0, 0.0, self.width, self.height),
            false => None,
        };
        bounds.ok_or(NestError::InvalidBoard {
            width: self.width,
            height: self.height,
        })
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
