//! Input validation errors raised at alphabet boundaries

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a piece of user input was rejected before analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// The input was empty
    Empty,
    /// A symbol outside the accepted alphabet, at a 1-indexed position
    InvalidSymbol { symbol: char, position: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "input is empty"),
            ValidationError::InvalidSymbol { symbol, position } => write!(
                f,
                "invalid symbol '{}' at position {} (allowed: A, C, G, T, N)",
                symbol, position
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
