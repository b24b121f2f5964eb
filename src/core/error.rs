/*!
# Unified Error Type

This module provides the error type returned by every fallible entry point in this crate.
*/

use std::error::Error;
use std::fmt;

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, LouvainError>;

/// Unified error type for the Louvain engine.
#[derive(Debug, Clone, PartialEq)]
pub enum LouvainError {
    /// The input CSR graph violates one of its structural invariants: non-monotonic
    /// offsets, out-of-range indices, or a negative/non-finite weight.
    InvalidGraph(String),

    /// A cluster weight went negative beyond rounding tolerance, or the modularity
    /// evaluator produced NaN. Always a programming defect, never a recoverable state.
    NumericalDegeneracy(String),
}

impl LouvainError {
    /// Creates an invalid-graph error with the given message.
    pub fn invalid_graph(message: impl Into<String>) -> Self {
        LouvainError::InvalidGraph(message.into())
    }

    /// Creates a numerical-degeneracy error with the given message.
    pub fn numerical_degeneracy(message: impl Into<String>) -> Self {
        LouvainError::NumericalDegeneracy(message.into())
    }
}

impl fmt::Display for LouvainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LouvainError::InvalidGraph(msg) => write!(f, "invalid graph: {}", msg),
            LouvainError::NumericalDegeneracy(msg) => write!(f, "numerical degeneracy: {}", msg),
        }
    }
}

impl Error for LouvainError {}
