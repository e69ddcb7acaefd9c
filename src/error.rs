//! error.rs
//! The single error type shared by polynomial, root, graph and production code.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolyError {
    /// `Polynomial::sums` has no ops instance to build a zero from.
    #[error("cannot sum an empty list of polynomials")]
    EmptySum,
    /// A path starts at a vertex with no initial count.
    #[error("nullish count: {vertex}")]
    NullishCount { vertex: String },
    #[error("Cycle detected involving vertex {vertex}")]
    CycleDetected { vertex: String },
    #[error("roots of polynomials of degree {degree} (length {length}) not yet implemented")]
    UnsupportedDegree { degree: usize, length: usize },
    #[error("not bisectable")]
    NotBisectable,
    #[error("not bisectable: max-bound is too large")]
    BoundTooLarge,
}

pub type Result<T> = std::result::Result<T, PolyError>;
