use thiserror::Error;

/// Errors raised by ring construction and element operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("x^2 - P*x + Q with P = {p}, Q = {q} is not irreducible (discriminant {disc} is a square)")]
    Reducible { p: String, q: String, disc: String },

    #[error("incompatible rings: {lhs} and {rhs}")]
    IncompatibleRings { lhs: String, rhs: String },

    #[error("{exp} (exponent must be non-negative)")]
    NegativeExponent { exp: i64 },

    #[error("cannot parse '{input}' as an element of {ring}")]
    Parse { input: String, ring: String },
}
