use thiserror::Error;

/// Precondition violations raised by the geometry kernel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Angle {numerator}/{denominator}·π has no exact sine and cosine in Q(√3)")]
    UnsupportedAngle { numerator: i64, denominator: i64 },
    #[error("A path needs at least 2 points, got {0}")]
    TooFewPoints(usize),
    #[error("Division by zero")]
    DivisionByZero,
}
