//! Engine error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid facing bearing {0}: must be finite and within [0, 360)")]
    InvalidBearing(f64),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid boundary tolerance {0}: must be within [0, 7.5)")]
    InvalidTolerance(f64),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_value() {
        let msg = EngineError::InvalidBearing(361.0).to_string();
        assert!(msg.contains("361"));
        let msg = EngineError::InvalidDate("not-a-date".into()).to_string();
        assert!(msg.contains("not-a-date"));
    }
}
