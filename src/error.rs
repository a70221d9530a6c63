//! Unified error handling for the Revnet simulator
//!
//! Engine misuse (quoting against an empty pool side, redeeming against zero
//! supply) is surfaced as a hard error instead of letting NaN/Infinity
//! propagate through the run. Insolvency of a sale is NOT an error: the
//! router reports it as an unfulfilled fill and the simulator moves on.

use thiserror::Error;

/// Main error type for the Revnet simulator
#[derive(Debug, Error)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// A pool quote or trade was requested while a reserve side is empty.
    #[error("Pool reserve is empty on the {0} side")]
    ZeroReserve(&'static str),

    /// A redemption quote was requested while the token supply is zero.
    #[error("Revnet token supply is zero, nothing is redeemable")]
    ZeroSupply,

    #[error("Report export failed: {0}")]
    Report(String),
}

impl SimError {
    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            SimError::Config(_) => "config",
            SimError::ZeroReserve(_) | SimError::ZeroSupply => "engine",
            SimError::Report(_) => "report",
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Report(err.to_string())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Report(format!("JSON serialization error: {}", err))
    }
}

impl From<crate::config::ConfigError> for SimError {
    fn from(err: crate::config::ConfigError) -> Self {
        SimError::Config(err.to_string())
    }
}

/// Result type alias using SimError
pub type SimResult<T> = Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::ZeroReserve("token");
        assert!(err.to_string().contains("token"));
    }

    #[test]
    fn test_error_category() {
        assert_eq!(SimError::Config("x".to_string()).category(), "config");
        assert_eq!(SimError::ZeroSupply.category(), "engine");
        assert_eq!(SimError::Report("x".to_string()).category(), "report");
    }
}
