//! Error types for the Monte Carlo pricer.
//!
//! Every error is raised synchronously during validation, before the first
//! random draw of a pricing call. A validated call always runs to completion.

use thiserror::Error;

/// Errors from Monte Carlo configuration and pricing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Path count must be at least one.
    #[error("Invalid path count {0}: must be at least 1")]
    InvalidPathCount(usize),

    /// Step count must be at least one.
    #[error("Invalid step count {0}: must be at least 1")]
    InvalidStepCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl PricingError {
    /// Creates an [`InvalidParameter`](Self::InvalidParameter) error.
    pub fn invalid_parameter(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = PricingError::InvalidStepCount(0);
        assert!(err.to_string().contains("Invalid step count 0"));

        let err = PricingError::invalid_parameter("volatility", "must be non-negative, got -0.2");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'volatility': must be non-negative, got -0.2"
        );
    }
}
