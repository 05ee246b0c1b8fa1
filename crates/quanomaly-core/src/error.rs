//! Configuration error taxonomy.
//!
//! Every operation in the core is a pure computation, so the only failure
//! mode is bad configuration. All validation fails fast and produces no
//! partial result; callers surface the error, the core never logs and
//! swallows it.

/// Invalid configuration handed to a core operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Algorithm identifier outside the closed set of four.
    #[error(
        "unknown algorithm '{0}' (expected one of: quantum_autoencoder, \
         variational_quantum_classifier, quantum_svm, quantum_neural_network)"
    )]
    UnknownAlgorithm(String),

    /// Fraud rate outside [0, 1].
    #[error("fraud rate {0} out of range [0, 1]")]
    FraudRateOutOfRange(f64),

    /// Detection threshold outside [0, 1].
    #[error("threshold {0} out of range [0, 1]")]
    ThresholdOutOfRange(f64),

    /// Noise level that is negative, NaN, or infinite.
    #[error("noise level {0} must be finite and non-negative")]
    InvalidNoiseLevel(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_bad_value() {
        let err = ConfigError::FraudRateOutOfRange(1.5);
        assert!(err.to_string().contains("1.5"));

        let err = ConfigError::UnknownAlgorithm("qft".to_string());
        assert!(err.to_string().contains("qft"));
        assert!(err.to_string().contains("quantum_svm"));
    }
}
