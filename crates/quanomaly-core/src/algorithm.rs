//! The closed set of simulated quantum scoring algorithms.
//!
//! Four algorithms exist and the set does not change at runtime. Each one
//! carries a static [`AlgorithmInfo`] descriptor used by dashboards and the
//! CLI: qubit count and gate labels are display-only and never drive the
//! actual computation, which is a classical numeric stand-in.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Selectable scoring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Reconstruction-error scoring with noise-perturbed features.
    QuantumAutoencoder,
    /// Logistic confidence scoring coupled to the true label.
    VariationalQuantumClassifier,
    /// Kernel-distance scoring from a simulated decision boundary.
    QuantumSvm,
    /// Iterated tanh layers with injected noise.
    QuantumNeuralNetwork,
}

/// Static metadata about an algorithm.
///
/// `qubits` and `gates` describe the quantum circuit the strategy mimics.
/// They feed display and runtime estimates only; no computation is sized
/// by them.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmInfo {
    /// Stable identifier (e.g. `"quantum_svm"`).
    pub name: &'static str,
    /// Human-readable display name.
    pub display_name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Simulated qubit count (display/runtime-estimate only).
    pub qubits: u8,
    /// Gate-name labels (display only, never executed).
    pub gates: &'static [&'static str],
}

static AUTOENCODER_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "quantum_autoencoder",
    display_name: "Quantum Autoencoder",
    description: "Unsupervised learning to compress normal transactions and detect anomalies",
    qubits: 6,
    gates: &["RX", "RY", "RZ", "CNOT"],
};

static VARIATIONAL_CLASSIFIER_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "variational_quantum_classifier",
    display_name: "Variational Quantum Classifier",
    description: "Supervised classification with parameterized quantum circuits",
    qubits: 8,
    gates: &["RX", "RY", "RZ", "CNOT", "CZ"],
};

static SVM_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "quantum_svm",
    display_name: "Quantum Support Vector Machine",
    description: "Quantum kernel methods for anomaly boundary detection",
    qubits: 5,
    gates: &["RX", "RY", "CNOT"],
};

static NEURAL_NETWORK_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "quantum_neural_network",
    display_name: "Quantum Neural Network",
    description: "Deep quantum circuits for complex pattern recognition",
    qubits: 10,
    gates: &["RX", "RY", "RZ", "CNOT", "CZ", "CRY"],
};

impl Algorithm {
    /// Every algorithm, in presentation order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::QuantumAutoencoder,
        Algorithm::VariationalQuantumClassifier,
        Algorithm::QuantumSvm,
        Algorithm::QuantumNeuralNetwork,
    ];

    /// Static descriptor for this algorithm.
    pub fn info(&self) -> &'static AlgorithmInfo {
        match self {
            Self::QuantumAutoencoder => &AUTOENCODER_INFO,
            Self::VariationalQuantumClassifier => &VARIATIONAL_CLASSIFIER_INFO,
            Self::QuantumSvm => &SVM_INFO,
            Self::QuantumNeuralNetwork => &NEURAL_NETWORK_INFO,
        }
    }

    /// Stable identifier, same as the serde/`FromStr` form.
    pub fn name(&self) -> &'static str {
        self.info().name
    }

    /// Estimated wall-clock runtime in seconds for the simulated circuit.
    ///
    /// Purely cosmetic: 0.1s per qubit per layer, matching the dashboard's
    /// footer estimate. The actual computation returns immediately.
    pub fn estimated_runtime_secs(&self, circuit_depth: u32) -> f64 {
        f64::from(self.info().qubits) * f64::from(circuit_depth) * 0.1
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quantum_autoencoder" => Ok(Self::QuantumAutoencoder),
            "variational_quantum_classifier" => Ok(Self::VariationalQuantumClassifier),
            "quantum_svm" => Ok(Self::QuantumSvm),
            "quantum_neural_network" => Ok(Self::QuantumNeuralNetwork),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }
}
