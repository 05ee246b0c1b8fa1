//! # quanomaly-core
//!
//! **A fraud-detection pipeline that mimics quantum machine learning.**
//!
//! `quanomaly-core` is the deterministic computation core behind the
//! quanomaly dashboard: it generates synthetic labeled transactions,
//! encodes them into angle-encoded feature vectors, scores them with one
//! of four simulated quantum classifiers, and measures the resulting
//! classification quality.
//!
//! ## Quick Start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use quanomaly_core::{Algorithm, DetectionConfig, generator, metrics, scoring};
//!
//! # fn main() -> Result<(), quanomaly_core::ConfigError> {
//! let mut rng = StdRng::seed_from_u64(7);
//! let dataset = generator::generate(200, 0.05, &mut rng)?;
//!
//! let config = DetectionConfig {
//!     algorithm: Algorithm::QuantumSvm,
//!     circuit_depth: 4,
//!     noise_level: 0.1,
//! };
//! let annotated = scoring::detect(&dataset, &config, &mut rng)?;
//!
//! let summary = metrics::compute_metrics(&annotated, 0.5)?;
//! assert_eq!(summary.total(), 200);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Generator → dataset → Encoder (per record) → Scoring Engine → Metrics
//! ```
//!
//! All operations are synchronous pure computations; the only state is the
//! injected `Rng`, so a seeded `StdRng` replays any run exactly. There is
//! no quantum simulation anywhere: circuit depth, noise level, qubit counts
//! and gate labels only shape classical trigonometric stand-ins.
//!
//! Note that the `variational_quantum_classifier` strategy reads each
//! transaction's true label when scoring. That label leakage is part of the
//! simulated behavior and is preserved on purpose; see [`scoring::score`].

pub mod algorithm;
pub mod analysis;
pub mod encoding;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod scoring;
pub mod transaction;

pub use algorithm::{Algorithm, AlgorithmInfo};
pub use analysis::{
    DEFAULT_HISTOGRAM_BINS, DatasetSummary, HistogramBin, ScatterPoint, anomalies,
    scatter_points, score_histogram, summarize,
};
pub use encoding::{FEATURE_COUNT, FeatureVector, encode};
pub use error::ConfigError;
pub use generator::{DEFAULT_COUNT, DEFAULT_FRAUD_RATE, generate, generate_default};
pub use metrics::{DEFAULT_THRESHOLD, MetricsSummary, compute_metrics};
pub use scoring::{
    DEFAULT_CIRCUIT_DEPTH, DEFAULT_NOISE_LEVEL, DetectionConfig, detect, score,
};
pub use transaction::Transaction;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
