//! Synthetic transaction records.
//!
//! A [`Transaction`] is one simulated purchase event with a ground-truth
//! fraud label fixed at creation. The `anomaly_score` field starts at 0 and
//! is filled in by a detection pass, which always emits a new annotated
//! sequence rather than mutating the generated one.

use serde::{Deserialize, Serialize};

/// One synthetic purchase event with a ground-truth fraud label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique within a dataset, assigned by generation order (zero-based).
    pub id: usize,
    /// Positive amount in currency units.
    pub amount: f64,
    /// Hour of day in [0, 24).
    pub time: f64,
    /// Opaque location code in [0, 100).
    pub location: f64,
    /// Merchant category code in [0, 20).
    pub merchant_category: u8,
    /// Transaction frequency signal (non-negative).
    pub frequency: f64,
    /// Transaction velocity signal (non-negative).
    pub velocity: f64,
    /// Ground-truth label, never mutated after generation.
    pub is_fraud: bool,
    /// Detection output in [0, 1]. Zero until a detection pass runs.
    pub anomaly_score: f64,
}

impl Transaction {
    /// Whether a thresholded detector flags this transaction.
    ///
    /// Strict greater-than: a score exactly at the threshold is not flagged.
    pub fn is_flagged(&self, threshold: f64) -> bool {
        self.anomaly_score > threshold
    }
}
