//! Binary-classification metrics for a thresholded detection run.
//!
//! Predicted positive means `anomaly_score > threshold` (strict). Any
//! metric whose denominator is zero is reported as 0 rather than failing,
//! including the all-zero summary for an empty dataset.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::transaction::Transaction;

/// Default detection threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Classification-quality statistics for one detection run.
///
/// The four counts partition the dataset exactly: every transaction lands
/// in one cell of the 2×2 contingency table.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub accuracy: f64,
    pub true_positive: usize,
    pub false_positive: usize,
    pub true_negative: usize,
    pub false_negative: usize,
}

impl MetricsSummary {
    /// Sum of all four contingency counts; equals the dataset size.
    pub fn total(&self) -> usize {
        self.true_positive + self.false_positive + self.true_negative + self.false_negative
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Compare anomaly scores against the threshold and true labels.
///
/// Pure function: the dataset is not mutated. An empty dataset yields the
/// all-zero summary. A threshold outside [0, 1] is a configuration error.
pub fn compute_metrics(
    dataset: &[Transaction],
    threshold: f64,
) -> Result<MetricsSummary, ConfigError> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(ConfigError::ThresholdOutOfRange(threshold));
    }

    let (mut tp, mut fp, mut tn, mut fn_) = (0usize, 0usize, 0usize, 0usize);
    for tx in dataset {
        match (tx.is_flagged(threshold), tx.is_fraud) {
            (true, true) => tp += 1,
            (true, false) => fp += 1,
            (false, true) => fn_ += 1,
            (false, false) => tn += 1,
        }
    }

    let precision = ratio(tp as f64, (tp + fp) as f64);
    let recall = ratio(tp as f64, (tp + fn_) as f64);
    let f1 = ratio(2.0 * precision * recall, precision + recall);
    let accuracy = ratio((tp + tn) as f64, dataset.len() as f64);

    Ok(MetricsSummary {
        precision,
        recall,
        f1,
        accuracy,
        true_positive: tp,
        false_positive: fp,
        true_negative: tn,
        false_negative: fn_,
    })
}
