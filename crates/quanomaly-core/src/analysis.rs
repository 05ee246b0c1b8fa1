//! Post-detection analysis helpers for dashboards.
//!
//! Everything here is a projection over an annotated dataset: score
//! histograms, scatter points for amount-vs-score charts, and headline
//! summary numbers. No randomness, no mutation.

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// Default number of histogram bins.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// One fixed-width histogram bin over [range_start, range_end).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub range_start: f64,
    pub range_end: f64,
    pub count: usize,
}

/// Per-transaction projection for the amount-vs-score scatter chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub amount: f64,
    pub anomaly_score: f64,
    pub is_fraud: bool,
}

/// Headline numbers for a dataset, before or after detection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub count: usize,
    pub fraud_count: usize,
    /// Transactions with anomaly_score strictly above the threshold.
    pub anomaly_count: usize,
    pub mean_amount: f64,
    pub mean_score: f64,
}

/// Bin anomaly scores into `bins` equal-width buckets over [0, 1].
///
/// A score of exactly 1.0 lands in the last bin. `bins` of zero yields an
/// empty histogram.
pub fn score_histogram(dataset: &[Transaction], bins: usize) -> Vec<HistogramBin> {
    if bins == 0 {
        return Vec::new();
    }
    let width = 1.0 / bins as f64;
    let mut counts = vec![0usize; bins];
    for tx in dataset {
        let idx = (tx.anomaly_score * (bins as f64 - 0.01)).floor() as usize;
        counts[idx.min(bins - 1)] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            range_start: i as f64 * width,
            range_end: (i + 1) as f64 * width,
            count,
        })
        .collect()
}

/// Project a dataset into scatter-chart points.
pub fn scatter_points(dataset: &[Transaction]) -> Vec<ScatterPoint> {
    dataset
        .iter()
        .map(|tx| ScatterPoint {
            amount: tx.amount,
            anomaly_score: tx.anomaly_score,
            is_fraud: tx.is_fraud,
        })
        .collect()
}

/// Transactions flagged by the threshold, in dataset order.
pub fn anomalies(dataset: &[Transaction], threshold: f64) -> Vec<&Transaction> {
    dataset.iter().filter(|tx| tx.is_flagged(threshold)).collect()
}

/// Compute headline numbers for a dataset.
pub fn summarize(dataset: &[Transaction], threshold: f64) -> DatasetSummary {
    if dataset.is_empty() {
        return DatasetSummary::default();
    }
    let n = dataset.len() as f64;
    DatasetSummary {
        count: dataset.len(),
        fraud_count: dataset.iter().filter(|t| t.is_fraud).count(),
        anomaly_count: dataset.iter().filter(|t| t.is_flagged(threshold)).count(),
        mean_amount: dataset.iter().map(|t| t.amount).sum::<f64>() / n,
        mean_score: dataset.iter().map(|t| t.anomaly_score).sum::<f64>() / n,
    }
}
