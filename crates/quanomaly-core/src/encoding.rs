//! Feature encoding: transaction → fixed-length normalized vector.
//!
//! Raw features are scaled into roughly unit range, then passed through the
//! angle-encoding map `f ↦ sin(f·π/2)` that stands in for quantum state
//! preparation. The transform is pure: no randomness, no side effects.
//!
//! `frequency` and `velocity` are intentionally not clamped before the
//! transform. A legitimate transaction with frequency 2.5 encodes past the
//! sine peak and loses discriminative range; that is expected behavior of
//! the simulation, not a defect.

use std::f64::consts::FRAC_PI_2;

use crate::transaction::Transaction;

/// Number of features in an encoded vector.
pub const FEATURE_COUNT: usize = 6;

/// Fixed-length feature vector derived from one transaction.
///
/// Never persisted; recomputed whenever scoring runs.
pub type FeatureVector = [f64; FEATURE_COUNT];

/// Encode a transaction into its feature vector.
///
/// Raw features, in order: `ln(amount+1)/10`, `time/24`, `location/100`,
/// `merchant_category/20`, `frequency` (unscaled), `velocity/10`. Each is
/// then mapped through `sin(f·π/2)`.
pub fn encode(tx: &Transaction) -> FeatureVector {
    let raw: FeatureVector = [
        (tx.amount + 1.0).ln() / 10.0,
        tx.time / 24.0,
        tx.location / 100.0,
        f64::from(tx.merchant_category) / 20.0,
        tx.frequency,
        tx.velocity / 10.0,
    ];
    raw.map(|f| (f * FRAC_PI_2).sin())
}
