//! Synthetic labeled transaction generation.
//!
//! Fraudulent and legitimate transactions are drawn from deliberately
//! separated distributions so that the scoring strategies have signal to
//! find: fraud skews to large amounts, low frequency, and high velocity.
//! Each call is independent; reproducibility comes entirely from the
//! injected `Rng`, so tests seed a `StdRng` and replay exact datasets.

use rand::Rng;

use crate::error::ConfigError;
use crate::transaction::Transaction;

/// Default dataset size.
pub const DEFAULT_COUNT: usize = 1000;

/// Default Bernoulli probability that a generated transaction is fraudulent.
pub const DEFAULT_FRAUD_RATE: f64 = 0.05;

/// Generate `count` labeled transactions.
///
/// Distributions per record:
/// - label: Bernoulli(`fraud_rate`)
/// - amount: base uniform [5000, 15000) if fraud, [10, 1010) otherwise,
///   then a symmetric ±10% relative jitter
/// - time uniform [0, 24), location uniform [0, 100),
///   merchant_category uniform integer [0, 20)
/// - frequency: uniform [0, 0.1) if fraud, [0.5, 2.5) otherwise
/// - velocity: uniform [5, 15) if fraud, [0, 3) otherwise
///
/// `anomaly_score` starts at 0 and `id` is the zero-based generation index.
pub fn generate(
    count: usize,
    fraud_rate: f64,
    rng: &mut impl Rng,
) -> Result<Vec<Transaction>, ConfigError> {
    if !(0.0..=1.0).contains(&fraud_rate) {
        return Err(ConfigError::FraudRateOutOfRange(fraud_rate));
    }

    let mut dataset = Vec::with_capacity(count);
    for id in 0..count {
        let is_fraud = rng.random_bool(fraud_rate);

        let base_amount = if is_fraud {
            rng.random_range(5000.0..15000.0)
        } else {
            rng.random_range(10.0..1010.0)
        };
        // Symmetric jitter of ±10% of the base amount.
        let amount = base_amount + (rng.random::<f64>() - 0.5) * base_amount * 0.2;

        let (frequency, velocity) = if is_fraud {
            (rng.random_range(0.0..0.1), rng.random_range(5.0..15.0))
        } else {
            (rng.random_range(0.5..2.5), rng.random_range(0.0..3.0))
        };

        dataset.push(Transaction {
            id,
            amount,
            time: rng.random_range(0.0..24.0),
            location: rng.random_range(0.0..100.0),
            merchant_category: rng.random_range(0..20),
            frequency,
            velocity,
            is_fraud,
            anomaly_score: 0.0,
        });
    }

    log::debug!(
        "generated {} transactions ({} fraudulent)",
        dataset.len(),
        dataset.iter().filter(|t| t.is_fraud).count()
    );
    Ok(dataset)
}

/// Generate with the default count and fraud rate.
pub fn generate_default(rng: &mut impl Rng) -> Result<Vec<Transaction>, ConfigError> {
    generate(DEFAULT_COUNT, DEFAULT_FRAUD_RATE, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use statrs::statistics::Statistics;

    #[test]
    fn dataset_has_requested_size_and_sequential_ids() {
        let mut rng = StdRng::seed_from_u64(1);
        let data = generate(250, 0.05, &mut rng).unwrap();
        assert_eq!(data.len(), 250);
        for (i, tx) in data.iter().enumerate() {
            assert_eq!(tx.id, i);
            assert_eq!(tx.anomaly_score, 0.0);
        }
    }

    #[test]
    fn amounts_stay_within_jittered_bands() {
        let mut rng = StdRng::seed_from_u64(2);
        let data = generate(5000, 0.1, &mut rng).unwrap();
        for tx in &data {
            assert!(tx.amount > 0.0, "amount must be positive, got {}", tx.amount);
            if tx.is_fraud {
                // base [5000, 15000) with ±10% jitter
                assert!((4500.0..16500.0).contains(&tx.amount));
            } else {
                // base [10, 1010) with ±10% jitter
                assert!((9.0..1111.0).contains(&tx.amount));
            }
        }
    }

    #[test]
    fn field_ranges_hold() {
        let mut rng = StdRng::seed_from_u64(3);
        let data = generate(2000, 0.05, &mut rng).unwrap();
        for tx in &data {
            assert!((0.0..24.0).contains(&tx.time));
            assert!((0.0..100.0).contains(&tx.location));
            assert!(tx.merchant_category < 20);
            if tx.is_fraud {
                assert!((0.0..0.1).contains(&tx.frequency));
                assert!((5.0..15.0).contains(&tx.velocity));
            } else {
                assert!((0.5..2.5).contains(&tx.frequency));
                assert!((0.0..3.0).contains(&tx.velocity));
            }
        }
    }

    #[test]
    fn fraud_count_is_bounded_and_plausible() {
        let mut rng = StdRng::seed_from_u64(4);
        let data = generate(10_000, 0.05, &mut rng).unwrap();
        let frauds = data.iter().filter(|t| t.is_fraud).count();
        assert!(frauds <= data.len());
        // 5% of 10k with generous slack.
        assert!((200..=800).contains(&frauds), "fraud count {frauds}");
    }

    #[test]
    fn legitimate_amounts_center_near_the_band_middle() {
        let mut rng = StdRng::seed_from_u64(5);
        let data = generate(20_000, 0.0, &mut rng).unwrap();
        let amounts: Vec<f64> = data.iter().map(|t| t.amount).collect();
        let mean = Statistics::mean(amounts.iter());
        // Uniform [10, 1010) has mean 510; jitter is symmetric.
        assert!((460.0..560.0).contains(&mean), "mean amount {mean}");
    }

    #[test]
    fn extreme_fraud_rates() {
        let mut rng = StdRng::seed_from_u64(6);
        let none = generate(500, 0.0, &mut rng).unwrap();
        assert!(none.iter().all(|t| !t.is_fraud));

        let all = generate(500, 1.0, &mut rng).unwrap();
        assert!(all.iter().all(|t| t.is_fraud));
    }

    #[test]
    fn out_of_range_fraud_rate_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            generate(10, 1.5, &mut rng).unwrap_err(),
            ConfigError::FraudRateOutOfRange(1.5)
        );
        assert_eq!(
            generate(10, -0.1, &mut rng).unwrap_err(),
            ConfigError::FraudRateOutOfRange(-0.1)
        );
    }

    #[test]
    fn same_seed_replays_the_same_dataset() {
        let a = generate(100, 0.05, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate(100, 0.05, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_dataset_is_valid() {
        let mut rng = StdRng::seed_from_u64(8);
        let data = generate(0, 0.05, &mut rng).unwrap();
        assert!(data.is_empty());
    }
}
