use quanomaly_core::{Algorithm, DetectionConfig, analysis, generator, metrics, scoring};

pub fn run(
    count: usize,
    fraud_rate: f64,
    circuit_depth: u32,
    noise_level: f64,
    threshold: f64,
    seed: Option<u64>,
) {
    let mut rng = super::make_rng(seed);
    let dataset = match generator::generate(count, fraud_rate, &mut rng) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let fraud_count = dataset.iter().filter(|t| t.is_fraud).count();

    println!(
        "\u{1F3C1} Comparing all algorithms over {} transactions ({} fraudulent)\n",
        dataset.len(),
        fraud_count
    );
    println!(
        "   {:<32} {:>9} {:>10} {:>8} {:>8} {:>9} {:>9}",
        "Algorithm", "Accuracy", "Precision", "Recall", "F1", "Flagged", "Est. s"
    );

    for algorithm in Algorithm::ALL {
        let config = DetectionConfig {
            algorithm,
            circuit_depth,
            noise_level,
        };
        let result = scoring::detect(&dataset, &config, &mut rng)
            .and_then(|annotated| {
                metrics::compute_metrics(&annotated, threshold).map(|m| (annotated, m))
            });
        let (annotated, summary) = match result {
            Ok(r) => r,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        };
        let flagged = analysis::anomalies(&annotated, threshold).len();

        println!(
            "   {:<32} {:>8.1}% {:>9.1}% {:>7.1}% {:>7.1}% {:>9} {:>9.1}",
            algorithm.name(),
            summary.accuracy * 100.0,
            summary.precision * 100.0,
            summary.recall * 100.0,
            summary.f1 * 100.0,
            flagged,
            algorithm.estimated_runtime_secs(circuit_depth),
        );
    }

    println!(
        "\n   depth {} | noise {:.2} | threshold {:.2}",
        circuit_depth, noise_level, threshold
    );
    println!("   Note: variational_quantum_classifier scores the true class");
    println!("   confidence (label-leaking by simulation design).");
}
