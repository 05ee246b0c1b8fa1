use quanomaly_core::{DetectionConfig, analysis, generator, metrics, scoring};

pub struct DetectCommandConfig<'a> {
    pub algorithm: &'a str,
    pub circuit_depth: u32,
    pub noise_level: f64,
    pub threshold: f64,
    pub count: usize,
    pub fraud_rate: f64,
    pub seed: Option<u64>,
    pub output_path: Option<&'a str>,
}

pub fn run(cmd: DetectCommandConfig<'_>) {
    let algorithm = super::parse_algorithm(cmd.algorithm);
    let config = DetectionConfig {
        algorithm,
        circuit_depth: cmd.circuit_depth,
        noise_level: cmd.noise_level,
    };

    let mut rng = super::make_rng(cmd.seed);
    let result = generator::generate(cmd.count, cmd.fraud_rate, &mut rng)
        .and_then(|dataset| scoring::detect(&dataset, &config, &mut rng))
        .and_then(|annotated| {
            metrics::compute_metrics(&annotated, cmd.threshold).map(|m| (annotated, m))
        });
    let (annotated, summary) = match result {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let info = algorithm.info();
    let overview = analysis::summarize(&annotated, cmd.threshold);

    println!("\u{269B}\u{FE0F} {} ({})", info.display_name, info.name);
    println!(
        "   depth {} | noise {:.2} | threshold {:.2} | est. runtime ~{:.1}s",
        cmd.circuit_depth,
        cmd.noise_level,
        cmd.threshold,
        algorithm.estimated_runtime_secs(cmd.circuit_depth),
    );
    println!();
    println!(
        "   {} transactions, {} fraudulent, {} flagged",
        overview.count, overview.fraud_count, overview.anomaly_count
    );
    println!();
    println!("   Accuracy   {:>6.1}%", summary.accuracy * 100.0);
    println!("   Precision  {:>6.1}%", summary.precision * 100.0);
    println!("   Recall     {:>6.1}%", summary.recall * 100.0);
    println!("   F1 Score   {:>6.1}%", summary.f1 * 100.0);
    println!();
    println!(
        "   TP {:>5}  FP {:>5}  TN {:>5}  FN {:>5}",
        summary.true_positive,
        summary.false_positive,
        summary.true_negative,
        summary.false_negative
    );

    let histogram = analysis::score_histogram(&annotated, analysis::DEFAULT_HISTOGRAM_BINS);
    let peak = histogram.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    println!("\n   Score distribution:");
    for bin in &histogram {
        let bar_len = bin.count * 40 / peak;
        println!(
            "   {:.1}-{:.1} {:>5} {}",
            bin.range_start,
            bin.range_end,
            bin.count,
            "\u{2588}".repeat(bar_len)
        );
    }

    if let Some(path) = cmd.output_path {
        let report = serde_json::json!({
            "algorithm": info.name,
            "circuit_depth": cmd.circuit_depth,
            "noise_level": cmd.noise_level,
            "threshold": cmd.threshold,
            "seed": cmd.seed,
            "metrics": summary,
            "summary": overview,
            "histogram": histogram,
            "transactions": annotated,
        });
        super::write_json(path, &report);
    }
}
