use quanomaly_core::{analysis, generator};

pub fn run(count: usize, fraud_rate: f64, seed: Option<u64>, output_path: Option<&str>) {
    let mut rng = super::make_rng(seed);
    let dataset = match generator::generate(count, fraud_rate, &mut rng) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let summary = analysis::summarize(&dataset, quanomaly_core::DEFAULT_THRESHOLD);
    println!("\u{1F4B3} Generated {} transactions", summary.count);
    println!(
        "   {} fraudulent ({:.1}% observed, {:.1}% requested)",
        summary.fraud_count,
        if summary.count > 0 {
            summary.fraud_count as f64 / summary.count as f64 * 100.0
        } else {
            0.0
        },
        fraud_rate * 100.0
    );
    println!("   mean amount: {:.2}", summary.mean_amount);
    if let Some(s) = seed {
        println!("   seed: {s}");
    }

    if let Some(path) = output_path {
        match serde_json::to_value(&dataset) {
            Ok(value) => super::write_json(path, &value),
            Err(e) => {
                eprintln!("Failed to serialize dataset: {e}");
                std::process::exit(1);
            }
        }
    }
}
