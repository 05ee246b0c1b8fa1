pub mod algorithms;
pub mod bench;
pub mod detect;
pub mod generate;
pub mod server;

use rand::SeedableRng;
use rand::rngs::StdRng;

use quanomaly_core::Algorithm;

/// Parse an algorithm name, exiting with the config error on failure.
pub fn parse_algorithm(name: &str) -> Algorithm {
    match name.parse() {
        Ok(alg) => alg,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Build an rng: seeded for reproducible runs, OS-backed otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Write a JSON value to a file, exiting non-zero on IO failure.
pub fn write_json(path: &str, value: &serde_json::Value) {
    let pretty = match serde_json::to_string_pretty(value) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to serialize report: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = std::fs::write(path, pretty) {
        eprintln!("Failed to write {path}: {e}");
        std::process::exit(1);
    }
    println!("Report written to {path}");
}
