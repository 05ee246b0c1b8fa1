//! CLI for quanomaly — simulated quantum ML anomaly detection over synthetic transactions.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quanomaly")]
#[command(about = "quanomaly — simulated quantum ML anomaly detection over synthetic transactions")]
#[command(version = quanomaly_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the four scoring algorithms with their display metadata
    Algorithms,

    /// Generate a synthetic labeled transaction dataset
    Generate {
        /// Number of transactions
        #[arg(long, default_value = "1000")]
        count: usize,

        /// Fraud probability in [0, 1]
        #[arg(long, default_value = "0.05")]
        fraud_rate: f64,

        /// Seed for reproducible datasets (omit for OS randomness)
        #[arg(long)]
        seed: Option<u64>,

        /// Write the dataset as JSON
        #[arg(long)]
        output: Option<String>,
    },

    /// Generate a dataset, run one detection pass, and print metrics
    Detect {
        /// Algorithm: quantum_autoencoder, variational_quantum_classifier,
        /// quantum_svm, quantum_neural_network
        #[arg(long, default_value = "quantum_autoencoder")]
        algorithm: String,

        /// Simulated circuit layers (orchestrator range [2, 8])
        #[arg(long, default_value = "4")]
        circuit_depth: u32,

        /// Relative noise amplitude (orchestrator range [0, 0.5])
        #[arg(long, default_value = "0.1")]
        noise_level: f64,

        /// Detection threshold in [0, 1]
        #[arg(long, default_value = "0.5")]
        threshold: f64,

        /// Number of transactions to generate
        #[arg(long, default_value = "1000")]
        count: usize,

        /// Fraud probability in [0, 1]
        #[arg(long, default_value = "0.05")]
        fraud_rate: f64,

        /// Seed for a reproducible run (omit for OS randomness)
        #[arg(long)]
        seed: Option<u64>,

        /// Write the full report (annotated dataset + metrics) as JSON
        #[arg(long)]
        output: Option<String>,
    },

    /// Run every algorithm over one dataset and print a comparison table
    Bench {
        /// Number of transactions to generate
        #[arg(long, default_value = "1000")]
        count: usize,

        /// Fraud probability in [0, 1]
        #[arg(long, default_value = "0.05")]
        fraud_rate: f64,

        /// Simulated circuit layers (orchestrator range [2, 8])
        #[arg(long, default_value = "4")]
        circuit_depth: u32,

        /// Relative noise amplitude (orchestrator range [0, 0.5])
        #[arg(long, default_value = "0.1")]
        noise_level: f64,

        /// Detection threshold in [0, 1]
        #[arg(long, default_value = "0.5")]
        threshold: f64,

        /// Seed for a reproducible comparison (omit for OS randomness)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Start the HTTP API server for the dashboard
    Server {
        /// Port to listen on
        #[arg(long, default_value = "8042")]
        port: u16,

        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Algorithms => commands::algorithms::run(),
        Commands::Generate {
            count,
            fraud_rate,
            seed,
            output,
        } => commands::generate::run(count, fraud_rate, seed, output.as_deref()),
        Commands::Detect {
            algorithm,
            circuit_depth,
            noise_level,
            threshold,
            count,
            fraud_rate,
            seed,
            output,
        } => commands::detect::run(commands::detect::DetectCommandConfig {
            algorithm: &algorithm,
            circuit_depth,
            noise_level,
            threshold,
            count,
            fraud_rate,
            seed,
            output_path: output.as_deref(),
        }),
        Commands::Bench {
            count,
            fraud_rate,
            circuit_depth,
            noise_level,
            threshold,
            seed,
        } => commands::bench::run(count, fraud_rate, circuit_depth, noise_level, threshold, seed),
        Commands::Server { port, host } => commands::server::run(&host, port),
    }
}
