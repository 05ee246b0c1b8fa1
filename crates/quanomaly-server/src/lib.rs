//! HTTP API for the quanomaly dashboard.
//!
//! Serves the detection pipeline over JSON so a browser frontend can drive
//! generation → detection → metrics without any computation of its own.
//! The server holds one shared dataset; every detection pass emits a fresh
//! annotated copy and replaces the stored one only on success.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use quanomaly_core::{
    Algorithm, DetectionConfig, Transaction, analysis, compute_metrics, detect, generate,
};

/// Shared server state.
struct AppState {
    dataset: Mutex<Vec<Transaction>>,
}

#[derive(Deserialize)]
struct GenerateParams {
    count: Option<usize>,
    fraud_rate: Option<f64>,
    /// Seed for reproducible datasets; omit for OS randomness.
    seed: Option<u64>,
}

#[derive(Deserialize)]
struct DetectParams {
    algorithm: Option<String>,
    circuit_depth: Option<u32>,
    noise_level: Option<f64>,
    threshold: Option<f64>,
    /// Seed for reproducible scoring; omit for OS randomness.
    seed: Option<u64>,
}

#[derive(Serialize)]
struct GenerateResponse {
    success: bool,
    count: usize,
    fraud_count: usize,
    fraud_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct AlgorithmEntry {
    name: &'static str,
    display_name: &'static str,
    description: &'static str,
    qubits: u8,
    gates: &'static [&'static str],
    estimated_runtime_secs: f64,
}

#[derive(Serialize)]
struct AlgorithmsResponse {
    algorithms: Vec<AlgorithmEntry>,
    total: usize,
}

#[derive(Serialize)]
struct DetectResponse {
    success: bool,
    algorithm: Option<&'static str>,
    circuit_depth: u32,
    noise_level: f64,
    threshold: f64,
    metrics: Option<quanomaly_core::MetricsSummary>,
    summary: Option<analysis::DatasetSummary>,
    histogram: Vec<analysis::HistogramBin>,
    scatter: Vec<analysis::ScatterPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    dataset_size: usize,
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

fn error_detect_response(
    message: String,
    depth: u32,
    noise: f64,
    threshold: f64,
) -> DetectResponse {
    DetectResponse {
        success: false,
        algorithm: None,
        circuit_depth: depth,
        noise_level: noise,
        threshold,
        metrics: None,
        summary: None,
        histogram: Vec::new(),
        scatter: Vec::new(),
        error: Some(message),
    }
}

async fn handle_generate(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GenerateParams>,
) -> (StatusCode, Json<GenerateResponse>) {
    let count = params.count.unwrap_or(quanomaly_core::DEFAULT_COUNT);
    let fraud_rate = params.fraud_rate.unwrap_or(quanomaly_core::DEFAULT_FRAUD_RATE);
    let mut rng = rng_for(params.seed);

    match generate(count, fraud_rate, &mut rng) {
        Ok(dataset) => {
            let fraud_count = dataset.iter().filter(|t| t.is_fraud).count();
            let count = dataset.len();
            *state.dataset.lock().await = dataset;
            log::info!("generated dataset: {count} transactions, {fraud_count} fraudulent");
            (
                StatusCode::OK,
                Json(GenerateResponse {
                    success: true,
                    count,
                    fraud_count,
                    fraud_rate,
                    error: None,
                }),
            )
        }
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(GenerateResponse {
                success: false,
                count: 0,
                fraud_count: 0,
                fraud_rate,
                error: Some(e.to_string()),
            }),
        ),
    }
}

async fn handle_detect(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DetectParams>,
) -> (StatusCode, Json<DetectResponse>) {
    let depth = params
        .circuit_depth
        .unwrap_or(quanomaly_core::DEFAULT_CIRCUIT_DEPTH);
    let noise = params
        .noise_level
        .unwrap_or(quanomaly_core::DEFAULT_NOISE_LEVEL);
    let threshold = params.threshold.unwrap_or(quanomaly_core::DEFAULT_THRESHOLD);

    let algorithm_name = params
        .algorithm
        .unwrap_or_else(|| Algorithm::QuantumAutoencoder.name().to_string());
    let algorithm = match Algorithm::from_str(&algorithm_name) {
        Ok(a) => a,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(error_detect_response(e.to_string(), depth, noise, threshold)),
            );
        }
    };

    let config = DetectionConfig {
        algorithm,
        circuit_depth: depth,
        noise_level: noise,
    };
    let mut rng = rng_for(params.seed);

    let mut dataset = state.dataset.lock().await;
    if dataset.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(error_detect_response(
                "no dataset generated yet; call /api/v1/generate first".to_string(),
                depth,
                noise,
                threshold,
            )),
        );
    }

    let annotated = match detect(&dataset, &config, &mut rng) {
        Ok(a) => a,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(error_detect_response(e.to_string(), depth, noise, threshold)),
            );
        }
    };
    let metrics = match compute_metrics(&annotated, threshold) {
        Ok(m) => m,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(error_detect_response(e.to_string(), depth, noise, threshold)),
            );
        }
    };

    let histogram = analysis::score_histogram(&annotated, analysis::DEFAULT_HISTOGRAM_BINS);
    let scatter = analysis::scatter_points(&annotated);
    let summary = analysis::summarize(&annotated, threshold);
    *dataset = annotated;

    log::info!(
        "detection pass: {} over {} transactions, accuracy {:.3}",
        algorithm,
        summary.count,
        metrics.accuracy
    );
    (
        StatusCode::OK,
        Json(DetectResponse {
            success: true,
            algorithm: Some(algorithm.name()),
            circuit_depth: depth,
            noise_level: noise,
            threshold,
            metrics: Some(metrics),
            summary: Some(summary),
            histogram,
            scatter,
            error: None,
        }),
    )
}

async fn handle_algorithms() -> Json<AlgorithmsResponse> {
    let algorithms: Vec<AlgorithmEntry> = Algorithm::ALL
        .iter()
        .map(|a| {
            let info = a.info();
            AlgorithmEntry {
                name: info.name,
                display_name: info.display_name,
                description: info.description,
                qubits: info.qubits,
                gates: info.gates,
                estimated_runtime_secs: a
                    .estimated_runtime_secs(quanomaly_core::DEFAULT_CIRCUIT_DEPTH),
            }
        })
        .collect();
    let total = algorithms.len();
    Json(AlgorithmsResponse { algorithms, total })
}

async fn handle_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let dataset = state.dataset.lock().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        dataset_size: dataset.len(),
    })
}

async fn handle_index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "Quanomaly Server",
        "version": quanomaly_core::VERSION,
        "endpoints": {
            "/": "This API index",
            "/api/v1/algorithms": "List the four scoring algorithms with display metadata",
            "/api/v1/generate": {
                "method": "GET",
                "description": "Generate a fresh synthetic dataset",
                "params": {
                    "count": "Number of transactions (default: 1000)",
                    "fraud_rate": "Fraud probability in [0, 1] (default: 0.05)",
                    "seed": "Optional seed for reproducible datasets",
                }
            },
            "/api/v1/detect": {
                "method": "GET",
                "description": "Run a detection pass over the current dataset",
                "params": {
                    "algorithm": "quantum_autoencoder | variational_quantum_classifier | quantum_svm | quantum_neural_network",
                    "circuit_depth": "Simulated layers, orchestrator range [2, 8] (default: 4)",
                    "noise_level": "Relative jitter amplitude, orchestrator range [0, 0.5] (default: 0.1)",
                    "threshold": "Detection threshold in [0, 1] (default: 0.5)",
                    "seed": "Optional seed for reproducible scoring",
                }
            },
            "/health": "Health check",
        },
        "examples": {
            "generate": "/api/v1/generate?count=1000&fraud_rate=0.05&seed=7",
            "detect": "/api/v1/detect?algorithm=quantum_svm&threshold=0.5",
        }
    }))
}

/// Build the axum router.
fn build_router() -> Router {
    let state = Arc::new(AppState {
        dataset: Mutex::new(Vec::new()),
    });

    Router::new()
        .route("/", get(handle_index))
        .route("/api/v1/algorithms", get(handle_algorithms))
        .route("/api/v1/generate", get(handle_generate))
        .route("/api/v1/detect", get(handle_detect))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Run the HTTP server.
pub async fn run_server(host: &str, port: u16) {
    let app = build_router();
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    log::info!("quanomaly server listening on {addr}");
    axum::serve(listener, app).await.unwrap();
}
