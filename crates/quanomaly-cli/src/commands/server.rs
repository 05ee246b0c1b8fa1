pub fn run(host: &str, port: u16) {
    let base = format!("http://{host}:{port}");

    println!("\u{269B}\u{FE0F} Quanomaly Server v{}", quanomaly_core::VERSION);
    println!("   {base}");
    println!();
    println!("   Endpoints:");
    println!("     GET /                    API index (try: curl {base})");
    println!("     GET /api/v1/algorithms   The four scoring algorithms");
    println!("     GET /api/v1/generate     Generate a synthetic dataset");
    println!("     GET /api/v1/detect       Run a detection pass, get metrics");
    println!("     GET /health              Health check");
    println!();
    println!("   Query params for /api/v1/detect:");
    println!("     algorithm=<name>         quantum_autoencoder (default), quantum_svm, ...");
    println!("     circuit_depth=N          Simulated layers, 2-8 (default: 4)");
    println!("     noise_level=X            Jitter amplitude, 0-0.5 (default: 0.1)");
    println!("     threshold=X              Detection threshold (default: 0.5)");
    println!("     seed=N                   Reproducible scoring");
    println!();
    println!("   Examples:");
    println!("     curl '{base}/api/v1/generate?count=1000&seed=7'");
    println!("     curl '{base}/api/v1/detect?algorithm=quantum_svm&threshold=0.5'");
    println!();

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(quanomaly_server::run_server(host, port));
}
