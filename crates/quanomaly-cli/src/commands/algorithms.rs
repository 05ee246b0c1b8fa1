use quanomaly_core::Algorithm;

pub fn run() {
    println!("Available scoring algorithms:\n");

    for alg in Algorithm::ALL {
        let info = alg.info();
        println!("  \u{269B}\u{FE0F} {:<32} {}", info.name, info.display_name);
        println!("     {}", info.description);
        println!(
            "     {} qubits | gates: {} | est. runtime at depth {}: ~{:.1}s",
            info.qubits,
            info.gates.join(", "),
            quanomaly_core::DEFAULT_CIRCUIT_DEPTH,
            alg.estimated_runtime_secs(quanomaly_core::DEFAULT_CIRCUIT_DEPTH),
        );
        println!();
    }

    println!("Qubit counts and gate sets are display metadata for the simulated");
    println!("circuits; scoring itself is a classical numeric stand-in.");
}
