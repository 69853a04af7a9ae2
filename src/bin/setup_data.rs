// Prepares data/instances for the graph algorithms binary.
//
// Usage: setup_data
// GRAPH_SETUP_BASE_DIR selects the project directory (default: current directory),
// GRAPH_SETUP_SEED makes the sample graphs reproducible.

extern crate graph_utility;
#[macro_use]
extern crate tracing;

use graph_utility::{init_tracing, run_setup, SetupConfig};

fn main() {
    init_tracing();

    let result = SetupConfig::load().and_then(|config| {
        info!("base directory: {}", config.base_dir.display());
        run_setup(&config)
    });

    if let Err(e) = result {
        error!("data setup failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
