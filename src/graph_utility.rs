//! Utilities for preparing the graph instances consumed by the graph algorithms binary.
//!
//! The library owns the on-disk layout under `data/instances`, a random edge-list
//! generator for sample instances, and a superficial validator for the edge-list format.
//! No graph algorithm is run here; the binary reading these files is a separate program.

extern crate rand;
extern crate rand_chacha;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate tracing;

pub mod error;
pub mod generator;
pub mod layout;
pub mod orchestrator;
pub mod settings;
pub mod validator;

pub use error::{SetupError, SetupResult};
pub use generator::{generate_edges, generate_sample_graph, write_graph, GraphSpec};
pub use layout::{DataLayout, InstanceCategory, InstanceCounts};
pub use orchestrator::{generate_test_instances, run_setup, SetupReport, SAMPLE_SIZES};
pub use settings::SetupConfig;
pub use validator::{check_graph_file, load_graph_file, validate_graph_file, GraphFile, Validation};

/// Exported types representing graph files.
/// Node ids are 1-based in the text format, weights are decimals with two fractional digits.
pub type Node = u32;
pub type Weight = f64;

/// A single edge line of a graph file. `weight` is present only for weighted instances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub source: Node,
    pub target: Node,
    pub weight: Option<Weight>,
}

impl Edge {
    pub fn unweighted(source: Node, target: Node) -> Edge {
        Edge { source, target, weight: None }
    }

    pub fn weighted(source: Node, target: Node, weight: Weight) -> Edge {
        Edge { source, target, weight: Some(weight) }
    }
}

pub use rand::SeedableRng;

/// The generators from rand and rand_chacha are used because they are
/// reproducible on different machines.
pub fn default_rng(seed: u64) -> rand_chacha::ChaCha8Rng {
    rand_chacha::ChaCha8Rng::seed_from_u64(seed)
}

/// Installs the fmt subscriber used by all executables. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second initialization (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}
