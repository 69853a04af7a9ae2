//! The setup sequence run by `setup_data`.

use std::path::PathBuf;

use rand::Rng;

use crate::error::SetupResult;
use crate::generator::{generate_sample_graph, GraphSpec};
use crate::layout::{DataLayout, InstanceCategory, InstanceCounts};
use crate::settings::SetupConfig;

/// File name, node count and edge count of each generated sample.
pub const SAMPLE_SIZES: [(&str, u32, u32); 3] = [
    ("test_small.txt", 10, 15),
    ("test_medium.txt", 50, 100),
    ("test_large.txt", 100, 200),
];

/// Example invocations of the graph algorithms binary printed after setup.
pub const USAGE_EXAMPLES: [&str; 2] = [
    "./graph_algorithms data/instances/unweighted/test_small.txt output.txt 0 0 0",
    "./graph_algorithms data/instances/weighted/test_small.txt output.txt 0 1 0",
];

/// What a setup run found and produced.
#[derive(Clone, Debug)]
pub struct SetupReport {
    pub data_dir: PathBuf,
    pub counts_before: InstanceCounts,
    pub generated: Vec<PathBuf>,
    pub counts_after: InstanceCounts,
}

/// Writes the three samples into every flat category that currently holds no graph file.
pub fn generate_test_instances<R: Rng>(
    layout: &DataLayout,
    rng: &mut R,
    counts: &InstanceCounts,
) -> SetupResult<Vec<PathBuf>> {
    let mut generated = Vec::new();
    for category in [InstanceCategory::Unweighted, InstanceCategory::Weighted].iter().copied() {
        if counts.get(category) > 0 {
            continue;
        }
        println!("\n📝 Generating sample {} graphs...", category.dir_name());
        let dir = layout.category_dir(category);
        for (name, nodes, edges) in SAMPLE_SIZES.iter() {
            let path = dir.join(name);
            generate_sample_graph(rng, &path, GraphSpec::new(*nodes, *edges, category.is_weighted()))?;
            generated.push(path);
        }
    }
    Ok(generated)
}

/// Creates the tree, counts what exists, generates samples when both flat categories are
/// empty, then prints the inventory and usage hints.
pub fn run_setup(config: &SetupConfig) -> SetupResult<SetupReport> {
    let layout = DataLayout::new(config.base_dir.clone());

    println!("🚀 Graph Algorithms - Data Setup Script");
    println!("{}", "=".repeat(60));

    println!("\n📁 Creating directory structure...");
    let data_dir = layout.create_directories()?;

    println!("\n🔍 Checking existing instances...");
    let counts_before = layout.count_instances()?;
    println!("  Unweighted graphs: {}", counts_before.unweighted);
    println!("  Weighted graphs: {}", counts_before.weighted);
    println!("  Problem instances: {}", counts_before.problem_instances);

    let generated = if counts_before.has_no_samples() {
        println!("\n⚠️  No graph instances found. Generating sample instances...");
        let mut rng = config.rng();
        generate_test_instances(&layout, &mut rng, &counts_before)?
    } else {
        println!("\n✓ Graph instances already available");
        Vec::new()
    };
    info!("generated {} sample graph(s)", generated.len());

    layout.print_inventory()?;
    let counts_after = layout.count_instances()?;

    println!("\n{}", "=".repeat(60));
    println!("✅ Data setup complete!");
    println!("\nUsage examples:");
    for example in USAGE_EXAMPLES.iter() {
        println!("  {}", example);
    }

    Ok(SetupReport { data_dir, counts_before, generated, counts_after })
}
