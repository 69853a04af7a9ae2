// Writes a single random graph file.
//
// Usage: generate_graph <output_file> <num_nodes> <num_edges> [weighted]
// GRAPH_SETUP_SEED makes the output reproducible.

extern crate graph_utility;

use std::path::Path;

use graph_utility::{generate_sample_graph, init_tracing, load_graph_file, GraphSpec, SetupConfig};

fn print_usage() {
    println!("Usage: generate_graph <output_file> <num_nodes> <num_edges> [weighted]");
    println!("\nArguments:");
    println!("  output_file  - Path of the graph file to write");
    println!("  num_nodes    - Number of nodes, at least 2 when edges are requested");
    println!("  num_edges    - Number of edge lines to write");
    println!("  weighted     - Literal 'weighted' adds a weight in [0.1, 10.0] to every edge");
    println!("\nExample:");
    println!("  generate_graph data/instances/weighted/custom.txt 500 2000 weighted");
}

fn parse_count(value: &str, name: &str) -> u32 {
    match value.parse() {
        Ok(count) => count,
        Err(_) => {
            eprintln!("Error: invalid {} '{}'", name, value);
            print_usage();
            std::process::exit(1);
        }
    }
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 && args.len() != 5 {
        print_usage();
        std::process::exit(1);
    }

    let output = Path::new(&args[1]);
    let nodes = parse_count(&args[2], "number of nodes");
    let edges = parse_count(&args[3], "number of edges");
    let weighted = match args.get(4).map(String::as_str) {
        None => false,
        Some("weighted") => true,
        Some(other) => {
            eprintln!("Error: unknown flag '{}'", other);
            print_usage();
            std::process::exit(1);
        }
    };

    let result = SetupConfig::load().and_then(|config| {
        let mut rng = config.rng();
        generate_sample_graph(&mut rng, output, GraphSpec::new(nodes, edges, weighted))?;
        load_graph_file(output)
    });

    match result {
        Ok(graph) => println!("Read back {} edge lines for {} nodes", graph.edges.len(), graph.order),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
