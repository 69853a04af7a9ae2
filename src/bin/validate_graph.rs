// Checks the format of one or more graph files.
//
// Usage: validate_graph <graph_file>...

extern crate graph_utility;

use std::path::Path;

use graph_utility::{check_graph_file, init_tracing};

fn main() {
    init_tracing();

    let files: Vec<String> = std::env::args().skip(1).collect();
    if files.is_empty() {
        eprintln!("Usage: validate_graph <graph_file>...");
        std::process::exit(2);
    }

    let mut all_valid = true;
    for file in &files {
        let (valid, message) = check_graph_file(Path::new(file));
        let mark = if valid { "✓" } else { "✗" };
        println!("{} {}: {}", mark, file, message);
        all_valid &= valid;
    }

    if !all_valid {
        std::process::exit(1);
    }
}
