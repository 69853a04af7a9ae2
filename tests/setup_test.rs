use std::fs;

use graph_utility::{run_setup, DataLayout, InstanceCategory, SetupConfig, SAMPLE_SIZES};
use tempfile::TempDir;

#[test]
fn test_fresh_setup_generates_three_samples_per_category() {
    let dir = TempDir::new().unwrap();
    let config = SetupConfig::new(dir.path()).with_seed(10);

    let report = run_setup(&config).unwrap();

    assert_eq!(report.counts_before.unweighted, 0);
    assert_eq!(report.counts_before.weighted, 0);
    assert_eq!(report.generated.len(), 6);
    assert_eq!(report.counts_after.unweighted, 3);
    assert_eq!(report.counts_after.weighted, 3);
    assert_eq!(report.counts_after.problem_instances, 0);

    let layout = DataLayout::new(dir.path());
    for category in [InstanceCategory::Unweighted, InstanceCategory::Weighted].iter().copied() {
        let category_dir = layout.category_dir(category);
        for (name, nodes, edges) in SAMPLE_SIZES.iter() {
            let text = fs::read_to_string(category_dir.join(name)).unwrap();
            let mut lines = text.lines();
            assert_eq!(lines.next().unwrap(), format!("{} {}", nodes, edges));
            let fields = if category.is_weighted() { 3 } else { 2 };
            let body: Vec<&str> = lines.collect();
            assert_eq!(body.len(), *edges as usize);
            assert!(body.iter().all(|l| l.split_whitespace().count() == fields));
        }
    }
}

#[test]
fn test_existing_instances_suppress_generation() {
    let dir = TempDir::new().unwrap();
    let layout = DataLayout::new(dir.path());
    layout.create_directories().unwrap();
    fs::write(layout.category_dir(InstanceCategory::Weighted).join("mine.txt"), "2 1\n1 2 1.00\n").unwrap();

    let report = run_setup(&SetupConfig::new(dir.path())).unwrap();

    assert!(report.generated.is_empty());
    assert_eq!(report.counts_after.unweighted, 0);
    assert_eq!(report.counts_after.weighted, 1);
}

#[test]
fn test_second_run_keeps_existing_files() {
    let dir = TempDir::new().unwrap();
    let config = SetupConfig::new(dir.path()).with_seed(3);
    run_setup(&config).unwrap();

    let small = DataLayout::new(dir.path()).category_dir(InstanceCategory::Unweighted).join("test_small.txt");
    let before = fs::read_to_string(&small).unwrap();

    let report = run_setup(&config.clone().with_seed(4)).unwrap();

    assert!(report.generated.is_empty());
    assert_eq!(fs::read_to_string(&small).unwrap(), before);
}

#[test]
fn test_problem_instances_alone_still_trigger_generation() {
    let dir = TempDir::new().unwrap();
    let layout = DataLayout::new(dir.path());
    let nested = layout.category_dir(InstanceCategory::ProblemInstances).join("contest");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("p1.txt"), "2 1\n1 2\n").unwrap();

    let report = run_setup(&SetupConfig::new(dir.path()).with_seed(1)).unwrap();

    assert_eq!(report.counts_before.problem_instances, 1);
    assert_eq!(report.generated.len(), 6);
    assert_eq!(report.counts_after.problem_instances, 1);
}
