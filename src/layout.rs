//! The `data/instances` tree: creation, per-category counts and the printed inventory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IoContext, SetupResult};

/// Graph files are recognised by this extension only.
pub const INSTANCE_EXTENSION: &str = "txt";

/// How many names of a flat category the inventory shows before summarising.
pub const INVENTORY_PREVIEW: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstanceCategory {
    Unweighted,
    Weighted,
    /// Externally supplied instances, possibly nested in subdirectories.
    ProblemInstances,
}

impl InstanceCategory {
    pub const ALL: [InstanceCategory; 3] = [
        InstanceCategory::Unweighted,
        InstanceCategory::Weighted,
        InstanceCategory::ProblemInstances,
    ];

    pub fn dir_name(self) -> &'static str {
        match self {
            InstanceCategory::Unweighted => "unweighted",
            InstanceCategory::Weighted => "weighted",
            InstanceCategory::ProblemInstances => "problem-instances",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InstanceCategory::Unweighted => "Unweighted Graphs",
            InstanceCategory::Weighted => "Weighted Graphs",
            InstanceCategory::ProblemInstances => "Problem Instances",
        }
    }

    pub fn is_weighted(self) -> bool {
        self == InstanceCategory::Weighted
    }

    pub fn is_recursive(self) -> bool {
        self == InstanceCategory::ProblemInstances
    }
}

/// Number of graph files found per category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InstanceCounts {
    pub unweighted: usize,
    pub weighted: usize,
    pub problem_instances: usize,
}

impl InstanceCounts {
    pub fn get(&self, category: InstanceCategory) -> usize {
        match category {
            InstanceCategory::Unweighted => self.unweighted,
            InstanceCategory::Weighted => self.weighted,
            InstanceCategory::ProblemInstances => self.problem_instances,
        }
    }

    /// True when neither flat category holds a graph file.
    pub fn has_no_samples(&self) -> bool {
        self.unweighted == 0 && self.weighted == 0
    }
}

/// Paths of the data tree below a project base directory.
#[derive(Clone, Debug)]
pub struct DataLayout {
    base_dir: PathBuf,
}

impl DataLayout {
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> DataLayout {
        DataLayout { base_dir: base_dir.into() }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn instances_dir(&self) -> PathBuf {
        self.data_dir().join("instances")
    }

    pub fn category_dir(&self, category: InstanceCategory) -> PathBuf {
        self.instances_dir().join(category.dir_name())
    }

    /// Every directory the setup guarantees, parents first.
    pub fn directories(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.data_dir(), self.instances_dir()];
        dirs.extend(InstanceCategory::ALL.iter().map(|c| self.category_dir(*c)));
        dirs
    }

    /// Creates the tree, missing ancestors included. Existing directories are left alone.
    pub fn create_directories(&self) -> SetupResult<PathBuf> {
        for dir in self.directories() {
            fs::create_dir_all(&dir).with_path(&dir)?;
            info!("directory ready: {}", dir.display());
            println!("✓ Created directory: {}", dir.display());
        }
        Ok(self.data_dir())
    }

    /// Graph files of a category in sorted order. A missing directory yields none.
    pub fn list_instances(&self, category: InstanceCategory) -> SetupResult<Vec<PathBuf>> {
        let dir = self.category_dir(category);
        let mut files = Vec::new();
        if dir.is_dir() {
            collect_instances(&dir, category.is_recursive(), &mut files)?;
        }
        files.sort();
        Ok(files)
    }

    pub fn count_instances(&self) -> SetupResult<InstanceCounts> {
        let counts = InstanceCounts {
            unweighted: self.list_instances(InstanceCategory::Unweighted)?.len(),
            weighted: self.list_instances(InstanceCategory::Weighted)?.len(),
            problem_instances: self.list_instances(InstanceCategory::ProblemInstances)?.len(),
        };
        debug!("instance counts: {:?}", counts);
        Ok(counts)
    }

    /// The "Available Graph Instances" listing.
    pub fn render_inventory(&self) -> SetupResult<String> {
        let mut out = String::new();
        out.push_str("\n📊 Available Graph Instances:\n");
        out.push_str(&"=".repeat(60));
        out.push('\n');

        for category in InstanceCategory::ALL.iter().copied() {
            let files = self.list_instances(category)?;
            if files.is_empty() {
                continue;
            }
            if category.is_recursive() {
                out.push_str(&format!("\n{} ({} files)\n", category.label(), files.len()));
                out.push_str(&format!("  Location: {}\n", self.category_dir(category).display()));
                continue;
            }
            out.push_str(&format!("\n{} ({} files):\n", category.label(), files.len()));
            for file in files.iter().take(INVENTORY_PREVIEW) {
                let name = file.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
                out.push_str(&format!("  - {}\n", name));
            }
            if files.len() > INVENTORY_PREVIEW {
                out.push_str(&format!("  ... and {} more\n", files.len() - INVENTORY_PREVIEW));
            }
        }
        Ok(out)
    }

    pub fn print_inventory(&self) -> SetupResult<()> {
        print!("{}", self.render_inventory()?);
        Ok(())
    }
}

fn is_instance_file(path: &Path) -> bool {
    path.is_file() && path.extension().map_or(false, |ext| ext == INSTANCE_EXTENSION)
}

fn collect_instances(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> SetupResult<()> {
    for entry in fs::read_dir(dir).with_path(dir)? {
        let path = entry.with_path(dir)?.path();
        if is_instance_file(&path) {
            files.push(path);
        } else if recursive && path.is_dir() {
            collect_instances(&path, recursive, files)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_directories_follow_the_fixed_layout() {
        let layout = DataLayout::new("/project");
        assert_eq!(
            layout.category_dir(InstanceCategory::ProblemInstances),
            PathBuf::from("/project/data/instances/problem-instances")
        );
        assert_eq!(layout.directories().len(), 5);
        assert_eq!(layout.directories()[0], PathBuf::from("/project/data"));
    }

    #[test]
    fn only_problem_instances_are_searched_recursively() {
        assert!(InstanceCategory::ProblemInstances.is_recursive());
        assert!(!InstanceCategory::Unweighted.is_recursive());
        assert!(!InstanceCategory::Weighted.is_recursive());
        assert!(InstanceCategory::Weighted.is_weighted());
    }

    #[test]
    fn empty_counts_mean_no_samples() {
        assert!(InstanceCounts::default().has_no_samples());
        let counts = InstanceCounts { weighted: 1, ..InstanceCounts::default() };
        assert!(!counts.has_no_samples());
    }
}
