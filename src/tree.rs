//! Path tree construction.
//!
//! Turns a flat list of slash-delimited site paths into a nested directory
//! tree. The first segment of every path is a grouping prefix (the listing
//! ships paths as `all/<site path>`) and is dropped:
//!
//! ```text
//! all/a/b.html          (root)
//! all/a/index.html  →   ├── a/
//! all/c.png             │   ├── b.html
//!                       │   └── index.html
//!                       └── c.png
//! ```
//!
//! Every segment except the last names a directory, created on demand. The
//! last segment is appended to that directory's file list. A directory can
//! hold both subdirectories and files.
//!
//! ## Ordering
//!
//! Display ordering (locale-aware, see [`crate::collate`]) is applied by the
//! serializer, never here. The builder still stores its contents canonically
//! (directories in a `BTreeMap`, files kept in byte order) so that building
//! from any permutation of the same input yields trees that compare equal.

use crate::collate::locale_cmp;
use std::collections::BTreeMap;

/// A directory node: its child directories and its own files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    pub dirs: BTreeMap<String, Directory>,
    pub files: Vec<String>,
}

impl Directory {
    /// Child directories in display order.
    pub fn sorted_dirs(&self) -> Vec<(&str, &Directory)> {
        let mut dirs: Vec<(&str, &Directory)> =
            self.dirs.iter().map(|(name, dir)| (name.as_str(), dir)).collect();
        dirs.sort_by(|a, b| locale_cmp(a.0, b.0));
        dirs
    }

    /// Own files in display order, sorted independently of directory names.
    pub fn sorted_files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = self.files.iter().map(String::as_str).collect();
        files.sort_by(|a, b| locale_cmp(a, b));
        files
    }

    /// Append a file, keeping the stored list canonical.
    pub fn push_file(&mut self, name: &str) {
        let at = self.files.partition_point(|f| f.as_str() <= name);
        self.files.insert(at, name.to_string());
    }

    /// Get or create the named child directory.
    pub fn dir_mut(&mut self, name: &str) -> &mut Directory {
        self.dirs.entry(name.to_string()).or_default()
    }

    fn file_count(&self) -> usize {
        self.files.len() + self.dirs.values().map(Directory::file_count).sum::<usize>()
    }

    fn dir_count(&self) -> usize {
        self.dirs.len() + self.dirs.values().map(Directory::dir_count).sum::<usize>()
    }
}

/// The whole site tree. The root directory has no name of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTree {
    pub root: Directory,
}

impl PathTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a list of prefixed paths.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        for path in paths {
            tree.insert(path.as_ref());
        }
        tree
    }

    /// Insert one prefixed path.
    ///
    /// - `"all/a/b/c.html"` → directories `a/b`, file `c.html`
    /// - `"all/c.png"` → root file `c.png`
    /// - `"all"` → nothing (no segment after the prefix)
    ///
    /// Inserting the same path twice records the file twice.
    pub fn insert(&mut self, path: &str) {
        let mut segments: Vec<&str> = path.split('/').skip(1).collect();
        let Some(file) = segments.pop() else {
            return;
        };
        let mut dir = &mut self.root;
        for segment in segments {
            dir = dir.dir_mut(segment);
        }
        dir.push_file(file);
    }

    /// Total number of files, counting duplicates.
    pub fn file_count(&self) -> usize {
        self.root.file_count()
    }

    /// Total number of directories below the root.
    pub fn dir_count(&self) -> usize {
        self.root.dir_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn example_listing_shape() {
        let tree = PathTree::from_paths(["all/a/b.html", "all/a/index.html", "all/c.png"]);
        assert_eq!(tree.root.files, vec!["c.png"]);
        assert_eq!(dir_names(&tree.root), vec!["a"]);
        assert_eq!(
            find_dir(&tree, &["a"]).files,
            vec!["b.html", "index.html"]
        );
    }

    #[test]
    fn first_segment_is_discarded() {
        let tree = PathTree::from_paths(["anything/x.html"]);
        assert!(tree.root.dirs.is_empty());
        assert_eq!(tree.root.files, vec!["x.html"]);
    }

    #[test]
    fn intermediate_directories_created_on_demand() {
        let tree = PathTree::from_paths(["all/a/b/c/d.txt"]);
        let deep = find_dir(&tree, &["a", "b", "c"]);
        assert_eq!(deep.files, vec!["d.txt"]);
        assert_eq!(tree.dir_count(), 3);
        assert_eq!(tree.file_count(), 1);
    }

    #[test]
    fn directory_holds_both_dirs_and_files() {
        let tree = PathTree::from_paths(["all/a/sub/x.js", "all/a/y.css"]);
        let a = find_dir(&tree, &["a"]);
        assert_eq!(a.files, vec!["y.css"]);
        assert_eq!(dir_names(a), vec!["sub"]);
    }

    #[test]
    fn prefix_only_path_is_ignored() {
        let tree = PathTree::from_paths(["all"]);
        assert_eq!(tree, PathTree::new());
    }

    #[test]
    fn duplicate_paths_are_kept() {
        let tree = PathTree::from_paths(["all/a.html", "all/a.html"]);
        assert_eq!(tree.root.files, vec!["a.html", "a.html"]);
        assert_eq!(tree.file_count(), 2);
    }

    #[test]
    fn empty_segments_become_empty_names() {
        let tree = PathTree::from_paths(["all/a//b.html"]);
        let empty = find_dir(&tree, &["a", ""]);
        assert_eq!(empty.files, vec!["b.html"]);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let paths = sample_paths();
        let forward = PathTree::from_paths(&paths);
        let backward = PathTree::from_paths(paths.iter().rev());
        let mut rotated = paths.clone();
        rotated.rotate_left(3);
        assert_eq!(forward, backward);
        assert_eq!(forward, PathTree::from_paths(&rotated));
    }

    #[test]
    fn sorted_views_use_locale_order() {
        let tree = PathTree::from_paths([
            "all/Zeta/x",
            "all/alpha/x",
            "all/Beta/x",
            "all/b.html",
            "all/A.html",
            "all/_x.html",
        ]);
        let dirs: Vec<&str> = tree.root.sorted_dirs().into_iter().map(|(n, _)| n).collect();
        assert_eq!(dirs, vec!["alpha", "Beta", "Zeta"]);
        assert_eq!(tree.root.sorted_files(), vec!["_x.html", "A.html", "b.html"]);
    }
}
