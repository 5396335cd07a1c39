//! Shared test utilities for the site-index test suite.
//!
//! Provides a sample listing, tree lookups that panic with a clear message
//! on miss, and a throwaway site root laid out like the real one.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = setup_site(&["all/a/b.html"]);
//! generate(site.path(), &IndexConfig::default(), now).unwrap();
//! assert_eq!(read(&site, "all/everything.txt"), ">a\nb.html\n<");
//! ```

use std::fs;
use tempfile::TempDir;

use crate::tree::{Directory, PathTree};

/// Minimal page template using every placeholder.
pub const TEST_TEMPLATE: &str = "<!DOCTYPE html><html><head>{STYLES}</head><body>\
{TARGETS}<div class=\"preamble\">Updated {DATE} <time>{ISO}</time>{CHECKBOXES}</div>\
<main>{FILES}</main><footer>{DATE}</footer></body></html>";

// =========================================================================
// Sample data
// =========================================================================

/// A listing with nesting, mixed case, index files, and every category.
pub fn sample_paths() -> Vec<&'static str> {
    vec![
        "all/index.html",
        "all/README.md",
        "all/favicon.png",
        "all/_config.yml",
        "all/Games/index.html",
        "all/Games/snake.html",
        "all/Games/snake.js",
        "all/games/tetris.html",
        "all/games/assets/block.png",
        "all/games/assets/theme.css",
        "all/docs/index.md",
        "all/docs/guide.md",
        "all/docs/api/index.md",
        "all/docs/api/types.ts",
        "all/Zeta.html",
        "all/alpha.html",
        "all/hello%20world.html",
    ]
}

// =========================================================================
// Tree lookups
// =========================================================================

/// Names of a directory's children, in stored order.
pub fn dir_names(dir: &Directory) -> Vec<&str> {
    dir.dirs.keys().map(String::as_str).collect()
}

/// Follow `path` down from the root. Panics if any step is missing.
pub fn find_dir<'a>(tree: &'a PathTree, path: &[&str]) -> &'a Directory {
    let mut dir = &tree.root;
    for (depth, name) in path.iter().enumerate() {
        dir = dir.dirs.get(*name).unwrap_or_else(|| {
            panic!(
                "directory '{name}' not found under /{}. Available: {:?}",
                path[..depth].join("/"),
                dir_names(dir)
            )
        });
    }
    dir
}

// =========================================================================
// Site fixture
// =========================================================================

/// A temp site root with `all/more-everything.json` holding `paths` and
/// `all/template-all.html` holding [`TEST_TEMPLATE`].
pub fn setup_site(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let all = tmp.path().join("all");
    fs::create_dir_all(&all).unwrap();
    fs::write(
        all.join("more-everything.json"),
        serde_json::to_string(paths).unwrap(),
    )
    .unwrap();
    fs::write(all.join("template-all.html"), TEST_TEMPLATE).unwrap();
    tmp
}

/// Read a file under the site root. Panics if missing.
pub fn read(site: &TempDir, rel: &str) -> String {
    let path = site.path().join(rel);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}
