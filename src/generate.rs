//! Index generation: the end-to-end run.
//!
//! Reads the path list, builds the tree, serializes it, and writes the three
//! artifacts. All paths come from [`IndexConfig::files`], relative to the
//! site root.
//!
//! ```text
//! all/more-everything.json ─┐
//!   + config extra_paths    ├─→ PathTree ─→ serialize ─┬─→ all/everything.txt
//!                           │                          ├─→ {FILES}  ─┐
//!                           │                          └─→ all/sitemap.txt
//! toggles::FILTERS ─────────┴─→ generate_toggles ─→ {STYLES} {TARGETS}
//!                                                   {CHECKBOXES} ─────┤
//! all/template-all.html ──────────────────────────────────────────────┴─→ all/index.html
//! ```
//!
//! Each input is read before the output that depends on it is written. The
//! three writes are independent: if a later one fails, earlier outputs stay
//! on disk as written.

use crate::config::IndexConfig;
use crate::serialize::serialize;
use crate::template::{self, TemplateValues};
use crate::toggles::{self, FILTERS};
use crate::tree::PathTree;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Toggle error: {0}")]
    Toggle(#[from] toggles::ToggleError),
}

/// What a run wrote, for console reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateSummary {
    pub path_count: usize,
    pub dir_count: usize,
    pub outline: WrittenFile,
    pub index: WrittenFile,
    pub sitemap: WrittenFile,
}

/// One output artifact and how many entries it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub entries: usize,
}

/// Run the whole generation under `root`, stamping the page with `now`.
pub fn generate(
    root: &Path,
    config: &IndexConfig,
    now: DateTime<Utc>,
) -> Result<GenerateSummary, GenerateError> {
    let mut paths = read_paths(&root.join(&config.files.paths))?;
    paths.extend(config.extra_paths.iter().cloned());

    let tree = PathTree::from_paths(&paths);
    let serialized = serialize(&tree, &config.base_url);

    fs::write(
        root.join(&config.files.outline),
        serialized.outline.to_string(),
    )?;

    let page_template = fs::read_to_string(root.join(&config.files.template))?;
    let controls = toggles::generate_toggles(FILTERS)?;
    let values = TemplateValues {
        styles: controls.styles,
        targets: controls.targets.into_string(),
        checkboxes: controls.checkboxes.into_string(),
        files: serialized.files_html.into_string(),
        ..TemplateValues::stamped(now)
    };
    fs::write(
        root.join(&config.files.index),
        template::render(&page_template, &values),
    )?;

    fs::write(
        root.join(&config.files.sitemap),
        serialized.sitemap.join("\n"),
    )?;

    Ok(GenerateSummary {
        path_count: tree.file_count(),
        dir_count: tree.dir_count(),
        outline: WrittenFile {
            path: config.files.outline.clone(),
            entries: serialized.outline.len(),
        },
        index: WrittenFile {
            path: config.files.index.clone(),
            entries: tree.file_count(),
        },
        sitemap: WrittenFile {
            path: config.files.sitemap.clone(),
            entries: serialized.sitemap.len(),
        },
    })
}

/// Read the JSON array of listing paths.
pub fn read_paths(path: &Path) -> Result<Vec<String>, GenerateError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
