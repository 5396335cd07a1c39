//! Index configuration.
//!
//! Every setting has a stock default that reproduces the site's standard
//! layout, so no config file is needed. An optional `index.toml` in the site
//! root overrides individual values:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! base_url = "https://sheeptester.github.io"   # Sitemap URL prefix, no trailing slash
//! extra_paths = []                             # Added to the listing, same "all/..." form
//!
//! [files]
//! paths = "all/more-everything.json"   # JSON array of "all/..." paths
//! template = "all/template-all.html"   # Page template with {FILES} etc.
//! outline = "all/everything.txt"       # Written: flat outline
//! index = "all/index.html"             # Written: rendered page
//! sitemap = "all/sitemap.txt"          # Written: one URL per line
//! ```
//!
//! File locations are relative to the site root. Unknown keys are rejected
//! to catch typos early. The filter toggles are fixed in
//! [`crate::toggles::FILTERS`] and are not configurable.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the optional config file in the site root.
pub const CONFIG_FILENAME: &str = "index.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings for one index build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Prefix for sitemap URLs. Listing hrefs stay root-relative.
    pub base_url: String,
    /// Paths added to the listing on top of the JSON input.
    pub extra_paths: Vec<String>,
    /// Input and output locations.
    pub files: FilesConfig,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            base_url: "https://sheeptester.github.io".to_string(),
            extra_paths: Vec::new(),
            files: FilesConfig::default(),
        }
    }
}

impl IndexConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::Validation(
                "base_url must start with http:// or https://".into(),
            ));
        }
        if self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "base_url must not end with '/'".into(),
            ));
        }
        Ok(())
    }
}

/// Input and output file locations, relative to the site root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilesConfig {
    pub paths: PathBuf,
    pub template: PathBuf,
    pub outline: PathBuf,
    pub index: PathBuf,
    pub sitemap: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            paths: PathBuf::from("all/more-everything.json"),
            template: PathBuf::from("all/template-all.html"),
            outline: PathBuf::from("all/everything.txt"),
            index: PathBuf::from("all/index.html"),
            sitemap: PathBuf::from("all/sitemap.txt"),
        }
    }
}

/// Load and validate the config file at `path`. The file must exist.
pub fn load_config(path: &Path) -> Result<IndexConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: IndexConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load `index.toml` from the site root, or the defaults when the root has
/// none.
pub fn load_site_config(root: &Path) -> Result<IndexConfig, ConfigError> {
    let path = root.join(CONFIG_FILENAME);
    if path.exists() {
        load_config(&path)
    } else {
        Ok(IndexConfig::default())
    }
}

/// Returns a fully-commented stock `index.toml` with every key and its
/// default value.
pub fn stock_config_toml() -> &'static str {
    r##"# Site index configuration
# ========================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Prefix for every sitemap URL. No trailing slash.
base_url = "https://sheeptester.github.io"

# Extra paths for the listing and sitemap, in the same "all/..." form as
# the JSON input (the first segment is dropped).
extra_paths = []

# ---------------------------------------------------------------------------
# File locations, relative to the site root
# ---------------------------------------------------------------------------
[files]
# JSON array of paths to list.
paths = "all/more-everything.json"

# Page template. Tokens: {DATE} {ISO} {STYLES} {TARGETS} {CHECKBOXES} {FILES}
template = "all/template-all.html"

# Outputs.
outline = "all/everything.txt"
index = "all/index.html"
sitemap = "all/sitemap.txt"
"##
}
