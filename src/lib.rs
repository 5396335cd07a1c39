//! # Site Index
//!
//! Builds the "everything" page of a static website: a collapsible tree of
//! every file on the site, with script-free filters to hide HTML, images, or
//! everything else, plus a plain-text sitemap.
//!
//! # Pipeline
//!
//! One run is a straight line from a flat path list to three files:
//!
//! ```text
//! paths.json → PathTree → serialize ─┬─ outline  → everything.txt
//!                                    ├─ listing  ─┐
//!                                    └─ sitemap  → sitemap.txt
//! FILTERS → generate_toggles ─────────────────────┼→ template → index.html
//! ```
//!
//! The tree is built once, walked once, and dropped. There is no state
//! between runs.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`tree`] | Flat `all/...` paths → nested [`tree::PathTree`] |
//! | [`collate`] | Locale-aware name ordering used for every listing level |
//! | [`classify`] | File extension → CSS classes and sitemap membership |
//! | [`outline`] | The `>dir` / `<` / `file` line format, parse and restore |
//! | [`serialize`] | One tree walk producing outline, HTML listing, and sitemap |
//! | [`toggles`] | `:target`-driven filter checkboxes: states, links, CSS |
//! | [`template`] | `{TOKEN}` substitution into the page template |
//! | [`config`] | Optional `index.toml` over stock defaults |
//! | [`generate`] | The end-to-end run: read, build, render, write |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## No JavaScript on the Page
//!
//! The filters are pure CSS. Each combination of hidden categories is an
//! anchor id, and clicking a checkbox navigates to the anchor for the next
//! combination. The cost is CSS that grows as 2^N · N in the number of
//! filters, which for the three fixed filters is 24 short selectors.
//!
//! ## Ordering at Render Time
//!
//! The builder only stores; the serializer sorts. Two runs over the same
//! paths in a different order give the same tree and the same output.
//!
//! ## Maud for Markup
//!
//! Listing and checkbox markup is generated with [Maud](https://maud.lambda.xyz/),
//! so file names are escaped without any hand-written escaping code. The
//! surrounding page stays a hand-edited template file.

pub mod classify;
pub mod collate;
pub mod config;
pub mod generate;
pub mod outline;
pub mod output;
pub mod serialize;
pub mod template;
pub mod toggles;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_helpers;
