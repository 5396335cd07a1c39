//! Tree serialization: outline, HTML listing, and sitemap in one walk.
//!
//! A single depth-first traversal of the [`PathTree`] fills three outputs at
//! once, so they always agree on order:
//!
//! - the [`Outline`] (`>dir`, `<`, `file` lines)
//! - the HTML listing, one collapsible `<details>` per directory and one
//!   link per file
//! - the sitemap, an absolute URL for every page-like file
//!
//! At every level the subdirectories are visited first, in locale order,
//! then the directory's own files, also in locale order.
//!
//! ## URLs
//!
//! A file's href is the directory path joined with `/` plus the file name,
//! always starting with `/`. `index.html` and `index.md` stand for their
//! directory and contribute an empty final segment:
//!
//! ```text
//! a/b.html      → /a/b.html
//! a/index.html  → /a/
//! index.md      → /
//! ```
//!
//! Link text is the percent-decoded file name. Names are HTML-escaped by
//! Maud; hrefs keep the names exactly as listed.

use crate::classify::{FileKind, is_directory_index};
use crate::outline::{Outline, OutlineLine};
use crate::tree::{Directory, PathTree};
use maud::{Markup, html};
use percent_encoding::percent_decode_str;

/// Everything the serializer produces for one tree.
#[derive(Debug)]
pub struct Serialized {
    pub outline: Outline,
    pub files_html: Markup,
    pub sitemap: Vec<String>,
}

/// Walk `tree` once, producing the outline, the HTML listing, and the
/// sitemap URLs (each prefixed with `base_url`).
pub fn serialize(tree: &PathTree, base_url: &str) -> Serialized {
    let mut walk = Walk {
        base_url,
        path: Vec::new(),
        outline: Vec::new(),
        sitemap: Vec::new(),
    };
    let files_html = walk.directory(&tree.root);
    Serialized {
        outline: Outline {
            lines: walk.outline,
        },
        files_html,
        sitemap: walk.sitemap,
    }
}

/// Traversal context: the directory names above the current node and the
/// outputs collected so far.
struct Walk<'a> {
    base_url: &'a str,
    path: Vec<&'a str>,
    outline: Vec<OutlineLine>,
    sitemap: Vec<String>,
}

impl<'a> Walk<'a> {
    fn directory(&mut self, dir: &'a Directory) -> Markup {
        let mut children = Vec::new();

        for (name, child) in dir.sorted_dirs() {
            self.outline.push(OutlineLine::Enter(name.to_string()));
            self.path.push(name);
            let body = self.directory(child);
            self.path.pop();
            self.outline.push(OutlineLine::Exit);

            children.push(html! {
                details open {
                    summary { (name) }
                    div.body { (body) }
                }
            });
        }

        for name in dir.sorted_files() {
            self.outline.push(OutlineLine::File(name.to_string()));
            children.push(self.file(name));
        }

        html! {
            @for child in &children {
                (child)
            }
        }
    }

    fn file(&mut self, name: &str) -> Markup {
        let kind = FileKind::of(name);
        let url = self.url_for(name);
        if kind.in_sitemap() {
            self.sitemap.push(format!("{}{}", self.base_url, url));
        }
        html! {
            a href=(url) class=(kind.css_classes()) { (display_name(name)) }
        }
    }

    fn url_for(&self, name: &str) -> String {
        let last = if is_directory_index(name) { "" } else { name };
        let mut url = String::new();
        for segment in &self.path {
            url.push('/');
            url.push_str(segment);
        }
        url.push('/');
        url.push_str(last);
        url
    }
}

/// Human-readable form of a file name: percent-escapes decoded.
///
/// Names whose escapes do not decode to UTF-8 are shown unchanged.
pub fn display_name(name: &str) -> String {
    percent_decode_str(name)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| name.to_string())
}
