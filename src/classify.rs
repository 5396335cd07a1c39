//! File classification by extension.
//!
//! Each listed file gets one or more CSS classes that the filter toggles
//! key off (`.html`, `.img`, `.other`), plus finer-grained classes for
//! styling (`css`, `js`, `index`). Page-like files also go into the sitemap.
//!
//! | Extension | Classes | Sitemap |
//! |-----------|---------|---------|
//! | `html` | `html` (`html index` for `index.html`) | yes |
//! | `css`, `scss` | `other css` | no |
//! | `js`, `mjs`, `ts`, `gs` | `other js` | no |
//! | `svg`, `png`, `gif`, `jpg`, `webp` | `img` | no |
//! | `md` (only `index.md`) | `other index` | yes |
//! | anything else | `other` | no |

/// Category of a listed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Html,
    HtmlIndex,
    Stylesheet,
    Script,
    Image,
    MarkdownIndex,
    Other,
}

impl FileKind {
    /// Classify a bare file name (no directory part).
    ///
    /// The extension is everything after the last `.`, compared
    /// case-insensitively. A name without a dot is its own extension, so a
    /// file literally called `html` classifies as HTML.
    pub fn of(name: &str) -> Self {
        let extension = name.rsplit('.').next().unwrap_or(name).to_ascii_lowercase();
        match extension.as_str() {
            "html" if name == "index.html" => FileKind::HtmlIndex,
            "html" => FileKind::Html,
            "css" | "scss" => FileKind::Stylesheet,
            "js" | "mjs" | "ts" | "gs" => FileKind::Script,
            "svg" | "png" | "gif" | "jpg" | "webp" => FileKind::Image,
            "md" if name == "index.md" => FileKind::MarkdownIndex,
            _ => FileKind::Other,
        }
    }

    /// Space-separated CSS classes for the rendered link.
    pub fn css_classes(self) -> &'static str {
        match self {
            FileKind::Html => "html",
            FileKind::HtmlIndex => "html index",
            FileKind::Stylesheet => "other css",
            FileKind::Script => "other js",
            FileKind::Image => "img",
            FileKind::MarkdownIndex => "other index",
            FileKind::Other => "other",
        }
    }

    /// Whether the file is a page that belongs in the sitemap.
    pub fn in_sitemap(self) -> bool {
        matches!(
            self,
            FileKind::Html | FileKind::HtmlIndex | FileKind::MarkdownIndex
        )
    }
}

/// Whether a file stands for its directory's URL.
///
/// Only the exact names `index.html` and `index.md` collapse; `INDEX.HTML`
/// keeps its own URL.
pub fn is_directory_index(name: &str) -> bool {
    name == "index.html" || name == "index.md"
}
