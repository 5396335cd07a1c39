//! CLI output formatting.
//!
//! A run prints a start line, then one line per written artifact with what
//! it holds, then a done line:
//!
//! ```text
//! Starting...
//! Listed 1234 files in 87 directories
//!     all/everything.txt (1408 lines)
//!     all/index.html (1234 files)
//!     all/sitemap.txt (311 URLs)
//! Done!
//! ```
//!
//! Each message has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::generate::{GenerateSummary, WrittenFile};

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 file`, `2 files`.
fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

fn artifact_line(file: &WrittenFile, singular: &str, plural: &str) -> String {
    format!(
        "{}{} ({})",
        indent(1),
        file.path.display(),
        count(file.entries, singular, plural)
    )
}

pub fn format_start() -> Vec<String> {
    vec!["Starting...".to_string()]
}

/// Print the start line to stdout.
pub fn print_start() {
    for line in format_start() {
        println!("{}", line);
    }
}

/// Format the summary of a finished run.
pub fn format_summary(summary: &GenerateSummary) -> Vec<String> {
    vec![
        format!(
            "Listed {} in {}",
            count(summary.path_count, "file", "files"),
            count(summary.dir_count, "directory", "directories")
        ),
        artifact_line(&summary.outline, "line", "lines"),
        artifact_line(&summary.index, "file", "files"),
        artifact_line(&summary.sitemap, "URL", "URLs"),
        "Done!".to_string(),
    ]
}

/// Print the run summary to stdout.
pub fn print_summary(summary: &GenerateSummary) {
    for line in format_summary(summary) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn written(path: &str, entries: usize) -> WrittenFile {
        WrittenFile {
            path: PathBuf::from(path),
            entries,
        }
    }

    #[test]
    fn start_line() {
        assert_eq!(format_start(), vec!["Starting..."]);
    }

    #[test]
    fn summary_lines() {
        let summary = GenerateSummary {
            path_count: 3,
            dir_count: 1,
            outline: written("all/everything.txt", 5),
            index: written("all/index.html", 3),
            sitemap: written("all/sitemap.txt", 2),
        };
        assert_eq!(
            format_summary(&summary),
            vec![
                "Listed 3 files in 1 directory",
                "    all/everything.txt (5 lines)",
                "    all/index.html (3 files)",
                "    all/sitemap.txt (2 URLs)",
                "Done!",
            ]
        );
    }

    #[test]
    fn singular_counts() {
        assert_eq!(count(1, "URL", "URLs"), "1 URL");
        assert_eq!(count(0, "URL", "URLs"), "0 URLs");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }
}
