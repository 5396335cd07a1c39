//! Page template substitution.
//!
//! The index page is a hand-written HTML template with placeholder tokens:
//!
//! | Token | Replaced with | Occurrences |
//! |-------|---------------|-------------|
//! | `{DATE}` | build date, `YYYY-MM-DD` (UTC) | all |
//! | `{ISO}` | build timestamp, RFC 3339 UTC | all |
//! | `{STYLES}` | toggle CSS wrapped in `<style>` | first |
//! | `{TARGETS}` | toggle target anchors | first |
//! | `{CHECKBOXES}` | toggle checkbox links | first |
//! | `{FILES}` | the file listing | first |
//!
//! Substituted values are inserted verbatim; nothing in them is treated as
//! a token again.

use chrono::{DateTime, SecondsFormat, Utc};

/// Values spliced into the template.
#[derive(Debug, Clone, Default)]
pub struct TemplateValues {
    pub date: String,
    pub iso: String,
    pub styles: String,
    pub targets: String,
    pub checkboxes: String,
    pub files: String,
}

impl TemplateValues {
    /// Fill `date` and `iso` from one instant.
    pub fn stamped(now: DateTime<Utc>) -> Self {
        Self {
            date: now.format("%Y-%m-%d").to_string(),
            iso: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            ..Self::default()
        }
    }
}

/// Substitute every placeholder in `template`.
pub fn render(template: &str, values: &TemplateValues) -> String {
    let styles = format!("<style>{}</style>", values.styles);
    let replacements: [(&str, &str, bool); 6] = [
        ("{DATE}", &values.date, true),
        ("{ISO}", &values.iso, true),
        ("{STYLES}", &styles, false),
        ("{TARGETS}", &values.targets, false),
        ("{CHECKBOXES}", &values.checkboxes, false),
        ("{FILES}", &values.files, false),
    ];

    // Single left-to-right scan so inserted text is never rescanned.
    let mut used = [false; 6];
    let mut out = String::with_capacity(template.len() + values.files.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let hit = replacements
            .iter()
            .enumerate()
            .find(|(i, (token, _, every))| tail.starts_with(token) && (*every || !used[*i]));
        match hit {
            Some((i, (token, value, _))) => {
                used[i] = true;
                out.push_str(value);
                rest = &tail[token.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn values() -> TemplateValues {
        TemplateValues {
            date: "2024-05-06".into(),
            iso: "2024-05-06T07:08:09.010Z".into(),
            styles: ".a{display:none}".into(),
            targets: "<a class=\"target\" id=\"x\"></a>".into(),
            checkboxes: "<a>box</a>".into(),
            files: "<a href=\"/\">index.html</a>".into(),
        }
    }

    #[test]
    fn replaces_each_token() {
        let out = render(
            "{DATE}|{ISO}|{STYLES}|{TARGETS}|{CHECKBOXES}|{FILES}",
            &values(),
        );
        assert_eq!(
            out,
            concat!(
                "2024-05-06|2024-05-06T07:08:09.010Z|",
                "<style>.a{display:none}</style>|",
                "<a class=\"target\" id=\"x\"></a>|<a>box</a>|",
                "<a href=\"/\">index.html</a>",
            )
        );
    }

    #[test]
    fn date_and_iso_replaced_everywhere() {
        let out = render("{DATE} {DATE} {ISO} {ISO}", &values());
        assert_eq!(
            out,
            "2024-05-06 2024-05-06 2024-05-06T07:08:09.010Z 2024-05-06T07:08:09.010Z"
        );
    }

    #[test]
    fn other_tokens_replaced_once() {
        let out = render("{FILES}{FILES}", &values());
        assert_eq!(out, "<a href=\"/\">index.html</a>{FILES}");
    }

    #[test]
    fn inserted_text_is_not_rescanned() {
        let mut v = values();
        v.files = "{DATE}".into();
        assert_eq!(render("{FILES}", &v), "{DATE}");
    }

    #[test]
    fn unrelated_braces_untouched() {
        let out = render("body { color: red } {UNKNOWN} {", &values());
        assert_eq!(out, "body { color: red } {UNKNOWN} {");
    }

    #[test]
    fn stamped_formats_date_and_iso() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let v = TemplateValues::stamped(now);
        assert_eq!(v.date, "2024-01-02");
        assert_eq!(v.iso, "2024-01-02T03:04:05.000Z");
    }
}
