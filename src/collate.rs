//! Locale-aware string ordering for listing entries.
//!
//! Byte order puts every uppercase name before every lowercase one, sorts
//! `_` after `Z`, and puts `é` after `z`, which reads badly in a file
//! listing. Names are compared the way a default-locale collator does
//! instead. Both names are NFD-decomposed first, so an accented letter is its
//! base letter followed by combining marks:
//!
//! 1. **Primary**: base characters compared by class (whitespace and
//!    punctuation, then digits, then letters), letters case-insensitively.
//!    Accents are ignored here.
//! 2. **Secondary**: on a primary tie, the first difference in accents
//!    decides, with the unaccented letter first.
//! 3. **Tertiary**: then the first case difference, lowercase before
//!    uppercase.
//! 4. Finally, raw code point order, so the comparator is a total order and
//!    distinct strings never compare equal.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// ASCII whitespace and punctuation in root-collation order.
const PUNCTUATION_ORDER: &str = "\t\n\u{b}\u{c}\r _-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Punctuation,
    Digit,
    Letter,
}

/// A base character and the combining marks that follow it.
#[derive(Debug)]
struct Grapheme {
    base: char,
    marks: Vec<char>,
}

/// NFD-decompose `s` and group each combining mark with its base. A mark
/// with nothing before it stands alone as a base.
fn decompose(s: &str) -> Vec<Grapheme> {
    let mut out: Vec<Grapheme> = Vec::new();
    for c in s.nfd() {
        match out.last_mut() {
            Some(last) if is_combining_mark(c) => last.marks.push(c),
            _ => out.push(Grapheme {
                base: c,
                marks: Vec::new(),
            }),
        }
    }
    out
}

/// Primary weight of a single base character.
fn primary_key(c: char) -> (CharClass, u32) {
    if c.is_alphabetic() {
        let folded = c.to_lowercase().next().unwrap_or(c);
        (CharClass::Letter, folded as u32)
    } else if c.is_numeric() {
        let weight = c.to_digit(10).unwrap_or(c as u32);
        (CharClass::Digit, weight)
    } else {
        let rank = PUNCTUATION_ORDER
            .chars()
            .position(|p| p == c)
            .map(|i| i as u32)
            .unwrap_or(PUNCTUATION_ORDER.len() as u32 + c as u32);
        (CharClass::Punctuation, rank)
    }
}

/// Compare two names for display.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let left = decompose(a);
    let right = decompose(b);

    let primary = left
        .iter()
        .map(|g| primary_key(g.base))
        .cmp(right.iter().map(|g| primary_key(g.base)));
    if primary != Ordering::Equal {
        return primary;
    }

    // Same number of bases with the same folded letters from here on.
    let secondary = left
        .iter()
        .zip(&right)
        .find(|(x, y)| x.marks != y.marks)
        .map(|(x, y)| x.marks.cmp(&y.marks))
        .unwrap_or(Ordering::Equal);
    if secondary != Ordering::Equal {
        return secondary;
    }

    let tertiary = left
        .iter()
        .zip(&right)
        .find(|(x, y)| x.base != y.base)
        .map(|(x, y)| x.base.is_uppercase().cmp(&y.base.is_uppercase()))
        .unwrap_or(Ordering::Equal);
    if tertiary != Ordering::Equal {
        return tertiary;
    }

    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| locale_cmp(a, b));
        v
    }

    #[test]
    fn case_insensitive_primary_order() {
        assert_eq!(
            sorted(&["banana", "Apple", "cherry"]),
            vec!["Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("Readme", "readme"), Ordering::Greater);
        assert_eq!(sorted(&["B", "b", "a"]), vec!["a", "b", "B"]);
    }

    #[test]
    fn punctuation_before_digits_before_letters() {
        assert_eq!(
            sorted(&["a.html", "1.html", "_drafts", "-x"]),
            vec!["_drafts", "-x", "1.html", "a.html"]
        );
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(locale_cmp("index", "index.html"), Ordering::Less);
        assert_eq!(locale_cmp("ab", "a"), Ordering::Greater);
    }

    #[test]
    fn dot_sorts_before_letters_after_dash() {
        assert_eq!(
            sorted(&["b.html", "b-side.html", "ba.html"]),
            vec!["b-side.html", "b.html", "ba.html"]
        );
    }

    #[test]
    fn accented_letters_fold_to_their_lowercase() {
        assert_eq!(locale_cmp("Éclair", "éclair"), Ordering::Greater);
    }

    #[test]
    fn accented_letters_sort_with_their_base_letter() {
        assert_eq!(locale_cmp("éb", "ez"), Ordering::Less);
        assert_eq!(
            sorted(&["zebra", "éclair", "eagle", "fig"]),
            vec!["eagle", "éclair", "fig", "zebra"]
        );
    }

    #[test]
    fn unaccented_before_accented_before_longer() {
        assert_eq!(
            sorted(&["resumes", "résumé", "resume"]),
            vec!["resume", "résumé", "resumes"]
        );
    }

    #[test]
    fn accent_outranks_case() {
        // Secondary differences decide before tertiary ones.
        assert_eq!(locale_cmp("Cote", "côte"), Ordering::Less);
    }

    #[test]
    fn composed_and_decomposed_forms_are_adjacent() {
        let composed = "caf\u{e9}";
        let decomposed = "cafe\u{301}";
        assert_ne!(locale_cmp(composed, decomposed), Ordering::Equal);
        assert_eq!(
            sorted(&["cafz", composed, "cafe", decomposed]),
            vec!["cafe", decomposed, composed, "cafz"]
        );
    }

    #[test]
    fn equal_only_for_identical_strings() {
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
        assert_ne!(locale_cmp("a%20b", "a b"), Ordering::Equal);
    }

    #[test]
    fn empty_string_sorts_first() {
        assert_eq!(sorted(&["x", ""]), vec!["", "x"]);
    }
}
