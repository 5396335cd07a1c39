//! Script-free filter toggles built from `:target` selectors.
//!
//! The index page lets visitors hide whole categories of files (HTML, images,
//! everything else). There is no JavaScript: the current combination of
//! hidden categories lives in the URL fragment, and CSS reacts to whichever
//! anchor is the `:target`.
//!
//! ## States
//!
//! With N filters there are 2^N filter states. A state is named by joining
//! its active filter names with `_`, always in declaration order, so the
//! same set of hidden categories always maps to the same anchor:
//!
//! ```text
//! (none)                      ""  (no fragment)
//! hidehtml                    #hidehtml
//! hideimg                     #hideimg
//! hidehtml + hideimg          #hidehtml_hideimg
//! ...
//! hidehtml + hideimg + other  #hidehtml_hideimg_hideother
//! ```
//!
//! ## Generated pieces
//!
//! - **Targets**: one empty `<a class="target" id=STATE>` per non-empty
//!   state. The page template places them before `.preamble` and the file
//!   listing so sibling selectors can reach both.
//! - **Checkboxes**: for every (state, filter) pair, a link to the state
//!   reached by flipping that filter. All of them are in the markup; CSS
//!   shows only the N links belonging to the current state.
//! - **Styles**: the show rules for those links (one per pair, so this part
//!   grows as 2^N · N), plus one hide rule per filter that hides its
//!   category while any target whose id contains the filter name is active.
//!
//! The no-fragment view is special: its links are shown unconditionally and
//! hidden again as soon as any target is active.

use maud::{Markup, html};
use thiserror::Error;

/// Upper bound on filters; the state space doubles with each one.
pub const MAX_FILTERS: usize = 16;

#[derive(Error, Debug, PartialEq)]
pub enum ToggleError {
    #[error("{0} filters given, at most {MAX_FILTERS} supported")]
    TooManyFilters(usize),
    #[error("filter name '{0}' is empty or contains '_'")]
    InvalidName(String),
    #[error("filter name '{0}' occurs inside filter name '{1}'")]
    OverlappingNames(String, String),
}

/// A category filter the visitor can switch on to hide matching files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    /// Text of the checkbox link.
    pub label: &'static str,
    /// Anchor-id fragment; also the filter's identity.
    pub name: &'static str,
    /// Selector for the listing entries this filter hides.
    pub selector: &'static str,
}

/// The filters offered on the index page, in declaration order.
pub const FILTERS: &[Filter] = &[
    Filter {
        label: "HTML",
        name: "hidehtml",
        selector: ".html",
    },
    Filter {
        label: "images",
        name: "hideimg",
        selector: ".img",
    },
    Filter {
        label: "everything else",
        name: "hideother",
        selector: ".other",
    },
];

/// A set of active filters, as a bit set over the filter slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FilterState(u32);

impl FilterState {
    /// No filter active; the view with no fragment.
    pub const EMPTY: FilterState = FilterState(0);

    /// Every state over `count` filters, in doubling order: `[]`, `[a]`,
    /// `[b]`, `[a,b]`, `[c]`, `[a,c]`, ... Callers check `count` against
    /// [`MAX_FILTERS`] first.
    pub(crate) fn all(count: usize) -> impl Iterator<Item = FilterState> {
        debug_assert!(count <= MAX_FILTERS, "{count} filters exceed the limit");
        (0..1u32 << count).map(FilterState)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether the filter at `index` is active (its category hidden).
    pub fn is_active(self, index: usize) -> bool {
        self.0 & (1 << index) != 0
    }

    /// The state reached by flipping the filter at `index`.
    pub fn toggled(self, index: usize) -> FilterState {
        FilterState(self.0 ^ (1 << index))
    }

    /// Canonical anchor id: active names in declaration order, `_`-joined.
    pub fn id(self, filters: &[Filter]) -> String {
        filters
            .iter()
            .enumerate()
            .filter(|(i, _)| self.is_active(*i))
            .map(|(_, f)| f.name)
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Read an anchor id back. Names may appear in any order; unknown
    /// names give `None`.
    #[cfg(test)]
    fn parse(id: &str, filters: &[Filter]) -> Option<FilterState> {
        if id.is_empty() {
            return Some(FilterState::EMPTY);
        }
        id.split('_').try_fold(FilterState::EMPTY, |state, name| {
            let index = filters.iter().position(|f| f.name == name)?;
            Some(FilterState(state.0 | (1 << index)))
        })
    }
}

/// Generated markup and CSS for the filter toggles.
#[derive(Debug)]
pub struct ToggleControls {
    /// Empty anchors, one per non-empty state.
    pub targets: Markup,
    /// Checkbox links, grouped by filter.
    pub checkboxes: Markup,
    /// Stylesheet body (without the `<style>` wrapper).
    pub styles: String,
}

/// Build targets, checkbox links, and styles for `filters`.
pub fn generate_toggles(filters: &[Filter]) -> Result<ToggleControls, ToggleError> {
    validate(filters)?;

    let mut show = SelectorList::default();
    let mut hide = SelectorList::default();
    for filter in filters {
        hide.push(format!(":target[id*=\"{}\"]~* {}", filter.name, filter.selector));
    }

    let mut links: Vec<Vec<Markup>> = vec![Vec::new(); filters.len()];
    for state in FilterState::all(filters.len()) {
        let id = state.id(filters);
        for (index, filter) in filters.iter().enumerate() {
            let link = CheckboxLink::new(filters, state, index);
            if state.is_empty() {
                show.push(format!(".{}", link.class_name));
                hide.push(format!(":target~.preamble .{}", link.class_name));
            } else {
                show.push(format!(
                    ":target[id=\"{id}\"]~.preamble .{}",
                    link.class_name
                ));
            }
            links[index].push(link.render(filter));
        }
    }

    let targets = html! {
        @for state in FilterState::all(filters.len()).filter(|s| !s.is_empty()) {
            a.target id=(state.id(filters)) {}
        }
    };
    let checkboxes = html! {
        @for group in &links {
            @for link in group {
                (link)
            }
        }
    };
    let styles = format!(
        "{}{{display:inline-flex}}{}{{display:none}}",
        show.join(),
        hide.join()
    );

    Ok(ToggleControls {
        targets,
        checkboxes,
        styles,
    })
}

fn validate(filters: &[Filter]) -> Result<(), ToggleError> {
    if filters.len() > MAX_FILTERS {
        return Err(ToggleError::TooManyFilters(filters.len()));
    }
    for filter in filters {
        if filter.name.is_empty() || filter.name.contains('_') {
            return Err(ToggleError::InvalidName(filter.name.to_string()));
        }
    }
    // Hide rules match ids by substring.
    for a in filters {
        for b in filters {
            if !std::ptr::eq(a, b) && b.name.contains(a.name) {
                return Err(ToggleError::OverlappingNames(
                    a.name.to_string(),
                    b.name.to_string(),
                ));
            }
        }
    }
    Ok(())
}

/// The link for one filter as seen from one state.
struct CheckboxLink {
    /// Id of the state the link leads to.
    target: String,
    /// Class unique to this (state, filter) pair, used by the show rules.
    class_name: String,
    is_active_in_state: bool,
}

impl CheckboxLink {
    fn new(filters: &[Filter], state: FilterState, index: usize) -> Self {
        let is_active_in_state = state.is_active(index);
        let target = state.toggled(index).id(filters);
        let suffix = if is_active_in_state { "" } else { "-checked" };
        let class_name = format!("checkbox-{}-{}{}", filters[index].name, target, suffix);
        Self {
            target,
            class_name,
            is_active_in_state,
        }
    }

    /// The box reads "checked" while its category is shown.
    fn render(&self, filter: &Filter) -> Markup {
        let shown = !self.is_active_in_state;
        let mut class = format!("checkbox checkbox-type-{} {}", filter.name, self.class_name);
        if shown {
            class.push_str(" checked");
        }
        html! {
            a href={ "#" (self.target) } class=(class) role="checkbox"
                aria-checked=(if shown { "true" } else { "false" }) {
                (filter.label)
            }
        }
    }
}

/// Comma-joined selector list that keeps first-insertion order and drops
/// repeats.
#[derive(Default)]
struct SelectorList(Vec<String>);

impl SelectorList {
    fn push(&mut self, selector: String) {
        if !self.0.contains(&selector) {
            self.0.push(selector);
        }
    }

    fn join(&self) -> String {
        self.0.join(",")
    }
}
