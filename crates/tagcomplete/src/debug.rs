//! Debug visualization of an autocomplete instance's state.
//!
//! [`StateDebug`] renders the suggestion state, query, candidates and tags
//! of a controller as a small tree:
//!
//! ```text
//! Autocomplete [Suggesting]
//! ├── query: "ap"
//! ├── suggestions (visible, 2)
//! │   ├── Apple
//! │   └── apply
//! └── tags (1)
//!     └── rust
//! ```

use std::fmt::{self, Write as FmtWrite};

use crate::controller::{AutocompleteController, SuggestionView};
use crate::render::RenderAdapter;
use crate::tag_set::TagSet;

/// Style options for state tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact single-line representation.
    Compact,
}

/// Configuration for state debug output.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to list individual candidates.
    pub show_candidates: bool,
    /// Whether to list individual tags.
    pub show_tags: bool,
    /// Maximum number of list entries to print per section (None for unlimited).
    pub max_items: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_candidates: true,
            show_tags: true,
            max_items: Some(10),
        }
    }
}

impl FormatOptions {
    /// Create options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            max_items: None,
            ..Default::default()
        }
    }

    /// Create options for minimal output: counts only.
    pub fn minimal() -> Self {
        Self {
            show_candidates: false,
            show_tags: false,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing a controller's state.
#[derive(Debug, Clone)]
pub struct StateDebug<'a> {
    view: &'a SuggestionView,
    tags: &'a TagSet,
    options: FormatOptions,
}

impl<'a> StateDebug<'a> {
    /// Create a visualizer for a controller with default options.
    pub fn new<A: RenderAdapter>(controller: &'a AutocompleteController<A>) -> Self {
        Self::from_parts(controller.view(), controller.tags())
    }

    /// Create a visualizer from a view and tag set.
    pub fn from_parts(view: &'a SuggestionView, tags: &'a TagSet) -> Self {
        Self {
            view,
            tags,
            options: FormatOptions::default(),
        }
    }

    /// Replace the format options.
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Format the state into a string.
    pub fn format(&self) -> String {
        if self.options.style == TreeStyle::Compact {
            return self.format_compact();
        }

        let mut output = String::new();
        let (branch, tee, corner) = self.glyphs();

        writeln!(output, "Autocomplete [{:?}]", self.view.state()).expect("write to String");
        writeln!(output, "{tee} query: {:?}", self.view.query).expect("write to String");

        let visibility = if self.view.visible { "visible" } else { "hidden" };
        writeln!(
            output,
            "{tee} suggestions ({visibility}, {})",
            self.view.candidates.len()
        )
        .expect("write to String");
        if self.options.show_candidates {
            let prefix = format!("{branch}   ");
            self.format_items(&mut output, &prefix, self.view.candidates.iter().map(String::as_str));
        }

        writeln!(output, "{corner} tags ({})", self.tags.len()).expect("write to String");
        if self.options.show_tags {
            self.format_items(&mut output, "    ", self.tags.iter());
        }

        output
    }

    fn format_compact(&self) -> String {
        let mut output = format!(
            "Autocomplete [{:?}] query={:?} suggestions={} tags={}",
            self.view.state(),
            self.view.query,
            self.view.candidates.len(),
            self.tags.len()
        );
        if self.options.show_tags && !self.tags.is_empty() {
            let shown: Vec<&str> = self.limited(self.tags.iter()).collect();
            write!(output, " [{}]", shown.join(", ")).expect("write to String");
        }
        output.push('\n');
        output
    }

    fn format_items<'i>(
        &self,
        output: &mut String,
        prefix: &str,
        items: impl ExactSizeIterator<Item = &'i str>,
    ) {
        let (_, tee, corner) = self.glyphs();
        let total = items.len();
        let shown: Vec<&str> = self.limited(items).collect();
        let truncated = total - shown.len();

        for (i, item) in shown.iter().enumerate() {
            let is_last = i + 1 == shown.len() && truncated == 0;
            let connector = if is_last { corner } else { tee };
            writeln!(output, "{prefix}{connector} {item}").expect("write to String");
        }
        if truncated > 0 {
            writeln!(output, "{prefix}{corner} ... {truncated} more").expect("write to String");
        }
    }

    fn limited<'i>(&self, items: impl Iterator<Item = &'i str>) -> impl Iterator<Item = &'i str> {
        items.take(self.options.max_items.unwrap_or(usize::MAX))
    }

    fn glyphs(&self) -> (&'static str, &'static str, &'static str) {
        match self.options.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode | TreeStyle::Compact => (
                "\u{2502}",
                "\u{251c}\u{2500}\u{2500}",
                "\u{2514}\u{2500}\u{2500}",
            ),
        }
    }
}

impl fmt::Display for StateDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
