//! The autocomplete controller.
//!
//! [`AutocompleteController`] owns one instance's configuration, tag set and
//! suggestion view, and drives a [`RenderAdapter`]. It is a two-state
//! machine:
//!
//! - [`SuggestionState::Idle`]: no usable query, suggestions hidden.
//! - [`SuggestionState::Suggesting`]: the query is non-empty and at least
//!   `inputThreshold` characters long; the panel is shown, possibly with no
//!   candidates.
//!
//! # Example
//!
//! ```
//! use tagcomplete::prelude::*;
//!
//! let mut controller = AutocompleteController::with_registration(
//!     HeadlessAdapter::new(),
//!     &StyleRegistration::new(),
//! );
//! controller.set_search_suggestion_authority(["Apple", "apply", "Banana"]);
//!
//! controller.on_input("<b>ap</b>");
//! assert_eq!(controller.state(), SuggestionState::Suggesting);
//! assert_eq!(controller.view().candidates, ["Apple", "apply"]);
//!
//! controller.commit_tag("Apple");
//! assert_eq!(controller.tags().to_list(), ["Apple"]);
//! assert_eq!(controller.state(), SuggestionState::Idle);
//! ```

use std::sync::Arc;

use tagcomplete_core::Signal;
use tagcomplete_core::logging::{PerfSpan, span_names, targets};

use crate::config::{ConfigStore, Configuration, PartialConfiguration};
use crate::error::TagError;
use crate::markup::strip_markup;
use crate::matcher::SuggestionMatcher;
use crate::render::{
    AdapterEvent, RenderAdapter, RenderUpdate, StyleRegistration, global_style_registration,
};
use crate::tag_set::TagSet;

// ============================================================================
// Suggestion View
// ============================================================================

/// The two states of the suggestion panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionState {
    /// Suggestions hidden.
    #[default]
    Idle,
    /// Suggestions shown for the current query.
    Suggesting,
}

/// What the suggestion panel currently shows.
///
/// `visible` is false whenever `query` is empty, and `candidates` is always
/// the matcher's result for `query` (empty while hidden).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionView {
    /// Last raw input, markup-stripped.
    pub query: String,
    /// Whether the panel is shown.
    pub visible: bool,
    /// Current candidates, in authority order.
    pub candidates: Vec<String>,
}

impl SuggestionView {
    /// The state-machine state this view corresponds to.
    pub fn state(&self) -> SuggestionState {
        if self.visible {
            SuggestionState::Suggesting
        } else {
            SuggestionState::Idle
        }
    }

    fn show(&mut self, query: String, candidates: Vec<String>) {
        self.query = query;
        self.visible = true;
        self.candidates = candidates;
    }

    fn hide(&mut self, query: String) {
        self.query = query;
        self.visible = false;
        self.candidates.clear();
    }
}

/// Returns true if `text` is long enough to compute suggestions for.
///
/// Length is counted in characters. Thresholds of zero or below never gate.
fn meets_threshold(text: &str, threshold: i32) -> bool {
    match usize::try_from(threshold) {
        Ok(min_chars) => text.chars().count() >= min_chars,
        Err(_) => true,
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Orchestrates input handling, suggestion matching and tag commits for one
/// autocomplete instance.
///
/// # Signals
///
/// - `activated(String)`: Emitted when a rendered suggestion is clicked,
///   before it is committed as a tag.
pub struct AutocompleteController<A: RenderAdapter> {
    config: ConfigStore,
    matcher: SuggestionMatcher,
    tags: TagSet,
    view: SuggestionView,
    adapter: A,

    /// Signal emitted when a suggestion is selected.
    pub activated: Signal<String>,
}

impl<A: RenderAdapter> AutocompleteController<A> {
    /// Create a controller using the process-wide style registration.
    pub fn new(adapter: A) -> Self {
        Self::with_registration(adapter, global_style_registration())
    }

    /// Create a controller using an explicit style registration.
    ///
    /// Registers the adapter's styles if `registration` has not been
    /// claimed yet, then requests input focus.
    pub fn with_registration(mut adapter: A, registration: &StyleRegistration) -> Self {
        adapter.ensure_styles_registered(registration);
        let mut controller = Self {
            config: ConfigStore::new(),
            matcher: SuggestionMatcher::new(),
            tags: TagSet::new(),
            view: SuggestionView::default(),
            adapter,
            activated: Signal::new(),
        };
        tracing::debug!(target: targets::CONTROLLER, "autocomplete controller created");
        controller.focus();
        controller
    }

    /// Merge `partial` into the configuration, builder style.
    pub fn with_config(mut self, partial: PartialConfiguration) -> Self {
        self.set_config(partial);
        self
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The current effective configuration.
    pub fn config(&self) -> &Configuration {
        self.config.get()
    }

    /// Deep-merge `partial` into the configuration.
    ///
    /// If the panel is showing and the authority or settings changed, the
    /// current query is matched again so candidates always come from the
    /// configured authority.
    pub fn set_config(&mut self, partial: PartialConfiguration) {
        let affects_view =
            partial.search_suggestion_authority.is_some() || partial.settings.is_some();
        self.config.set(partial);

        if affects_view && self.view.visible {
            tracing::debug!(target: targets::CONTROLLER, "configuration changed, refreshing suggestions");
            let query = std::mem::take(&mut self.view.query);
            self.update_suggestions(query);
            self.render_suggestions();
        }
    }

    /// Set the suggestion authority.
    pub fn set_search_suggestion_authority<I, S>(&mut self, authority: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_config(PartialConfiguration::new().with_authority(authority));
    }

    /// Set the suggestion authority to a list shared with the caller.
    pub fn set_shared_suggestion_authority(&mut self, authority: Arc<[String]>) {
        self.set_config(PartialConfiguration::new().with_shared_authority(authority));
    }

    /// Set the minimum input length before suggestions are shown.
    pub fn set_input_threshold(&mut self, threshold: i32) {
        self.set_config(PartialConfiguration::new().with_input_threshold(threshold));
    }

    /// Set the callback fired on every input change.
    pub fn set_on_input_changed_listener<F>(&mut self, listener: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.set_config(PartialConfiguration::new().with_on_input_changed(listener));
    }

    /// Set the callback fired whenever the tag set changes.
    pub fn set_on_tag_changed_listener<F>(&mut self, listener: F)
    where
        F: Fn(&[String]) + Send + Sync + 'static,
    {
        self.set_config(PartialConfiguration::new().with_on_tag_changed(listener));
    }

    // =========================================================================
    // State Access
    // =========================================================================

    /// The current state-machine state.
    pub fn state(&self) -> SuggestionState {
        self.view.state()
    }

    /// The current suggestion view.
    pub fn view(&self) -> &SuggestionView {
        &self.view
    }

    /// The committed tags.
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// The render adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// The render adapter, mutably.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Consume the controller, returning its adapter.
    pub fn into_adapter(self) -> A {
        self.adapter
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Dispatch an event from the presentation layer.
    ///
    /// Only [`AdapterEvent::TagCloseClicked`] can fail.
    pub fn handle_event(&mut self, event: AdapterEvent) -> Result<(), TagError> {
        match event {
            AdapterEvent::RawInputChanged(markup) => self.on_input(&markup),
            AdapterEvent::SuggestionClicked(candidate) => {
                self.activated.emit(candidate.clone());
                self.commit_tag(&candidate);
            }
            AdapterEvent::TagCloseClicked(index) => {
                self.remove_tag(index)?;
            }
        }
        Ok(())
    }

    /// Handle a change of the raw input text.
    ///
    /// Strips markup, notifies the input-changed listener unconditionally,
    /// then shows suggestions iff the stripped text is non-empty and meets
    /// the input threshold.
    pub fn on_input(&mut self, raw_markup: &str) {
        let _span = PerfSpan::new(span_names::INPUT);
        let plain_text = strip_markup(raw_markup).into_owned();

        if let Some(listener) = &self.config.get().event_listeners.on_input_changed_listener {
            listener.call(&plain_text);
        }

        self.update_suggestions(plain_text);
        self.render_suggestions();
    }

    /// Commit `text` as a new tag.
    ///
    /// Markup is stripped from `text`. Afterwards the input is cleared, the
    /// suggestions are hidden and focus returns to the input.
    pub fn commit_tag(&mut self, text: &str) {
        let _span = PerfSpan::new(span_names::TAGS);
        self.tags.add(strip_markup(text).into_owned());
        self.notify_tag_changed();
        self.render_tags();

        self.adapter.render(RenderUpdate::InputClearRequested);
        self.hide_suggestions();
        self.focus();
    }

    /// Remove the tag at `index`, returning its text.
    ///
    /// Suggestion visibility is unaffected. Focus returns to the input.
    pub fn remove_tag(&mut self, index: usize) -> Result<String, TagError> {
        let _span = PerfSpan::new(span_names::TAGS);
        let removed = self.tags.remove_at(index)?;
        self.notify_tag_changed();
        self.render_tags();
        self.focus();
        Ok(removed)
    }

    /// Hide the suggestions panel and forget the current query.
    pub fn hide_suggestions(&mut self) {
        self.view.hide(String::new());
        self.render_suggestions();
    }

    /// Ask the presentation layer to focus the input.
    pub fn focus(&mut self) {
        self.adapter.render(RenderUpdate::FocusRequested);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Gate `query` on emptiness and the threshold, then match it.
    fn update_suggestions(&mut self, query: String) {
        let config = self.config.get();
        if query.is_empty() || !meets_threshold(&query, config.input_threshold()) {
            tracing::trace!(
                target: targets::CONTROLLER,
                query_len = query.chars().count(),
                threshold = config.input_threshold(),
                "input below threshold, hiding suggestions"
            );
            self.view.hide(query);
        } else {
            let _span = PerfSpan::new(span_names::SUGGEST);
            let candidates = self.matcher.find(&query, config.authority());
            self.view.show(query, candidates);
        }
    }

    fn notify_tag_changed(&self) {
        if let Some(listener) = &self.config.get().event_listeners.on_tag_changed_listener {
            listener.call(self.tags.as_slice());
        }
    }

    fn render_suggestions(&mut self) {
        self.adapter.render(RenderUpdate::SuggestionPanel {
            visible: self.view.visible,
            candidates: self.view.candidates.clone(),
        });
    }

    fn render_tags(&mut self) {
        self.adapter.render(RenderUpdate::TagList(self.tags.to_list()));
    }
}

impl<A: RenderAdapter + std::fmt::Debug> std::fmt::Debug for AutocompleteController<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutocompleteController")
            .field("state", &self.state())
            .field("query", &self.view.query)
            .field("candidates_count", &self.view.candidates.len())
            .field("tags", &self.tags.as_slice())
            .field("adapter", &self.adapter)
            .finish()
    }
}
