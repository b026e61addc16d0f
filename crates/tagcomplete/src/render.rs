//! The boundary between the autocomplete core and its presentation layer.
//!
//! The core never touches presentation nodes. A [`RenderAdapter`] captures
//! raw user events and forwards them as [`AdapterEvent`]s; the controller
//! answers with [`RenderUpdate`]s describing what to show.
//!
//! ```text
//! user input ──► RenderAdapter ──AdapterEvent──► AutocompleteController
//!                      ▲                                  │
//!                      └───────────RenderUpdate───────────┘
//! ```
//!
//! # Style Registration
//!
//! Styles that cannot live inline on nodes are registered once per process.
//! A [`StyleRegistration`] is the marker for that: the first adapter to call
//! [`RenderAdapter::ensure_styles_registered`] performs the registration and
//! every later instance sees the marker and skips it.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use tagcomplete_core::logging::targets;

// ============================================================================
// Messages
// ============================================================================

/// Events delivered from the presentation layer into the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterEvent {
    /// The input region changed; carries its raw (possibly marked-up) text.
    RawInputChanged(String),
    /// The user selected a rendered suggestion.
    SuggestionClicked(String),
    /// The user dismissed the tag chip at the given position.
    TagCloseClicked(usize),
}

/// State updates emitted by the core for the presentation layer to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderUpdate {
    /// Show or hide the suggestions panel with the given candidates.
    SuggestionPanel {
        /// Whether the panel is shown.
        visible: bool,
        /// Candidates to list, in authority order.
        candidates: Vec<String>,
    },
    /// The full, ordered list of tag chips.
    TagList(Vec<String>),
    /// Return keyboard focus to the input region.
    FocusRequested,
    /// Clear the input region.
    InputClearRequested,
}

// ============================================================================
// Style Registration
// ============================================================================

/// A once-only marker for style registration.
///
/// The process-wide instance is [`global_style_registration`]. Separate
/// instances are useful for hosts that manage several independent documents.
#[derive(Debug, Default)]
pub struct StyleRegistration {
    registered: AtomicBool,
}

impl StyleRegistration {
    /// Create an unregistered marker.
    pub const fn new() -> Self {
        Self {
            registered: AtomicBool::new(false),
        }
    }

    /// Returns true once styles have been registered.
    pub fn is_registered(&self) -> bool {
        self.registered.load(Ordering::SeqCst)
    }

    /// Run `register` if this marker has not been claimed yet.
    ///
    /// Returns `true` if `register` ran.
    pub fn ensure(&self, register: impl FnOnce()) -> bool {
        if self
            .registered
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!(target: targets::RENDER, "styles already registered, skipping");
            return false;
        }

        tracing::debug!(target: targets::RENDER, "registering styles");
        register();
        true
    }
}

/// The process-wide style registration marker.
pub fn global_style_registration() -> &'static StyleRegistration {
    static GLOBAL: OnceLock<StyleRegistration> = OnceLock::new();
    GLOBAL.get_or_init(StyleRegistration::new)
}

// ============================================================================
// Render Adapter
// ============================================================================

/// The presentation layer as seen by the core.
pub trait RenderAdapter {
    /// Install the styles this adapter needs (e.g. pseudo-class rules).
    ///
    /// Called at most once per [`StyleRegistration`].
    fn register_styles(&mut self);

    /// Register styles unless `registration` says it already happened.
    ///
    /// Returns `true` if this call performed the registration.
    fn ensure_styles_registered(&mut self, registration: &StyleRegistration) -> bool {
        registration.ensure(|| self.register_styles())
    }

    /// Apply one state update.
    fn render(&mut self, update: RenderUpdate);
}

impl<A: RenderAdapter + ?Sized> RenderAdapter for Box<A> {
    fn register_styles(&mut self) {
        (**self).register_styles();
    }

    fn ensure_styles_registered(&mut self, registration: &StyleRegistration) -> bool {
        (**self).ensure_styles_registered(registration)
    }

    fn render(&mut self, update: RenderUpdate) {
        (**self).render(update);
    }
}

// ============================================================================
// Headless Adapter
// ============================================================================

/// A render adapter with no rendering surface.
///
/// Keeps the latest suggestion panel and tag list, counts focus and
/// clear requests, and records every update in order.
#[derive(Debug, Clone, Default)]
pub struct HeadlessAdapter {
    panel_visible: bool,
    candidates: Vec<String>,
    tags: Vec<String>,
    focus_requests: usize,
    clear_requests: usize,
    style_registrations: usize,
    log: Vec<RenderUpdate>,
}

impl HeadlessAdapter {
    /// Create an adapter with an empty, hidden state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the suggestions panel is currently shown.
    pub fn is_panel_visible(&self) -> bool {
        self.panel_visible
    }

    /// The candidates currently listed.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// The tag chips currently shown.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// How many times focus was requested.
    pub fn focus_requests(&self) -> usize {
        self.focus_requests
    }

    /// How many times the input was cleared.
    pub fn clear_requests(&self) -> usize {
        self.clear_requests
    }

    /// How many times this adapter registered styles.
    pub fn style_registrations(&self) -> usize {
        self.style_registrations
    }

    /// All updates received so far, oldest first.
    pub fn updates(&self) -> &[RenderUpdate] {
        &self.log
    }

    /// Take the recorded updates, leaving the log empty.
    pub fn take_updates(&mut self) -> Vec<RenderUpdate> {
        std::mem::take(&mut self.log)
    }
}

impl RenderAdapter for HeadlessAdapter {
    fn register_styles(&mut self) {
        self.style_registrations += 1;
    }

    fn render(&mut self, update: RenderUpdate) {
        tracing::trace!(target: targets::RENDER, ?update, "render update");
        match &update {
            RenderUpdate::SuggestionPanel {
                visible,
                candidates,
            } => {
                self.panel_visible = *visible;
                self.candidates.clone_from(candidates);
            }
            RenderUpdate::TagList(tags) => self.tags.clone_from(tags),
            RenderUpdate::FocusRequested => self.focus_requests += 1,
            RenderUpdate::InputClearRequested => self.clear_requests += 1,
        }
        self.log.push(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_runs_once() {
        let registration = StyleRegistration::new();
        let mut first = HeadlessAdapter::new();
        let mut second = HeadlessAdapter::new();

        assert!(!registration.is_registered());
        assert!(first.ensure_styles_registered(&registration));
        assert!(!second.ensure_styles_registered(&registration));
        assert!(!first.ensure_styles_registered(&registration));

        assert!(registration.is_registered());
        assert_eq!(first.style_registrations(), 1);
        assert_eq!(second.style_registrations(), 0);
    }

    #[test]
    fn test_global_registration_is_shared() {
        assert!(std::ptr::eq(
            global_style_registration(),
            global_style_registration()
        ));
    }

    #[test]
    fn test_headless_tracks_latest_state() {
        let mut adapter = HeadlessAdapter::new();
        adapter.render(RenderUpdate::SuggestionPanel {
            visible: true,
            candidates: vec!["apple".to_string()],
        });
        adapter.render(RenderUpdate::TagList(vec!["x".to_string()]));
        adapter.render(RenderUpdate::InputClearRequested);
        adapter.render(RenderUpdate::FocusRequested);
        adapter.render(RenderUpdate::SuggestionPanel {
            visible: false,
            candidates: Vec::new(),
        });

        assert!(!adapter.is_panel_visible());
        assert!(adapter.candidates().is_empty());
        assert_eq!(adapter.tags(), ["x"]);
        assert_eq!(adapter.focus_requests(), 1);
        assert_eq!(adapter.clear_requests(), 1);
        assert_eq!(adapter.updates().len(), 5);

        let taken = adapter.take_updates();
        assert_eq!(taken.len(), 5);
        assert!(adapter.updates().is_empty());
    }

    #[test]
    fn test_boxed_adapter_forwards() {
        let registration = StyleRegistration::new();
        let mut boxed: Box<dyn RenderAdapter> = Box::new(HeadlessAdapter::new());
        assert!(boxed.ensure_styles_registered(&registration));
        boxed.render(RenderUpdate::FocusRequested);
        assert!(registration.is_registered());
    }
}
