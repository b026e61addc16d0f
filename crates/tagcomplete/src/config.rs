//! Configuration for the autocomplete component.
//!
//! Configuration is held by a [`ConfigStore`] and only ever changes through
//! [`ConfigStore::set`], which deep-merges a [`PartialConfiguration`] into the
//! current [`Configuration`]:
//!
//! - a field present in the partial overwrites the current value;
//! - the nested groups (`settings`, `eventListeners`) are merged field by
//!   field rather than replaced;
//! - a field absent from the partial keeps its current value;
//! - unknown keys are carried verbatim in `extra` maps.
//!
//! Merging is total. Only parsing a configuration document can fail.
//!
//! # Example
//!
//! ```
//! use tagcomplete::config::{ConfigStore, PartialConfiguration};
//!
//! let mut store = ConfigStore::new();
//! store.set(PartialConfiguration::new().with_authority(["apple", "apricot"]));
//! store.set(PartialConfiguration::new().with_input_threshold(1));
//!
//! assert_eq!(store.get().authority(), ["apple", "apricot"]);
//! assert_eq!(store.get().input_threshold(), 1);
//! ```
//!
//! # Documents
//!
//! Partial configurations can be read from JSON or TOML. Keys use the
//! camelCase spelling of the widget options:
//!
//! ```
//! use tagcomplete::config::PartialConfiguration;
//!
//! let partial = PartialConfiguration::from_json_str(
//!     r#"{ "searchSuggestionAuthority": ["rust", "ruby"], "settings": { "inputThreshold": 3 } }"#,
//! )?;
//! assert_eq!(partial.settings.and_then(|s| s.input_threshold), Some(3));
//! # Ok::<(), tagcomplete::ConfigError>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tagcomplete_core::logging::targets;

use crate::error::ConfigError;

/// Minimum input length before suggestions are computed, unless configured.
pub const DEFAULT_INPUT_THRESHOLD: i32 = 2;

// ============================================================================
// Listeners
// ============================================================================

/// Callback fired with the markup-stripped text on every input change.
///
/// Two listeners compare equal only if they wrap the same closure.
#[derive(Clone)]
pub struct InputChangedListener(Arc<dyn Fn(&str) + Send + Sync>);

impl InputChangedListener {
    /// Wrap a closure as an input-changed listener.
    pub fn new<F>(listener: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self(Arc::new(listener))
    }

    /// Invoke the listener.
    pub fn call(&self, text: &str) {
        (self.0)(text)
    }
}

impl PartialEq for InputChangedListener {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for InputChangedListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InputChangedListener({:p})", Arc::as_ptr(&self.0))
    }
}

/// Callback fired with the full tag list after every tag mutation.
///
/// Two listeners compare equal only if they wrap the same closure.
#[derive(Clone)]
pub struct TagChangedListener(Arc<dyn Fn(&[String]) + Send + Sync>);

impl TagChangedListener {
    /// Wrap a closure as a tag-changed listener.
    pub fn new<F>(listener: F) -> Self
    where
        F: Fn(&[String]) + Send + Sync + 'static,
    {
        Self(Arc::new(listener))
    }

    /// Invoke the listener.
    pub fn call(&self, tags: &[String]) {
        (self.0)(tags)
    }
}

impl PartialEq for TagChangedListener {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TagChangedListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TagChangedListener({:p})", Arc::as_ptr(&self.0))
    }
}

// ============================================================================
// Effective Configuration
// ============================================================================

/// The effective configuration of one autocomplete instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Candidate pool for suggestions. Shared with the caller, never mutated.
    pub search_suggestion_authority: Arc<[String]>,
    /// Behavioural settings.
    pub settings: Settings,
    /// Host callbacks.
    pub event_listeners: EventListeners,
    /// Unrecognized top-level keys, carried through merges unchanged.
    pub extra: BTreeMap<String, Value>,
}

/// The `settings` group.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Minimum input length (in characters) before suggestions are shown.
    ///
    /// Not validated: zero or negative values simply never gate.
    pub input_threshold: i32,
    /// Unrecognized settings keys.
    pub extra: BTreeMap<String, Value>,
}

/// The `eventListeners` group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventListeners {
    /// Fired on every raw input change, after markup stripping.
    pub on_input_changed_listener: Option<InputChangedListener>,
    /// Fired after every tag add or remove.
    pub on_tag_changed_listener: Option<TagChangedListener>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            search_suggestion_authority: Arc::from(Vec::<String>::new()),
            settings: Settings::default(),
            event_listeners: EventListeners::default(),
            extra: BTreeMap::new(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_threshold: DEFAULT_INPUT_THRESHOLD,
            extra: BTreeMap::new(),
        }
    }
}

impl Configuration {
    /// The suggestion authority as a slice.
    pub fn authority(&self) -> &[String] {
        &self.search_suggestion_authority
    }

    /// The configured input threshold.
    pub fn input_threshold(&self) -> i32 {
        self.settings.input_threshold
    }

    /// Deep-merge `partial` into this configuration.
    pub fn merge(&mut self, partial: PartialConfiguration) {
        if let Some(authority) = partial.search_suggestion_authority {
            self.search_suggestion_authority = authority;
        }
        if let Some(settings) = partial.settings {
            self.settings.merge(settings);
        }
        if let Some(listeners) = partial.event_listeners {
            self.event_listeners.merge(listeners);
        }
        self.extra.extend(partial.extra);
    }
}

impl Settings {
    fn merge(&mut self, partial: PartialSettings) {
        if let Some(threshold) = partial.input_threshold {
            self.input_threshold = threshold;
        }
        self.extra.extend(partial.extra);
    }
}

impl EventListeners {
    fn merge(&mut self, partial: PartialEventListeners) {
        if let Some(listener) = partial.on_input_changed_listener {
            self.on_input_changed_listener = listener;
        }
        if let Some(listener) = partial.on_tag_changed_listener {
            self.on_tag_changed_listener = listener;
        }
    }
}

// ============================================================================
// Partial Configuration
// ============================================================================

/// A partial configuration to be merged into the current one.
///
/// Every field is optional; `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialConfiguration {
    /// Replacement suggestion authority.
    pub search_suggestion_authority: Option<Arc<[String]>>,
    /// Settings to merge.
    pub settings: Option<PartialSettings>,
    /// Listeners to merge. Listeners cannot appear in documents.
    #[serde(skip)]
    pub event_listeners: Option<PartialEventListeners>,
    /// Unrecognized keys.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A partial `settings` group.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSettings {
    /// Replacement input threshold.
    pub input_threshold: Option<i32>,
    /// Unrecognized settings keys.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A partial `eventListeners` group.
///
/// The outer `Option` selects whether the listener is touched at all; an
/// inner `None` removes a previously configured listener.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialEventListeners {
    /// Replacement input-changed listener.
    pub on_input_changed_listener: Option<Option<InputChangedListener>>,
    /// Replacement tag-changed listener.
    pub on_tag_changed_listener: Option<Option<TagChangedListener>>,
}

impl PartialConfiguration {
    /// Create an empty partial configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a partial configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a partial configuration from a TOML document.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(document)?)
    }

    /// Returns true if merging this partial would change nothing.
    pub fn is_empty(&self) -> bool {
        self.search_suggestion_authority.is_none()
            && self.settings.is_none()
            && self.event_listeners.is_none()
            && self.extra.is_empty()
    }

    /// Set the suggestion authority from owned or borrowed strings.
    pub fn with_authority<I, S>(self, authority: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let authority: Vec<String> = authority.into_iter().map(Into::into).collect();
        self.with_shared_authority(Arc::from(authority))
    }

    /// Set the suggestion authority to a list shared with the caller.
    pub fn with_shared_authority(mut self, authority: Arc<[String]>) -> Self {
        self.search_suggestion_authority = Some(authority);
        self
    }

    /// Set the input threshold.
    pub fn with_input_threshold(mut self, threshold: i32) -> Self {
        self.settings
            .get_or_insert_with(PartialSettings::default)
            .input_threshold = Some(threshold);
        self
    }

    /// Set the input-changed listener.
    pub fn with_on_input_changed<F>(mut self, listener: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.listeners_mut().on_input_changed_listener =
            Some(Some(InputChangedListener::new(listener)));
        self
    }

    /// Remove any configured input-changed listener.
    pub fn without_on_input_changed(mut self) -> Self {
        self.listeners_mut().on_input_changed_listener = Some(None);
        self
    }

    /// Set the tag-changed listener.
    pub fn with_on_tag_changed<F>(mut self, listener: F) -> Self
    where
        F: Fn(&[String]) + Send + Sync + 'static,
    {
        self.listeners_mut().on_tag_changed_listener =
            Some(Some(TagChangedListener::new(listener)));
        self
    }

    /// Remove any configured tag-changed listener.
    pub fn without_on_tag_changed(mut self) -> Self {
        self.listeners_mut().on_tag_changed_listener = Some(None);
        self
    }

    /// Add an unrecognized top-level key to pass through.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    fn listeners_mut(&mut self) -> &mut PartialEventListeners {
        self.event_listeners
            .get_or_insert_with(PartialEventListeners::default)
    }
}

// ============================================================================
// Config Store
// ============================================================================

/// Holds the effective configuration of one autocomplete instance.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    current: Configuration,
}

impl ConfigStore {
    /// Create a store holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with `partial` merged over the defaults.
    pub fn with_config(partial: PartialConfiguration) -> Self {
        let mut store = Self::new();
        store.set(partial);
        store
    }

    /// The current effective configuration.
    pub fn get(&self) -> &Configuration {
        &self.current
    }

    /// Deep-merge `partial` into the current configuration.
    pub fn set(&mut self, partial: PartialConfiguration) {
        if partial.is_empty() {
            tracing::trace!(target: targets::CONFIG, "empty partial configuration, nothing to merge");
            return;
        }

        tracing::debug!(
            target: targets::CONFIG,
            authority_len = partial.search_suggestion_authority.as_ref().map(|a| a.len()),
            input_threshold = ?partial.settings.as_ref().and_then(|s| s.input_threshold),
            listeners = partial.event_listeners.is_some(),
            extra_keys = partial.extra.len(),
            "merging configuration"
        );
        self.current.merge(partial);
    }
}

static_assertions::assert_impl_all!(Configuration: Send, Sync, Clone);
static_assertions::assert_impl_all!(PartialConfiguration: Send, Sync, Clone);
