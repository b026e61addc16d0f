//! tagcomplete - tag entry with live autocomplete suggestions.
//!
//! This crate holds the decision logic of a tag-entry control: it merges
//! configuration, filters a caller-supplied suggestion authority against
//! partial input, keeps the ordered list of committed tags, and decides what
//! the suggestions panel shows. Presentation stays behind the
//! [`RenderAdapter`](render::RenderAdapter) boundary, so the whole core runs
//! and tests without any rendering surface.
//!
//! - [`config`]: [`ConfigStore`](config::ConfigStore) and partial configuration merging
//! - [`markup`]: stripping markup from raw input
//! - [`matcher`]: case-insensitive prefix matching
//! - [`tag_set`]: the ordered tag collection
//! - [`controller`]: the autocomplete state machine
//! - [`render`]: events in, render updates out, style registration
//! - [`debug`]: state visualization for debugging
//!
//! # Example
//!
//! ```
//! use tagcomplete::prelude::*;
//!
//! let mut controller = AutocompleteController::with_registration(
//!     HeadlessAdapter::new(),
//!     &StyleRegistration::new(),
//! )
//! .with_config(
//!     PartialConfiguration::new()
//!         .with_authority(["Apple", "apply", "Banana", "app"])
//!         .with_on_tag_changed(|tags| println!("tags: {tags:?}")),
//! );
//!
//! controller.handle_event(AdapterEvent::RawInputChanged("ap".into()))?;
//! assert!(controller.adapter().is_panel_visible());
//! assert_eq!(controller.adapter().candidates(), ["Apple", "apply", "app"]);
//!
//! controller.handle_event(AdapterEvent::SuggestionClicked("apply".into()))?;
//! assert_eq!(controller.adapter().tags(), ["apply"]);
//! assert!(!controller.adapter().is_panel_visible());
//! # Ok::<(), tagcomplete::TagError>(())
//! ```

pub mod config;
pub mod controller;
pub mod debug;
mod error;
pub mod markup;
pub mod matcher;
pub mod prelude;
pub mod render;
pub mod tag_set;

pub use error::{ConfigError, Error, Result, TagError};
pub use tagcomplete_core::{ConnectionId, PerfSpan, Signal, logging};
