//! Prelude module for tagcomplete.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use tagcomplete::prelude::*;
//! ```

pub use crate::config::{ConfigStore, Configuration, PartialConfiguration};
pub use crate::controller::{AutocompleteController, SuggestionState, SuggestionView};
pub use crate::matcher::SuggestionMatcher;
pub use crate::render::{
    AdapterEvent, HeadlessAdapter, RenderAdapter, RenderUpdate, StyleRegistration,
};
pub use crate::tag_set::TagSet;
pub use crate::{Error, Result, TagError};
pub use tagcomplete_core::Signal;
