//! Core systems for tagcomplete.
//!
//! This crate provides the foundational pieces shared by the tagcomplete
//! component crate:
//!
//! - **Signal/Slot System**: Synchronous, type-safe change notification
//! - **Logging**: `tracing` target names, span names and `PerfSpan`
//!
//! # Signal/Slot Example
//!
//! ```
//! use tagcomplete_core::Signal;
//!
//! // Create a signal that notifies when the input text changes
//! let input_changed = Signal::<String>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = input_changed.connect(|text| {
//!     println!("Input changed to: {}", text);
//! });
//!
//! // Emit the signal
//! input_changed.emit("ap".to_string());
//!
//! // Disconnect when done
//! input_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
