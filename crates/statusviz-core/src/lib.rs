//! Core domain state for the statusviz backend.
//!
//! This crate is the single source of truth for the two process-wide
//! collaborators behind the HTTP surface:
//!
//! - [`StatusColorRegistry`] -- the status-code to color palette
//! - [`EventQueue`] -- insertion-ordered accumulation of [`StatusEvent`]s
//!
//! Both are owned by a single [`EventFeed`] instance constructed at process
//! start and shared into the request handlers, so lifecycle and test
//! isolation stay explicit. Typed configuration loading
//! ([`VisualizerConfig`]) lives here too.

pub mod config;
pub mod event;
pub mod feed;
pub mod queue;
pub mod registry;

// Re-export primary types for convenience.
pub use config::{ConfigError, VisualizerConfig};
pub use event::StatusEvent;
pub use feed::EventFeed;
pub use queue::EventQueue;
pub use registry::StatusColorRegistry;
