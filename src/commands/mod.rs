//! # Command System
//!
//! Slash command (/) parsing and dispatch for hosting chat layers.
//!
//! - **Version**: 1.1.0
//! - **Since**: 2.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add per-voice shortcut commands
//! - 1.0.0: Initial implementation with handler trait, context and registry

pub mod context;
pub mod handler;
pub mod handlers;
pub mod registry;
pub mod router;

// Re-export handler infrastructure
pub use context::CommandContext;
pub use handler::VoiceCommand;
pub use registry::CommandRegistry;
pub use router::{Router, COMMAND_PREFIX};
