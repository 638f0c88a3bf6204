//! Per-command handler implementations
//!
//! - **Version**: 1.1.0
//! - **Since**: 2.0.0
//!
//! ## Changelog
//! - 1.1.0: Add ShortcutCommand (one alias group per voice)
//! - 1.0.0: Initial extraction into listing and selection handlers

pub mod listing;
pub mod selection;

pub use listing::{CurrentVoiceCommand, VoicesCommand};
pub use selection::{ResetVoiceCommand, SelectVoiceCommand, ShortcutCommand};
