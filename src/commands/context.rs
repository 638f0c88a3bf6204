//! Shared context for voice command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 2.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation with catalog, session and formatter

use std::sync::Arc;

use crate::features::formatter::ResponseFormatter;
use crate::features::session::VoiceSession;
use crate::features::voices::VoiceCatalog;

/// Shared services handed to every command handler:
/// - VoiceCatalog for lookups and listings
/// - VoiceSession for per-user selection state
/// - ResponseFormatter for voiced output
#[derive(Clone)]
pub struct CommandContext {
    pub catalog: Arc<VoiceCatalog>,
    pub session: Arc<VoiceSession>,
    pub formatter: ResponseFormatter,
}

impl CommandContext {
    pub fn new(
        catalog: Arc<VoiceCatalog>,
        session: Arc<VoiceSession>,
        formatter: ResponseFormatter,
    ) -> Self {
        Self {
            catalog,
            session,
            formatter,
        }
    }
}
