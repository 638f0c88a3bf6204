//! Message router: the single entry point a hosting chat layer calls
//!
//! Commands start with the prefix character and are dispatched through the
//! registry; anything else is voiced through the user's active persona. Every
//! input yields a reply string; nothing here fails.
//!
//! - **Version**: 1.0.0
//! - **Since**: 2.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation over the handler registry

use log::{debug, info};
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::commands::handlers::{
    CurrentVoiceCommand, ResetVoiceCommand, SelectVoiceCommand, ShortcutCommand, VoicesCommand,
};
use crate::commands::registry::CommandRegistry;
use crate::core::config::TransformConfig;
use crate::features::formatter::ResponseFormatter;
use crate::features::session::VoiceSession;
use crate::features::voices::{Transformer, VoiceCatalog};

/// Character that marks a message as a command.
pub const COMMAND_PREFIX: char = '/';

/// Routes incoming messages to command handlers or the formatter.
pub struct Router {
    ctx: CommandContext,
    registry: CommandRegistry,
}

impl Router {
    /// Build a router over the given services, with every built-in command
    /// registered.
    pub fn new(ctx: CommandContext) -> Self {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(VoicesCommand));
        registry.register(Arc::new(CurrentVoiceCommand));
        registry.register(Arc::new(SelectVoiceCommand));
        registry.register(Arc::new(ResetVoiceCommand));
        for shortcut in ShortcutCommand::builtin() {
            registry.register(Arc::new(shortcut));
        }
        Self { ctx, registry }
    }

    /// Router over the built-in catalog, with transformation chances read
    /// from the environment.
    pub fn from_env() -> Self {
        Self::with_config(TransformConfig::from_env())
    }

    /// Router over the built-in catalog with an explicit configuration.
    pub fn with_config(config: TransformConfig) -> Self {
        let catalog = Arc::new(VoiceCatalog::new());
        let session = Arc::new(VoiceSession::new(Arc::clone(&catalog)));
        let formatter = ResponseFormatter::new(Arc::clone(&catalog), Transformer::new(config));
        Self::new(CommandContext::new(catalog, session, formatter))
    }

    pub fn context(&self) -> &CommandContext {
        &self.ctx
    }

    /// Respond to one incoming message from `user_id`.
    pub fn respond(&self, user_id: &str, message: &str) -> String {
        let request_id = Uuid::new_v4();

        if !message.starts_with(COMMAND_PREFIX) {
            let voice = self.ctx.session.active_for(user_id);
            debug!("[{request_id}] voicing message from {user_id} as {voice}");
            return self.ctx.formatter.format(message, &voice, false);
        }

        let lowered = message.to_lowercase();
        let mut tokens = lowered.split_whitespace();
        let name = tokens
            .next()
            .map(|token| token.trim_start_matches(COMMAND_PREFIX))
            .unwrap_or_default();
        let args: Vec<&str> = tokens.collect();

        match self.registry.get(name) {
            Some(handler) => {
                info!("[{request_id}] /{name} from {user_id}");
                handler.handle(&self.ctx, user_id, &args)
            }
            None => {
                debug!("[{request_id}] unknown command /{name} from {user_id}");
                "❓ Unknown command. Use `/voices` for the list of available commands.".to_string()
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_router() -> Router {
        Router::with_config(TransformConfig::off())
    }

    #[test]
    fn test_voice_selection_scenario() {
        let router = quiet_router();
        let reply = router.respond("u1", "/voice yoda");
        assert!(reply.contains("Master Yoda"), "confirmation names the voice: {reply}");
        assert_eq!(router.context().session.active_for("u1"), "yoda");

        let voiced = router.respond("u1", "I need help with this code.");
        assert!(!voiced.is_empty());
    }

    #[test]
    fn test_unknown_voice_lists_valid_keys_and_mutates_nothing() {
        let router = quiet_router();
        router.respond("u1", "/voice sherlock");
        let reply = router.respond("u1", "/voice atlantis");
        assert!(reply.contains("`atlantis`"), "failed key named: {reply}");
        for key in ["jarvis", "tony_stark", "sherlock", "yoda", "hacker", "captain", "alien"] {
            assert!(reply.contains(&format!("`{key}`")), "missing {key}: {reply}");
        }
        assert_eq!(router.context().session.active_for("u1"), "sherlock");
    }

    #[test]
    fn test_voice_without_argument_prompts() {
        let router = quiet_router();
        let reply = router.respond("u1", "/voice");
        assert!(reply.contains("Specify a voice name"));
        assert_eq!(router.context().session.active_for("u1"), "jarvis");
    }

    #[test]
    fn test_current_voice_names_only_the_active_voice() {
        let router = quiet_router();
        router.respond("u1", "/voice tony_stark");
        let reply = router.respond("u1", "/current_voice");
        assert!(reply.contains("Tony Stark"));
        assert!(!reply.contains("Sherlock Holmes"));
        assert!(!reply.contains("Master Yoda"));
        assert!(reply.contains("Sarcastic Brilliant"));
    }

    #[test]
    fn test_voices_listing() {
        let router = quiet_router();
        let reply = router.respond("u1", "/voices");
        assert!(reply.contains("`/voice [name]`"));
        assert!(reply.contains("J.A.R.V.I.S."));
        assert!(reply.contains("Cosmic Entity"));
    }

    #[test]
    fn test_shortcut_selects_and_formats_with_header() {
        let router = quiet_router();
        let reply = router.respond("u1", "/jarvis");
        assert_eq!(router.context().session.active_for("u1"), "jarvis");
        assert!(reply.contains("**🤖 J.A.R.V.I.S.**"), "header present: {reply}");

        // plain messages come back without the header
        let voiced = router.respond("u1", "all systems go.");
        assert!(!voiced.contains("**🤖 J.A.R.V.I.S.**"));
        assert!(!voiced.contains('─'));
    }

    #[test]
    fn test_shortcut_aliases() {
        let router = quiet_router();
        router.respond("u1", "/stark");
        assert_eq!(router.context().session.active_for("u1"), "tony_stark");
        router.respond("u1", "/neo");
        assert_eq!(router.context().session.active_for("u1"), "hacker");
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        let router = quiet_router();
        let reply = router.respond("u1", "/VOICE YODA");
        assert!(reply.contains("Master Yoda"));
        assert_eq!(router.context().session.active_for("u1"), "yoda");
    }

    #[test]
    fn test_reset_twice_is_harmless() {
        let router = quiet_router();
        router.respond("u1", "/voice alien");
        let first = router.respond("u1", "/reset_voice");
        assert!(first.contains("reset"));
        assert_eq!(router.context().session.active_for("u1"), "jarvis");
        let second = router.respond("u1", "/reset_voice");
        assert!(second.contains("reset"));
        assert_eq!(router.context().session.active_for("u1"), "jarvis");
    }

    #[test]
    fn test_unknown_command_points_at_the_list() {
        let router = quiet_router();
        let reply = router.respond("u1", "/dance");
        assert!(reply.contains("Unknown command"));
        assert!(reply.contains("`/voices`"));
    }

    #[test]
    fn test_plain_message_uses_the_users_voice() {
        let router = quiet_router();
        router.respond("u1", "/voice tony_stark");
        let reply = router.respond("u1", "This is done.");
        assert_eq!(reply, "This is done!");
    }

    #[test]
    fn test_users_do_not_leak_voices() {
        let router = quiet_router();
        router.respond("u1", "/voice yoda");
        let reply = router.respond("u2", "/current_voice");
        assert!(reply.contains("J.A.R.V.I.S."), "u2 still on the default: {reply}");
    }

    #[test]
    fn test_localized_aliases() {
        let router = quiet_router();
        let reply = router.respond("u1", "/голос йода");
        assert!(reply.contains("not found"), "localized select validates keys: {reply}");
        router.respond("u1", "/йода");
        assert_eq!(router.context().session.active_for("u1"), "yoda");
    }
}
