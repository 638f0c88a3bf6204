//! Voice selection handlers: explicit select, per-voice shortcuts, reset
//!
//! Handles: voice, reset_voice, and one shortcut per voice
//!
//! - **Version**: 1.1.0
//! - **Since**: 2.0.0
//!
//! ## Changelog
//! - 1.1.0: Shortcut confirmations formatted through the target voice
//! - 1.0.0: Extracted from the monolithic command match

use log::info;

use crate::commands::context::CommandContext;
use crate::commands::handler::VoiceCommand;

/// Handler for `/voice <name>`
pub struct SelectVoiceCommand;

impl VoiceCommand for SelectVoiceCommand {
    fn command_names(&self) -> &'static [&'static str] {
        &["voice", "голос"]
    }

    fn handle(&self, ctx: &CommandContext, user_id: &str, args: &[&str]) -> String {
        let Some(&key) = args.first() else {
            return "❓ Specify a voice name. Example: `/voice tony_stark`".to_string();
        };

        if !ctx.session.select_for_user(user_id, key) {
            let listing = ctx
                .catalog
                .list()
                .iter()
                .map(|v| format!("• `{}` - {} {}", v.key, v.emoji, v.name))
                .collect::<Vec<_>>()
                .join("\n");
            return format!(
                "❌ Voice `{key}` not found.\n\n\
                 📋 Available voices:\n{listing}\n\n\
                 💡 Use `/voices` for the detailed list"
            );
        }

        info!("user {user_id} switched voice to {key}");
        let voice_info = ctx.catalog.info(key);
        let greeting = ctx.formatter.greeting(key);
        format!(
            "✅ Voice changed!\n\n\
             {} **{}** activated.\n\
             💬 *{}*\n\n\
             {greeting}",
            voice_info.emoji, voice_info.name, voice_info.description
        )
    }
}

/// One-command voice shortcut (`/jarvis`, `/tony`, ...), confirmed in the
/// target voice's own style.
pub struct ShortcutCommand {
    names: &'static [&'static str],
    key: &'static str,
    confirmation: &'static str,
}

impl ShortcutCommand {
    pub const fn new(
        names: &'static [&'static str],
        key: &'static str,
        confirmation: &'static str,
    ) -> Self {
        Self {
            names,
            key,
            confirmation,
        }
    }

    /// The built-in shortcuts, one per voice.
    pub fn builtin() -> Vec<ShortcutCommand> {
        vec![
            ShortcutCommand::new(
                &["jarvis", "джарвис"],
                "jarvis",
                "J.A.R.V.I.S. voice activated.",
            ),
            ShortcutCommand::new(
                &["tony", "stark", "тони", "старк"],
                "tony_stark",
                "Tony Stark mode engaged. Let's make some magic!",
            ),
            ShortcutCommand::new(
                &["sherlock", "шерлок"],
                "sherlock",
                "Elementary. Deduction mode active.",
            ),
            ShortcutCommand::new(
                &["yoda", "йода"],
                "yoda",
                "Activated, my voice is. Wisdom to give, I have.",
            ),
            ShortcutCommand::new(
                &["hacker", "neo", "хакер", "нео"],
                "hacker",
                "*typing* System breached. Hacker mode active.",
            ),
            ShortcutCommand::new(
                &["captain", "america", "капитан"],
                "captain",
                "I can do this all day. Hero mode engaged!",
            ),
            ShortcutCommand::new(
                &["alien", "инопланетянин"],
                "alien",
                "👽 Greetings, earthling. Cosmic mode engaged.",
            ),
        ]
    }
}

impl VoiceCommand for ShortcutCommand {
    fn command_names(&self) -> &'static [&'static str] {
        self.names
    }

    fn handle(&self, ctx: &CommandContext, user_id: &str, _args: &[&str]) -> String {
        ctx.session.select_for_user(user_id, self.key);
        info!("user {user_id} switched voice to {} via shortcut", self.key);
        ctx.formatter.format(self.confirmation, self.key, true)
    }
}

/// Handler for the reset command
pub struct ResetVoiceCommand;

impl VoiceCommand for ResetVoiceCommand {
    fn command_names(&self) -> &'static [&'static str] {
        &["reset_voice", "reset", "сброс"]
    }

    fn handle(&self, ctx: &CommandContext, user_id: &str, _args: &[&str]) -> String {
        ctx.session.reset(user_id);
        "🔄 Voice reset to standard J.A.R.V.I.S.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::voices::VoiceCatalog;

    #[test]
    fn test_every_shortcut_targets_a_real_voice() {
        let catalog = VoiceCatalog::new();
        let shortcuts = ShortcutCommand::builtin();
        assert_eq!(shortcuts.len(), catalog.len());
        for shortcut in &shortcuts {
            assert!(
                catalog.contains(shortcut.key),
                "shortcut targets unknown voice {}",
                shortcut.key
            );
            assert!(!shortcut.names.is_empty());
        }
    }

    #[test]
    fn test_shortcut_names_are_unique() {
        let mut names: Vec<&str> = ShortcutCommand::builtin()
            .iter()
            .flat_map(|s| s.names.iter().copied())
            .collect();
        names.sort_unstable();
        names.dedup();
        let total: usize = ShortcutCommand::builtin().iter().map(|s| s.names.len()).sum();
        assert_eq!(names.len(), total, "duplicate shortcut alias found");
    }
}
