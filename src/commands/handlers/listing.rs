//! Catalog listing and current-voice handlers
//!
//! Handles: voices, current_voice
//!
//! - **Version**: 1.0.0
//! - **Since**: 2.0.0
//!
//! ## Changelog
//! - 1.0.0: Extracted from the monolithic command match

use crate::commands::context::CommandContext;
use crate::commands::handler::VoiceCommand;
use crate::core::text::title_case;

/// Handler for the voice-list command
pub struct VoicesCommand;

impl VoiceCommand for VoicesCommand {
    fn command_names(&self) -> &'static [&'static str] {
        &["voices", "голоса", "стили"]
    }

    fn handle(&self, ctx: &CommandContext, _user_id: &str, _args: &[&str]) -> String {
        ctx.formatter.selector_message()
    }
}

/// Handler for the current-voice command
pub struct CurrentVoiceCommand;

impl VoiceCommand for CurrentVoiceCommand {
    fn command_names(&self) -> &'static [&'static str] {
        &["current_voice", "current", "текущий"]
    }

    fn handle(&self, ctx: &CommandContext, user_id: &str, _args: &[&str]) -> String {
        let info = ctx.catalog.info(&ctx.session.active_for(user_id));
        format!(
            "🎭 **Current voice:** {} {}\n\
             📝 **Style:** {}\n\
             💬 **Description:** {}\n\n\
             💡 Use `/voices` to pick another voice",
            info.emoji,
            info.name,
            title_case(&info.style),
            info.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voices_command_names() {
        let names = VoicesCommand.command_names();
        assert!(names.contains(&"voices"));
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_current_voice_command_names() {
        let names = CurrentVoiceCommand.command_names();
        assert!(names.contains(&"current_voice"));
        assert!(names.contains(&"current"));
    }
}
