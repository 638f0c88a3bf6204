//! Voice command trait and infrastructure
//!
//! - **Version**: 1.0.0
//! - **Since**: 2.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation for modular command handling

use super::context::CommandContext;

/// Trait for slash command handlers.
///
/// Each handler answers to one or more command names (aliases included).
/// Handlers are registered with a CommandRegistry and dispatched by name.
///
/// # Example
///
/// ```ignore
/// pub struct PingCommand;
///
/// impl VoiceCommand for PingCommand {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     fn handle(&self, _ctx: &CommandContext, _user_id: &str, _args: &[&str]) -> String {
///         "pong".to_string()
///     }
/// }
/// ```
pub trait VoiceCommand: Send + Sync {
    /// Command name(s) this handler processes, without the leading slash.
    ///
    /// A handler can serve multiple names if they share logic.
    fn command_names(&self) -> &'static [&'static str];

    /// Produce the reply for a parsed command.
    ///
    /// `args` holds the whitespace-separated tokens after the command name,
    /// already lower-cased by the router. Every outcome is a reply string;
    /// handlers never fail.
    fn handle(&self, ctx: &CommandContext, user_id: &str, args: &[&str]) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    // The trait must stay object-safe (registry stores dyn handlers)
    fn _assert_object_safe(_: &dyn VoiceCommand) {}
}
