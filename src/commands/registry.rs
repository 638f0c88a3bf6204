//! Command handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 2.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation for handler dispatch

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::VoiceCommand;

/// Registry mapping command names to handlers.
///
/// Multiple names can map to the same handler (aliases and per-voice
/// shortcuts do).
///
/// # Example
///
/// ```ignore
/// let mut registry = CommandRegistry::new();
/// registry.register(Arc::new(VoicesCommand));
///
/// if let Some(handler) = registry.get("voices") {
///     let reply = handler.handle(&ctx, user_id, &[]);
/// }
/// ```
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn VoiceCommand>>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under all of its declared names.
    pub fn register(&mut self, handler: Arc<dyn VoiceCommand>) {
        for name in handler.command_names() {
            self.handlers.insert(name, Arc::clone(&handler));
        }
    }

    /// Get the handler for a command name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn VoiceCommand>> {
        self.handlers.get(name).cloned()
    }

    /// Check if a command name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered command names.
    ///
    /// Note: this counts names, not unique handlers. A handler registered
    /// under several aliases is counted once per alias.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// All registered command names.
    pub fn command_names(&self) -> impl Iterator<Item = &&'static str> {
        self.handlers.keys()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::context::CommandContext;

    struct MockCommand {
        names: &'static [&'static str],
    }

    impl VoiceCommand for MockCommand {
        fn command_names(&self) -> &'static [&'static str] {
            self.names
        }

        fn handle(&self, _ctx: &CommandContext, _user_id: &str, _args: &[&str]) -> String {
            "mock".to_string()
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(MockCommand { names: &["ping"] }));

        assert!(registry.get("ping").is_some());
        assert!(registry.get("pong").is_none());
        assert!(registry.contains("ping"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_aliases_share_a_handler() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(MockCommand {
            names: &["voices", "голоса"],
        }));

        assert!(registry.contains("voices"));
        assert!(registry.contains("голоса"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_registry() {
        let registry = CommandRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
