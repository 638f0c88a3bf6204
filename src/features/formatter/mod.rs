//! # Feature: Response Formatter
//!
//! Wraps transformed text with the voice header and optional signature line,
//! and generates greetings, farewells and the voice-selector menu. Invalid
//! keys silently fall back to the default voice; callers wanting strict
//! validation check the catalog first.
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Selector menu moved here from the command layer
//! - 1.1.0: Seedable RNG variant for reproducible formatting
//! - 1.0.0: Initial release

use chrono::Local;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::sync::Arc;

use crate::core::text::title_case;
use crate::features::voices::{Transformer, VoiceCatalog, DEFAULT_VOICE};

/// Width of the rule drawn under the voice header.
const HEADER_RULE_WIDTH: usize = 40;

/// Decorates transformed text for display.
#[derive(Clone)]
pub struct ResponseFormatter {
    catalog: Arc<VoiceCatalog>,
    transformer: Transformer,
}

impl ResponseFormatter {
    pub fn new(catalog: Arc<VoiceCatalog>, transformer: Transformer) -> Self {
        Self {
            catalog,
            transformer,
        }
    }

    pub fn catalog(&self) -> &VoiceCatalog {
        &self.catalog
    }

    pub fn transformer(&self) -> &Transformer {
        &self.transformer
    }

    /// Format with the thread RNG.
    pub fn format(&self, text: &str, key: &str, include_header: bool) -> String {
        self.format_with(text, key, include_header, &mut rand::rng())
    }

    /// Transform `text` in the given voice and decorate it. Unknown keys
    /// fall back to the default voice.
    pub fn format_with<R: Rng + ?Sized>(
        &self,
        text: &str,
        key: &str,
        include_header: bool,
        rng: &mut R,
    ) -> String {
        let voice = self
            .catalog
            .get(key)
            .or_else(|| self.catalog.get(DEFAULT_VOICE));
        let Some(voice) = voice else {
            return text.to_string();
        };

        let transformed = self.transformer.transform_with(text, voice, rng);

        let mut lines = Vec::new();
        if include_header {
            lines.push(format!("**{} {}**", voice.emoji, voice.name));
            lines.push("─".repeat(HEADER_RULE_WIDTH));
        }
        lines.push(transformed);

        if include_header && rng.random_bool(self.transformer.config().signature_chance) {
            let signatures = [
                format!("\n*{}*", voice.characteristics),
                format!("\n_{} mode active_", voice.name),
                format!("\n💫 Voice filter: {}", title_case(&voice.style)),
            ];
            if let Some(signature) = signatures.choose(rng) {
                lines.push(signature.clone());
            }
        }

        lines.join("\n")
    }

    /// Greeting in the voice's manner. The default voice reports the local
    /// time (`HH:MM. `) first.
    pub fn greeting(&self, key: &str) -> String {
        let Some(voice) = self.catalog.get(key) else {
            return "Hello!".to_string();
        };
        if voice.key == DEFAULT_VOICE {
            let time = Local::now().format("%H:%M");
            format!("{time}. {}", voice.greeting)
        } else {
            voice.greeting.clone()
        }
    }

    /// Farewell in the voice's manner.
    pub fn farewell(&self, key: &str) -> String {
        match self.catalog.get(key) {
            Some(voice) => voice.farewell.clone(),
            None => "Goodbye!".to_string(),
        }
    }

    /// The voice-selector menu: every voice with its shortcut, plus usage
    /// instructions.
    pub fn selector_message(&self) -> String {
        let mut lines = vec![
            "🎭 **VOICE INTERFACE SELECTION**".to_string(),
            "*Choose a communication style:*\n".to_string(),
        ];
        for info in self.catalog.list() {
            lines.push(format!(
                "{} **{}** (`/{}`) - _{}_",
                info.emoji, info.name, info.key, info.description
            ));
        }
        lines.push("\n📋 **Commands:**".to_string());
        lines.push("• `/voice [name]` - switch voice".to_string());
        lines.push("• `/voices` - show this list".to_string());
        lines.push("• `/current_voice` - current voice".to_string());
        lines.push("\n💡 *Example: `/voice tony_stark` for Tony Stark's style*".to_string());
        lines.join("\n")
    }
}
