//! Text transformation pipeline
//!
//! Substitution rules first, signature style second, then the randomized
//! flavor-phrase and emoji decoration. Pure given an RNG: callers that need
//! reproducible output pass a seeded generator to `transform_with`.
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.0.0: Injected RNG and TransformConfig
//! - 1.0.0: Initial port of the transformation order

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::core::config::TransformConfig;
use crate::features::voices::catalog::{Persona, VoiceCatalog};

/// Applies a voice to free-form text.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    config: TransformConfig,
}

impl Transformer {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Transform with the thread RNG.
    pub fn transform(&self, text: &str, voice: &Persona) -> String {
        self.transform_with(text, voice, &mut rand::rng())
    }

    /// Transform with a caller-supplied RNG.
    pub fn transform_with<R: Rng + ?Sized>(
        &self,
        text: &str,
        voice: &Persona,
        rng: &mut R,
    ) -> String {
        let mut text = text.to_string();
        for rule in &voice.rules {
            text = rule.apply(&text);
        }

        text = voice.signature.render(&text, &self.config, rng);

        if !voice.phrases.is_empty() && rng.random_bool(self.config.flavor_phrase_chance) {
            if let Some(phrase) = voice.phrases.choose(rng) {
                text = if rng.random_bool(0.5) {
                    format!("{phrase} {text}")
                } else {
                    format!("{text} {phrase}")
                };
            }
        }

        if !voice.emoji.is_empty() && rng.random_bool(self.config.emoji_chance) {
            let emoji = &voice.emoji;
            text = if rng.random_bool(0.5) {
                format!("{emoji} {text}")
            } else {
                format!("{text} {emoji}")
            };
        }

        text
    }

    /// Transform by catalog key; unknown keys leave the text untouched.
    pub fn transform_named(&self, catalog: &VoiceCatalog, key: &str, text: &str) -> String {
        match catalog.get(key) {
            Some(voice) => self.transform(text, voice),
            None => {
                debug!("unknown voice `{key}`, passing text through");
                text.to_string()
            }
        }
    }
}
