//! Transformation tuning knobs
//!
//! Every randomized decision in the engine draws against one of these
//! probabilities. The defaults are the long-standing values; each field can
//! be overridden with a `VOICEBOX_*` environment variable holding an `f64`
//! in `[0.0, 1.0]` (out-of-range values are clamped, unparseable ones
//! ignored).
//!
//! - **Version**: 1.0.0
//! - **Since**: 2.0.0
//!
//! ## Changelog
//! - 1.0.0: Extracted from literals scattered through the style functions

use std::env;

/// Probabilities for every randomized decoration decision.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformConfig {
    /// Chance a stock flavor phrase is attached to the output
    pub flavor_phrase_chance: f64,
    /// Chance the voice emoji is attached to the output
    pub emoji_chance: f64,
    /// Chance the jarvis voice opens with a report-style prefix
    pub report_prefix_chance: f64,
    /// Chance the tony_stark voice appends a sarcastic one-liner
    pub quip_chance: f64,
    /// Chance the tony_stark voice upper-cases one word
    pub shout_chance: f64,
    /// Chance the sherlock voice opens with a deductive lead-in
    pub lead_in_chance: f64,
    /// Chance the yoda voice appends a wisdom fragment
    pub wisdom_chance: f64,
    /// Chance the hacker voice inserts an action aside
    pub aside_chance: f64,
    /// Per-line chance the hacker voice appends a matrix burst
    pub matrix_chance: f64,
    /// Chance the captain voice upper-cases the whole text
    pub rally_chance: f64,
    /// Chance the captain voice appends a heroic closing line
    pub closer_chance: f64,
    /// Chance the alien voice wraps the text in a cosmic symbol
    pub wrap_chance: f64,
    /// Chance the alien voice appends a mysterious closing sentence
    pub mystery_chance: f64,
    /// Chance the formatter appends a signature line under the header
    pub signature_chance: f64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            flavor_phrase_chance: 0.20,
            emoji_chance: 0.70,
            report_prefix_chance: 0.30,
            quip_chance: 0.40,
            shout_chance: 0.20,
            lead_in_chance: 0.50,
            wisdom_chance: 0.30,
            aside_chance: 0.20,
            matrix_chance: 0.10,
            rally_chance: 0.30,
            closer_chance: 0.40,
            wrap_chance: 0.50,
            mystery_chance: 0.30,
            signature_chance: 0.30,
        }
    }
}

impl TransformConfig {
    /// Defaults with any `VOICEBOX_*_CHANCE` environment overrides applied.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            flavor_phrase_chance: env_chance(
                "VOICEBOX_FLAVOR_PHRASE_CHANCE",
                defaults.flavor_phrase_chance,
            ),
            emoji_chance: env_chance("VOICEBOX_EMOJI_CHANCE", defaults.emoji_chance),
            report_prefix_chance: env_chance(
                "VOICEBOX_REPORT_PREFIX_CHANCE",
                defaults.report_prefix_chance,
            ),
            quip_chance: env_chance("VOICEBOX_QUIP_CHANCE", defaults.quip_chance),
            shout_chance: env_chance("VOICEBOX_SHOUT_CHANCE", defaults.shout_chance),
            lead_in_chance: env_chance("VOICEBOX_LEAD_IN_CHANCE", defaults.lead_in_chance),
            wisdom_chance: env_chance("VOICEBOX_WISDOM_CHANCE", defaults.wisdom_chance),
            aside_chance: env_chance("VOICEBOX_ASIDE_CHANCE", defaults.aside_chance),
            matrix_chance: env_chance("VOICEBOX_MATRIX_CHANCE", defaults.matrix_chance),
            rally_chance: env_chance("VOICEBOX_RALLY_CHANCE", defaults.rally_chance),
            closer_chance: env_chance("VOICEBOX_CLOSER_CHANCE", defaults.closer_chance),
            wrap_chance: env_chance("VOICEBOX_WRAP_CHANCE", defaults.wrap_chance),
            mystery_chance: env_chance("VOICEBOX_MYSTERY_CHANCE", defaults.mystery_chance),
            signature_chance: env_chance("VOICEBOX_SIGNATURE_CHANCE", defaults.signature_chance),
        }
    }

    /// All chances zeroed: no randomized decoration, so output depends only
    /// on the input text and the voice's rules.
    pub fn off() -> Self {
        Self {
            flavor_phrase_chance: 0.0,
            emoji_chance: 0.0,
            report_prefix_chance: 0.0,
            quip_chance: 0.0,
            shout_chance: 0.0,
            lead_in_chance: 0.0,
            wisdom_chance: 0.0,
            aside_chance: 0.0,
            matrix_chance: 0.0,
            rally_chance: 0.0,
            closer_chance: 0.0,
            wrap_chance: 0.0,
            mystery_chance: 0.0,
            signature_chance: 0.0,
        }
    }
}

fn env_chance(key: &str, fallback: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|raw| raw.parse::<f64>().ok())
        .map(|value| value.clamp(0.0, 1.0))
        .unwrap_or(fallback)
}
