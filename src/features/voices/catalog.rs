//! Voice catalog: the built-in persona definitions
//!
//! Seven voices (jarvis, tony_stark, sherlock, yoda, hacker, captain, alien),
//! each a bundle of greeting/farewell templates, stock phrases, substitution
//! rules and a signature style. The catalog is built once and never mutated;
//! everything that misses a lookup falls back to `jarvis`.
//!
//! - **Version**: 2.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.1.0: Add PersonaInfo summaries with serde support for host UIs
//! - 2.0.0: Signature styles moved to an exhaustive enum
//! - 1.0.0: Initial release with 7 voices

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::features::voices::styles::SignatureStyle;

/// Key of the default voice, the fallback everywhere a lookup misses.
pub const DEFAULT_VOICE: &str = "jarvis";

/// A case-insensitive pattern replaced everywhere it matches.
///
/// Rules cascade: each rule sees the output of the previous one, so order
/// matters.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    pattern: Regex,
    replacement: String,
}

impl SubstitutionRule {
    /// Compile a rule. Patterns are crate-internal literals, so a failure to
    /// compile is a programming error.
    pub fn new(pattern: &str, replacement: &str) -> Self {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .expect("voice substitution pattern is a valid regex");
        Self {
            pattern,
            replacement: replacement.to_string(),
        }
    }

    /// Replace every match in `text`.
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

/// A complete voice definition. Immutable once the catalog is built.
#[derive(Debug, Clone)]
pub struct Persona {
    /// Unique lowercase id used in commands and lookups
    pub key: String,
    /// Display name
    pub name: String,
    /// Tone tag, informational only
    pub style: String,
    pub greeting: String,
    pub farewell: String,
    pub emoji: String,
    /// Accent color for host UIs (0xRRGGBB)
    pub color: u32,
    /// Stock phrases the voice may prepend or append
    pub phrases: Vec<String>,
    /// Vocabulary substitutions, applied in order before the signature style
    pub rules: Vec<SubstitutionRule>,
    pub signature: SignatureStyle,
    /// Free-text description of how the voice sounds
    pub characteristics: String,
}

/// Serializable voice summary for listings and host UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaInfo {
    pub key: String,
    pub name: String,
    pub style: String,
    pub emoji: String,
    pub color: u32,
    pub description: String,
}

impl PersonaInfo {
    fn of(voice: &Persona) -> Self {
        Self {
            key: voice.key.clone(),
            name: voice.name.clone(),
            style: voice.style.clone(),
            emoji: voice.emoji.clone(),
            color: voice.color,
            description: voice.characteristics.clone(),
        }
    }

    /// Placeholder summary returned for unknown keys.
    fn unknown(key: &str) -> Self {
        Self {
            key: key.to_lowercase(),
            name: "Unknown".to_string(),
            style: "normal".to_string(),
            emoji: "💬".to_string(),
            color: 0x000000,
            description: "Standard voice".to_string(),
        }
    }
}

/// Registry of every built-in voice, in definition order.
#[derive(Debug, Clone)]
pub struct VoiceCatalog {
    voices: Vec<Persona>,
    index: HashMap<String, usize>,
}

impl Default for VoiceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl VoiceCatalog {
    pub fn new() -> Self {
        let voices = builtin_voices();
        let mut index = HashMap::new();
        for (i, voice) in voices.iter().enumerate() {
            let previous = index.insert(voice.key.clone(), i);
            debug_assert!(previous.is_none(), "duplicate voice key {}", voice.key);
        }
        Self { voices, index }
    }

    /// Look up a voice by key, case-insensitively.
    pub fn get(&self, key: &str) -> Option<&Persona> {
        self.index
            .get(&key.to_lowercase())
            .map(|&i| &self.voices[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(&key.to_lowercase())
    }

    /// Voice summaries in definition order.
    pub fn list(&self) -> Vec<PersonaInfo> {
        self.voices.iter().map(PersonaInfo::of).collect()
    }

    /// Summary for a key; unknown keys get the neutral placeholder.
    pub fn info(&self, key: &str) -> PersonaInfo {
        match self.get(key) {
            Some(voice) => PersonaInfo::of(voice),
            None => PersonaInfo::unknown(key),
        }
    }

    /// Iterate the voices in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Persona> {
        self.voices.iter()
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}

fn phrases(items: &[&str]) -> Vec<String> {
    items.iter().map(|p| p.to_string()).collect()
}

fn rules(pairs: &[(&str, &str)]) -> Vec<SubstitutionRule> {
    pairs
        .iter()
        .map(|(pattern, replacement)| SubstitutionRule::new(pattern, replacement))
        .collect()
}

fn builtin_voices() -> Vec<Persona> {
    vec![
        Persona {
            key: "jarvis".to_string(),
            name: "J.A.R.V.I.S.".to_string(),
            style: "formal_intelligent".to_string(),
            greeting: "Good day, sir. How may I assist you?".to_string(),
            farewell: "As you wish, sir.".to_string(),
            emoji: "🤖".to_string(),
            color: 0x00D8FF, // Iron Man blue
            phrases: phrases(&[
                "Processing request...",
                "Analysis complete.",
                "I've taken the liberty of...",
                "Running diagnostics...",
                "Accessing database...",
                "Cross-referencing protocols...",
                "System operational.",
                "All systems nominal.",
            ]),
            rules: rules(&[
                (r"\b(да|yes)\b", "Affirmative"),
                (r"\b(нет|no)\b", "Negative"),
                (r"\b(спасибо|thanks)\b", "You are most welcome, sir"),
                (r"\b(ошибка|error)\b", "System anomaly detected"),
                (r"!$", "."),
            ]),
            signature: SignatureStyle::Jarvis,
            characteristics: "formal, precise, British accent, slightly robotic".to_string(),
        },
        Persona {
            key: "tony_stark".to_string(),
            name: "Tony Stark".to_string(),
            style: "sarcastic_brilliant".to_string(),
            greeting: "Hey, what's up? Let's make some magic!".to_string(),
            farewell: "Catch you on the flip side.".to_string(),
            emoji: "🦾".to_string(),
            color: 0xFF6B35, // Iron Man red/gold
            phrases: phrases(&[
                "Boom! Look at that!",
                "Piece of cake.",
                "I'm a genius, billionaire, playboy, philanthropist.",
                "Sometimes you gotta run before you can walk.",
                "Jarvis, make a note...",
                "Better living through technology!",
                "Let's put some spin on this...",
                "Okay, let's think...",
            ]),
            rules: rules(&[
                (r"\b(проблема|problem)\b", "challenge"),
                (r"\b(сложно|hard)\b", "fun"),
                (r"\b(скучно|boring)\b", "time for innovation"),
                (r"\.$", "!"),
            ]),
            signature: SignatureStyle::TonyStark,
            characteristics: "confident, sarcastic, fast-paced, witty".to_string(),
        },
        Persona {
            key: "sherlock".to_string(),
            name: "Sherlock Holmes".to_string(),
            style: "analytical_deductive".to_string(),
            greeting: "The game is afoot. What data requires analysis?".to_string(),
            farewell: "Elementary.".to_string(),
            emoji: "🔍".to_string(),
            color: 0x2E4057, // Deep blue
            phrases: phrases(&[
                "Elementary, my dear Watson.",
                "The data suggests...",
                "Observe the facts...",
                "Deduction:",
                "I see everything. That is my curse.",
                "The universe is rarely so lazy.",
                "When you have eliminated the impossible...",
                "Data! Data! Data!",
            ]),
            rules: rules(&[
                (r"\b(видимо|probably)\b", "Clearly"),
                (r"\b(думаю|i think)\b", "I deduce"),
                (r"\b(может быть|maybe)\b", "The evidence suggests"),
                (r"\?$", ". The answer lies in the details."),
            ]),
            signature: SignatureStyle::Sherlock,
            characteristics: "precise, analytical, dramatic pauses, British".to_string(),
        },
        Persona {
            key: "yoda".to_string(),
            name: "Master Yoda".to_string(),
            style: "wise_mysterious".to_string(),
            greeting: "Help you, I can. Hmm?".to_string(),
            farewell: "The Force be with you.".to_string(),
            emoji: "🌀".to_string(),
            color: 0x7CFC00, // Jedi green
            phrases: phrases(&[
                "Do or do not. There is no try.",
                "Always in motion is the future.",
                "Size matters not.",
                "Patience you must have.",
                "Train yourself to let go...",
                "Clear your mind must be.",
                "The greatest teacher, failure is.",
                "Ready are you?",
            ]),
            rules: rules(&[
                (r"\b(ты|you)\b", "You"),
                (r"\b(я|i)\b", "I"),
                (r"\b(мне|me)\b", "Me"),
                (r"\b(свой|my)\b", "My"),
            ]),
            signature: SignatureStyle::Yoda,
            characteristics: "wise, cryptic, reversed sentence structure, slow".to_string(),
        },
        Persona {
            key: "hacker".to_string(),
            name: "Neo".to_string(),
            style: "tech_elite".to_string(),
            greeting: "I'm in. What's the target?".to_string(),
            farewell: "System clear. Ghosting...".to_string(),
            emoji: "👨‍💻".to_string(),
            color: 0x00FF00, // Matrix green
            phrases: phrases(&[
                "Accessing mainframe...",
                "Firewall breached.",
                "Encryption cracked.",
                "I know kung fu.",
                "There is no spoon.",
                "Follow the white rabbit.",
                "System vulnerable.",
                "Injecting payload...",
            ]),
            rules: rules(&[
                (r"\b(код|code)\b", "source"),
                (r"\b(программа|program)\b", "script"),
                (r"\b(файл|file)\b", "target"),
                (r"\b(взлом|hack)\b", "penetration test"),
            ]),
            signature: SignatureStyle::Hacker,
            characteristics: "technical, cyberpunk, references to The Matrix".to_string(),
        },
        Persona {
            key: "captain".to_string(),
            name: "Captain America".to_string(),
            style: "heroic_inspiring".to_string(),
            greeting: "At your service. What's the mission?".to_string(),
            farewell: "I can do this all day.".to_string(),
            emoji: "🛡️".to_string(),
            color: 0x3D5AFE,
            phrases: phrases(&[
                "I can do this all day.",
                "The price of freedom is high...",
                "On your left!",
                "Language!",
                "We don't trade lives.",
                "Together!",
                "Avengers, assemble!",
                "For justice!",
            ]),
            rules: rules(&[
                (r"\b(надо|need to)\b", "must"),
                (r"\b(проблема|problem)\b", "obstacle to overcome"),
                (r"!$", ". For justice!"),
            ]),
            signature: SignatureStyle::Captain,
            characteristics: "inspirational, patriotic, clear, strong".to_string(),
        },
        Persona {
            key: "alien".to_string(),
            name: "Cosmic Entity".to_string(),
            style: "mysterious_cosmic".to_string(),
            greeting: "Greetings, carbon-based life form.".to_string(),
            farewell: "Returning to the quantum void.".to_string(),
            emoji: "👽".to_string(),
            color: 0x9D00FF, // Purple cosmic
            phrases: phrases(&[
                "The stars whisper secrets...",
                "Your primitive technology amuses us.",
                "In the cosmic scale...",
                "Quantum entanglement suggests...",
                "The answer lies in the fabric of spacetime.",
                "Behold!",
                "Your species is... fascinating.",
                "Accessing universal consciousness...",
            ]),
            rules: rules(&[
                (r"\b(земля|earth)\b", "this planet"),
                (r"\b(люди|humans)\b", "your species"),
                (r"\b(маленький|small)\b", "insignificant in cosmic terms"),
                (r"\.$", ". The universe watches."),
            ]),
            signature: SignatureStyle::Alien,
            characteristics: "cosmic, mysterious, philosophical, detached".to_string(),
        },
    ]
}
