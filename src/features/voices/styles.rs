//! Signature styles: per-voice structural rewriting
//!
//! Applied after the substitution rules. Each style reshapes casing,
//! punctuation or word order in its voice's manner; every random decision
//! draws from the caller's RNG so output is reproducible under a fixed seed.
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.0.0: Injected RNG; chances read from TransformConfig
//! - 1.0.0: Initial port of the seven styles

use rand::seq::IndexedRandom;
use rand::Rng;
use std::sync::OnceLock;

use crate::core::config::TransformConfig;
use crate::core::text::{capitalize, split_sentences};
use crate::features::voices::catalog::SubstitutionRule;

/// Structural rewrite applied after vocabulary substitution. One variant per
/// voice, so a new voice cannot ship without picking one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureStyle {
    Jarvis,
    TonyStark,
    Sherlock,
    Yoda,
    Hacker,
    Captain,
    Alien,
}

impl SignatureStyle {
    pub fn render<R: Rng + ?Sized>(&self, text: &str, cfg: &TransformConfig, rng: &mut R) -> String {
        match self {
            SignatureStyle::Jarvis => jarvis(text, cfg, rng),
            SignatureStyle::TonyStark => tony_stark(text, cfg, rng),
            SignatureStyle::Sherlock => sherlock(text, cfg, rng),
            SignatureStyle::Yoda => yoda(text, cfg, rng),
            SignatureStyle::Hacker => hacker(text, cfg, rng),
            SignatureStyle::Captain => captain(text, cfg, rng),
            SignatureStyle::Alien => alien(text, cfg, rng),
        }
    }
}

const REPORT_PREFIXES: &[&str] = &["Analysis:", "Processing:", "Report:", "Assessment:", "Diagnostic:"];

fn formal_terms() -> &'static [SubstitutionRule] {
    static TERMS: OnceLock<Vec<SubstitutionRule>> = OnceLock::new();
    TERMS.get_or_init(|| {
        [
            (r"\b(окей|okay)\b", "Affirmative"),
            (r"\b(хорошо|fine)\b", "Satisfactory"),
            (r"\b(плохо|bad)\b", "Unsatisfactory"),
            (r"\b(быстро|quickly)\b", "With efficiency"),
            (r"\b(круто|cool)\b", "Impressive"),
        ]
        .iter()
        .map(|(pattern, replacement)| SubstitutionRule::new(pattern, replacement))
        .collect()
    })
}

/// Formal and precise: every sentence opens with a capital, informal
/// vocabulary is upgraded, and a report prefix sometimes leads.
fn jarvis<R: Rng + ?Sized>(text: &str, cfg: &TransformConfig, rng: &mut R) -> String {
    let mut formatted = Vec::new();
    for sentence in split_sentences(text) {
        let mut words: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();
        if words.is_empty() {
            continue;
        }
        words[0] = capitalize(&words[0]);
        let mut sentence = words.join(" ");
        for rule in formal_terms() {
            sentence = rule.apply(&sentence);
        }
        formatted.push(sentence);
    }

    let result = formatted.join(". ");
    if !result.is_empty() && rng.random_bool(cfg.report_prefix_chance) {
        if let Some(prefix) = REPORT_PREFIXES.choose(rng) {
            return format!("{prefix} {result}");
        }
    }
    result
}

const SARCASTIC_QUIPS: &[&str] = &[
    " Obviously.",
    " Duh.",
    " Tell me something I don't know.",
    " In case you were wondering.",
    " But what do I know?",
];

/// Punctuation energy up, sarcasm optional, one word sometimes shouted.
fn tony_stark<R: Rng + ?Sized>(text: &str, cfg: &TransformConfig, rng: &mut R) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    let mut text = text.replace('.', "!").replace('?', "?!");

    if rng.random_bool(cfg.quip_chance) {
        if let Some(quip) = SARCASTIC_QUIPS.choose(rng) {
            text.push_str(quip);
        }
    }

    let mut words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    if words.is_empty() {
        return text;
    }
    if rng.random_bool(cfg.shout_chance) {
        let at = rng.random_range(0..words.len());
        words[at] = words[at].to_uppercase();
    }
    words.join(" ")
}

const LEAD_INS: &[&str] = &[
    "I observe that ",
    "The evidence clearly shows that ",
    "Elementary deduction reveals that ",
    "My analysis concludes that ",
    "The facts indicate that ",
];

/// Deductive delivery: the first sentence may get a lead-in (lower-casing
/// what follows), the rest are capitalized.
fn sherlock<R: Rng + ?Sized>(text: &str, cfg: &TransformConfig, rng: &mut R) -> String {
    let sentences = split_sentences(text);
    let mut formatted = Vec::with_capacity(sentences.len());
    for (i, sentence) in sentences.iter().enumerate() {
        if i == 0 && rng.random_bool(cfg.lead_in_chance) {
            if let Some(lead_in) = LEAD_INS.choose(rng) {
                formatted.push(format!("{lead_in}{}", sentence.to_lowercase()));
                continue;
            }
        }
        formatted.push(capitalize(sentence));
    }
    formatted.join(". ")
}

const WISDOM_FRAGMENTS: &[&str] = &[
    " Hmm.",
    " Yes.",
    " The Force is strong with this one.",
    " Much to learn, you still have.",
];

fn yoda_terms() -> &'static [SubstitutionRule] {
    static TERMS: OnceLock<Vec<SubstitutionRule>> = OnceLock::new();
    TERMS.get_or_init(|| {
        [
            (r"\byou\b", "you"),
            (r"\byour\b", "yours"),
            (r"\bthe\b", "the"),
            (r"\bmust\b", "must you"),
        ]
        .iter()
        .map(|(pattern, replacement)| SubstitutionRule::new(pattern, replacement))
        .collect()
    })
}

/// Object-first word order: sentences longer than three words are cut at a
/// random point and rejoined tail-before-head, the trailing period riding
/// along to the new end.
fn yoda<R: Rng + ?Sized>(text: &str, cfg: &TransformConfig, rng: &mut R) -> String {
    let mut formatted = Vec::new();
    for sentence in split_sentences(text) {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        let mut rebuilt = if words.len() > 3 {
            let split_point = rng.random_range(1..words.len() - 1);
            let mut reordered: Vec<String> = words[split_point..]
                .iter()
                .chain(words[..split_point].iter())
                .map(|w| w.to_string())
                .collect();
            if let Some(last) = reordered.last_mut() {
                if last.ends_with('.') {
                    last.pop();
                }
            }
            format!("{}.", reordered.join(" "))
        } else {
            sentence.to_string()
        };
        for rule in yoda_terms() {
            rebuilt = rule.apply(&rebuilt);
        }
        formatted.push(rebuilt);
    }

    let mut result = formatted.join(" ");
    if !result.is_empty() && rng.random_bool(cfg.wisdom_chance) {
        if let Some(wisdom) = WISDOM_FRAGMENTS.choose(rng) {
            result.push_str(wisdom);
        }
    }
    result
}

const ACTION_ASIDES: &[&str] = &[
    "*typing furiously*",
    "*brute forcing*",
    "*encrypting*",
    "*decrypting*",
];

const MATRIX_CHARS: &[char] = &['0', '1', '█', '░', '▓'];

fn tech_terms() -> &'static [SubstitutionRule] {
    static TERMS: OnceLock<Vec<SubstitutionRule>> = OnceLock::new();
    TERMS.get_or_init(|| {
        [
            (r"\b(проблема|problem)\b", "bug"),
            (r"\b(решение|solution)\b", "patch"),
            (r"\b(код|code)\b", "source"),
            (r"\b(быстро|quickly)\b", "at 88mph"),
            (r"\b(информация|information)\b", "data stream"),
            (r"\b(смотреть|watch)\b", "monitor"),
            (r"\b(понимать|understand)\b", "comprehend"),
        ]
        .iter()
        .map(|(pattern, replacement)| SubstitutionRule::new(pattern, replacement))
        .collect()
    })
}

/// Terminal cosplay: tech vocabulary, an occasional action aside, and a
/// matrix burst at the end of the odd line.
fn hacker<R: Rng + ?Sized>(text: &str, cfg: &TransformConfig, rng: &mut R) -> String {
    let mut text = text.to_string();
    for rule in tech_terms() {
        text = rule.apply(&text);
    }

    if rng.random_bool(cfg.aside_chance) {
        let mut words: Vec<&str> = text.split_whitespace().collect();
        if !words.is_empty() {
            let at = rng.random_range(0..words.len());
            if let Some(aside) = ACTION_ASIDES.choose(rng) {
                words.insert(at, aside);
            }
            let rebuilt = words.join(" ");
            text = rebuilt;
        }
    }

    let mut lines = Vec::new();
    for line in text.lines() {
        if rng.random_bool(cfg.matrix_chance) {
            let length = rng.random_range(5..=20);
            let burst: String = (0..length)
                .filter_map(|_| MATRIX_CHARS.choose(rng))
                .collect();
            lines.push(format!("{line} [{burst}]"));
        } else {
            lines.push(line.to_string());
        }
    }
    lines.join("\n")
}

const HEROIC_CLOSERS: &[&str] = &[
    " For justice!",
    " For freedom!",
    " We fight as one!",
    " Avengers, assemble!",
];

fn heroic_terms() -> &'static [SubstitutionRule] {
    static TERMS: OnceLock<Vec<SubstitutionRule>> = OnceLock::new();
    TERMS.get_or_init(|| {
        [
            (r"\b(нужно|have to)\b", "must"),
            (r"\b(можем|we can)\b", "will"),
            (r"\b(сделаем|we shall do)\b", "shall accomplish"),
            (r"\b(вместе|together)\b", "as a team"),
            (r"\b(победа|win)\b", "victory"),
        ]
        .iter()
        .map(|(pattern, replacement)| SubstitutionRule::new(pattern, replacement))
        .collect()
    })
}

/// Inspiration at volume: sometimes the whole text is shouted, heroic
/// vocabulary swapped in, a rallying line sometimes closes.
fn captain<R: Rng + ?Sized>(text: &str, cfg: &TransformConfig, rng: &mut R) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    let mut text = if rng.random_bool(cfg.rally_chance) {
        text.to_uppercase()
    } else {
        text.to_string()
    };

    for rule in heroic_terms() {
        text = rule.apply(&text);
    }

    if rng.random_bool(cfg.closer_chance) {
        if let Some(closer) = HEROIC_CLOSERS.choose(rng) {
            text.push_str(closer);
        }
    }
    text
}

const COSMIC_SYMBOLS: &[&str] = &["☆", "☄", "🌌", "🪐", "💫", "🌀"];

const MYSTERIOUS_CLOSERS: &[&str] = &[
    "The ancient ones whisper...",
    "As foretold by the cosmic alignment...",
    "Your primitive minds may struggle to comprehend...",
    "In the quantum foam of reality...",
];

/// Cosmic vocabulary matched by substring containment: a word merely
/// containing a key is replaced wholesale, compound words included.
const COSMIC_TERMS: &[(&[&str], &str)] = &[
    (&["вселенная", "universe"], "the cosmos"),
    (&["звезда", "star"], "celestial body"),
    (&["планета", "planet"], "orb"),
    (&["время", "time"], "the temporal continuum"),
    (&["пространство", "space"], "the quantum field"),
];

fn alien<R: Rng + ?Sized>(text: &str, cfg: &TransformConfig, rng: &mut R) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    let words: Vec<String> = text
        .split_whitespace()
        .map(|word| {
            let lowered = word.to_lowercase();
            let mut replaced = None;
            for (needles, replacement) in COSMIC_TERMS {
                if needles.iter().any(|needle| lowered.contains(needle)) {
                    replaced = Some(*replacement);
                }
            }
            replaced.map(str::to_string).unwrap_or_else(|| word.to_string())
        })
        .collect();
    let mut text = words.join(" ");

    if rng.random_bool(cfg.wrap_chance) {
        if let Some(symbol) = COSMIC_SYMBOLS.choose(rng) {
            text = format!("{symbol} {text} {symbol}");
        }
    }

    let mut sentences: Vec<String> = split_sentences(&text)
        .into_iter()
        .map(str::to_string)
        .collect();
    if sentences.len() > 1 && rng.random_bool(cfg.mystery_chance) {
        if let Some(closer) = MYSTERIOUS_CLOSERS.choose(rng) {
            sentences.push((*closer).to_string());
        }
    }
    sentences.join(". ")
}
