//! # Feature: Voice System
//!
//! Rule-based persona text rewriting with 7 distinct voices (jarvis,
//! tony_stark, sherlock, yoda, hacker, captain, alien). Each voice bundles
//! vocabulary substitutions, stock phrases and a signature style that
//! restructures casing, punctuation or word order.
//!
//! - **Version**: 2.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.1.0: PersonaInfo summaries with serde support
//! - 2.0.0: Seedable RNG injection, chances moved to TransformConfig
//! - 1.0.0: Initial release with 7 voices

pub mod catalog;
pub mod styles;
pub mod transformer;

pub use catalog::{Persona, PersonaInfo, SubstitutionRule, VoiceCatalog, DEFAULT_VOICE};
pub use styles::SignatureStyle;
pub use transformer::Transformer;
