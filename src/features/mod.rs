//! # Features Layer
//!
//! Feature modules of the voice engine: the voice catalog and transformation
//! pipeline, per-user session state, and response formatting.
//!
//! - **Version**: 2.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.1.0: PersonaInfo summaries
//! - 2.0.0: Seedable RNG injection throughout
//! - 1.0.0: Initial layering

pub mod formatter;
pub mod session;
pub mod voices;

// Re-export feature items
pub use formatter::ResponseFormatter;
pub use session::VoiceSession;
pub use voices::{
    Persona, PersonaInfo, SignatureStyle, SubstitutionRule, Transformer, VoiceCatalog,
    DEFAULT_VOICE,
};
