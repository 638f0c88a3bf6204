// Core layer - configuration and text helpers
pub mod core;

// Features layer - catalog, transformation, session state, formatting
pub mod features;

// Application layer - command parsing and dispatch
pub mod commands;

// Re-export core config for convenience
pub use core::TransformConfig;

// Re-export feature items
pub use features::{
    // Catalog
    Persona, PersonaInfo, SignatureStyle, SubstitutionRule, VoiceCatalog, DEFAULT_VOICE,
    // Transformation
    Transformer,
    // Session state
    VoiceSession,
    // Formatting
    ResponseFormatter,
};

// Re-export command layer items
pub use commands::{CommandContext, CommandRegistry, Router, VoiceCommand, COMMAND_PREFIX};
