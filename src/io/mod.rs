//! Configuration, errors and the command-line surface

/// Command-line parsing and command execution
pub mod cli;
/// Generation constants and map size presets
pub mod configuration;
/// Error types for generation and output
pub mod error;
/// Plain-text rendering of tiles and cells
pub mod preview;
/// Survey progress display
pub mod progress;
