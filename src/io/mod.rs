//! Collaborators around the core: command line, images, progress and errors

/// Command-line interface over the model and analyzer
pub mod cli;
/// Physical defaults and tuning constants
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Measured row loading and pattern rendering
pub mod image;
/// Progress display for parameter sweeps
pub mod progress;
