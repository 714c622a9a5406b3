//! Input/output: configuration, errors, data providers, rendering and the CLI

/// Command-line interface
pub mod cli;
/// Domain constants and defaults
pub mod configuration;
/// Table rendering for terminal output
pub mod display;
/// Error types
pub mod error;
/// Logging setup
pub mod logging;
/// Progress display
pub mod progress;
/// Historical data providers
pub mod provider;
