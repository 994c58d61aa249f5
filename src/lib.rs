//! Stencil is a template-driven generator for C++ class file pairs.
//! It substitutes a fixed set of placeholders into a header and an
//! implementation template, using namespace and path values from a named
//! profile in the settings file.

/// Command-line interface module for the Stencil application
pub mod cli;

/// Settings and profile handling
/// Supports JSON and YAML formats (stencil.json, stencil.yml, stencil.yaml)
pub mod config;

/// Common constants used throughout the application
pub mod constants;

/// Error types and handling for the Stencil application
pub mod error;

/// Identifier case conversion
/// Derives file stems and include-guard parts from class names
pub mod ident;

/// Logger initialization
pub mod logger;

/// Core class generation orchestration
/// Combines all components to produce the header/implementation pair
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Placeholder substitution for template text
pub mod renderer;

/// Template storage and the built-in template texts
pub mod template;
