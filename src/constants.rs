//! Common constants used throughout the Stencil application.

/// Supported settings file names, tried in order
pub const SETTINGS_FILES: [&str; 3] = ["stencil.json", "stencil.yml", "stencil.yaml"];

/// Directory with custom template files, next to the settings file
pub const TEMPLATES_DIR: &str = "templates";
