//! Settings and profile handling for Stencil.
//! This module provides functionality for locating, loading and saving the
//! settings file and for resolving profiles by name.
//!
//! Keys are serialized in PascalCase (`DefaultProfile`, `Profiles`,
//! `Namespace`, `NamespaceIncGuard`, `CreateRootPath`), so settings files
//! written for the original tool keep working.

use crate::constants::SETTINGS_FILES;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A named generation profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Profile {
    /// Value substituted for `{NAMESPACE}`
    pub namespace: String,

    /// Value substituted for `{NAMESPACEINCGUARD}`
    pub namespace_inc_guard: String,

    /// Root directory generated files are placed under; may be empty
    #[serde(default)]
    pub create_root_path: PathBuf,
}

/// On-disk representation of a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Json,
    Yaml,
}

impl SettingsFormat {
    /// Format implied by a file name: `.yml`/`.yaml` files are YAML,
    /// everything else JSON.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => SettingsFormat::Yaml,
            _ => SettingsFormat::Json,
        }
    }
}

/// The settings file contents: an optional default profile name plus the
/// profiles themselves, kept in file order.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    /// Profile used when an invocation does not name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,

    /// Profiles by name, in declaration order
    #[serde(default)]
    pub profiles: IndexMap<String, Profile>,

    /// Format the settings were parsed from, so they can be saved back
    /// unchanged; `None` for settings built in memory
    #[serde(skip)]
    pub format: Option<SettingsFormat>,
}

impl Settings {
    /// Looks up a profile by name.
    ///
    /// # Errors
    /// * `Error::ProfileNotFound` if no profile has that name
    pub fn profile(&self, name: &str) -> Result<&Profile> {
        self.profiles.get(name).ok_or_else(|| Error::ProfileNotFound(name.to_string()))
    }

    /// Resolves the profile for one invocation.
    ///
    /// An explicitly requested name wins over the persisted default; with
    /// neither present there is nothing to generate against.
    ///
    /// # Errors
    /// * `Error::ProfileNotFound` if the requested or default name is unknown
    /// * `Error::ConfigError` if no name was requested and no default is set
    pub fn resolve_profile(&self, requested: Option<&str>) -> Result<&Profile> {
        match requested.or(self.default_profile.as_deref()) {
            Some(name) => self.profile(name),
            None => Err(Error::ConfigError(
                "no profile selected; pass --profile or set one with 'set-profile'".to_string(),
            )),
        }
    }

    /// Makes `name` the default profile for later invocations.
    ///
    /// # Errors
    /// * `Error::ProfileNotFound` if no profile has that name
    pub fn set_default_profile(&mut self, name: &str) -> Result<()> {
        self.profile(name)?;
        self.default_profile = Some(name.to_string());
        Ok(())
    }
}

/// Locates the settings file.
///
/// An explicit path is taken as-is and must exist. Otherwise the candidates
/// from `SETTINGS_FILES` are tried in the current directory first and next
/// to the executable second.
///
/// # Arguments
/// * `explicit` - Path given on the command line, if any
///
/// # Returns
/// * `Result<PathBuf>` - Path of the first settings file found
///
/// # Errors
/// * `Error::ConfigError` if no settings file exists
pub fn find_settings_file(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        return Err(Error::ConfigError(format!(
            "settings file not found: {}",
            path.display()
        )));
    }

    let mut search_dirs = vec![PathBuf::from(".")];
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    if let Some(dir) = exe_dir {
        search_dirs.push(dir);
    }

    find_settings_in(&search_dirs, &SETTINGS_FILES)
}

/// Searches directories for a settings file, trying multiple file names.
///
/// Every candidate name is tried in one directory before the next directory
/// is consulted.
///
/// # Arguments
/// * `search_dirs` - Directories to search, in precedence order
/// * `files` - Settings file names to try, in precedence order
///
/// # Returns
/// * `Result<PathBuf>` - Path of the first candidate that exists
///
/// # Errors
/// * `Error::ConfigError` if no candidate exists in any directory
pub fn find_settings_in(search_dirs: &[PathBuf], files: &[&str]) -> Result<PathBuf> {
    for dir in search_dirs {
        for file in files {
            let candidate = dir.join(file);
            if candidate.exists() {
                debug!("Found settings file {}", candidate.display());
                return Ok(candidate);
            }
        }
    }

    Err(Error::ConfigError(format!(
        "no settings file found (tried: {})",
        files.join(", ")
    )))
}

/// Loads settings from a file, trying JSON first and YAML second.
///
/// The format that parsed is recorded on the returned settings, so a later
/// [`save_settings`] writes the file back the way it was found regardless of
/// its name.
///
/// # Arguments
/// * `path` - Settings file path
///
/// # Returns
/// * `Result<Settings>` - Parsed settings
///
/// # Errors
/// * `Error::IoError` if the file cannot be read
/// * `Error::ConfigError` if the contents parse as neither format
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    debug!("Loading settings from {}", path.display());
    let content = fs::read_to_string(path).map_err(Error::IoError)?;

    let (mut settings, format) = match serde_json::from_str::<Settings>(&content) {
        Ok(v) => (v, SettingsFormat::Json),
        Err(_) => {
            let v = serde_yaml::from_str(&content)
                .map_err(|e| Error::ConfigError(format!("invalid settings format: {}", e)))?;
            (v, SettingsFormat::Yaml)
        }
    };
    settings.format = Some(format);

    Ok(settings)
}

/// Writes settings back to `path` in the format they were loaded in.
///
/// Settings built in memory carry no format; for those the file name
/// decides, via [`SettingsFormat::for_path`]. JSON is written pretty.
///
/// # Errors
/// * `Error::ConfigError` if serialization fails
/// * `Error::IoError` if the file cannot be written
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let path = path.as_ref();
    let format = settings.format.unwrap_or_else(|| SettingsFormat::for_path(path));

    let content = match format {
        SettingsFormat::Yaml => serde_yaml::to_string(settings)
            .map_err(|e| Error::ConfigError(format!("cannot serialize settings: {}", e)))?,
        SettingsFormat::Json => {
            let mut json = serde_json::to_string_pretty(settings)
                .map_err(|e| Error::ConfigError(format!("cannot serialize settings: {}", e)))?;
            json.push('\n');
            json
        }
    };

    debug!("Saving settings to {}", path.display());
    fs::write(path, content).map_err(Error::IoError)
}
