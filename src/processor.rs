//! Core class generation orchestration.
//! Combines the identifier conversion, the template store and a renderer to
//! turn one class name into the header/implementation file pair.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    config::Profile,
    error::{Error, Result},
    ident,
    prompt::Prompter,
    renderer::{Substitutions, TemplateRenderer},
    template::{TemplateKind, TemplateStore},
};

/// One requested class: the name plus the optional target directories,
/// both relative to the profile's root path.
#[derive(Debug, Clone, Default)]
pub struct ClassSpec {
    /// Class name as typed by the user
    pub name: String,
    /// Directory for the header file
    pub header_dir: Option<PathBuf>,
    /// Directory for the implementation file; the header directory when absent
    pub implementation_dir: Option<PathBuf>,
}

/// A rendered file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePlan {
    /// Which template produced this file
    pub kind: TemplateKind,
    /// Where the file goes
    pub target: PathBuf,
    /// Rendered file contents
    pub content: String,
}

/// What [`Processor::execute`] did with one planned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// The file was written
    Created,
    /// The file existed and the overwrite was declined
    Skipped,
}

impl std::fmt::Display for FileAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileAction::Created => write!(f, "Created"),
            FileAction::Skipped => write!(f, "Skipped"),
        }
    }
}

/// Renders and writes the file pair for a class against one profile.
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    store: &'a TemplateStore,
    profile: &'a Profile,
    prompt: &'a dyn Prompter,
    force: bool,
}

impl<'a> Processor<'a> {
    /// Creates a new Processor instance.
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        store: &'a TemplateStore,
        profile: &'a Profile,
        prompt: &'a dyn Prompter,
        force: bool,
    ) -> Self {
        Self { engine, store, profile, prompt, force }
    }

    /// Renders both templates for `spec` and resolves their target paths.
    ///
    /// The file stem is the snake_case form of the class name; the
    /// `{INCLUDEHEADER}` value is the header file name without directories,
    /// so the generated include line works wherever the pair is placed.
    ///
    /// # Returns
    /// * `Result<Vec<FilePlan>>` - Header plan first, implementation second
    ///
    /// # Errors
    /// * `Error::ValidationError` for blank names or names with separators
    /// * `Error::TemplateError` if a custom template cannot be read
    pub fn plan(&self, spec: &ClassSpec) -> Result<Vec<FilePlan>> {
        let class_name = spec.name.trim();
        if class_name.is_empty() {
            return Err(Error::ValidationError("class name must not be empty".to_string()));
        }
        if class_name.contains(['/', '\\']) {
            return Err(Error::ValidationError(
                "class name must not contain path separators".to_string(),
            ));
        }

        let stem = ident::to_snake_case(class_name);
        let header_name = format!("{}.{}", stem, TemplateKind::Header.extension());
        debug!("Class file stem: '{}'", stem);

        let substitutions = Substitutions {
            namespace: self.profile.namespace.clone(),
            namespace_inc_guard: self.profile.namespace_inc_guard.clone(),
            class_name: class_name.to_string(),
            class_name_inc_guard: stem.clone(),
            include_header: header_name.clone(),
        };

        let header_dir = self.target_dir(spec.header_dir.as_deref());
        let implementation_dir =
            self.target_dir(spec.implementation_dir.as_deref().or(spec.header_dir.as_deref()));

        let mut plans = Vec::with_capacity(TemplateKind::ALL.len());
        for kind in TemplateKind::ALL {
            let template = self.store.load(kind)?;
            let target_dir = match kind {
                TemplateKind::Header => &header_dir,
                TemplateKind::Implementation => &implementation_dir,
            };
            plans.push(FilePlan {
                kind,
                target: target_dir.join(format!("{}.{}", stem, kind.extension())),
                content: self.engine.render(&template, &substitutions),
            });
        }

        Ok(plans)
    }

    /// Writes one planned file.
    ///
    /// An existing file is only overwritten after confirmation, unless the
    /// processor was created with `force`; a declined overwrite leaves the
    /// file untouched.
    ///
    /// # Errors
    /// * `Error::PromptError` if the confirmation cannot be read
    /// * `Error::IoError` if the file cannot be written
    pub fn execute(&self, plan: &FilePlan) -> Result<FileAction> {
        if plan.target.exists()
            && !self.force
            && !self.prompt.confirm(&format!(
                "File '{}' already exists. Overwrite?",
                plan.target.display()
            ))?
        {
            return Ok(FileAction::Skipped);
        }

        write_file(&plan.content, &plan.target)?;
        Ok(FileAction::Created)
    }

    fn target_dir(&self, relative: Option<&Path>) -> PathBuf {
        match relative {
            Some(dir) => self.profile.create_root_path.join(dir),
            None => self.profile.create_root_path.clone(),
        }
    }
}

/// Writes rendered content to `dest_path`, resolving relative paths against
/// the current directory and creating missing parent directories.
///
/// # Errors
/// * `Error::IoError` if a directory or the file cannot be created
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let base_path = std::env::current_dir().unwrap_or_default();
    let abs_path = if dest_path.is_absolute() {
        dest_path.to_path_buf()
    } else {
        base_path.join(dest_path)
    };

    if let Some(parent) = abs_path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(abs_path, content).map_err(Error::IoError)
}
