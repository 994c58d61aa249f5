//! Template storage for Stencil.
//! Loads the header and implementation template texts from the templates
//! directory, falling back to the built-in defaults when no custom file
//! exists.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Built-in header template, used when `templates/class.h` is absent.
pub const DEFAULT_HEADER_TEMPLATE: &str = r#"#ifndef {NAMESPACEINCGUARD}_{CLASSNAMEINCGUARD}_H
#define {NAMESPACEINCGUARD}_{CLASSNAMEINCGUARD}_H

namespace {NAMESPACE}
{

class {CLASSNAME}
{
public:
    {CLASSNAME}();
    ~{CLASSNAME}();
};

} // namespace {NAMESPACE}

#endif // {NAMESPACEINCGUARD}_{CLASSNAMEINCGUARD}_H
"#;

/// Built-in implementation template, used when `templates/class.cpp` is absent.
pub const DEFAULT_IMPLEMENTATION_TEMPLATE: &str = r#"#include "{INCLUDEHEADER}"

namespace {NAMESPACE}
{

{CLASSNAME}::{CLASSNAME}()
{
}

{CLASSNAME}::~{CLASSNAME}()
{
}

} // namespace {NAMESPACE}
"#;

/// The two template kinds a class generation run renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// The `.h` file template
    Header,
    /// The `.cpp` file template
    Implementation,
}

impl TemplateKind {
    /// Both kinds, in the order they are rendered and written.
    pub const ALL: [TemplateKind; 2] = [TemplateKind::Header, TemplateKind::Implementation];

    /// File name of the custom template for this kind.
    pub fn file_name(self) -> &'static str {
        match self {
            TemplateKind::Header => "class.h",
            TemplateKind::Implementation => "class.cpp",
        }
    }

    /// Extension of the generated file for this kind.
    pub fn extension(self) -> &'static str {
        match self {
            TemplateKind::Header => "h",
            TemplateKind::Implementation => "cpp",
        }
    }

    /// Built-in template text for this kind.
    pub fn builtin(self) -> &'static str {
        match self {
            TemplateKind::Header => DEFAULT_HEADER_TEMPLATE,
            TemplateKind::Implementation => DEFAULT_IMPLEMENTATION_TEMPLATE,
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateKind::Header => write!(f, "header"),
            TemplateKind::Implementation => write!(f, "implementation"),
        }
    }
}

/// Loads template texts from a templates directory.
pub struct TemplateStore {
    templates_dir: PathBuf,
}

impl TemplateStore {
    /// Creates a store reading custom templates from `templates_dir`.
    pub fn new<P: Into<PathBuf>>(templates_dir: P) -> Self {
        Self { templates_dir: templates_dir.into() }
    }

    /// Path a custom template of `kind` would be read from.
    pub fn template_path(&self, kind: TemplateKind) -> PathBuf {
        self.templates_dir.join(kind.file_name())
    }

    /// Loads the template text for `kind`.
    ///
    /// A custom file always wins; a missing file falls back to the built-in
    /// template for that kind.
    ///
    /// # Errors
    /// * `Error::TemplateError` if a custom file exists but cannot be read
    pub fn load(&self, kind: TemplateKind) -> Result<String> {
        let path = self.template_path(kind);
        if path.exists() {
            debug!("Loading {} template from {}", kind, path.display());
            return fs::read_to_string(&path).map_err(|e| {
                Error::TemplateError(format!("failed to read '{}': {}", path.display(), e))
            });
        }

        debug!("No custom {} template at {}, using the built-in one", kind, path.display());
        Ok(kind.builtin().to_string())
    }
}
