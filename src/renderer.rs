//! Placeholder substitution for template text.
//! Replacement is plain literal substring replacement: no escaping, no
//! conditionals, no nesting. Braces outside a recognized marker pass through
//! untouched, which is what lets the templates contain C++ block braces.

/// The placeholder markers recognized in template text.
///
/// The variant order is the order in which [`SequentialRenderer`] performs
/// its replacement passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Namespace,
    NamespaceIncGuard,
    ClassName,
    ClassNameIncGuard,
    IncludeHeader,
}

impl Placeholder {
    /// All placeholders, in substitution order.
    pub const ALL: [Placeholder; 5] = [
        Placeholder::Namespace,
        Placeholder::NamespaceIncGuard,
        Placeholder::ClassName,
        Placeholder::ClassNameIncGuard,
        Placeholder::IncludeHeader,
    ];

    /// The literal marker text this placeholder matches in a template.
    pub fn marker(self) -> &'static str {
        match self {
            Placeholder::Namespace => "{NAMESPACE}",
            Placeholder::NamespaceIncGuard => "{NAMESPACEINCGUARD}",
            Placeholder::ClassName => "{CLASSNAME}",
            Placeholder::ClassNameIncGuard => "{CLASSNAMEINCGUARD}",
            Placeholder::IncludeHeader => "{INCLUDEHEADER}",
        }
    }
}

/// Replacement values for the five placeholders.
///
/// One field per marker, so a value exists for every placeholder by
/// construction and a renderer never has to handle a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    /// Replaces `{NAMESPACE}`
    pub namespace: String,
    /// Replaces `{NAMESPACEINCGUARD}`
    pub namespace_inc_guard: String,
    /// Replaces `{CLASSNAME}`
    pub class_name: String,
    /// Replaces `{CLASSNAMEINCGUARD}`
    pub class_name_inc_guard: String,
    /// Replaces `{INCLUDEHEADER}`
    pub include_header: String,
}

impl Substitutions {
    /// Returns the replacement value for `placeholder`.
    pub fn value(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Namespace => &self.namespace,
            Placeholder::NamespaceIncGuard => &self.namespace_inc_guard,
            Placeholder::ClassName => &self.class_name,
            Placeholder::ClassNameIncGuard => &self.class_name_inc_guard,
            Placeholder::IncludeHeader => &self.include_header,
        }
    }
}

/// Trait for placeholder substitution engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given substitutions.
    ///
    /// Total over its inputs: every occurrence of a recognized marker is
    /// replaced, markers not present are no-ops, and everything else passes
    /// through unchanged.
    ///
    /// # Arguments
    /// * `template` - Template text to render
    /// * `substitutions` - Replacement values for the five markers
    ///
    /// # Returns
    /// * `String` - Rendered text
    fn render(&self, template: &str, substitutions: &Substitutions) -> String;
}

/// Renderer that runs one replacement pass per placeholder, in
/// [`Placeholder::ALL`] order.
///
/// This is the compatible default. Because the passes are sequential, a
/// substitution value that itself contains a later marker's literal text is
/// picked up by that later pass; a value containing an earlier marker is
/// left alone. [`SinglePassRenderer`] never re-substitutes either way.
pub struct SequentialRenderer;

impl SequentialRenderer {
    /// Creates a new SequentialRenderer instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SequentialRenderer {
    fn default() -> Self {
        SequentialRenderer::new()
    }
}

impl TemplateRenderer for SequentialRenderer {
    fn render(&self, template: &str, substitutions: &Substitutions) -> String {
        Placeholder::ALL
            .iter()
            .fold(template.to_string(), |rendered, &placeholder| {
                rendered.replace(placeholder.marker(), substitutions.value(placeholder))
            })
    }
}

/// Renderer that resolves all placeholders in a single left-to-right scan.
///
/// Substituted values are emitted verbatim and never rescanned, so marker
/// text inside a value stays literal. Stricter than [`SequentialRenderer`];
/// output differs only when a substitution value contains a marker.
pub struct SinglePassRenderer;

impl SinglePassRenderer {
    /// Creates a new SinglePassRenderer instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SinglePassRenderer {
    fn default() -> Self {
        SinglePassRenderer::new()
    }
}

impl TemplateRenderer for SinglePassRenderer {
    fn render(&self, template: &str, substitutions: &Substitutions) -> String {
        let mut rendered = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(brace) = rest.find('{') {
            rendered.push_str(&rest[..brace]);
            let tail = &rest[brace..];

            // No marker is a prefix of another, so the first match is the
            // only possible one.
            match Placeholder::ALL.iter().find(|p| tail.starts_with(p.marker())) {
                Some(&placeholder) => {
                    rendered.push_str(substitutions.value(placeholder));
                    rest = &tail[placeholder.marker().len()..];
                }
                None => {
                    rendered.push('{');
                    rest = &tail[1..];
                }
            }
        }

        rendered.push_str(rest);
        rendered
    }
}
