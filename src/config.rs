use crate::error::Result;
use crate::template::Template;
use indexmap::IndexSet;

/// Default indentation unit
pub const DEFAULT_INDENT_UNIT: &str = "    ";

/// Description of a markup language: its tags and how elements are rendered.
///
/// A config is finished before it is handed to a [`Builder`](crate::Builder);
/// from then on it is shared read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkupConfig {
    /// Whitespace repeated once per nesting level
    indent_unit: String,
    /// Tags element creation accepts
    tags: IndexSet<String>,
    /// Template for elements with content
    template_with_content: Template,
    /// Template for self-closing elements
    template_empty: Template,
    /// Text written before the serialized tree by `dump`
    preamble: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
            tags: IndexSet::new(),
            template_with_content: Template::default_with_content(),
            template_empty: Template::default_empty(),
            preamble: String::new(),
        }
    }
}

impl MarkupConfig {
    /// Creates a language over `tags` with default indentation and templates
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// Replaces both templates, validating them first
    pub fn with_templates(mut self, with_content: &str, empty: &str) -> Result<Self> {
        self.template_with_content = Template::parse(with_content)?;
        self.template_empty = Template::parse(empty)?;
        Ok(self)
    }

    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = preamble.into();
        self
    }

    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn allows(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn template_with_content(&self) -> &Template {
        &self.template_with_content
    }

    pub fn template_empty(&self) -> &Template {
        &self.template_empty
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The indentation for `level` nesting levels
    pub fn indent(&self, level: usize) -> String {
        self.indent_unit.repeat(level)
    }
}
