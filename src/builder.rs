//! Stack-based markup tree builder.
//!
//! A [`Builder`] is a command buffer: every call to [`Builder::element`]
//! appends one [`Element`] to its stack, and serialization walks the stack in
//! insertion order. An element created without literal content gets a fresh
//! child `Builder` as its content, which is handed back to the caller so the
//! tree grows by chaining calls on the returned builder.

use std::{
    collections::HashSet,
    fmt,
    fs::File,
    io::{BufWriter, Write},
    mem,
    path::Path,
    ptr,
    sync::Arc,
};

use tracing::{debug, error, info, instrument};

use crate::{
    attributes::Attributes,
    config::MarkupConfig,
    error::{MarkupError, Result},
    template::{Placeholder, Segment, Template},
};

/// Content of an element
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    /// Text placed verbatim between the tags
    Literal(String),
    /// A container's children
    Nested(Builder),
}

/// One entry on a builder's stack
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: String,
    content: Content,
    attributes: String,
}

impl Element {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The formatted attribute string, empty when there are no attributes
    pub fn attributes(&self) -> &str {
        &self.attributes
    }

    /// The child builder of a container element
    pub fn nested(&self) -> Option<&Builder> {
        match &self.content {
            Content::Nested(child) => Some(child),
            Content::Literal(_) => None,
        }
    }

    fn nested_mut(&mut self) -> Option<&mut Builder> {
        match &mut self.content {
            Content::Nested(child) => Some(child),
            Content::Literal(_) => None,
        }
    }
}

/// What [`Builder::element`] hands back
#[derive(Debug)]
pub enum Appended<'a> {
    /// The literal content, unchanged
    Literal(&'a str),
    /// The builder created for a container element
    Nested(&'a mut Builder),
}

impl<'a> Appended<'a> {
    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested(_))
    }

    pub fn literal(&self) -> Option<&'a str> {
        match self {
            Self::Literal(text) => Some(*text),
            Self::Nested(_) => None,
        }
    }

    pub fn into_builder(self) -> Option<&'a mut Builder> {
        match self {
            Self::Nested(builder) => Some(builder),
            Self::Literal(_) => None,
        }
    }
}

/// Markup tree node bound to a [`MarkupConfig`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Builder {
    config: Arc<MarkupConfig>,
    elements: Vec<Element>,
}

impl Builder {
    pub fn new(config: impl Into<Arc<MarkupConfig>>) -> Self {
        Self {
            config: config.into(),
            elements: Vec::new(),
        }
    }

    pub fn config(&self) -> &MarkupConfig {
        &self.config
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends a `tag` element.
    ///
    /// Non-empty `content` is stored as literal text and returned unchanged.
    /// Empty `content` makes the element a container: a new child builder is
    /// stored as its content and returned, so further calls on it populate
    /// the container.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is not part of the builder's language. Asking for an
    /// undeclared tag is a programming error; use [`Builder::try_element`]
    /// when the tag comes from untrusted input.
    #[track_caller]
    pub fn element<'a>(
        &'a mut self,
        tag: &str,
        content: &'a str,
        attributes: impl Into<Attributes>,
    ) -> Appended<'a> {
        match self.try_element(tag, content, attributes) {
            Ok(appended) => appended,
            #[allow(clippy::panic)]
            Err(err) => {
                error!("{}", err);
                panic!("{err}")
            }
        }
    }

    /// Fallible form of [`Builder::element`]; the stack is untouched on error
    pub fn try_element<'a>(
        &'a mut self,
        tag: &str,
        content: &'a str,
        attributes: impl Into<Attributes>,
    ) -> Result<Appended<'a>> {
        if content.is_empty() {
            return self.try_open(tag, attributes).map(Appended::Nested);
        }

        self.check_tag(tag)?;
        debug!(tag, nested = false, "element");
        self.elements.push(Element {
            tag: tag.to_string(),
            content: Content::Literal(content.to_string()),
            attributes: attributes.into().render(),
        });
        Ok(Appended::Literal(content))
    }

    /// Appends a container element and returns its child builder
    ///
    /// # Panics
    ///
    /// Panics if `tag` is not part of the builder's language.
    #[track_caller]
    pub fn open(&mut self, tag: &str, attributes: impl Into<Attributes>) -> &mut Self {
        match self.try_open(tag, attributes) {
            Ok(child) => child,
            #[allow(clippy::panic)]
            Err(err) => {
                error!("{}", err);
                panic!("{err}")
            }
        }
    }

    /// Fallible form of [`Builder::open`]
    pub fn try_open(&mut self, tag: &str, attributes: impl Into<Attributes>) -> Result<&mut Self> {
        self.check_tag(tag)?;
        debug!(tag, nested = true, "element");

        self.elements.push(Element {
            tag: tag.to_string(),
            content: Content::Nested(Self::new(Arc::clone(&self.config))),
            attributes: attributes.into().render(),
        });
        self.elements
            .last_mut()
            .and_then(Element::nested_mut)
            .ok_or_else(|| MarkupError::unknown_tag(tag))
    }

    /// Clears the stack
    pub fn reset(&mut self) {
        debug!(dropped = self.elements.len(), "reset");
        self.elements.clear();
    }

    /// Renders the stack as markup text.
    ///
    /// Elements of this builder open on a new line indented by
    /// `indent_level - 1` units (none at the root), literal content sits one
    /// unit deeper, and nested builders render at `indent_level + 1`.
    pub fn serialize(&self, indent_level: usize) -> String {
        let mut out = String::new();
        self.serialize_into(&mut out, indent_level);
        out
    }

    // Walks the tree with an explicit task stack so depth is bounded by
    // memory, not by the call stack.
    fn serialize_into(&self, out: &mut String, indent_level: usize) {
        let filled = self.filled_builders();
        let mut tasks = vec![Task::Elements {
            builder: self,
            next: 0,
            level: indent_level,
        }];

        while let Some(task) = tasks.pop() {
            match task {
                Task::Elements {
                    builder,
                    next,
                    level,
                } => {
                    let Some(element) = builder.elements.get(next) else {
                        continue;
                    };
                    tasks.push(Task::Elements {
                        builder,
                        next: next + 1,
                        level,
                    });

                    let config: &MarkupConfig = &builder.config;
                    let template = if element.has_content(&filled) {
                        config.template_with_content()
                    } else {
                        config.template_empty()
                    };
                    tasks.push(Task::Render {
                        element,
                        config,
                        template,
                        next: 0,
                        level,
                    });
                }
                Task::Render {
                    element,
                    config,
                    template,
                    next,
                    level,
                } => {
                    for (index, segment) in template.segments().iter().enumerate().skip(next) {
                        let slot = match segment {
                            Segment::Literal(text) => {
                                out.push_str(text);
                                continue;
                            }
                            Segment::Slot(slot) => *slot,
                        };
                        match (slot, &element.content) {
                            (Placeholder::Head | Placeholder::Tail, _) => {
                                push_line(out, config.indent_unit(), level.saturating_sub(1));
                            }
                            (Placeholder::Tag, _) => out.push_str(&element.tag),
                            (Placeholder::Attributes, _) => out.push_str(&element.attributes),
                            (Placeholder::ChildHead, Content::Literal(_)) => {
                                push_line(out, config.indent_unit(), level);
                            }
                            (Placeholder::ChildHead, Content::Nested(_)) => {}
                            (Placeholder::Content, Content::Literal(text)) => out.push_str(text),
                            (Placeholder::Content, Content::Nested(child)) => {
                                tasks.push(Task::Render {
                                    element,
                                    config,
                                    template,
                                    next: index + 1,
                                    level,
                                });
                                tasks.push(Task::Elements {
                                    builder: child,
                                    next: 0,
                                    level: level + 1,
                                });
                                break;
                            }
                        }
                    }
                }
            }
        }
    }

    /// Builders in this tree whose serialization is non-empty, found bottom-up
    fn filled_builders(&self) -> HashSet<*const Self> {
        let mut filled = HashSet::new();
        let mut pending = vec![(self, false)];

        while let Some((builder, expanded)) = pending.pop() {
            if !expanded {
                pending.push((builder, true));
                pending.extend(
                    builder
                        .elements
                        .iter()
                        .filter_map(Element::nested)
                        .map(|child| (child, false)),
                );
                continue;
            }

            let renders = builder.elements.iter().any(|element| {
                let has_content = element.has_content(&filled);
                let template = if has_content {
                    builder.config.template_with_content()
                } else {
                    builder.config.template_empty()
                };
                element.renders_with(template, has_content)
            });
            if renders {
                filled.insert(ptr::from_ref(builder));
            }
        }
        filled
    }

    /// The preamble followed by the serialized tree
    pub fn to_document(&self) -> String {
        let mut document = self.config.preamble().to_string();
        self.serialize_into(&mut document, 0);
        document
    }

    /// Writes the full document to `writer`
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.to_document().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the full document to the file at `path`, replacing it
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn dump(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let document = self.to_document();
        let result = File::create(path).and_then(|file| {
            let mut writer = BufWriter::new(file);
            writer.write_all(document.as_bytes())?;
            writer.flush()
        });

        match result {
            Ok(()) => {
                info!(bytes = document.len(), "markup document written");
                Ok(())
            }
            Err(source) => {
                error!("failed to write markup document: {}", source);
                Err(MarkupError::Write {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    fn check_tag(&self, tag: &str) -> Result<()> {
        if self.config.allows(tag) {
            Ok(())
        } else {
            debug!(tag, "unrecognized language element");
            Err(MarkupError::unknown_tag(tag))
        }
    }
}

impl Element {
    fn has_content(&self, filled: &HashSet<*const Builder>) -> bool {
        match &self.content {
            Content::Literal(text) => !text.is_empty(),
            Content::Nested(child) => filled.contains(&ptr::from_ref(child)),
        }
    }

    fn renders_with(&self, template: &Template, has_content: bool) -> bool {
        template.renders_with(|slot| match slot {
            Placeholder::Head | Placeholder::Tail => true,
            Placeholder::Tag => !self.tag.is_empty(),
            Placeholder::Attributes => !self.attributes.is_empty(),
            Placeholder::ChildHead => matches!(self.content, Content::Literal(_)),
            Placeholder::Content => has_content,
        })
    }
}

enum Task<'a> {
    /// Render `builder`'s elements from index `next` on
    Elements {
        builder: &'a Builder,
        next: usize,
        level: usize,
    },
    /// Render `template` for `element` from segment `next` on
    Render {
        element: &'a Element,
        config: &'a MarkupConfig,
        template: &'a Template,
        next: usize,
        level: usize,
    },
}

fn push_line(out: &mut String, unit: &str, level: usize) {
    out.push('\n');
    for _ in 0..level {
        out.push_str(unit);
    }
}

// Unlinks nested builders one at a time; the default drop recurses once per
// nesting level.
impl Drop for Builder {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.elements);
        while let Some(mut element) = pending.pop() {
            if let Some(child) = element.nested_mut() {
                pending.append(&mut child.elements);
            }
        }
    }
}

impl fmt::Display for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize(0))
    }
}
