//! Element templates.
//!
//! A template is plain text with `{name}` placeholders, the same shape as a
//! Python format string: `{{` and `}}` stand for literal braces. Templates are
//! parsed once when a [`MarkupConfig`](crate::MarkupConfig) is built, so
//! rendering an element never fails.

use crate::error::{MarkupError, Result, TemplateErrorKind};

/// Default template for elements that carry content
pub const DEFAULT_WITH_CONTENT: &str = "{fh}<{tag}{attrib}>{fch}{content}{ft}</{tag}>";

/// Default template for self-closing elements
pub const DEFAULT_EMPTY: &str = "{fh}<{tag}{attrib}/>";

/// A named slot a template may reference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `{fh}`: whitespace before the opening tag
    Head,
    /// `{tag}`
    Tag,
    /// `{attrib}`: the formatted attribute string
    Attributes,
    /// `{fch}`: whitespace before the content
    ChildHead,
    /// `{content}`
    Content,
    /// `{ft}`: whitespace before the closing tag
    Tail,
}

impl Placeholder {
    pub const ALL: [Self; 6] = [
        Self::Head,
        Self::Tag,
        Self::Attributes,
        Self::ChildHead,
        Self::Content,
        Self::Tail,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Head => "fh",
            Self::Tag => "tag",
            Self::Attributes => "attrib",
            Self::ChildHead => "fch",
            Self::Content => "content",
            Self::Tail => "ft",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Segment {
    Literal(String),
    Slot(Placeholder),
}

/// Values substituted into a template
#[derive(Clone, Copy, Debug, Default)]
pub struct Fields<'a> {
    pub head: &'a str,
    pub tag: &'a str,
    pub attributes: &'a str,
    pub child_head: &'a str,
    pub content: &'a str,
    pub tail: &'a str,
}

impl<'a> Fields<'a> {
    fn get(&self, placeholder: Placeholder) -> &'a str {
        match placeholder {
            Placeholder::Head => self.head,
            Placeholder::Tag => self.tag,
            Placeholder::Attributes => self.attributes,
            Placeholder::ChildHead => self.child_head,
            Placeholder::Content => self.content,
            Placeholder::Tail => self.tail,
        }
    }
}

/// A parsed template
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses `source`, rejecting unknown placeholders and unbalanced braces
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            match ch {
                '{' => {
                    if chars.next_if(|&(_, c)| c == '{').is_some() {
                        literal.push('{');
                        continue;
                    }

                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, c)) => name.push(c),
                            None => {
                                return Err(MarkupError::template(
                                    source,
                                    TemplateErrorKind::UnterminatedPlaceholder { offset },
                                ))
                            }
                        }
                    }

                    let Some(slot) = Placeholder::from_name(&name) else {
                        return Err(MarkupError::template(
                            source,
                            TemplateErrorKind::UnknownPlaceholder { name },
                        ));
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Slot(slot));
                }
                '}' => {
                    if chars.next_if(|&(_, c)| c == '}').is_none() {
                        return Err(MarkupError::template(
                            source,
                            TemplateErrorKind::UnmatchedBrace { offset },
                        ));
                    }
                    literal.push('}');
                }
                _ => literal.push(ch),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The text this template was parsed from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the template references `placeholder` at least once
    pub fn uses(&self, placeholder: Placeholder) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Slot(p) if *p == placeholder))
    }

    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether rendering produces any text, given which placeholders are filled
    pub(crate) fn renders_with(&self, filled: impl Fn(Placeholder) -> bool) -> bool {
        self.segments.iter().any(|segment| match segment {
            Segment::Literal(text) => !text.is_empty(),
            Segment::Slot(placeholder) => filled(*placeholder),
        })
    }

    /// Appends the rendered template to `out`
    pub fn render_into(&self, out: &mut String, fields: &Fields<'_>) {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(placeholder) => out.push_str(fields.get(*placeholder)),
            }
        }
    }

    pub fn render(&self, fields: &Fields<'_>) -> String {
        let mut out = String::new();
        self.render_into(&mut out, fields);
        out
    }

    pub(crate) fn default_with_content() -> Self {
        use Placeholder::*;

        Self {
            source: DEFAULT_WITH_CONTENT.to_string(),
            segments: vec![
                Segment::Slot(Head),
                Segment::Literal("<".to_string()),
                Segment::Slot(Tag),
                Segment::Slot(Attributes),
                Segment::Literal(">".to_string()),
                Segment::Slot(ChildHead),
                Segment::Slot(Content),
                Segment::Slot(Tail),
                Segment::Literal("</".to_string()),
                Segment::Slot(Tag),
                Segment::Literal(">".to_string()),
            ],
        }
    }

    pub(crate) fn default_empty() -> Self {
        use Placeholder::*;

        Self {
            source: DEFAULT_EMPTY.to_string(),
            segments: vec![
                Segment::Slot(Head),
                Segment::Literal("<".to_string()),
                Segment::Slot(Tag),
                Segment::Slot(Attributes),
                Segment::Literal("/>".to_string()),
            ],
        }
    }
}
