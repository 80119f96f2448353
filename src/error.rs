//! Error types for taglib

use std::{fmt, io, path::PathBuf};
use thiserror::Error;

/// Reason a serialization template was rejected
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateErrorKind {
    UnknownPlaceholder { name: String },
    UnterminatedPlaceholder { offset: usize },
    UnmatchedBrace { offset: usize },
}

impl fmt::Display for TemplateErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPlaceholder { name } => write!(f, "unknown placeholder {{{name}}}"),
            Self::UnterminatedPlaceholder { offset } => {
                write!(f, "unterminated placeholder at offset {offset}")
            }
            Self::UnmatchedBrace { offset } => write!(f, "unmatched '}}' at offset {offset}"),
        }
    }
}

#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("unrecognized language element <{tag}>")]
    UnknownTag { tag: String },

    #[error("invalid template {template:?}: {kind}")]
    Template {
        template: String,
        kind: TemplateErrorKind,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot write markup document to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MarkupError {
    pub fn unknown_tag(tag: impl Into<String>) -> Self {
        Self::UnknownTag { tag: tag.into() }
    }

    pub fn template(template: impl Into<String>, kind: TemplateErrorKind) -> Self {
        Self::Template {
            template: template.into(),
            kind,
        }
    }
}

/// Result type alias for taglib
pub type Result<T> = std::result::Result<T, MarkupError>;
