mod helpers;

pub use helpers::{sample_config, tmp_file_path};

// Re-export common test types
pub use crate::{
    attributes::{Attributes, RAW_PREFIX, RAW_TOKENS},
    builder::{Appended, Builder, Content, Element},
    config::MarkupConfig,
    error::{MarkupError, Result, TemplateErrorKind},
    template::{Template, DEFAULT_EMPTY, DEFAULT_WITH_CONTENT},
};
