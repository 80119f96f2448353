//! taglib: a configuration-driven markup tree builder
//!
//! This crate provides functionality to:
//! - Describe a markup language as a tag set plus two element templates
//! - Build nested element trees through a fluent, stack-based builder
//! - Serialize trees into indented markup text or write them to a file
//! - Use predeclared HTML and SVG vocabularies with per-tag shortcuts
//!
//! # Examples
//! ```
//! use taglib::{Attributes, Builder, MarkupConfig, Result};
//!
//! fn example() -> Result<()> {
//!     let config = MarkupConfig::new(["a", "b"]).with_indent_unit("  ");
//!     let mut root = Builder::new(config);
//!     let a = root.open("a", Attributes::new());
//!     a.element("b", "", [("href", "x")]);
//!     assert_eq!(root.serialize(0), "\n<a>\n<b href=\"x\"/>\n</a>");
//!     root.dump("links.xml")
//! }
//! ```

pub mod attributes;
pub mod builder;
pub mod config;
pub mod error;
pub mod language;
pub mod template;

#[doc(hidden)]
pub mod test_utils;

// Re-exports
pub use attributes::Attributes;
pub use builder::{Appended, Builder, Content, Element};
pub use config::MarkupConfig;
pub use error::{MarkupError, Result, TemplateErrorKind};
pub use template::{Placeholder, Template};
