//! Predeclared markup languages and per-tag shortcuts.
//!
//! [`markup_language!`](crate::markup_language) turns a list of
//! `method => "tag"` pairs into a tag list and a trait implemented for
//! [`Builder`](crate::Builder), so `body.p("Hello", Attributes::new())` reads
//! like the markup it produces. The shortcuts carry no behavior of their own:
//! each one calls [`Builder::element`](crate::Builder::element) with its tag.

pub mod html;
pub mod svg;

/// Declares a tag list and a shortcut trait for a markup language.
///
/// ```
/// use taglib::{markup_language, Attributes, Builder, MarkupConfig};
///
/// markup_language! {
///     /// Shortcuts for a tiny outline format.
///     pub trait OutlineElements, const OUTLINE_TAGS {
///         outline => "outline",
///         item => "item",
///         see_also => "see-also",
///     }
/// }
///
/// let mut root = Builder::new(MarkupConfig::new(OUTLINE_TAGS.iter().copied()));
/// if let Some(outline) = root.outline("", Attributes::new()).into_builder() {
///     outline.item("First", Attributes::new());
///     outline.see_also("Second", Attributes::new());
/// }
/// assert_eq!(
///     root.serialize(0),
///     "\n<outline>\n<item>\n    First\n</item>\n<see-also>\n    Second\n</see-also>\n</outline>"
/// );
/// ```
#[macro_export]
macro_rules! markup_language {
    (
        $(#[$meta:meta])*
        $vis:vis trait $trait_name:ident, const $tags:ident {
            $( $method:ident => $tag:literal ),* $(,)?
        }
    ) => {
        /// Tags declared for this language, in declaration order
        $vis const $tags: &[&str] = &[$($tag),*];

        $(#[$meta])*
        $vis trait $trait_name {
            $(
                #[doc = concat!("Appends a `<", $tag, ">` element, see `Builder::element`.")]
                fn $method<'a>(
                    &'a mut self,
                    content: &'a str,
                    attributes: impl Into<$crate::Attributes>,
                ) -> $crate::Appended<'a>;
            )*
        }

        impl $trait_name for $crate::Builder {
            $(
                #[track_caller]
                fn $method<'a>(
                    &'a mut self,
                    content: &'a str,
                    attributes: impl Into<$crate::Attributes>,
                ) -> $crate::Appended<'a> {
                    self.element($tag, content, attributes)
                }
            )*
        }
    };
}
