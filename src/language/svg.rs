//! SVG vocabulary.
//!
//! Camel-case and hyphenated SVG tags get snake-case shortcut names
//! (`linear_gradient` for `<linearGradient>`, `font_face` for `<font-face>`).

use crate::config::MarkupConfig;

/// XML declaration written before the `<svg>` element
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

/// Namespace for the `xmlns` attribute of the root element
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

crate::markup_language! {
    /// Per-tag shortcuts for SVG documents.
    pub trait SvgElements, const SVG_TAGS {
        svg => "svg",
        g => "g",
        defs => "defs",
        desc => "desc",
        title => "title",
        metadata => "metadata",
        symbol => "symbol",
        r#use => "use",
        switch => "switch",
        a => "a",
        style => "style",
        script => "script",
        rect => "rect",
        circle => "circle",
        ellipse => "ellipse",
        line => "line",
        polyline => "polyline",
        polygon => "polygon",
        path => "path",
        text => "text",
        tspan => "tspan",
        text_path => "textPath",
        image => "image",
        foreign_object => "foreignObject",
        linear_gradient => "linearGradient",
        radial_gradient => "radialGradient",
        stop => "stop",
        pattern => "pattern",
        clip_path => "clipPath",
        mask => "mask",
        marker => "marker",
        filter => "filter",
        fe_blend => "feBlend",
        fe_flood => "feFlood",
        fe_gaussian_blur => "feGaussianBlur",
        fe_offset => "feOffset",
        fe_merge => "feMerge",
        fe_merge_node => "feMergeNode",
        animate => "animate",
        animate_motion => "animateMotion",
        animate_transform => "animateTransform",
        set => "set",
        view => "view",
        font_face => "font-face",
        color_profile => "color-profile",
    }
}

pub fn config() -> MarkupConfig {
    MarkupConfig::new(SVG_TAGS.iter().copied())
        .with_indent_unit("  ")
        .with_preamble(XML_DECLARATION)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::{Attributes, Builder};

    #[test]
    fn test_hyphenated_and_camel_case_tags() {
        let config = config();
        assert!(config.allows("font-face"));
        assert!(config.allows("linearGradient"));
        assert!(!config.allows("linear_gradient"));
    }

    #[test]
    fn test_drawing() {
        let mut root = Builder::new(config());
        let svg = root
            .svg("", [("xmlns", SVG_NAMESPACE), ("viewBox", "0 0 10 10")])
            .into_builder()
            .unwrap();
        let gradient = svg
            .defs("", Attributes::new())
            .into_builder()
            .unwrap()
            .linear_gradient("", [("id", "fade")])
            .into_builder()
            .unwrap();
        gradient.stop("", [("offset", "0")]);
        svg.r#use("", [("__s", "href=\"#fade\"")]);

        assert_eq!(
            root.serialize(0),
            concat!(
                "\n<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 10 10\">",
                "\n<defs>",
                "\n  <linearGradient id=\"fade\">",
                "\n    <stop offset=\"0\"/>",
                "\n  </linearGradient>",
                "\n</defs>",
                "\n<use href=\"#fade\"/>",
                "\n</svg>",
            )
        );
    }
}
