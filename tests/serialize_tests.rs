#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

#[cfg(test)]
mod serialize_tests {
    use taglib::test_utils::*;

    fn four_tags() -> MarkupConfig {
        MarkupConfig::new(["a", "b", "c", "d", "e"]).with_indent_unit("  ")
    }

    #[test]
    fn test_container_with_attributes() {
        let mut root = Builder::new(sample_config());
        let b_builder = root.element("a", "", Attributes::new()).into_builder().unwrap();
        b_builder.element("b", "", [("href", "x")]);

        assert_eq!(root.serialize(0), "\n<a>\n<b href=\"x\"/>\n</a>");
    }

    #[test]
    fn test_raw_attribute_is_unquoted() {
        let mut root = Builder::new(sample_config());
        root.open("a", Attributes::new())
            .element("b", "", [("__r", "href=x")]);

        assert_eq!(root.serialize(0), "\n<a>\n<b href=x/>\n</a>");
    }

    #[test]
    fn test_empty_container_is_self_closing() {
        let mut root = Builder::new(sample_config());
        root.open("a", [("id", "empty")]);
        assert_eq!(root.serialize(0), "\n<a id=\"empty\"/>");
    }

    #[test]
    fn test_container_switches_template_once_filled() {
        let mut root = Builder::new(sample_config());
        root.open("a", Attributes::new());
        assert_eq!(root.serialize(0), "\n<a/>");

        root.reset();
        root.open("a", Attributes::new()).open("b", Attributes::new());
        assert_eq!(root.serialize(0), "\n<a>\n<b/>\n</a>");
    }

    #[test]
    fn test_top_level_literal() {
        let mut root = Builder::new(sample_config());
        root.element("a", "hi", Attributes::new());
        assert_eq!(root.serialize(0), "\n<a>\nhi\n</a>");
    }

    #[test]
    fn test_siblings_keep_insertion_order() {
        let mut root = Builder::new(sample_config());
        let a = root.open("a", Attributes::new());
        a.element("b", "first", Attributes::new());
        a.element("a", "second", Attributes::new());
        a.element("b", "", Attributes::new());

        assert_eq!(
            root.serialize(0),
            concat!(
                "\n<a>",
                "\n<b>\n  first\n</b>",
                "\n<a>\n  second\n</a>",
                "\n<b/>",
                "\n</a>",
            )
        );
    }

    #[test]
    fn test_three_nested_containers() {
        let mut root = Builder::new(four_tags());
        root.open("a", Attributes::new())
            .open("b", Attributes::new())
            .open("c", Attributes::new())
            .element("d", "x", Attributes::new());

        assert_eq!(
            root.serialize(0),
            concat!(
                "\n<a>",
                "\n<b>",
                "\n  <c>",
                "\n    <d>",
                "\n      x",
                "\n    </d>",
                "\n  </c>",
                "\n</b>",
                "\n</a>",
            )
        );
    }

    #[test]
    fn test_closing_tags_align_with_opening_tags() {
        let mut root = Builder::new(four_tags());
        root.open("a", Attributes::new())
            .open("b", Attributes::new())
            .open("c", Attributes::new())
            .open("d", Attributes::new())
            .element("e", "x", Attributes::new());

        let output = root.serialize(0);
        for tag in ["a", "b", "c", "d"] {
            let open_line = output
                .lines()
                .find(|line| line.trim_start() == format!("<{tag}>"))
                .unwrap();
            let close_line = output
                .lines()
                .find(|line| line.trim_start() == format!("</{tag}>"))
                .unwrap();
            assert_eq!(
                open_line.len() - open_line.trim_start().len(),
                close_line.len() - close_line.trim_start().len(),
                "misaligned <{tag}>"
            );
        }
    }

    #[test]
    fn test_serialize_at_deeper_level() {
        let mut root = Builder::new(sample_config());
        root.element("a", "x", Attributes::new());
        assert_eq!(root.serialize(2), "\n  <a>\n    x\n  </a>");
    }

    #[test]
    fn test_custom_templates() {
        let config = MarkupConfig::new(["a", "b"])
            .with_indent_unit("  ")
            .with_templates("{fh}({tag}{attrib}{fch}{content}{ft})", "{fh}({tag}{attrib})")
            .unwrap();
        let mut root = Builder::new(config);
        root.open("a", Attributes::new())
            .element("b", "x", [("__s", ":key 1")]);

        assert_eq!(root.serialize(0), "\n(a\n(b :key 1\n  x\n)\n)");
    }

    #[test]
    fn test_compact_templates() {
        let config = MarkupConfig::new(["a", "b"])
            .with_templates("<{tag}{attrib}>{content}</{tag}>", "<{tag}{attrib}/>")
            .unwrap();
        let mut root = Builder::new(config);
        let a = root.open("a", Attributes::new());
        a.element("b", "x", Attributes::new());
        a.element("b", "", Attributes::new());

        assert_eq!(root.serialize(0), "<a><b>x</b><b/></a>");
    }

    #[test]
    fn test_content_is_not_escaped() {
        let mut root = Builder::new(sample_config());
        root.element("a", "1 < 2 & \"quoted\"", Attributes::new());
        assert!(root.serialize(0).contains("1 < 2 & \"quoted\""));
    }

    #[test]
    fn test_document_prefixes_preamble() {
        let mut root = Builder::new(sample_config().with_preamble("<?xml version=\"1.0\"?>"));
        root.open("a", Attributes::new());
        assert_eq!(root.to_document(), "<?xml version=\"1.0\"?>\n<a/>");
    }

    #[test]
    fn test_deep_tree_serializes() {
        let depth = 10_000;
        let mut root = Builder::new(MarkupConfig::new(["n"]).with_indent_unit(""));
        let mut current = &mut root;
        for _ in 0..depth {
            current = current.open("n", Attributes::new());
        }

        let expected = format!(
            "{}\n<n/>{}",
            "\n<n>".repeat(depth - 1),
            "\n</n>".repeat(depth - 1)
        );
        assert_eq!(root.serialize(0), expected);
    }

    #[test]
    fn test_deep_tree_drops() {
        let mut root = Builder::new(MarkupConfig::new(["n"]));
        let mut current = &mut root;
        for _ in 0..100_000 {
            current = current.open("n", Attributes::new());
        }
        current.element("n", "leaf", Attributes::new());
        drop(root);
    }

    #[test]
    fn test_reset_of_deep_tree() {
        let mut root = Builder::new(MarkupConfig::new(["n"]));
        let mut current = &mut root;
        for _ in 0..100_000 {
            current = current.open("n", Attributes::new());
        }
        root.reset();
        assert!(root.is_empty());
    }

    #[test]
    fn test_containers_rendering_nothing_use_empty_template() {
        let config = MarkupConfig::new(["a", "b"])
            .with_templates("<{tag}>{content}</{tag}>", "")
            .unwrap();
        let mut root = Builder::new(config);
        root.open("a", Attributes::new()).open("b", Attributes::new());
        assert_eq!(root.serialize(0), "");

        root.open("a", Attributes::new())
            .element("b", "x", Attributes::new());
        assert_eq!(root.serialize(0), "<a><b>x</b></a>");
    }

    #[test]
    fn test_repeated_content_placeholder() {
        let config = MarkupConfig::new(["a", "b"])
            .with_templates("{content}|{content}", ".")
            .unwrap();
        let mut root = Builder::new(config);
        root.open("a", Attributes::new())
            .element("b", "x", Attributes::new());
        assert_eq!(root.serialize(0), "x|x|x|x");
    }
}
