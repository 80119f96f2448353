#![no_main]
use libfuzzer_sys::fuzz_target;
use taglib::{Attributes, Builder, MarkupConfig};

// Each line is `tag content`; a leading '>' descends into the last container.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut root = Builder::new(MarkupConfig::new(["a", "b", "c"]));
        let mut current = &mut root;
        for line in s.lines() {
            let body = line.trim_start_matches('>');
            let (tag, content) = body.split_once(' ').unwrap_or((body, ""));
            if line.starts_with('>') {
                if current.config().allows(tag) {
                    current = current.open(tag, Attributes::new());
                }
            } else {
                let _ = current.try_element(tag, content, [("__r", content)]);
            }
        }
        let _ = root.to_document();
    }
});
