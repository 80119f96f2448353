#![no_main]
use libfuzzer_sys::fuzz_target;
use taglib::{template::Fields, Template};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(template) = Template::parse(s) {
            let _ = template.render(&Fields::default());
        }
    }
});
