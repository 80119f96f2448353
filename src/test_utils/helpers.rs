use crate::config::MarkupConfig;
use std::{env, fs, path::PathBuf};

pub fn tmp_file_path(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push("taglib_tests");
    let _ = fs::create_dir_all(&dir);
    dir.push(name);
    dir
}

/// The two-tag language used throughout the tests
pub fn sample_config() -> MarkupConfig {
    MarkupConfig::new(["a", "b"]).with_indent_unit("  ")
}
