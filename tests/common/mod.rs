//! Shared helpers for integration tests.

pub mod fixtures;

use std::path::PathBuf;

/// A scratch file path under the system temp dir, removed on drop.
///
/// The path is unique per process and test name, so tests can run in
/// parallel.
#[allow(dead_code)]
pub struct TempFile {
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TempFile {
    pub fn new(test_name: &str) -> Self {
        let path = std::env::temp_dir()
            .join(format!("tutor-book-{}-{}", std::process::id(), test_name))
            .join("addressbook.json");
        Self { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if let Some(dir) = self.path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
