//! Test fixture utilities for integration tests.

pub mod harness;

use std::path::{Path, PathBuf};

/// Returns the path to the fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Returns the path to a fixture store directory by name.
pub fn fixture_store(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Recursively copies a fixture directory into `dest`.
///
/// # Panics
///
/// Panics if any entry cannot be copied.
pub fn copy_fixture(src: &Path, dest: &Path) {
    std::fs::create_dir_all(dest)
        .unwrap_or_else(|e| panic!("Failed to create {}: {}", dest.display(), e));
    for entry in std::fs::read_dir(src)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", src.display(), e))
    {
        let entry = entry.expect("Failed to read fixture entry");
        let target = dest.join(entry.file_name());
        if entry.path().is_dir() {
            copy_fixture(&entry.path(), &target);
        } else {
            std::fs::copy(entry.path(), &target)
                .unwrap_or_else(|e| panic!("Failed to copy {}: {}", entry.path().display(), e));
        }
    }
}
