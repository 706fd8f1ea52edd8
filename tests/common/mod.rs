//! Common test utilities and helpers
#![allow(dead_code)]

use std::io::Write;
use std::sync::{Mutex, MutexGuard, OnceLock};
use tempfile::NamedTempFile;

static TEST_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Acquires a global lock for tests that modify process-wide state (like env vars)
pub fn lock_test() -> MutexGuard<'static, ()> {
    TEST_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Writes `contents` to a fresh temp file and returns its handle
pub fn path_list_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// A spread of paths covering ASCII, multi-byte and empty input
pub fn sample_paths() -> Vec<&'static str> {
    vec![
        "",
        "a",
        "short.txt",
        "/very/long/path/to/some/deep/file.txt",
        "./src/core/sync/coordinator.rs",
        "C:\\Users\\someone\\Documents\\report.docx",
        "/home/josé/música/canción.mp3",
        "/srv/日本語/ファイル.txt",
        "relative/path with spaces/file name.md",
    ]
}
