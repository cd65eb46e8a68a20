// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Output path conventions.
//!
//! # Defaults
//!
//! | Setting | Default | Produces |
//! |---------|---------|----------|
//! | `source_dir` | `app/mutations` | `app/mutations/<target>.rs` |
//! | `test_root` | `spec` | Stub is only emitted when this exists |
//! | `test_dir` | `spec/mutations` | `spec/mutations/<target>_spec.rs` |
//! | `extension` | `rs` | |
//! | `test_suffix` | `_spec` | |
//!
//! All directories are relative to the project root.

use std::path::{Path, PathBuf};

/// Default directory for mutation sources.
pub const DEFAULT_SOURCE_DIR: &str = "app/mutations";

/// Default directory whose presence enables test stubs.
pub const DEFAULT_TEST_ROOT: &str = "spec";

/// Default directory for test stubs.
pub const DEFAULT_TEST_DIR: &str = "spec/mutations";

/// Default file extension.
pub const DEFAULT_EXTENSION: &str = "rs";

/// Default suffix appended to the test stub file stem.
pub const DEFAULT_TEST_SUFFIX: &str = "_spec";

/// Where generated files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root:        PathBuf,
    source_dir:  PathBuf,
    test_root:   PathBuf,
    test_dir:    PathBuf,
    extension:   String,
    test_suffix: String
}

impl Layout {
    /// Conventional layout under `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root:        root.into(),
            source_dir:  PathBuf::from(DEFAULT_SOURCE_DIR),
            test_root:   PathBuf::from(DEFAULT_TEST_ROOT),
            test_dir:    PathBuf::from(DEFAULT_TEST_DIR),
            extension:   DEFAULT_EXTENSION.to_string(),
            test_suffix: DEFAULT_TEST_SUFFIX.to_string()
        }
    }

    /// Override the mutation source directory.
    #[must_use]
    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    /// Override the directory that enables test stubs.
    #[must_use]
    pub fn with_test_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.test_root = dir.into();
        self
    }

    /// Override the test stub directory.
    #[must_use]
    pub fn with_test_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.test_dir = dir.into();
        self
    }

    /// Override the file extension (without the dot).
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<source_dir>/<target>.<ext>`
    #[must_use]
    pub fn source_path(&self, target: &str) -> PathBuf {
        self.root
            .join(&self.source_dir)
            .join(format!("{target}.{}", self.extension))
    }

    /// `<root>/<test_dir>/<target><suffix>.<ext>`
    #[must_use]
    pub fn test_path(&self, target: &str) -> PathBuf {
        self.root
            .join(&self.test_dir)
            .join(format!("{target}{}.{}", self.test_suffix, self.extension))
    }

    /// Check if the project keeps tests in the conventional test root.
    #[must_use]
    pub fn has_test_root(&self) -> bool {
        self.root.join(&self.test_root).is_dir()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conventional_paths() {
        let layout = Layout::new("/project");
        assert_eq!(
            layout.source_path("create_user"),
            PathBuf::from("/project/app/mutations/create_user.rs")
        );
        assert_eq!(
            layout.test_path("create_user"),
            PathBuf::from("/project/spec/mutations/create_user_spec.rs")
        );
    }

    #[test]
    fn overrides_apply() {
        let layout = Layout::new("/p")
            .with_source_dir("src/commands")
            .with_test_dir("tests/commands")
            .with_extension("rb");
        assert_eq!(
            layout.source_path("publish"),
            PathBuf::from("/p/src/commands/publish.rb")
        );
        assert_eq!(
            layout.test_path("publish"),
            PathBuf::from("/p/tests/commands/publish_spec.rb")
        );
    }

    #[test]
    fn default_root_is_current_dir() {
        assert_eq!(Layout::default().root(), Path::new("."));
    }

    #[test]
    fn missing_test_root_is_detected() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path());
        assert!(!layout.has_test_root());
        std::fs::create_dir(dir.path().join("spec")).unwrap();
        assert!(layout.has_test_root());
    }
}
