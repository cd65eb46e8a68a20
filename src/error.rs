// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error type shared by the parser and the generation workflow.
//!
//! Parser variants always carry the offending definition token so the CLI
//! can report exactly which argument was rejected. [`Error::Filesystem`]
//! carries the operation and path that failed along with the underlying
//! I/O error.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a generation run.
#[derive(Debug, Error)]
pub enum Error {
    /// Definition token has no name segment (e.g. `":string"`).
    #[error("attribute definition `{token}` is missing a name")]
    MissingName {
        /// Raw definition token.
        token: String
    },

    /// Definition token has no filter segment (e.g. `"title"`).
    #[error("attribute definition `{token}` is missing a filter type")]
    MissingFilter {
        /// Raw definition token.
        token: String
    },

    /// Filter segment is not one of the known filter kinds.
    #[error(
        "invalid filter type `{filter}` in `{token}`, must be one of: {}",
        .expected.join(", ")
    )]
    InvalidFilter {
        /// Raw definition token.
        token:    String,
        /// Rejected filter segment.
        filter:   String,
        /// Every accepted filter kind.
        expected: Vec<&'static str>
    },

    /// Requirement segment is neither `required` nor `optional`.
    #[error(
        "invalid requirement `{requirement}` in `{token}`, must be one of: {}",
        .expected.join(", ")
    )]
    InvalidRequirement {
        /// Raw definition token.
        token:       String,
        /// Rejected requirement segment.
        requirement: String,
        /// Every accepted requirement.
        expected:    Vec<&'static str>
    },

    /// Name segment is not a usable Rust identifier.
    #[error("attribute name `{name}` in `{token}` is not a valid identifier")]
    InvalidName {
        /// Raw definition token.
        token: String,
        /// Rejected name segment.
        name:  String
    },

    /// The same attribute name appears in more than one definition.
    #[error("attribute `{name}` is defined more than once")]
    DuplicateName {
        /// Repeated name, without any `r#` prefix.
        name: String
    },

    /// Target name cannot be used as a file stem and type name.
    #[error("target name `{name}` must be a snake_case identifier")]
    InvalidTarget {
        /// Rejected target name.
        name: String
    },

    /// The case converter produced something that is not an identifier.
    #[error("type name `{type_name}` derived from target `{target}` is not a valid identifier")]
    InvalidTypeName {
        /// Target name that was converted.
        target:    String,
        /// Converter output.
        type_name: String
    },

    /// Creating a directory, reading or writing a file failed.
    #[error("failed to {operation} `{}`: {source}", .path.display())]
    Filesystem {
        /// What was being done to `path`.
        operation: FsOperation,
        /// Path being created, read or written.
        path:      PathBuf,
        /// Underlying I/O failure.
        #[source]
        source:    io::Error
    }
}

/// Filesystem step that failed, as reported by [`Error::Filesystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOperation {
    /// `create_dir_all` on an output directory.
    CreateDir,
    /// Reading an existing output file to compare contents.
    Read,
    /// Writing an output file.
    Write
}

impl fmt::Display for FsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CreateDir => "create directory",
            Self::Read => "read",
            Self::Write => "write"
        })
    }
}

impl Error {
    /// Wrap an I/O failure of `operation` on `path`.
    pub(crate) fn filesystem(
        operation: FsOperation,
        path: impl Into<PathBuf>,
        source: io::Error
    ) -> Self {
        Self::Filesystem {
            operation,
            path: path.into(),
            source
        }
    }

    /// Check if this error was raised while parsing definitions.
    ///
    /// Parser errors are guaranteed to occur before any file is touched.
    #[must_use]
    pub fn is_definition_error(&self) -> bool {
        !matches!(self, Self::Filesystem { .. })
    }
}
