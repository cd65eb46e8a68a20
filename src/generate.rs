// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation workflow.
//!
//! Turns a target name and its attribute definitions into files on disk.
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Generation Pipeline                            │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                     │
//! │  GenerationRequest                                                  │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  parse_all()  ── first bad token ──►  Error (nothing written)       │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  partition: required / optional (input order kept)                 │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  CaseConverter ──► type name                                        │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  Renderer ──► app/mutations/<target>.rs                             │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  spec/ exists? ── no ──► stub skipped                               │
//! │        │ yes                                                        │
//! │        ▼                                                            │
//! │  Renderer ──► spec/mutations/<target>_spec.rs                       │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`Generator::plan`] runs everything except the writes, so a plan is
//! always built from a fully parsed definition list. [`Generator::execute`]
//! writes a plan; [`Generator::generate`] does both.

mod layout;

use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf}
};

pub use layout::{
    DEFAULT_EXTENSION, DEFAULT_SOURCE_DIR, DEFAULT_TEST_DIR, DEFAULT_TEST_ROOT,
    DEFAULT_TEST_SUFFIX, Layout
};
use syn::ext::IdentExt;
use tracing::{debug, info, instrument};

use crate::{
    attribute::{Attribute, parse_all, parse_ident},
    case::{CaseConverter, PascalCase},
    error::{Error, FsOperation, Result},
    render::{RenderData, Renderer, RustTemplates, Template}
};

/// One invocation: target name plus raw definition tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Snake-case target name (e.g. `create_user`).
    pub target_name: String,

    /// Raw `name:filter[:requirement]` tokens in input order.
    pub definitions: Vec<String>
}

impl GenerationRequest {
    /// Build a request.
    pub fn new<I, S>(target_name: impl Into<String>, definitions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self {
            target_name: target_name.into(),
            definitions: definitions.into_iter().map(Into::into).collect()
        }
    }
}

/// A file the plan will write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Template the contents came from.
    pub template: Template,

    /// Destination path.
    pub path: PathBuf,

    /// Rendered text.
    pub contents: String
}

/// Everything a run will do, computed before any write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Derived type name.
    pub type_name: String,

    /// Required inputs, input order.
    pub required: Vec<Attribute>,

    /// Optional inputs, input order.
    pub optional: Vec<Attribute>,

    /// Files to write, mutation first.
    pub files: Vec<PlannedFile>,

    /// Test stub path when no stub will be written.
    pub skipped: Option<PathBuf>
}

/// Outcome for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// File did not exist.
    Created,

    /// File existed with different contents and was replaced.
    Overwritten,

    /// File existed with the same contents and was rewritten.
    Identical,

    /// File was not written.
    Skipped
}

impl FileStatus {
    /// Short label printed next to the path.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Created => "create",
            Self::Overwritten => "force",
            Self::Identical => "identical",
            Self::Skipped => "skip"
        }
    }
}

/// Status of one file after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// File path.
    pub path: PathBuf,

    /// What happened to it.
    pub status: FileStatus
}

/// Per-file outcome of a run, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// One entry per planned or skipped file.
    pub files: Vec<FileReport>
}

impl Report {
    /// Report a plan as if it were run, without writing anything.
    ///
    /// Existing files are read to tell created, overwritten and identical
    /// apart; unreadable ones count as created.
    #[must_use]
    pub fn pretend(plan: &Plan) -> Self {
        let mut files: Vec<FileReport> = plan
            .files
            .iter()
            .map(|file| FileReport {
                path:   file.path.clone(),
                status: existing_status(&file.path, &file.contents)
                    .unwrap_or(FileStatus::Created)
            })
            .collect();
        files.extend(skipped_entry(plan));
        Self {
            files
        }
    }

    /// Status recorded for `path`, if any.
    #[must_use]
    pub fn status_of(&self, path: &Path) -> Option<FileStatus> {
        self.files
            .iter()
            .find(|file| file.path == path)
            .map(|file| file.status)
    }
}

/// Drives a run with pluggable rendering and case conversion.
///
/// # Example
///
/// ```rust,no_run
/// use mutation_scaffold::generate::{GenerationRequest, Generator, Layout};
///
/// let generator = Generator::new(Layout::new("."));
/// let request = GenerationRequest::new("create_user", ["title:string", "age:integer:optional"]);
/// let report = generator.generate(&request)?;
/// assert!(!report.files.is_empty());
/// # Ok::<(), mutation_scaffold::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Generator<R = RustTemplates, C = PascalCase> {
    layout:    Layout,
    renderer:  R,
    case:      C,
    emit_spec: bool
}

impl Generator {
    /// Generator with the built-in templates and `PascalCase` type names.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            renderer: RustTemplates,
            case: PascalCase,
            emit_spec: true
        }
    }
}

impl<R, C> Generator<R, C>
where
    R: Renderer,
    C: CaseConverter
{
    /// Swap the renderer.
    #[must_use]
    pub fn with_renderer<R2: Renderer>(self, renderer: R2) -> Generator<R2, C> {
        Generator {
            layout: self.layout,
            renderer,
            case: self.case,
            emit_spec: self.emit_spec
        }
    }

    /// Swap the case converter.
    #[must_use]
    pub fn with_case<C2: CaseConverter>(self, case: C2) -> Generator<R, C2> {
        Generator {
            layout: self.layout,
            renderer: self.renderer,
            case,
            emit_spec: self.emit_spec
        }
    }

    /// Never emit the test stub, even when the test root exists.
    #[must_use]
    pub fn skip_spec(mut self, skip: bool) -> Self {
        self.emit_spec = !skip;
        self
    }

    /// Path conventions in use.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Parse, partition and render without writing anything.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidTarget`] for an unusable target name
    /// - The first parser error among the definitions
    /// - [`Error::DuplicateName`] when two definitions share a name
    /// - [`Error::InvalidTypeName`] when the case converter output is not an
    ///   identifier
    pub fn plan(&self, request: &GenerationRequest) -> Result<Plan> {
        let target = request.target_name.as_str();
        validate_target(target)?;

        let attributes = parse_all(&request.definitions)?;
        for attr in &attributes {
            debug!(attribute = %attr, "parsed attribute");
        }
        check_unique(&attributes)?;

        let (required, optional) = partition(attributes);
        debug!(
            required = required.len(),
            optional = optional.len(),
            "partitioned attributes"
        );

        let type_name = self.case.type_name(target);
        let type_ident = parse_ident(&type_name).ok_or_else(|| Error::InvalidTypeName {
            target:    target.to_string(),
            type_name: type_name.clone()
        })?;

        let data = RenderData {
            target_name: target,
            type_name:   &type_ident,
            required:    &required,
            optional:    &optional
        };

        let source_path = self.layout.source_path(target);
        let mut files = vec![self.planned(Template::Mutation, source_path, &data)];

        let test_path = self.layout.test_path(target);
        let skipped = if self.emit_spec && self.layout.has_test_root() {
            files.push(self.planned(Template::Spec, test_path, &data));
            None
        } else {
            debug!(path = %test_path.display(), "test stub not emitted");
            Some(test_path)
        };

        Ok(Plan {
            type_name,
            required,
            optional,
            files,
            skipped
        })
    }

    /// Write every file of `plan`, creating parent directories as needed.
    ///
    /// Existing files are overwritten without confirmation. A failure stops
    /// the run; files already written stay in place.
    ///
    /// # Errors
    ///
    /// [`Error::Filesystem`] naming the directory or file that failed.
    pub fn execute(&self, plan: &Plan) -> Result<Report> {
        let mut files = Vec::with_capacity(plan.files.len() + 1);
        for file in &plan.files {
            if let Some(parent) = file.path.parent() {
                ensure_dir(parent)?;
            }
            let status = write_file(&file.path, &file.contents)?;
            info!(
                template = file.template.name(),
                path = %file.path.display(),
                status = status.label(),
                "wrote file"
            );
            files.push(FileReport {
                path: file.path.clone(),
                status
            });
        }
        files.extend(skipped_entry(plan));
        Ok(Report {
            files
        })
    }

    /// Plan and execute in one go.
    ///
    /// Definitions are fully parsed before the first directory is created,
    /// so a bad token leaves the disk untouched.
    #[instrument(skip_all, fields(target = %request.target_name))]
    pub fn generate(&self, request: &GenerationRequest) -> Result<Report> {
        let plan = self.plan(request)?;
        self.execute(&plan)
    }

    fn planned(&self, template: Template, path: PathBuf, data: &RenderData<'_>) -> PlannedFile {
        PlannedFile {
            template,
            path,
            contents: self.renderer.render(template, data)
        }
    }
}

/// Split attributes into `(required, optional)`, keeping relative order.
#[must_use]
pub fn partition(attributes: Vec<Attribute>) -> (Vec<Attribute>, Vec<Attribute>) {
    let (optional, required) = attributes.into_iter().partition(Attribute::is_optional);
    (required, optional)
}

/// Target names become file stems and type names, so they must be
/// lowercase snake_case identifiers.
fn validate_target(target: &str) -> Result<()> {
    let snake = target
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if snake && parse_ident(target).is_some() {
        Ok(())
    } else {
        Err(Error::InvalidTarget {
            name: target.to_string()
        })
    }
}

/// Reject a second definition of the same name. `type` and `r#type` are
/// the same field.
fn check_unique(attributes: &[Attribute]) -> Result<()> {
    let mut seen = HashSet::new();
    for attr in attributes {
        let name = attr.name.unraw().to_string();
        if !seen.insert(name.clone()) {
            return Err(Error::DuplicateName { name });
        }
    }
    Ok(())
}

fn skipped_entry(plan: &Plan) -> Option<FileReport> {
    plan.skipped.as_ref().map(|path| FileReport {
        path:   path.clone(),
        status: FileStatus::Skipped
    })
}

/// Create `dir` and its parents if missing.
fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    debug!(path = %dir.display(), "creating directory");
    fs::create_dir_all(dir).map_err(|err| Error::filesystem(FsOperation::CreateDir, dir, err))
}

/// Write `contents` to `path` unconditionally and report what was there.
fn write_file(path: &Path, contents: &str) -> Result<FileStatus> {
    let status = existing_status(path, contents)
        .map_err(|err| Error::filesystem(FsOperation::Read, path, err))?;
    fs::write(path, contents).map_err(|err| Error::filesystem(FsOperation::Write, path, err))?;
    Ok(status)
}

/// Compare what is on disk at `path` with `contents`.
fn existing_status(path: &Path, contents: &str) -> io::Result<FileStatus> {
    match fs::read(path) {
        Ok(existing) if existing == contents.as_bytes() => Ok(FileStatus::Identical),
        Ok(_) => Ok(FileStatus::Overwritten),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(FileStatus::Created),
        Err(err) => Err(err)
    }
}
