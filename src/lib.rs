// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Quick Navigation
//!
//! - **Parsing**: [`attribute::parse`] turns `name:filter[:requirement]`
//!   into an [`Attribute`]
//! - **Workflow**: [`Generator`] plans and writes the mutation and its stub
//! - **Collaborators**: [`Renderer`] and [`CaseConverter`] can be swapped
//! - **CLI**: [`cli`], the `mutation-scaffold` command line
//!
//! # Attribute Quick Reference
//!
//! | Segment | Values | Default |
//! |---------|--------|---------|
//! | name | Rust identifier | required |
//! | filter | `string` `integer` `model` `hash` `array` `boolean` `date` `duck` `input` `symbol` `time` | required |
//! | requirement | `required` `optional` | `required` |
//!
//! # Output
//!
//! | File | When |
//! |------|------|
//! | `app/mutations/<name>.rs` | Always (overwritten) |
//! | `spec/mutations/<name>_spec.rs` | Only if `spec/` exists |

pub mod attribute;
pub mod case;
pub mod cli;
pub mod error;
pub mod generate;
pub mod render;

pub use attribute::{Attribute, FilterKind, Requirement};
pub use case::{CaseConverter, PascalCase};
pub use error::{Error, FsOperation, Result};
pub use generate::{FileStatus, GenerationRequest, Generator, Layout, Plan, Report};
pub use render::{RenderData, Renderer, RustTemplates, Template};
