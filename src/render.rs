// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Template rendering.
//!
//! The workflow never formats output itself: it hands a [`Template`] and a
//! [`RenderData`] record to a [`Renderer`] and writes whatever text comes
//! back. [`RustTemplates`] is the built-in renderer.
//!
//! # Submodules
//!
//! - `rust`: built-in templates producing Rust sources
//! - `types`: filter kind to Rust type mapping

mod rust;
mod types;

use proc_macro2::Ident;
pub use rust::RustTemplates;
pub use types::rust_type;

use crate::attribute::Attribute;

/// Which file is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// Primary mutation source file.
    Mutation,

    /// Test stub for the mutation.
    Spec
}

impl Template {
    /// Template identifier as shown in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Spec => "mutation_spec"
        }
    }
}

/// Data bound to a template.
///
/// Attribute slices are read-only views over the parsed list, already
/// partitioned and in input order.
#[derive(Debug, Clone, Copy)]
pub struct RenderData<'a> {
    /// Target name as given (e.g. `create_user`).
    pub target_name: &'a str,

    /// Derived type name (e.g. `CreateUser`).
    pub type_name: &'a Ident,

    /// Inputs that must be supplied.
    pub required: &'a [Attribute],

    /// Inputs that may be omitted.
    pub optional: &'a [Attribute]
}

/// Pure text renderer.
///
/// Implementations must be deterministic: identical data yields identical
/// text.
pub trait Renderer {
    /// Render `template` with `data`.
    fn render(&self, template: Template, data: &RenderData<'_>) -> String;
}

impl<T> Renderer for &T
where
    T: Renderer + ?Sized
{
    fn render(&self, template: Template, data: &RenderData<'_>) -> String {
        (**self).render(template, data)
    }
}
