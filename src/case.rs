// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identifier case conversion.
//!
//! The workflow derives the generated type name from the target name
//! through a [`CaseConverter`]. Any `Fn(&str) -> String` is a converter, so
//! tests can plug in a closure.

use convert_case::{Case, Casing};

/// Pure conversion from a `snake_case` identifier to a type-style name.
pub trait CaseConverter {
    /// Convert `ident` (e.g. `create_user`) into a type name
    /// (e.g. `CreateUser`).
    fn type_name(&self, ident: &str) -> String;
}

impl<F> CaseConverter for F
where
    F: Fn(&str) -> String
{
    fn type_name(&self, ident: &str) -> String {
        self(ident)
    }
}

/// Default converter backed by `convert_case`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PascalCase;

impl CaseConverter for PascalCase {
    fn type_name(&self, ident: &str) -> String {
        ident.to_case(Case::Pascal)
    }
}
