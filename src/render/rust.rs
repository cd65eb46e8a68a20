// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Built-in templates producing Rust sources.
//!
//! # Generated Code
//!
//! For `create_user title:string count:integer:optional`:
//!
//! ```rust,ignore
//! #[derive(Debug)]
//! pub struct CreateUser {
//!     /// Required `title` input (string).
//!     pub title: String,
//!     /// Optional `count` input (integer).
//!     pub count: Option<i64>,
//! }
//!
//! impl CreateUser {
//!     pub fn new(title: String) -> Self { /* ... */ }
//!     pub fn with_count(mut self, count: i64) -> Self { /* ... */ }
//!     pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> { /* ... */ }
//! }
//! ```
//!
//! The test stub holds one ignored test per input plus an `executes` test.

use proc_macro2::Ident;
use quote::format_ident;
use syn::ext::IdentExt;

use super::{
    RenderData, Renderer, Template,
    types::{field_type, rust_type}
};
use crate::attribute::Attribute;

const INDENT: &str = "    ";

/// Renderer for the built-in Rust templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTemplates;

impl Renderer for RustTemplates {
    fn render(&self, template: Template, data: &RenderData<'_>) -> String {
        match template {
            Template::Mutation => render_mutation(data),
            Template::Spec => render_spec(data)
        }
    }
}

/// Render the mutation struct with its constructor, setters and `execute`.
fn render_mutation(data: &RenderData<'_>) -> String {
    let name = data.type_name;
    let mut out = String::new();

    out.push_str(&format!("//! `{name}` mutation.\n\n"));
    out.push_str(&format!("/// Command object for `{}`.\n", data.target_name));
    if !data.required.is_empty() {
        out.push_str(&format!(
            "///\n/// Required inputs: {}.\n",
            name_list(data.required)
        ));
    }
    if !data.optional.is_empty() {
        out.push_str(&format!(
            "///\n/// Optional inputs: {}.\n",
            name_list(data.optional)
        ));
    }
    out.push_str("#[derive(Debug)]\n");
    out.push_str(&format!("pub struct {name} {{\n"));
    for attr in data.required.iter().chain(data.optional) {
        out.push_str(&format!(
            "{INDENT}/// {} `{}` input ({}).\n",
            if attr.is_optional() {
                "Optional"
            } else {
                "Required"
            },
            attr.name.unraw(),
            attr.filter
        ));
        out.push_str(&format!(
            "{INDENT}pub {}: {},\n",
            attr.name,
            field_type(attr)
        ));
    }
    out.push_str("}\n\n");

    out.push_str(&format!("impl {name} {{\n"));
    out.push_str(&render_constructor(data));
    for attr in data.optional {
        out.push('\n');
        out.push_str(&render_setter(attr));
    }
    out.push('\n');
    out.push_str(&format!("{INDENT}/// Run the mutation.\n"));
    out.push_str(&format!(
        "{INDENT}pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {{\n"
    ));
    out.push_str(&format!(
        "{INDENT}{INDENT}todo!(\"implement {name}::execute\")\n"
    ));
    out.push_str(&format!("{INDENT}}}\n"));
    out.push_str("}\n");

    out
}

/// Render `new` taking every required input; optional inputs start as
/// `None`.
fn render_constructor(data: &RenderData<'_>) -> String {
    let params: Vec<String> = data
        .required
        .iter()
        .map(|attr| format!("{}: {}", attr.name, rust_type(attr)))
        .collect();

    let mut out = String::new();
    out.push_str(&format!(
        "{INDENT}/// Build the mutation from its required inputs.\n"
    ));
    out.push_str(&format!(
        "{INDENT}pub fn new({}) -> Self {{\n",
        params.join(", ")
    ));
    out.push_str(&format!("{INDENT}{INDENT}Self {{\n"));
    for attr in data.required {
        out.push_str(&format!("{INDENT}{INDENT}{INDENT}{},\n", attr.name));
    }
    for attr in data.optional {
        out.push_str(&format!(
            "{INDENT}{INDENT}{INDENT}{}: None,\n",
            attr.name
        ));
    }
    out.push_str(&format!("{INDENT}{INDENT}}}\n"));
    out.push_str(&format!("{INDENT}}}\n"));
    out
}

/// Render the builder-style setter for one optional input.
fn render_setter(attr: &Attribute) -> String {
    let setter = setter_name(attr);
    let name = &attr.name;

    let mut out = String::new();
    out.push_str(&format!(
        "{INDENT}/// Set the optional `{}` input.\n",
        name.unraw()
    ));
    out.push_str(&format!(
        "{INDENT}pub fn {setter}(mut self, {name}: {}) -> Self {{\n",
        rust_type(attr)
    ));
    out.push_str(&format!("{INDENT}{INDENT}self.{name} = Some({name});\n"));
    out.push_str(&format!("{INDENT}{INDENT}self\n"));
    out.push_str(&format!("{INDENT}}}\n"));
    out
}

/// Render the test stub.
fn render_spec(data: &RenderData<'_>) -> String {
    let name = data.type_name;
    let mut tests = vec![stub_test(
        &format_ident!("executes"),
        &format!("exercise {name}::execute")
    )];
    tests.extend(data.required.iter().map(|attr| {
        stub_test(
            &format_ident!("requires_{}", attr.name.unraw()),
            &format!("check {name} rejects a missing `{}`", attr.name.unraw())
        )
    }));
    tests.extend(data.optional.iter().map(|attr| {
        stub_test(
            &format_ident!("accepts_missing_{}", attr.name.unraw()),
            &format!("check {name} runs without `{}`", attr.name.unraw())
        )
    }));

    format!(
        "//! Tests for the `{name}` mutation.\n\n{}",
        tests.join("\n")
    )
}

fn stub_test(name: &Ident, todo: &str) -> String {
    format!(
        "#[test]\n#[ignore = \"not yet implemented\"]\nfn {name}() {{\n{INDENT}todo!(\"{todo}\")\n}}\n"
    )
}

fn setter_name(attr: &Attribute) -> Ident {
    format_ident!("with_{}", attr.name.unraw())
}

fn name_list(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .map(|attr| format!("`{}`", attr.name.unraw()))
        .collect::<Vec<_>>()
        .join(", ")
}
