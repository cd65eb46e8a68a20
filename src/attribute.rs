// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute definition parsing.
//!
//! Each attribute of a mutation is given on the command line as a compact
//! `name:filter[:requirement]` token. This module turns those tokens into
//! fully validated [`Attribute`] records.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Attribute Parsing                             │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                     │
//! │  Token                       parse()              Attribute         │
//! │                                                                     │
//! │  "title:string"          ──►   split(':')   ──►   name: title       │
//! │  "count:integer:optional"      │                  filter: integer   │
//! │                                ├── name?          requirement       │
//! │                                ├── filter?                          │
//! │                                └── requirement                      │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Syntax
//!
//! ```text
//! title:string                 // required (default)
//! count:integer:optional       // optional
//! owner:model:required         // required (explicit)
//! ```
//!
//! A token either yields a complete [`Attribute`] or an [`Error`]; nothing
//! half-parsed ever leaves this module.
//!
//! # Names
//!
//! Names are ASCII Rust identifiers. Keywords are accepted and stored as raw
//! identifiers (`type` becomes `r#type`), except `self`, `Self`, `super`,
//! `crate` and `_`, which have no raw form.

mod filter;
mod requirement;

use std::fmt;

pub use filter::FilterKind;
use proc_macro2::{Ident, Span};
pub use requirement::Requirement;
use syn::{ext::IdentExt, parse::Parser};

use crate::error::{Error, Result};

/// A validated mutation input.
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `name` | Rust identifier of the input (e.g., `title`) |
/// | `filter` | Declared data type |
/// | `requirement` | Whether the input is mandatory |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// Identifier of the input.
    pub name: Ident,

    /// Declared data type.
    pub filter: FilterKind,

    /// Required or optional.
    pub requirement: Requirement
}

impl Attribute {
    /// Name as a plain string.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.name.to_string()
    }

    /// Check if this input may be omitted.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.requirement.is_optional()
    }
}

impl fmt::Display for Attribute {
    /// Canonical token form; the default requirement is left implicit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.filter)?;
        if self.is_optional() {
            write!(f, ":{}", self.requirement)?;
        }
        Ok(())
    }
}

/// Parse a single `name:filter[:requirement]` token.
///
/// The token is split into at most three segments, so any extra colon ends
/// up in the requirement segment and is rejected there. An empty
/// requirement segment counts as omitted.
///
/// # Errors
///
/// - [`Error::MissingName`] when the name segment is empty
/// - [`Error::MissingFilter`] when the filter segment is absent or empty
/// - [`Error::InvalidFilter`] when the filter is not a [`FilterKind`]
/// - [`Error::InvalidRequirement`] when the requirement is not a
///   [`Requirement`]
/// - [`Error::InvalidName`] when the name is not a Rust identifier
///
/// # Example
///
/// ```rust
/// use mutation_scaffold::attribute::{FilterKind, Requirement, parse};
///
/// let attr = parse("count:integer:optional").unwrap();
/// assert_eq!(attr.name_str(), "count");
/// assert_eq!(attr.filter, FilterKind::Integer);
/// assert_eq!(attr.requirement, Requirement::Optional);
/// ```
pub fn parse(token: &str) -> Result<Attribute> {
    let mut segments = token.splitn(3, ':');

    let name = segments
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::MissingName {
            token: token.to_string()
        })?;

    let filter = segments
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::MissingFilter {
            token: token.to_string()
        })?;

    let requirement = segments
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(Requirement::Required.as_str());

    let filter = filter
        .parse::<FilterKind>()
        .map_err(|()| Error::InvalidFilter {
            token:    token.to_string(),
            filter:   filter.to_string(),
            expected: FilterKind::names()
        })?;

    let requirement =
        requirement
            .parse::<Requirement>()
            .map_err(|()| Error::InvalidRequirement {
                token:       token.to_string(),
                requirement: requirement.to_string(),
                expected:    Requirement::names()
            })?;

    let name = parse_name(name).ok_or_else(|| Error::InvalidName {
        token: token.to_string(),
        name:  name.to_string()
    })?;

    Ok(Attribute {
        name,
        filter,
        requirement
    })
}

/// Parse every token in order, stopping at the first failure.
///
/// Errors are not aggregated: the first invalid token decides the result.
pub fn parse_all<I, S>(tokens: I) -> Result<Vec<Attribute>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>
{
    tokens
        .into_iter()
        .map(|token| parse(token.as_ref()))
        .collect()
}

/// Keywords that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: [&str; 5] = ["self", "Self", "super", "crate", "_"];

/// Parse `value` as a Rust identifier, rejecting keywords and any
/// surrounding whitespace.
pub(crate) fn parse_ident(value: &str) -> Option<Ident> {
    syn::parse_str::<Ident>(value)
        .ok()
        .filter(|ident| ident == value)
}

/// Parse an attribute name: an ASCII identifier, with keywords escaped to
/// raw identifiers.
fn parse_name(value: &str) -> Option<Ident> {
    if !value.is_ascii() {
        return None;
    }
    if let Some(ident) = parse_ident(value) {
        return Some(ident);
    }
    if NON_RAW_KEYWORDS.contains(&value) {
        return None;
    }
    Ident::parse_any
        .parse_str(value)
        .ok()
        .filter(|ident| ident == value)
        .map(|_| Ident::new_raw(value, Span::call_site()))
}
