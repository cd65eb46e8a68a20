// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Filter kinds accepted in attribute definitions.
//!
//! The filter is the declared data type of a mutation input. The set is
//! closed: anything outside it is rejected rather than coerced.

use std::{fmt, str::FromStr};

/// Declared data type of an attribute.
///
/// # Accepted Values
///
/// | Token | Variant |
/// |-------|---------|
/// | `string` | [`FilterKind::String`] |
/// | `integer` | [`FilterKind::Integer`] |
/// | `model` | [`FilterKind::Model`] |
/// | `hash` | [`FilterKind::Hash`] |
/// | `array` | [`FilterKind::Array`] |
/// | `boolean` | [`FilterKind::Boolean`] |
/// | `date` | [`FilterKind::Date`] |
/// | `duck` | [`FilterKind::Duck`] |
/// | `input` | [`FilterKind::Input`] |
/// | `symbol` | [`FilterKind::Symbol`] |
/// | `time` | [`FilterKind::Time`] |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Text value.
    String,
    /// Whole number.
    Integer,
    /// Domain model, typed after the attribute name.
    Model,
    /// Key/value map.
    Hash,
    /// Ordered list.
    Array,
    /// True or false.
    Boolean,
    /// Calendar date.
    Date,
    /// Anything responding to the expected interface.
    Duck,
    /// Raw, unfiltered input.
    Input,
    /// Interned name.
    Symbol,
    /// Point in time.
    Time
}

impl FilterKind {
    /// Every filter kind, in the order they are listed to users.
    pub const ALL: [Self; 11] = [
        Self::String,
        Self::Integer,
        Self::Model,
        Self::Hash,
        Self::Array,
        Self::Boolean,
        Self::Date,
        Self::Duck,
        Self::Input,
        Self::Symbol,
        Self::Time
    ];

    /// Token spelling of this filter kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Model => "model",
            Self::Hash => "hash",
            Self::Array => "array",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Duck => "duck",
            Self::Input => "input",
            Self::Symbol => "symbol",
            Self::Time => "time"
        }
    }

    /// Token spellings of all filter kinds.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }
}

impl FromStr for FilterKind {
    type Err = ();

    /// Exact, case-sensitive match against [`FilterKind::ALL`].
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or(())
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
