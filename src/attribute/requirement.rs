// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Whether a mutation input must be supplied.

use std::{fmt, str::FromStr};

/// Requirement flag of an attribute.
///
/// Defaults to [`Requirement::Required`] when a definition omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Requirement {
    /// Input must be supplied (`required`).
    #[default]
    Required,

    /// Input may be omitted (`optional`).
    Optional
}

impl Requirement {
    /// Every requirement, in listing order.
    pub const ALL: [Self; 2] = [Self::Required, Self::Optional];

    /// Token spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional"
        }
    }

    /// Token spellings of all requirements.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }

    /// Check if this is [`Requirement::Optional`].
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional)
    }
}

impl FromStr for Requirement {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "required" => Ok(Self::Required),
            "optional" => Ok(Self::Optional),
            _ => Err(())
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
