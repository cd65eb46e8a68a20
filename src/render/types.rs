// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rust type mapping for filter kinds.
//!
//! # Type Mapping Table
//!
//! | Filter | Rust Type | Notes |
//! |--------|-----------|-------|
//! | `string` | `String` | |
//! | `integer` | `i64` | |
//! | `model` | `Owner` | Named after the attribute (`owner`) |
//! | `hash` | `HashMap<String, String>` | |
//! | `array` | `Vec<String>` | |
//! | `boolean` | `bool` | |
//! | `date` | `chrono::NaiveDate` | |
//! | `duck` | `Box<dyn Any>` | |
//! | `input` | `Box<dyn Any>` | |
//! | `symbol` | `&'static str` | |
//! | `time` | `chrono::DateTime<chrono::Utc>` | |
//!
//! Optional inputs wrap the mapped type in `Option<T>`.

use convert_case::{Case, Casing};
use syn::ext::IdentExt;

use crate::attribute::{Attribute, FilterKind};

/// Rust type used for an attribute's value, without `Option`.
#[must_use]
pub fn rust_type(attr: &Attribute) -> String {
    match attr.filter {
        FilterKind::String => "String".to_string(),
        FilterKind::Integer => "i64".to_string(),
        FilterKind::Model => attr.name.unraw().to_string().to_case(Case::Pascal),
        FilterKind::Hash => "std::collections::HashMap<String, String>".to_string(),
        FilterKind::Array => "Vec<String>".to_string(),
        FilterKind::Boolean => "bool".to_string(),
        FilterKind::Date => "chrono::NaiveDate".to_string(),
        FilterKind::Duck | FilterKind::Input => "Box<dyn std::any::Any>".to_string(),
        FilterKind::Symbol => "&'static str".to_string(),
        FilterKind::Time => "chrono::DateTime<chrono::Utc>".to_string()
    }
}

/// Rust type of the struct field holding an attribute.
#[must_use]
pub fn field_type(attr: &Attribute) -> String {
    if attr.is_optional() {
        format!("Option<{}>", rust_type(attr))
    } else {
        rust_type(attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::parse;

    #[test]
    fn scalar_types() {
        assert_eq!(rust_type(&parse("a:string").unwrap()), "String");
        assert_eq!(rust_type(&parse("a:integer").unwrap()), "i64");
        assert_eq!(rust_type(&parse("a:boolean").unwrap()), "bool");
        assert_eq!(rust_type(&parse("a:symbol").unwrap()), "&'static str");
    }

    #[test]
    fn model_is_named_after_attribute() {
        assert_eq!(rust_type(&parse("owner:model").unwrap()), "Owner");
        assert_eq!(rust_type(&parse("blog_post:model").unwrap()), "BlogPost");
    }

    #[test]
    fn optional_field_is_wrapped() {
        let attr = parse("count:integer:optional").unwrap();
        assert_eq!(field_type(&attr), "Option<i64>");
        assert_eq!(rust_type(&attr), "i64");
    }

    #[test]
    fn duck_and_input_are_dynamic() {
        assert_eq!(
            rust_type(&parse("thing:duck").unwrap()),
            "Box<dyn std::any::Any>"
        );
        assert_eq!(
            rust_type(&parse("raw:input").unwrap()),
            "Box<dyn std::any::Any>"
        );
    }
}
