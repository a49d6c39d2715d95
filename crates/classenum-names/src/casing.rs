//! Lookup key derivation.
//!
//! The resolver never probes a class with the canonical name directly. It
//! derives a constant key and a field key (methods share the field key), and
//! each enumeration class may choose how those keys are spelled.

use crate::CanonicalName;

/// How field and method keys are derived from a canonical name.
#[derive(Clone, Copy, Debug, Default)]
pub enum FieldCasing {
    /// `OTHER_FOO` -> `otherFoo`
    #[default]
    CamelCase,
    /// `OTHER_FOO` -> `other_foo`
    SnakeCase,
    Custom(fn(&str) -> String),
}

/// How constant keys are derived from a canonical name.
#[derive(Clone, Copy, Debug, Default)]
pub enum ConstantCasing {
    /// `OTHER_FOO` -> `OTHER_FOO`
    #[default]
    Upper,
    Custom(fn(&str) -> String),
}

/// Per-class casing configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Casing {
    pub field: FieldCasing,
    pub constant: ConstantCasing,
}

impl Casing {
    pub const fn new(field: FieldCasing, constant: ConstantCasing) -> Self {
        Self { field, constant }
    }

    /// Fields declared in snake_case, constants upper-cased.
    pub const fn snake_case_fields() -> Self {
        Self::new(FieldCasing::SnakeCase, ConstantCasing::Upper)
    }

    pub fn field_key(&self, name: &CanonicalName) -> String {
        match self.field {
            FieldCasing::CamelCase => to_field_key(name),
            FieldCasing::SnakeCase => to_snake_key(name),
            FieldCasing::Custom(derive) => derive(name),
        }
    }

    pub fn constant_key(&self, name: &CanonicalName) -> String {
        match self.constant {
            ConstantCasing::Upper => to_constant_key(name),
            ConstantCasing::Custom(derive) => derive(name),
        }
    }
}

/// Derive a camelCase field key.
///
/// Only the first underscore is a deliberate case break: the head is kept
/// lower-case and every remaining segment is capitalised and joined.
pub fn to_field_key(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    let Some((head, rest)) = lower.split_once('_') else {
        return lower;
    };

    let mut key = String::with_capacity(lower.len());
    key.push_str(head);
    for segment in rest.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            key.push(first.to_ascii_uppercase());
            key.push_str(chars.as_str());
        }
    }
    key
}

/// Derive a snake_case field key.
pub fn to_snake_key(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// Derive a constant key. Constants already use canonical casing.
pub fn to_constant_key(name: &str) -> String {
    name.to_ascii_uppercase()
}

#[cfg(test)]
#[path = "../tests/casing_tests.rs"]
mod tests;
