//! Member name handling for classenum.
//!
//! This crate provides the naming rules shared by every enumeration class:
//! - Canonical names (`CanonicalName`, `normalize`)
//! - The reserved prefix that marks engine-internal names
//! - Lookup key derivation for constants and fields (`Casing`)
//!
//! A member may be requested as `OTHER_FOO`, `other_foo`, `otherFoo` or
//! `OtherFoo`; all of them normalize to the canonical `OTHER_FOO`.

use std::fmt;
use std::ops::Deref;

// Lookup key derivation and per-class casing configuration
pub mod casing;
pub use casing::{Casing, ConstantCasing, FieldCasing, to_constant_key, to_field_key, to_snake_key};

/// Names starting with this character are never member names.
pub const RESERVED_PREFIX: char = '_';

/// A member name in upper snake case, e.g. `OTHER_FOO`.
///
/// Only produced by [`normalize`], so two `CanonicalName`s compare equal
/// exactly when they denote the same member.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalName(String);

impl CanonicalName {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for CanonicalName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CanonicalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for CanonicalName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CanonicalName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Check whether a requested name denotes engine state rather than a member.
#[inline]
pub fn is_reserved(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX)
}

/// Normalize any accepted spelling of a member name to its canonical form.
///
/// 1. Spaces become underscores.
/// 2. Input without underscores, without a run of two or more upper-case
///    letters and with at least one lower-case letter is treated as camelCase
///    and split before every upper-case letter except the first character.
/// 3. The result is upper-cased.
///
/// Case mapping is ASCII only. The function is idempotent.
pub fn normalize(input: &str) -> CanonicalName {
    let spaced = input.replace(' ', "_");

    let mut out = String::with_capacity(spaced.len() + 4);
    if is_camel_case(&spaced) {
        for (i, ch) in spaced.chars().enumerate() {
            if i > 0 && ch.is_ascii_uppercase() {
                out.push('_');
            }
            out.push(ch.to_ascii_uppercase());
        }
    } else {
        out.extend(spaced.chars().map(|ch| ch.to_ascii_uppercase()));
    }

    CanonicalName(out)
}

fn is_camel_case(name: &str) -> bool {
    if name.contains('_') {
        return false;
    }
    if !name.bytes().any(|b| b.is_ascii_lowercase()) {
        return false;
    }
    !has_upper_run(name)
}

/// True when the name contains two consecutive ASCII upper-case letters.
fn has_upper_run(name: &str) -> bool {
    name.as_bytes()
        .windows(2)
        .any(|pair| pair[0].is_ascii_uppercase() && pair[1].is_ascii_uppercase())
}

#[cfg(test)]
#[path = "../tests/normalize_tests.rs"]
mod tests;
