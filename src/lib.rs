//! Enumerated types with per-member identity and lazy value resolution.
//!
//! An enumeration class declares its members as constants, fields or
//! zero-argument methods. Members are requested by name in any of the
//! accepted spellings (`OTHER_FOO`, `other_foo`, `otherFoo`, `OtherFoo`) and
//! come back as a single `&'static Member` per (class, canonical name), its
//! value resolved on first access only.
//!
//! - Name normalization and key casing: [`classenum_names`]
//! - Declaration access: [`MemberSource`], [`Enumeration`], [`MemberTable`]
//! - Resolution precedence: [`resolver`]
//! - Identity cache: [`Registry`]
//! - Entry points: [`get`], [`has`], [`call`], [`EnumAccess`]

pub use classenum_names::{
    CanonicalName, Casing, ConstantCasing, FieldCasing, RESERVED_PREFIX, normalize,
};

pub mod error;
pub use error::{EnumError, ErrorKind};

// Capability the resolver reads class declarations through
pub mod source;
pub use source::{ClassId, Enumeration, MemberSource};

// Explicit registration tables
pub mod table;
pub use table::{MemberTable, TableSource};

pub mod resolver;
pub use resolver::Tier;

pub mod registry;
pub use registry::Registry;

pub mod member;
pub use member::Member;

pub mod access;
pub use access::{EnumAccess, Lookup, call, get, has};

pub mod tracing_config;

// Shared fixtures for unit tests
#[cfg(test)]
#[path = "tests/test_fixtures.rs"]
pub(crate) mod test_fixtures;
