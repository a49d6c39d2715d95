//! Public entry points: `get`, `has`, and call-style access.
//!
//! Control flow for a name: reject reserved names, normalize, check the
//! registry, and on a miss locate and resolve the backing declaration. `has`
//! walks the same path but never materialises a member, so the two agree on
//! every input.

use crate::error::EnumError;
use crate::member::Member;
use crate::registry::Registry;
use crate::resolver;
use crate::source::{ClassId, Enumeration};
use classenum_names::{is_reserved, normalize};
use tracing::trace;

/// What a caller may look a member up by.
#[derive(Clone, Copy, Debug)]
pub enum Lookup<'a> {
    Name(&'a str),
    Member(&'a Member),
}

impl<'a> From<&'a str> for Lookup<'a> {
    fn from(name: &'a str) -> Self {
        Lookup::Name(name)
    }
}

impl<'a> From<&'a String> for Lookup<'a> {
    fn from(name: &'a String) -> Self {
        Lookup::Name(name.as_str())
    }
}

impl<'a> From<&'a Member> for Lookup<'a> {
    fn from(member: &'a Member) -> Self {
        Lookup::Member(member)
    }
}

/// Get the member of `E` by name or by an existing member instance.
///
/// A member instance is accepted only if it is the registry's member of
/// exactly `E`; members of a parent or child class are rejected even when
/// their names match.
pub fn get<'a, E: Enumeration>(key: impl Into<Lookup<'a>>) -> Result<&'static Member, EnumError> {
    let class = ClassId::of::<E>();
    let registry = Registry::global();

    match key.into() {
        Lookup::Member(member) => registry
            .lookup(class, member.name())
            .filter(|held| std::ptr::eq(*held, member))
            .ok_or_else(|| {
                trace!(class = %class, member = ?member, "rejected foreign member instance");
                EnumError::foreign_instance(class.name())
            }),
        Lookup::Name(requested) => get_by_name::<E>(class, registry, requested),
    }
}

fn get_by_name<E: Enumeration>(
    class: ClassId,
    registry: &Registry,
    requested: &str,
) -> Result<&'static Member, EnumError> {
    if is_reserved(requested) {
        trace!(class = %class, requested, "rejected reserved member name");
        return Err(EnumError::invalid_name(requested, class.name()));
    }

    let name = normalize(requested);
    if let Some(member) = registry.lookup(class, &name) {
        return Ok(member);
    }

    // Only declared names get a registry slot.
    let Some(tier) = resolver::locate::<E>(&name) else {
        return Err(EnumError::unknown(requested, class.name()));
    };

    registry.resolve_once(class, &name, || resolver::resolve::<E>(&name, tier))
}

/// Check whether `E` has a member, without materialising it. Never fails.
pub fn has<'a, E: Enumeration>(key: impl Into<Lookup<'a>>) -> bool {
    let class = ClassId::of::<E>();
    let registry = Registry::global();

    match key.into() {
        Lookup::Member(member) => registry.owns(class, member),
        Lookup::Name(requested) => {
            if is_reserved(requested) {
                return false;
            }
            let name = normalize(requested);
            registry.lookup(class, &name).is_some() || resolver::locate::<E>(&name).is_some()
        }
    }
}

/// Call-style access, e.g. a generated `Suit::HEARTS()` accessor.
///
/// Behaves like [`get`], except that unknown or invalid names fail with
/// [`EnumError::BadCall`] carrying the same message.
pub fn call<E: Enumeration>(name: &str) -> Result<&'static Member, EnumError> {
    get::<E>(name).map_err(EnumError::into_bad_call)
}

/// `get`/`has`/`call` as associated functions of every enumeration class.
pub trait EnumAccess: Enumeration {
    fn get<'a>(key: impl Into<Lookup<'a>>) -> Result<&'static Member, EnumError> {
        get::<Self>(key)
    }

    fn has<'a>(key: impl Into<Lookup<'a>>) -> bool {
        has::<Self>(key)
    }

    fn call(name: &str) -> Result<&'static Member, EnumError> {
        call::<Self>(name)
    }

    /// Whether `member` is this class's own instance.
    fn owns(member: &Member) -> bool {
        Registry::global().owns(ClassId::of::<Self>(), member)
    }
}

impl<E: Enumeration> EnumAccess for E {}

#[cfg(test)]
#[path = "tests/access_tests.rs"]
mod tests;
