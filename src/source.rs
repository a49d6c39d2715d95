//! The capability an enumeration class provides to the resolver.
//!
//! The engine never reflects on Rust types. A class exposes its declared
//! constants, fields and zero-argument methods through [`MemberSource`], either
//! by hand or through a [`MemberTable`](crate::table::MemberTable).

use classenum_names::Casing;
use serde_json::Value;
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Read access to the declarations of one concrete enumeration class.
///
/// Probes (`has_*`) never read values. Reads return `None` when the key is
/// not declared. Declarations are implementation details of the class, so
/// implementations are free to expose private state here.
pub trait MemberSource: 'static {
    fn has_constant(key: &str) -> bool;

    fn constant(key: &str) -> Option<Value>;

    fn has_field(key: &str) -> bool;

    /// Read an instance-level field from a placeholder instance.
    fn field(&self, key: &str) -> Option<Value>;

    fn has_method(key: &str) -> bool;

    /// Invoke a zero-argument method on a placeholder instance.
    fn invoke_method(&self, key: &str) -> Option<anyhow::Result<Value>>;
}

/// A concrete enumeration class.
///
/// Each implementing type is its own class: a type that embeds or extends
/// another enumeration still gets its own members.
pub trait Enumeration: MemberSource + Sized {
    /// Build the bare instance that fields are read from and methods are
    /// invoked on. Never handed out to callers.
    fn placeholder() -> Self;

    fn class_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// How lookup keys are derived for this class.
    fn casing() -> Casing {
        Casing::default()
    }
}

/// Identity of a concrete enumeration class.
#[derive(Clone, Copy)]
pub struct ClassId {
    type_id: TypeId,
    name: &'static str,
}

impl ClassId {
    pub fn of<E: Enumeration>() -> Self {
        Self {
            type_id: TypeId::of::<E>(),
            name: E::class_name(),
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn is<E: Enumeration>(self) -> bool {
        self.type_id == TypeId::of::<E>()
    }
}

impl PartialEq for ClassId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ClassId {}

impl Hash for ClassId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.name)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
