//! The member value object.
//!
//! A `Member` is an immutable `(name, value)` pair owned by the registry.
//! Callers only ever hold `&'static Member`, and two references denote the same
//! member exactly when they point at the same instance.
//!
//! `Member` does not implement `Clone`:
//!
//! ```compile_fail
//! fn copy(member: &classenum::Member) -> classenum::Member {
//!     member.clone()
//! }
//! ```

use crate::error::EnumError;
use crate::source::{ClassId, Enumeration};
use classenum_names::CanonicalName;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};

pub struct Member {
    class: ClassId,
    name: CanonicalName,
    value: Value,
}

impl Member {
    pub(crate) fn new(class: ClassId, name: CanonicalName, value: Value) -> Self {
        Self { class, name, value }
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    #[inline]
    pub fn canonical_name(&self) -> &CanonicalName {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The concrete class this member was produced for.
    #[inline]
    pub fn class(&self) -> ClassId {
        self.class
    }

    /// Whether this is the registry's member of exactly `E`.
    pub fn is_member_of<E: Enumeration>(&self) -> bool {
        crate::registry::Registry::global().owns(ClassId::of::<E>(), self)
    }

    /// JSON projection: the encoded value, indistinguishable from encoding
    /// [`Member::value`] directly.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.value)
    }

    /// Members are unique per class and name; a copy would break identity.
    pub fn duplicate(&self) -> Result<Member, EnumError> {
        Err(EnumError::CopyNotAllowed {
            class: self.class.name(),
            name: self.name.to_string(),
        })
    }

    /// Members cannot be prepared for persistence. Use [`Member::to_json`] to
    /// read the value out instead.
    pub fn persist(&self) -> Result<Vec<u8>, EnumError> {
        Err(self.not_serializable())
    }

    fn not_serializable(&self) -> EnumError {
        EnumError::PersistenceNotAllowed {
            class: self.class.name(),
            name: self.name.to_string(),
        }
    }
}

/// String projection of the value.
///
/// Strings are written verbatim, numbers and booleans in their natural form,
/// `null` as the empty string, and arrays and objects as compact JSON.
impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Value::String(s) => f.write_str(s),
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            other @ (Value::Array(_) | Value::Object(_)) => write!(f, "{other}"),
        }
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("class", &self.class.name())
            .field("name", &self.name.as_str())
            .field("value", &self.value)
            .finish()
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for Member {}

impl Hash for Member {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class.hash(state);
        self.name.hash(state);
    }
}

/// Members encode as their bare value.
impl Serialize for Member {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

/// A member can only come from the registry, never from persisted data.
impl<'de> Deserialize<'de> for Member {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let _ = de::IgnoredAny::deserialize(deserializer)?;
        Err(de::Error::custom(
            "Enum member is not serializable and cannot be reconstructed.",
        ))
    }
}

#[cfg(test)]
#[path = "tests/member_tests.rs"]
mod tests;
