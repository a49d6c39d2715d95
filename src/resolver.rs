//! Member resolution.
//!
//! Precedence is fixed: constant, then field, then method. The first tier
//! that declares the derived key wins; a failure inside that tier is final
//! and never falls through to the next one.

use crate::error::EnumError;
use crate::source::Enumeration;
use classenum_names::CanonicalName;
use serde_json::Value;
use tracing::{debug, trace};

/// The kind of declaration backing a member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Constant,
    Field,
    Method,
}

/// Find which tier declares `name` in `E`, without reading any value.
///
/// Methods are probed with the field key.
pub fn locate<E: Enumeration>(name: &CanonicalName) -> Option<Tier> {
    let casing = E::casing();

    if E::has_constant(&casing.constant_key(name)) {
        return Some(Tier::Constant);
    }

    let field_key = casing.field_key(name);
    if E::has_field(&field_key) {
        Some(Tier::Field)
    } else if E::has_method(&field_key) {
        Some(Tier::Method)
    } else {
        None
    }
}

/// Read the value of `name` from the tier [`locate`] found.
///
/// Fields and methods are read from a fresh placeholder instance. A method is
/// invoked exactly once per call; callers cache the result.
pub fn resolve<E: Enumeration>(name: &CanonicalName, tier: Tier) -> Result<Value, EnumError> {
    let casing = E::casing();
    let class = E::class_name();

    let value = match tier {
        Tier::Constant => {
            let key = casing.constant_key(name);
            E::constant(&key)
                .ok_or_else(|| anyhow::anyhow!("constant `{key}` is declared but has no value"))
        }
        Tier::Field => {
            let key = casing.field_key(name);
            E::placeholder()
                .field(&key)
                .ok_or_else(|| anyhow::anyhow!("field `{key}` is declared but has no value"))
        }
        Tier::Method => {
            let key = casing.field_key(name);
            match E::placeholder().invoke_method(&key) {
                Some(result) => result,
                None => Err(anyhow::anyhow!("method `{key}` is declared but not callable")),
            }
        }
    };

    if value.is_ok() {
        trace!(class, name = %name, ?tier, "resolved member value");
    }

    value.map_err(|source| {
        debug!(class, name = %name, ?tier, error = %source, "member resolution failed");
        EnumError::Resolution {
            class,
            name: name.to_string(),
            source,
        }
    })
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
