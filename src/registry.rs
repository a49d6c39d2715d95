//! Process-wide member registry.
//!
//! Holds at most one [`Member`] per (class, canonical name) for the lifetime
//! of the process. Entries are never removed.
//!
//! Layout is two-level: `ClassId -> Partition`, `name -> slot`. Each slot is a
//! `OnceCell`, so resolution is serialised per key while the `DashMap` shard
//! locks are only held long enough to fetch or insert a slot. Resolving one
//! member therefore never blocks resolving another, and a resolver that looks
//! up a different member of the same class does not deadlock.

use crate::error::EnumError;
use crate::member::Member;
use crate::source::ClassId;
use classenum_names::CanonicalName;
use dashmap::DashMap;
use once_cell::sync::{Lazy, OnceCell};
use rustc_hash::FxBuildHasher;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, trace};

type Slot = Arc<OnceCell<&'static Member>>;

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// Members materialised for one concrete class.
struct Partition {
    slots: DashMap<String, Slot, FxBuildHasher>,
}

impl Partition {
    fn new() -> Self {
        Self {
            slots: DashMap::with_hasher(FxBuildHasher),
        }
    }

    fn slot(&self, name: &str) -> Slot {
        if let Some(slot) = self.slots.get(name) {
            return Arc::clone(&slot);
        }
        Arc::clone(
            &self
                .slots
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(OnceCell::new())),
        )
    }
}

pub struct Registry {
    classes: DashMap<ClassId, Arc<Partition>, FxBuildHasher>,
}

impl Registry {
    fn new() -> Self {
        Self {
            classes: DashMap::with_hasher(FxBuildHasher),
        }
    }

    /// The registry shared by the whole process.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    fn partition(&self, class: ClassId) -> Arc<Partition> {
        if let Some(partition) = self.classes.get(&class) {
            return Arc::clone(&partition);
        }
        Arc::clone(
            &self
                .classes
                .entry(class)
                .or_insert_with(|| Arc::new(Partition::new())),
        )
    }

    /// Return the member already materialised for `(class, name)`, if any.
    pub fn lookup(&self, class: ClassId, name: &str) -> Option<&'static Member> {
        let partition = self.classes.get(&class)?;
        let slot = partition.slots.get(name)?;
        slot.get().copied()
    }

    /// Return the member for `(class, name)`, materialising it on first use.
    ///
    /// `resolve` runs at most once per key across all threads; concurrent
    /// callers for the same key wait for it and receive the same member. If it
    /// fails, nothing is stored and the next call resolves from scratch.
    pub fn resolve_once<F>(
        &self,
        class: ClassId,
        name: &CanonicalName,
        resolve: F,
    ) -> Result<&'static Member, EnumError>
    where
        F: FnOnce() -> Result<Value, EnumError>,
    {
        let slot = self.partition(class).slot(name);

        if let Some(&member) = slot.get() {
            trace!(class = %class, name = %name, "member cache hit");
            return Ok(member);
        }

        slot.get_or_try_init(|| {
            let value = resolve()?;
            debug!(class = %class, name = %name, "materialised enum member");
            Ok(store(Member::new(class, name.clone(), value)))
        })
        .copied()
    }

    /// Whether `member` is the instance this registry holds for its own class.
    ///
    /// Identity, not equality: a member with the same name and value produced
    /// for another class is not owned by `class`.
    pub fn owns(&self, class: ClassId, member: &Member) -> bool {
        member.class() == class
            && self
                .lookup(class, member.name())
                .is_some_and(|held| std::ptr::eq(held, member))
    }

    /// Number of members materialised so far for `class`.
    pub fn materialized(&self, class: ClassId) -> usize {
        self.classes.get(&class).map_or(0, |partition| {
            partition
                .slots
                .iter()
                .filter(|slot| slot.value().get().is_some())
                .count()
        })
    }
}

/// Move a freshly resolved member to the heap for the rest of the process.
fn store(member: Member) -> &'static Member {
    Box::leak(Box::new(member))
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
