//! Declarative member tables.
//!
//! A `MemberTable` is an explicit registration table standing in for class
//! reflection: it lists an enumeration's constants, fields and methods by key.
//!
//! ```ignore
//! struct Suit {
//!     hearts: &'static str,
//! }
//!
//! impl Enumeration for Suit {
//!     fn placeholder() -> Self {
//!         Suit { hearts: "♥" }
//!     }
//! }
//!
//! impl TableSource for Suit {
//!     fn table() -> &'static MemberTable<Self> {
//!         static TABLE: Lazy<MemberTable<Suit>> = Lazy::new(|| {
//!             MemberTable::<Suit>::new()
//!                 .constant("SPADES", "♠")
//!                 .field("hearts", |suit| suit.hearts)
//!                 .method("clubs", |_| Ok("♣"))
//!         });
//!         &TABLE
//!     }
//! }
//! ```

use crate::source::MemberSource;
use rustc_hash::FxHashMap;
use serde_json::Value;

type FieldReader<E> = Box<dyn Fn(&E) -> Value + Send + Sync>;
type MethodBody<E> = Box<dyn Fn(&E) -> anyhow::Result<Value> + Send + Sync>;

/// Constants, fields and methods declared by an enumeration class `E`.
///
/// Constant and field keys match exactly. Method keys match ignoring ASCII
/// case.
pub struct MemberTable<E: 'static> {
    constants: FxHashMap<String, Value>,
    fields: FxHashMap<String, FieldReader<E>>,
    /// Keyed by the ASCII-lowercased method name.
    methods: FxHashMap<String, MethodBody<E>>,
}

impl<E: 'static> Default for MemberTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> MemberTable<E> {
    pub fn new() -> Self {
        Self {
            constants: FxHashMap::default(),
            fields: FxHashMap::default(),
            methods: FxHashMap::default(),
        }
    }

    /// Start a table that inherits every declaration of a parent class.
    ///
    /// `upcast` projects the child placeholder onto the parent state that the
    /// parent's fields and methods read. Declarations added afterwards
    /// override inherited ones with the same key.
    pub fn extending<P: 'static>(parent: &'static MemberTable<P>, upcast: fn(&E) -> &P) -> Self {
        let mut table = Self::new();
        table.constants = parent.constants.clone();
        for (key, reader) in &parent.fields {
            table
                .fields
                .insert(key.clone(), Box::new(move |e: &E| reader(upcast(e))));
        }
        for (key, body) in &parent.methods {
            table
                .methods
                .insert(key.clone(), Box::new(move |e: &E| body(upcast(e))));
        }
        table
    }

    pub fn constant(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.constants.insert(key.to_string(), value.into());
        self
    }

    pub fn field<V, F>(mut self, key: &str, reader: F) -> Self
    where
        V: Into<Value>,
        F: Fn(&E) -> V + Send + Sync + 'static,
    {
        self.fields
            .insert(key.to_string(), Box::new(move |e: &E| -> Value { reader(e).into() }));
        self
    }

    pub fn method<V, F>(mut self, key: &str, body: F) -> Self
    where
        V: Into<Value>,
        F: Fn(&E) -> anyhow::Result<V> + Send + Sync + 'static,
    {
        self.methods.insert(
            key.to_ascii_lowercase(),
            Box::new(move |e: &E| -> anyhow::Result<Value> { body(e).map(Into::into) }),
        );
        self
    }

    pub fn has_constant(&self, key: &str) -> bool {
        self.constants.contains_key(key)
    }

    pub fn get_constant(&self, key: &str) -> Option<Value> {
        self.constants.get(key).cloned()
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn read_field(&self, instance: &E, key: &str) -> Option<Value> {
        self.fields.get(key).map(|reader| reader(instance))
    }

    pub fn has_method(&self, key: &str) -> bool {
        self.methods.contains_key(&key.to_ascii_lowercase())
    }

    pub fn invoke(&self, instance: &E, key: &str) -> Option<anyhow::Result<Value>> {
        self.methods
            .get(&key.to_ascii_lowercase())
            .map(|body| body(instance))
    }

    /// Number of declarations across all three tiers.
    pub fn len(&self) -> usize {
        self.constants.len() + self.fields.len() + self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An enumeration class whose declarations live in a static [`MemberTable`].
pub trait TableSource: Sized + 'static {
    fn table() -> &'static MemberTable<Self>;
}

impl<T: TableSource> MemberSource for T {
    fn has_constant(key: &str) -> bool {
        T::table().has_constant(key)
    }

    fn constant(key: &str) -> Option<Value> {
        T::table().get_constant(key)
    }

    fn has_field(key: &str) -> bool {
        T::table().has_field(key)
    }

    fn field(&self, key: &str) -> Option<Value> {
        T::table().read_field(self, key)
    }

    fn has_method(key: &str) -> bool {
        T::table().has_method(key)
    }

    fn invoke_method(&self, key: &str) -> Option<anyhow::Result<Value>> {
        T::table().invoke(self, key)
    }
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
