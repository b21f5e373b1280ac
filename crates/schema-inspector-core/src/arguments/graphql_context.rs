use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// A value stored in a [`GraphQLContext`]. Values are shared, never copied:
/// resolving an argument hands back the same allocation that was stored.
pub type ContextValue = Arc<dyn Any + Send + Sync>;

/// A string-keyed map of arbitrary values attached to a GraphQL request.
#[derive(Clone, Default)]
pub struct GraphQLContext {
    values: HashMap<String, ContextValue>,
}
impl GraphQLContext {
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.values.get(key)
    }

    /// Looks up a value and downcasts it to `T`.
    pub fn get_as<T: Any>(&self, key: &str) -> Option<&T> {
        self.values.get(key)?.downcast_ref::<T>()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Any + Send + Sync) -> &mut Self {
        self.insert_shared(key, Arc::new(value))
    }

    /// Stores an already-shared value. Resolving `key` later returns a clone
    /// of this exact `Arc`.
    pub fn insert_shared(&mut self, key: impl Into<String>, value: ContextValue) -> &mut Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Any + Send + Sync) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_shared(mut self, key: impl Into<String>, value: ContextValue) -> Self {
        self.insert_shared(key, value);
        self
    }
}
impl std::fmt::Debug for GraphQLContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys = self.values.keys().collect::<Vec<_>>();
        keys.sort();
        f.debug_struct("GraphQLContext")
            .field("keys", &keys)
            .finish()
    }
}
