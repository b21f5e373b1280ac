use crate::loc;
use std::marker::PhantomData;
use thiserror::Error;

/// A strongly-typed, `String`-named reference to a `TResource` stored within
/// some other data-store (`TSource`) without holding a borrow of that
/// data-store.
///
/// [`SchemaField`](crate::schema::SchemaField)s and
/// [`UnionType`](crate::schema::UnionType) members store [`NamedRef`]s to the
/// [`SchemaType`](crate::schema::SchemaType)s they point at, which lets a
/// [`SchemaTypeGraph`](crate::schema::SchemaTypeGraph) own every type
/// (including cyclic references between them) without self-references.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedRef<TSource, TResource: DerefByName<Source=TSource>> {
    name: String,
    phantom: PhantomData<TResource>,
    ref_location: loc::SourceLocation,
}
impl<TSource, TResource: DerefByName<Source=TSource>> NamedRef<TSource, TResource> {
    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl AsRef<str>,
        ref_location: loc::SourceLocation,
    ) -> NamedRef<TSource, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
            ref_location,
        }
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}

/// Implement this trait for any type that can be looked up by name within
/// some `Source`. This enables [`NamedRef`]s that point at that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DerefByNameError {
    #[error("No definition found for `{0}`")]
    DanglingReference(String),
}
