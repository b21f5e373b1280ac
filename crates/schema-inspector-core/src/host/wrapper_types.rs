use indexmap::IndexSet;

/// The set of generic container types whose first type argument is the
/// "real" payload of a value.
///
/// Controllers rarely return a bare `Book`; they return `Result<Book, E>`,
/// `Box<dyn Future<Output = Book>>`, `Arc<Book>`, and so on. When matching
/// a host type reference against the schema, wrapper layers are stripped
/// (see [`HostTypeRef::element_type`](crate::host::HostTypeRef::element_type)).
///
/// Wrappers are matched by the last segment of their path, so `Arc` matches
/// both `Arc<T>` and `std::sync::Arc<T>`.
#[derive(Clone, Debug, PartialEq)]
pub struct WrapperTypes {
    names: IndexSet<String>,
}
impl WrapperTypes {
    pub const DEFAULT_NAMES: &'static [&'static str] = &[
        "Arc",
        "Box",
        "Connection",
        "Cow",
        "Future",
        "Pin",
        "Rc",
        "Result",
        "Stream",
    ];

    /// A set with no wrapper types in it at all.
    pub fn empty() -> Self {
        Self {
            names: IndexSet::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn is_wrapper(&self, path: &str) -> bool {
        self.names.contains(crate::host::simple_name(path))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for WrapperTypes {
    fn default() -> Self {
        Self {
            names: Self::DEFAULT_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }
}
