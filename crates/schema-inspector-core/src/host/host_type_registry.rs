use crate::host::DescribeHostType;
use crate::host::HostType;
use crate::host::HostTypeRegistryError;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, HostTypeRegistryError>;

/// The set of host types the inspector is allowed to bind schema types to,
/// keyed by path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HostTypeRegistry {
    types: IndexMap<String, HostType>,
}
impl HostTypeRegistry {
    pub fn contains(&self, path: &str) -> bool {
        self.types.contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<&HostType> {
        self.types.get(path)
    }

    /// Whether a value of host type `candidate` can be returned where host
    /// type `declared` is expected.
    ///
    /// This holds when the two are the same type, when `candidate`
    /// (transitively) implements `declared`, or when `declared` (or any
    /// abstract type it's reachable from) explicitly permits `candidate`.
    pub fn is_assignable(&self, candidate: &str, declared: &str) -> bool {
        if candidate == declared {
            return true;
        }

        let mut seen = HashSet::new();
        let mut to_visit = vec![candidate];
        while let Some(path) = to_visit.pop() {
            if !seen.insert(path) {
                continue;
            }
            if path == declared {
                return true;
            }
            if let Some(host_type) = self.types.get(path) {
                to_visit.extend(host_type.implements().iter().map(String::as_str));
            }
        }

        // Sealed-style abstract types list their implementations instead.
        let mut seen = HashSet::new();
        let mut to_visit = vec![declared];
        while let Some(path) = to_visit.pop() {
            if !seen.insert(path) {
                continue;
            }
            let Some(host_type) = self.types.get(path) else {
                continue;
            };
            for permitted in host_type.permits() {
                if permitted == candidate {
                    return true;
                }
                to_visit.push(permitted.as_str());
            }
        }

        false
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HostType> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, host_type: HostType) -> Result<&mut Self> {
        let path = host_type.path();
        if path.is_empty()
            || path.split("::").any(|segment| segment.is_empty()) {
            return Err(HostTypeRegistryError::InvalidHostTypePath {
                path: path.to_string(),
            });
        }
        if self.types.contains_key(path) {
            return Err(HostTypeRegistryError::DuplicateHostType {
                path: path.to_string(),
            });
        }

        log::trace!("registering host type `{path}`");
        self.types.insert(path.to_string(), host_type);
        Ok(self)
    }

    /// Registers the [`HostType`] described by `T`.
    pub fn register_type<T: DescribeHostType + ?Sized>(&mut self) -> Result<&mut Self> {
        self.register(T::describe_host_type())
    }

    /// Registers every type produced by `host_types`, failing on the first
    /// error.
    pub fn try_from_types(
        host_types: impl IntoIterator<Item = HostType>,
    ) -> Result<Self> {
        let mut registry = Self::new();
        for host_type in host_types {
            registry.register(host_type)?;
        }
        Ok(registry)
    }
}
