use crate::host::HostTypeKind;
use crate::host::HostTypeRef;
use indexmap::IndexMap;

/// A type in the host application that schema types may be bound to.
///
/// A `HostType` records what the inspector would otherwise learn through
/// runtime reflection: the type's fully-qualified path, whether it's
/// [abstract](HostTypeKind::Abstract), the abstract types it implements,
/// and the ordered set of members (fields or accessor methods) along with
/// their declared types.
///
/// Abstract host types can also list the concrete types they permit. This
/// models a sealed enum whose variants wrap each implementation.
///
/// Most `HostType`s are produced by `#[derive(HostType)]`, but they can be
/// built by hand as well:
///
/// ```
/// use schema_inspector_core::host::HostType;
/// use schema_inspector_core::host::HostTypeRef;
///
/// let car = HostType::concrete("garage::Car")
///     .with_member("name", HostTypeRef::named("String"))
///     .implementing("garage::Vehicle");
///
/// assert_eq!(car.simple_name(), "Car");
/// assert_eq!(car.module_path(), "garage");
/// assert!(car.member("name").is_some());
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct HostType {
    #[serde(default)]
    implements: Vec<String>,
    #[serde(default)]
    kind: HostTypeKind,
    #[serde(default)]
    members: IndexMap<String, HostTypeRef>,
    path: String,
    #[serde(default)]
    permits: Vec<String>,
}
impl HostType {
    pub fn abstract_type(path: impl Into<String>) -> Self {
        Self::new(path, HostTypeKind::Abstract)
    }

    pub fn concrete(path: impl Into<String>) -> Self {
        Self::new(path, HostTypeKind::Concrete)
    }

    /// Paths of the abstract host types this type directly implements.
    pub fn implements(&self) -> &[String] {
        self.implements.as_slice()
    }

    pub fn implementing(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        if !self.implements.contains(&path) {
            self.implements.push(path);
        }
        self
    }

    pub fn is_abstract(&self) -> bool {
        self.kind == HostTypeKind::Abstract
    }

    pub fn kind(&self) -> HostTypeKind {
        self.kind
    }

    pub fn member(&self, name: &str) -> Option<&HostTypeRef> {
        self.members.get(name)
    }

    pub fn members(&self) -> &IndexMap<String, HostTypeRef> {
        &self.members
    }

    /// The module portion of this type's path (everything before the last
    /// `::` segment).
    pub fn module_path(&self) -> &str {
        crate::host::module_of(self.path.as_str())
    }

    pub fn new(path: impl Into<String>, kind: HostTypeKind) -> Self {
        Self {
            implements: vec![],
            kind,
            members: IndexMap::new(),
            path: path.into(),
            permits: vec![],
        }
    }

    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    /// Paths of the concrete host types this abstract type explicitly
    /// permits.
    pub fn permits(&self) -> &[String] {
        self.permits.as_slice()
    }

    pub fn permitting(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        if !self.permits.contains(&path) {
            self.permits.push(path);
        }
        self
    }

    pub fn simple_name(&self) -> &str {
        crate::host::simple_name(self.path.as_str())
    }

    /// Adds (or replaces) a member. Members keep the order in which they
    /// were first added.
    pub fn with_member(mut self, name: impl Into<String>, type_ref: HostTypeRef) -> Self {
        self.members.insert(name.into(), type_ref);
        self
    }
}
