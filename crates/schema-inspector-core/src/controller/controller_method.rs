use crate::host::DescribeHostTypeRef;
use crate::host::HostTypeRef;

/// A handler method registered to fetch the data for one schema field.
///
/// Only the parts of the method signature that matter to inspection are
/// recorded: the declared return type and the names of the arguments bound
/// from the field's GraphQL arguments.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ControllerMethod {
    #[serde(default)]
    arguments: Vec<String>,
    controller: String,
    name: String,
    return_type: HostTypeRef,
}
impl ControllerMethod {
    /// Names of the method parameters bound to GraphQL field arguments.
    pub fn arguments(&self) -> &[String] {
        self.arguments.as_slice()
    }

    pub fn controller(&self) -> &str {
        self.controller.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        controller: impl Into<String>,
        name: impl Into<String>,
        return_type: HostTypeRef,
    ) -> Self {
        Self {
            arguments: vec![],
            controller: controller.into(),
            name: name.into(),
            return_type,
        }
    }

    /// A method whose return type is described by `T`.
    pub fn returning<T: DescribeHostTypeRef + ?Sized>(
        controller: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::new(controller, name, T::describe_host_type_ref())
    }

    pub fn return_type(&self) -> &HostTypeRef {
        &self.return_type
    }

    pub fn with_argument(mut self, name: impl Into<String>) -> Self {
        self.arguments.push(name.into());
        self
    }
}
impl std::fmt::Display for ControllerMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.controller, self.name)
    }
}
