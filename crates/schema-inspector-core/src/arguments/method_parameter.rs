use crate::arguments::ContextValueBinding;

/// One parameter of a handler method.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MethodParameter {
    binding: Option<ContextValueBinding>,
    index: usize,
    name: Option<String>,
}
impl MethodParameter {
    pub fn binding(&self) -> Option<&ContextValueBinding> {
        self.binding.as_ref()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The parameter's declared name, if it's known.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn new(index: usize, name: Option<&str>) -> Self {
        Self {
            binding: None,
            index,
            name: name.map(str::to_string),
        }
    }

    pub fn with_binding(mut self, binding: ContextValueBinding) -> Self {
        self.binding = Some(binding);
        self
    }
}
