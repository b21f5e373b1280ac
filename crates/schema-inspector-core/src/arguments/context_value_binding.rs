/// Which context a bound parameter reads from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextScope {
    Global,
    Local,
}
impl std::fmt::Display for ContextScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Global => "global",
            Self::Local => "local",
        })
    }
}

/// Marks a method parameter as bound to a context value.
///
/// Without an explicit name, the value is looked up under the parameter's
/// own name.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ContextValueBinding {
    #[serde(alias = "value", default)]
    name: Option<String>,
    #[serde(default)]
    required: bool,
    scope: ContextScope,
}
impl ContextValueBinding {
    pub fn global() -> Self {
        Self::new(ContextScope::Global)
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn local() -> Self {
        Self::new(ContextScope::Local)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn new(scope: ContextScope) -> Self {
        Self {
            name: None,
            required: false,
            scope,
        }
    }

    /// Makes a missing value an error instead of an absence.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn scope(&self) -> ContextScope {
        self.scope
    }
}
