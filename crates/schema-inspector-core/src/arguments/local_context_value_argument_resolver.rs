use crate::arguments::ArgumentResolutionError;
use crate::arguments::ArgumentResolver;
use crate::arguments::ContextScope;
use crate::arguments::ContextValue;
use crate::arguments::DataFetchingEnvironment;
use crate::arguments::MethodParameter;
use crate::arguments::context_value_argument_resolver::resolve_from_context;

/// Resolves parameters bound to a value in the local context set by a
/// parent data fetcher. A missing local context is treated like an empty
/// one.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalContextValueArgumentResolver;
impl LocalContextValueArgumentResolver {
    pub fn new() -> Self {
        Self
    }
}

impl ArgumentResolver for LocalContextValueArgumentResolver {
    fn supports(&self, parameter: &MethodParameter) -> bool {
        parameter.binding().is_some_and(|binding| binding.scope() == ContextScope::Local)
    }

    fn resolve(
        &self,
        parameter: &MethodParameter,
        environment: &DataFetchingEnvironment,
    ) -> Result<Option<ContextValue>, ArgumentResolutionError> {
        resolve_from_context(parameter, environment.local_context())
    }
}
