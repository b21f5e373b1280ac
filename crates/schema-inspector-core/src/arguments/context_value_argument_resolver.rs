use crate::arguments::ArgumentResolutionError;
use crate::arguments::ArgumentResolver;
use crate::arguments::ContextScope;
use crate::arguments::ContextValue;
use crate::arguments::DataFetchingEnvironment;
use crate::arguments::GraphQLContext;
use crate::arguments::MethodParameter;

type Result<T> = std::result::Result<T, ArgumentResolutionError>;

/// Resolves parameters bound to a value in the request's global context.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContextValueArgumentResolver;
impl ContextValueArgumentResolver {
    pub fn new() -> Self {
        Self
    }
}

impl ArgumentResolver for ContextValueArgumentResolver {
    fn supports(&self, parameter: &MethodParameter) -> bool {
        parameter.binding().is_some_and(|binding| binding.scope() == ContextScope::Global)
    }

    fn resolve(
        &self,
        parameter: &MethodParameter,
        environment: &DataFetchingEnvironment,
    ) -> Result<Option<ContextValue>> {
        resolve_from_context(parameter, Some(environment.global_context()))
    }
}

/// Looks up a bound parameter's value in `context`, using the binding's
/// explicit name or else the parameter's own name.
pub(crate) fn resolve_from_context(
    parameter: &MethodParameter,
    context: Option<&GraphQLContext>,
) -> Result<Option<ContextValue>> {
    let Some(binding) = parameter.binding() else {
        return Err(ArgumentResolutionError::UnsupportedParameter {
            index: parameter.index(),
        });
    };
    let name = binding.name()
        .or(parameter.name())
        .ok_or(ArgumentResolutionError::MissingParameterName {
            index: parameter.index(),
        })?;

    let value = context.and_then(|context| context.get(name)).cloned();
    log::trace!(
        "{} context value `{name}` for parameter {}: {}",
        binding.scope(),
        parameter.index(),
        if value.is_some() { "found" } else { "absent" },
    );

    if value.is_none() && binding.is_required() {
        return Err(ArgumentResolutionError::MissingRequiredValue {
            index: parameter.index(),
            name: name.to_string(),
            scope: binding.scope(),
        });
    }
    Ok(value)
}
