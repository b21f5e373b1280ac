use crate::arguments::ArgumentResolutionError;
use crate::arguments::ContextValue;
use crate::arguments::DataFetchingEnvironment;
use crate::arguments::MethodParameter;

pub trait ArgumentResolver: Send + Sync {
    fn supports(&self, parameter: &MethodParameter) -> bool;

    /// Produces the value for `parameter`. `Ok(None)` signals that no value
    /// was found, leaving the caller free to try something else.
    fn resolve(
        &self,
        parameter: &MethodParameter,
        environment: &DataFetchingEnvironment,
    ) -> Result<Option<ContextValue>, ArgumentResolutionError>;
}
