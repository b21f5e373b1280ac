use crate::arguments::ArgumentResolutionError;
use crate::arguments::ArgumentResolver;
use crate::arguments::ContextValue;
use crate::arguments::ContextValueArgumentResolver;
use crate::arguments::DataFetchingEnvironment;
use crate::arguments::LocalContextValueArgumentResolver;
use crate::arguments::MethodParameter;

/// Delegates to the first resolver that supports a parameter.
#[derive(Default)]
pub struct ArgumentResolverChain {
    resolvers: Vec<Box<dyn ArgumentResolver>>,
}
impl ArgumentResolverChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, resolver: impl ArgumentResolver + 'static) -> &mut Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// A chain with the local and global context value resolvers.
    pub fn with_context_value_resolvers() -> Self {
        let mut chain = Self::new();
        chain
            .push(LocalContextValueArgumentResolver::new())
            .push(ContextValueArgumentResolver::new());
        chain
    }
}

impl ArgumentResolver for ArgumentResolverChain {
    fn supports(&self, parameter: &MethodParameter) -> bool {
        self.resolvers.iter().any(|resolver| resolver.supports(parameter))
    }

    fn resolve(
        &self,
        parameter: &MethodParameter,
        environment: &DataFetchingEnvironment,
    ) -> Result<Option<ContextValue>, ArgumentResolutionError> {
        match self.resolvers.iter().find(|resolver| resolver.supports(parameter)) {
            Some(resolver) => resolver.resolve(parameter, environment),
            None => Err(ArgumentResolutionError::UnsupportedParameter {
                index: parameter.index(),
            }),
        }
    }
}

impl std::fmt::Debug for ArgumentResolverChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentResolverChain")
            .field("len", &self.resolvers.len())
            .finish()
    }
}
