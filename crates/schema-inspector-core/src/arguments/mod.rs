//! Resolution of handler method arguments from the values stashed in a
//! GraphQL request's local and global contexts.

mod argument_resolution_error;
mod argument_resolver;
mod argument_resolver_chain;
mod context_value_argument_resolver;
mod context_value_binding;
mod data_fetching_environment;
mod graphql_context;
mod local_context_value_argument_resolver;
mod method_parameter;

pub use argument_resolution_error::ArgumentResolutionError;
pub use argument_resolver::ArgumentResolver;
pub use argument_resolver_chain::ArgumentResolverChain;
pub use context_value_argument_resolver::ContextValueArgumentResolver;
pub use context_value_binding::ContextScope;
pub use context_value_binding::ContextValueBinding;
pub use data_fetching_environment::DataFetchingEnvironment;
pub use graphql_context::ContextValue;
pub use graphql_context::GraphQLContext;
pub use local_context_value_argument_resolver::LocalContextValueArgumentResolver;
pub use method_parameter::MethodParameter;
