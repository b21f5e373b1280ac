//! Strategies for deciding which [host types](crate::host::HostType) a
//! schema type may be bound to.

mod class_name_table;
mod class_name_type_resolver;
mod class_resolver;
mod class_resolver_chain;
mod naming_convention_class_resolver;

pub use class_name_table::ClassNameTable;
pub use class_name_type_resolver::ClassNameTypeResolver;
pub use class_resolver::ClassNameFunction;
pub use class_resolver::ClassResolver;
pub use class_resolver::ClassResolverConfigError;
pub use class_resolver_chain::ClassResolverChain;
pub use naming_convention_class_resolver::NamingConventionClassResolver;
