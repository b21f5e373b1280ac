mod controller_method;
mod controller_registry;
mod controller_registry_builder;
mod controller_registry_error;
mod mapping_target;

pub use controller_method::ControllerMethod;
pub use controller_registry::ControllerRegistry;
pub use controller_registry_builder::ControllerRegistryBuilder;
pub use controller_registry_error::ControllerRegistryError;
pub use mapping_target::MappingTarget;

#[cfg(test)]
mod tests;
