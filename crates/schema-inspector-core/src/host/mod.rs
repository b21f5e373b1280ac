mod describe_host_type;
mod host_type;
mod host_type_kind;
mod host_type_ref;
mod host_type_ref_parse_error;
mod host_type_registry;
mod host_type_registry_error;
mod wrapper_types;

pub use describe_host_type::DescribeHostType;
pub use describe_host_type::DescribeHostTypeRef;
pub use host_type::HostType;
pub use host_type_kind::HostTypeKind;
pub use host_type_ref::HostTypeRef;
pub use host_type_ref_parse_error::HostTypeRefParseError;
pub use host_type_registry::HostTypeRegistry;
pub use host_type_registry_error::HostTypeRegistryError;
pub use wrapper_types::WrapperTypes;

/// The last `::`-separated segment of a host type path.
pub fn simple_name(path: &str) -> &str {
    path.rsplit_once("::").map_or(path, |(_, name)| name)
}

/// Everything before the last `::`-separated segment of a host type path, or
/// the empty string for a path with a single segment.
pub fn module_of(path: &str) -> &str {
    path.rsplit_once("::").map_or("", |(module, _)| module)
}
