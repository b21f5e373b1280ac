pub use schema_inspector_core::*;

/// Derives `DescribeHostType` for a struct or enum so that it can be
/// registered with a [`HostTypeRegistry`](crate::host::HostTypeRegistry).
#[cfg(feature = "macros")]
pub use schema_inspector_macros::HostType;

/// Compile-time helpers for describing host types.
#[cfg(feature = "macros")]
pub mod macros {
    pub use schema_inspector_macros::*;
}
