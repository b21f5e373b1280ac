pub mod arguments;
pub(crate) mod ast;
pub mod controller;
pub mod host;
pub mod inspect;
pub mod loc;
mod named_ref;
pub mod report;
pub mod resolver;
pub mod schema;

pub use inspect::SchemaMappingInspector;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use report::SchemaReport;
