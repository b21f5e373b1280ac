use crate::resolver::ClassResolverConfigError;
use crate::schema::SchemaBuildError;
use thiserror::Error;

/// Problems that prevent inspection from running at all. When one of these
/// is returned there is no partial report.
#[derive(Debug, Error, PartialEq)]
pub enum InspectError {
    #[error("Invalid class resolver configuration: {0}")]
    ClassResolverConfig(#[from] ClassResolverConfigError),

    #[error("Failed to build the schema to inspect: {0}")]
    SchemaBuild(#[from] SchemaBuildError),
}
