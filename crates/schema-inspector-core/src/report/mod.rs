mod schema_report;
mod schema_report_builder;
mod skip_reason;
mod skipped_type;
mod type_state;
mod unmapped_argument;
mod unmapped_registration;

pub use schema_report::SchemaReport;
pub(crate) use schema_report_builder::SchemaReportBuilder;
pub use skip_reason::SkipReason;
pub use skipped_type::SkippedType;
pub use type_state::TypeState;
pub use unmapped_argument::UnmappedArgument;
pub use unmapped_registration::UnmappedRegistration;

#[cfg(test)]
mod tests;
