use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::manifest::HostManifest;
use crate::output_utils;
use schema_inspector::SchemaMappingInspector;
use schema_inspector::SchemaReport;
use schema_inspector::inspect::InterfaceFieldPolicy;
use std::collections::HashSet;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use walkdir::WalkDir;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    Json,
    #[default]
    Text,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum InterfaceFields {
    #[default]
    ConcreteTypesOnly,
    IncludeAbstractType,
}
impl From<InterfaceFields> for InterfaceFieldPolicy {
    fn from(value: InterfaceFields) -> Self {
        match value {
            InterfaceFields::ConcreteTypesOnly => Self::ConcreteTypesOnly,
            InterfaceFields::IncludeAbstractType => Self::IncludeAbstractType,
        }
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct InspectCmd {
    #[arg(
        help="Exit successfully even when the report lists unmapped fields or \
             skipped types.",
        long,
    )]
    pub allow_gaps: bool,

    #[arg(
        help="Prefix prepended to a schema type name to get the simple name of \
             the host type expected to back it.",
        long,
    )]
    pub class_name_prefix: Option<String>,

    #[arg(
        help="Suffix appended to a schema type name to get the simple name of \
             the host type expected to back it.",
        long,
    )]
    pub class_name_suffix: Option<String>,

    #[arg(
        default_value_t,
        help="Output format of the inspection report.",
        long,
        value_enum,
    )]
    pub format: OutputFormat,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub graphql_file_exts: Vec<String>,

    #[arg(
        default_value_t,
        help="Whether interface fields are also checked against the abstract \
             host type a controller declares.",
        long,
        value_enum,
    )]
    pub interface_fields: InterfaceFields,

    #[arg(
        help="Path to the JSON manifest describing host types, controller \
             methods, and class mappings.",
        long,
        short='m',
    )]
    pub manifest: PathBuf,

    #[arg(
        help="Additional generic container types to unwrap when matching host \
             types against the schema.",
        long,
        value_delimiter = ',',
    )]
    pub wrapper_types: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which make up the schema to inspect.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub file_or_dir_paths: Vec<PathBuf>,
}
impl InspectCmd {
    pub(crate) fn build_inspector(&self, manifest: &HostManifest) -> SchemaMappingInspector {
        let mut builder = SchemaMappingInspector::builder()
            .class_name_type_resolver(&manifest.class_name_type_resolver())
            .interface_field_policy(self.interface_fields.into());

        if self.class_name_prefix.is_some() || self.class_name_suffix.is_some() {
            let prefix = self.class_name_prefix.clone().unwrap_or_default();
            let suffix = self.class_name_suffix.clone().unwrap_or_default();
            builder = builder.class_name_function(
                move |schema_type_name: &str| format!("{prefix}{schema_type_name}{suffix}"),
            );
        }

        for wrapper_type in manifest.wrapper_types.iter().chain(&self.wrapper_types) {
            builder = builder.wrapper_type(wrapper_type.as_str());
        }
        builder.build()
    }

    /// Finds all GraphQL files recursively located at or under each path
    /// passed as an arg.
    pub(crate) fn collect_schema_files(&self) -> (Vec<PathBuf>, Vec<Box<dyn Error>>) {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut errors: Vec<Box<dyn Error>> = vec![];
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(Box::new(e));
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }
                log::trace!("Found file at {entry_path:#?}.");
                let matches_ext = entry_path.extension()
                    .is_some_and(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()));
                if matches_ext {
                    match std::fs::canonicalize(entry_path) {
                        Ok(canonical_path) => file_paths.push(canonical_path),
                        Err(e) => errors.push(Box::new(e)),
                    }
                }
            }
        }

        // A single file named explicitly is loaded even if its extension
        // isn't one of `graphql_file_exts`.
        if file_paths.is_empty()
            && errors.is_empty()
            && let [only_path] = self.file_or_dir_paths.as_slice()
            && only_path.is_file() {
            log::warn!(
                "Proceeding to inspect {only_path:#?} even though it doesn't \
                match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.join(", "),
            );
            file_paths.push(only_path.to_owned());
        }

        log::debug!("Found {} GraphQL files to inspect.", file_paths.len());
        (file_paths, errors)
    }

    pub(crate) fn render(&self, report: &SchemaReport) -> anyhow::Result<String> {
        Ok(match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report)?,
            OutputFormat::Text if report.is_empty() => format!(
                "{} Every schema field is mapped.\n{report}",
                output_utils::GREEN_CHECK,
            ),
            OutputFormat::Text => format!(
                "{} Found {} unmapped fields and {} skipped types.\n{report}",
                output_utils::WARNING_SIGN,
                report.unmapped_field_count(),
                report.skipped_type_count(),
            ),
        })
    }
}

#[inherent::inherent]
impl RunnableCommand for InspectCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let (file_paths, errors) = self.collect_schema_files();
        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors while locating GraphQL files: {errors:#?}",
                output_utils::RED_X,
            ));
        }
        if file_paths.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No GraphQL files found.",
                output_utils::RED_X,
            ));
        }

        let manifest = match HostManifest::load(self.manifest.as_path()) {
            Ok(manifest) => manifest,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };
        let (controllers, host_types) = match (
            manifest.controller_registry(),
            manifest.host_type_registry(),
        ) {
            (Ok(controllers), Ok(host_types)) => (controllers, host_types),
            (Err(e), _) | (_, Err(e)) => return CommandResult::stderr(format_args!(
                "{} Invalid host manifest: {e:#}",
                output_utils::RED_X,
            )),
        };

        let inspector = self.build_inspector(&manifest);
        let report = match inspector.inspect_files(file_paths, &controllers, &host_types) {
            Ok(report) => report,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Inspection failed: {e}",
                output_utils::RED_X,
            )),
        };

        let output = match self.render(&report) {
            Ok(output) => output,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to render the report: {e:#}",
                output_utils::RED_X,
            )),
        };
        let exit_code =
            if report.is_empty() || self.allow_gaps {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        CommandResult::stdout(format_args!("{output}")).with_exit_code(exit_code)
    }
}
