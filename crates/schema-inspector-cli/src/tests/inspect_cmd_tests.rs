use crate::Cli;
use crate::commands::CommandEnum;
use crate::commands::inspect::InspectCmd;
use crate::commands::inspect::InterfaceFields;
use crate::commands::inspect::OutputFormat;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

type Result<T> = anyhow::Result<T>;

const VEHICLES_SDL: &str = "
    type Query {
        vehicles: [Vehicle!]!
    }

    interface Vehicle {
        name: String
        price: Int
    }

    type Car implements Vehicle {
        name: String
        price: Int
    }

    type Bike implements Vehicle {
        name: String
        price: Int
    }
";

const VEHICLES_MANIFEST: &str = r#"{
    "host_types": [
        { "path": "garage::Vehicle", "kind": "abstract", "members": { "name": "String" } },
        {
            "path": "garage::Car",
            "implements": ["garage::Vehicle"],
            "members": { "name": "String", "price": "i32" }
        },
        {
            "path": "garage::Bike",
            "implements": ["garage::Vehicle"],
            "members": { "name": "String" }
        }
    ],
    "controllers": [{
        "coordinate": "Query.vehicles",
        "controller": "VehicleController",
        "name": "vehicles",
        "return_type": "Vec<garage::Vehicle>"
    }]
}"#;

fn write_fixture(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir.join("schema"))?;
    std::fs::write(dir.join("schema/vehicles.graphqls"), VEHICLES_SDL)?;
    std::fs::write(dir.join("schema/README.md"), "not a schema")?;
    std::fs::write(dir.join("manifest.json"), VEHICLES_MANIFEST)?;
    Ok(())
}

fn parse(args: &[&str]) -> Result<(Cli, InspectCmd)> {
    let mut cli = Cli::try_parse_from(
        ["schema-inspector", "inspect"].iter().chain(args.iter()).copied(),
    )?;
    match cli.cmd.take() {
        Some(CommandEnum::Inspect(cmd)) => Ok((cli, *cmd)),
        None => anyhow::bail!("no subcommand parsed"),
    }
}

mod arguments {
    use super::*;

    #[test]
    fn defaults() -> Result<()> {
        let (cli, cmd) = parse(&["--manifest", "manifest.json", "schema"])?;

        assert!(!cli.verbose);
        assert!(!cmd.allow_gaps);
        assert_eq!(cmd.format, OutputFormat::Text);
        assert_eq!(cmd.interface_fields, InterfaceFields::ConcreteTypesOnly);
        assert_eq!(cmd.graphql_file_exts, vec!["graphql", "graphqls"]);
        assert!(cmd.class_name_prefix.is_none());
        assert!(cmd.class_name_suffix.is_none());
        Ok(())
    }

    #[test]
    fn explicit_options() -> Result<()> {
        let (_, cmd) = parse(&[
            "-m", "manifest.json",
            "--format", "json",
            "--interface-fields", "include-abstract-type",
            "--class-name-suffix", "Impl",
            "--graphql-file-exts", "gql,graphql",
            "--wrapper-types", "Page,Edge",
            "a.graphql",
            "b.graphql",
        ])?;

        assert_eq!(cmd.format, OutputFormat::Json);
        assert_eq!(cmd.interface_fields, InterfaceFields::IncludeAbstractType);
        assert_eq!(cmd.class_name_suffix.as_deref(), Some("Impl"));
        assert_eq!(cmd.graphql_file_exts, vec!["gql", "graphql"]);
        assert_eq!(cmd.wrapper_types, vec!["Page", "Edge"]);
        assert_eq!(cmd.file_or_dir_paths.len(), 2);
        Ok(())
    }

    #[test]
    fn manifest_is_required() {
        assert!(parse(&["schema"]).is_err());
    }
}

mod running {
    use super::*;

    #[test]
    fn collects_only_matching_files() -> Result<()> {
        let dir = tempfile::tempdir()?;
        write_fixture(dir.path())?;
        let schema_dir = dir.path().join("schema");
        let (_, cmd) = parse(&[
            "-m", "manifest.json",
            schema_dir.to_str().expect("utf-8 temp path"),
        ])?;

        let (file_paths, errors) = cmd.collect_schema_files();

        assert!(errors.is_empty());
        assert_eq!(file_paths.len(), 1);
        assert!(file_paths[0].ends_with("vehicles.graphqls"));
        Ok(())
    }

    #[tokio::test]
    async fn reports_gaps_and_fails() -> Result<()> {
        let dir = tempfile::tempdir()?;
        write_fixture(dir.path())?;
        let manifest = dir.path().join("manifest.json");
        let schema_dir = dir.path().join("schema");
        let (cli, cmd) = parse(&[
            "-m", manifest.to_str().expect("utf-8 temp path"),
            schema_dir.to_str().expect("utf-8 temp path"),
        ])?;

        let result = cmd.run(cli).await;

        assert_eq!(result.exit_code, ExitCode::FAILURE);
        let stdout = result.stdout.expect("report is printed");
        assert!(stdout.contains("Found 1 unmapped fields and 0 skipped types."));
        assert!(stdout.contains("Unmapped fields: {Bike=[price]}"));
        Ok(())
    }

    #[tokio::test]
    async fn allow_gaps_succeeds_with_json_output() -> Result<()> {
        let dir = tempfile::tempdir()?;
        write_fixture(dir.path())?;
        let manifest = dir.path().join("manifest.json");
        let schema_dir = dir.path().join("schema");
        let (cli, cmd) = parse(&[
            "--allow-gaps",
            "--format", "json",
            "-m", manifest.to_str().expect("utf-8 temp path"),
            schema_dir.to_str().expect("utf-8 temp path"),
        ])?;

        let result = cmd.run(cli).await;

        assert_eq!(result.exit_code, ExitCode::SUCCESS);
        let report: serde_json::Value =
            serde_json::from_str(result.stdout.expect("report is printed").as_str())?;
        assert_eq!(report["unmapped_fields"], serde_json::json!(["Bike.price"]));
        assert_eq!(report["skipped_types"], serde_json::json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn missing_manifest_is_an_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        write_fixture(dir.path())?;
        let schema_dir = dir.path().join("schema");
        let missing = dir.path().join("missing.json");
        let (cli, cmd) = parse(&[
            "-m", missing.to_str().expect("utf-8 temp path"),
            schema_dir.to_str().expect("utf-8 temp path"),
        ])?;

        let result = cmd.run(cli).await;

        assert_eq!(result.exit_code, ExitCode::FAILURE);
        assert!(result.stdout.is_none());
        assert!(result.stderr.is_some_and(|stderr| stderr.contains("Failed to read host manifest")));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_schema_is_an_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        write_fixture(dir.path())?;
        let bad_schema = dir.path().join("bad.graphql");
        std::fs::write(&bad_schema, "type Query { vehicles: [Missing] }")?;
        let manifest = dir.path().join("manifest.json");
        let (cli, cmd) = parse(&[
            "-m", manifest.to_str().expect("utf-8 temp path"),
            bad_schema.to_str().expect("utf-8 temp path"),
        ])?;

        let result = cmd.run(cli).await;

        assert_eq!(result.exit_code, ExitCode::FAILURE);
        assert!(result.stderr.is_some_and(|stderr| stderr.contains("Inspection failed")));
        Ok(())
    }
}
