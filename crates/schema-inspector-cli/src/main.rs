mod cli;
mod command;
mod command_result;
mod commands;
mod manifest;
mod output_utils;

#[cfg(test)]
mod tests;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                std::process::ExitCode::FAILURE
            },
        }
    }
}

/// Maps a `LOG_LEVEL` value to a tracing level. `VERBOSE` is an alias for
/// `DEBUG`.
pub(crate) fn parse_log_level(value: &str) -> Option<tracing::Level> {
    match value.trim().to_ascii_uppercase().as_str() {
        "DEBUG" | "VERBOSE" => Some(tracing::Level::DEBUG),
        "INFO" => Some(tracing::Level::INFO),
        "TRACE" => Some(tracing::Level::TRACE),
        "WARN" => Some(tracing::Level::WARN),
        _ => None,
    }
}

fn setup_logger(cli: &Cli) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let env_level = env_val.as_deref().map(|value| (value, parse_log_level(value)));
    let log_level = match (cli.verbose, env_level) {
        (true, _) => tracing::Level::DEBUG,
        (false, Some((_, Some(level)))) => level,
        (false, Some((_, None)) | None) => DEFAULT_LOG_LEVEL,
    };

    // Reports go to stdout, so logs stay on stderr.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if !cli.verbose
        && let Some((invalid, None)) = env_level {
        log::warn!("Invalid `LOG_LEVEL` environment variable value: `{invalid}`");
    }
}
