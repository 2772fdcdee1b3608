mod cli;
mod command;
mod command_result;
mod commands;
mod graphql_files;
mod output_utils;

#[cfg(test)]
mod tests;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let result =
        if let Some(command) = cli.cmd.take() {
            command.run(cli).await
        } else {
            cli.run_default().await
        };

    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}")
    }
    result.exit_code
}

fn setup_logger(cli: &Cli) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) = resolve_log_level(cli.verbose, env_val.as_deref());

    // Logs go to stderr so that `--json` and `complete` output on stdout
    // stays machine-readable.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// `--verbose` takes precedence over the `LOG_LEVEL` environment variable.
/// Alongside the level, returns a warning to log once logging is set up.
pub(crate) fn resolve_log_level(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }
    match env_val.map(str::trim) {
        None | Some("") => (DEFAULT_LOG_LEVEL, None),
        Some(val) if val.eq_ignore_ascii_case("verbose") =>
            (tracing::Level::DEBUG, None),
        Some(val) => match val.parse::<tracing::Level>() {
            Ok(level) => (level, None),
            Err(_) => (
                DEFAULT_LOG_LEVEL,
                Some(format!("Invalid `LOG_LEVEL` environment variable value: `{val}`")),
            ),
        },
    }
}
