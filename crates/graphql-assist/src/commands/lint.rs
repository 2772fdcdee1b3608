use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::graphql_files;
use crate::output_utils;
use anyhow::Context;
use libgraphql_assist::lint::Diagnostic;
use libgraphql_assist::lint::lint;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, clap::Args)]
pub(crate) struct LintCmd {
    #[arg(
        help="Paths to one or more GraphQL documents or directories \
             containing them which need to be linted.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,

    #[arg(
        help="Print diagnostics as JSON.",
        long,
    )]
    json: bool,
}

#[derive(Debug, serde::Serialize)]
struct FileDiagnostics {
    diagnostics: Vec<Diagnostic>,
    file: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for LintCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        match self.lint_files(&cli).await {
            Ok(result) => result,
            Err(err) => CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}
impl LintCmd {
    async fn lint_files(&self, cli: &Cli) -> anyhow::Result<CommandResult> {
        let schema = cli.load_schema()?;
        if schema.is_none() {
            log::warn!("No --schema given; only syntax will be checked.");
        }

        let file_paths = graphql_files::find_graphql_files(
            &self.file_or_dir_paths,
            &cli.graphql_file_exts,
        )?;
        log::debug!("Linting {} GraphQL files.", file_paths.len());

        let mut reports = vec![];
        for file_path in file_paths {
            let source = tokio::fs::read_to_string(&file_path)
                .await
                .with_context(|| format!("Failed to read {}", file_path.display()))?;
            let diagnostics = lint(source.as_str(), schema.as_ref());
            log::trace!(
                "{} diagnostics for {}.",
                diagnostics.len(),
                file_path.display(),
            );
            reports.push(FileDiagnostics {
                diagnostics,
                file: file_path,
            });
        }

        let num_files = reports.len();
        let num_problems = reports.iter()
            .map(|report| report.diagnostics.len())
            .sum::<usize>();
        let exit_code =
            if num_problems == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };

        if self.json {
            let json = serde_json::to_string_pretty(&reports)?;
            return Ok(CommandResult::stdout(format_args!("{json}"))
                .with_exit_code(exit_code));
        }

        if num_problems == 0 {
            return Ok(CommandResult::stdout(format_args!(
                "{} No problems found in {num_files} files.",
                output_utils::GREEN_CHECK,
            )));
        }

        let lines = reports.iter()
            .flat_map(|report| report.diagnostics.iter().map(|diagnostic| {
                format!("{}:{diagnostic}", report.file.display())
            }))
            .collect::<Vec<_>>();
        let num_files_with_problems = reports.iter()
            .filter(|report| !report.diagnostics.is_empty())
            .count();
        Ok(CommandResult::stdout(format_args!(
            "{}\n{} {num_problems} problems in {num_files_with_problems} of \
            {num_files} files.",
            lines.join("\n"),
            output_utils::RED_X,
        )).with_exit_code(exit_code))
    }
}
