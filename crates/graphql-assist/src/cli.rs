use crate::CommandResult;
use crate::commands;
use crate::graphql_files;
use crate::output_utils;
use anyhow::Context;
use clap::CommandFactory;
use libgraphql_assist::Schema;
use libgraphql_assist::schema::SchemaBuilder;
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "graphql-assist", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
            "gql".to_string(),
        ],
        global=true,
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter=',',
    )]
    pub graphql_file_exts: Vec<String>,

    #[arg(
        global=true,
        help="Paths to one or more GraphQL schema files or directories \
             containing them. Without a schema, only syntax is checked and \
             no completions are offered.",
        long,
        short='s',
        value_delimiter=',',
    )]
    pub schema: Vec<PathBuf>,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> CommandResult {
        match Self::command().print_help() {
            Ok(()) => CommandResult::success(),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to print help: {err}",
                output_utils::RED_X,
            )),
        }
    }

    /// Build the schema named by `--schema`, or `None` if no schema paths
    /// were given.
    pub(crate) fn load_schema(&self) -> anyhow::Result<Option<Schema>> {
        if self.schema.is_empty() {
            log::debug!("No --schema given.");
            return Ok(None);
        }

        let file_paths = graphql_files::find_graphql_files(
            &self.schema,
            &self.graphql_file_exts,
        )?;
        if file_paths.is_empty() {
            anyhow::bail!("No schema files found at {:?}.", self.schema);
        }
        log::debug!("Loading schema from {} files.", file_paths.len());

        let schema = SchemaBuilder::new()
            .load_files(file_paths)
            .and_then(SchemaBuilder::build)
            .context("Failed to build the schema")?;
        Ok(Some(schema))
    }
}
