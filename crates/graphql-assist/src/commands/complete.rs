use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use anyhow::Context;
use libgraphql_assist::Schema;
use libgraphql_assist::hint::CursorToken;
use libgraphql_assist::hint::complete;
use libgraphql_assist::state::StateFrame;
use libgraphql_assist::state::with_state_chain;
use std::path::Path;
use std::path::PathBuf;

/// A cursor position as an editor reports it.
///
/// ```json
/// {
///   "token": { "text": "ti", "start": 18, "end": 20 },
///   "state": [
///     { "kind": "Document" },
///     { "kind": "Query", "name": "Q" },
///     { "kind": "SelectionSet" }
///   ]
/// }
/// ```
#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CompletionRequest {
    /// The parser state chain at the cursor, outermost first.
    pub state: Vec<StateFrame>,
    pub token: CursorToken,
}

#[derive(Debug, clap::Args)]
pub(crate) struct CompleteCmd {
    #[arg(
        default_value="-",
        help="Path to a JSON completion request, or `-` to read it from \
             stdin.",
        name="REQUEST_PATH",
    )]
    request_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for CompleteCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        match self.complete(&cli).await {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(err) => CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}
impl CompleteCmd {
    async fn complete(&self, cli: &Cli) -> anyhow::Result<String> {
        let schema = cli.load_schema()?;
        let request_json = read_request(&self.request_path).await?;
        let request: CompletionRequest = serde_json::from_str(&request_json)
            .context("Invalid completion request")?;
        completions_json(schema.as_ref(), &request)
    }
}

/// The completions for `request` as JSON, `null` when there are none.
pub(crate) fn completions_json(
    schema: Option<&Schema>,
    request: &CompletionRequest,
) -> anyhow::Result<String> {
    log::debug!(
        "Completing `{}` under {} parser states.",
        request.token.text,
        request.state.len(),
    );
    let completions = with_state_chain(&request.state, |state| {
        complete(schema, &request.token, state)
    }).flatten();
    if completions.is_none() {
        log::debug!("No completions.");
    }
    Ok(serde_json::to_string_pretty(&completions)?)
}

async fn read_request(request_path: &Path) -> anyhow::Result<String> {
    if request_path == Path::new("-") {
        return tokio::task::spawn_blocking(|| std::io::read_to_string(std::io::stdin()))
            .await?
            .context("Failed to read the request from stdin");
    }
    tokio::fs::read_to_string(request_path)
        .await
        .with_context(|| format!("Failed to read {}", request_path.display()))
}
