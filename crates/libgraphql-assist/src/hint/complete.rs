use crate::context::resolve_context;
use crate::hint::Completions;
use crate::hint::CursorToken;
use crate::hint::GrammarPosition;
use crate::ranking::rank;
use crate::schema::Schema;
use crate::state::ParserState;

/// Suggest completions for `token`, the token under the cursor, given the
/// innermost parse `state` at the cursor.
///
/// Returns `None` without a schema, at positions where nothing can be
/// completed, and where the surrounding context could not be resolved.
pub fn complete<'schema>(
    schema: Option<&'schema Schema>,
    token: &CursorToken,
    state: &ParserState<'_>,
) -> Option<Completions<'schema>> {
    let Some(schema) = schema else {
        log::debug!("no schema loaded, skipping completion");
        return None;
    };
    let position = GrammarPosition::classify(state)?;
    let ctx = resolve_context(schema, state);
    let Some(candidates) = position.collect(schema, &ctx, state) else {
        log::debug!("{position:?} context at {} is unresolved", state.kind());
        return None;
    };
    log::trace!(
        "{} {position:?} candidates before ranking against `{}`",
        candidates.len(),
        token.partial_text(),
    );

    Some(Completions {
        candidates: rank(candidates, token.partial_text()),
        replace_from: token.replace_from(),
        replace_to: token.end,
    })
}
