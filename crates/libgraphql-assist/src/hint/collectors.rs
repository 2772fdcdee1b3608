use crate::context::ContextType;
use crate::context::TypeContext;
use crate::hint::CandidateEntry;
use crate::hint::GrammarPosition;
use crate::schema::Schema;
use crate::state::ParserState;
use crate::state::StateKind;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;

impl GrammarPosition {
    /// Gather the unranked candidates for this position. `None` means the
    /// context needed to suggest anything here is unknown.
    pub(crate) fn collect<'schema>(
        &self,
        schema: &'schema Schema,
        ctx: &TypeContext<'schema>,
        state: &ParserState<'_>,
    ) -> Option<Vec<CandidateEntry<'schema>>> {
        match self {
            Self::Selection => selection_candidates(schema, ctx),
            Self::ArgumentName => argument_candidates(ctx),
            Self::InputObjectField => input_object_field_candidates(ctx),
            Self::InputValue => input_value_candidates(schema, ctx),
            Self::TypeCondition => Some(type_condition_candidates(schema, ctx)),
            Self::InputType => Some(input_type_candidates(schema)),
            Self::DirectiveName => Some(directive_candidates(schema, state)),
        }
    }
}

fn field_entry(field: &Field) -> CandidateEntry<'_> {
    CandidateEntry {
        text: field.name(),
        type_: Some(field.type_annotation().into()),
        description: field.description(),
    }
}

fn type_entry(graphql_type: &GraphQLType) -> CandidateEntry<'_> {
    CandidateEntry {
        text: graphql_type.name(),
        type_: None,
        description: graphql_type.description(),
    }
}

fn selection_candidates<'schema>(
    schema: &'schema Schema,
    ctx: &TypeContext<'schema>,
) -> Option<Vec<CandidateEntry<'schema>>> {
    let parent_type = ctx.parent_type()?;
    let mut fields = parent_type.fields()
        .map(|fields| fields.values().collect::<Vec<_>>())
        .unwrap_or_default();
    if parent_type.is_abstract() {
        fields.push(schema.typename_meta_field_def());
    }
    if schema.is_query_type(parent_type) {
        fields.push(schema.schema_meta_field_def());
        fields.push(schema.type_meta_field_def());
    }
    Some(fields.into_iter().map(field_entry).collect())
}

fn argument_candidates<'schema>(
    ctx: &TypeContext<'schema>,
) -> Option<Vec<CandidateEntry<'schema>>> {
    let arg_defs = ctx.arg_defs()?;
    Some(arg_defs.values().map(|param| CandidateEntry {
        text: param.name(),
        type_: Some(param.type_annotation().into()),
        description: param.description(),
    }).collect())
}

fn input_object_field_candidates<'schema>(
    ctx: &TypeContext<'schema>,
) -> Option<Vec<CandidateEntry<'schema>>> {
    let field_defs = ctx.object_field_defs()?;
    Some(field_defs.values().map(|input_field| CandidateEntry {
        text: input_field.name(),
        type_: Some(input_field.type_annotation().into()),
        description: input_field.description(),
    }).collect())
}

fn input_value_candidates<'schema>(
    schema: &'schema Schema,
    ctx: &TypeContext<'schema>,
) -> Option<Vec<CandidateEntry<'schema>>> {
    let input_type = ctx.input_type()?.named_type(schema)?;
    match input_type {
        GraphQLType::Enum(enum_type) => Some(
            enum_type.values().values().map(|value| CandidateEntry {
                text: value.name(),
                type_: Some(ContextType::Named(input_type)),
                description: value.description(),
            }).collect()
        ),

        GraphQLType::Bool => Some(vec![
            CandidateEntry {
                text: "true",
                type_: Some(ContextType::Named(input_type)),
                description: Some("Not false."),
            },
            CandidateEntry {
                text: "false",
                type_: Some(ContextType::Named(input_type)),
                description: Some("Not true."),
            },
        ]),

        _ => None,
    }
}

fn type_condition_candidates<'schema>(
    schema: &'schema Schema,
    ctx: &TypeContext<'schema>,
) -> Vec<CandidateEntry<'schema>> {
    match ctx.parent_type() {
        Some(parent_type) if parent_type.is_abstract() =>
            parent_type.possible_types(schema)
                .into_iter()
                .map(type_entry)
                .collect(),

        Some(parent_type) => vec![type_entry(parent_type)],

        None => schema.all_types()
            .values()
            .filter(|graphql_type| graphql_type.is_composite())
            .map(type_entry)
            .collect(),
    }
}

fn input_type_candidates(schema: &Schema) -> Vec<CandidateEntry<'_>> {
    schema.all_types()
        .values()
        .filter(|graphql_type| graphql_type.is_input_type())
        .map(type_entry)
        .collect()
}

fn directive_candidates<'schema>(
    schema: &'schema Schema,
    state: &ParserState<'_>,
) -> Vec<CandidateEntry<'schema>> {
    let applies: fn(&Directive) -> bool = match state.prev_kind() {
        Some(StateKind::Field) => Directive::on_field,
        Some(kind) if kind.is_fragment() => Directive::on_fragment,
        // A `{ ... }` shorthand query has nowhere to put a directive.
        Some(StateKind::Query | StateKind::Mutation | StateKind::Subscription) =>
            Directive::on_operation,
        _ => return vec![],
    };
    schema.all_directives()
        .values()
        .filter(|directive| applies(directive))
        .map(|directive| CandidateEntry {
            text: directive.name(),
            type_: None,
            description: directive.description(),
        })
        .collect()
}
