use crate::context::ContextType;
use crate::context::TypeContext;
use crate::schema::Schema;
use crate::state::ParserState;
use crate::state::StateKind;
use crate::types::Field;
use crate::types::GraphQLType;

/// Replay `state`'s chain from the outermost production inward and collect
/// the type information that holds at `state`.
///
/// Nothing here fails: when a step cannot be resolved (an unknown field, a
/// fragment on an undefined type, ...) the affected members are left absent
/// and later steps that depend on them stay absent too.
pub fn resolve_context<'schema>(
    schema: &'schema Schema,
    state: &ParserState<'_>,
) -> TypeContext<'schema> {
    let chain = state.chain();
    log::trace!(
        "resolving type context over {} states: {:?}",
        chain.len(),
        chain.iter().map(|s| s.kind()).collect::<Vec<_>>(),
    );
    chain.iter().fold(TypeContext::default(), |ctx, state| {
        step(schema, ctx, state)
    })
}

fn step<'schema>(
    schema: &'schema Schema,
    ctx: TypeContext<'schema>,
    state: &ParserState<'_>,
) -> TypeContext<'schema> {
    match state.kind() {
        StateKind::Query
            | StateKind::ShortQuery => TypeContext {
                type_: Some(schema.query_type().into()),
                ..ctx
            },

        StateKind::Mutation => TypeContext {
            type_: schema.mutation_type().map(ContextType::from),
            ..ctx
        },

        StateKind::Subscription => TypeContext {
            type_: schema.subscription_type().map(ContextType::from),
            ..ctx
        },

        StateKind::FragmentDefinition
            | StateKind::InlineFragment => TypeContext {
                type_: state.type_name()
                    .and_then(|type_name| schema.lookup_type(type_name))
                    .map(ContextType::from),
                ..ctx
            },

        StateKind::Field => {
            let field_def = match (ctx.type_, ctx.parent_type, state.name()) {
                (Some(_), Some(parent_type), Some(name)) =>
                    resolve_field(schema, parent_type, name),
                _ => None,
            };
            TypeContext {
                field_def,
                type_: field_def.map(|field| field.type_annotation().into()),
                ..ctx
            }
        },

        StateKind::SelectionSet => TypeContext {
            parent_type: ctx.type_.and_then(|t| t.named_type(schema)),
            ..ctx
        },

        StateKind::Directive => TypeContext {
            directive_def: state.name()
                .and_then(|name| schema.lookup_directive(name)),
            ..ctx
        },

        StateKind::Arguments => TypeContext {
            arg_defs: match state.prev_kind() {
                Some(StateKind::Field) =>
                    ctx.field_def.map(|field| field.parameters()),
                Some(StateKind::Directive) =>
                    ctx.directive_def.map(|directive| directive.parameters()),
                _ => None,
            },
            ..ctx
        },

        StateKind::Argument => {
            let arg_def = ctx.arg_defs.zip(state.name())
                .and_then(|(arg_defs, name)| arg_defs.get(name));
            TypeContext {
                arg_def,
                input_type: arg_def.map(|param| param.type_annotation().into()),
                ..ctx
            }
        },

        StateKind::ListValue => TypeContext {
            input_type: ctx.input_type.and_then(|t| t.list_element_type()),
            ..ctx
        },

        StateKind::ObjectValue => TypeContext {
            object_field_defs: ctx.input_type
                .and_then(|t| t.named_type(schema))
                .and_then(GraphQLType::as_input_object)
                .map(|input_obj| input_obj.fields()),
            ..ctx
        },

        StateKind::ObjectField => TypeContext {
            input_type: ctx.object_field_defs.zip(state.name())
                .and_then(|(field_defs, name)| field_defs.get(name))
                .map(|input_field| input_field.type_annotation().into()),
            ..ctx
        },

        StateKind::Document
            | StateKind::Definition
            | StateKind::VariableDefinitions
            | StateKind::VariableDefinition
            | StateKind::Variable
            | StateKind::DefaultValue
            | StateKind::Selection
            | StateKind::AliasedField
            | StateKind::FragmentSpread
            | StateKind::TypeCondition
            | StateKind::Value
            | StateKind::NumberValue
            | StateKind::StringValue
            | StateKind::BooleanValue
            | StateKind::EnumValue
            | StateKind::Type
            | StateKind::ListType
            | StateKind::NamedType => ctx,
    }
}

/// Find the definition of the field `name` selected on `parent_type`.
///
/// `__schema` and `__type` are only selectable on the query root type and
/// `__typename` on any composite type. Types without fields have no field
/// definitions.
pub fn resolve_field<'schema>(
    schema: &'schema Schema,
    parent_type: &'schema GraphQLType,
    name: &str,
) -> Option<&'schema Field> {
    let schema_meta_field = schema.schema_meta_field_def();
    let type_meta_field = schema.type_meta_field_def();
    let typename_meta_field = schema.typename_meta_field_def();
    if name == schema_meta_field.name() && schema.is_query_type(parent_type) {
        Some(schema_meta_field)
    } else if name == type_meta_field.name() && schema.is_query_type(parent_type) {
        Some(type_meta_field)
    } else if name == typename_meta_field.name() && parent_type.is_composite() {
        Some(typename_meta_field)
    } else {
        parent_type.fields().and_then(|fields| fields.get(name))
    }
}
