use crate::ByteSpan;
use crate::executable::Argument;
use crate::executable::DirectiveAnnotation;
use crate::executable::ExecutableDefinition;
use crate::executable::ExecutableDocument;
use crate::executable::Field;
use crate::executable::FragmentDefinition;
use crate::executable::FragmentSpread;
use crate::executable::InlineFragment;
use crate::executable::Name;
use crate::executable::NonExecutableDefinition;
use crate::executable::ObjectField;
use crate::executable::Operation;
use crate::executable::OperationKind;
use crate::executable::Selection;
use crate::executable::SelectionSet;
use crate::executable::TypeRef;
use crate::executable::Value;
use crate::executable::ValueKind;
use crate::executable::VariableDefinition;
use apollo_parser::SyntaxNode;
use apollo_parser::SyntaxToken;
use apollo_parser::cst;
use apollo_parser::cst::CstNode;

// Lowering only runs on trees without parse errors, so every `?` below
// guards against nodes the parser always produces in that case.

pub(super) fn lower_document(document: &cst::Document) -> ExecutableDocument {
    let mut definitions = vec![];
    let mut non_executable_definitions = vec![];
    for definition in document.definitions() {
        match &definition {
            cst::Definition::OperationDefinition(operation) => {
                if let Some(operation) = lower_operation(operation) {
                    definitions.push(ExecutableDefinition::Operation(operation));
                }
            },

            cst::Definition::FragmentDefinition(fragment) => {
                if let Some(fragment) = lower_fragment_definition(fragment) {
                    definitions.push(ExecutableDefinition::Fragment(fragment));
                }
            },

            type_system_def => non_executable_definitions.push(
                NonExecutableDefinition {
                    name: type_system_definition_name(type_system_def),
                    span: span_of(type_system_def.syntax()),
                },
            ),
        }
    }

    log::trace!(
        "lowered {} executable and {} type system definitions",
        definitions.len(),
        non_executable_definitions.len(),
    );
    ExecutableDocument {
        definitions,
        non_executable_definitions,
    }
}

fn type_system_definition_name(definition: &cst::Definition) -> Option<Name> {
    let name = match definition {
        cst::Definition::DirectiveDefinition(def) => def.name(),
        cst::Definition::EnumTypeDefinition(def) => def.name(),
        cst::Definition::EnumTypeExtension(def) => def.name(),
        cst::Definition::InputObjectTypeDefinition(def) => def.name(),
        cst::Definition::InputObjectTypeExtension(def) => def.name(),
        cst::Definition::InterfaceTypeDefinition(def) => def.name(),
        cst::Definition::InterfaceTypeExtension(def) => def.name(),
        cst::Definition::ObjectTypeDefinition(def) => def.name(),
        cst::Definition::ObjectTypeExtension(def) => def.name(),
        cst::Definition::ScalarTypeDefinition(def) => def.name(),
        cst::Definition::ScalarTypeExtension(def) => def.name(),
        cst::Definition::UnionTypeDefinition(def) => def.name(),
        cst::Definition::UnionTypeExtension(def) => def.name(),
        _ => None,
    };
    name.and_then(|name| lower_name(&name))
}

fn lower_operation(operation: &cst::OperationDefinition) -> Option<Operation> {
    let kind = match operation.operation_type() {
        Some(op_type) if op_type.mutation_token().is_some() =>
            OperationKind::Mutation,
        Some(op_type) if op_type.subscription_token().is_some() =>
            OperationKind::Subscription,
        Some(_) | None => OperationKind::Query,
    };
    let variable_definitions = operation.variable_definitions()
        .map(|var_defs| {
            var_defs.variable_definitions()
                .filter_map(|var_def| lower_variable_definition(&var_def))
                .collect()
        })
        .unwrap_or_default();

    Some(Operation {
        directives: lower_directives(operation.directives()),
        kind,
        name: operation.name().and_then(|name| lower_name(&name)),
        selection_set: lower_selection_set(&operation.selection_set()?),
        span: span_of(operation.syntax()),
        variable_definitions,
    })
}

fn lower_variable_definition(
    var_def: &cst::VariableDefinition,
) -> Option<VariableDefinition> {
    let variable = var_def.variable()?;
    Some(VariableDefinition {
        default_value: var_def.default_value()
            .and_then(|default_value| default_value.value())
            .and_then(|value| lower_value(&value)),
        directives: lower_directives(var_def.directives()),
        span: span_of(var_def.syntax()),
        type_ref: lower_type(&var_def.ty()?)?,
        variable: lower_name(&variable.name()?)?,
        variable_span: span_of(variable.syntax()),
    })
}

fn lower_fragment_definition(
    fragment: &cst::FragmentDefinition,
) -> Option<FragmentDefinition> {
    Some(FragmentDefinition {
        directives: lower_directives(fragment.directives()),
        name: lower_name(&fragment.fragment_name()?.name()?)?,
        selection_set: lower_selection_set(&fragment.selection_set()?),
        span: span_of(fragment.syntax()),
        type_condition: lower_name(&fragment.type_condition()?.named_type()?.name()?)?,
    })
}

fn lower_selection_set(selection_set: &cst::SelectionSet) -> SelectionSet {
    SelectionSet {
        selections: selection_set.selections()
            .filter_map(|selection| lower_selection(&selection))
            .collect(),
        span: span_of(selection_set.syntax()),
    }
}

fn lower_selection(selection: &cst::Selection) -> Option<Selection> {
    match selection {
        cst::Selection::Field(field) => Some(Selection::Field(Field {
            alias: field.alias()
                .and_then(|alias| alias.name())
                .and_then(|name| lower_name(&name)),
            arguments: lower_arguments(field.arguments()),
            directives: lower_directives(field.directives()),
            name: lower_name(&field.name()?)?,
            selection_set: field.selection_set()
                .map(|selection_set| lower_selection_set(&selection_set)),
            span: span_of(field.syntax()),
        })),

        cst::Selection::FragmentSpread(spread) =>
            Some(Selection::FragmentSpread(FragmentSpread {
                directives: lower_directives(spread.directives()),
                name: lower_name(&spread.fragment_name()?.name()?)?,
                span: span_of(spread.syntax()),
            })),

        cst::Selection::InlineFragment(inline) =>
            Some(Selection::InlineFragment(InlineFragment {
                directives: lower_directives(inline.directives()),
                selection_set: lower_selection_set(&inline.selection_set()?),
                span: span_of(inline.syntax()),
                type_condition: inline.type_condition()
                    .and_then(|type_cond| type_cond.named_type())
                    .and_then(|named_type| named_type.name())
                    .and_then(|name| lower_name(&name)),
            })),
    }
}

fn lower_directives(directives: Option<cst::Directives>) -> Vec<DirectiveAnnotation> {
    let Some(directives) = directives else {
        return vec![];
    };
    directives.directives()
        .filter_map(|directive| Some(DirectiveAnnotation {
            arguments: lower_arguments(directive.arguments()),
            name: lower_name(&directive.name()?)?,
            span: span_of(directive.syntax()),
        }))
        .collect()
}

fn lower_arguments(arguments: Option<cst::Arguments>) -> Vec<Argument> {
    let Some(arguments) = arguments else {
        return vec![];
    };
    arguments.arguments()
        .filter_map(|argument| Some(Argument {
            name: lower_name(&argument.name()?)?,
            span: span_of(argument.syntax()),
            value: lower_value(&argument.value()?)?,
        }))
        .collect()
}

fn lower_value(value: &cst::Value) -> Option<Value> {
    let kind = match value {
        cst::Value::BooleanValue(_) =>
            ValueKind::Boolean(significant_text(value.syntax()) == "true"),
        cst::Value::EnumValue(_) =>
            ValueKind::Enum(significant_text(value.syntax())),
        cst::Value::FloatValue(_) =>
            ValueKind::Float(significant_text(value.syntax())),
        cst::Value::IntValue(_) =>
            ValueKind::Int(significant_text(value.syntax())),
        cst::Value::ListValue(list) => ValueKind::List(
            list.values()
                .filter_map(|value| lower_value(&value))
                .collect(),
        ),
        cst::Value::NullValue(_) => ValueKind::Null,
        cst::Value::ObjectValue(object) => ValueKind::Object(
            object.object_fields()
                .filter_map(|field| Some(ObjectField {
                    name: lower_name(&field.name()?)?,
                    span: span_of(field.syntax()),
                    value: lower_value(&field.value()?)?,
                }))
                .collect(),
        ),
        cst::Value::StringValue(_) =>
            ValueKind::String(significant_text(value.syntax())),
        cst::Value::Variable(variable) =>
            ValueKind::Variable(lower_name(&variable.name()?)?),
    };
    Some(Value {
        kind,
        span: span_of(value.syntax()),
    })
}

fn lower_type(ty: &cst::Type) -> Option<TypeRef> {
    match ty {
        cst::Type::ListType(list) => lower_list_type(list),
        cst::Type::NamedType(named) => lower_named_type(named),
        cst::Type::NonNullType(non_null) => {
            let inner = match (non_null.named_type(), non_null.list_type()) {
                (Some(named), _) => lower_named_type(&named)?,
                (None, Some(list)) => lower_list_type(&list)?,
                (None, None) => return None,
            };
            Some(TypeRef::NonNull {
                inner: Box::new(inner),
                span: span_of(non_null.syntax()),
            })
        },
    }
}

fn lower_list_type(list: &cst::ListType) -> Option<TypeRef> {
    Some(TypeRef::List {
        inner: Box::new(lower_type(&list.ty()?)?),
        span: span_of(list.syntax()),
    })
}

fn lower_named_type(named: &cst::NamedType) -> Option<TypeRef> {
    lower_name(&named.name()?).map(TypeRef::Named)
}

fn lower_name(name: &cst::Name) -> Option<Name> {
    let token = significant_tokens(name.syntax()).next()?;
    Some(Name {
        span: token_span(&token),
        value: token.text().to_string(),
    })
}

fn is_trivia(token: &SyntaxToken) -> bool {
    let text = token.text();
    text.starts_with('#')
        || text.chars().all(|c| c.is_whitespace() || c == ',' || c == '\u{feff}')
}

fn significant_tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> {
    node.descendants_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| !is_trivia(token))
}

fn significant_text(node: &SyntaxNode) -> String {
    significant_tokens(node)
        .map(|token| token.text().to_string())
        .collect()
}

fn token_span(token: &SyntaxToken) -> ByteSpan {
    let range = token.text_range();
    ByteSpan::new(usize::from(range.start()), usize::from(range.end()))
}

/// The node's source range without leading or trailing trivia.
fn span_of(node: &SyntaxNode) -> ByteSpan {
    let mut tokens = significant_tokens(node);
    let Some(first) = tokens.next() else {
        return ByteSpan::empty_at(usize::from(node.text_range().start()));
    };
    let start = token_span(&first).start;
    let end = tokens.last()
        .map(|last| token_span(&last).end)
        .unwrap_or(token_span(&first).end);
    ByteSpan::new(start, end)
}
