use crate::Schema;
use crate::context::resolve_field;
use crate::executable::Argument;
use crate::executable::DirectiveAnnotation;
use crate::executable::ExecutableDefinition;
use crate::executable::ExecutableDocument;
use crate::executable::Field;
use crate::executable::FragmentDefinition;
use crate::executable::Name;
use crate::executable::Operation;
use crate::executable::OperationKind;
use crate::executable::Selection;
use crate::executable::SelectionSet;
use crate::executable::Value;
use crate::executable::ValueKind;
use crate::executable::VariableDefinition;
use crate::lint::SourceNode;
use crate::lint::ValidationError;
use crate::lint::Validator;
use crate::types::DirectiveLocation;
use crate::types::GraphQLType;
use crate::types::Parameter;
use indexmap::IndexMap;
use std::collections::HashSet;

/// The stock [`Validator`].
///
/// Checks that:
///
/// - every definition is executable, and operations have a root type;
/// - selected fields exist on their parent type, leaf fields have no
///   selections and composite fields do;
/// - arguments are known, and required arguments are provided, on fields and
///   directives;
/// - directives are known, used in a location they allow, and not repeated
///   unless declared `repeatable`;
/// - variable and type condition types exist, variables are of input types
///   and fragments condition on composite types;
/// - fragment spreads name a defined fragment;
/// - every variable an operation uses (through fragment spreads too) is
///   defined, and every variable it defines is used.
///
/// Errors come back ordered by where they occur in the document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentValidator;
impl Validator for DocumentValidator {
    fn validate(
        &self,
        schema: &Schema,
        document: &ExecutableDocument,
    ) -> Vec<ValidationError> {
        let mut walk = ValidationWalk {
            document,
            errors: vec![],
            schema,
        };
        walk.check_document();
        walk.finish()
    }
}

/// Who an argument list belongs to, for error messages.
enum ArgumentOwner<'a> {
    Directive(&'a str),
    Field {
        field_name: &'a str,
        parent_type_name: &'a str,
    },
}
impl ArgumentOwner<'_> {
    fn missing_argument(&self, param: &Parameter) -> String {
        match self {
            Self::Directive(directive_name) => format!(
                "Directive \"@{directive_name}\" argument \"{}\" of type \"{}\" is \
                required but not provided.",
                param.name(),
                param.type_annotation(),
            ),
            Self::Field { field_name, .. } => format!(
                "Field \"{field_name}\" argument \"{}\" of type \"{}\" is required \
                but not provided.",
                param.name(),
                param.type_annotation(),
            ),
        }
    }

    fn unknown_argument(&self, argument_name: &Name) -> String {
        match self {
            Self::Directive(directive_name) => format!(
                "Unknown argument \"{argument_name}\" on directive \"@{directive_name}\".",
            ),
            Self::Field { field_name, parent_type_name } => format!(
                "Unknown argument \"{argument_name}\" on field \"{field_name}\" of type \
                \"{parent_type_name}\".",
            ),
        }
    }
}

struct ValidationWalk<'a> {
    document: &'a ExecutableDocument,
    errors: Vec<ValidationError>,
    schema: &'a Schema,
}
impl<'a> ValidationWalk<'a> {
    fn report(&mut self, message: String, node: SourceNode) {
        self.errors.push(ValidationError::new(message, vec![node]));
    }

    fn report_unknown_type(&mut self, type_name: &Name) {
        self.report(
            format!("Unknown type \"{type_name}\"."),
            SourceNode::named(type_name.span(), type_name.span()),
        );
    }

    fn finish(mut self) -> Vec<ValidationError> {
        self.errors.sort_by_key(|error| {
            error.nodes.first().map(|node| node.highlight().start)
        });
        // A fragment shared by anonymous operations reports the same
        // undefined variable once per operation.
        self.errors.dedup();
        self.errors
    }

    fn check_document(&mut self) {
        let document = self.document;
        for definition in document.non_executable_definitions() {
            let (message, node) = match definition.name() {
                Some(name) => (
                    format!("The \"{name}\" definition is not executable."),
                    SourceNode::named(definition.span(), name.span()),
                ),
                None => (
                    "The schema definition is not executable.".to_string(),
                    SourceNode::new(definition.span()),
                ),
            };
            self.report(message, node);
        }

        for definition in document.definitions() {
            match definition {
                ExecutableDefinition::Fragment(fragment) =>
                    self.check_fragment_definition(fragment),
                ExecutableDefinition::Operation(operation) =>
                    self.check_operation(operation),
            }
        }
    }

    fn check_operation(&mut self, operation: &'a Operation) {
        let schema = self.schema;
        let (root_type, kind_plural) = match operation.kind() {
            OperationKind::Mutation => (schema.mutation_type(), "mutations"),
            OperationKind::Query => (Some(schema.query_type()), "queries"),
            OperationKind::Subscription =>
                (schema.subscription_type(), "subscriptions"),
        };
        if root_type.is_none() {
            let node = match operation.name() {
                Some(name) => SourceNode::named(operation.span(), name.span()),
                None => SourceNode::new(operation.span()),
            };
            self.report(format!("Schema is not configured for {kind_plural}."), node);
        }

        self.check_directives(
            operation.directives(),
            operation.kind().directive_location(),
        );
        for var_def in operation.variable_definitions() {
            self.check_variable_definition(var_def);
        }
        self.check_selection_set(operation.selection_set(), root_type);
        self.check_variable_usage(operation);
    }

    fn check_variable_definition(&mut self, var_def: &'a VariableDefinition) {
        let schema = self.schema;
        self.check_directives(
            var_def.directives(),
            DirectiveLocation::VariableDefinition,
        );
        let type_name = var_def.type_ref().innermost_name();
        match schema.lookup_type(type_name.value()) {
            None => self.report_unknown_type(type_name),
            Some(graphql_type) if !graphql_type.is_input_type() => self.report(
                format!(
                    "Variable \"${}\" cannot be non-input type \"{}\".",
                    var_def.variable(),
                    var_def.type_ref(),
                ),
                SourceNode::named(var_def.type_ref().span(), type_name.span()),
            ),
            Some(_) => (),
        }
    }

    fn check_fragment_definition(&mut self, fragment: &'a FragmentDefinition) {
        self.check_directives(
            fragment.directives(),
            DirectiveLocation::FragmentDefinition,
        );
        let parent_type = self.check_type_condition(
            fragment.type_condition(),
            Some(fragment.name()),
        );
        self.check_selection_set(fragment.selection_set(), parent_type);
    }

    /// The type named by `type_condition` if it exists and is composite.
    fn check_type_condition(
        &mut self,
        type_condition: &Name,
        fragment_name: Option<&Name>,
    ) -> Option<&'a GraphQLType> {
        let schema = self.schema;
        let Some(graphql_type) = schema.lookup_type(type_condition.value()) else {
            self.report_unknown_type(type_condition);
            return None;
        };
        if !graphql_type.is_composite() {
            let message = match fragment_name {
                Some(fragment_name) => format!(
                    "Fragment \"{fragment_name}\" cannot condition on non composite \
                    type \"{type_condition}\".",
                ),
                None => format!(
                    "Fragment cannot condition on non composite type \
                    \"{type_condition}\".",
                ),
            };
            self.report(
                message,
                SourceNode::named(type_condition.span(), type_condition.span()),
            );
            return None;
        }
        Some(graphql_type)
    }

    /// `parent_type` is `None` when it is unknown; only checks that need no
    /// parent type run beneath such a selection set.
    fn check_selection_set(
        &mut self,
        selection_set: &'a SelectionSet,
        parent_type: Option<&'a GraphQLType>,
    ) {
        let document = self.document;
        for selection in selection_set.selections() {
            match selection {
                Selection::Field(field) => self.check_field(field, parent_type),

                Selection::FragmentSpread(spread) => {
                    self.check_directives(
                        spread.directives(),
                        DirectiveLocation::FragmentSpread,
                    );
                    if document.lookup_fragment(spread.name().value()).is_none() {
                        self.report(
                            format!("Unknown fragment \"{}\".", spread.name()),
                            SourceNode::named(spread.span(), spread.name().span()),
                        );
                    }
                },

                Selection::InlineFragment(inline) => {
                    self.check_directives(
                        inline.directives(),
                        DirectiveLocation::InlineFragment,
                    );
                    let inline_parent_type = match inline.type_condition() {
                        Some(type_condition) =>
                            self.check_type_condition(type_condition, None),
                        None => parent_type,
                    };
                    self.check_selection_set(inline.selection_set(), inline_parent_type);
                },
            }
        }
    }

    fn check_field(&mut self, field: &'a Field, parent_type: Option<&'a GraphQLType>) {
        let schema = self.schema;
        self.check_directives(field.directives(), DirectiveLocation::Field);

        let field_def = parent_type.and_then(|parent_type| {
            resolve_field(schema, parent_type, field.name().value())
        });
        let (Some(parent_type), Some(field_def)) = (parent_type, field_def) else {
            if let Some(parent_type) = parent_type {
                self.report(
                    format!(
                        "Cannot query field \"{}\" on \"{}\".",
                        field.name(),
                        parent_type.name(),
                    ),
                    SourceNode::named(field.span(), field.name().span()),
                );
            }
            if let Some(selection_set) = field.selection_set() {
                self.check_selection_set(selection_set, None);
            }
            return;
        };

        let field_node = SourceNode::named(field.span(), field.name().span());
        self.check_arguments(
            field.arguments(),
            field_def.parameters(),
            &ArgumentOwner::Field {
                field_name: field.name().value(),
                parent_type_name: parent_type.name(),
            },
            &field_node,
        );

        let field_type = field_def.type_annotation();
        let named_type = field_type.innermost_named_type(schema);
        match (named_type, field.selection_set()) {
            (Some(named_type), Some(_)) if named_type.is_leaf() => self.report(
                format!(
                    "Field \"{}\" of type \"{field_type}\" must not have a sub \
                    selection.",
                    field.name(),
                ),
                field_node,
            ),
            (Some(named_type), None) if named_type.is_composite() => self.report(
                format!(
                    "Field \"{}\" of type \"{field_type}\" must have a sub selection.",
                    field.name(),
                ),
                field_node,
            ),
            _ => (),
        }

        if let Some(selection_set) = field.selection_set() {
            let sub_parent_type = named_type.filter(|t| t.is_composite());
            self.check_selection_set(selection_set, sub_parent_type);
        }
    }

    fn check_directives(
        &mut self,
        directives: &'a [DirectiveAnnotation],
        location: DirectiveLocation,
    ) {
        let schema = self.schema;
        let mut seen = HashSet::new();
        for directive in directives {
            let node = SourceNode::named(directive.span(), directive.name().span());
            let Some(directive_def) = schema.lookup_directive(directive.name().value()) else {
                self.report(format!("Unknown directive \"{}\".", directive.name()), node);
                continue;
            };
            if !seen.insert(directive_def.name()) && !directive_def.is_repeatable() {
                self.report(
                    format!(
                        "The directive \"@{}\" can only be used once at this location.",
                        directive.name(),
                    ),
                    node.clone(),
                );
            }
            if !directive_def.locations().contains(&location) {
                self.report(
                    format!(
                        "Directive \"{}\" may not be used on {}.",
                        directive.name(),
                        location.as_str(),
                    ),
                    node.clone(),
                );
            }
            self.check_arguments(
                directive.arguments(),
                directive_def.parameters(),
                &ArgumentOwner::Directive(directive_def.name()),
                &node,
            );
        }
    }

    fn check_arguments(
        &mut self,
        arguments: &'a [Argument],
        parameters: &IndexMap<String, Parameter>,
        owner: &ArgumentOwner<'_>,
        owner_node: &SourceNode,
    ) {
        for argument in arguments {
            if !parameters.contains_key(argument.name().value()) {
                self.report(
                    owner.unknown_argument(argument.name()),
                    SourceNode::named(argument.span(), argument.name().span()),
                );
            }
        }
        for param in parameters.values().filter(|param| param.is_required()) {
            if !arguments.iter().any(|arg| arg.name().value() == param.name()) {
                self.report(owner.missing_argument(param), owner_node.clone());
            }
        }
    }

    fn check_variable_usage(&mut self, operation: &'a Operation) {
        let mut usages = vec![];
        collect_directive_variables(operation.directives(), &mut usages);
        collect_selection_variables(
            self.document,
            operation.selection_set(),
            &mut HashSet::new(),
            &mut usages,
        );

        let defined = operation.variable_definitions()
            .iter()
            .map(|var_def| var_def.variable().value())
            .collect::<HashSet<_>>();
        let mut used = HashSet::new();
        for usage in usages {
            let ValueKind::Variable(name) = usage.kind() else {
                continue;
            };
            used.insert(name.value());
            if defined.contains(name.value()) {
                continue;
            }
            let message = match operation.name() {
                Some(op_name) => format!(
                    "Variable \"${name}\" is not defined by operation \"{op_name}\".",
                ),
                None => format!("Variable \"${name}\" is not defined."),
            };
            self.report(message, SourceNode::variable_reference(usage.span(), name.span()));
        }

        for var_def in operation.variable_definitions() {
            let var_name = var_def.variable();
            if used.contains(var_name.value()) {
                continue;
            }
            let message = match operation.name() {
                Some(op_name) => format!(
                    "Variable \"${var_name}\" is never used in operation \"{op_name}\".",
                ),
                None => format!("Variable \"${var_name}\" is never used."),
            };
            self.report(
                message,
                SourceNode::with_variable(var_def.span(), var_def.variable_span()),
            );
        }
    }
}

fn collect_argument_variables<'a>(arguments: &'a [Argument], usages: &mut Vec<&'a Value>) {
    for argument in arguments {
        usages.extend(argument.value().variable_references());
    }
}

fn collect_directive_variables<'a>(
    directives: &'a [DirectiveAnnotation],
    usages: &mut Vec<&'a Value>,
) {
    for directive in directives {
        collect_argument_variables(directive.arguments(), usages);
    }
}

/// Gather every variable referenced beneath `selection_set`, following each
/// fragment spread into its definition once.
fn collect_selection_variables<'a>(
    document: &'a ExecutableDocument,
    selection_set: &'a SelectionSet,
    visited_fragments: &mut HashSet<&'a str>,
    usages: &mut Vec<&'a Value>,
) {
    for selection in selection_set.selections() {
        match selection {
            Selection::Field(field) => {
                collect_argument_variables(field.arguments(), usages);
                collect_directive_variables(field.directives(), usages);
                if let Some(sub_selection_set) = field.selection_set() {
                    collect_selection_variables(
                        document,
                        sub_selection_set,
                        visited_fragments,
                        usages,
                    );
                }
            },

            Selection::FragmentSpread(spread) => {
                collect_directive_variables(spread.directives(), usages);
                let fragment_name = spread.name().value();
                if visited_fragments.insert(fragment_name)
                    && let Some(fragment) = document.lookup_fragment(fragment_name) {
                    collect_directive_variables(fragment.directives(), usages);
                    collect_selection_variables(
                        document,
                        fragment.selection_set(),
                        visited_fragments,
                        usages,
                    );
                }
            },

            Selection::InlineFragment(inline) => {
                collect_directive_variables(inline.directives(), usages);
                collect_selection_variables(
                    document,
                    inline.selection_set(),
                    visited_fragments,
                    usages,
                );
            },
        }
    }
}
