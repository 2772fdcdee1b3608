use crate::state::ParserState;
use crate::state::StateKind;

/// The kinds of places in a document where completion can offer something.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub enum GrammarPosition {
    /// An argument name inside `( ... )`.
    ArgumentName,
    /// A directive name after `@`.
    DirectiveName,
    /// A field name inside an input object literal.
    InputObjectField,
    /// A named type in a variable definition.
    InputType,
    /// An enum or boolean input value.
    InputValue,
    /// A field name inside a selection set.
    Selection,
    /// The type after `on` in a fragment definition or inline fragment.
    TypeCondition,
}
impl GrammarPosition {
    /// Classify the innermost state of a chain. Returns `None` where nothing
    /// can be completed.
    pub fn classify(state: &ParserState<'_>) -> Option<Self> {
        let step = state.step();
        match state.kind() {
            StateKind::SelectionSet
                | StateKind::Field
                | StateKind::AliasedField => Some(Self::Selection),

            StateKind::Arguments => Some(Self::ArgumentName),
            StateKind::Argument => match step {
                0 => Some(Self::ArgumentName),
                2 => Some(Self::InputValue),
                _ => None,
            },

            StateKind::ObjectValue => Some(Self::InputObjectField),
            StateKind::ObjectField => match step {
                0 => Some(Self::InputObjectField),
                2 => Some(Self::InputValue),
                _ => None,
            },

            StateKind::EnumValue => Some(Self::InputValue),
            StateKind::ListValue => (step == 1).then_some(Self::InputValue),

            StateKind::FragmentDefinition =>
                (step == 3).then_some(Self::TypeCondition),
            StateKind::InlineFragment =>
                (step == 2).then_some(Self::TypeCondition),

            StateKind::VariableDefinition =>
                (step == 2).then_some(Self::InputType),
            StateKind::ListType =>
                (step == 1).then_some(Self::InputType),

            StateKind::NamedType => match state.prev_kind() {
                Some(StateKind::FragmentDefinition | StateKind::InlineFragment) =>
                    Some(Self::TypeCondition),
                Some(StateKind::VariableDefinition | StateKind::ListType) =>
                    Some(Self::InputType),
                _ => None,
            },

            StateKind::Directive => Some(Self::DirectiveName),

            StateKind::Document
                | StateKind::Definition
                | StateKind::Query
                | StateKind::ShortQuery
                | StateKind::Mutation
                | StateKind::Subscription
                | StateKind::VariableDefinitions
                | StateKind::Variable
                | StateKind::DefaultValue
                | StateKind::Selection
                | StateKind::FragmentSpread
                | StateKind::TypeCondition
                | StateKind::Value
                | StateKind::NumberValue
                | StateKind::StringValue
                | StateKind::BooleanValue
                | StateKind::Type => None,
        }
    }
}
