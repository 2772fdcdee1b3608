/// The grammar productions an editor's incremental parser can be inside of.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum StateKind {
    Document,
    Definition,
    Query,
    ShortQuery,
    Mutation,
    Subscription,
    VariableDefinitions,
    VariableDefinition,
    Variable,
    DefaultValue,
    SelectionSet,
    Selection,
    AliasedField,
    Field,
    Arguments,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    TypeCondition,
    Value,
    NumberValue,
    StringValue,
    BooleanValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Type,
    ListType,
    NamedType,
    Directive,
}
impl StateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Definition => "Definition",
            Self::Query => "Query",
            Self::ShortQuery => "ShortQuery",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
            Self::VariableDefinitions => "VariableDefinitions",
            Self::VariableDefinition => "VariableDefinition",
            Self::Variable => "Variable",
            Self::DefaultValue => "DefaultValue",
            Self::SelectionSet => "SelectionSet",
            Self::Selection => "Selection",
            Self::AliasedField => "AliasedField",
            Self::Field => "Field",
            Self::Arguments => "Arguments",
            Self::Argument => "Argument",
            Self::FragmentSpread => "FragmentSpread",
            Self::InlineFragment => "InlineFragment",
            Self::FragmentDefinition => "FragmentDefinition",
            Self::TypeCondition => "TypeCondition",
            Self::Value => "Value",
            Self::NumberValue => "NumberValue",
            Self::StringValue => "StringValue",
            Self::BooleanValue => "BooleanValue",
            Self::EnumValue => "EnumValue",
            Self::ListValue => "ListValue",
            Self::ObjectValue => "ObjectValue",
            Self::ObjectField => "ObjectField",
            Self::Type => "Type",
            Self::ListType => "ListType",
            Self::NamedType => "NamedType",
            Self::Directive => "Directive",
        }
    }

    /// Productions a fragment-level directive may be attached to.
    pub fn is_fragment(&self) -> bool {
        matches!(
            self,
            Self::FragmentDefinition | Self::InlineFragment | Self::FragmentSpread,
        )
    }
}
impl std::fmt::Display for StateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
