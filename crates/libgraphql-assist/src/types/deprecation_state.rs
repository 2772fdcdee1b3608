use crate::ast;

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Whether a field, argument, input field, or enum value carries a
/// `@deprecated` annotation in the schema.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum DeprecationState {
    Deprecated(String),
    #[default]
    NotDeprecated,
}
impl DeprecationState {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Deprecated(reason) => Some(reason.as_str()),
            Self::NotDeprecated => None,
        }
    }

    pub(crate) fn from_ast(directives: &[ast::schema::Directive]) -> Self {
        let Some(directive) = directives.iter().find(|d| d.name == "deprecated") else {
            return Self::NotDeprecated;
        };

        let reason = directive.arguments
            .iter()
            .find_map(|(arg_name, value)| match value {
                graphql_parser::schema::Value::String(reason)
                    if arg_name == "reason" => Some(reason.to_string()),
                _ => None,
            })
            .unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string());

        Self::Deprecated(reason)
    }
}
