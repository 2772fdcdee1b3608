use crate::ByteSpan;
use crate::executable::FragmentDefinition;
use crate::executable::Name;
use crate::executable::Operation;
use crate::executable::SyntaxError;
use crate::executable::lower;

type Result<T> = std::result::Result<T, SyntaxError>;

#[derive(Clone, Debug, PartialEq)]
pub enum ExecutableDefinition {
    Fragment(FragmentDefinition),
    Operation(Operation),
}
impl ExecutableDefinition {
    pub fn span(&self) -> ByteSpan {
        match self {
            Self::Fragment(fragment) => fragment.span,
            Self::Operation(operation) => operation.span,
        }
    }
}

/// A type system definition or extension found in an executable document.
#[derive(Clone, Debug, PartialEq)]
pub struct NonExecutableDefinition {
    /// Absent for `schema` definitions and extensions.
    pub(crate) name: Option<Name>,
    pub(crate) span: ByteSpan,
}
impl NonExecutableDefinition {
    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    pub fn span(&self) -> ByteSpan {
        self.span
    }
}

/// A successfully parsed GraphQL document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExecutableDocument {
    pub(crate) definitions: Vec<ExecutableDefinition>,
    pub(crate) non_executable_definitions: Vec<NonExecutableDefinition>,
}
impl ExecutableDocument {
    /// Parse `source`, failing on its first syntax error.
    ///
    /// Type system definitions are accepted by the parser and kept aside in
    /// [`non_executable_definitions()`](Self::non_executable_definitions).
    pub fn parse(source: &str) -> Result<Self> {
        let tree = apollo_parser::Parser::new(source).parse();
        if let Some(err) = tree.errors().min_by_key(|err| err.index()) {
            log::debug!(
                "{} parse error(s), first at byte {}: {}",
                tree.errors().count(),
                err.index(),
                err.message(),
            );
            return Err(SyntaxError::from_parse_error(source, err));
        }
        Ok(lower::lower_document(&tree.document()))
    }

    /// Operations and fragments in document order.
    pub fn definitions(&self) -> &[ExecutableDefinition] {
        self.definitions.as_slice()
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            ExecutableDefinition::Fragment(fragment) => Some(fragment),
            ExecutableDefinition::Operation(_) => None,
        })
    }

    /// The first fragment definition named `name`.
    pub fn lookup_fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments().find(|fragment| fragment.name.value == name)
    }

    pub fn non_executable_definitions(&self) -> &[NonExecutableDefinition] {
        self.non_executable_definitions.as_slice()
    }

    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.definitions.iter().filter_map(|def| match def {
            ExecutableDefinition::Fragment(_) => None,
            ExecutableDefinition::Operation(operation) => Some(operation),
        })
    }
}
