use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilePosition {
    pub col: usize,
    pub file: PathBuf,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(file: &Path, pos: graphql_parser::Pos) -> Self {
        Self {
            col: pos.column,
            file: file.to_path_buf(),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.col)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SchemaDefLocation {
    GraphQLBuiltIn,
    Schema(FilePosition),
}
impl SchemaDefLocation {
    /// Definitions loaded without a file path are the ones injected by the
    /// [`SchemaBuilder`](crate::schema::SchemaBuilder) itself (built-in
    /// directives, introspection types).
    pub(crate) fn from_pos(
        file_path: Option<&Path>,
        pos: graphql_parser::Pos,
    ) -> Self {
        match file_path {
            Some(file_path) => Self::Schema(FilePosition::from_pos(file_path, pos)),
            None => Self::GraphQLBuiltIn,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::GraphQLBuiltIn)
    }
}
impl std::convert::From<FilePosition> for SchemaDefLocation {
    fn from(value: FilePosition) -> Self {
        Self::Schema(value)
    }
}
impl std::fmt::Display for SchemaDefLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => write!(f, "<graphql built-in>"),
            Self::Schema(file_pos) => file_pos.fmt(f),
        }
    }
}
