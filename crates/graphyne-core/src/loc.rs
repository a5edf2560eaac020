use graphyne_parser::GraphQLSourceSpan;

/// Where a schema or request-document element was defined.
///
/// Mirrors [`graphyne_parser::SourcePosition`] but adds the distinction
/// between definitions that came from parsed text (and therefore carry a
/// span) and definitions installed synthetically by the runtime (built-in
/// scalars, introspection fields) which have none.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum SourceLocation {
    /// Installed by the runtime itself; never came from source text.
    GraphQLBuiltIn,

    /// Came from a parsed schema document, at the given span.
    SchemaFile(FilePosition),

    /// Came from a parsed executable (request) document, at the given span.
    ExecutableDocument(FilePosition),
}
impl SourceLocation {
    pub fn file_position(&self) -> Option<&FilePosition> {
        match self {
            Self::GraphQLBuiltIn => None,
            Self::SchemaFile(pos) | Self::ExecutableDocument(pos) => Some(pos),
        }
    }

    pub(crate) fn from_schema_span(span: &GraphQLSourceSpan) -> Self {
        Self::SchemaFile(FilePosition::from_span(span))
    }

    pub(crate) fn from_executable_span(span: &GraphQLSourceSpan) -> Self {
        Self::ExecutableDocument(FilePosition::from_span(span))
    }

    /// Builds a schema-file location directly from an AST position, for the
    /// schema document parser (`graphql_parser`), which reports 1-based
    /// `Pos{line, column}` pairs rather than the byte-span type our own
    /// executable-document parser produces.
    pub(crate) fn from_schema_pos(pos: graphyne_parser::ast::AstPos) -> Self {
        Self::SchemaFile(FilePosition {
            line: pos.line,
            column: pos.column,
        })
    }

    /// As [`SourceLocation::from_schema_pos`], but for positions reported
    /// while parsing a request (executable) document.
    pub(crate) fn from_executable_pos(pos: graphyne_parser::ast::AstPos) -> Self {
        Self::ExecutableDocument(FilePosition {
            line: pos.line,
            column: pos.column,
        })
    }
}

/// A 1-based line/column position, as reported to clients in the `locations`
/// array of a structured error (see the response error shape).
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct FilePosition {
    pub line: usize,
    pub column: usize,
}
impl FilePosition {
    fn from_span(span: &GraphQLSourceSpan) -> Self {
        let pos = &span.start_inclusive;
        FilePosition {
            line: pos.line() + 1,
            column: pos.col_utf8() + 1,
        }
    }
}
