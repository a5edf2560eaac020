use crate::loc::SourceLocation;

/// Failures that can occur while turning request-document text into a
/// [`super::Document`], before validation or execution is ever attempted.
#[derive(Debug, thiserror::Error)]
pub enum DocumentBuildError {
    #[error("request document failed to parse: {0}")]
    ParseError(#[from] graphyne_parser::ast::operation::ParseError),

    #[error("operation name `{0}` is defined more than once")]
    DuplicateOperationName(String, SourceLocation),

    #[error("fragment name `{0}` is defined more than once")]
    DuplicateFragmentName(String, SourceLocation),

    #[error("variable `${0}` is declared more than once")]
    DuplicateVariableDefinition(String, SourceLocation),
}
