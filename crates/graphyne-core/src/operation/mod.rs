mod document;
mod document_builder;
mod errors;
mod fragment;
mod operation_definition;
mod operation_kind;
pub mod selection;
mod variable;

pub use document::Document;
pub use document_builder::ExecutableDocumentBuilder;
pub use errors::DocumentBuildError;
pub use fragment::FragmentDefinition;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use selection::FieldSelection;
pub use selection::FragmentSpreadSelection;
pub use selection::InlineFragmentSelection;
pub use selection::RawDirectiveApplication;
pub use selection::Selection;
pub use selection::SelectionSet;
pub use variable::VariableDefinition;
