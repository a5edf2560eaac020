use std::collections::HashSet;

use crate::error::ErrorKind;
use crate::error::GraphQLError;
use crate::operation::OperationDefinition;
use crate::validator::context::ValidationContext;

/// Every operation name in the document must be unique, and if the document
/// declares more than one operation, none of them may be anonymous (since
/// an anonymous operation can never be selected by name).
pub(crate) fn check(ctx: ValidationContext) -> Vec<GraphQLError> {
    let mut errors = vec![];
    let mut seen = HashSet::new();

    let multiple_operations = ctx.document.operations().len() > 1;

    for operation in ctx.document.operations() {
        match operation.name() {
            Some(name) => {
                if !seen.insert(name.to_string()) {
                    errors.push(
                        GraphQLError::new(
                            ErrorKind::Validation,
                            format!("operation name `{name}` is not unique"),
                        )
                        .with_location(location_of(operation)),
                    );
                }
            }
            None if multiple_operations => {
                errors.push(
                    GraphQLError::new(
                        ErrorKind::Validation,
                        "anonymous operation not allowed when document defines more than one operation",
                    )
                    .with_location(location_of(operation)),
                );
            }
            None => (),
        }
    }

    errors
}

fn location_of(operation: &OperationDefinition) -> crate::loc::FilePosition {
    operation
        .def_location()
        .file_position()
        .cloned()
        .unwrap_or(crate::loc::FilePosition { line: 0, column: 0 })
}
