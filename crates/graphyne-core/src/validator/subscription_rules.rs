use crate::error::ErrorKind;
use crate::error::GraphQLError;
use crate::loc::FilePosition;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::validator::context::ValidationContext;

/// A subscription operation's root selection set must name exactly one
/// field (excluding `__typename`, which doesn't count as a root field for
/// this purpose): a subscription with more than one root field would have
/// no well-defined single event stream to deliver.
pub(crate) fn check(ctx: ValidationContext) -> Vec<GraphQLError> {
    let mut errors = vec![];

    for operation in ctx.document.operations() {
        if operation.kind() != OperationKind::Subscription {
            continue;
        }

        let root_field_count = operation
            .selection_set()
            .iter()
            .filter(|selection| matches!(selection, Selection::Field(_)))
            .count();

        if root_field_count != 1 {
            let location = operation
                .def_location()
                .file_position()
                .cloned()
                .unwrap_or(FilePosition { line: 0, column: 0 });
            errors.push(
                GraphQLError::new(
                    ErrorKind::Validation,
                    format!(
                        "subscription operation must have exactly one root field, found {root_field_count}"
                    ),
                )
                .with_location(location),
            );
        }
    }

    errors
}
