use std::collections::HashSet;

use crate::error::ErrorKind;
use crate::error::GraphQLError;
use crate::loc::FilePosition;
use crate::loc::SourceLocation;
use crate::operation::OperationKind;
use crate::operation::RawDirectiveApplication;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::types::DirectiveLocation;
use crate::validator::context::ValidationContext;

/// Every directive applied in the document must be defined, applied only at
/// a location its definition permits, and -- unless the definition marks it
/// repeatable -- applied at most once per location.
pub(crate) fn check(ctx: ValidationContext) -> Vec<GraphQLError> {
    let mut errors = vec![];

    for operation in ctx.document.operations() {
        let operation_location = match operation.kind() {
            OperationKind::Query => DirectiveLocation::Query,
            OperationKind::Mutation => DirectiveLocation::Mutation,
            OperationKind::Subscription => DirectiveLocation::Subscription,
        };
        check_applications(operation.directives(), operation_location, ctx.schema, &mut errors);
        check_selection_set(operation.selection_set(), ctx.schema, &mut errors);
    }

    for fragment in ctx.document.fragments().values() {
        check_applications(
            fragment.directives(),
            DirectiveLocation::FragmentDefinition,
            ctx.schema,
            &mut errors,
        );
        check_selection_set(fragment.selection_set(), ctx.schema, &mut errors);
    }

    errors
}

fn check_selection_set(selections: &SelectionSet, schema: &Schema, errors: &mut Vec<GraphQLError>) {
    for selection in selections {
        let location = match selection {
            Selection::Field(_) => DirectiveLocation::Field,
            Selection::FragmentSpread(_) => DirectiveLocation::FragmentSpread,
            Selection::InlineFragment(_) => DirectiveLocation::InlineFragment,
        };
        check_applications(selection.directives(), location, schema, errors);

        match selection {
            Selection::Field(field) => check_selection_set(field.selection_set(), schema, errors),
            Selection::InlineFragment(frag) => check_selection_set(frag.selection_set(), schema, errors),
            Selection::FragmentSpread(_) => (),
        }
    }
}

fn check_applications(
    applications: &[RawDirectiveApplication],
    location: DirectiveLocation,
    schema: &Schema,
    errors: &mut Vec<GraphQLError>,
) {
    let mut seen = HashSet::new();

    for application in applications {
        let Some(def) = schema.directive_def(application.name()) else {
            errors.push(
                GraphQLError::new(
                    ErrorKind::Validation,
                    format!("undefined directive `@{}`", application.name()),
                )
                .with_location(file_pos(application.def_location())),
            );
            continue;
        };

        if !def.locations().contains(&location) {
            errors.push(
                GraphQLError::new(
                    ErrorKind::Validation,
                    format!("directive `@{}` is not permitted at this location", application.name()),
                )
                .with_location(file_pos(application.def_location())),
            );
        }

        if !def.is_repeatable() && !seen.insert(application.name().to_string()) {
            errors.push(
                GraphQLError::new(
                    ErrorKind::Validation,
                    format!("directive `@{}` is not repeatable but is applied more than once here", application.name()),
                )
                .with_location(file_pos(application.def_location())),
            );
        }
    }
}

fn file_pos(location: &SourceLocation) -> FilePosition {
    location.file_position().cloned().unwrap_or(FilePosition { line: 0, column: 0 })
}
