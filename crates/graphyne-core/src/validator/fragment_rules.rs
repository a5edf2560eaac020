use crate::error::ErrorKind;
use crate::error::GraphQLError;
use crate::loc::FilePosition;
use crate::loc::SourceLocation;
use crate::operation::Document;
use crate::operation::FragmentDefinition;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::validator::context::ValidationContext;

/// Fragment definitions: the type condition must name a composite type that
/// exists, every spread must name a fragment that's actually defined, and no
/// fragment may (directly or transitively) spread itself.
pub(crate) fn check(ctx: ValidationContext) -> Vec<GraphQLError> {
    let mut errors = vec![];

    for fragment in ctx.document.fragments().values() {
        check_type_condition(fragment, ctx.schema, &mut errors);
    }

    for fragment in ctx.document.fragments().values() {
        let mut path = vec![fragment.name()];
        check_spreads(fragment.selection_set(), ctx.document, &mut path, &mut errors);
    }

    for operation in ctx.document.operations() {
        check_spreads(operation.selection_set(), ctx.document, &mut vec![], &mut errors);
    }

    errors
}

fn check_type_condition(fragment: &FragmentDefinition, schema: &Schema, errors: &mut Vec<GraphQLError>) {
    match schema.lookup_type(fragment.type_condition()) {
        Some(ty) if ty.is_composite() => (),
        Some(ty) => {
            errors.push(
                GraphQLError::new(
                    ErrorKind::Validation,
                    format!(
                        "fragment `{}` has type condition `{}`, which is not a composite type",
                        fragment.name(),
                        ty.name()
                    ),
                )
                .with_location(location_of(fragment.def_location())),
            );
        }
        None => {
            errors.push(
                GraphQLError::new(
                    ErrorKind::Validation,
                    format!(
                        "fragment `{}` has type condition on undefined type `{}`",
                        fragment.name(),
                        fragment.type_condition()
                    ),
                )
                .with_location(location_of(fragment.def_location())),
            );
        }
    }
}

fn check_spreads<'a>(
    selections: &'a SelectionSet,
    document: &'a Document,
    path: &mut Vec<&'a str>,
    errors: &mut Vec<GraphQLError>,
) {
    for selection in selections {
        match selection {
            Selection::Field(field) => check_spreads(field.selection_set(), document, path, errors),
            Selection::InlineFragment(frag) => check_spreads(frag.selection_set(), document, path, errors),
            Selection::FragmentSpread(spread) => {
                let Some(fragment) = document.fragment(spread.fragment_name()) else {
                    errors.push(
                        GraphQLError::new(
                            ErrorKind::Validation,
                            format!("spread of undefined fragment `{}`", spread.fragment_name()),
                        )
                        .with_location(location_of(spread.def_location())),
                    );
                    continue;
                };

                if path.contains(&fragment.name()) {
                    errors.push(
                        GraphQLError::new(
                            ErrorKind::Validation,
                            format!("fragment `{}` spreads itself, directly or transitively", fragment.name()),
                        )
                        .with_location(location_of(spread.def_location())),
                    );
                    continue;
                }

                path.push(fragment.name());
                check_spreads(fragment.selection_set(), document, path, errors);
                path.pop();
            }
        }
    }
}

fn location_of(location: &SourceLocation) -> FilePosition {
    location.file_position().cloned().unwrap_or(FilePosition { line: 0, column: 0 })
}
