use crate::error::ErrorKind;
use crate::error::GraphQLError;
use crate::loc::FilePosition;
use crate::loc::SourceLocation;
use crate::operation::Document;
use crate::operation::FieldSelection;
use crate::operation::OperationDefinition;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceType;
use crate::validator::context::ValidationContext;

const TYPENAME_FIELD_NAME: &str = "__typename";

/// Every field a selection set names must exist on the type it's selected
/// against (object/interface field, or the always-present `__typename`),
/// and every argument supplied to it must be one the field actually
/// declares, with every argument the field requires actually supplied.
pub(crate) fn check(ctx: ValidationContext) -> Vec<GraphQLError> {
    let mut errors = vec![];

    for operation in ctx.document.operations() {
        let Some(root_type) = root_type_for(operation, ctx.schema) else {
            continue;
        };
        check_selection_set(
            operation.selection_set(),
            root_type,
            ctx.document,
            ctx.schema,
            &mut errors,
        );
    }

    errors
}

fn root_type_for<'a>(operation: &OperationDefinition, schema: &'a Schema) -> Option<&'a GraphQLType> {
    use crate::operation::OperationKind;
    match operation.kind() {
        OperationKind::Query => Some(schema.query_type()),
        OperationKind::Mutation => schema.mutation_type(),
        OperationKind::Subscription => schema.subscription_type(),
    }
}

fn check_selection_set(
    selections: &SelectionSet,
    parent_type: &GraphQLType,
    document: &Document,
    schema: &Schema,
    errors: &mut Vec<GraphQLError>,
) {
    for selection in selections {
        match selection {
            Selection::Field(field) => check_field(field, parent_type, document, schema, errors),
            Selection::InlineFragment(frag) => {
                let target = match frag.type_condition() {
                    Some(name) => schema.lookup_type(name).unwrap_or(parent_type),
                    None => parent_type,
                };
                check_fragment_applies(target, parent_type, schema, location_of(frag.def_location()), errors);
                check_selection_set(frag.selection_set(), target, document, schema, errors);
            }
            Selection::FragmentSpread(spread) => {
                if let Some(fragment) = document.fragment(spread.fragment_name()) {
                    let target = schema.lookup_type(fragment.type_condition()).unwrap_or(parent_type);
                    check_fragment_applies(target, parent_type, schema, location_of(spread.def_location()), errors);
                    check_selection_set(fragment.selection_set(), target, document, schema, errors);
                }
            }
        }
    }
}

fn check_field(
    field: &FieldSelection,
    parent_type: &GraphQLType,
    document: &Document,
    schema: &Schema,
    errors: &mut Vec<GraphQLError>,
) {
    if field.name() == TYPENAME_FIELD_NAME {
        return;
    }

    let declared = match parent_type {
        GraphQLType::Object(obj) => obj.field(field.name()),
        GraphQLType::Interface(iface) => iface.field(field.name()),
        _ => None,
    };

    let Some(declared) = declared else {
        errors.push(
            GraphQLError::new(
                ErrorKind::Validation,
                format!("Undefined field type: {} name: {}", parent_type.name(), field.name()),
            )
            .with_location(location_of(field.def_location())),
        );
        return;
    };

    for arg_name in field.arguments().keys() {
        if declared.argument(arg_name).is_none() {
            errors.push(
                GraphQLError::new(
                    ErrorKind::Validation,
                    format!(
                        "field `{}` on type `{}` has no argument named `{arg_name}`",
                        field.name(),
                        parent_type.name()
                    ),
                )
                .with_location(location_of(field.def_location())),
            );
        }
    }

    for (arg_name, declared_arg) in declared.arguments() {
        let supplied = field.arguments().get(arg_name);
        let supplied_is_null = matches!(supplied, Some(graphyne_parser::ast::Value::Null));
        if declared_arg.is_required() && (supplied.is_none() || supplied_is_null) {
            errors.push(
                GraphQLError::new(
                    ErrorKind::Validation,
                    format!(
                        "field `{}` on type `{}` is missing required argument `{arg_name}`",
                        field.name(),
                        parent_type.name()
                    ),
                )
                .with_location(location_of(field.def_location())),
            );
        }
    }

    let field_named_ref = declared.type_annotation().inner_named_ref();
    if let Ok(return_type) = field_named_ref.deref(schema) {
        if return_type.is_composite() {
            check_selection_set(field.selection_set(), return_type, document, schema, errors);
        }
    }
}

/// A fragment (named or inline) only makes sense where its type condition's
/// possible concrete types overlap the possible concrete types of the place
/// it's spread into; e.g. a fragment `on Dog` spread into a selection set
/// typed `Cat` could never produce a value, and is rejected here.
fn check_fragment_applies(
    fragment_type: &GraphQLType,
    parent_type: &GraphQLType,
    schema: &Schema,
    location: FilePosition,
    errors: &mut Vec<GraphQLError>,
) {
    if !fragment_type.is_composite() {
        return;
    }
    let fragment_possible = fragment_type.possible_type_names(schema);
    let parent_possible = parent_type.possible_type_names(schema);
    let overlaps = fragment_possible.iter().any(|name| parent_possible.contains(name));
    if !overlaps {
        errors.push(
            GraphQLError::new(
                ErrorKind::Validation,
                format!(
                    "fragment on type `{}` can never apply within a selection on type `{}`",
                    fragment_type.name(),
                    parent_type.name()
                ),
            )
            .with_location(location),
        );
    }
}

fn location_of(location: &SourceLocation) -> FilePosition {
    location.file_position().cloned().unwrap_or(FilePosition { line: 0, column: 0 })
}
