use crate::error::ErrorKind;
use crate::error::GraphQLError;
use crate::loc::FilePosition;
use crate::loc::SourceLocation;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceType;
use crate::types::TypeAnnotation;
use crate::validator::context::ValidationContext;
use graphyne_parser::ast::Value as AstValue;

/// Every argument literal supplied in the document must be shaped like its
/// declared type: a `String` argument can't be passed an int literal, an
/// enum argument can't be passed a string literal, and so on. A `$variable`
/// reference is never checked here (its shape is only known once a request
/// supplies a variable Map), nor is `null` against a non-null type -- that's
/// the Selections rule's "missing required argument" check.
pub(crate) fn check(ctx: ValidationContext) -> Vec<GraphQLError> {
    let mut errors = vec![];

    for operation in ctx.document.operations() {
        check_selection_set(operation.selection_set(), ctx.schema, &mut errors);
    }

    errors
}

fn check_selection_set(selections: &SelectionSet, schema: &Schema, errors: &mut Vec<GraphQLError>) {
    for selection in selections {
        match selection {
            Selection::Field(field) => {
                let declared_args = declared_arguments_for(field.name(), schema);
                for (arg_name, value) in field.arguments() {
                    if let Some(type_annotation) = declared_args.get(arg_name.as_str()) {
                        check_value_shape(value, type_annotation, schema, field.def_location(), errors);
                    }
                }
                check_selection_set(field.selection_set(), schema, errors);
            }
            Selection::InlineFragment(frag) => check_selection_set(frag.selection_set(), schema, errors),
            Selection::FragmentSpread(_) => (),
        }
    }
}

/// A best-effort lookup of a field's declared argument types by name alone,
/// scanning every object/interface type in the schema; good enough for a
/// shape check, which doesn't depend on which concrete parent type a field
/// belongs to. The Selections rule is the one responsible for rejecting a
/// field that isn't actually reachable from its selection's parent type.
fn declared_arguments_for<'a>(field_name: &str, schema: &'a Schema) -> std::collections::HashMap<&'a str, &'a TypeAnnotation> {
    let mut out = std::collections::HashMap::new();
    for ty in schema.types() {
        let fields = match ty {
            GraphQLType::Object(obj) => Some(obj.fields()),
            GraphQLType::Interface(iface) => Some(iface.fields()),
            _ => None,
        };
        if let Some(fields) = fields {
            if let Some(field) = fields.get(field_name) {
                for (name, arg) in field.arguments() {
                    out.insert(name.as_str(), arg.type_annotation());
                }
            }
        }
    }
    out
}

fn check_value_shape(
    value: &AstValue,
    type_annotation: &TypeAnnotation,
    schema: &Schema,
    location: &SourceLocation,
    errors: &mut Vec<GraphQLError>,
) {
    if matches!(value, AstValue::Variable(_) | AstValue::Null) {
        return;
    }

    match type_annotation {
        TypeAnnotation::NonNull(inner) => check_value_shape(value, inner, schema, location, errors),
        TypeAnnotation::List(inner) => match value {
            AstValue::List(items) => {
                for item in items {
                    check_value_shape(item, inner, schema, location, errors);
                }
            }
            _ => check_value_shape(value, inner, schema, location, errors),
        },
        TypeAnnotation::Named(named_ref) => {
            let Ok(named_type) = named_ref.deref(schema) else {
                return;
            };
            let shape_matches = match named_type {
                GraphQLType::Bool => matches!(value, AstValue::Boolean(_)),
                GraphQLType::Int => matches!(value, AstValue::Int(_)),
                GraphQLType::Float => matches!(value, AstValue::Float(_) | AstValue::Int(_)),
                GraphQLType::String => matches!(value, AstValue::String(_)),
                GraphQLType::ID => matches!(value, AstValue::String(_) | AstValue::Int(_)),
                GraphQLType::Enum(enum_type) => {
                    matches!(value, AstValue::Enum(name) if enum_type.has_value(name))
                }
                GraphQLType::InputObject(input_object) => match value {
                    AstValue::Object(fields) => fields.keys().all(|name| input_object.field(name).is_some()),
                    _ => false,
                },
                GraphQLType::Scalar(_) => true,
                GraphQLType::Object(_) | GraphQLType::Interface(_) | GraphQLType::Union(_) => false,
            };
            if !shape_matches {
                errors.push(
                    GraphQLError::new(
                        ErrorKind::Validation,
                        format!("value does not match declared type `{}`", named_type.name()),
                    )
                    .with_location(file_pos(location)),
                );
            }
        }
    }
}

fn file_pos(location: &SourceLocation) -> FilePosition {
    location.file_position().cloned().unwrap_or(FilePosition { line: 0, column: 0 })
}
