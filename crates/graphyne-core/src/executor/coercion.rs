use indexmap::IndexMap;

use crate::schema::Schema;
use crate::types::FieldArgument;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::value::Value;
use graphyne_parser::ast::Value as AstValue;

/// Builds the final argument Map a resolver receives for one field
/// selection: every declared argument the field takes, each either the
/// caller-supplied literal (with `$variable` references substituted from
/// the request's variable Map) coerced against its declared type, or --
/// when the selection omitted it -- the argument's declared default.
pub(crate) fn coerce_arguments(
    supplied: &IndexMap<String, AstValue>,
    declared: &IndexMap<String, FieldArgument>,
    variables: &IndexMap<String, Value>,
    schema: &Schema,
) -> IndexMap<String, Value> {
    let mut out = IndexMap::with_capacity(declared.len());
    for (name, arg) in declared {
        let value = match supplied.get(name) {
            Some(ast_value) => coerce_value(ast_value, arg.type_annotation(), variables, schema),
            None => arg.default_value().cloned().unwrap_or(Value::Null),
        };
        out.insert(name.clone(), value);
    }
    out
}

fn coerce_value(
    ast_value: &AstValue,
    type_annotation: &TypeAnnotation,
    variables: &IndexMap<String, Value>,
    schema: &Schema,
) -> Value {
    if let AstValue::Variable(name) = ast_value {
        return variables.get(name).cloned().unwrap_or(Value::Null);
    }
    if matches!(ast_value, AstValue::Null) {
        return Value::Null;
    }

    match type_annotation {
        TypeAnnotation::NonNull(inner) => coerce_value(ast_value, inner, variables, schema),
        TypeAnnotation::List(inner) => match ast_value {
            AstValue::List(items) => Value::List(
                items
                    .iter()
                    .map(|item| coerce_value(item, inner, variables, schema))
                    .collect(),
            ),
            single => Value::List(vec![coerce_value(single, inner, variables, schema)]),
        },
        TypeAnnotation::Named(named_ref) => {
            let Ok(named_type) = named_ref.deref(schema) else {
                return Value::Null;
            };
            coerce_named(ast_value, named_type, variables, schema)
        }
    }
}

fn coerce_named(
    ast_value: &AstValue,
    named_type: &GraphQLType,
    variables: &IndexMap<String, Value>,
    schema: &Schema,
) -> Value {
    match (named_type, ast_value) {
        (GraphQLType::Bool, AstValue::Boolean(b)) => Value::Bool(*b),
        (GraphQLType::Int, AstValue::Int(n)) => Value::Int32(n.as_i64().unwrap_or_default() as i32),
        (GraphQLType::Float, AstValue::Float(f)) => Value::Float64(*f),
        (GraphQLType::Float, AstValue::Int(n)) => Value::Float64(n.as_i64().unwrap_or_default() as f64),
        (GraphQLType::String, AstValue::String(s)) => Value::string(s.clone()),
        (GraphQLType::ID, AstValue::String(s)) => Value::id(s.clone().into_bytes()),
        (GraphQLType::ID, AstValue::Int(n)) => Value::id(n.as_i64().unwrap_or_default().to_string().into_bytes()),
        (GraphQLType::Enum(_), AstValue::Enum(name)) => Value::EnumValue(name.clone()),
        (GraphQLType::InputObject(input_object), AstValue::Object(fields)) => {
            let mut map = IndexMap::with_capacity(input_object.fields().len());
            for (field_name, input_field) in input_object.fields() {
                let value = match fields.get(field_name) {
                    Some(ast_value) => coerce_value(ast_value, input_field.type_annotation(), variables, schema),
                    None => input_field.default_value().cloned().unwrap_or(Value::Null),
                };
                map.insert(field_name.clone(), value);
            }
            Value::Map(map)
        }
        (GraphQLType::Scalar(_), _) => crate::value::from_ast_const_value(ast_value),
        _ => Value::Null,
    }
}
