use indexmap::IndexMap;

use crate::value::StringValue;
use crate::value::Value;

/// Converts a parsed literal value into a runtime [`Value`].
///
/// Type-system directive applications and default values can never contain
/// a `$variable` reference (the grammar forbids it), so a `Variable` node
/// reaching here indicates a caller passed an operation-level literal
/// (which may legitimately contain one) through the wrong conversion path;
/// it's treated as `Null` rather than panicking, since a malformed
/// document should surface as a validation error, not a crash.
pub fn from_ast_const_value(ast_value: &graphyne_parser::ast::Value) -> Value {
    use graphyne_parser::ast::Value as AstValue;
    match ast_value {
        AstValue::Variable(_) => Value::Null,
        AstValue::Int(n) => Value::Int32(n.as_i64().unwrap_or_default() as i32),
        AstValue::Float(f) => Value::Float64(*f),
        AstValue::String(s) => Value::String(StringValue::Plain(s.clone())),
        AstValue::Boolean(b) => Value::Bool(*b),
        AstValue::Null => Value::Null,
        AstValue::Enum(name) => Value::EnumValue(name.clone()),
        AstValue::List(items) => Value::List(items.iter().map(from_ast_const_value).collect()),
        AstValue::Object(fields) => {
            let map: IndexMap<String, Value> = fields
                .iter()
                .map(|(name, value)| (name.clone(), from_ast_const_value(value)))
                .collect();
            Value::Map(map)
        }
    }
}
