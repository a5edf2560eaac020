use std::hash::Hash;
use std::hash::Hasher;

use indexmap::IndexMap;

use crate::value::Value;

/// A hash of a coerced argument Map, used as the fast-path bucket key for
/// matching a delivered event against registered subscriptions. Two
/// arguments that are `==` always fingerprint equal; the converse does not
/// hold (hash collisions are expected and resolved by a structural
/// equality check against the candidates a bucket turns up), since `Value`
/// carries `f64` and has no canonical `Hash` impl of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Fingerprint(u64);

pub(crate) fn fingerprint(field_name: &str, arguments: &IndexMap<String, Value>) -> Fingerprint {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    field_name.hash(&mut hasher);
    for (name, value) in arguments {
        name.hash(&mut hasher);
        hash_value(value, &mut hasher);
    }
    Fingerprint(hasher.finish())
}

fn hash_value(value: &Value, hasher: &mut impl Hasher) {
    std::mem::discriminant(value).hash(hasher);
    match value {
        Value::Null => {}
        Value::Bool(b) => b.hash(hasher),
        Value::Int32(n) => n.hash(hasher),
        Value::Float64(f) => f.to_bits().hash(hasher),
        Value::String(s) => s.as_str().hash(hasher),
        Value::EnumValue(s) => s.hash(hasher),
        Value::Id(bytes) => bytes.hash(hasher),
        Value::List(items) => {
            for item in items {
                hash_value(item, hasher);
            }
        }
        Value::Map(map) => {
            for (key, value) in map {
                key.hash(hasher);
                hash_value(value, hasher);
            }
        }
        Value::Scalar(inner) => hash_value(inner, hasher),
    }
}
