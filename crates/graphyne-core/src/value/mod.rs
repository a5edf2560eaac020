//! The dynamic value tree used for arguments, variables, and responses.

pub mod base64;
pub mod from_ast;

use indexmap::IndexMap;

pub use base64::Comparison as Base64Comparison;
pub use from_ast::from_ast_const_value;

/// A self-describing, dynamically-typed value.
///
/// A [`Value`] owns its contents exclusively; moving one invalidates the
/// source, exactly as any other owned Rust value would. Comparison is
/// always structural (`#[derive(PartialEq)]`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int32(i32),
    Float64(f64),
    String(StringValue),
    EnumValue(String),
    Id(Vec<u8>),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    /// A user-defined scalar; serialisation is transparent, delegating to
    /// the wrapped [`Value`].
    Scalar(Box<Value>),
}

/// A string value, tagged with where it came from. A string parsed out of a
/// JSON request body is tagged [`StringValue::FromJson`] so that a later,
/// type-directed coercion step (the one that knows the target field expects
/// an `ID` or an enum) can re-tag it without losing provenance; a string
/// produced by the GraphQL-document parser, or constructed directly by a
/// resolver, is [`StringValue::Plain`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum StringValue {
    Plain(String),
    FromJson(String),
}
impl StringValue {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(s) | Self::FromJson(s) => s.as_str(),
        }
    }
}
impl std::convert::From<String> for StringValue {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}
impl std::convert::From<&str> for StringValue {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapInsertError {
    #[error("duplicate key `{0}` inserted into a Value::Map")]
    DuplicateKey(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(b) = self { Some(*b) } else { None }
    }

    pub fn as_i32(&self) -> Option<i32> {
        if let Self::Int32(i) = self { Some(*i) } else { None }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            Self::Int32(i) => Some(f64::from(*i)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            Self::EnumValue(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The byte vector behind an [`Value::Id`], accepting either the native
    /// byte form or (transparently) a Base64-string form tagged as coming
    /// from JSON.
    pub fn as_id_bytes(&self) -> Option<std::borrow::Cow<'_, [u8]>> {
        match self {
            Self::Id(bytes) => Some(std::borrow::Cow::Borrowed(bytes)),
            Self::String(StringValue::FromJson(s)) => {
                base64::decode(s).ok().map(std::borrow::Cow::Owned)
            }
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        if let Self::List(items) = self { Some(items) } else { None }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        if let Self::Map(map) = self { Some(map) } else { None }
    }

    /// Re-tags a JSON-sourced string as an enum symbol or an Id, as directed
    /// by the schema type the value is being coerced against. Values that
    /// didn't come from JSON, or aren't strings, are returned unchanged.
    pub fn retag_from_json_hint(self, hint: JsonRetagHint) -> Value {
        match (self, hint) {
            (Value::String(StringValue::FromJson(s)), JsonRetagHint::EnumValue) => {
                Value::EnumValue(s)
            }
            (Value::String(StringValue::FromJson(s)), JsonRetagHint::Id) => {
                match base64::decode(&s) {
                    Ok(bytes) => Value::Id(bytes),
                    Err(_) => Value::String(StringValue::FromJson(s)),
                }
            }
            (other, _) => other,
        }
    }

    /// Widen an Int to a Float if `self` is an `Int32` and the target
    /// position calls for a float; otherwise returns `self` unchanged.
    pub fn widen_to_float(self) -> Value {
        match self {
            Value::Int32(i) => Value::Float64(f64::from(i)),
            other => other,
        }
    }

    pub fn id(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Id(bytes.into())
    }

    pub fn string(s: impl Into<String>) -> Self {
        Self::String(StringValue::Plain(s.into()))
    }

    /// Builds an ordered [`Value::Map`], rejecting duplicate keys. This is
    /// the only constructor for `Map` values that enforces the no-duplicate
    /// invariant; callers who already hold an `IndexMap` they know to be
    /// duplicate-free may use `Value::Map` directly.
    pub fn try_map_from(
        entries: impl IntoIterator<Item = (String, Value)>,
    ) -> Result<Self, MapInsertError> {
        let mut map = IndexMap::new();
        for (key, value) in entries {
            if map.insert(key.clone(), value).is_some() {
                return Err(MapInsertError::DuplicateKey(key));
            }
        }
        Ok(Self::Map(map))
    }
}

/// Hints the executor/coercion layer can pass to [`Value::retag_from_json_hint`]
/// when it knows, from the schema, what a JSON-sourced string ought to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonRetagHint {
    EnumValue,
    Id,
}

/// Parses a `serde_json::Value`-shaped input into [`Value`], applying the
/// Int-overflow-to-Float promotion and tagging strings as JSON-sourced.
/// Accepts anything implementing [`serde::Deserialize`] via `serde_json`'s
/// untagged representation rather than depending on `serde_json` directly,
/// keeping this crate transport-format-agnostic as called for by the
/// out-of-scope note on concrete JSON serialisation.
pub fn from_json_number(is_integer: bool, as_i64: Option<i64>, as_f64: f64) -> Value {
    if is_integer {
        if let Some(i) = as_i64 {
            if let Ok(i32_val) = i32::try_from(i) {
                return Value::Int32(i32_val);
            }
        }
    }
    Value::Float64(as_f64)
}
