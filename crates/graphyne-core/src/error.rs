use indexmap::IndexMap;

use crate::loc::FilePosition;
use crate::value::Value;

/// A single segment of a response-tree [path](GraphQLError::path): either a
/// response-map key or a list index.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

/// The kind of failure a [`GraphQLError`] represents, per the disjoint
/// error taxonomy: parse errors abort before an AST exists; validation and
/// coercion errors are static, discovered before execution starts;
/// execution and internal errors are raised mid-resolution and carry the
/// field path active when they were raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Validation,
    Coercion,
    Execution,
    Internal,
}

/// A single structured error, in the response shape described by the
/// request/response error contract: `message`, `locations`, `path`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphQLError {
    pub message: String,
    pub locations: Vec<FilePosition>,
    pub path: Vec<PathSegment>,
    #[serde(skip)]
    pub(crate) kind: ErrorKind,
}
impl GraphQLError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        GraphQLError {
            message: message.into(),
            locations: vec![],
            path: vec![],
            kind,
        }
    }

    pub fn with_location(mut self, location: FilePosition) -> Self {
        self.locations.push(location);
        self
    }

    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = path;
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Whether this error, per the propagation policy, should short-circuit
    /// the whole request rather than merely appear in `errors` alongside a
    /// partial `data`.
    pub fn short_circuits_request(&self) -> bool {
        matches!(self.kind, ErrorKind::Parse) || (self.kind == ErrorKind::Validation && self.path.is_empty())
    }
}

/// Assembles the top-level response shape every façade entry point
/// returns: `{"data": ..., "errors": [...]}`, with `errors` present only
/// when non-empty.
pub(crate) fn response_value(data: Value, errors: Vec<GraphQLError>) -> Value {
    let mut response = IndexMap::new();
    response.insert("data".to_string(), data);
    if !errors.is_empty() {
        response.insert("errors".to_string(), Value::List(errors.into_iter().map(error_to_value).collect()));
    }
    Value::Map(response)
}

fn error_to_value(error: GraphQLError) -> Value {
    let mut map = IndexMap::new();
    map.insert("message".to_string(), Value::string(error.message));
    if !error.locations.is_empty() {
        let locations = error
            .locations
            .iter()
            .map(|loc| {
                let mut location_map = IndexMap::new();
                location_map.insert("line".to_string(), Value::Int32(loc.line as i32));
                location_map.insert("column".to_string(), Value::Int32(loc.column as i32));
                Value::Map(location_map)
            })
            .collect();
        map.insert("locations".to_string(), Value::List(locations));
    }
    if !error.path.is_empty() {
        let path = error
            .path
            .iter()
            .map(|segment| match segment {
                PathSegment::Field(name) => Value::string(name.clone()),
                PathSegment::Index(index) => Value::Int32(*index as i32),
            })
            .collect();
        map.insert("path".to_string(), Value::List(path));
    }
    Value::Map(map)
}
