use crate::loc::SourceLocation;
use crate::types::TypeAnnotation;
use crate::value::Value;

/// A `$name: Type = default` variable declaration on an operation.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableDefinition {
    pub(crate) def_location: SourceLocation,
    pub(crate) default_value: Option<Value>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl VariableDefinition {
    pub fn def_location(&self) -> &SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub fn is_required(&self) -> bool {
        self.type_annotation.is_non_null() && self.default_value.is_none()
    }
}
