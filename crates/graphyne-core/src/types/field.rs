use indexmap::IndexMap;

use crate::loc::SourceLocation;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use crate::types::TypeAnnotation;
use crate::value::Value;

/// A single declared argument of a field or directive.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldArgument {
    pub(crate) def_location: SourceLocation,
    pub(crate) default_value: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl FieldArgument {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn def_location(&self) -> &SourceLocation {
        &self.def_location
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn is_required(&self) -> bool {
        self.type_annotation.is_non_null() && self.default_value.is_none()
    }
}

/// A declared field of an object or interface type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(crate) arguments: IndexMap<String, FieldArgument>,
    pub(crate) def_location: SourceLocation,
    pub(crate) deprecation: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn def_location(&self) -> &SourceLocation {
        &self.def_location
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub fn arguments(&self) -> &IndexMap<String, FieldArgument> {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&FieldArgument> {
        self.arguments.get(name)
    }

    pub fn deprecation(&self) -> &DeprecationState {
        &self.deprecation
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }
}
