use indexmap::IndexMap;

use crate::loc::SourceLocation;
use crate::types::InputField;
use crate::value::Value;

/// Places in a schema or request document where a directive application can
/// legally appear, as declared on a `directive` definition's `on` clause.
pub type DirectiveLocation = graphyne_parser::ast::schema::DirectiveLocation;

/// A type-system `directive` definition (`@skip`, `@deprecated`, and any
/// schema-defined custom directive).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Directive {
    pub(crate) arguments: IndexMap<String, InputField>,
    pub(crate) def_location: SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) is_repeatable: bool,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) name: String,
}
impl Directive {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn def_location(&self) -> &SourceLocation {
        &self.def_location
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    pub fn is_repeatable(&self) -> bool {
        self.is_repeatable
    }

    pub fn arguments(&self) -> &IndexMap<String, InputField> {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&InputField> {
        self.arguments.get(name)
    }
}

/// A directive application (`@foo(bar: 1)`) attached to some schema element
/// or request-document element. Argument values here are always literal --
/// variables cannot appear in a type-system directive application, and by
/// the time an operation-level directive annotation reaches this type its
/// arguments have already been coerced against the directive's argument
/// types and had any variable references substituted.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) directive_name: String,
    pub(crate) ref_location: SourceLocation,
}
impl DirectiveAnnotation {
    pub fn directive_name(&self) -> &str {
        self.directive_name.as_str()
    }

    pub fn ref_location(&self) -> &SourceLocation {
        &self.ref_location
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }

    pub fn new(
        directive_name: impl Into<String>,
        arguments: IndexMap<String, Value>,
        ref_location: SourceLocation,
    ) -> Self {
        DirectiveAnnotation {
            arguments,
            directive_name: directive_name.into(),
            ref_location,
        }
    }
}
