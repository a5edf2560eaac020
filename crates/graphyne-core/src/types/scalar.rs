use crate::loc::SourceLocation;
use crate::types::DirectiveAnnotation;

/// A scalar type, either one of the four builtins (`Int`, `Float`, `String`,
/// `Boolean`, `ID`, represented directly as [`crate::types::GraphQLType`]
/// variants rather than through this struct) or a custom scalar declared
/// with `scalar Foo`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    pub(crate) def_location: SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn def_location(&self) -> &SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        directives: Vec<DirectiveAnnotation>,
        def_location: SourceLocation,
    ) -> Self {
        ScalarType {
            def_location,
            description,
            directives,
            name: name.into(),
        }
    }
}
