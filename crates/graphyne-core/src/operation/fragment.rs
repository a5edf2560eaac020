use crate::loc::SourceLocation;
use crate::operation::selection::RawDirectiveApplication;
use crate::operation::selection::SelectionSet;

/// A named `fragment Foo on Bar { ... }` definition.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentDefinition {
    pub(crate) def_location: SourceLocation,
    pub(crate) directives: Vec<RawDirectiveApplication>,
    pub(crate) name: String,
    pub(crate) selection_set: SelectionSet,
    pub(crate) type_condition: String,
}
impl FragmentDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }

    pub fn directives(&self) -> &[RawDirectiveApplication] {
        &self.directives
    }

    pub fn def_location(&self) -> &SourceLocation {
        &self.def_location
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}
