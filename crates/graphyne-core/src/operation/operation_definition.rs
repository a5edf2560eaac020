use indexmap::IndexMap;

use crate::loc::SourceLocation;
use crate::operation::selection::RawDirectiveApplication;
use crate::operation::selection::SelectionSet;
use crate::operation::OperationKind;
use crate::operation::VariableDefinition;

/// One `query`/`mutation`/`subscription { ... }` definition out of a
/// request document.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OperationDefinition {
    pub(crate) def_location: SourceLocation,
    pub(crate) directives: Vec<RawDirectiveApplication>,
    pub(crate) kind: OperationKind,
    pub(crate) name: Option<String>,
    pub(crate) selection_set: SelectionSet,
    pub(crate) variables: IndexMap<String, VariableDefinition>,
}
impl OperationDefinition {
    pub fn def_location(&self) -> &SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &[RawDirectiveApplication] {
        &self.directives
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn variables(&self) -> &IndexMap<String, VariableDefinition> {
        &self.variables
    }
}
