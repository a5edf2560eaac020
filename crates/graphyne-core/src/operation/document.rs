use indexmap::IndexMap;

use crate::operation::FragmentDefinition;
use crate::operation::OperationDefinition;

/// A parsed, not-yet-validated (or already validated) request document:
/// every operation and fragment definition it contains.
///
/// `validated` starts `false` and is set by the validator once every
/// validation rule has run clean against this document and a particular
/// schema; the executor refuses to run against a document that isn't
/// validated.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub(crate) fragments: IndexMap<String, FragmentDefinition>,
    pub(crate) operations: Vec<OperationDefinition>,
    pub(crate) validated: bool,
}
impl Document {
    pub fn operations(&self) -> &[OperationDefinition] {
        &self.operations
    }

    pub fn fragments(&self) -> &IndexMap<String, FragmentDefinition> {
        &self.fragments
    }

    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments.get(name)
    }

    pub fn is_validated(&self) -> bool {
        self.validated
    }

    pub(crate) fn mark_validated(&mut self) {
        self.validated = true;
    }

    /// Selects the operation a request is asking to run: the named one if
    /// `operation_name` is given, or the sole operation if the document has
    /// exactly one and none was named. Matches the "every request must
    /// carry an operationName when there's more than one" document rule
    /// (enforced separately by the validator); this is just the lookup.
    pub fn select_operation(
        &self,
        operation_name: Option<&str>,
    ) -> Option<&OperationDefinition> {
        match operation_name {
            Some(name) => self
                .operations
                .iter()
                .find(|op| op.name() == Some(name)),
            None if self.operations.len() == 1 => self.operations.first(),
            None => None,
        }
    }
}
