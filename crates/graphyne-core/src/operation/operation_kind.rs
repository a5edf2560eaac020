/// Which of the three request-document operation kinds a definition is.
/// Determines scheduling policy: query and subscription root fields may
/// run concurrently with their siblings, mutation root fields run
/// strictly in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}
impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }

    /// Whether sibling root fields of this operation kind may be resolved
    /// concurrently with one another.
    pub fn allows_parallel_root_fields(self) -> bool {
        !matches!(self, Self::Mutation)
    }
}
