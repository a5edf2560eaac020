/// Whether a field, argument, enum value, or input field carries
/// `@deprecated`, and if so, with what reason.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum DeprecationState {
    Active,
    Deprecated { reason: Option<String> },
}
impl DeprecationState {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Deprecated { reason } => reason.as_deref(),
            Self::Active => None,
        }
    }
}
