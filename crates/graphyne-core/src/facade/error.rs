use crate::error::GraphQLError;
use crate::operation::DocumentBuildError;

/// Failures a [`super::Request`] call can report that are not the normal
/// per-field `GraphQLError`s that ride along in a response's `errors`
/// list: these are ones the façade itself cannot even attempt a response
/// for, composed from the per-subsystem errors they originate from.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error(transparent)]
    Parse(#[from] DocumentBuildError),

    #[error("request named operation `{0:?}` but the document has no matching operation (or more than one with no name given)")]
    NoSuchOperation(Option<String>),

    #[error("operation `{0:?}` is not a subscription")]
    NotASubscription(Option<String>),

    #[error("schema has no subscription root type")]
    NoSubscriptionType,
}

impl From<RequestError> for GraphQLError {
    fn from(error: RequestError) -> Self {
        let kind = match &error {
            RequestError::Parse(_) => crate::error::ErrorKind::Parse,
            _ => crate::error::ErrorKind::Internal,
        };
        GraphQLError::new(kind, error.to_string())
    }
}
