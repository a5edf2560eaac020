use std::any::Any;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Mutex;

use indexmap::IndexMap;

use crate::error::ErrorKind;
use crate::error::GraphQLError;
use crate::error::PathSegment;
use crate::executor::resolver::ResolverRegistry;
use crate::operation::Document;
use crate::schema::Schema;
use crate::value::Value;

/// Whether sibling fields within one selection set may be resolved
/// concurrently. Mutation root fields ignore this and always run
/// sequentially in source order, per the language spec's sequencing
/// guarantee for mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulingPolicy {
    Sequential,
    Parallel,
}

/// The mutable state threaded through one execution: the schema and
/// document being executed against, the resolved variable Map, the
/// resolver registry, an append-only error list, a caller-supplied opaque
/// state object forwarded verbatim to every resolver, and a cooperative
/// cancellation flag resolvers may themselves observe for long-running
/// work.
pub struct OperationContext<'a> {
    pub(crate) schema: &'a Schema,
    pub(crate) document: &'a Document,
    pub(crate) variables: &'a IndexMap<String, Value>,
    pub(crate) resolvers: &'a ResolverRegistry,
    pub(crate) state: &'a (dyn Any + Send + Sync),
    pub(crate) policy: SchedulingPolicy,
    pub(crate) cancelled: &'a AtomicBool,
    errors: Mutex<Vec<GraphQLError>>,
}
impl<'a> OperationContext<'a> {
    pub fn new(
        schema: &'a Schema,
        document: &'a Document,
        variables: &'a IndexMap<String, Value>,
        resolvers: &'a ResolverRegistry,
        state: &'a (dyn Any + Send + Sync),
        policy: SchedulingPolicy,
        cancelled: &'a AtomicBool,
    ) -> Self {
        OperationContext {
            schema,
            document,
            variables,
            resolvers,
            state,
            policy,
            cancelled,
            errors: Mutex::new(vec![]),
        }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn state(&self) -> &'a (dyn Any + Send + Sync) {
        self.state
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    pub(crate) fn push_error(&self, path: &[PathSegment], kind: ErrorKind, message: impl Into<String>) {
        let error = GraphQLError::new(kind, message).with_path(path.to_vec());
        self.errors.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).push(error);
    }

    pub(crate) fn push_graphql_error(&self, path: &[PathSegment], mut error: GraphQLError) {
        if error.path.is_empty() {
            error = error.with_path(path.to_vec());
        }
        self.errors.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).push(error);
    }

    /// Drains the accumulated error list, in completion order. Consumes
    /// `self`'s interior lock; called once execution has finished.
    pub(crate) fn take_errors(&self) -> Vec<GraphQLError> {
        std::mem::take(&mut *self.errors.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }
}
