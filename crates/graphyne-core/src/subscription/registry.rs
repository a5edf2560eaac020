use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::RwLock;

use indexmap::IndexMap;

use crate::operation::Document;
use crate::operation::OperationDefinition;
use crate::subscription::fingerprint::fingerprint;
use crate::subscription::fingerprint::Fingerprint;
use crate::value::Value;

/// Opaque handle returned by [`SubscriptionRegistry::register`], used to
/// unsubscribe later. Stable for the lifetime of the subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Where a subscription's resolved response values are delivered. Kept as
/// a plain closure rather than a channel type so embedders can wire it to
/// whatever transport (websocket, SSE, in-process callback) they use;
/// returning `false` tells the registry the sink has gone away, so it is
/// dropped on the next delivery attempt.
pub trait SubscriptionSink: Send + Sync {
    fn send(&self, response: Value) -> bool;
}

impl<F> SubscriptionSink for F
where
    F: Fn(Value) -> bool + Send + Sync,
{
    fn send(&self, response: Value) -> bool {
        self(response)
    }
}

struct Entry {
    id: SubscriptionId,
    field_name: String,
    arguments: IndexMap<String, Value>,
    fingerprint: Fingerprint,
    sink: Arc<dyn SubscriptionSink>,
    operation: Arc<OperationDefinition>,
    document: Arc<Document>,
    variables: IndexMap<String, Value>,
}

/// Everything needed to run one matched subscription's selection set
/// against a delivered event and write the result to its sink.
pub struct MatchedSubscription {
    pub id: SubscriptionId,
    pub field_name: String,
    pub sink: Arc<dyn SubscriptionSink>,
    pub operation: Arc<OperationDefinition>,
    pub document: Arc<Document>,
    pub variables: IndexMap<String, Value>,
}

/// Maintains the set of live `(fieldName, argumentFingerprint) -> sink`
/// subscriptions. Matching a delivered event against registered
/// subscriptions is a fingerprint-bucket lookup followed by a structural
/// equality check against each candidate's coerced arguments, since
/// fingerprint collisions are possible and must not produce a false
/// delivery.
#[derive(Default)]
pub struct SubscriptionRegistry {
    next_id: AtomicU64,
    entries: RwLock<Vec<Entry>>,
}
impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a sink for `field_name` with the given (already-coerced)
    /// root-field arguments, returning the id used to unsubscribe it
    /// later. `operation`/`document`/`variables` are retained so a later
    /// `deliver()` can run this subscription's selection set against the
    /// event.
    #[allow(clippy::too_many_arguments)]
    pub fn register(
        &self,
        field_name: impl Into<String>,
        arguments: IndexMap<String, Value>,
        sink: Arc<dyn SubscriptionSink>,
        operation: Arc<OperationDefinition>,
        document: Arc<Document>,
        variables: IndexMap<String, Value>,
    ) -> SubscriptionId {
        let field_name = field_name.into();
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let fp = fingerprint(&field_name, &arguments);
        tracing::info!(subscription_id = id.0, field = %field_name, "subscription registered");
        self.entries.write().unwrap_or_else(|p| p.into_inner()).push(Entry {
            id,
            field_name,
            arguments,
            fingerprint: fp,
            sink,
            operation,
            document,
            variables,
        });
        id
    }

    /// Removes a subscription by id. Idempotent: unsubscribing twice, or
    /// unsubscribing an id that was never registered (or already dropped
    /// because its sink closed), is a harmless no-op.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut entries = self.entries.write().unwrap_or_else(|p| p.into_inner());
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() != before {
            tracing::info!(subscription_id = id.0, "subscription unsubscribed");
        }
    }

    /// Returns the matching bundle for every live subscription on
    /// `field_name` whose coerced arguments equal `match_arguments`. The
    /// caller runs each one's selection set against the event and writes
    /// the result through its sink, then reports closed sinks back via
    /// [`prune_closed`](Self::prune_closed).
    pub fn matching(&self, field_name: &str, match_arguments: &IndexMap<String, Value>) -> Vec<MatchedSubscription> {
        let target_fp = fingerprint(field_name, match_arguments);
        tracing::trace!(field = %field_name, "matching subscriptions for delivery");
        let entries = self.entries.read().unwrap_or_else(|p| p.into_inner());
        entries
            .iter()
            .filter(|entry| {
                entry.field_name == field_name && entry.fingerprint == target_fp && &entry.arguments == match_arguments
            })
            .map(|entry| MatchedSubscription {
                id: entry.id,
                field_name: entry.field_name.clone(),
                sink: Arc::clone(&entry.sink),
                operation: Arc::clone(&entry.operation),
                document: Arc::clone(&entry.document),
                variables: entry.variables.clone(),
            })
            .collect()
    }

    /// Drops every subscription whose sink reported itself closed in a
    /// preceding [`matching`](Self::matching) call's delivery.
    pub fn prune_closed(&self, closed: &[SubscriptionId]) {
        if closed.is_empty() {
            return;
        }
        let mut entries = self.entries.write().unwrap_or_else(|p| p.into_inner());
        entries.retain(|entry| !closed.contains(&entry.id));
        tracing::info!(count = closed.len(), "pruned closed subscription sinks");
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|p| p.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
