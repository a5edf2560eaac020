use std::any::Any;
use std::collections::HashMap;
use std::hash::Hash;
use std::hash::Hasher;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::sync::RwLock;

use indexmap::IndexMap;
use tracing::Instrument;

use crate::error::response_value;
use crate::error::GraphQLError;
use crate::executor::execute_operation;
use crate::executor::FieldResolver;
use crate::executor::OperationContext;
use crate::executor::ResolverRegistry;
use crate::executor::SchedulingPolicy;
use crate::facade::config::RuntimeConfig;
use crate::facade::error::RequestError;
use crate::operation::Document;
use crate::operation::ExecutableDocumentBuilder;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::schema::Schema;
use crate::subscription::SubscriptionId;
use crate::subscription::SubscriptionRegistry;
use crate::subscription::SubscriptionSink;
use crate::types::ObjectOrInterfaceType;
use crate::value::Value;

/// The embedding application's single entry point: parses and caches
/// request documents, validates and executes them against a fixed schema
/// and resolver registry, and maintains the live subscription registry.
/// One instance is meant to be built once and shared across every request
/// an embedding server handles.
pub struct Request {
    schema: Schema,
    resolvers: ResolverRegistry,
    config: RuntimeConfig,
    ast_cache: RwLock<HashMap<u64, Arc<Document>>>,
    subscriptions: SubscriptionRegistry,
}
impl Request {
    pub fn new(schema: Schema, resolvers: ResolverRegistry) -> Self {
        Self::with_config(schema, resolvers, RuntimeConfig::default())
    }

    pub fn with_config(schema: Schema, resolvers: ResolverRegistry, config: RuntimeConfig) -> Self {
        Request {
            schema,
            resolvers,
            config,
            ast_cache: RwLock::new(HashMap::new()),
            subscriptions: SubscriptionRegistry::new(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Parses `text` into a [`Document`], reusing a cached parse when this
    /// exact text has been seen before. Does not validate.
    pub fn parse(&self, text: &str) -> Result<Arc<Document>, RequestError> {
        let digest = text_digest(text);
        if let Some(cached) = self.ast_cache.read().unwrap_or_else(|p| p.into_inner()).get(&digest) {
            return Ok(Arc::clone(cached));
        }
        let document = Arc::new(ExecutableDocumentBuilder::parse(text)?);
        self.ast_cache
            .write()
            .unwrap_or_else(|p| p.into_inner())
            .insert(digest, Arc::clone(&document));
        Ok(document)
    }

    /// Runs every validation rule against `document`, without mutating the
    /// cached copy `parse()` returned.
    pub fn validate(&self, document: &Document) -> Vec<GraphQLError> {
        let mut document = document.clone();
        crate::validator::validate(&mut document, &self.schema)
    }

    /// Parses, validates, and executes one operation, returning the full
    /// `{data, errors?}` response value. `state` is forwarded verbatim to
    /// every resolver invoked while executing this request.
    pub async fn resolve(
        &self,
        text: &str,
        operation_name: Option<&str>,
        variables: IndexMap<String, Value>,
        state: &(dyn Any + Send + Sync),
        policy: Option<SchedulingPolicy>,
    ) -> Result<Value, RequestError> {
        let span = tracing::info_span!("resolve", operation_name = operation_name.unwrap_or("<anonymous>"));
        async move {
            let cached = self.parse(text)?;
            let mut document = (*cached).clone();
            let validation_errors = crate::validator::validate(&mut document, &self.schema);
            if !validation_errors.is_empty() {
                return Ok(response_value(Value::Null, validation_errors));
            }

            let operation = document
                .select_operation(operation_name)
                .ok_or_else(|| RequestError::NoSuchOperation(operation_name.map(str::to_string)))?;

            let cancelled = AtomicBool::new(false);
            let policy = policy.unwrap_or(self.config.default_policy);
            let ctx = OperationContext::new(&self.schema, &document, &variables, &self.resolvers, state, policy, &cancelled);
            Ok(execute_operation(&ctx, operation, &Value::Null).await)
        }
        .instrument(span)
        .await
    }

    /// Validates and registers a subscription operation's single root
    /// field, returning the id used to unsubscribe it. Arguments are
    /// coerced once here, exactly as they would be for a query, so
    /// [`deliver`](Self::deliver) only has to match the already-coerced
    /// Map against each delivered event.
    pub fn subscribe(
        &self,
        text: &str,
        operation_name: Option<&str>,
        variables: IndexMap<String, Value>,
        sink: Arc<dyn SubscriptionSink>,
    ) -> Result<SubscriptionId, RequestError> {
        let cached = self.parse(text)?;
        let mut document = (*cached).clone();
        let validation_errors = crate::validator::validate(&mut document, &self.schema);
        if let Some(first) = validation_errors.into_iter().next() {
            return Err(RequestError::from(first));
        }

        let operation = document
            .select_operation(operation_name)
            .ok_or_else(|| RequestError::NoSuchOperation(operation_name.map(str::to_string)))?;
        if operation.kind() != OperationKind::Subscription {
            return Err(RequestError::NotASubscription(operation_name.map(str::to_string)));
        }

        let subscription_type = self.schema.subscription_type().ok_or(RequestError::NoSubscriptionType)?;
        let Some(Selection::Field(root_field)) = operation.selection_set().first() else {
            return Err(RequestError::NoSuchOperation(operation_name.map(str::to_string)));
        };
        let field_def = subscription_type
            .as_object()
            .and_then(|obj| obj.field(root_field.name()))
            .or_else(|| subscription_type.as_interface().and_then(|iface| iface.field(root_field.name())))
            .ok_or_else(|| RequestError::NoSuchOperation(Some(root_field.name().to_string())))?;

        let arguments = crate::executor::coerce_arguments(root_field.arguments(), field_def.arguments(), &variables, &self.schema);
        let field_name = root_field.name().to_string();
        let operation = operation.clone();

        let document = Arc::new(document);
        let operation = Arc::new(operation);
        Ok(self.subscriptions.register(field_name, arguments, sink, operation, document, variables))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscriptions.unsubscribe(id);
    }

    /// Delivers one event to every live subscription whose coerced
    /// root-field arguments equal `match_arguments`: runs each matched
    /// subscription's selection set with `event_value` standing in as the
    /// resolved root-field value, then writes the response to its sink.
    pub async fn deliver(
        &self,
        field_name: &str,
        match_arguments: &IndexMap<String, Value>,
        event_value: Value,
    ) -> Vec<Value> {
        let matches = self.subscriptions.matching(field_name, match_arguments);
        tracing::trace!(field = field_name, matches = matches.len(), "delivering subscription event");

        let mut responses = Vec::with_capacity(matches.len());
        let mut closed = Vec::new();
        for matched in matches {
            let mut overridden = self.resolvers.clone();
            let event_value = event_value.clone();
            let mut field_map: crate::executor::FieldResolverMap = HashMap::new();
            field_map.insert(
                matched.field_name.clone(),
                Arc::new(move |_: &Value, _: &IndexMap<String, Value>, _: &OperationContext<'_>| {
                    let event_value = event_value.clone();
                    Box::pin(async move { Ok(event_value) }) as futures::future::BoxFuture<'_, Result<Value, GraphQLError>>
                }) as Arc<dyn FieldResolver>,
            );
            overridden.register_type(self.schema.subscription_type().map(|t| t.name()).unwrap_or_default(), field_map);

            let cancelled = AtomicBool::new(false);
            let ctx = OperationContext::new(
                &self.schema,
                &matched.document,
                &matched.variables,
                &overridden,
                &(),
                self.config.default_policy,
                &cancelled,
            );
            let response = execute_operation(&ctx, &matched.operation, &Value::Null).await;
            responses.push(response.clone());

            if !matched.sink.send(response) {
                closed.push(matched.id);
            }
        }
        self.subscriptions.prune_closed(&closed);
        responses
    }
}

fn text_digest(text: &str) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}
