use std::collections::HashMap;
use std::sync::Arc;

use futures::future::BoxFuture;
use indexmap::IndexMap;

use crate::error::GraphQLError;
use crate::executor::context::OperationContext;
use crate::value::Value;

/// User code mapping `(parent, arguments)` to a value for one field,
/// per a type's resolver map. May be synchronous (wrapping its result in an
/// already-ready future) or suspending.
///
/// For a field whose declared type is composite (object/interface/union),
/// the returned [`Value`] is not the field's final response value -- it's
/// the *parent* the field's own sub-selections resolve against. When that
/// composite type is an interface or union, the returned `Value::Map` must
/// carry a `"__typename"` entry naming the concrete object type, so the
/// executor knows which resolver map to dispatch the sub-selection's fields
/// against; resolvers for object-typed fields may omit it, since the
/// concrete type is already implied by the schema.
pub trait FieldResolver: Send + Sync {
    fn resolve<'a>(
        &'a self,
        parent: &'a Value,
        arguments: &'a IndexMap<String, Value>,
        context: &'a OperationContext<'a>,
    ) -> BoxFuture<'a, Result<Value, GraphQLError>>;
}

impl<F> FieldResolver for F
where
    F: for<'a> Fn(
            &'a Value,
            &'a IndexMap<String, Value>,
            &'a OperationContext<'a>,
        ) -> BoxFuture<'a, Result<Value, GraphQLError>>
        + Send
        + Sync,
{
    fn resolve<'a>(
        &'a self,
        parent: &'a Value,
        arguments: &'a IndexMap<String, Value>,
        context: &'a OperationContext<'a>,
    ) -> BoxFuture<'a, Result<Value, GraphQLError>> {
        self(parent, arguments, context)
    }
}

/// Field name -> resolver, for every field of one concrete object type.
pub type FieldResolverMap = HashMap<String, Arc<dyn FieldResolver>>;

/// The complete set of resolvers an embedding application registers: one
/// [`FieldResolverMap`] per concrete object type name. Immutable once built,
/// so it's freely shared across concurrently executing requests.
#[derive(Clone, Default)]
pub struct ResolverRegistry {
    by_type: HashMap<String, FieldResolverMap>,
}
impl ResolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_type(&mut self, type_name: impl Into<String>, fields: FieldResolverMap) -> &mut Self {
        self.by_type.insert(type_name.into(), fields);
        self
    }

    pub fn resolver_for(&self, type_name: &str, field_name: &str) -> Option<&Arc<dyn FieldResolver>> {
        self.by_type.get(type_name)?.get(field_name)
    }
}
