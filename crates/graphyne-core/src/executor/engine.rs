use std::collections::HashSet;

use futures::future::BoxFuture;
use futures::future::FutureExt;
use indexmap::IndexMap;
use tracing::Instrument;

use crate::error::ErrorKind;
use crate::error::GraphQLError;
use crate::error::PathSegment;
use crate::executor::coercion::coerce_arguments;
use crate::executor::context::OperationContext;
use crate::executor::context::SchedulingPolicy;
use crate::executor::field_collection::collect_fields;
use crate::operation::FieldSelection;
use crate::operation::OperationDefinition;
use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceType;
use crate::types::TypeAnnotation;
use crate::value::Value;

const TYPENAME_FIELD_NAME: &str = "__typename";

/// Runs one already-validated operation to completion and returns the
/// top-level response Map: `{"data": ..., "errors": [...]}` (`errors` only
/// present when non-empty), per the response shape the external interface
/// describes.
pub async fn execute_operation<'a>(
    ctx: &OperationContext<'a>,
    operation: &'a OperationDefinition,
    root_value: &'a Value,
) -> Value {
    let root_type = match operation.kind() {
        OperationKind::Query => Some(ctx.schema().query_type()),
        OperationKind::Mutation => ctx.schema().mutation_type(),
        OperationKind::Subscription => ctx.schema().subscription_type(),
    };

    let data = match root_type {
        Some(root_type) => {
            let sequential = operation.kind() == OperationKind::Mutation;
            let mut visited = HashSet::new();
            let mut fields = IndexMap::new();
            collect_fields(ctx, root_type.name(), operation.selection_set(), &mut visited, &mut fields);
            execute_fields(ctx, root_type, root_value, fields, vec![], sequential)
                .await
                .map(Value::Map)
                .unwrap_or(Value::Null)
        }
        None => {
            ctx.push_error(&[], ErrorKind::Internal, "operation kind has no corresponding root type in this schema");
            Value::Null
        }
    };

    crate::error::response_value(data, ctx.take_errors())
}

/// Resolves every field in `fields` against `parent_type`/`parent_value`,
/// returning `None` if resolving any of them triggered non-null
/// propagation all the way up to this map (the caller -- either the root or
/// an enclosing field -- must itself become `null`).
fn execute_fields<'a>(
    ctx: &'a OperationContext<'a>,
    parent_type: &'a GraphQLType,
    parent_value: &'a Value,
    fields: IndexMap<String, Vec<&'a FieldSelection>>,
    path: Vec<PathSegment>,
    sequential: bool,
) -> BoxFuture<'a, Option<IndexMap<String, Value>>> {
    async move {
        let force_sequential = sequential || ctx.policy == SchedulingPolicy::Sequential;
        let keys: Vec<String> = fields.keys().cloned().collect();

        let results: Vec<(String, Option<Value>)> = if force_sequential {
            let mut results = Vec::with_capacity(fields.len());
            for (key, selections) in fields {
                let value = execute_field(ctx, parent_type, parent_value, &key, selections, path.clone()).await;
                results.push((key, value));
            }
            results
        } else {
            // Sibling fields own disjoint `path` branches and touch only
            // `ctx`'s shared, synchronized state, so fanning them out across
            // rayon's pool is safe; each job blocks its worker thread on its
            // own resolver future rather than cooperatively yielding it.
            let entries: Vec<(String, Vec<&'a FieldSelection>)> = fields.into_iter().collect();
            rayon::scope(|scope| {
                let (tx, rx) = std::sync::mpsc::channel();
                for (key, selections) in entries {
                    let tx = tx.clone();
                    let path = path.clone();
                    scope.spawn(move |_| {
                        let value =
                            futures::executor::block_on(execute_field(ctx, parent_type, parent_value, &key, selections, path));
                        let _ = tx.send((key, value));
                    });
                }
                drop(tx);
                rx.into_iter().collect()
            })
        };

        let mut by_key: IndexMap<String, Option<Value>> = results.into_iter().collect();
        let mut out = IndexMap::with_capacity(keys.len());
        for key in keys {
            match by_key.shift_remove(&key).flatten() {
                Some(value) => {
                    out.insert(key, value);
                }
                None => return None,
            }
        }
        Some(out)
    }
    .boxed()
}

async fn execute_field<'a>(
    ctx: &'a OperationContext<'a>,
    parent_type: &'a GraphQLType,
    parent_value: &'a Value,
    response_key: &str,
    selections: Vec<&'a FieldSelection>,
    path: Vec<PathSegment>,
) -> Option<Value> {
    let field_name = selections[0].name();

    if field_name == TYPENAME_FIELD_NAME {
        return Some(Value::string(parent_type.name()));
    }

    let field_def = match parent_type {
        GraphQLType::Object(obj) => obj.field(field_name),
        GraphQLType::Interface(iface) => iface.field(field_name),
        _ => None,
    };
    let Some(field_def) = field_def else {
        ctx.push_error(&path, ErrorKind::Internal, format!("no field definition found for `{field_name}`"));
        return Some(Value::Null);
    };

    let mut field_path = path;
    field_path.push(PathSegment::Field(response_key.to_string()));

    let span = tracing::debug_span!(
        "resolve_field",
        response_key = response_key,
        type_name = field_def.type_annotation().inner_named_ref().name(),
    );

    async move {
        if ctx.is_cancelled() {
            ctx.push_error(&field_path, ErrorKind::Execution, "request was cancelled");
            return complete_value(ctx, field_path, field_def.type_annotation(), Value::Null, &[]).await;
        }

        let arguments = coerce_arguments(selections[0].arguments(), field_def.arguments(), ctx.variables, ctx.schema());

        let resolved = match ctx.resolvers.resolver_for(parent_type.name(), field_name) {
            Some(resolver) => resolver.resolve(parent_value, &arguments, ctx).await,
            None => Err(GraphQLError::new(
                ErrorKind::Internal,
                format!("no resolver registered for `{}.{field_name}`", parent_type.name()),
            )),
        };

        let value = match resolved {
            Ok(value) => value,
            Err(error) => {
                ctx.push_graphql_error(&field_path, error);
                Value::Null
            }
        };

        let merged_sub_selections: SelectionSet = selections
            .iter()
            .flat_map(|selection| selection.selection_set().iter().cloned())
            .collect();

        complete_value(ctx, field_path, field_def.type_annotation(), value, &merged_sub_selections).await
    }
    .instrument(span)
    .await
}

/// Applies the declared type to a resolved value: unwraps `List`/`NonNull`
/// modifiers, recurses into sub-selections for composite types, and
/// bubbles a `null` up through the nearest `NonNull` boundary per the
/// language spec's null-propagation rule. Returns `None` when the bubble
/// reaches (and must pass through) this position.
fn complete_value<'a>(
    ctx: &'a OperationContext<'a>,
    path: Vec<PathSegment>,
    type_annotation: &'a TypeAnnotation,
    value: Value,
    selection_set: &'a SelectionSet,
) -> BoxFuture<'a, Option<Value>> {
    async move {
        match type_annotation {
            TypeAnnotation::NonNull(inner) => {
                match complete_value(ctx, path.clone(), inner, value, selection_set).await {
                    None => None,
                    Some(Value::Null) => {
                        ctx.push_error(&path, ErrorKind::Execution, "cannot return null for a non-null field");
                        None
                    }
                    Some(v) => Some(v),
                }
            }
            TypeAnnotation::List(inner) => complete_list(ctx, path, inner, value, selection_set).await,
            TypeAnnotation::Named(named_ref) => complete_named(ctx, path, named_ref, value, selection_set).await,
        }
    }
    .boxed()
}

async fn complete_list<'a>(
    ctx: &'a OperationContext<'a>,
    path: Vec<PathSegment>,
    item_type: &'a TypeAnnotation,
    value: Value,
    selection_set: &'a SelectionSet,
) -> Option<Value> {
    if value.is_null() {
        return Some(Value::Null);
    }
    let Value::List(items) = value else {
        ctx.push_error(&path, ErrorKind::Execution, "resolved value is not a list");
        return Some(Value::Null);
    };

    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let mut item_path = path.clone();
        item_path.push(PathSegment::Index(index));
        match complete_value(ctx, item_path, item_type, item, selection_set).await {
            None => return None,
            Some(v) => out.push(v),
        }
    }
    Some(Value::List(out))
}

async fn complete_named<'a>(
    ctx: &'a OperationContext<'a>,
    path: Vec<PathSegment>,
    named_ref: &'a crate::types::NamedGraphQLTypeRef,
    value: Value,
    selection_set: &'a SelectionSet,
) -> Option<Value> {
    if value.is_null() {
        return Some(Value::Null);
    }
    let Ok(named_type) = named_ref.deref(ctx.schema()) else {
        ctx.push_error(&path, ErrorKind::Internal, "dangling reference to an undefined type");
        return Some(Value::Null);
    };

    if !named_type.is_composite() {
        return Some(value);
    }

    let Some(concrete_type_name) = concrete_type_name_of(named_type, &value) else {
        ctx.push_error(&path, ErrorKind::Execution, "could not determine the concrete object type of a resolved value");
        return None;
    };
    let Some(concrete_type) = ctx.schema().lookup_type(&concrete_type_name) else {
        ctx.push_error(
            &path,
            ErrorKind::Execution,
            format!("resolved concrete type `{concrete_type_name}` is not defined in the schema"),
        );
        return None;
    };

    let mut visited = HashSet::new();
    let mut fields = IndexMap::new();
    collect_fields(ctx, &concrete_type_name, selection_set, &mut visited, &mut fields);
    execute_fields(ctx, concrete_type, &value, fields, path, false).await.map(Value::Map)
}

fn concrete_type_name_of(static_type: &GraphQLType, value: &Value) -> Option<String> {
    match static_type {
        GraphQLType::Object(obj) => Some(obj.name().to_string()),
        GraphQLType::Interface(_) | GraphQLType::Union(_) => value
            .as_map()
            .and_then(|map| map.get(TYPENAME_FIELD_NAME))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}
