use std::collections::HashMap;

use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;

/// A fully built, validated GraphQL type system: every named type, every
/// directive definition, and the three (at most) root operation types.
///
/// Construct one with [`Schema::builder`]; a `Schema` itself is immutable
/// and safe to share across concurrently executing requests (`Send + Sync`,
/// since every field is either owned data or one of those primitives).
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: HashMap<String, Directive>,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl Schema {
    pub fn builder() -> crate::schema::SchemaBuilder {
        crate::schema::SchemaBuilder::new()
    }

    pub fn query_type(&self) -> &GraphQLType {
        self.query_type
            .deref(self)
            .expect("query root type is present in the type map by construction")
    }

    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type
            .as_ref()
            .map(|type_ref| type_ref.deref(self).expect("mutation type is present by construction"))
    }

    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type
            .as_ref()
            .map(|type_ref| type_ref.deref(self).expect("subscription type is present by construction"))
    }

    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn types(&self) -> impl Iterator<Item = &GraphQLType> {
        self.types.values()
    }

    pub fn directive_defs(&self) -> &HashMap<String, Directive> {
        &self.directive_defs
    }

    pub fn directive_def(&self, name: &str) -> Option<&Directive> {
        self.directive_defs.get(name)
    }

    /// Whether introspection fields (`__schema`, `__type`, `__typename` is
    /// always present regardless) should be installed on the query root.
    /// Wired up by [`crate::schema::SchemaBuilder::enable_introspection`];
    /// schemas built without calling it don't expose these fields at all,
    /// so a request for them fails the same "Undefined field" validation
    /// check as any other unknown field.
    pub fn introspection_enabled(&self) -> bool {
        self.query_type().as_object().is_some_and(|query_obj| {
            query_obj.field(crate::schema::introspection::SCHEMA_FIELD_NAME).is_some()
        })
    }
}
