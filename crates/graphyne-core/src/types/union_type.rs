use indexmap::IndexMap;

use crate::loc::SourceLocation;
use crate::schema::Schema;
use crate::types::DirectiveAnnotation;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;

/// Represents a [union type](https://spec.graphql.org/October2021/#sec-Unions)
/// defined within some [`Schema`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(crate) def_location: SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) members: IndexMap<String, NamedGraphQLTypeRef>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn def_location(&self) -> &SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Member type names, in the order they were declared.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys().map(String::as_str).collect()
    }

    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.contains_key(type_name)
    }

    pub fn member_types<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema GraphQLType> {
        self.members
            .values()
            .filter_map(|type_ref| type_ref.deref(schema).ok())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
