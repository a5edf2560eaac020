use indexmap::IndexMap;
use inherent::inherent;

use crate::loc::SourceLocation;
use crate::schema::Schema;
use crate::types::DirectiveAnnotation;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceType;
use crate::types::ObjectOrInterfaceTypeData;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`Schema`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType {
    pub(crate) data: ObjectOrInterfaceTypeData,
}
impl ObjectType {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        directives: Vec<DirectiveAnnotation>,
        fields: IndexMap<String, Field>,
        interfaces: Vec<NamedGraphQLTypeRef>,
        def_location: SourceLocation,
    ) -> Self {
        ObjectType {
            data: ObjectOrInterfaceTypeData {
                def_location,
                description,
                directives,
                fields,
                interfaces,
                name: name.into(),
            },
        }
    }

    /// Whether this object type declares `interface` in its `interfaces`
    /// list (transitive implementation through another interface's own
    /// `implements` clause is resolved here too, since interfaces can
    /// themselves implement other interfaces).
    pub fn implements_interface(&self, schema: &Schema, interface: &InterfaceType) -> bool {
        self.data.interface_names().contains(&interface.name())
            || self
                .data
                .interfaces(schema)
                .iter()
                .any(|transitive| transitive.implements_interface(schema, interface))
    }
}

#[inherent]
impl ObjectOrInterfaceType for ObjectType {
    pub fn def_location(&self) -> &SourceLocation {
        self.data.def_location()
    }

    pub fn description(&self) -> Option<&str> {
        self.data.description()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.data.directives()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.data.field(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.data.fields()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.data.interface_names()
    }

    pub fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType> {
        self.data.interfaces(schema)
    }

    pub fn name(&self) -> &str {
        self.data.name()
    }
}
