use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::loc::SourceLocation;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// A type known to some [`Schema`]: one of the nine named kinds the GraphQL
/// type system defines, plus the four built-in leaf scalars.
///
/// `List` and `NonNull` are not variants here; they're wrappers applied at
/// the point of reference (see [`crate::types::TypeAnnotation`]) rather than
/// standalone named types, matching how the language spec treats them.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum(t) => t.name(),
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject(t) => t.name(),
            Self::Int => "Int",
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::String => "String",
            Self::Union(t) => t.name(),
        }
    }

    pub fn def_location(&self) -> &SourceLocation {
        match self {
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String => {
                &SourceLocation::GraphQLBuiltIn
            }
            Self::Enum(t) => t.def_location(),
            Self::InputObject(t) => t.def_location(),
            Self::Interface(t) => t.def_location(),
            Self::Object(t) => t.def_location(),
            Self::Scalar(t) => t.def_location(),
            Self::Union(t) => t.def_location(),
        }
    }

    /// Composite types are the ones a selection set can be applied to:
    /// object, interface, union.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Interface(_) | Self::Union(_))
    }

    /// Input types are the ones usable for a variable declaration, argument,
    /// or input-object field: everything except object/interface/union.
    pub fn is_input_type(&self) -> bool {
        !matches!(self, Self::Object(_) | Self::Interface(_) | Self::Union(_))
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(t) = self { Some(t) } else { None }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(t) = self { Some(t) } else { None }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(t) = self { Some(t) } else { None }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(t) = self { Some(t) } else { None }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(t) = self { Some(t) } else { None }
    }

    /// For a union or interface, the set of concrete object type names that
    /// could satisfy a fragment spread against it; for an object, just
    /// itself.
    pub fn possible_type_names<'a>(&'a self, schema: &'a Schema) -> Vec<&'a str> {
        match self {
            Self::Object(t) => vec![t.name()],
            Self::Union(t) => t.member_type_names(),
            Self::Interface(t) => schema
                .types
                .values()
                .filter_map(GraphQLType::as_object)
                .filter(|obj| obj.implements_interface(schema, t))
                .map(ObjectType::name)
                .collect(),
            _ => vec![],
        }
    }
}

pub type NamedGraphQLTypeRef = NamedRef<Schema, SourceLocation, GraphQLType>;
impl DerefByName for GraphQLType {
    type Source = Schema;
    type RefLocation = SourceLocation;

    fn deref_name<'a>(
        source: &'a Schema,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        source
            .types
            .get(name)
            .ok_or_else(|| DerefByNameError::DanglingReference(name.to_string()))
    }
}
