mod deprecation;
mod directive;
mod directive_annotation_builder;
mod enum_type;
mod errors;
mod field;
mod graphql_type;
mod input_object_type;
mod interface_type;
mod object_or_interface_type_data;
mod object_type;
mod scalar;
mod type_annotation;
mod type_builder_helpers;
mod types_map_builder;
mod union_type;
mod validators;

pub use deprecation::DeprecationState;
pub use directive::Directive;
pub use directive::DirectiveAnnotation;
pub use directive::DirectiveLocation;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use errors::SchemaBuildError;
pub use errors::TypeValidationError;
pub use field::Field;
pub use field::FieldArgument;
pub use graphql_type::GraphQLType;
pub use graphql_type::NamedGraphQLTypeRef;
pub use input_object_type::InputField;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use object_or_interface_type_data::ObjectOrInterfaceType;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_type::ObjectType;
pub use scalar::ScalarType;
pub use type_annotation::TypeAnnotation;
pub use union_type::UnionType;

pub(crate) use type_builder_helpers::TypeBuilderHelpers;
pub(crate) use types_map_builder::TypesMapBuilder;

/// The name of the directive the GraphQL language itself defines for
/// marking a field or enum value obsolete.
pub const DEPRECATED_DIRECTIVE_NAME: &str = "deprecated";
/// The two directives every GraphQL schema gets for free, regardless of
/// what the schema document itself declares.
pub const SKIP_DIRECTIVE_NAME: &str = "skip";
pub const INCLUDE_DIRECTIVE_NAME: &str = "include";
