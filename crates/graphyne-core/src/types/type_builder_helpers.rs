use indexmap::IndexMap;

use crate::loc::SourceLocation;
use crate::types::directive_annotation_builder::DirectiveAnnotationBuilder;
use crate::types::errors::SchemaBuildError;
use crate::types::Field;
use crate::types::FieldArgument;
use crate::types::InputField;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeAnnotation;
use crate::value::from_ast_const_value;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Free functions shared by the object/interface/input-object builders for
/// turning a slice of AST field/argument definitions into the corresponding
/// runtime maps, applying the reserved-`__`-prefix checks along the way.
pub(crate) struct TypeBuilderHelpers;
impl TypeBuilderHelpers {
    pub(crate) fn input_fields_from_ast(
        owner_def_location: &SourceLocation,
        type_name: &str,
        input_fields: &[graphyne_parser::ast::schema::InputValue],
    ) -> Result<IndexMap<String, InputField>> {
        let mut field_map = IndexMap::new();
        for field in input_fields {
            if field.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    location: owner_def_location.clone(),
                    field_name: field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            field_map.insert(
                field.name.to_string(),
                InputField {
                    def_location: owner_def_location.clone(),
                    default_value: field
                        .default_value
                        .as_ref()
                        .map(from_ast_const_value),
                    description: field.description.clone(),
                    directives: DirectiveAnnotationBuilder::from_ast(
                        owner_def_location,
                        &field.directives,
                    ),
                    name: field.name.clone(),
                    type_annotation: TypeAnnotation::from_ast_schema_type(
                        &field.value_type,
                        owner_def_location.clone(),
                    ),
                },
            );
        }
        Ok(field_map)
    }

    pub(crate) fn object_fields_from_ast(
        owner_def_location: &SourceLocation,
        type_name: &str,
        fields: &[graphyne_parser::ast::schema::Field],
    ) -> Result<IndexMap<String, Field>> {
        let mut field_map = IndexMap::new();
        field_map.insert(
            "__typename".to_string(),
            Field {
                arguments: IndexMap::new(),
                def_location: SourceLocation::GraphQLBuiltIn,
                deprecation: crate::types::DeprecationState::Active,
                description: None,
                directives: vec![],
                name: "__typename".to_string(),
                type_annotation: TypeAnnotation::NonNull(Box::new(TypeAnnotation::Named(
                    NamedGraphQLTypeRef::new("String", SourceLocation::GraphQLBuiltIn),
                ))),
            },
        );

        for field in fields {
            if field.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    location: owner_def_location.clone(),
                    field_name: field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            let mut arguments = IndexMap::new();
            for argument in &field.arguments {
                if argument.name.starts_with("__") {
                    return Err(SchemaBuildError::InvalidDunderPrefixedArgumentName {
                        location: owner_def_location.clone(),
                        argument_name: argument.name.to_string(),
                        field_name: field.name.to_string(),
                        type_name: type_name.to_string(),
                    });
                }

                arguments.insert(
                    argument.name.to_string(),
                    FieldArgument {
                        def_location: owner_def_location.clone(),
                        default_value: argument
                            .default_value
                            .as_ref()
                            .map(from_ast_const_value),
                        description: argument.description.clone(),
                        name: argument.name.clone(),
                        type_annotation: TypeAnnotation::from_ast_schema_type(
                            &argument.value_type,
                            owner_def_location.clone(),
                        ),
                    },
                );
            }

            let deprecation = deprecation_from_directives(&field.directives);

            field_map.insert(
                field.name.to_string(),
                Field {
                    arguments,
                    def_location: owner_def_location.clone(),
                    deprecation,
                    description: field.description.clone(),
                    directives: DirectiveAnnotationBuilder::from_ast(
                        owner_def_location,
                        &field.directives,
                    ),
                    name: field.name.clone(),
                    type_annotation: TypeAnnotation::from_ast_schema_type(
                        &field.field_type,
                        owner_def_location.clone(),
                    ),
                },
            );
        }

        Ok(field_map)
    }
}

fn deprecation_from_directives(
    directives: &[graphyne_parser::ast::schema::Directive],
) -> crate::types::DeprecationState {
    use crate::types::DeprecationState;
    for directive in directives {
        if directive.name == "deprecated" {
            let reason = directive
                .arguments
                .iter()
                .find(|(name, _)| name == "reason")
                .map(|(_, value)| from_ast_const_value(value))
                .and_then(|value| value.as_str().map(str::to_string));
            return DeprecationState::Deprecated { reason };
        }
    }
    DeprecationState::Active
}
