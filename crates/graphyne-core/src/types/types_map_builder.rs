use std::collections::HashMap;
use std::collections::HashSet;

use crate::loc::SourceLocation;
use crate::types::errors::SchemaBuildError;
use crate::types::validators::InputObjectTypeValidator;
use crate::types::validators::ObjectOrInterfaceTypeValidator;
use crate::types::validators::UnionTypeValidator;
use crate::types::GraphQLType;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Accumulates the complete set of named types a schema defines, pre-seeded
/// with the four builtin scalars, before freezing them into the final
/// validated map a [`crate::schema::Schema`] is built from.
#[derive(Debug)]
pub(crate) struct TypesMapBuilder {
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub(crate) fn new() -> Self {
        Self {
            types: HashMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub(crate) fn add_new_type(
        &mut self,
        type_name: &str,
        type_loc: &SourceLocation,
        type_: GraphQLType,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_loc.clone(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location().clone(),
                def2: type_loc.clone(),
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    /// Cross-validates every accumulated type against the full map and
    /// freezes it, or reports every defect found in one batch (the type
    /// system never short-circuits on the first bad type).
    pub(crate) fn into_types_map(self) -> Result<HashMap<String, GraphQLType>> {
        let mut errors = vec![];
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String => (),

                GraphQLType::InputObject(input_object_type) => errors
                    .append(&mut InputObjectTypeValidator::new(input_object_type, &self.types).validate()),

                GraphQLType::Interface(interface_type) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(&interface_type.data, &self.types)
                        .validate(&mut HashSet::new()),
                ),

                GraphQLType::Object(object_type) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(&object_type.data, &self.types)
                        .validate(&mut HashSet::new()),
                ),

                GraphQLType::Union(union_type) => {
                    errors.append(&mut UnionTypeValidator::new(union_type, &self.types).validate())
                }
            }
        }

        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        Ok(self.types)
    }

    pub(crate) fn get_type_mut(&mut self, type_name: &str) -> Option<&mut GraphQLType> {
        self.types.get_mut(type_name)
    }
}
