use std::collections::HashMap;
use std::collections::HashSet;

use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::TypeValidationError;

/// Checks that an object or interface type's declared `implements` clauses
/// are actually satisfied: every field the interface requires must be
/// present on the implementor with a compatible signature.
///
/// Guards against infinite recursion through interfaces that (incorrectly)
/// implement each other cyclically by tracking `visited` interface names.
pub(crate) struct ObjectOrInterfaceTypeValidator<'a> {
    data: &'a ObjectOrInterfaceTypeData,
    types: &'a HashMap<String, GraphQLType>,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub(crate) fn new(
        data: &'a ObjectOrInterfaceTypeData,
        types: &'a HashMap<String, GraphQLType>,
    ) -> Self {
        ObjectOrInterfaceTypeValidator { data, types }
    }

    pub(crate) fn validate(&self, visited: &mut HashSet<String>) -> Vec<TypeValidationError> {
        let mut errors = vec![];

        for field in self.data.fields().values() {
            let referenced_name = field.type_annotation().inner_named_ref().name();
            if !self.types.contains_key(referenced_name) {
                errors.push(TypeValidationError::UndefinedFieldType {
                    type_name: self.data.name().to_string(),
                    field_name: field.name().to_string(),
                    referenced_type_name: referenced_name.to_string(),
                    location: field.def_location().clone(),
                });
            }
        }

        for interface_ref in &self.data.interfaces {
            if !visited.insert(interface_ref.name().to_string()) {
                continue;
            }
            let Some(GraphQLType::Interface(interface)) = self.types.get(interface_ref.name())
            else {
                continue;
            };
            for required_field in interface.fields().values() {
                match self.data.fields().get(required_field.name()) {
                    None => errors.push(TypeValidationError::MissingInterfaceField {
                        object_type: self.data.name().to_string(),
                        interface_name: interface.name().to_string(),
                        field_name: required_field.name().to_string(),
                        location: self.data.def_location().clone(),
                    }),
                    Some(actual_field) => {
                        if actual_field.type_annotation() != required_field.type_annotation() {
                            errors.push(TypeValidationError::InterfaceFieldMismatch {
                                object_type: self.data.name().to_string(),
                                interface_name: interface.name().to_string(),
                                field_name: required_field.name().to_string(),
                                location: actual_field.def_location().clone(),
                            });
                        }
                    }
                }
            }
        }

        errors
    }
}

pub(crate) struct UnionTypeValidator<'a> {
    union_type: &'a crate::types::UnionType,
    types: &'a HashMap<String, GraphQLType>,
}
impl<'a> UnionTypeValidator<'a> {
    pub(crate) fn new(
        union_type: &'a crate::types::UnionType,
        types: &'a HashMap<String, GraphQLType>,
    ) -> Self {
        UnionTypeValidator { union_type, types }
    }

    pub(crate) fn validate(&self) -> Vec<TypeValidationError> {
        let mut errors = vec![];
        for member_name in self.union_type.member_type_names() {
            match self.types.get(member_name) {
                None => errors.push(TypeValidationError::UndefinedUnionMember {
                    union_name: self.union_type.name().to_string(),
                    member_name: member_name.to_string(),
                    location: self.union_type.def_location().clone(),
                }),
                Some(GraphQLType::Object(_)) => (),
                Some(_) => errors.push(TypeValidationError::NonObjectUnionMember {
                    union_name: self.union_type.name().to_string(),
                    member_name: member_name.to_string(),
                    location: self.union_type.def_location().clone(),
                }),
            }
        }
        errors
    }
}

pub(crate) struct InputObjectTypeValidator<'a> {
    input_object_type: &'a crate::types::InputObjectType,
    types: &'a HashMap<String, GraphQLType>,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub(crate) fn new(
        input_object_type: &'a crate::types::InputObjectType,
        types: &'a HashMap<String, GraphQLType>,
    ) -> Self {
        InputObjectTypeValidator {
            input_object_type,
            types,
        }
    }

    pub(crate) fn validate(&self) -> Vec<TypeValidationError> {
        let mut errors = vec![];
        for field in self.input_object_type.fields().values() {
            let referenced_name = field.type_annotation().inner_named_ref().name();
            match self.types.get(referenced_name) {
                None => errors.push(TypeValidationError::UndefinedInputFieldType {
                    type_name: self.input_object_type.name().to_string(),
                    field_name: field.name().to_string(),
                    referenced_type_name: referenced_name.to_string(),
                    location: field.def_location().clone(),
                }),
                Some(referenced_type) if !referenced_type.is_input_type() => {
                    errors.push(TypeValidationError::OutputTypeUsedAsInput {
                        type_name: self.input_object_type.name().to_string(),
                        field_name: field.name().to_string(),
                        referenced_type_name: referenced_name.to_string(),
                        location: field.def_location().clone(),
                    })
                }
                Some(_) => (),
            }
        }

        if self.has_unbreakable_required_cycle(Default::default()) {
            errors.push(TypeValidationError::UnsatisfiableInputObjectCycle {
                type_name: self.input_object_type.name().to_string(),
                location: self.input_object_type.def_location().clone(),
            });
        }

        errors
    }

    /// An input object is unsatisfiable if following its chain of
    /// non-null, no-default fields back into itself never bottoms out at a
    /// nullable or defaulted field.
    fn has_unbreakable_required_cycle(&self, mut visiting: HashSet<String>) -> bool {
        if !visiting.insert(self.input_object_type.name().to_string()) {
            return true;
        }
        for field in self.input_object_type.fields().values() {
            if !field.is_required() {
                continue;
            }
            let referenced_name = field.type_annotation().inner_named_ref().name();
            if referenced_name == self.input_object_type.name() {
                return true;
            }
            if let Some(GraphQLType::InputObject(nested)) = self.types.get(referenced_name) {
                let validator = InputObjectTypeValidator::new(nested, self.types);
                if validator.has_unbreakable_required_cycle(visiting.clone()) {
                    return true;
                }
            }
        }
        false
    }
}
