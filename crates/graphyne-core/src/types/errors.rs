use crate::loc::SourceLocation;

/// Failures that can occur while assembling a [`crate::schema::Schema`] out
/// of one or more parsed schema documents, before it is ever used to
/// validate or execute a request.
#[derive(Clone, Debug, thiserror::Error)]
pub enum SchemaBuildError {
    #[error(
        "type `{type_name}` is defined more than once (first at {def1:?}, again at {def2:?})"
    )]
    DuplicateTypeDefinition {
        type_name: String,
        def1: SourceLocation,
        def2: SourceLocation,
    },

    #[error("field `{field_name}` on type `{type_name}` begins with a reserved `__` prefix")]
    InvalidDunderPrefixedFieldName {
        location: SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error(
        "argument `{argument_name}` of field `{field_name}` on type `{type_name}` begins with a reserved `__` prefix"
    )]
    InvalidDunderPrefixedArgumentName {
        location: SourceLocation,
        argument_name: String,
        field_name: String,
        type_name: String,
    },

    #[error("type `{type_name}` begins with a reserved `__` prefix")]
    InvalidDunderPrefixedTypeName {
        def_location: SourceLocation,
        type_name: String,
    },

    #[error("the schema declares no `Query` root type")]
    MissingQueryRootType,

    #[error("root operation type `{type_name}` is not defined anywhere in the schema")]
    UndefinedRootOperationType {
        location: SourceLocation,
        type_name: String,
    },

    #[error("one or more types failed validation: {errors:?}")]
    TypeValidationErrors { errors: Vec<TypeValidationError> },
}

/// A single defect found while cross-validating the fully assembled type
/// map (interface conformance, union membership, input-object field types).
#[derive(Clone, Debug, thiserror::Error)]
pub enum TypeValidationError {
    #[error(
        "object type `{object_type}` claims to implement interface `{interface_name}` but is missing field `{field_name}`"
    )]
    MissingInterfaceField {
        object_type: String,
        interface_name: String,
        field_name: String,
        location: SourceLocation,
    },

    #[error(
        "field `{field_name}` on object type `{object_type}` does not satisfy the signature required by interface `{interface_name}`"
    )]
    InterfaceFieldMismatch {
        object_type: String,
        interface_name: String,
        field_name: String,
        location: SourceLocation,
    },

    #[error("union `{union_name}` names undefined member type `{member_name}`")]
    UndefinedUnionMember {
        union_name: String,
        member_name: String,
        location: SourceLocation,
    },

    #[error("union `{union_name}` names non-object member type `{member_name}`")]
    NonObjectUnionMember {
        union_name: String,
        member_name: String,
        location: SourceLocation,
    },

    #[error(
        "input object `{type_name}` field `{field_name}` refers to undefined type `{referenced_type_name}`"
    )]
    UndefinedInputFieldType {
        type_name: String,
        field_name: String,
        referenced_type_name: String,
        location: SourceLocation,
    },

    #[error(
        "input object `{type_name}` field `{field_name}` refers to the output-only type `{referenced_type_name}`"
    )]
    OutputTypeUsedAsInput {
        type_name: String,
        field_name: String,
        referenced_type_name: String,
        location: SourceLocation,
    },

    #[error(
        "input object type `{type_name}` has a circular chain of non-null, non-default-valued fields and can never be satisfied"
    )]
    UnsatisfiableInputObjectCycle {
        type_name: String,
        location: SourceLocation,
    },

    #[error("field `{field_name}` on type `{type_name}` refers to undefined type `{referenced_type_name}`")]
    UndefinedFieldType {
        type_name: String,
        field_name: String,
        referenced_type_name: String,
        location: SourceLocation,
    },
}
