use indexmap::IndexMap;

use crate::loc::SourceLocation;
use crate::types::DeprecationState;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use crate::types::SchemaBuildError;
use crate::types::TypeAnnotation;
use crate::types::TypesMapBuilder;

pub(crate) const SCHEMA_FIELD_NAME: &str = "__schema";
pub(crate) const TYPE_FIELD_NAME: &str = "__type";

/// Installs the synthetic `__Schema`/`__Type` object types and the
/// `Query.__schema`/`Query.__type` fields that expose them.
///
/// Resolving these fields to actual schema metadata is the caller's job
/// (they're ordinary resolvable fields on ordinary object types, dispatched
/// through the same per-type resolver table as any other field); this
/// module only wires the type graph so validation and execution have
/// something to check requests against.
pub(crate) fn install(types_map_builder: &mut TypesMapBuilder) -> Result<(), SchemaBuildError> {
    let loc = SourceLocation::GraphQLBuiltIn;

    let named = |name: &str| TypeAnnotation::Named(NamedGraphQLTypeRef::new(name, loc.clone()));
    let non_null = |inner: TypeAnnotation| TypeAnnotation::NonNull(Box::new(inner));
    let list = |inner: TypeAnnotation| TypeAnnotation::List(Box::new(inner));

    let type_fields: IndexMap<String, Field> = IndexMap::from([
        field("kind", non_null(named("String"))),
        field("name", named("String")),
        field("description", named("String")),
        field("fields", list(non_null(named("__Field")))),
        field("interfaces", list(non_null(named("__Type")))),
        field("possibleTypes", list(non_null(named("__Type")))),
        field("enumValues", list(non_null(named("__EnumValue")))),
        field("inputFields", list(non_null(named("__InputValue")))),
        field("ofType", named("__Type")),
    ]);
    types_map_builder.add_new_type(
        "__Type",
        &loc,
        GraphQLType::Object(ObjectType::new(
            "__Type",
            None,
            vec![],
            type_fields,
            vec![],
            loc.clone(),
        )),
    )?;

    let input_value_fields: IndexMap<String, Field> = IndexMap::from([
        field("name", non_null(named("String"))),
        field("description", named("String")),
        field("type", non_null(named("__Type"))),
        field("defaultValue", named("String")),
    ]);
    types_map_builder.add_new_type(
        "__InputValue",
        &loc,
        GraphQLType::Object(ObjectType::new(
            "__InputValue",
            None,
            vec![],
            input_value_fields,
            vec![],
            loc.clone(),
        )),
    )?;

    let field_fields: IndexMap<String, Field> = IndexMap::from([
        field("name", non_null(named("String"))),
        field("description", named("String")),
        field("args", non_null(list(non_null(named("__InputValue"))))),
        field("type", non_null(named("__Type"))),
        field("isDeprecated", non_null(named("Boolean"))),
        field("deprecationReason", named("String")),
    ]);
    types_map_builder.add_new_type(
        "__Field",
        &loc,
        GraphQLType::Object(ObjectType::new(
            "__Field",
            None,
            vec![],
            field_fields,
            vec![],
            loc.clone(),
        )),
    )?;

    let enum_value_fields: IndexMap<String, Field> = IndexMap::from([
        field("name", non_null(named("String"))),
        field("description", named("String")),
        field("isDeprecated", non_null(named("Boolean"))),
        field("deprecationReason", named("String")),
    ]);
    types_map_builder.add_new_type(
        "__EnumValue",
        &loc,
        GraphQLType::Object(ObjectType::new(
            "__EnumValue",
            None,
            vec![],
            enum_value_fields,
            vec![],
            loc.clone(),
        )),
    )?;

    let schema_fields: IndexMap<String, Field> = IndexMap::from([
        field("types", non_null(list(non_null(named("__Type"))))),
        field("queryType", non_null(named("__Type"))),
        field("mutationType", named("__Type")),
        field("subscriptionType", named("__Type")),
    ]);
    types_map_builder.add_new_type(
        "__Schema",
        &loc,
        GraphQLType::Object(ObjectType::new(
            "__Schema",
            None,
            vec![],
            schema_fields,
            vec![],
            loc.clone(),
        )),
    )?;

    let query_fields = match types_map_builder.get_type_mut("Query") {
        Some(GraphQLType::Object(query_type)) => &mut query_type.data.fields,
        _ => return Err(SchemaBuildError::MissingQueryRootType),
    };
    query_fields.insert(
        SCHEMA_FIELD_NAME.to_string(),
        with_name(field("", non_null(named("__Schema"))).1, SCHEMA_FIELD_NAME),
    );
    let mut type_field = with_name(field("", named("__Type")).1, TYPE_FIELD_NAME);
    type_field.arguments.insert(
        "name".to_string(),
        crate::types::FieldArgument {
            def_location: loc.clone(),
            default_value: None,
            description: None,
            name: "name".to_string(),
            type_annotation: non_null(named("String")),
        },
    );
    query_fields.insert(TYPE_FIELD_NAME.to_string(), type_field);

    Ok(())
}

fn field(name: &str, type_annotation: TypeAnnotation) -> (String, Field) {
    (
        name.to_string(),
        Field {
            arguments: IndexMap::new(),
            def_location: SourceLocation::GraphQLBuiltIn,
            deprecation: DeprecationState::Active,
            description: None,
            directives: vec![],
            name: name.to_string(),
            type_annotation,
        },
    )
}

fn with_name(mut f: Field, name: &str) -> Field {
    f.name = name.to_string();
    f
}
