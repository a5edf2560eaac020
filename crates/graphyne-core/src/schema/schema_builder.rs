use indexmap::IndexMap;

use crate::loc::SourceLocation;
use crate::schema::introspection;
use crate::schema::Schema;
use crate::types::directive_annotation_builder::DirectiveAnnotationBuilder;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::SchemaBuildError;
use crate::types::TypeAnnotation;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use crate::types::UnionType;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Accumulates a GraphQL type system out of one or more schema documents,
/// or out of direct programmatic calls (`add_object_type`, `add_fields`,
/// ...), then freezes it into an immutable [`Schema`].
///
/// Built incrementally: ingest every schema document with
/// [`SchemaBuilder::ingest_document`] first, since later calls to
/// [`SchemaBuilder::add_interfaces`]/[`SchemaBuilder::add_fields`] assume
/// the referenced type already exists.
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, Directive>,
    explicit_query_type: Option<String>,
    explicit_mutation_type: Option<String>,
    explicit_subscription_type: Option<String>,
    introspection_enabled: bool,
    types_map_builder: TypesMapBuilder,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        SchemaBuilder {
            directive_defs: default_directive_defs(),
            explicit_query_type: None,
            explicit_mutation_type: None,
            explicit_subscription_type: None,
            introspection_enabled: false,
            types_map_builder: TypesMapBuilder::new(),
        }
    }

    /// Enables `__schema`/`__type` introspection fields on the query root.
    /// Must be called before [`SchemaBuilder::build`]; whether a schema
    /// supports introspection can't be changed after it's frozen.
    pub fn enable_introspection(mut self) -> Self {
        self.introspection_enabled = true;
        self
    }

    /// Parses `source` as a GraphQL SDL document and folds every definition
    /// it contains into the builder.
    pub fn ingest_document(mut self, source: &str) -> Result<Self> {
        let document = graphyne_parser::ast::schema::parse(source)
            .map_err(|err| SchemaBuildError::UndefinedRootOperationType {
                location: SourceLocation::GraphQLBuiltIn,
                type_name: err.to_string(),
            })?;
        self.ingest_parsed(&document)?;
        Ok(self)
    }

    fn ingest_parsed(&mut self, document: &graphyne_parser::ast::schema::Document) -> Result<()> {
        use graphyne_parser::ast::schema::Definition;
        use graphyne_parser::ast::schema::TypeDefinition;

        for definition in &document.definitions {
            match definition {
                Definition::SchemaDefinition(schema_def) => {
                    self.explicit_query_type = schema_def.query.clone();
                    self.explicit_mutation_type = schema_def.mutation.clone();
                    self.explicit_subscription_type = schema_def.subscription.clone();
                }
                Definition::DirectiveDefinition(directive_def) => {
                    self.add_directive_def(directive_def)?;
                }
                Definition::TypeDefinition(TypeDefinition::Scalar(def)) => {
                    let loc = SourceLocation::from_schema_pos(def.position);
                    self.types_map_builder.add_new_type(
                        &def.name,
                        &loc,
                        GraphQLType::Scalar(ScalarType::new(
                            def.name.clone(),
                            def.description.clone(),
                            DirectiveAnnotationBuilder::from_ast(&loc, &def.directives),
                            loc.clone(),
                        )),
                    )?;
                }
                Definition::TypeDefinition(TypeDefinition::Object(def)) => {
                    let loc = SourceLocation::from_schema_pos(def.position);
                    let fields = TypeBuilderHelpers::object_fields_from_ast(
                        &loc,
                        &def.name,
                        &def.fields,
                    )?;
                    let interfaces = def
                        .implements_interfaces
                        .iter()
                        .map(|name| NamedGraphQLTypeRef::new(name, loc.clone()))
                        .collect();
                    self.types_map_builder.add_new_type(
                        &def.name,
                        &loc,
                        GraphQLType::Object(ObjectType::new(
                            def.name.clone(),
                            def.description.clone(),
                            DirectiveAnnotationBuilder::from_ast(&loc, &def.directives),
                            fields,
                            interfaces,
                            loc.clone(),
                        )),
                    )?;
                }
                Definition::TypeDefinition(TypeDefinition::Interface(def)) => {
                    let loc = SourceLocation::from_schema_pos(def.position);
                    let fields = TypeBuilderHelpers::object_fields_from_ast(
                        &loc,
                        &def.name,
                        &def.fields,
                    )?;
                    let interfaces = def
                        .implements_interfaces
                        .iter()
                        .map(|name| NamedGraphQLTypeRef::new(name, loc.clone()))
                        .collect();
                    self.types_map_builder.add_new_type(
                        &def.name,
                        &loc,
                        GraphQLType::Interface(InterfaceType::new(
                            def.name.clone(),
                            def.description.clone(),
                            DirectiveAnnotationBuilder::from_ast(&loc, &def.directives),
                            fields,
                            interfaces,
                            loc.clone(),
                        )),
                    )?;
                }
                Definition::TypeDefinition(TypeDefinition::Union(def)) => {
                    let loc = SourceLocation::from_schema_pos(def.position);
                    let members = def
                        .types
                        .iter()
                        .map(|name| (name.clone(), NamedGraphQLTypeRef::new(name, loc.clone())))
                        .collect();
                    self.types_map_builder.add_new_type(
                        &def.name,
                        &loc,
                        GraphQLType::Union(UnionType {
                            def_location: loc.clone(),
                            description: def.description.clone(),
                            directives: DirectiveAnnotationBuilder::from_ast(
                                &loc,
                                &def.directives,
                            ),
                            members,
                            name: def.name.clone(),
                        }),
                    )?;
                }
                Definition::TypeDefinition(TypeDefinition::Enum(def)) => {
                    let loc = SourceLocation::from_schema_pos(def.position);
                    let mut values = IndexMap::new();
                    for value in &def.values {
                        let value_directives =
                            DirectiveAnnotationBuilder::from_ast(&loc, &value.directives);
                        let deprecation = deprecation_from_annotations(&value_directives);
                        values.insert(
                            value.name.clone(),
                            EnumValue {
                                def_location: loc.clone(),
                                deprecation,
                                description: value.description.clone(),
                                directives: value_directives,
                                name: value.name.clone(),
                            },
                        );
                    }
                    self.types_map_builder.add_new_type(
                        &def.name,
                        &loc,
                        GraphQLType::Enum(EnumType {
                            def_location: loc.clone(),
                            description: def.description.clone(),
                            directives: DirectiveAnnotationBuilder::from_ast(
                                &loc,
                                &def.directives,
                            ),
                            name: def.name.clone(),
                            values,
                        }),
                    )?;
                }
                Definition::TypeDefinition(TypeDefinition::InputObject(def)) => {
                    let loc = SourceLocation::from_schema_pos(def.position);
                    let fields = TypeBuilderHelpers::input_fields_from_ast(
                        &loc,
                        &def.name,
                        &def.fields,
                    )?;
                    self.types_map_builder.add_new_type(
                        &def.name,
                        &loc,
                        GraphQLType::InputObject(InputObjectType {
                            def_location: loc.clone(),
                            description: def.description.clone(),
                            directives: DirectiveAnnotationBuilder::from_ast(
                                &loc,
                                &def.directives,
                            ),
                            fields,
                            name: def.name.clone(),
                        }),
                    )?;
                }
                Definition::TypeExtension(_) => {
                    // SDL type extensions aren't ingested: every document
                    // handed to a SchemaBuilder is expected to be complete
                    // on its own. Extending an already-frozen Schema is
                    // explicitly undefined behaviour per the type system's
                    // freeze-on-first-execution rule.
                }
            }
        }
        Ok(())
    }

    fn add_directive_def(
        &mut self,
        def: &graphyne_parser::ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let loc =
            SourceLocation::from_schema_pos(def.position);
        let arguments = TypeBuilderHelpers::input_fields_from_ast(&loc, &def.name, &def.arguments)?;
        self.directive_defs.insert(
            def.name.clone(),
            Directive {
                arguments,
                def_location: loc,
                description: def.description.clone(),
                is_repeatable: def.repeatable,
                locations: def.locations.clone(),
                name: def.name.clone(),
            },
        );
        Ok(())
    }

    /// Looks up a previously-ingested type by name. Part of the schema
    /// editing surface used by callers assembling a schema out of
    /// programmatically generated pieces rather than SDL text alone.
    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types_map_builder.types.get(name)
    }

    /// Wraps a [`TypeAnnotation`] in a `List` or `NonNull` modifier.
    pub fn wrap_type(kind: WrapKind, inner: TypeAnnotation) -> TypeAnnotation {
        match kind {
            WrapKind::List => TypeAnnotation::List(Box::new(inner)),
            WrapKind::NonNull => TypeAnnotation::NonNull(Box::new(inner)),
        }
    }

    /// Appends additional `implements` relationships to an already-ingested
    /// object type.
    pub fn add_interfaces(
        &mut self,
        object_name: &str,
        interface_names: impl IntoIterator<Item = String>,
        ref_location: SourceLocation,
    ) -> Result<()> {
        match self.types_map_builder.get_type_mut(object_name) {
            Some(GraphQLType::Object(object_type)) => {
                object_type
                    .data
                    .interfaces
                    .extend(interface_names.into_iter().map(|name| {
                        NamedGraphQLTypeRef::new(name, ref_location.clone())
                    }));
                Ok(())
            }
            Some(GraphQLType::Interface(interface_type)) => {
                interface_type
                    .data
                    .interfaces
                    .extend(interface_names.into_iter().map(|name| {
                        NamedGraphQLTypeRef::new(name, ref_location.clone())
                    }));
                Ok(())
            }
            _ => Err(SchemaBuildError::UndefinedRootOperationType {
                location: ref_location,
                type_name: object_name.to_string(),
            }),
        }
    }

    /// Appends additional field definitions to an already-ingested object
    /// or interface type.
    pub fn add_fields(
        &mut self,
        type_name: &str,
        fields: IndexMap<String, Field>,
    ) -> Result<()> {
        match self.types_map_builder.get_type_mut(type_name) {
            Some(GraphQLType::Object(object_type)) => {
                object_type.data.fields.extend(fields);
                Ok(())
            }
            Some(GraphQLType::Interface(interface_type)) => {
                interface_type.data.fields.extend(fields);
                Ok(())
            }
            _ => Err(SchemaBuildError::UndefinedRootOperationType {
                location: SourceLocation::GraphQLBuiltIn,
                type_name: type_name.to_string(),
            }),
        }
    }

    pub fn make_directive(
        name: impl Into<String>,
        locations: Vec<crate::types::DirectiveLocation>,
        arguments: IndexMap<String, crate::types::InputField>,
        is_repeatable: bool,
    ) -> Directive {
        Directive {
            arguments,
            def_location: SourceLocation::GraphQLBuiltIn,
            description: None,
            is_repeatable,
            locations,
            name: name.into(),
        }
    }

    pub fn make_field(
        name: impl Into<String>,
        type_annotation: TypeAnnotation,
        arguments: IndexMap<String, crate::types::FieldArgument>,
    ) -> Field {
        Field {
            arguments,
            def_location: SourceLocation::GraphQLBuiltIn,
            deprecation: crate::types::DeprecationState::Active,
            description: None,
            directives: vec![],
            name: name.into(),
            type_annotation,
        }
    }

    /// Freezes the accumulated types into a [`Schema`], cross-validating
    /// the whole type graph and resolving the root operation types.
    pub fn build(mut self) -> Result<Schema> {
        if self.introspection_enabled {
            introspection::install(&mut self.types_map_builder)?;
        }

        let query_type_name = self
            .explicit_query_type
            .clone()
            .unwrap_or_else(|| "Query".to_string());
        if !self.types_map_builder.types.contains_key(&query_type_name) {
            return Err(SchemaBuildError::MissingQueryRootType);
        }

        let mutation_type_name = self
            .explicit_mutation_type
            .clone()
            .or_else(|| {
                self.types_map_builder
                    .types
                    .contains_key("Mutation")
                    .then(|| "Mutation".to_string())
            });
        let subscription_type_name = self
            .explicit_subscription_type
            .clone()
            .or_else(|| {
                self.types_map_builder
                    .types
                    .contains_key("Subscription")
                    .then(|| "Subscription".to_string())
            });

        for maybe_name in [&mutation_type_name, &subscription_type_name] {
            if let Some(name) = maybe_name {
                if !self.types_map_builder.types.contains_key(name) {
                    return Err(SchemaBuildError::UndefinedRootOperationType {
                        location: SourceLocation::GraphQLBuiltIn,
                        type_name: name.clone(),
                    });
                }
            }
        }

        let directive_defs = self.directive_defs.into_iter().collect();
        let query_type = NamedGraphQLTypeRef::new(query_type_name, SourceLocation::GraphQLBuiltIn);
        let mutation_type = mutation_type_name
            .map(|name| NamedGraphQLTypeRef::new(name, SourceLocation::GraphQLBuiltIn));
        let subscription_type = subscription_type_name
            .map(|name| NamedGraphQLTypeRef::new(name, SourceLocation::GraphQLBuiltIn));

        let types = self.types_map_builder.into_types_map()?;

        Ok(Schema {
            directive_defs,
            mutation_type,
            query_type,
            subscription_type,
            types,
        })
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum WrapKind {
    List,
    NonNull,
}

fn deprecation_from_annotations(
    directives: &[crate::types::DirectiveAnnotation],
) -> crate::types::DeprecationState {
    use crate::types::DeprecationState;
    directives
        .iter()
        .find(|annotation| annotation.directive_name() == crate::types::DEPRECATED_DIRECTIVE_NAME)
        .map(|annotation| DeprecationState::Deprecated {
            reason: annotation
                .argument("reason")
                .and_then(|v| v.as_str().map(str::to_string)),
        })
        .unwrap_or(DeprecationState::Active)
}

fn default_directive_defs() -> IndexMap<String, Directive> {
    use crate::types::DirectiveLocation;
    use crate::types::InputField;

    let if_arg = (
        "if".to_string(),
        InputField {
            def_location: SourceLocation::GraphQLBuiltIn,
            default_value: None,
            description: None,
            directives: vec![],
            name: "if".to_string(),
            type_annotation: TypeAnnotation::NonNull(Box::new(TypeAnnotation::Named(
                NamedGraphQLTypeRef::new("Boolean", SourceLocation::GraphQLBuiltIn),
            ))),
        },
    );

    let field_and_fragment_locations = vec![
        DirectiveLocation::FIELD,
        DirectiveLocation::FRAGMENT_SPREAD,
        DirectiveLocation::INLINE_FRAGMENT,
    ];

    IndexMap::from([
        (
            "skip".to_string(),
            Directive {
                arguments: IndexMap::from([if_arg.clone()]),
                def_location: SourceLocation::GraphQLBuiltIn,
                description: Some("Skips this field or fragment when the condition is true.".to_string()),
                is_repeatable: false,
                locations: field_and_fragment_locations.clone(),
                name: "skip".to_string(),
            },
        ),
        (
            "include".to_string(),
            Directive {
                arguments: IndexMap::from([if_arg]),
                def_location: SourceLocation::GraphQLBuiltIn,
                description: Some("Includes this field or fragment only when the condition is true.".to_string()),
                is_repeatable: false,
                locations: field_and_fragment_locations,
                name: "include".to_string(),
            },
        ),
        (
            "deprecated".to_string(),
            Directive {
                arguments: IndexMap::from([(
                    "reason".to_string(),
                    InputField {
                        def_location: SourceLocation::GraphQLBuiltIn,
                        default_value: Some(crate::value::Value::string("No longer supported")),
                        description: None,
                        directives: vec![],
                        name: "reason".to_string(),
                        type_annotation: TypeAnnotation::Named(NamedGraphQLTypeRef::new(
                            "String",
                            SourceLocation::GraphQLBuiltIn,
                        )),
                    },
                )]),
                def_location: SourceLocation::GraphQLBuiltIn,
                description: Some("Marks a field or enum value as deprecated.".to_string()),
                is_repeatable: false,
                locations: vec![
                    DirectiveLocation::FIELD_DEFINITION,
                    DirectiveLocation::ENUM_VALUE,
                ],
                name: "deprecated".to_string(),
            },
        ),
    ])
}
