use indexmap::IndexMap;

use crate::loc::SourceLocation;
use crate::operation::errors::DocumentBuildError;
use crate::operation::selection::FieldSelection;
use crate::operation::selection::FragmentSpreadSelection;
use crate::operation::selection::InlineFragmentSelection;
use crate::operation::selection::RawDirectiveApplication;
use crate::operation::selection::Selection;
use crate::operation::selection::SelectionSet;
use crate::operation::Document;
use crate::operation::FragmentDefinition;
use crate::operation::OperationDefinition;
use crate::operation::OperationKind;
use crate::operation::VariableDefinition;
use crate::value::from_ast_const_value;

type Result<T> = std::result::Result<T, DocumentBuildError>;

/// Builds a [`Document`] out of request-document text.
pub struct ExecutableDocumentBuilder;
impl ExecutableDocumentBuilder {
    pub fn parse(source: &str) -> Result<Document> {
        let ast_document = graphyne_parser::ast::operation::parse(source)?;

        let mut operations = vec![];
        let mut fragments = IndexMap::new();

        for definition in &ast_document.definitions {
            match definition {
                graphyne_parser::ast::operation::Definition::Operation(op_def) => {
                    let operation = build_operation(op_def)?;
                    if let Some(name) = operation.name() {
                        if operations
                            .iter()
                            .any(|existing: &OperationDefinition| existing.name() == Some(name))
                        {
                            return Err(DocumentBuildError::DuplicateOperationName(
                                name.to_string(),
                                operation.def_location().clone(),
                            ));
                        }
                    }
                    operations.push(operation);
                }
                graphyne_parser::ast::operation::Definition::Fragment(frag_def) => {
                    let fragment = build_fragment(frag_def);
                    if fragments.contains_key(fragment.name()) {
                        return Err(DocumentBuildError::DuplicateFragmentName(
                            fragment.name().to_string(),
                            fragment.def_location().clone(),
                        ));
                    }
                    fragments.insert(fragment.name().to_string(), fragment);
                }
            }
        }

        Ok(Document {
            fragments,
            operations,
            validated: false,
        })
    }
}

fn build_operation(
    ast_op: &graphyne_parser::ast::operation::OperationDefinition,
) -> Result<OperationDefinition> {
    use graphyne_parser::ast::operation::OperationDefinition as AstOp;
    match ast_op {
        AstOp::SelectionSet(selection_set) => Ok(OperationDefinition {
            def_location: loc_from_pos(selection_set.span.0),
            directives: vec![],
            kind: OperationKind::Query,
            name: None,
            selection_set: build_selection_set(selection_set),
            variables: IndexMap::new(),
        }),
        AstOp::Query(query) => Ok(OperationDefinition {
            def_location: loc_from_pos(query.position),
            directives: build_directives(query.position, &query.directives),
            kind: OperationKind::Query,
            name: query.name.clone(),
            selection_set: build_selection_set(&query.selection_set),
            variables: build_variable_defs(&query.variable_definitions)?,
        }),
        AstOp::Mutation(mutation) => Ok(OperationDefinition {
            def_location: loc_from_pos(mutation.position),
            directives: build_directives(mutation.position, &mutation.directives),
            kind: OperationKind::Mutation,
            name: mutation.name.clone(),
            selection_set: build_selection_set(&mutation.selection_set),
            variables: build_variable_defs(&mutation.variable_definitions)?,
        }),
        AstOp::Subscription(subscription) => Ok(OperationDefinition {
            def_location: loc_from_pos(subscription.position),
            directives: build_directives(subscription.position, &subscription.directives),
            kind: OperationKind::Subscription,
            name: subscription.name.clone(),
            selection_set: build_selection_set(&subscription.selection_set),
            variables: build_variable_defs(&subscription.variable_definitions)?,
        }),
    }
}

fn build_variable_defs(
    ast_vars: &[graphyne_parser::ast::operation::VariableDefinition],
) -> Result<IndexMap<String, VariableDefinition>> {
    let mut variables = IndexMap::new();
    for ast_var in ast_vars {
        let loc = loc_from_pos(ast_var.position);
        if variables.contains_key(&ast_var.name) {
            return Err(DocumentBuildError::DuplicateVariableDefinition(
                ast_var.name.clone(),
                loc,
            ));
        }
        variables.insert(
            ast_var.name.clone(),
            VariableDefinition {
                def_location: loc.clone(),
                default_value: ast_var.default_value.as_ref().map(from_ast_const_value),
                name: ast_var.name.clone(),
                type_annotation: crate::types::TypeAnnotation::from_ast_operation_type(
                    &ast_var.var_type,
                    loc,
                ),
            },
        );
    }
    Ok(variables)
}

fn build_fragment(
    ast_fragment: &graphyne_parser::ast::operation::FragmentDefinition,
) -> FragmentDefinition {
    let graphyne_parser::ast::operation::TypeCondition::On(type_condition) =
        &ast_fragment.type_condition;
    FragmentDefinition {
        def_location: loc_from_pos(ast_fragment.position),
        directives: build_directives(ast_fragment.position, &ast_fragment.directives),
        name: ast_fragment.name.clone(),
        selection_set: build_selection_set(&ast_fragment.selection_set),
        type_condition: type_condition.clone(),
    }
}

fn build_selection_set(ast_set: &graphyne_parser::ast::operation::SelectionSet) -> SelectionSet {
    ast_set.items.iter().map(build_selection).collect()
}

fn build_selection(ast_selection: &graphyne_parser::ast::operation::Selection) -> Selection {
    use graphyne_parser::ast::operation::Selection as AstSelection;
    match ast_selection {
        AstSelection::Field(field) => Selection::Field(FieldSelection {
            alias: field.alias.clone(),
            arguments: field
                .arguments
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            def_location: loc_from_pos(field.position),
            directives: build_directives(field.position, &field.directives),
            name: field.name.clone(),
            selection_set: build_selection_set(&field.selection_set),
        }),
        AstSelection::FragmentSpread(spread) => {
            Selection::FragmentSpread(FragmentSpreadSelection {
                def_location: loc_from_pos(spread.position),
                directives: build_directives(spread.position, &spread.directives),
                fragment_name: spread.fragment_name.clone(),
            })
        }
        AstSelection::InlineFragment(inline) => {
            let type_condition = inline.type_condition.as_ref().map(
                |graphyne_parser::ast::operation::TypeCondition::On(name)| name.clone(),
            );
            Selection::InlineFragment(InlineFragmentSelection {
                def_location: loc_from_pos(inline.position),
                directives: build_directives(inline.position, &inline.directives),
                selection_set: build_selection_set(&inline.selection_set),
                type_condition,
            })
        }
    }
}

fn build_directives(
    fallback_pos: graphyne_parser::ast::AstPos,
    ast_directives: &[graphyne_parser::ast::operation::Directive],
) -> Vec<RawDirectiveApplication> {
    ast_directives
        .iter()
        .map(|ast_directive| RawDirectiveApplication {
            arguments: ast_directive
                .arguments
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            def_location: loc_from_pos(fallback_pos),
            name: ast_directive.name.clone(),
        })
        .collect()
}

fn loc_from_pos(pos: graphyne_parser::ast::AstPos) -> SourceLocation {
    SourceLocation::from_executable_pos(pos)
}
