use std::collections::HashSet;

use crate::error::ErrorKind;
use crate::error::GraphQLError;
use crate::operation::Document;
use crate::operation::OperationDefinition;
use crate::operation::RawDirectiveApplication;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::validator::context::ValidationContext;

/// Every declared variable must be of an input type, and (for a non-null
/// declaration with no default) is implicitly required. Separately, every
/// `$variable` actually referenced in the operation's arguments/directives
/// must be declared, and every declared variable must be referenced
/// somewhere -- an unused variable is as much a mistake as an undeclared
/// one.
pub(crate) fn check(ctx: ValidationContext) -> Vec<GraphQLError> {
    let mut errors = vec![];

    for operation in ctx.document.operations() {
        for (name, def) in operation.variables() {
            let named_ref = def.type_annotation().inner_named_ref();
            match named_ref.deref(ctx.schema) {
                Ok(ty) if !ty.is_input_type() => {
                    errors.push(
                        GraphQLError::new(
                            ErrorKind::Validation,
                            format!(
                                "variable `${name}` declared with non-input type `{}`",
                                ty.name()
                            ),
                        )
                        .with_location(file_pos(def.def_location())),
                    );
                }
                Err(_) => {
                    errors.push(
                        GraphQLError::new(
                            ErrorKind::Validation,
                            format!(
                                "variable `${name}` declared with undefined type `{}`",
                                named_ref.name()
                            ),
                        )
                        .with_location(file_pos(def.def_location())),
                    );
                }
                Ok(_) => (),
            }
        }

        let used = referenced_variables(operation, ctx.document);
        for name in operation.variables().keys() {
            if !used.contains(name.as_str()) {
                errors.push(GraphQLError::new(
                    ErrorKind::Validation,
                    format!("variable `${name}` is never used"),
                ));
            }
        }
        for name in &used {
            if !operation.variables().contains_key(*name) {
                errors.push(GraphQLError::new(
                    ErrorKind::Validation,
                    format!("variable `${name}` is used but never declared"),
                ));
            }
        }
    }

    errors
}

fn referenced_variables<'a>(operation: &'a OperationDefinition, document: &'a Document) -> HashSet<&'a str> {
    let mut found = HashSet::new();
    let mut visited_fragments = HashSet::new();
    collect_from_directives(operation.directives(), &mut found);
    collect_from_selection_set(operation.selection_set(), document, &mut visited_fragments, &mut found);
    found
}

fn collect_from_selection_set<'a>(
    selections: &'a SelectionSet,
    document: &'a Document,
    visited_fragments: &mut HashSet<&'a str>,
    found: &mut HashSet<&'a str>,
) {
    for selection in selections {
        collect_from_directives(selection.directives(), found);
        match selection {
            Selection::Field(field) => {
                for value in field.arguments().values() {
                    collect_from_value(value, found);
                }
                collect_from_selection_set(field.selection_set(), document, visited_fragments, found);
            }
            Selection::InlineFragment(frag) => {
                collect_from_selection_set(frag.selection_set(), document, visited_fragments, found);
            }
            Selection::FragmentSpread(spread) => {
                if visited_fragments.insert(spread.fragment_name()) {
                    if let Some(fragment) = document.fragment(spread.fragment_name()) {
                        collect_from_selection_set(fragment.selection_set(), document, visited_fragments, found);
                    }
                }
            }
        }
    }
}

fn collect_from_directives<'a>(directives: &'a [RawDirectiveApplication], found: &mut HashSet<&'a str>) {
    for directive in directives {
        for value in directive.arguments().values() {
            collect_from_value(value, found);
        }
    }
}

fn collect_from_value<'a>(value: &'a graphyne_parser::ast::Value, found: &mut HashSet<&'a str>) {
    use graphyne_parser::ast::Value as AstValue;
    match value {
        AstValue::Variable(name) => {
            found.insert(name.as_str());
        }
        AstValue::List(items) => {
            for item in items {
                collect_from_value(item, found);
            }
        }
        AstValue::Object(fields) => {
            for value in fields.values() {
                collect_from_value(value, found);
            }
        }
        _ => (),
    }
}

fn file_pos(location: &crate::loc::SourceLocation) -> crate::loc::FilePosition {
    location
        .file_position()
        .cloned()
        .unwrap_or(crate::loc::FilePosition { line: 0, column: 0 })
}
