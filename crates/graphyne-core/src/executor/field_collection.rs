use std::collections::HashSet;

use indexmap::IndexMap;

use crate::executor::context::OperationContext;
use crate::operation::FieldSelection;
use crate::operation::RawDirectiveApplication;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::types::INCLUDE_DIRECTIVE_NAME;
use crate::types::SKIP_DIRECTIVE_NAME;
use crate::value::Value;
use graphyne_parser::ast::Value as AstValue;

/// Implements the language spec's field-collection algorithm: walks a
/// selection set, expanding fragment spreads and inline fragments whose
/// type condition applies to `concrete_type_name`, dropping fields skipped
/// by `@skip`/`@include`, and grouping selections by response key so that
/// identically-keyed fields from different fragments merge into one entry
/// (their sub-selections are concatenated, not deduplicated further here).
pub(crate) fn collect_fields<'a>(
    ctx: &OperationContext<'a>,
    concrete_type_name: &str,
    selection_set: &'a SelectionSet,
    visited_fragments: &mut HashSet<&'a str>,
    out: &mut IndexMap<String, Vec<&'a FieldSelection>>,
) {
    for selection in selection_set {
        if is_skipped(selection.directives(), ctx.variables) {
            continue;
        }

        match selection {
            Selection::Field(field) => {
                out.entry(field.response_key().to_string()).or_default().push(field);
            }
            Selection::InlineFragment(frag) => {
                let applies = match frag.type_condition() {
                    Some(condition) => type_condition_applies(ctx.schema, concrete_type_name, condition),
                    None => true,
                };
                if applies {
                    collect_fields(ctx, concrete_type_name, frag.selection_set(), visited_fragments, out);
                }
            }
            Selection::FragmentSpread(spread) => {
                if !visited_fragments.insert(spread.fragment_name()) {
                    continue;
                }
                if let Some(fragment) = ctx.document.fragment(spread.fragment_name()) {
                    if type_condition_applies(ctx.schema, concrete_type_name, fragment.type_condition()) {
                        collect_fields(ctx, concrete_type_name, fragment.selection_set(), visited_fragments, out);
                    }
                }
            }
        }
    }
}

fn type_condition_applies(schema: &Schema, concrete_type_name: &str, condition: &str) -> bool {
    if condition == concrete_type_name {
        return true;
    }
    schema
        .lookup_type(condition)
        .is_some_and(|ty| ty.possible_type_names(schema).contains(&concrete_type_name))
}

fn is_skipped(directives: &[RawDirectiveApplication], variables: &IndexMap<String, Value>) -> bool {
    for directive in directives {
        let Some(if_arg) = directive.arguments().get("if") else {
            continue;
        };
        let condition = match if_arg {
            AstValue::Boolean(b) => *b,
            AstValue::Variable(name) => variables.get(name).and_then(Value::as_bool).unwrap_or(false),
            _ => false,
        };
        match directive.name() {
            SKIP_DIRECTIVE_NAME if condition => return true,
            INCLUDE_DIRECTIVE_NAME if !condition => return true,
            _ => (),
        }
    }
    false
}
