use indexmap::IndexMap;

use crate::loc::SourceLocation;
use crate::types::DirectiveAnnotation;
use crate::value::from_ast_const_value;

/// Builds the [`DirectiveAnnotation`]s applied to some schema element out of
/// the parser's AST directive-application nodes.
pub(crate) struct DirectiveAnnotationBuilder;
impl DirectiveAnnotationBuilder {
    pub(crate) fn from_ast(
        annotated_item_loc: &SourceLocation,
        directives: &[graphyne_parser::ast::schema::Directive],
    ) -> Vec<DirectiveAnnotation> {
        directives
            .iter()
            .map(|ast_directive| {
                let mut arguments = IndexMap::new();
                for (arg_name, ast_arg) in ast_directive.arguments.iter() {
                    arguments.insert(arg_name.to_string(), from_ast_const_value(ast_arg));
                }
                DirectiveAnnotation::new(
                    ast_directive.name.clone(),
                    arguments,
                    annotated_item_loc.clone(),
                )
            })
            .collect()
    }
}
