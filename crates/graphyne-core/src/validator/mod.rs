mod context;
mod directive_rules;
mod document_rules;
mod fragment_rules;
mod selection_rules;
mod subscription_rules;
mod value_rules;
mod variable_rules;

use context::ValidationContext;

use crate::error::GraphQLError;
use crate::operation::Document;
use crate::schema::Schema;

/// Checks a request document against a schema, per every rule category the
/// language spec's Validation section describes: document shape, variable
/// declarations, field/argument selections, fragments, directive
/// applications, literal value shapes, and subscription root-field count.
///
/// Every rule category runs to completion regardless of what the others
/// find -- there's no short-circuiting on the first failure, so a caller
/// always gets the complete list of problems with a document in one pass.
/// On success (`errors` empty), the document is marked validated and the
/// executor will accept it; otherwise it's left unvalidated and the caller
/// should surface every error in `errors` without attempting execution.
pub fn validate(document: &mut Document, schema: &Schema) -> Vec<GraphQLError> {
    let ctx = ValidationContext {
        document: &*document,
        schema,
    };

    let ((mut document_errors, mut variable_errors), (mut selection_errors, mut fragment_errors)) = rayon::join(
        || rayon::join(|| document_rules::check(ctx), || variable_rules::check(ctx)),
        || rayon::join(|| selection_rules::check(ctx), || fragment_rules::check(ctx)),
    );
    let (mut directive_errors, mut value_and_subscription_errors) = rayon::join(
        || directive_rules::check(ctx),
        || rayon::join(|| value_rules::check(ctx), || subscription_rules::check(ctx)),
    );

    let mut errors = vec![];
    errors.append(&mut document_errors);
    errors.append(&mut variable_errors);
    errors.append(&mut selection_errors);
    errors.append(&mut fragment_errors);
    errors.append(&mut directive_errors);
    errors.append(&mut value_and_subscription_errors.0);
    errors.append(&mut value_and_subscription_errors.1);

    if errors.is_empty() {
        document.mark_validated();
    }

    errors
}
