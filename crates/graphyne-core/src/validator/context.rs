use crate::operation::Document;
use crate::schema::Schema;

/// Bundles the read-only inputs every validation rule needs: the document
/// being checked and the schema it's checked against. Rules never mutate
/// either; `Document::mark_validated` is only called once by the top-level
/// `validate` entry point, after every rule has returned clean.
#[derive(Clone, Copy)]
pub(crate) struct ValidationContext<'a> {
    pub(crate) document: &'a Document,
    pub(crate) schema: &'a Schema,
}
