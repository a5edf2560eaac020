mod schema;
mod schema_builder;

pub(crate) mod introspection;

pub use schema::Schema;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::WrapKind;
