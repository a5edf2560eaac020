//! Schema, validator, and executor for a GraphQL runtime: everything
//! downstream of parsing a document (see `graphyne-parser`) up to
//! producing a response [`Value`] tree.

mod error;
pub mod executor;
pub mod facade;
mod loc;
mod named_ref;
pub mod operation;
pub mod schema;
pub mod subscription;
pub mod types;
pub mod validator;
pub mod value;

pub use error::ErrorKind;
pub use error::GraphQLError;
pub use error::PathSegment;
pub use facade::Request;
pub use facade::RequestError;
pub use facade::RuntimeConfig;
pub use facade::RuntimeConfigBuilder;
pub use loc::FilePosition;
pub use loc::SourceLocation;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use validator::validate;
pub use value::JsonRetagHint;
pub use value::MapInsertError;
pub use value::StringValue;
pub use value::Value;
