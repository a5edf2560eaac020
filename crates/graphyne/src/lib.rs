//! Parsing, schema, validation, execution, and subscriptions for building
//! GraphQL servers. Re-exports [`graphyne_core`] and [`graphyne_parser`]
//! under a single crate name.

pub use graphyne_core::*;

#[doc(inline)]
pub use graphyne_parser as parser;
