//! This module provides the core token types used by GraphQL lexers and the
//! parser.

mod cook_graphql_string_error;
mod graphql_token;
mod graphql_token_kind;
mod graphql_token_span;
mod graphql_trivia_token;

pub use cook_graphql_string_error::CookGraphQLStringError;
pub use graphql_token::GraphQLToken;
pub use graphql_token::GraphQLTriviaTokenVec;
pub use graphql_token_kind::GraphQLErrorNotes;
pub use graphql_token_kind::GraphQLTokenKind;
pub use graphql_token_span::GraphQLTokenSpan;
pub use graphql_trivia_token::GraphQLTriviaToken;
