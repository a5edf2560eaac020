pub const SMALL_SCHEMA: &str =
    include_str!("small_schema.graphql");
pub const MEDIUM_SCHEMA: &str =
    include_str!("medium_schema.graphql");
pub const LARGE_SCHEMA: &str =
    include_str!("large_schema.graphql");
pub const SIMPLE_QUERY: &str =
    include_str!("simple_query.graphql");
pub const COMPLEX_QUERY: &str =
    include_str!("complex_query.graphql");
