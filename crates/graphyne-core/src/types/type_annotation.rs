use crate::loc::SourceLocation;
use crate::types::NamedGraphQLTypeRef;

/// A type reference as it appears at a use site: a variable declaration, a
/// field's return type, an argument's or input field's declared type. Wraps
/// a [`NamedGraphQLTypeRef`] with the `[...]` and `!` modifiers the GraphQL
/// language grammar allows to nest arbitrarily (`[[String!]]!`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    Named(NamedGraphQLTypeRef),
    List(Box<TypeAnnotation>),
    NonNull(Box<TypeAnnotation>),
}
impl TypeAnnotation {
    /// The innermost named type this annotation ultimately refers to, after
    /// stripping any number of `List`/`NonNull` wrappers.
    pub fn inner_named_ref(&self) -> &NamedGraphQLTypeRef {
        match self {
            Self::Named(named_ref) => named_ref,
            Self::List(inner) | Self::NonNull(inner) => inner.inner_named_ref(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::NonNull(inner) => inner.is_list(),
            Self::Named(_) => false,
        }
    }

    /// Builds a [`TypeAnnotation`] from the AST type reference a request
    /// document or schema document parsed out, recursively unwrapping
    /// `graphql_parser`'s own `NonNullType`/`ListType`/`NamedType`.
    pub fn from_ast_operation_type(
        ast_type: &graphyne_parser::ast::operation::Type,
        ref_location: SourceLocation,
    ) -> Self {
        use graphyne_parser::ast::operation::Type as AstType;
        match ast_type {
            AstType::NamedType(name) => {
                Self::Named(NamedGraphQLTypeRef::new(name.as_str(), ref_location))
            }
            AstType::ListType(inner) => Self::List(Box::new(Self::from_ast_operation_type(
                inner,
                ref_location,
            ))),
            AstType::NonNullType(inner) => Self::NonNull(Box::new(
                Self::from_ast_operation_type(inner, ref_location),
            )),
        }
    }

    pub fn from_ast_schema_type(
        ast_type: &graphyne_parser::ast::schema::Type,
        ref_location: SourceLocation,
    ) -> Self {
        use graphyne_parser::ast::schema::Type as AstType;
        match ast_type {
            AstType::NamedType(name) => {
                Self::Named(NamedGraphQLTypeRef::new(name.as_str(), ref_location))
            }
            AstType::ListType(inner) => Self::List(Box::new(Self::from_ast_schema_type(
                inner,
                ref_location,
            ))),
            AstType::NonNullType(inner) => Self::NonNull(Box::new(
                Self::from_ast_schema_type(inner, ref_location),
            )),
        }
    }
}
