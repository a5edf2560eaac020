use indexmap::IndexMap;

use crate::loc::SourceLocation;

/// An `@directive(arg: $var)` application as it appears in a request
/// document, before variable substitution. Argument values are kept as raw
/// parser literals (which may contain `$variable` references) rather than
/// runtime [`crate::value::Value`]s, since substitution only happens once
/// the executor knows the variable Map for a particular request.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RawDirectiveApplication {
    pub(crate) arguments: IndexMap<String, graphyne_parser::ast::Value>,
    pub(crate) def_location: SourceLocation,
    pub(crate) name: String,
}
impl RawDirectiveApplication {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn arguments(&self) -> &IndexMap<String, graphyne_parser::ast::Value> {
        &self.arguments
    }

    pub fn def_location(&self) -> &SourceLocation {
        &self.def_location
    }
}

pub type SelectionSet = Vec<Selection>;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Selection {
    Field(FieldSelection),
    FragmentSpread(FragmentSpreadSelection),
    InlineFragment(InlineFragmentSelection),
}
impl Selection {
    pub fn directives(&self) -> &[RawDirectiveApplication] {
        match self {
            Self::Field(f) => &f.directives,
            Self::FragmentSpread(f) => &f.directives,
            Self::InlineFragment(f) => &f.directives,
        }
    }

    pub fn def_location(&self) -> &SourceLocation {
        match self {
            Self::Field(f) => &f.def_location,
            Self::FragmentSpread(f) => &f.def_location,
            Self::InlineFragment(f) => &f.def_location,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldSelection {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: IndexMap<String, graphyne_parser::ast::Value>,
    pub(crate) def_location: SourceLocation,
    pub(crate) directives: Vec<RawDirectiveApplication>,
    pub(crate) name: String,
    pub(crate) selection_set: SelectionSet,
}
impl FieldSelection {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &IndexMap<String, graphyne_parser::ast::Value> {
        &self.arguments
    }

    pub fn def_location(&self) -> &SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &[RawDirectiveApplication] {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The key this field's result is stored under in the response map:
    /// the alias if one was given, otherwise the field name itself.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentSpreadSelection {
    pub(crate) def_location: SourceLocation,
    pub(crate) directives: Vec<RawDirectiveApplication>,
    pub(crate) fragment_name: String,
}
impl FragmentSpreadSelection {
    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }

    pub fn directives(&self) -> &[RawDirectiveApplication] {
        &self.directives
    }

    pub fn def_location(&self) -> &SourceLocation {
        &self.def_location
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InlineFragmentSelection {
    pub(crate) def_location: SourceLocation,
    pub(crate) directives: Vec<RawDirectiveApplication>,
    pub(crate) selection_set: SelectionSet,
    pub(crate) type_condition: Option<String>,
}
impl InlineFragmentSelection {
    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }

    pub fn directives(&self) -> &[RawDirectiveApplication] {
        &self.directives
    }

    pub fn def_location(&self) -> &SourceLocation {
        &self.def_location
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}
