use std::marker::PhantomData;

/// A strongly-typed, `String`-named reference to a "resource" (`TResource`)
/// stored within some other data-store (`TSource`) without holding an
/// explicit reference to the data-store. De-referencing a [`NamedRef`] is
/// done via [`NamedRef::deref`] by providing an explicit reference to the
/// `TSource`.
///
/// [`crate::schema::Schema`] stores all of its defined [`crate::types::GraphQLType`]s
/// by value in a name-keyed map; everything that refers to a type (field
/// return types, interface implementations, argument types) stores a
/// [`NamedRef`] rather than a direct reference, which is what lets the type
/// graph contain cycles (`User.friends: [User]`) without self-referential
/// structs.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedRef<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source = TSource, RefLocation = TRefLocation>,
> {
    name: String,
    phantom: PhantomData<TResource>,
    ref_location: TRefLocation,
}
impl<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source = TSource, RefLocation = TRefLocation>,
> NamedRef<TSource, TRefLocation, TResource> {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl AsRef<str>, ref_location: TRefLocation) -> Self {
        NamedRef {
            name: name.as_ref().to_string(),
            ref_location,
            phantom: PhantomData,
        }
    }

    pub fn ref_location(&self) -> &TRefLocation {
        &self.ref_location
    }

    pub fn deref<'a>(&self, source: &'a TSource) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}

/// Implement for any type that can be referenced by name through a
/// `TSource` store, to enable [`NamedRef`] for it.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;
    type RefLocation;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError>
    where
        Self: Sized;

    fn named_ref(
        name: &str,
        ref_location: Self::RefLocation,
    ) -> NamedRef<Self::Source, Self::RefLocation, Self> {
        NamedRef::<Self::Source, Self::RefLocation, Self>::new(name, ref_location)
    }
}

#[derive(Clone, Debug, thiserror::Error)]
pub enum DerefByNameError {
    #[error("dangling reference to undefined name `{0}`")]
    DanglingReference(String),
}
