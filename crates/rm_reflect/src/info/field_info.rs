use core::any::{Any, TypeId, type_name};
use core::fmt;

use crate::info::{RecordInfo, Typed};

// -----------------------------------------------------------------------------
// Visibility

/// Whether a field can be read and assigned by the converter.
///
/// Only fields declared `pub` are [`Exported`](Visibility::Exported);
/// `pub(crate)`, `pub(super)` and private fields are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    Exported,
    #[default]
    Unexported,
}

impl Visibility {
    #[inline]
    pub const fn is_exported(self) -> bool {
        matches!(self, Self::Exported)
    }
}

// -----------------------------------------------------------------------------
// FieldInfo

/// Information for a named record field.
///
/// # Examples
///
/// ```
/// use rm_reflect::{derive::Record, info::Typed};
///
/// #[derive(Record)]
/// struct Foo {
///     #[record(alias = "field")]
///     pub field_a: f32,
/// }
///
/// let field = Foo::record_info().field_at(0).unwrap();
///
/// assert!(field.type_is::<f32>());
/// assert_eq!(field.name(), "field_a");
/// assert_eq!(field.key(), "field");
/// ```
#[derive(Clone)]
pub struct FieldInfo {
    name: &'static str,
    alias: Option<&'static str>,
    visibility: Visibility,
    ty_id: TypeId,
    type_name: &'static str,
    // Only set for flattened fields. `RecordInfo` of the embedded type is
    // created on first access; using a function pointer delays it.
    embedded: Option<fn() -> &'static RecordInfo>,
}

impl FieldInfo {
    /// Creates a new, unexported [`FieldInfo`] for a field `name` of type `T`.
    #[inline]
    pub fn new<T: Any>(name: &'static str) -> Self {
        Self {
            name,
            alias: None,
            visibility: Visibility::Unexported,
            ty_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            embedded: None,
        }
    }

    /// Creates a new flattened [`FieldInfo`].
    ///
    /// `T` is the declared type (e.g. `Option<Box<Base>>`) and `E` the embedded record.
    #[inline]
    pub fn flatten<T: Any, E: Typed>(name: &'static str) -> Self {
        Self {
            embedded: Some(E::record_info),
            ..Self::new::<T>(name)
        }
    }

    /// Sets the alias, used as map key instead of the name.
    #[inline]
    pub fn with_alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    /// Sets the [`Visibility`].
    #[inline]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared alias, if any.
    ///
    /// An empty alias is still returned here, but [`key`](Self::key) ignores it.
    #[inline]
    pub const fn alias(&self) -> Option<&'static str> {
        self.alias
    }

    /// Returns the key written by [`to_map`](crate::ops::to_map):
    /// the alias if declared and non-empty, otherwise the name.
    #[inline]
    pub fn key(&self) -> &'static str {
        match self.alias {
            Some(alias) if !alias.is_empty() => alias,
            _ => self.name,
        }
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub const fn is_exported(&self) -> bool {
        self.visibility.is_exported()
    }

    /// Returns `true` for an anonymous field, whose own fields are merged
    /// into the parent map.
    #[inline]
    pub const fn is_flatten(&self) -> bool {
        self.embedded.is_some()
    }

    /// Returns the [`RecordInfo`] of the embedded record, for flattened fields.
    #[inline]
    pub fn embedded_info(&self) -> Option<&'static RecordInfo> {
        self.embedded.map(|info| info())
    }

    /// Returns the `TypeId` of the declared type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns the name of the declared type, as [`core::any::type_name`] spells it.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check if the given type matches the declared one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }
}

impl fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("alias", &self.alias)
            .field("visibility", &self.visibility)
            .field("flatten", &self.is_flatten())
            .field("type_name", &self.type_name)
            .finish()
    }
}
