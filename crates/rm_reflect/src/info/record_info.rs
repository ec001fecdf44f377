use core::any::TypeId;

use rm_utils::hash::HashMap;

use crate::info::FieldInfo;

/// A container for compile-time record info.
///
/// The order of fields is the declaration order, flattened fields included
/// at their declaration position.
///
/// # Examples
///
/// ```rust
/// use rm_reflect::{derive::Record, info::Typed};
///
/// #[derive(Record)]
/// struct A {
///     pub val: f32,
///     secret: String,
/// }
///
/// let info = A::record_info();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("secret"), Some(1));
/// assert!(!info.field("secret").unwrap().is_exported());
/// ```
#[derive(Clone, Debug)]
pub struct RecordInfo {
    ty_id: TypeId,
    type_path: &'static str,
    type_name: &'static str,
    fields: Box<[FieldInfo]>,
    field_indices: HashMap<&'static str, usize>,
}

impl RecordInfo {
    /// Create a new [`RecordInfo`] for `T`.
    ///
    /// `type_name` is the short name, without module path or generics.
    pub fn new<T: 'static>(type_name: &'static str, fields: Vec<FieldInfo>) -> Self {
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect::<HashMap<_, _>>();

        crate::cfg::debug! {
            assert_eq!(
                field_indices.len(),
                fields.len(),
                "duplicate field names in `{type_name}`",
            );
        }

        Self {
            ty_id: TypeId::of::<T>(),
            type_path: core::any::type_name::<T>(),
            type_name,
            fields: fields.into_boxed_slice(),
            field_indices,
        }
    }

    /// Returns the `TypeId` of the record type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns the full type path, e.g. `my_crate::model::User`.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the type name without module path, e.g. `User`.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the [`FieldInfo`] for the given field `name`, if present.
    ///
    /// Fields promoted from flattened records are not searched.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.get(*self.field_indices.get(name)?)
    }

    /// Returns the [`FieldInfo`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// Returns the index for the given field `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Returns all fields in **declaration order**.
    #[inline]
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FieldInfo> {
        self.fields.iter()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: 'static>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }
}
