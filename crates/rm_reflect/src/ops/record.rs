use core::any::Any;

use crate::info::RecordInfo;
use crate::value::Value;

// -----------------------------------------------------------------------------
// Record

/// Index based access to the fields of a record.
///
/// Indices are positions in [`RecordInfo::fields`]. This trait is implemented
/// by [`#[derive(Record)]`](crate::derive::Record); the conversions in
/// [`ops`](crate::ops) are written against `&dyn Record`.
///
/// Only exported, non-flattened fields are readable and assignable through
/// [`field_value`](Record::field_value) and [`set_field`](Record::set_field).
/// Flattened fields are reached through [`embedded`](Record::embedded), and
/// can be replaced as a whole with `set_field`.
///
/// # Examples
///
/// ```
/// use rm_reflect::{derive::Record, ops::Record, value::Value};
///
/// #[derive(Record)]
/// struct Foo {
///     pub a: i32,
///     b: bool,
/// }
///
/// let mut foo = Foo { a: 1, b: true };
///
/// assert_eq!(foo.field_value(0), Some(Value::I32(1)));
/// assert_eq!(foo.field_value(1), None);
///
/// assert_eq!(foo.set_field(0, Value::I32(5)), Ok(()));
/// assert_eq!(foo.set_field(0, Value::I64(5)), Err(Value::I64(5)));
/// assert_eq!(foo.a, 5);
/// # assert!(foo.b);
/// ```
///
/// Only structs with named fields can be records:
///
/// ```compile_fail
/// use rm_reflect::derive::Record;
///
/// #[derive(Record)]
/// struct Pair(pub i32, pub i32);
/// ```
///
/// and a record cannot flatten itself:
///
/// ```compile_fail
/// use rm_reflect::derive::Record;
///
/// #[derive(Record)]
/// struct Node {
///     #[record(flatten)]
///     next: Option<Box<Node>>,
/// }
/// ```
pub trait Record: Any {
    /// Returns the [`RecordInfo`] of the underlying type.
    ///
    /// Same as [`Typed::record_info`](crate::info::Typed::record_info), usable on `dyn Record`.
    fn info(&self) -> &'static RecordInfo;

    /// Returns a copy of the field at `index` as a [`Value`].
    ///
    /// Returns `None` for unexported and flattened fields, or if `index` is
    /// out of bounds.
    fn field_value(&self, index: usize) -> Option<Value>;

    /// Returns the embedded record of the flattened field at `index`.
    ///
    /// Returns `None` if the field is not flattened, or if it holds no record
    /// (`Option` set to `None`).
    fn embedded(&self, index: usize) -> Option<&dyn Record>;

    /// Mutable version of [`embedded`](Record::embedded).
    fn embedded_mut(&mut self, index: usize) -> Option<&mut dyn Record>;

    /// Assigns `value` to the field at `index`.
    ///
    /// The value must hold exactly the declared type, otherwise it is
    /// returned back and the field is untouched. Unexported fields and
    /// out-of-bounds indices always return the value back.
    fn set_field(&mut self, index: usize, value: Value) -> Result<(), Value>;
}

impl dyn Record {
    /// Returns `true` if the underlying type is `T`.
    #[inline]
    pub fn is<T: Record>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    /// Downcasts to `&T`, if the underlying type is `T`.
    #[inline]
    pub fn downcast_ref<T: Record>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }

    /// Downcasts to `&mut T`, if the underlying type is `T`.
    #[inline]
    pub fn downcast_mut<T: Record>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut::<T>()
    }
}
