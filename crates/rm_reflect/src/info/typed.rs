use crate::info::RecordInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time record information.
///
/// Automatically implemented by [`#[derive(Record)]`](crate::derive::Record),
/// allowing access to the field table without an instance of the type.
///
/// # Examples
///
/// ```
/// use rm_reflect::{derive::Record, info::{RecordInfo, Typed}};
///
/// #[derive(Record)]
/// struct A {
///     pub id: u64,
/// }
///
/// let info: &'static RecordInfo = <A as Typed>::record_info();
/// assert_eq!(info.type_name(), "A");
/// ```
///
/// # Manually Impl
///
/// It is not recommended to implement manually. But [`NonGenericInfoCell`]
/// and [`GenericInfoCell`] simplify it, if it's necessary.
///
/// ```
/// use rm_reflect::{
///     impls::NonGenericInfoCell,
///     info::{FieldInfo, RecordInfo, Typed, Visibility},
/// };
///
/// struct Point {
///     pub x: i32,
/// }
///
/// impl Typed for Point {
///     fn record_info() -> &'static RecordInfo {
///         static CELL: NonGenericInfoCell = NonGenericInfoCell::new();
///         CELL.get_or_init(|| {
///             RecordInfo::new::<Self>("Point", vec![
///                 FieldInfo::new::<i32>("x").with_visibility(Visibility::Exported),
///             ])
///         })
///     }
/// }
///
/// assert_eq!(Point::record_info().field_len(), 1);
/// ```
///
/// [`NonGenericInfoCell`]: crate::impls::NonGenericInfoCell
/// [`GenericInfoCell`]: crate::impls::GenericInfoCell
pub trait Typed: 'static {
    /// Returns the compile-time info for the underlying type.
    fn record_info() -> &'static RecordInfo;
}
