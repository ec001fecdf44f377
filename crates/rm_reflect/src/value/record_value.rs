use core::any::Any;
use core::fmt;

use crate::info::RecordInfo;
use crate::ops::Record;

// -----------------------------------------------------------------------------
// DynRecord

/// Object-safe `Clone + PartialEq + Debug` on top of [`Record`].
trait DynRecord: Record {
    fn clone_dyn(&self) -> Box<dyn DynRecord>;

    fn eq_dyn(&self, other: &dyn DynRecord) -> bool;

    fn debug_dyn(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    fn as_record(&self) -> &dyn Record;

    fn as_record_mut(&mut self) -> &mut dyn Record;
}

impl<T: Record + Clone + PartialEq + fmt::Debug> DynRecord for T {
    #[inline]
    fn clone_dyn(&self) -> Box<dyn DynRecord> {
        Box::new(self.clone())
    }

    fn eq_dyn(&self, other: &dyn DynRecord) -> bool {
        let other: &dyn Any = other;
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }

    #[inline]
    fn debug_dyn(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }

    #[inline]
    fn as_record(&self) -> &dyn Record {
        self
    }

    #[inline]
    fn as_record_mut(&mut self) -> &mut dyn Record {
        self
    }
}

// -----------------------------------------------------------------------------
// RecordValue

/// A type-erased record held by [`Value::Record`](crate::value::Value::Record).
///
/// Two `RecordValue`s are equal only if they hold the same record type and
/// the records compare equal.
///
/// # Examples
///
/// ```
/// use rm_reflect::{derive::Record, value::RecordValue};
///
/// #[derive(Record, Clone, PartialEq, Debug)]
/// struct Point {
///     pub x: i32,
/// }
///
/// let value = RecordValue::new(Point { x: 1 });
///
/// assert!(value.is::<Point>());
/// assert_eq!(value.info().type_name(), "Point");
/// assert_eq!(value.downcast::<Point>().ok(), Some(Point { x: 1 }));
/// ```
pub struct RecordValue(Box<dyn DynRecord>);

impl RecordValue {
    #[inline]
    pub fn new<T: Record + Clone + PartialEq + fmt::Debug>(record: T) -> Self {
        Self(Box::new(record))
    }

    /// Returns the held record.
    #[inline]
    pub fn as_record(&self) -> &dyn Record {
        self.0.as_record()
    }

    /// Returns the held record mutably.
    #[inline]
    pub fn as_record_mut(&mut self) -> &mut dyn Record {
        self.0.as_record_mut()
    }

    /// Returns the [`RecordInfo`] of the held record.
    #[inline]
    pub fn info(&self) -> &'static RecordInfo {
        self.0.info()
    }

    /// Returns `true` if the held record is a `T`.
    #[inline]
    pub fn is<T: Record>(&self) -> bool {
        let any: &dyn Any = &*self.0;
        any.is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Record>(&self) -> Option<&T> {
        let any: &dyn Any = &*self.0;
        any.downcast_ref::<T>()
    }

    #[inline]
    pub fn downcast_mut<T: Record>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = &mut *self.0;
        any.downcast_mut::<T>()
    }

    /// Takes the held record out, or returns `self` back if it is not a `T`.
    pub fn downcast<T: Record>(self) -> Result<T, Self> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self.0;
        match any.downcast::<T>() {
            Ok(record) => Ok(*record),
            Err(_) => unreachable!("record type checked above"),
        }
    }
}

impl Clone for RecordValue {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone_dyn())
    }
}

impl PartialEq for RecordValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_dyn(&*other.0)
    }
}

impl fmt::Debug for RecordValue {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.debug_dyn(f)
    }
}
