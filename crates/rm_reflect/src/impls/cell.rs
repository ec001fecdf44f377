use core::any::TypeId;
use std::sync::{OnceLock, PoisonError, RwLock};

use rm_utils::hash::{FixedHashState, HashMap};

use crate::info::RecordInfo;

// -----------------------------------------------------------------------------
// NonGenericInfoCell

/// A container for [`RecordInfo`] of a non-generic record.
///
/// Initialized once, on first access, then shared by every thread.
///
/// # Examples
///
/// ```
/// use rm_reflect::{impls::NonGenericInfoCell, info::{RecordInfo, Typed}};
///
/// struct Empty;
///
/// impl Typed for Empty {
///     fn record_info() -> &'static RecordInfo {
///         static CELL: NonGenericInfoCell = NonGenericInfoCell::new();
///         CELL.get_or_init(|| RecordInfo::new::<Self>("Empty", Vec::new()))
///     }
/// }
///
/// assert!(core::ptr::eq(Empty::record_info(), Empty::record_info()));
/// ```
pub struct NonGenericInfoCell(OnceLock<RecordInfo>);

impl NonGenericInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored [`RecordInfo`], creating it with `f` on first call.
    #[inline]
    pub fn get_or_init(&'static self, f: impl FnOnce() -> RecordInfo) -> &'static RecordInfo {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericInfoCell

/// A container for [`RecordInfo`] of a generic record.
///
/// A `static` inside a generic function is shared by every instantiation,
/// so infos are stored per `TypeId`. They live for the rest of the process.
///
/// # Examples
///
/// ```
/// use rm_reflect::{impls::GenericInfoCell, info::{RecordInfo, Typed}};
///
/// struct Wrapper<T>(T);
///
/// impl<T: 'static> Typed for Wrapper<T> {
///     fn record_info() -> &'static RecordInfo {
///         static CELL: GenericInfoCell = GenericInfoCell::new();
///         CELL.get_or_insert::<Self>(|| RecordInfo::new::<Self>("Wrapper", Vec::new()))
///     }
/// }
///
/// assert!(Wrapper::<i32>::record_info().type_is::<Wrapper<i32>>());
/// assert!(Wrapper::<u8>::record_info().type_is::<Wrapper<u8>>());
/// ```
pub struct GenericInfoCell(RwLock<HashMap<TypeId, &'static RecordInfo>>);

impl GenericInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(HashMap::with_hasher(FixedHashState)))
    }

    /// Returns the [`RecordInfo`] stored for `T`, creating it with `f` on first call.
    pub fn get_or_insert<T: 'static>(
        &'static self,
        f: impl FnOnce() -> RecordInfo,
    ) -> &'static RecordInfo {
        let type_id = TypeId::of::<T>();

        if let Some(&info) = self
            .0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
        {
            return info;
        }

        // Built outside of the lock, `f` may touch other cells.
        let info = f();

        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_insert_with(|| Box::leak(Box::new(info)))
    }
}
