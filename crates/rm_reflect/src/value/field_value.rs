use core::fmt;
use core::iter;

use crate::impls::embedded_from_value;
use crate::ops::Record;
use crate::value::{GenericMap, RecordValue, Value};

// -----------------------------------------------------------------------------
// FieldValue

/// Conversion between a field type and [`Value`].
///
/// Conversions are exact: `from_value` only accepts the variant standing for
/// `Self` and hands every other value back unchanged, so the caller can report
/// what it received.
///
/// Implemented for `bool`, all integer and float types, `String`, [`Value`],
/// [`GenericMap`], `Option<T>`, `Vec<T>` and every [`Record`] that is also
/// `Clone + PartialEq + Debug`.
///
/// # Examples
///
/// ```
/// use rm_reflect::value::{FieldValue, Value};
///
/// assert_eq!(7_u8.to_value(), Value::U8(7));
/// assert_eq!(u8::from_value(Value::U8(7)), Ok(7));
///
/// // No widening, no narrowing.
/// assert_eq!(u8::from_value(Value::I32(7)), Err(Value::I32(7)));
///
/// assert_eq!(Option::<String>::from_value(Value::Nil), Ok(None));
/// ```
pub trait FieldValue: Sized + 'static {
    /// Creates a [`Value`] holding a copy of `self`.
    fn to_value(&self) -> Value;

    /// Converts `self` into a [`Value`].
    fn into_value(self) -> Value {
        self.to_value()
    }

    /// Takes `Self` out of `value`, or returns `value` back on a type mismatch.
    fn from_value(value: Value) -> Result<Self, Value>;
}

macro_rules! impl_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl FieldValue for $ty {
            #[inline]
            fn to_value(&self) -> Value {
                Value::$variant(self.clone())
            }

            #[inline]
            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            #[inline]
            fn from_value(value: Value) -> Result<Self, Value> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(other),
                }
            }
        }

        impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Value::$variant(value)
            }
        }
    )*};
}

impl_primitive!(
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => String,
);

impl FieldValue for Value {
    #[inline]
    fn to_value(&self) -> Value {
        self.clone()
    }

    #[inline]
    fn into_value(self) -> Value {
        self
    }

    #[inline]
    fn from_value(value: Value) -> Result<Self, Value> {
        Ok(value)
    }
}

impl FieldValue for GenericMap {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Map(self.clone())
    }

    #[inline]
    fn into_value(self) -> Value {
        Value::Map(self)
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Map(map) => Ok(map),
            other => Err(other),
        }
    }
}

/// `None` is [`Value::Nil`].
impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Nil,
        }
    }

    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => Value::Nil,
        }
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Nil => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

/// A [`Value::List`] whose every item converts to `T`.
impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(T::to_value).collect())
    }

    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(T::into_value).collect())
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        let Value::List(items) = value else {
            return Err(value);
        };

        let mut out = Vec::with_capacity(items.len());
        let mut rest = items.into_iter();
        while let Some(item) = rest.next() {
            match T::from_value(item) {
                Ok(v) => out.push(v),
                Err(item) => {
                    // Rebuild the list the caller gave us.
                    let list = out
                        .into_iter()
                        .map(T::into_value)
                        .chain(iter::once(item))
                        .chain(rest)
                        .collect();
                    return Err(Value::List(list));
                }
            }
        }
        Ok(out)
    }
}

/// A nested, non-flattened record is held as [`Value::Record`].
impl<T: Record + Clone + PartialEq + fmt::Debug> FieldValue for T {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Record(RecordValue::new(self.clone()))
    }

    #[inline]
    fn into_value(self) -> Value {
        Value::Record(RecordValue::new(self))
    }

    #[inline]
    fn from_value(value: Value) -> Result<Self, Value> {
        embedded_from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldValue;
    use crate::value::{GenericMap, Value};

    #[test]
    fn primitives_are_exact() {
        assert_eq!(i64::from_value(Value::I64(-4)), Ok(-4));
        assert_eq!(i64::from_value(Value::I32(-4)), Err(Value::I32(-4)));
        assert_eq!(f64::from_value(Value::F32(1.0)), Err(Value::F32(1.0)));
        assert_eq!(String::from_value(Value::from("a")), Ok("a".to_owned()));
        assert_eq!(bool::from_value(Value::Nil), Err(Value::Nil));
    }

    #[test]
    fn option_maps_nil() {
        assert_eq!(Some(3_u32).to_value(), Value::U32(3));
        assert_eq!(None::<u32>.to_value(), Value::Nil);
        assert_eq!(Option::<u32>::from_value(Value::U32(3)), Ok(Some(3)));
        assert_eq!(Option::<u32>::from_value(Value::U64(3)), Err(Value::U64(3)));
    }

    #[test]
    fn vec_restores_list_on_mismatch() {
        let list = Value::List(vec![Value::I8(1), Value::I8(2), Value::from("x"), Value::I8(3)]);
        assert_eq!(Vec::<i8>::from_value(list.clone()), Err(list));

        let list = Value::List(vec![Value::I8(1), Value::I8(2)]);
        assert_eq!(Vec::<i8>::from_value(list), Ok(vec![1, 2]));
        assert_eq!(Vec::<i8>::from_value(Value::I8(1)), Err(Value::I8(1)));
    }

    #[test]
    fn map_and_value() {
        let mut map = GenericMap::default();
        map.insert("k".into(), Value::Bool(true));

        assert_eq!(GenericMap::from_value(map.to_value()), Ok(map));
        assert_eq!(Value::from_value(Value::Nil), Ok(Value::Nil));
    }
}
