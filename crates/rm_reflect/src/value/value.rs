use core::any::type_name;
use core::fmt;

use crate::ops::{Exclusions, to_map};
use crate::value::{GenericMap, RecordValue};

// -----------------------------------------------------------------------------
// ValueKind

/// The tag of a [`Value`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Nil,
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    String,
    List,
    Map,
    Record,
}

impl ValueKind {
    /// Returns `true` for any integer kind.
    #[inline]
    pub const fn is_integer(self) -> bool {
        use ValueKind::*;
        matches!(self, I8 | I16 | I32 | I64 | Isize | U8 | U16 | U32 | U64 | Usize)
    }

    /// Returns `true` for `F32` and `F64`.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "string",
            Self::List => "list",
            Self::Map => "map",
            Self::Record => "record",
        };
        f.write_str(name)
    }
}

// -----------------------------------------------------------------------------
// Value

/// A dynamically typed value, the element type of a [`GenericMap`].
///
/// Every integer width has its own variant, so a `Value::I32` never fits an
/// `i64` field: the variant tag is the runtime type.
///
/// The lossy readers ([`to_i64`](Value::to_i64), [`to_f64`](Value::to_f64), ...)
/// are for callers that want a number regardless of width; the converter
/// itself never uses them.
///
/// # Examples
///
/// ```
/// use rm_reflect::value::{Value, ValueKind};
///
/// let age = Value::from(5_i32);
///
/// assert_eq!(age.kind(), ValueKind::I32);
/// assert_eq!(age.type_name(), "i32");
/// assert_eq!(age.to_i64(), Some(5));
/// assert_eq!(Value::from("12").to_i64(), Some(12));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    String(String),
    List(Vec<Value>),
    Map(GenericMap),
    Record(RecordValue),
}

impl Value {
    /// Returns the tag of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Nil => ValueKind::Nil,
            Self::Bool(_) => ValueKind::Bool,
            Self::I8(_) => ValueKind::I8,
            Self::I16(_) => ValueKind::I16,
            Self::I32(_) => ValueKind::I32,
            Self::I64(_) => ValueKind::I64,
            Self::Isize(_) => ValueKind::Isize,
            Self::U8(_) => ValueKind::U8,
            Self::U16(_) => ValueKind::U16,
            Self::U32(_) => ValueKind::U32,
            Self::U64(_) => ValueKind::U64,
            Self::Usize(_) => ValueKind::Usize,
            Self::F32(_) => ValueKind::F32,
            Self::F64(_) => ValueKind::F64,
            Self::String(_) => ValueKind::String,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map,
            Self::Record(_) => ValueKind::Record,
        }
    }

    /// Returns the name of the Rust type this value holds,
    /// spelled like [`FieldInfo::type_name`](crate::info::FieldInfo::type_name).
    ///
    /// [`Value::Nil`] has no Rust type and returns `"nil"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => type_name::<bool>(),
            Self::I8(_) => type_name::<i8>(),
            Self::I16(_) => type_name::<i16>(),
            Self::I32(_) => type_name::<i32>(),
            Self::I64(_) => type_name::<i64>(),
            Self::Isize(_) => type_name::<isize>(),
            Self::U8(_) => type_name::<u8>(),
            Self::U16(_) => type_name::<u16>(),
            Self::U32(_) => type_name::<u32>(),
            Self::U64(_) => type_name::<u64>(),
            Self::Usize(_) => type_name::<usize>(),
            Self::F32(_) => type_name::<f32>(),
            Self::F64(_) => type_name::<f64>(),
            Self::String(_) => type_name::<String>(),
            Self::List(_) => type_name::<Vec<Value>>(),
            Self::Map(_) => type_name::<GenericMap>(),
            Self::Record(record) => record.info().type_path(),
        }
    }

    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns `true` for the zero value of each kind: `Nil`, `false`, `0`,
    /// `0.0`, an empty string, list or map, and a record whose every exported
    /// value is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use rm_reflect::value::Value;
    ///
    /// assert!(Value::Nil.is_blank());
    /// assert!(Value::from(0_u8).is_blank());
    /// assert!(Value::from("").is_blank());
    /// assert!(!Value::from(true).is_blank());
    /// ```
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Nil => true,
            Self::Bool(v) => !v,
            Self::I8(v) => *v == 0,
            Self::I16(v) => *v == 0,
            Self::I32(v) => *v == 0,
            Self::I64(v) => *v == 0,
            Self::Isize(v) => *v == 0,
            Self::U8(v) => *v == 0,
            Self::U16(v) => *v == 0,
            Self::U32(v) => *v == 0,
            Self::U64(v) => *v == 0,
            Self::Usize(v) => *v == 0,
            Self::F32(v) => *v == 0.0,
            Self::F64(v) => *v == 0.0,
            Self::String(v) => v.is_empty(),
            Self::List(v) => v.is_empty(),
            Self::Map(v) => v.is_empty(),
            Self::Record(record) => to_map(record.as_record(), &Exclusions::empty())
                .values()
                .all(Value::is_blank),
        }
    }

    /// Reads any integer, float or numeric string as `i64`.
    ///
    /// Floats are truncated toward zero. Returns `None` for other kinds and
    /// for values out of range.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Self::I8(v) => Some(i64::from(*v)),
            Self::I16(v) => Some(i64::from(*v)),
            Self::I32(v) => Some(i64::from(*v)),
            Self::I64(v) => Some(*v),
            Self::Isize(v) => i64::try_from(*v).ok(),
            Self::U8(v) => Some(i64::from(*v)),
            Self::U16(v) => Some(i64::from(*v)),
            Self::U32(v) => Some(i64::from(*v)),
            Self::U64(v) => i64::try_from(*v).ok(),
            Self::Usize(v) => i64::try_from(*v).ok(),
            Self::F32(v) => float_to_i64(f64::from(*v)),
            Self::F64(v) => float_to_i64(*v),
            Self::String(v) => v.trim().parse().ok(),
            _ => None,
        }
    }

    /// Reads any non-negative integer, float or numeric string as `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        match self {
            Self::U8(v) => Some(u64::from(*v)),
            Self::U16(v) => Some(u64::from(*v)),
            Self::U32(v) => Some(u64::from(*v)),
            Self::U64(v) => Some(*v),
            Self::Usize(v) => u64::try_from(*v).ok(),
            Self::String(v) => v.trim().parse().ok(),
            other => other.to_i64().and_then(|v| u64::try_from(v).ok()),
        }
    }

    /// Reads any integer, float or numeric string as `f64`.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::F32(v) => Some(f64::from(*v)),
            Self::F64(v) => Some(*v),
            Self::U64(v) => Some(*v as f64),
            Self::Usize(v) => Some(*v as f64),
            Self::String(v) => v.trim().parse().ok(),
            other => other.to_i64().map(|v| v as f64),
        }
    }

    /// Returns the boolean, only for [`Value::Bool`].
    #[inline]
    pub const fn to_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string slice, only for [`Value::String`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the items of a list made only of strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use rm_reflect::value::Value;
    ///
    /// let tags = Value::from(vec![Value::from("a"), Value::from("b")]);
    /// assert_eq!(tags.strings(), Some(vec!["a", "b"]));
    ///
    /// let mixed = Value::from(vec![Value::from("a"), Value::from(1_i32)]);
    /// assert_eq!(mixed.strings(), None);
    /// ```
    pub fn strings(&self) -> Option<Vec<&str>> {
        match self {
            Self::List(items) => items.iter().map(Value::as_str).collect(),
            _ => None,
        }
    }

    /// Returns the map, only for [`Value::Map`].
    #[inline]
    pub fn as_map(&self) -> Option<&GenericMap> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the record, only for [`Value::Record`].
    #[inline]
    pub fn as_record(&self) -> Option<&RecordValue> {
        match self {
            Self::Record(v) => Some(v),
            _ => None,
        }
    }
}

fn float_to_i64(v: f64) -> Option<i64> {
    let v = v.trunc();
    // `i64::MAX as f64` rounds up to 2^63.
    (v.is_finite() && v >= i64::MIN as f64 && v < i64::MAX as f64).then_some(v as i64)
}

// -----------------------------------------------------------------------------
// Display

fn fmt_entries<'a>(
    f: &mut fmt::Formatter<'_>,
    entries: impl Iterator<Item = (&'a String, &'a Value)>,
) -> fmt::Result {
    let mut entries: Vec<_> = entries.collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    f.write_str("{")?;
    for (index, (key, value)) in entries.into_iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key}: {value}")?;
    }
    f.write_str("}")
}

/// Formats the plain content: strings without quotes, `Nil` as nothing,
/// maps and records with keys sorted.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => Ok(()),
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::I8(v) => fmt::Display::fmt(v, f),
            Self::I16(v) => fmt::Display::fmt(v, f),
            Self::I32(v) => fmt::Display::fmt(v, f),
            Self::I64(v) => fmt::Display::fmt(v, f),
            Self::Isize(v) => fmt::Display::fmt(v, f),
            Self::U8(v) => fmt::Display::fmt(v, f),
            Self::U16(v) => fmt::Display::fmt(v, f),
            Self::U32(v) => fmt::Display::fmt(v, f),
            Self::U64(v) => fmt::Display::fmt(v, f),
            Self::Usize(v) => fmt::Display::fmt(v, f),
            Self::F32(v) => fmt::Display::fmt(v, f),
            Self::F64(v) => fmt::Display::fmt(v, f),
            Self::String(v) => f.write_str(v),
            Self::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Self::Map(map) => fmt_entries(f, map.iter()),
            Self::Record(record) => {
                let map = to_map(record.as_record(), &Exclusions::empty());
                write!(f, "{} ", record.info().type_name())?;
                fmt_entries(f, map.iter())
            }
        }
    }
}

// -----------------------------------------------------------------------------
// From

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<GenericMap> for Value {
    #[inline]
    fn from(value: GenericMap) -> Self {
        Self::Map(value)
    }
}

impl From<RecordValue> for Value {
    #[inline]
    fn from(value: RecordValue) -> Self {
        Self::Record(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Value, ValueKind};
    use crate::value::GenericMap;

    #[test]
    fn type_names_follow_rust_types() {
        assert_eq!(Value::from(1_i64).type_name(), "i64");
        assert_eq!(Value::from(1_u16).type_name(), "u16");
        assert_eq!(Value::from("x").type_name(), "alloc::string::String");
        assert_eq!(Value::Nil.type_name(), "nil");
    }

    #[test]
    fn kinds() {
        assert!(ValueKind::Usize.is_integer());
        assert!(!ValueKind::F32.is_integer());
        assert!(ValueKind::F64.is_float());
        assert_eq!(Value::from(1.5_f32).kind(), ValueKind::F32);
        assert_eq!(ValueKind::Record.to_string(), "record");
    }

    #[test]
    fn lossy_readers() {
        assert_eq!(Value::from(-3_i8).to_i64(), Some(-3));
        assert_eq!(Value::from(u64::MAX).to_i64(), None);
        assert_eq!(Value::from(u64::MAX).to_u64(), Some(u64::MAX));
        assert_eq!(Value::from(-1_i32).to_u64(), None);
        assert_eq!(Value::from(2.9_f64).to_i64(), Some(2));
        assert_eq!(Value::from(f64::NAN).to_i64(), None);
        assert_eq!(Value::from(" 7 ").to_u64(), Some(7));
        assert_eq!(Value::from("1.25").to_f64(), Some(1.25));
        assert_eq!(Value::from("abc").to_i64(), None);
        assert_eq!(Value::Nil.to_i64(), None);
        assert_eq!(Value::from(true).to_bool(), Some(true));
        assert_eq!(Value::from(1_i32).to_bool(), None);
    }

    #[test]
    fn blank_values() {
        assert!(Value::from(0.0_f32).is_blank());
        assert!(Value::List(Vec::new()).is_blank());
        assert!(Value::Map(GenericMap::default()).is_blank());
        assert!(!Value::from(-1_isize).is_blank());
        assert!(!Value::from(" ").is_blank());
    }

    #[test]
    fn display() {
        let mut map = GenericMap::default();
        map.insert("b".into(), Value::from(2_i32));
        map.insert("a".into(), Value::from(vec![Value::from("x"), Value::Nil]));

        assert_eq!(Value::Map(map).to_string(), "{a: [x, ], b: 2}");
        assert_eq!(Value::Nil.to_string(), "");
        assert_eq!(Value::from(false).to_string(), "false");
    }
}
