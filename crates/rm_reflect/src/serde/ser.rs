use serde_core::ser::{SerializeMap, SerializeSeq};
use serde_core::{Serialize, Serializer};

use crate::ops::{Exclusions, to_map};
use crate::value::{GenericMap, RecordValue, Value};

fn serialize_entries<S: Serializer>(map: &GenericMap, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_map(Some(map.len()))?;
    for (key, value) in map {
        state.serialize_entry(key, value)?;
    }
    state.end()
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Nil => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::I8(v) => serializer.serialize_i8(*v),
            Self::I16(v) => serializer.serialize_i16(*v),
            Self::I32(v) => serializer.serialize_i32(*v),
            Self::I64(v) => serializer.serialize_i64(*v),
            Self::Isize(v) => serializer.serialize_i64(*v as i64),
            Self::U8(v) => serializer.serialize_u8(*v),
            Self::U16(v) => serializer.serialize_u16(*v),
            Self::U32(v) => serializer.serialize_u32(*v),
            Self::U64(v) => serializer.serialize_u64(*v),
            Self::Usize(v) => serializer.serialize_u64(*v as u64),
            Self::F32(v) => serializer.serialize_f32(*v),
            Self::F64(v) => serializer.serialize_f64(*v),
            Self::String(v) => serializer.serialize_str(v),
            Self::List(items) => {
                let mut state = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    state.serialize_element(item)?;
                }
                state.end()
            }
            Self::Map(map) => serialize_entries(map, serializer),
            Self::Record(record) => record.serialize(serializer),
        }
    }
}

impl Serialize for RecordValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_entries(&to_map(self.as_record(), &Exclusions::empty()), serializer)
    }
}

#[cfg(test)]
mod tests {
    use crate::derive::Record;
    use crate::value::{GenericMap, RecordValue, Value};

    #[derive(Record, Clone, PartialEq, Debug)]
    struct Point {
        #[record(alias = "X")]
        pub x: i16,
        hidden: bool,
    }

    #[test]
    fn scalars() {
        assert_eq!(serde_json::to_string(&Value::Nil).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Value::I8(-1)).unwrap(), "-1");
        assert_eq!(serde_json::to_string(&Value::Usize(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Value::from("a\"b")).unwrap(), r#""a\"b""#);
        assert_eq!(
            serde_json::to_string(&Value::List(vec![Value::Bool(true), Value::F64(0.5)])).unwrap(),
            "[true,0.5]"
        );
    }

    #[test]
    fn record_as_map() {
        let mut map = GenericMap::default();
        map.insert(
            "point".into(),
            Value::Record(RecordValue::new(Point { x: 2, hidden: true })),
        );

        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"point":{"X":2}}"#);
    }
}
