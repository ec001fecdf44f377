use core::fmt;

use serde_core::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use rm_utils::hash::hash_map;

use crate::value::{GenericMap, Value};

/// A [`Visitor`] building a [`Value`] from any self-describing input.
struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any value")
    }

    #[inline]
    fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    #[inline]
    fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
        Ok(Value::I64(v))
    }

    #[inline]
    fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
        Ok(Value::U64(v))
    }

    #[inline]
    fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
        Ok(Value::F64(v))
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    #[inline]
    fn visit_string<E>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    #[inline]
    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Nil)
    }

    #[inline]
    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Nil)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or_default());
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut out: GenericMap = hash_map::with_capacity(map.size_hint().unwrap_or_default());
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            out.insert(key, value);
        }
        Ok(Value::Map(out))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::value::{GenericMap, Value};

    #[test]
    fn dynamic_kinds() {
        let value: Value =
            serde_json::from_str(r#"{"a": [1, -2, 1.5, "s", null, true], "b": {}}"#).unwrap();

        let Value::Map(map) = value else {
            panic!("expected a map");
        };
        assert_eq!(
            map["a"],
            Value::List(vec![
                Value::U64(1),
                Value::I64(-2),
                Value::F64(1.5),
                Value::from("s"),
                Value::Nil,
                Value::Bool(true),
            ])
        );
        assert_eq!(map["b"], Value::Map(GenericMap::default()));
    }

    #[test]
    fn generic_map_round_trip() {
        let mut map = GenericMap::default();
        map.insert("name".into(), Value::from("Ann"));
        map.insert("tags".into(), Value::List(vec![Value::from("x")]));
        map.insert("score".into(), Value::F64(2.5));

        let json = serde_json::to_string(&map).unwrap();
        let back: GenericMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
