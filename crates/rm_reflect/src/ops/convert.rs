use core::any::TypeId;
use std::collections::VecDeque;

use rm_utils::hash::{HashSet, hash_map};

use crate::cfg;
use crate::info::{FieldInfo, RecordInfo};
use crate::ops::{ConvertError, Exclusions, Record};
use crate::value::{GenericMap, Value};

// -----------------------------------------------------------------------------
// ToMap

/// Writes the exported fields of `record` into a new flat map.
///
/// Fields are visited in declaration order:
///
/// - a flattened field merges the fields of its embedded record into the same
///   map, recursively; an embedded `None` writes nothing.
/// - a field whose name is in `exclusions` (ignoring case) is skipped.
/// - an unexported field is skipped.
/// - any other field is written under its [`key`](FieldInfo::key): the alias
///   if declared, otherwise the name.
///
/// When two fields share a key, the one visited last wins.
///
/// # Examples
///
/// ```
/// use rm_reflect::{derive::Record, ops::{Exclusions, to_map}, value::Value};
///
/// #[derive(Record)]
/// struct Base {
///     #[record(alias = "x_alias")]
///     pub x: i32,
/// }
///
/// #[derive(Record)]
/// struct User {
///     #[record(flatten)]
///     base: Base,
///     pub password: String,
/// }
///
/// let user = User { base: Base { x: 5 }, password: "secret".into() };
///
/// let map = to_map(&user, &Exclusions::new(["Password"]));
/// assert_eq!(map.len(), 1);
/// assert_eq!(map["x_alias"], Value::I32(5));
/// ```
pub fn to_map(record: &dyn Record, exclusions: &Exclusions) -> GenericMap {
    let info = record.info();
    log::trace!("to_map `{}`", info.type_path());

    let mut map = hash_map::with_capacity(info.field_len());
    write_fields(record, exclusions, &mut map);
    map
}

fn write_fields(record: &dyn Record, exclusions: &Exclusions, map: &mut GenericMap) {
    let info = record.info();

    for (index, field) in info.iter().enumerate() {
        if field.is_flatten() {
            if let Some(embedded) = record.embedded(index) {
                write_fields(embedded, exclusions, map);
            }
            continue;
        }

        if exclusions.contains(field.name()) || !field.is_exported() {
            cfg::debug! {
                log::trace!("skip `{}::{}`", info.type_name(), field.name());
            }
            continue;
        }

        let Some(value) = record.field_value(index) else {
            continue;
        };

        if map.insert(field.key().to_owned(), value).is_some() {
            log::debug!(
                "key `{}` overwritten by `{}::{}`",
                field.key(),
                info.type_name(),
                field.name(),
            );
        }
    }
}

/// Like [`to_map`], for a record held in a [`Value`].
///
/// # Errors
///
/// Returns [`ConvertError::InvalidInput`] if `value` is not a [`Value::Record`].
///
/// # Examples
///
/// ```
/// use rm_reflect::{ConvertError, Exclusions, Value, value_to_map};
///
/// let err = value_to_map(&Value::I32(1), &Exclusions::empty()).unwrap_err();
/// assert_eq!(err, ConvertError::InvalidInput { found: "i32" });
/// ```
pub fn value_to_map(value: &Value, exclusions: &Exclusions) -> Result<GenericMap, ConvertError> {
    match value {
        Value::Record(record) => Ok(to_map(record.as_record(), exclusions)),
        other => Err(ConvertError::InvalidInput {
            found: other.type_name(),
        }),
    }
}

// -----------------------------------------------------------------------------
// FromMap

/// Assigns every entry of `data` to the field of `record` with the same name.
///
/// Keys are matched against field **names**, exactly and case sensitively;
/// aliases are not considered. Fields promoted from flattened records can be
/// named too: direct fields are searched first, then embedded records level
/// by level, in declaration order.
///
/// Entries are applied in the iteration order of `data`, and the first
/// failure stops the operation. Fields assigned before it stay assigned.
///
/// # Errors
///
/// - [`ConvertError::NoSuchField`]: no field has the key as name.
/// - [`ConvertError::NotSettable`]: the field is unexported, or its embedded
///   record is `None`.
/// - [`ConvertError::TypeMismatch`]: the value does not hold exactly the
///   declared type, e.g. an `i32` for an `i64` field.
///
/// # Examples
///
/// ```
/// use rm_reflect::{derive::Record, ConvertError, GenericMap, Value, from_map};
///
/// #[derive(Record, Default)]
/// struct User {
///     pub age: i64,
/// }
///
/// let mut user = User::default();
///
/// let mut data = GenericMap::default();
/// data.insert("age".into(), Value::I64(30));
/// from_map(&mut user, &data).unwrap();
/// assert_eq!(user.age, 30);
///
/// data.insert("age".into(), Value::I32(5));
/// let err = from_map(&mut user, &data).unwrap_err();
/// assert!(matches!(err, ConvertError::TypeMismatch { expected: "i64", found: "i32", .. }));
/// ```
pub fn from_map(record: &mut dyn Record, data: &GenericMap) -> Result<(), ConvertError> {
    log::trace!("from_map `{}`, {} entries", record.info().type_path(), data.len());

    for (key, value) in data {
        assign(record, key, value.clone())?;
    }
    Ok(())
}

/// Like [`from_map`], moving the values out of `data` instead of cloning them.
pub fn from_map_owned(record: &mut dyn Record, data: GenericMap) -> Result<(), ConvertError> {
    log::trace!("from_map_owned `{}`, {} entries", record.info().type_path(), data.len());

    for (key, value) in data {
        assign(record, &key, value)?;
    }
    Ok(())
}

fn assign(record: &mut dyn Record, key: &str, value: Value) -> Result<(), ConvertError> {
    let info = record.info();

    let Some((embedded, index, field)) = resolve(info, key) else {
        return Err(ConvertError::NoSuchField {
            record: info.type_name(),
            field: key.to_owned(),
        });
    };

    let not_settable = || ConvertError::NotSettable {
        record: info.type_name(),
        field: key.to_owned(),
    };

    if !field.is_exported() {
        return Err(not_settable());
    }

    let mut target: &mut dyn Record = record;
    for step in embedded {
        let Some(next) = target.embedded_mut(step) else {
            return Err(not_settable());
        };
        target = next;
    }

    cfg::debug! {
        log::trace!("set `{}::{}` ({})", target.info().type_name(), key, value.kind());
    }

    target
        .set_field(index, value)
        .map_err(|value| ConvertError::TypeMismatch {
            record: info.type_name(),
            field: key.to_owned(),
            expected: field.type_name(),
            found: value.type_name(),
        })
}

/// Finds the field called `name`, breadth first through flattened records.
///
/// Returns the indices of the flattened fields leading from `info` to the
/// record holding the field, then the field index in that record and its info.
fn resolve(
    info: &'static RecordInfo,
    name: &str,
) -> Option<(Vec<usize>, usize, &'static FieldInfo)> {
    let mut visited: HashSet<TypeId> = HashSet::default();
    let mut queue = VecDeque::from([(info, Vec::new())]);

    while let Some((info, path)) = queue.pop_front() {
        if !visited.insert(info.ty_id()) {
            continue;
        }

        if let Some(index) = info.index_of(name) {
            return info.field_at(index).map(|field| (path, index, field));
        }

        for (index, field) in info.iter().enumerate() {
            if let Some(embedded) = field.embedded_info() {
                let mut path = path.clone();
                path.push(index);
                queue.push_back((embedded, path));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use crate::derive::Record;
    use crate::info::Typed;
    use crate::ops::{ConvertError, Exclusions, from_map, from_map_owned, to_map, value_to_map};
    use crate::value::{GenericMap, RecordValue, Value};

    #[derive(Record, Clone, PartialEq, Debug, Default)]
    struct Inner {
        #[record(alias = "x_alias")]
        pub x: i32,
        pub note: String,
    }

    #[derive(Record, Clone, PartialEq, Debug, Default)]
    struct Outer {
        #[record(flatten)]
        inner: Inner,
        pub id: u64,
    }

    #[derive(Record, Clone, PartialEq, Debug, Default)]
    struct Account {
        #[record(alias = "email")]
        pub email_address: String,
        pub password: String,
        pub age: i64,
        secret: String,
        pub(crate) internal: bool,
    }

    #[derive(Record, Clone, PartialEq, Debug, Default)]
    struct Collide {
        pub note: String,
        #[record(flatten)]
        inner: Inner,
    }

    #[derive(Record, Clone, PartialEq, Debug, Default)]
    struct Deep {
        #[record(flatten)]
        outer: Option<Box<Outer>>,
        pub level: u8,
    }

    #[derive(Record, Clone, PartialEq, Debug, Default)]
    struct Empty {
        hidden: i32,
    }

    #[derive(Record, Clone, PartialEq, Debug, Default)]
    struct Lists {
        pub tags: Vec<String>,
        pub nick: Option<String>,
        pub inner: Inner,
    }

    #[derive(Record, Clone, PartialEq, Debug, Default)]
    struct Wrapper<T: Clone + PartialEq + core::fmt::Debug + Default> {
        pub value: T,
    }

    fn map<const N: usize>(entries: [(&str, Value); N]) -> GenericMap {
        entries.into_iter().map(|(k, v)| (k.to_owned(), v)).collect()
    }

    #[test]
    fn flattened_fields_are_merged() {
        let outer = Outer {
            inner: Inner { x: 5, note: "n".into() },
            id: 9,
        };

        let map = to_map(&outer, &Exclusions::empty());

        assert_eq!(map.len(), 3);
        assert_eq!(map["x_alias"], Value::I32(5));
        assert_eq!(map["note"], Value::from("n"));
        assert_eq!(map["id"], Value::U64(9));
        assert!(!map.contains_key("inner"));
        assert!(!map.contains_key("x"));
    }

    #[test]
    fn nested_optional_embedding() {
        let deep = Deep {
            outer: Some(Box::new(Outer {
                inner: Inner { x: 1, note: String::new() },
                id: 2,
            })),
            level: 3,
        };
        let map = to_map(&deep, &Exclusions::empty());
        assert_eq!(map.len(), 4);
        assert_eq!(map["x_alias"], Value::I32(1));

        let map = to_map(&Deep::default(), &Exclusions::empty());
        assert_eq!(map, self::map([("level", Value::U8(0))]));
    }

    #[test]
    fn exclusions_ignore_case_and_alias() {
        let account = Account {
            email_address: "a@b.c".into(),
            password: "hunter2".into(),
            ..Default::default()
        };

        let map = to_map(&account, &Exclusions::new(["Password"]));
        assert!(!map.contains_key("password"));
        assert!(!map.contains_key("Password"));

        // Exclusions name the field, not its alias.
        let map = to_map(&account, &Exclusions::new(["EMAIL_ADDRESS"]));
        assert!(!map.contains_key("email"));
        let map = to_map(&account, &Exclusions::new(["email"]));
        assert!(map.contains_key("email"));
    }

    #[test]
    fn alias_takes_precedence() {
        let map = to_map(&Account::default(), &Exclusions::empty());

        assert!(map.contains_key("email"));
        assert!(!map.contains_key("email_address"));
    }

    #[test]
    fn unexported_fields_are_hidden() {
        let map = to_map(&Account::default(), &Exclusions::empty());

        assert_eq!(map.len(), 3);
        assert!(!map.contains_key("secret"));
        assert!(!map.contains_key("internal"));
    }

    #[test]
    fn last_write_wins() {
        let collide = Collide {
            note: "direct".into(),
            inner: Inner { x: 0, note: "embedded".into() },
        };

        let map = to_map(&collide, &Exclusions::empty());
        assert_eq!(map["note"], Value::from("embedded"));
    }

    #[test]
    fn empty_record_gives_empty_map() {
        let map = to_map(&Empty::default(), &Exclusions::empty());
        assert!(map.is_empty());
        assert_eq!(Empty::record_info().field_len(), 1);
    }

    #[test]
    fn exact_type_required() {
        let mut account = Account::default();

        let err = from_map(&mut account, &map([("age", Value::I32(5))])).unwrap_err();
        assert_eq!(
            err,
            ConvertError::TypeMismatch {
                record: "Account",
                field: "age".into(),
                expected: "i64",
                found: "i32",
            }
        );
        assert_eq!(account.age, 0);

        from_map(&mut account, &map([("age", Value::I64(5))])).unwrap();
        assert_eq!(account.age, 5);
    }

    #[test]
    fn first_failure_stops_assignment() {
        let mut account = Account::default();
        let data = map([
            ("age", Value::I64(5)),
            ("password", Value::I32(1)),
        ]);
        let order: Vec<&str> = data.keys().map(String::as_str).collect();

        let err = from_map(&mut account, &data).unwrap_err();
        assert_eq!(
            err,
            ConvertError::TypeMismatch {
                record: "Account",
                field: "password".into(),
                expected: "alloc::string::String",
                found: "i32",
            }
        );
        assert!(account.password.is_empty());

        // Entries before the failing one stay assigned, later ones are never applied.
        let age_first = order == ["age", "password"];
        assert_eq!(account.age, if age_first { 5 } else { 0 });
    }

    #[test]
    fn unknown_key_stops_assignment() {
        let mut account = Account::default();
        let data = map([
            ("age", Value::I64(5)),
            ("email_address", Value::from("a@b.c")),
            ("Nonexistent", Value::I32(1)),
        ]);
        let failing = data
            .keys()
            .position(|key| key == "Nonexistent")
            .unwrap_or_default();
        let applied: Vec<&str> = data.keys().take(failing).map(String::as_str).collect();

        let err = from_map(&mut account, &data).unwrap_err();
        assert_eq!(err.field(), Some("Nonexistent"));

        assert_eq!(account.age, if applied.contains(&"age") { 5 } else { 0 });
        assert_eq!(
            account.email_address.is_empty(),
            !applied.contains(&"email_address")
        );
    }

    #[test]
    fn unknown_key() {
        let mut account = Account::default();
        let err = from_map(&mut account, &map([("Nonexistent", Value::I32(1))])).unwrap_err();

        assert_eq!(err.field(), Some("Nonexistent"));
        assert!(matches!(err, ConvertError::NoSuchField { record: "Account", .. }));

        // Names are case sensitive.
        let err = from_map(&mut account, &map([("Age", Value::I64(1))])).unwrap_err();
        assert!(matches!(err, ConvertError::NoSuchField { .. }));
    }

    #[test]
    fn unexported_is_not_settable() {
        let mut account = Account::default();

        for key in ["secret", "internal"] {
            let err = from_map(&mut account, &map([(key, Value::Nil)])).unwrap_err();
            assert!(matches!(err, ConvertError::NotSettable { .. }));
            assert_eq!(err.field(), Some(key));
        }
    }

    #[test]
    fn aliased_round_trip_fails() {
        let source = Account {
            email_address: "a@b.c".into(),
            age: 1,
            ..Default::default()
        };
        let mut target = Account::default();

        let err = from_map(&mut target, &to_map(&source, &Exclusions::empty())).unwrap_err();
        assert_eq!(
            err,
            ConvertError::NoSuchField {
                record: "Account",
                field: "email".into(),
            }
        );
    }

    #[test]
    fn unaliased_round_trip() {
        let source = Lists {
            tags: vec!["a".into(), "b".into()],
            nick: Some("n".into()),
            inner: Inner { x: 1, note: "z".into() },
        };
        let mut target = Lists::default();

        from_map_owned(&mut target, to_map(&source, &Exclusions::empty())).unwrap();
        assert_eq!(target, source);
    }

    #[test]
    fn promoted_fields_are_settable() {
        let mut outer = Outer::default();

        from_map(&mut outer, &map([("x", Value::I32(7)), ("id", Value::U64(1))])).unwrap();
        assert_eq!(outer.inner.x, 7);
        assert_eq!(outer.id, 1);

        // The alias of a promoted field is not a name.
        let err = from_map(&mut outer, &map([("x_alias", Value::I32(7))])).unwrap_err();
        assert!(matches!(err, ConvertError::NoSuchField { .. }));
    }

    #[test]
    fn direct_field_shadows_promoted() {
        let mut collide = Collide::default();

        from_map(&mut collide, &map([("note", Value::from("set"))])).unwrap();
        assert_eq!(collide.note, "set");
        assert!(collide.inner.note.is_empty());
    }

    #[test]
    fn nil_embedded_is_not_settable() {
        let mut deep = Deep::default();

        let err = from_map(&mut deep, &map([("id", Value::U64(1))])).unwrap_err();
        assert_eq!(
            err,
            ConvertError::NotSettable {
                record: "Deep",
                field: "id".into(),
            }
        );

        deep.outer = Some(Box::default());
        from_map(&mut deep, &map([("x", Value::I32(2))])).unwrap();
        assert_eq!(deep.outer.as_ref().map(|o| o.inner.x), Some(2));
    }

    #[test]
    fn embedded_record_replaced_by_name() {
        let mut deep = Deep::default();
        let outer = Outer { inner: Inner::default(), id: 4 };

        let data = map([("outer", Value::Record(RecordValue::new(outer.clone())))]);
        // `outer` is not exported.
        assert!(matches!(
            from_map(&mut deep, &data).unwrap_err(),
            ConvertError::NotSettable { .. }
        ));

        let mut lists = Lists::default();
        let data = map([("inner", Value::Record(RecordValue::new(outer)))]);
        let err = from_map(&mut lists, &data).unwrap_err();
        assert!(matches!(err, ConvertError::TypeMismatch { .. }));
    }

    #[test]
    fn option_and_list_fields() {
        let mut lists = Lists {
            nick: Some("old".into()),
            ..Default::default()
        };

        from_map(&mut lists, &map([("nick", Value::Nil)])).unwrap();
        assert_eq!(lists.nick, None);

        let tags = Value::List(vec![Value::from("a"), Value::I8(1)]);
        let err = from_map(&mut lists, &map([("tags", tags)])).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::TypeMismatch { found, .. } if found.starts_with("alloc::vec::Vec<")
        ));
    }

    #[test]
    fn generic_records() {
        let map = to_map(&Wrapper { value: 1.5_f32 }, &Exclusions::empty());
        assert_eq!(map["value"], Value::F32(1.5));

        let mut wrapper = Wrapper::<String>::default();
        from_map(&mut wrapper, &self::map([("value", Value::from("s"))])).unwrap();
        assert_eq!(wrapper.value, "s");

        assert!(Wrapper::<u8>::record_info().type_is::<Wrapper<u8>>());
        assert!(!Wrapper::<u16>::record_info().type_is::<Wrapper<u8>>());
    }

    #[test]
    fn value_to_map_requires_record() {
        let value = Value::Record(RecordValue::new(Inner { x: 2, note: String::new() }));
        let map = value_to_map(&value, &Exclusions::new(["note"])).unwrap();
        assert_eq!(map.len(), 1);

        let err = value_to_map(&Value::from("x"), &Exclusions::empty()).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidInput { .. }));
        assert_eq!(err.field(), None);
    }

    #[test]
    fn record_blank_and_display() {
        let blank = Value::Record(RecordValue::new(Inner::default()));
        assert!(blank.is_blank());

        let value = Value::Record(RecordValue::new(Inner { x: 1, note: "n".into() }));
        assert!(!value.is_blank());
        assert_eq!(value.to_string(), "Inner {note: n, x_alias: 1}");
    }
}
