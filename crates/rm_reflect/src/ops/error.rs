use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// A enumeration of all error outcomes of [`from_map`](crate::ops::from_map)
/// and [`value_to_map`](crate::ops::value_to_map).
///
/// `record` is the short type name of the record being assigned, the one
/// passed to `from_map` even when the field is promoted from an embedded record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertError {
    /// No field of the record, promoted fields included, has this name.
    #[error("no such field `{field}` in `{record}`")]
    NoSuchField { record: &'static str, field: String },

    /// The field exists but cannot be assigned: it is unexported, or it
    /// belongs to an embedded record that is `None`.
    #[error("field `{field}` of `{record}` cannot be set")]
    NotSettable { record: &'static str, field: String },

    /// The value does not hold exactly the declared type of the field.
    #[error("field `{field}` of `{record}` expects `{expected}`, found `{found}`")]
    TypeMismatch {
        record: &'static str,
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The input is not a record.
    #[error("expected a record, found `{found}`")]
    InvalidInput { found: &'static str },
}

impl ConvertError {
    /// Returns the offending field or key, if the error concerns one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::NoSuchField { field, .. }
            | Self::NotSettable { field, .. }
            | Self::TypeMismatch { field, .. } => Some(field),
            Self::InvalidInput { .. } => None,
        }
    }
}
