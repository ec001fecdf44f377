use core::fmt;

use rm_utils::contains_ignore_case;

/// Field names skipped by [`to_map`](crate::ops::to_map).
///
/// Names are compared with the field **name** (not its alias), ignoring case.
/// Flattened fields are never skipped; name their sub-fields instead.
///
/// # Examples
///
/// ```
/// use rm_reflect::ops::Exclusions;
///
/// let exclusions = Exclusions::new(["Password", "token"]);
///
/// assert!(exclusions.contains("password"));
/// assert!(exclusions.contains("TOKEN"));
/// assert!(!exclusions.contains("email"));
/// assert!(!Exclusions::empty().contains("password"));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Exclusions {
    names: Vec<String>,
}

impl Exclusions {
    /// Creates an empty set, nothing is skipped.
    #[inline]
    pub const fn empty() -> Self {
        Self { names: Vec::new() }
    }

    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds a name.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    /// Returns `true` if `name` equals one of the excluded names, ignoring case.
    ///
    /// An empty `name` never matches.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        contains_ignore_case(name, &self.names)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns the excluded names as given.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Exclusions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<S: Into<String>> Extend<S> for Exclusions {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

impl From<&[&str]> for Exclusions {
    #[inline]
    fn from(names: &[&str]) -> Self {
        Self::new(names.iter().copied())
    }
}

impl fmt::Debug for Exclusions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(&self.names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Exclusions;

    #[test]
    fn collect_and_extend() {
        let mut exclusions: Exclusions = ["Id"].into_iter().collect();
        exclusions.extend([String::from("secret")]);
        exclusions.insert("Token");

        assert_eq!(exclusions.len(), 3);
        assert!(exclusions.contains("ID"));
        assert!(exclusions.contains("SECRET"));
        assert!(exclusions.contains("token"));
        assert_eq!(exclusions.iter().collect::<Vec<_>>(), ["Id", "secret", "Token"]);
    }

    #[test]
    fn empty_name_never_matches() {
        let exclusions = Exclusions::from(&["", "a"][..]);
        assert!(!exclusions.contains(""));
        assert!(exclusions.contains("A"));
        assert!(Exclusions::empty().is_empty());
    }
}
