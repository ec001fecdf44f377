//! Case-insensitive string matching.
//!
//! Comparison folds both sides with [`char::to_lowercase`], so it is Unicode
//! aware and never allocates.

/// Returns `true` if `a` and `b` are equal after lowercasing.
///
/// # Examples
///
/// ```
/// use rm_utils::eq_ignore_case;
///
/// assert!(eq_ignore_case("Password", "PASSWORD"));
/// assert!(eq_ignore_case("Straße", "STRAßE"));
/// assert!(!eq_ignore_case("Password", "Passwort"));
/// ```
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Returns `true` if any entry of `targets` equals `search`, ignoring case.
///
/// An empty `search` never matches, and neither does an empty `targets`.
///
/// # Examples
///
/// ```
/// use rm_utils::contains_ignore_case;
///
/// assert!(contains_ignore_case("password", ["Email", "PASSWORD"]));
/// assert!(!contains_ignore_case("", [""]));
/// ```
pub fn contains_ignore_case<I>(search: &str, targets: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    if search.is_empty() {
        return false;
    }
    targets
        .into_iter()
        .any(|target| eq_ignore_case(search, target.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::{contains_ignore_case, eq_ignore_case};

    #[test]
    fn eq_is_case_insensitive() {
        assert!(eq_ignore_case("", ""));
        assert!(eq_ignore_case("UserName", "username"));
        assert!(!eq_ignore_case("user", "username"));
    }

    #[test]
    fn contains_rejects_empty_input() {
        let none: [&str; 0] = [];
        assert!(!contains_ignore_case("name", none));
        assert!(!contains_ignore_case("", ["name", ""]));
    }

    #[test]
    fn contains_finds_any_position() {
        let targets = ["Id", "Email", "Password"];
        assert!(contains_ignore_case("ID", targets));
        assert!(contains_ignore_case("password", targets));
        assert!(!contains_ignore_case("Pass", targets));
    }
}
