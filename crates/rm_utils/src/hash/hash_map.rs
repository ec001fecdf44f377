//! Provide [`HashMap`] based on [hashbrown]'s implementation.

use super::FixedHashState;

/// A [`HashMap`][hashbrown::HashMap] using [`FixedHashState`] as its default hasher.
///
/// Construct it with [`Default::default`] or [`with_capacity`].
///
/// # Examples
///
/// ```
/// use rm_utils::hash::HashMap;
///
/// let mut map: HashMap<&str, i32> = HashMap::default();
/// map.insert("age", 5);
///
/// assert_eq!(map.get("age"), Some(&5));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// Creates an empty [`HashMap`] with at least the specified capacity.
#[inline]
pub fn with_capacity<K, V>(capacity: usize) -> HashMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, FixedHashState)
}
