//! Provide [`HashSet`] based on [hashbrown]'s implementation.

use super::FixedHashState;

/// A [`HashSet`][hashbrown::HashSet] using [`FixedHashState`] as its default hasher.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;
