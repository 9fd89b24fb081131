//! Hash map helpers.
use std::{collections::HashMap, hash::Hash};

/// Builds a map from the `(key, value)` pairs produced for each element.
///
/// Stops at the first error. A repeated key keeps the last value.
pub fn map_from_slice_err<T, K, V, E, F>(items: &[T], mut f: F) -> Result<HashMap<K, V>, E>
where
	K: Eq + Hash,
	F: FnMut(&T, usize) -> Result<(K, V), E>,
{
	items
		.iter()
		.enumerate()
		.map(|(i, item)| f(item, i))
		.collect()
}

pub fn map_from_slice<T, K, V, F>(items: &[T], mut f: F) -> HashMap<K, V>
where
	K: Eq + Hash,
	F: FnMut(&T, usize) -> (K, V),
{
	items
		.iter()
		.enumerate()
		.map(|(i, item)| f(item, i))
		.collect()
}

/// Merges `maps` from left to right: later maps overwrite earlier ones.
pub fn assign<K, V, I>(maps: I) -> HashMap<K, V>
where
	K: Eq + Hash,
	I: IntoIterator<Item = HashMap<K, V>>,
{
	maps.into_iter().flatten().collect()
}

pub fn keys<K: Clone, V>(map: &HashMap<K, V>) -> Vec<K> {
	map.keys().cloned().collect()
}

pub fn values<K, V: Clone>(map: &HashMap<K, V>) -> Vec<V> {
	map.values().cloned().collect()
}

/// Swaps keys and values.
///
/// When several keys share a value, which one survives is unspecified.
pub fn invert<K, V>(map: &HashMap<K, V>) -> HashMap<V, K>
where
	K: Clone,
	V: Clone + Eq + Hash,
{
	map.iter().map(|(k, v)| (v.clone(), k.clone())).collect()
}
