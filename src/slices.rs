//! Slice transformation helpers.
//!
//! Callbacks receive each element together with its position. The fallible
//! variants stop at the first error and return it, dropping anything
//! collected so far.
use std::{collections::HashMap, hash::Hash};

pub use crate::range::extract_range;

pub fn filter_map_err<T, R, E, F>(items: &[T], mut f: F) -> Result<Vec<R>, E>
where
	F: FnMut(&T, usize) -> Result<Option<R>, E>,
{
	let mut out = Vec::new();

	for (i, item) in items.iter().enumerate() {
		if let Some(r) = f(item, i)? {
			out.push(r)
		}
	}

	Ok(out)
}

pub fn filter_map<T, R, F>(items: &[T], mut f: F) -> Vec<R>
where
	F: FnMut(&T, usize) -> Option<R>,
{
	items
		.iter()
		.enumerate()
		.filter_map(|(i, item)| f(item, i))
		.collect()
}

pub fn map_err<T, R, E, F>(items: &[T], mut f: F) -> Result<Vec<R>, E>
where
	F: FnMut(&T, usize) -> Result<R, E>,
{
	items
		.iter()
		.enumerate()
		.map(|(i, item)| f(item, i))
		.collect()
}

pub fn map<T, R, F>(items: &[T], mut f: F) -> Vec<R>
where
	F: FnMut(&T, usize) -> R,
{
	items
		.iter()
		.enumerate()
		.map(|(i, item)| f(item, i))
		.collect()
}

pub fn filter_err<T, E, F>(items: &[T], mut f: F) -> Result<Vec<T>, E>
where
	T: Clone,
	F: FnMut(&T, usize) -> Result<bool, E>,
{
	filter_map_err(items, |item, i| Ok(f(item, i)?.then(|| item.clone())))
}

pub fn filter<T, F>(items: &[T], mut f: F) -> Vec<T>
where
	T: Clone,
	F: FnMut(&T, usize) -> bool,
{
	filter_map(items, |item, i| f(item, i).then(|| item.clone()))
}

/// Concatenates `lists` into a single vector.
pub fn flatten<T: Clone, L: AsRef<[T]>>(lists: &[L]) -> Vec<T> {
	let len = lists.iter().map(|l| l.as_ref().len()).sum();
	let mut out = Vec::with_capacity(len);

	for l in lists {
		out.extend_from_slice(l.as_ref())
	}

	out
}

/// Builds a vector of `count` elements generated from their position.
pub fn fill_with<T, F: FnMut(usize) -> T>(count: usize, f: F) -> Vec<T> {
	(0..count).map(f).collect()
}

pub fn fill<T: Clone>(count: usize, value: T) -> Vec<T> {
	vec![value; count]
}

/// Splits `items` into chunks of `chunk` elements.
///
/// The last chunk holds whatever remains, and is empty when `items` is.
/// A `chunk` of `0` puts everything in one chunk.
pub fn batch<T: Clone>(items: &[T], chunk: usize) -> Vec<Vec<T>> {
	if items.is_empty() || chunk == 0 {
		return vec![items.to_vec()];
	}

	items.chunks(chunk).map(<[T]>::to_vec).collect()
}

/// Groups `items` by key, keeping their relative order inside each group.
pub fn group_by<T, K, F>(items: &[T], mut key: F) -> HashMap<K, Vec<T>>
where
	T: Clone,
	K: Eq + Hash,
	F: FnMut(&T) -> K,
{
	let mut out: HashMap<K, Vec<T>> = HashMap::new();

	for item in items {
		out.entry(key(item)).or_default().push(item.clone())
	}

	out
}

pub fn any<T, F: FnMut(&T) -> bool>(items: &[T], f: F) -> bool {
	items.iter().any(f)
}

pub fn all<T, F: FnMut(&T) -> bool>(items: &[T], f: F) -> bool {
	items.iter().all(f)
}

/// Position of the first element matching `f`.
pub fn first<T, F: FnMut(&T) -> bool>(items: &[T], f: F) -> Option<usize> {
	items.iter().position(f)
}

/// Keeps the element for which `better(candidate, best)` last held.
///
/// Ties keep the earliest element.
fn best_by<T: Clone, F: FnMut(&T, &T) -> bool>(items: &[T], mut better: F) -> Option<T> {
	let (first, rest) = items.split_first()?;
	let mut best = first;

	for item in rest {
		if better(item, best) {
			best = item
		}
	}

	Some(best.clone())
}

/// Largest element according to `greater(candidate, highest)`.
pub fn max_by<T: Clone, F: FnMut(&T, &T) -> bool>(items: &[T], greater: F) -> Option<T> {
	best_by(items, greater)
}

pub fn max<T: Clone + PartialOrd>(items: &[T]) -> Option<T> {
	best_by(items, |a, b| a > b)
}

/// Smallest element according to `less(candidate, lowest)`.
pub fn min_by<T: Clone, F: FnMut(&T, &T) -> bool>(items: &[T], less: F) -> Option<T> {
	best_by(items, less)
}

pub fn min<T: Clone + PartialOrd>(items: &[T]) -> Option<T> {
	best_by(items, |a, b| a < b)
}
