use cc_traits::{Clear, Collection, Insert, Len};
use std::{
	collections::{hash_set, HashSet},
	hash::Hash,
};

/// Set of values identified by their own `Eq + Hash` implementation.
///
/// Set operations never modify their operands and return a new set.
#[derive(Debug, Clone)]
pub struct Set<T> {
	items: HashSet<T>,
}

impl<T> Set<T> {
	pub fn new() -> Set<T> {
		Set {
			items: HashSet::new(),
		}
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Iterates over the elements in unspecified order.
	pub fn iter(&self) -> hash_set::Iter<T> {
		self.items.iter()
	}

	pub fn clear(&mut self) {
		self.items.clear()
	}
}

impl<T: Eq + Hash> Set<T> {
	/// Adds a value, returning `false` if it was already present.
	pub fn insert(&mut self, value: T) -> bool {
		self.items.insert(value)
	}

	pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
		self.items.extend(values)
	}

	pub fn contains(&self, value: &T) -> bool {
		self.items.contains(value)
	}

	/// Removes a value, returning `false` if it was not present.
	pub fn remove(&mut self, value: &T) -> bool {
		self.items.remove(value)
	}

	/// Copies the elements out, in unspecified order.
	pub fn to_vec(&self) -> Vec<T>
	where
		T: Clone,
	{
		self.items.iter().cloned().collect()
	}

	/// Copies the elements out in ascending order.
	pub fn sorted(&self) -> Vec<T>
	where
		T: Clone + Ord,
	{
		let mut out = self.to_vec();
		out.sort();
		out
	}

	/// Elements present in both sets.
	pub fn intersection(&self, other: &Set<T>) -> Set<T>
	where
		T: Clone,
	{
		self.items.intersection(&other.items).cloned().collect()
	}

	/// Elements of `self` that are not in `other`.
	pub fn difference(&self, other: &Set<T>) -> Set<T>
	where
		T: Clone,
	{
		self.items.difference(&other.items).cloned().collect()
	}

	pub fn union(&self, other: &Set<T>) -> Set<T>
	where
		T: Clone,
	{
		self.items.union(&other.items).cloned().collect()
	}

	/// Elements present in exactly one of the two sets.
	pub fn symmetric_difference(&self, other: &Set<T>) -> Set<T>
	where
		T: Clone,
	{
		self.items
			.symmetric_difference(&other.items)
			.cloned()
			.collect()
	}
}

impl<T> Default for Set<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Eq + Hash> PartialEq for Set<T> {
	fn eq(&self, other: &Self) -> bool {
		self.items == other.items
	}
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Set {
			items: iter.into_iter().collect(),
		}
	}
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
	fn from(values: [T; N]) -> Self {
		values.into_iter().collect()
	}
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.items.extend(iter)
	}
}

impl<T> IntoIterator for Set<T> {
	type Item = T;
	type IntoIter = hash_set::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a Set<T> {
	type Item = &'a T;
	type IntoIter = hash_set::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl<T> Collection for Set<T> {
	type Item = T;
}

impl<T> Len for Set<T> {
	fn len(&self) -> usize {
		self.items.len()
	}

	fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl<T: Eq + Hash> Insert for Set<T> {
	type Output = bool;

	fn insert(&mut self, element: T) -> bool {
		self.items.insert(element)
	}
}

impl<T> Clear for Set<T> {
	fn clear(&mut self) {
		self.items.clear()
	}
}
