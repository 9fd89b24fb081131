use cc_traits::{Clear, Collection, Insert, Len};
use slab::Slab;
use std::{collections::HashMap, fmt, hash::Hash};

/// Set whose elements are identified by a key function.
///
/// Two values with the same key are the same element: inserting the second
/// one replaces the first. Values live in a slab, the key index maps each key
/// to its slot.
///
/// ```
/// use hlp::set::KeyedSet;
///
/// let mut set = KeyedSet::new(|s: &String| s.to_lowercase());
/// set.insert("Hello".to_owned());
/// assert!(set.contains(&"HELLO".to_owned()));
/// ```
#[derive(Clone)]
pub struct KeyedSet<T, K, F> {
	key_of: F,
	slots: Slab<T>,
	index: HashMap<K, usize>,
}

impl<T, K, F> KeyedSet<T, K, F>
where
	K: Eq + Hash,
	F: Fn(&T) -> K,
{
	pub fn new(key_of: F) -> Self {
		KeyedSet {
			key_of,
			slots: Slab::new(),
			index: HashMap::new(),
		}
	}

	pub fn with_values<I: IntoIterator<Item = T>>(key_of: F, values: I) -> Self {
		let mut set = Self::new(key_of);
		set.insert_all(values);
		set
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	/// Key of `value` under this set's key function.
	pub fn key(&self, value: &T) -> K {
		(self.key_of)(value)
	}

	/// Adds a value, returning the value it replaced if one with the same key
	/// was present.
	pub fn insert(&mut self, value: T) -> Option<T> {
		let key = self.key(&value);
		match self.index.get(&key) {
			Some(&slot) => Some(std::mem::replace(&mut self.slots[slot], value)),
			None => {
				let slot = self.slots.insert(value);
				self.index.insert(key, slot);
				None
			}
		}
	}

	pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
		for value in values {
			self.insert(value);
		}
	}

	pub fn contains(&self, value: &T) -> bool {
		self.contains_key(&self.key(value))
	}

	pub fn contains_key(&self, key: &K) -> bool {
		self.index.contains_key(key)
	}

	pub fn get(&self, key: &K) -> Option<&T> {
		self.index.get(key).map(|&slot| &self.slots[slot])
	}

	/// Removes the element sharing `value`'s key.
	pub fn remove(&mut self, value: &T) -> Option<T> {
		let key = self.key(value);
		self.remove_key(&key)
	}

	pub fn remove_key(&mut self, key: &K) -> Option<T> {
		let slot = self.index.remove(key)?;
		Some(self.slots.remove(slot))
	}

	pub fn clear(&mut self) {
		self.slots.clear();
		self.index.clear();
	}

	/// Iterates over the elements in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
		self.slots.iter().map(|(_, value)| value)
	}

	pub fn to_vec(&self) -> Vec<T>
	where
		T: Clone,
	{
		self.iter().cloned().collect()
	}

	fn filtered(&self, mut keep: impl FnMut(&T) -> bool) -> Self
	where
		T: Clone,
		F: Clone,
	{
		let mut out = Self::new(self.key_of.clone());
		out.insert_all(self.iter().filter(|value| keep(*value)).cloned());
		out
	}

	/// Elements of `self` whose key is also in `other`.
	pub fn intersection(&self, other: &Self) -> Self
	where
		T: Clone,
		F: Clone,
	{
		self.filtered(|value| other.contains(value))
	}

	/// Elements of `self` whose key is not in `other`.
	pub fn difference(&self, other: &Self) -> Self
	where
		T: Clone,
		F: Clone,
	{
		self.filtered(|value| !other.contains(value))
	}

	/// Elements of both sets. On a key collision the value from `other` wins.
	pub fn union(&self, other: &Self) -> Self
	where
		T: Clone,
		F: Clone,
	{
		let mut out = self.filtered(|_| true);
		out.insert_all(other.iter().cloned());
		out
	}

	pub fn symmetric_difference(&self, other: &Self) -> Self
	where
		T: Clone,
		F: Clone,
	{
		let mut out = self.difference(other);
		out.insert_all(other.iter().filter(|value| !self.contains(*value)).cloned());
		out
	}
}

impl<T: fmt::Debug, K, F> fmt::Debug for KeyedSet<T, K, F> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_set()
			.entries(self.slots.iter().map(|(_, value)| value))
			.finish()
	}
}

impl<T, K, F> Extend<T> for KeyedSet<T, K, F>
where
	K: Eq + Hash,
	F: Fn(&T) -> K,
{
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.insert_all(iter)
	}
}

impl<T, K, F> Collection for KeyedSet<T, K, F> {
	type Item = T;
}

impl<T, K, F> Len for KeyedSet<T, K, F> {
	fn len(&self) -> usize {
		self.slots.len()
	}

	fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}
}

impl<T, K, F> Insert for KeyedSet<T, K, F>
where
	K: Eq + Hash,
	F: Fn(&T) -> K,
{
	type Output = Option<T>;

	fn insert(&mut self, element: T) -> Option<T> {
		KeyedSet::insert(self, element)
	}
}

impl<T, K, F> Clear for KeyedSet<T, K, F> {
	fn clear(&mut self) {
		self.slots.clear();
		self.index.clear();
	}
}
