use std::{hash::Hash, marker::PhantomData};

use serde::{
	de::Error,
	ser::SerializeSeq,
	Deserialize, Serialize,
};

use crate::{
	set::{KeyedSet, Set},
	RangeExpr,
};

impl Serialize for RangeExpr {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for RangeExpr {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		struct Visitor;

		impl<'de> serde::de::Visitor<'de> for Visitor {
			type Value = RangeExpr;

			fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
				write!(formatter, "range expression")
			}

			fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
			where
				E: Error,
			{
				v.parse().map_err(E::custom)
			}
		}

		deserializer.deserialize_str(Visitor)
	}
}

impl<T: Serialize> Serialize for Set<T> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.len()))?;

		for value in self {
			seq.serialize_element(value)?;
		}

		seq.end()
	}
}

impl<'de, T: Eq + Hash + Deserialize<'de>> Deserialize<'de> for Set<T> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		struct Visitor<T>(PhantomData<T>);

		impl<'de, T: Eq + Hash + Deserialize<'de>> serde::de::Visitor<'de> for Visitor<T> {
			type Value = Set<T>;

			fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
				write!(formatter, "a set")
			}

			fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
			where
				A: serde::de::SeqAccess<'de>,
			{
				let mut result = Set::new();

				while let Some(value) = seq.next_element()? {
					result.insert(value);
				}

				Ok(result)
			}
		}

		deserializer.deserialize_seq(Visitor(PhantomData))
	}
}

/// Keyed sets only serialize: the key function cannot be restored.
impl<T: Serialize, K, F> Serialize for KeyedSet<T, K, F>
where
	K: Eq + Hash,
	F: Fn(&T) -> K,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.len()))?;

		for value in self.iter() {
			seq.serialize_element(value)?;
		}

		seq.end()
	}
}
