//! Set containers.
//!
//! [`Set`] identifies elements by their own `Eq + Hash` implementation.
//! [`KeyedSet`] identifies them through a key function, for element types
//! that are not hashable themselves or whose identity is only a part of them.
pub mod hashed;
pub mod keyed;

pub use hashed::Set;
pub use keyed::KeyedSet;
