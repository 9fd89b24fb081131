//! Database conveniences.
//!
//! Nothing here talks to a database directly. Callers adapt their driver to
//! the [`Ping`], [`Begin`] and [`Transaction`] traits, and feed rows as
//! iterators of results.
mod rows;
mod transaction;
mod wait;

pub use rows::*;
pub use transaction::*;
pub use wait::*;
