//! A toolbox of small, independent helpers.
//!
//! The centerpiece is a parser for *range expressions*, a compact way to
//! select positions in a sequence such as `"2,4-6,8-"`:
//!
//! ```
//! use hlp::{extract_range, parse_range};
//!
//! assert_eq!(parse_range(10, "2,4-6,8-").unwrap(), [2, 4, 5, 6, 8, 9]);
//!
//! let letters = ['a', 'b', 'c', 'd', 'e'];
//! assert_eq!(extract_range(&letters, "4,0-1").unwrap(), ['e', 'a', 'b']);
//! ```
//!
//! Malformed expressions are rejected with a [`RangeError`] telling what went
//! wrong and in which section:
//!
//! ```
//! use hlp::{parse_range, RangeErrorKind};
//!
//! let e = parse_range(10, "1-,2").unwrap_err();
//! assert_eq!(e.kind(), RangeErrorKind::OpenRangeNotAtEnd);
//! assert_eq!(e.section(), 0);
//! ```
//!
//! Around it live:
//!
//! - [`slices`] and [`maps`]: map/filter/reduce style helpers over slices and
//!   hash maps;
//! - [`set`]: a value set and a set keyed by an arbitrary function, both
//!   implementing the [`cc_traits`] collection traits;
//! - [`sql`]: connection waiting, transaction wrapping and row scanning over
//!   driver-agnostic traits;
//! - [`fs`] and [`testing`]: directory tree copy and comparison;
//! - a few utilities such as [`default_env`] and [`named_captures`].
pub mod fs;
pub mod maps;
mod range;
pub mod set;
pub mod slices;
pub mod sql;
pub mod testing;
mod util;

#[cfg(feature = "serde")]
mod serde;

pub use range::*;
pub use util::*;
