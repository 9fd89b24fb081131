//! Range expressions.
//!
//! A range expression selects integer indices out of a sequence of known
//! length. It is a comma separated list of *sections*, each of which is either
//! a single index (`3`), a closed subrange (`4-6`) or, in final position only,
//! an open subrange (`8-`) that extends to the last index of the sequence.
//!
//! ```
//! use hlp::parse_range;
//!
//! assert_eq!(parse_range(10, "2,4-6,8-").unwrap(), [2, 4, 5, 6, 8, 9]);
//! ```
//!
//! Subranges are detected by the presence of a `-`, and the section is split on
//! every `-` it contains. As a consequence negative numbers cannot be written:
//! `-3` reads as the open range `3-`.
use range_traits::PartialEnum;
use std::{fmt, str::FromStr};

mod error;
mod section;

pub use error::*;
pub use section::*;

/// Parsed range expression.
///
/// Parsing performs every structural check, so an expression that parsed can
/// always be resolved against any sequence length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeExpr {
	sections: Vec<Section>,
}

impl RangeExpr {
	pub fn sections(&self) -> &[Section] {
		&self.sections
	}

	/// Resolves the expression against a sequence of `total_len` items.
	///
	/// Indices come out in section order, ascending within a subrange.
	/// They are not checked against `total_len`.
	pub fn indices(&self, total_len: usize) -> Indices<'_> {
		Indices {
			sections: self.sections.iter(),
			open_end: i64::try_from(total_len).map_or(i64::MAX, |len| len - 1),
			pending: None,
		}
	}
}

impl FromStr for RangeExpr {
	type Err = RangeError;

	fn from_str(expr: &str) -> Result<Self, RangeError> {
		let count = expr.split(',').count();
		let sections = expr
			.split(',')
			.enumerate()
			.map(|(i, text)| Section::parse(text, i, i + 1 == count))
			.collect::<Result<Vec<_>, _>>()?;

		Ok(RangeExpr { sections })
	}
}

impl fmt::Display for RangeExpr {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for (i, section) in self.sections.iter().enumerate() {
			if i > 0 {
				f.write_str(",")?;
			}

			fmt::Display::fmt(section, f)?;
		}

		Ok(())
	}
}

impl<'a> IntoIterator for &'a RangeExpr {
	type Item = &'a Section;
	type IntoIter = std::slice::Iter<'a, Section>;

	fn into_iter(self) -> Self::IntoIter {
		self.sections.iter()
	}
}

/// Iterator over the indices selected by a [`RangeExpr`].
pub struct Indices<'a> {
	sections: std::slice::Iter<'a, Section>,
	open_end: i64,

	/// Next index and inclusive end of the subrange being expanded.
	pending: Option<(i64, i64)>,
}

impl<'a> Iterator for Indices<'a> {
	type Item = i64;

	fn next(&mut self) -> Option<i64> {
		loop {
			if let Some((next, end)) = self.pending.take() {
				if next <= end {
					self.pending = next.succ().map(|succ| (succ, end));
					return Some(next);
				}
			}

			match self.sections.next()? {
				Section::Index(i) => return Some(*i),
				Section::Span { start, end } => self.pending = Some((*start, *end)),
				Section::Open { start } => self.pending = Some((*start, self.open_end)),
			}
		}
	}
}

impl<'a> std::iter::FusedIterator for Indices<'a> {}

/// Parses `expr` and resolves it against a sequence of `total_len` items.
///
/// Fails on the first malformed section; no partial result is returned.
pub fn parse_range(total_len: usize, expr: &str) -> Result<Vec<i64>, RangeError> {
	let expr: RangeExpr = expr.parse()?;
	Ok(expr.indices(total_len).collect())
}

/// Collects the elements of `items` selected by the range expression `expr`.
///
/// ```
/// use hlp::extract_range;
///
/// let fruits = ["apple", "banana", "cherry", "date", "egg", "fries", "grapes"];
/// assert_eq!(
/// 	extract_range(&fruits, "0,2,5-").unwrap(),
/// 	["apple", "cherry", "fries", "grapes"]
/// );
/// ```
pub fn extract_range<T: Clone>(items: &[T], expr: &str) -> Result<Vec<T>, ExtractError> {
	let expr: RangeExpr = expr.parse()?;
	let len = items.len();

	expr.indices(len)
		.map(|index| {
			usize::try_from(index)
				.ok()
				.and_then(|i| items.get(i))
				.cloned()
				.ok_or(ExtractError::IndexOutOfRange { index, len })
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn span_ending_at_max() {
		let expr: RangeExpr = format!("{}-{}", i64::MAX - 1, i64::MAX).parse().unwrap();
		assert_eq!(expr.indices(0).collect::<Vec<_>>(), [i64::MAX - 1, i64::MAX]);
	}

	#[test]
	fn open_range_on_empty_sequence() {
		assert_eq!(parse_range(0, "0-").unwrap(), Vec::<i64>::new());
	}

	#[test]
	fn indices_are_reusable() {
		let expr: RangeExpr = "1,3-".parse().unwrap();
		assert_eq!(expr.indices(5).collect::<Vec<_>>(), [1, 3, 4]);
		assert_eq!(expr.indices(4).collect::<Vec<_>>(), [1, 3]);
	}
}
