use super::RangeError;
use std::fmt;

/// One comma separated unit of a range expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
	/// `a`
	Index(i64),

	/// `a-b`, both bounds included.
	///
	/// Empty when `start > end`.
	Span { start: i64, end: i64 },

	/// `a-`, extending to the last index of the sequence.
	Open { start: i64 },
}

impl Section {
	/// Parses the section found at `position` in its expression.
	///
	/// Open ranges are only accepted when `last` is true.
	pub(crate) fn parse(text: &str, position: usize, last: bool) -> Result<Section, RangeError> {
		if !text.contains('-') {
			return parse_index(text, position).map(Section::Index);
		}

		let parts: Vec<&str> = text.split('-').collect();
		if parts.len() > 2 {
			return Err(RangeError::TooManyParts {
				section: position,
				text: text.to_owned(),
			});
		}

		let parts: Vec<&str> = parts.into_iter().filter(|part| !part.is_empty()).collect();
		match parts.as_slice() {
			[start] => {
				if !last {
					return Err(RangeError::OpenRangeNotAtEnd { section: position });
				}

				Ok(Section::Open {
					start: parse_index(start, position)?,
				})
			}
			[start, end] => Ok(Section::Span {
				start: parse_index(start, position)?,
				end: parse_index(end, position)?,
			}),
			// a lone `-`: the empty token never parses.
			_ => parse_index("", position).map(Section::Index),
		}
	}

	/// Index the section starts at.
	pub fn start(&self) -> i64 {
		match self {
			Section::Index(i) => *i,
			Section::Span { start, .. } | Section::Open { start } => *start,
		}
	}

	pub fn is_open(&self) -> bool {
		matches!(self, Section::Open { .. })
	}
}

fn parse_index(token: &str, position: usize) -> Result<i64, RangeError> {
	token.parse().map_err(|source| RangeError::UnableToParse {
		section: position,
		token: token.to_owned(),
		source,
	})
}

impl fmt::Display for Section {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Section::Index(i) => write!(f, "{i}"),
			Section::Span { start, end } => write!(f, "{start}-{end}"),
			Section::Open { start } => write!(f, "{start}-"),
		}
	}
}
