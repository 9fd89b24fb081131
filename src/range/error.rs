use std::num::ParseIntError;
use thiserror::Error;

/// Invalid range expression.
///
/// Every variant denotes a structurally malformed expression; use
/// [`RangeError::kind`] to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
	#[error("invalid range expression: unable to parse `{token}` in section {section}")]
	UnableToParse {
		section: usize,
		token: String,
		#[source]
		source: ParseIntError,
	},

	#[error("invalid range expression: open range in section {section} can only be the final section")]
	OpenRangeNotAtEnd { section: usize },

	#[error("invalid range expression: subrange `{text}` in section {section} can contain at most 2 elements")]
	TooManyParts { section: usize, text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeErrorKind {
	UnableToParse,
	OpenRangeNotAtEnd,
	TooManyParts,
}

impl RangeError {
	pub fn kind(&self) -> RangeErrorKind {
		match self {
			RangeError::UnableToParse { .. } => RangeErrorKind::UnableToParse,
			RangeError::OpenRangeNotAtEnd { .. } => RangeErrorKind::OpenRangeNotAtEnd,
			RangeError::TooManyParts { .. } => RangeErrorKind::TooManyParts,
		}
	}

	/// Position of the offending section in the expression, starting at 0.
	pub fn section(&self) -> usize {
		match self {
			RangeError::UnableToParse { section, .. }
			| RangeError::OpenRangeNotAtEnd { section }
			| RangeError::TooManyParts { section, .. } => *section,
		}
	}
}

/// Error returned by [`extract_range`](crate::extract_range).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
	#[error(transparent)]
	InvalidExpression(#[from] RangeError),

	#[error("index {index} is out of range for a sequence of length {len}")]
	IndexOutOfRange { index: i64, len: usize },
}
