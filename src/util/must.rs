use std::fmt::Display;

/// Unwraps `result`, panicking with the error message on failure.
///
/// Meant for values that are known to be valid, such as constant range
/// expressions or regular expressions.
///
/// ```
/// use hlp::{must, parse_range};
///
/// let indices = must(parse_range(4, "1-"));
/// assert_eq!(indices, [1, 2, 3]);
/// ```
#[track_caller]
pub fn must<T, E: Display>(result: Result<T, E>) -> T {
	match result {
		Ok(value) => value,
		Err(e) => panic!("{e}"),
	}
}
