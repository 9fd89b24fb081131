mod captures;
mod env;
mod must;

pub use captures::*;
pub use env::*;
pub use must::*;

/// Picks `a` when `condition` holds, `b` otherwise.
///
/// Both branches are evaluated.
pub fn ternary<T>(condition: bool, a: T, b: T) -> T {
	if condition {
		a
	} else {
		b
	}
}
