use std::convert::Infallible;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError<E, P> {
	#[error("error scanning: {0}")]
	Scan(#[source] E),

	#[error("error processing: {0}")]
	Process(#[source] P),
}

/// Feeds each scanned row to `process`, stopping at the first scan or
/// processing error.
pub fn for_each_row<I, T, E, P, F>(rows: I, mut process: F) -> Result<(), ScanError<E, P>>
where
	I: IntoIterator<Item = Result<T, E>>,
	F: FnMut(T) -> Result<(), P>,
{
	for row in rows {
		let row = row.map_err(ScanError::Scan)?;
		process(row).map_err(ScanError::Process)?;
	}

	Ok(())
}

/// Collects every scanned row.
pub fn scan_rows<I, T, E>(rows: I) -> Result<Vec<T>, E>
where
	I: IntoIterator<Item = Result<T, E>>,
{
	let mut out = Vec::new();

	for_each_row(rows, |row| {
		out.push(row);
		Ok::<_, Infallible>(())
	})
	.map_err(|e| match e {
		ScanError::Scan(e) => e,
		ScanError::Process(never) => match never {},
	})?;

	Ok(out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RowCountError {
	#[error("not found")]
	NotFound,

	#[error("unexpected row count: expected {expected}, got {actual}")]
	UnexpectedRowCount { expected: usize, actual: usize },
}

/// Checks that a query returned exactly `expected` rows.
///
/// No rows at all when some were expected is reported as
/// [`RowCountError::NotFound`].
pub fn require_exact<T>(rows: Vec<T>, expected: usize) -> Result<Vec<T>, RowCountError> {
	match rows.len() {
		actual if actual == expected => Ok(rows),
		0 => Err(RowCountError::NotFound),
		actual => Err(RowCountError::UnexpectedRowCount { expected, actual }),
	}
}
