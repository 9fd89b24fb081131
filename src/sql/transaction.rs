use thiserror::Error;

/// Open transaction.
pub trait Transaction {
	type Error;

	fn commit(self) -> Result<(), Self::Error>;

	fn rollback(self) -> Result<(), Self::Error>;
}

/// Connection able to open transactions.
pub trait Begin {
	type Error;
	type Transaction: Transaction<Error = Self::Error>;

	fn begin(&mut self) -> Result<Self::Transaction, Self::Error>;
}

#[derive(Debug, Error)]
pub enum TransactionError<E, W> {
	#[error("error opening transaction: {0}")]
	Begin(#[source] E),

	#[error("{0}")]
	Work(W),

	#[error("error rolling back: {source}, rollback caused by: {cause}")]
	Rollback {
		#[source]
		source: E,
		cause: W,
	},

	#[error("error committing: {0}")]
	Commit(#[source] E),
}

/// Runs `work` inside a transaction of `db` and returns its result.
///
/// The transaction is committed when `work` succeeds and rolled back when it
/// fails.
pub fn with_transaction_returning<D, R, W, F>(db: &mut D, work: F) -> Result<R, TransactionError<D::Error, W>>
where
	D: Begin,
	F: FnOnce(&mut D::Transaction) -> Result<R, W>,
{
	let mut tx = db.begin().map_err(TransactionError::Begin)?;

	match work(&mut tx) {
		Ok(out) => {
			tx.commit().map_err(TransactionError::Commit)?;
			Ok(out)
		}
		Err(cause) => match tx.rollback() {
			Ok(()) => Err(TransactionError::Work(cause)),
			Err(source) => Err(TransactionError::Rollback { source, cause }),
		},
	}
}

/// Same as [`with_transaction_returning`], for work without a result.
pub fn with_transaction<D, W, F>(db: &mut D, work: F) -> Result<(), TransactionError<D::Error, W>>
where
	D: Begin,
	F: FnOnce(&mut D::Transaction) -> Result<(), W>,
{
	with_transaction_returning(db, work)
}
