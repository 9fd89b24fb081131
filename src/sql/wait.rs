use std::{
	thread,
	time::{Duration, Instant},
};
use thiserror::Error;

/// Connection that can be checked for liveness.
pub trait Ping {
	type Error: std::error::Error;

	fn ping(&mut self) -> Result<(), Self::Error>;
}

/// Configuration of [`wait_for_connectable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
	/// Time after which to give up. `None` waits forever.
	pub timeout: Option<Duration>,

	/// First delay of the Fibonacci backoff.
	pub initial_delay: Duration,
}

impl WaitOptions {
	pub fn new() -> WaitOptions {
		WaitOptions {
			timeout: None,
			initial_delay: Duration::from_secs(1),
		}
	}

	pub fn with_timeout(self, timeout: Duration) -> WaitOptions {
		WaitOptions {
			timeout: Some(timeout),
			..self
		}
	}

	pub fn with_initial_delay(self, initial_delay: Duration) -> WaitOptions {
		WaitOptions {
			initial_delay,
			..self
		}
	}
}

impl Default for WaitOptions {
	fn default() -> Self {
		Self::new()
	}
}

#[derive(Debug, Error)]
pub enum WaitError<E> {
	#[error("unable to wait for db connectable: timed out after {attempts} attempts")]
	Timeout {
		attempts: usize,
		#[source]
		source: E,
	},
}

/// Fibonacci backoff: `d, d, 2d, 3d, 5d, ...`.
///
/// Saturates at [`Duration::MAX`].
#[derive(Debug, Clone)]
pub struct Fibonacci {
	current: Duration,
	next: Duration,
}

impl Fibonacci {
	pub fn new(base: Duration) -> Fibonacci {
		Fibonacci {
			current: base,
			next: base,
		}
	}
}

impl Iterator for Fibonacci {
	type Item = Duration;

	fn next(&mut self) -> Option<Duration> {
		let delay = self.current;
		let next = self.current.saturating_add(self.next);
		self.current = std::mem::replace(&mut self.next, next);
		Some(delay)
	}
}

/// Pings `db` until it answers, backing off between attempts.
///
/// Gives up with the last ping error once the next delay would run past
/// `options.timeout`. A timeout too large to represent never expires.
pub fn wait_for_connectable<P: Ping>(db: &mut P, options: &WaitOptions) -> Result<(), WaitError<P::Error>> {
	let deadline = options
		.timeout
		.and_then(|timeout| Instant::now().checked_add(timeout));
	let mut delays = Fibonacci::new(options.initial_delay);
	let mut attempts = 0;

	loop {
		attempts += 1;
		let e = match db.ping() {
			Ok(()) => {
				log::debug!("db event=connected attempts={attempts}");
				return Ok(());
			}
			Err(e) => e,
		};

		log::warn!("db event=ping_failed attempt={attempts} error={e}");

		let delay = delays.next().unwrap_or(Duration::MAX);
		if let Some(deadline) = deadline {
			if Instant::now().checked_add(delay).map_or(true, |wake| wake > deadline) {
				return Err(WaitError::Timeout {
					attempts,
					source: e,
				});
			}
		}

		thread::sleep(delay)
	}
}
