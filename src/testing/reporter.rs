/// Sink for the findings of [`compare_trees`](super::compare_trees).
pub trait Reporter {
	fn log(&mut self, message: &str);

	/// Marks the comparison as failed.
	fn fail(&mut self);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
	fn log(&mut self, message: &str) {
		(**self).log(message)
	}

	fn fail(&mut self) {
		(**self).fail()
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
	Log(String),
	Fail,
}

/// Reporter keeping every call, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
	calls: Vec<Call>,
}

impl RecordingReporter {
	pub fn new() -> RecordingReporter {
		Self::default()
	}

	pub fn calls(&self) -> &[Call] {
		&self.calls
	}

	pub fn failed(&self) -> bool {
		self.calls.contains(&Call::Fail)
	}

	pub fn messages(&self) -> impl Iterator<Item = &str> {
		self.calls.iter().filter_map(|call| match call {
			Call::Log(message) => Some(message.as_str()),
			Call::Fail => None,
		})
	}
}

impl Reporter for RecordingReporter {
	fn log(&mut self, message: &str) {
		self.calls.push(Call::Log(message.to_owned()))
	}

	fn fail(&mut self) {
		self.calls.push(Call::Fail)
	}
}
