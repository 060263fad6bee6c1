//! Test log sinks

use parking_lot::Mutex;
use std::panic::Location;

use kerbero::client::LogSink;

/// One message as seen by a sink
#[derive(Debug, Clone)]
pub struct Record {
	pub call_depth: usize,
	pub caller: &'static Location<'static>,
	pub message: String,
}

/// Sink that keeps every message it receives
#[derive(Default)]
pub struct CapturingSink {
	records: Mutex<Vec<Record>>,
}

impl CapturingSink {
	pub fn records(&self) -> Vec<Record> {
		self.records.lock().clone()
	}

	pub fn messages(&self) -> Vec<String> {
		self.records.lock().iter().map(|r| r.message.clone()).collect()
	}
}

impl LogSink for CapturingSink {
	fn output(&self, call_depth: usize, caller: &'static Location<'static>, message: &str) {
		self.records.lock().push(Record { call_depth, caller, message: message.to_string() });
	}
}

/// Initialize a tracing subscriber for test debugging
pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}
