//! Log sinks
//!
//! A [`LogSink`] receives already formatted messages from [`Client::log`]
//! together with the source location of the code that made the call.
//!
//! [`Client::log`]: crate::Client::log

use parking_lot::Mutex;
use std::io::Write;
use std::panic::Location;
use tracing::Level;

use crate::prelude::*;

/// Caller-depth hint handed to sinks: one frame for the delegation wrapper,
/// one for the sink call itself.
pub const CALL_DEPTH: usize = 2;

/// Destination for the client's diagnostic output
pub trait LogSink: Send + Sync {
	/// Write one message.
	///
	/// `caller` is the location of the code that invoked the client's log
	/// call, not of the delegation wrapper. Write failures are the sink's
	/// own concern and are not reported back.
	fn output(&self, call_depth: usize, caller: &'static Location<'static>, message: &str);
}

/// Forwards messages to the `tracing` facade
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
	level: Level,
}

impl TracingSink {
	pub fn new(level: Level) -> Self {
		Self { level }
	}
}

impl Default for TracingSink {
	fn default() -> Self {
		Self::new(Level::INFO)
	}
}

impl LogSink for TracingSink {
	fn output(&self, call_depth: usize, caller: &'static Location<'static>, message: &str) {
		let file = caller.file();
		let line = caller.line();
		if self.level == Level::ERROR {
			error!(target: "kerbero::client", file, line, call_depth, "{}", message);
		} else if self.level == Level::WARN {
			warn!(target: "kerbero::client", file, line, call_depth, "{}", message);
		} else if self.level == Level::INFO {
			info!(target: "kerbero::client", file, line, call_depth, "{}", message);
		} else if self.level == Level::DEBUG {
			debug!(target: "kerbero::client", file, line, call_depth, "{}", message);
		} else {
			trace!(target: "kerbero::client", file, line, call_depth, "{}", message);
		}
	}
}

/// Line-oriented sink writing to any `Write` implementation
///
/// Each message becomes one line: `<prefix><file>:<line>: <message>`, the
/// location part only when enabled with [`WriterSink::with_location`].
pub struct WriterSink<W> {
	prefix: Box<str>,
	with_location: bool,
	writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
	pub fn new(writer: W) -> Self {
		Self { prefix: "".into(), with_location: false, writer: Mutex::new(writer) }
	}

	/// Text put in front of every line
	pub fn prefix(mut self, prefix: impl Into<Box<str>>) -> Self {
		self.prefix = prefix.into();
		self
	}

	/// Annotate every line with the caller's `file:line`
	pub fn with_location(mut self, with_location: bool) -> Self {
		self.with_location = with_location;
		self
	}

	/// Run `f` with exclusive access to the underlying writer
	pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
		let mut writer = self.writer.lock();
		f(&mut *writer)
	}

	pub fn into_inner(self) -> W {
		self.writer.into_inner()
	}

	fn format_line(&self, caller: &Location<'_>, message: &str) -> String {
		let mut line = String::with_capacity(self.prefix.len() + message.len() + 1);
		line.push_str(&self.prefix);
		if self.with_location {
			line.push_str(&format!("{}:{}: ", caller.file(), caller.line()));
		}
		line.push_str(message);
		if !line.ends_with('\n') {
			line.push('\n');
		}
		line
	}
}

impl<W: Write + Send> LogSink for WriterSink<W> {
	fn output(&self, _call_depth: usize, caller: &'static Location<'static>, message: &str) {
		let line = self.format_line(caller, message);
		let mut writer = self.writer.lock();
		if let Err(e) = writer.write_all(line.as_bytes()).and_then(|()| writer.flush()) {
			warn!("Log sink write failed: {}", e);
		}
	}
}

impl<W> std::fmt::Debug for WriterSink<W> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("WriterSink")
			.field("prefix", &self.prefix)
			.field("with_location", &self.with_location)
			.finish_non_exhaustive()
	}
}


// vim: ts=4
