//! The client owning the settings

use std::fmt;
use std::panic::Location;

use crate::prelude::*;
use crate::settings::Settings;
use crate::sink::CALL_DEPTH;

/// Kerberos client. Holds its [`Settings`] exclusively for its lifetime.
#[derive(Debug)]
pub struct Client {
	settings: Settings,
}

impl Client {
	pub fn new(settings: Settings) -> Self {
		debug!(
			"Client created: disable_pa_fx_fast={} assume_pre_authentication={} pre_auth_etype={} socks={}",
			settings.disable_pa_fx_fast(),
			settings.assume_pre_authentication(),
			settings.pre_auth_etype(),
			settings.socks_enabled()
		);
		Self { settings }
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	/// Write to the configured log sink, if there is one.
	///
	/// Without a sink this does nothing, not even formatting. The sink sees the
	/// location of the caller of this method. Prefer the [`client_log!`] macro.
	///
	/// [`client_log!`]: crate::client_log
	#[track_caller]
	pub fn log(&self, args: fmt::Arguments<'_>) {
		let Some(sink) = self.settings.logger() else {
			return;
		};
		let formatted;
		let message = match args.as_str() {
			Some(s) => s,
			None => {
				formatted = args.to_string();
				&formatted
			}
		};
		sink.output(CALL_DEPTH, Location::caller(), message);
	}
}

/// printf-style logging through a [`Client`]
///
/// ```
/// use kerbero_client::{Client, Settings, client_log};
/// let cl = Client::new(Settings::default());
/// client_log!(cl, "x={}", 5);
/// ```
#[macro_export]
macro_rules! client_log {
	($client:expr, $($arg:tt)+) => {
		$client.log(::std::format_args!($($arg)+))
	};
}


// vim: ts=4
