//! Kerberos client settings and the owning client's logging hook.
//!
//! [`Settings`] is built once from an ordered list of [`SettingsOpt`] steps and
//! stays immutable afterwards. The [`Client`] owns it and forwards log calls to
//! the configured [`LogSink`], if any.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod client;
pub mod settings;
pub mod sink;

mod prelude;

pub use client::Client;
pub use settings::{
	Settings, SettingsBuilder, SettingsOpt, assume_pre_authentication, disable_pa_fx_fast, logger,
	pre_auth_etype, socks_addr,
};
pub use sink::{CALL_DEPTH, LogSink, TracingSink, WriterSink};

// vim: ts=4
