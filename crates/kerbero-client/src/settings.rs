//! Client settings
//!
//! Optional values altering the client's protocol behavior. Every field
//! defaults to its zero value, which means "disabled / not configured".

use serde::Serialize;
use std::fmt::Debug;
use std::sync::Arc;

use crate::prelude::*;
use crate::sink::LogSink;

/// A single construction step, applied to a draft [`Settings`] in order
#[derive(Clone)]
pub enum SettingsOpt {
	/// Do not use PA_FX_FAST
	DisablePaFxFast(bool),
	/// Proactively pre-authenticate instead of waiting for the KDC to ask
	AssumePreAuthentication(bool),
	/// Encryption type requested during pre-authentication
	PreAuthEType(i32),
	/// SOCKS5 proxy address (`host:port`)
	SocksAddr(Box<str>),
	/// Destination for diagnostic output
	Logger(Arc<dyn LogSink>),
}

impl SettingsOpt {
	fn apply(self, settings: &mut Settings) {
		match self {
			SettingsOpt::DisablePaFxFast(b) => settings.disable_pa_fx_fast = b,
			SettingsOpt::AssumePreAuthentication(b) => settings.assume_pre_authentication = b,
			SettingsOpt::PreAuthEType(e) => settings.pre_auth_etype = e,
			SettingsOpt::SocksAddr(a) => settings.socks_addr = a,
			SettingsOpt::Logger(l) => settings.logger = Some(l),
		}
	}
}

impl Debug for SettingsOpt {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			SettingsOpt::DisablePaFxFast(b) => f.debug_tuple("DisablePaFxFast").field(b).finish(),
			SettingsOpt::AssumePreAuthentication(b) => {
				f.debug_tuple("AssumePreAuthentication").field(b).finish()
			}
			SettingsOpt::PreAuthEType(e) => f.debug_tuple("PreAuthEType").field(e).finish(),
			SettingsOpt::SocksAddr(a) => f.debug_tuple("SocksAddr").field(a).finish(),
			SettingsOpt::Logger(_) => f.write_str("Logger(..)"),
		}
	}
}

/// Configure the client to not use PA_FX_FAST
///
/// ```
/// use kerbero_client::{Settings, disable_pa_fx_fast};
/// let s = Settings::new([disable_pa_fx_fast(true)]);
/// assert!(s.disable_pa_fx_fast());
/// ```
pub fn disable_pa_fx_fast(b: bool) -> SettingsOpt {
	SettingsOpt::DisablePaFxFast(b)
}

/// Configure the client to assume pre-authentication is required
pub fn assume_pre_authentication(b: bool) -> SettingsOpt {
	SettingsOpt::AssumePreAuthentication(b)
}

/// Configure the pre-authentication encryption type (see `kerbero_types::etype`)
pub fn pre_auth_etype(e: i32) -> SettingsOpt {
	SettingsOpt::PreAuthEType(e)
}

/// Configure the client to route traffic through a SOCKS5 proxy
///
/// ```
/// use kerbero_client::{Settings, socks_addr};
/// let s = Settings::new([socks_addr("127.0.0.1:1080")]);
/// assert_eq!(s.socks_addr(), "127.0.0.1:1080");
/// ```
pub fn socks_addr(addr: impl Into<Box<str>>) -> SettingsOpt {
	SettingsOpt::SocksAddr(addr.into())
}

/// Configure the client with a log sink
pub fn logger(sink: Arc<dyn LogSink>) -> SettingsOpt {
	SettingsOpt::Logger(sink)
}

/// Optional client settings. Immutable once constructed.
#[derive(Clone, Default)]
pub struct Settings {
	disable_pa_fx_fast: bool,
	assume_pre_authentication: bool,
	pre_auth_etype: i32,
	socks_addr: Box<str>,
	logger: Option<Arc<dyn LogSink>>,
}

/// The part of [`Settings`] included in the JSON dump
#[derive(Serialize)]
struct JsonSettings {
	#[serde(rename = "DisablePAFXFast")]
	disable_pa_fx_fast: bool,
	#[serde(rename = "AssumePreAuthentication")]
	assume_pre_authentication: bool,
}

impl Settings {
	/// Create settings by applying `opts` in order to a zero-valued draft.
	/// A later step overwrites an earlier one targeting the same field.
	pub fn new(opts: impl IntoIterator<Item = SettingsOpt>) -> Self {
		let mut settings = Settings::default();
		for opt in opts {
			opt.apply(&mut settings);
		}
		settings
	}

	/// Create a builder for constructing Settings step by step
	pub fn builder() -> SettingsBuilder {
		SettingsBuilder::new()
	}

	/// Whether the client should disable the use of PA_FX_FAST
	pub fn disable_pa_fx_fast(&self) -> bool {
		self.disable_pa_fx_fast
	}

	/// Whether the client should proactively assume pre-authentication
	pub fn assume_pre_authentication(&self) -> bool {
		self.assume_pre_authentication
	}

	/// The pre-authentication encryption type (0 = not configured)
	pub fn pre_auth_etype(&self) -> i32 {
		self.pre_auth_etype
	}

	/// The SOCKS5 proxy address (empty = no proxy)
	pub fn socks_addr(&self) -> &str {
		&self.socks_addr
	}

	/// True if a SOCKS5 proxy address is configured. The address is not validated.
	pub fn socks_enabled(&self) -> bool {
		!self.socks_addr.is_empty()
	}

	pub fn logger(&self) -> Option<&Arc<dyn LogSink>> {
		self.logger.as_ref()
	}

	/// JSON representation of the settings.
	///
	/// Only the two boolean flags are included. The encryption type, the proxy
	/// address and the logger are never serialized.
	pub fn json(&self) -> KrbResult<String> {
		let js = JsonSettings {
			disable_pa_fx_fast: self.disable_pa_fx_fast,
			assume_pre_authentication: self.assume_pre_authentication,
		};
		Ok(serde_json::to_string_pretty(&js)?)
	}
}

impl Debug for Settings {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Settings")
			.field("disable_pa_fx_fast", &self.disable_pa_fx_fast)
			.field("assume_pre_authentication", &self.assume_pre_authentication)
			.field("pre_auth_etype", &self.pre_auth_etype)
			.field("socks_addr", &self.socks_addr)
			.field("logger", &self.logger.is_some())
			.finish()
	}
}

/// Builder for Settings with fluent API. Steps are recorded in call order
/// and applied by [`SettingsBuilder::build`].
#[derive(Debug, Default)]
pub struct SettingsBuilder {
	opts: Vec<SettingsOpt>,
}

impl SettingsBuilder {
	pub fn new() -> Self {
		Self { opts: Vec::new() }
	}

	pub fn disable_pa_fx_fast(self, b: bool) -> Self {
		self.opt(SettingsOpt::DisablePaFxFast(b))
	}

	pub fn assume_pre_authentication(self, b: bool) -> Self {
		self.opt(SettingsOpt::AssumePreAuthentication(b))
	}

	pub fn pre_auth_etype(self, e: i32) -> Self {
		self.opt(SettingsOpt::PreAuthEType(e))
	}

	pub fn socks_addr(self, addr: impl Into<Box<str>>) -> Self {
		self.opt(SettingsOpt::SocksAddr(addr.into()))
	}

	pub fn logger(self, sink: Arc<dyn LogSink>) -> Self {
		self.opt(SettingsOpt::Logger(sink))
	}

	/// Append a raw construction step
	pub fn opt(mut self, opt: SettingsOpt) -> Self {
		self.opts.push(opt);
		self
	}

	pub fn build(self) -> Settings {
		Settings::new(self.opts)
	}
}


// vim: ts=4
