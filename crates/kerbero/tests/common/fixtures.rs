//! Reusable test fixtures

use serde::Deserialize;

use kerbero::client::{
	SettingsOpt, assume_pre_authentication, disable_pa_fx_fast, pre_auth_etype, socks_addr,
};
use kerbero::etype;

/// The JSON dump of the settings, parsed back
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct JsonFlags {
	#[serde(rename = "DisablePAFXFast")]
	pub disable_pa_fx_fast: bool,
	#[serde(rename = "AssumePreAuthentication")]
	pub assume_pre_authentication: bool,
}

pub const SOCKS_ADDR: &str = "127.0.0.1:1080";

/// One option step per non-logger field, each set to a non-default value
pub fn non_default_opts() -> Vec<SettingsOpt> {
	vec![
		disable_pa_fx_fast(true),
		assume_pre_authentication(true),
		pre_auth_etype(etype::AES256_CTS_HMAC_SHA1_96),
		socks_addr(SOCKS_ADDR),
	]
}
