//! Kerberos encryption type identifiers
//!
//! Assigned numbers from RFC 3961, 3962, 4757 and 8009. These are plain `i32`
//! values as carried on the wire; nothing here restricts which identifiers a
//! caller may configure.

pub const DES_CBC_CRC: i32 = 1;
pub const DES_CBC_MD5: i32 = 3;
pub const DES3_CBC_SHA1_KD: i32 = 16;
pub const AES128_CTS_HMAC_SHA1_96: i32 = 17;
pub const AES256_CTS_HMAC_SHA1_96: i32 = 18;
pub const AES128_CTS_HMAC_SHA256_128: i32 = 19;
pub const AES256_CTS_HMAC_SHA384_192: i32 = 20;
pub const RC4_HMAC: i32 = 23;
pub const RC4_HMAC_EXP: i32 = 24;

/// Standard name of an encryption type identifier, if it is a known one
///
/// # Examples
/// - `18` → `"aes256-cts-hmac-sha1-96"`
/// - `23` → `"rc4-hmac"`
/// - `0` → `None` (unset)
pub fn name(etype: i32) -> Option<&'static str> {
	match etype {
		DES_CBC_CRC => Some("des-cbc-crc"),
		DES_CBC_MD5 => Some("des-cbc-md5"),
		DES3_CBC_SHA1_KD => Some("des3-cbc-sha1-kd"),
		AES128_CTS_HMAC_SHA1_96 => Some("aes128-cts-hmac-sha1-96"),
		AES256_CTS_HMAC_SHA1_96 => Some("aes256-cts-hmac-sha1-96"),
		AES128_CTS_HMAC_SHA256_128 => Some("aes128-cts-hmac-sha256-128"),
		AES256_CTS_HMAC_SHA384_192 => Some("aes256-cts-hmac-sha384-192"),
		RC4_HMAC => Some("rc4-hmac"),
		RC4_HMAC_EXP => Some("rc4-hmac-exp"),
		_ => None,
	}
}


// vim: ts=4
