//! Tracing subscriber setup for host applications

use crate::prelude::*;

/// Install a global `tracing` subscriber filtered by `RUST_LOG`.
///
/// Pair it with `kerbero::client::TracingSink` to see client log output.
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> KrbResult<()> {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.try_init()
		.map_err(|e| {
			error!("Failed to install tracing subscriber: {}", e);
			Error::Internal(format!("tracing subscriber: {}", e))
		})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_second_init_fails() {
		// Whichever call comes first may succeed; a repeat never does
		let _ = init_tracing();
		assert!(matches!(init_tracing(), Err(Error::Internal(_))));
	}
}

// vim: ts=4
