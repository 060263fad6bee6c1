//! Kerbero is a Kerberos authentication client.
//!
//! This crate bundles the client settings and its logging hook:
//!
//! - Settings built from an ordered list of options, immutable afterwards
//!     - PA_FX_FAST opt-out
//!     - proactive pre-authentication with a chosen encryption type
//!     - SOCKS5 proxy address
//!     - optional log sink
//! - Restricted JSON dump of the settings for diagnostics
//! - printf-style logging through the owning client
//!
//! ```
//! use kerbero::client::{Client, Settings, disable_pa_fx_fast, socks_addr};
//!
//! let cl = Client::new(Settings::new([disable_pa_fx_fast(true), socks_addr("127.0.0.1:1080")]));
//! assert!(cl.settings().disable_pa_fx_fast());
//! kerbero::client_log!(cl, "configured: {}", cl.settings().socks_addr());
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

// Re-export shared types from kerbero-types
pub use kerbero_types::error;
pub use kerbero_types::etype;

// Feature crate re-exports
pub use kerbero_client as client;
pub use kerbero_client::client_log;

// Local modules
pub mod logging;
pub mod prelude;

pub use crate::client::{Client, Settings, SettingsOpt};

// vim: ts=4
