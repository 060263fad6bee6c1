pub use kerbero_client::{Client, LogSink, Settings, SettingsBuilder, SettingsOpt};
pub use kerbero_types::error::{Error, KrbResult};

pub use tracing::{debug, error, info, trace, warn};

// vim: ts=4
