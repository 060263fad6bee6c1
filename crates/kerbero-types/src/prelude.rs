pub use crate::error::{Error, KrbResult};

pub use tracing::{debug, error, info, trace, warn};

// vim: ts=4
