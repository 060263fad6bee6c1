pub use kerbero_types::prelude::*;

// vim: ts=4
