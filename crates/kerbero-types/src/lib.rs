//! Shared types for the Kerbero Kerberos client.
//!
//! This crate holds the error type and the Kerberos identifiers shared by the
//! client crate and host applications, so they can depend on them without
//! pulling in the client itself.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod error;
pub mod etype;
pub mod prelude;

// vim: ts=4
