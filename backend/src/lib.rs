//! User admission library.
//!
//! Decides whether a candidate becomes a registered user of a client
//! organisation. The decision lives in [`domain`]; [`outbound`] holds the
//! adapters for the client directory, the credit policy service and the user
//! store; [`config`] wires them from the environment.

pub mod config;
pub mod domain;
pub mod outbound;
