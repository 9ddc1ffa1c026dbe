//! Outbound adapters implementing domain ports for external collaborators.
//!
//! - **directory**: client lookup backed by a JSON document
//! - **credit**: credit policy lookups over HTTP, or a fixed figure
//! - **persistence**: user stores (in-memory and JSON lines on disk)
//!
//! Adapters translate between collaborator representations and domain types.
//! They contain no admission logic.

pub mod credit;
pub mod directory;
mod fs;
pub mod persistence;
