//! User store adapters.
//!
//! Both adapters are passthroughs: they persist exactly the record the
//! admission service hands them and never inspect or alter it.
//!
//! # Example
//!
//! ```ignore
//! use user_admission::outbound::persistence::JsonLinesUserStore;
//!
//! let store = JsonLinesUserStore::new("users.jsonl");
//! store.add(&user).await?;
//! ```

mod in_memory_user_store;
mod json_lines_user_store;

pub use in_memory_user_store::InMemoryUserStore;
pub use json_lines_user_store::JsonLinesUserStore;
