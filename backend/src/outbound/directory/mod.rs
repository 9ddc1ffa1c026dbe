//! Client directory adapters.

mod static_directory;

pub use static_directory::StaticClientDirectory;
