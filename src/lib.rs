//! Typed data contracts for the plugin resource of a Kong-style gateway
//! admin API: the record exchanged with the API, the paged list wrapper,
//! the request query parameters, and the declarative config-file form of
//! the same record.
//!
//! Transport, authentication, and retries belong to the surrounding
//! client; this crate only defines the shapes on the wire.

pub mod decl;
pub mod error;
pub mod params;
pub mod plugin;

pub use decl::PluginDecl;
pub use error::DataError;
pub use params::PluginRequestParams;
pub use plugin::{Plugin, PluginList};
