//! Registry implementations for querying release metadata

pub mod http;

pub use http::RegistryClient;
