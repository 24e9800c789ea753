//! Version freshness layer
//!
//! This module asks a remote registry for the latest published release,
//! compares it with the running one, and reports when the running one is
//! older. Every failure degrades to "nothing to report".
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Registry  │────▶│   Checker   │────▶│    Sink     │
//! │   (fetch)   │     │  (compare)  │     │   (emit)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │ Registries  │     │VersionString│
//! │   (http)    │     │(version cmp)│
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Orchestrates a single freshness check
//! - [`registry`]: Registry trait for querying release metadata
//! - [`registries`]: Concrete registry implementations (HTTP)
//! - [`sink`]: Advisory type and its destinations
//! - [`version_string`]: Version parsing and total ordering
//! - [`error`]: Error types for registry queries and version parsing
//! - [`types`]: Request and response values

pub mod checker;
pub mod error;
pub mod registries;
pub mod registry;
pub mod sink;
pub mod types;
pub mod version_string;
