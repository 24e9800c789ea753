use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("Empty version string")]
    Empty,

    #[error("Empty component in version '{0}'")]
    EmptyComponent(String),

    #[error("Non-numeric component '{component}' in version '{version}'")]
    NonNumeric { version: String, component: String },

    #[error("Component '{component}' out of range in version '{version}'")]
    Overflow { version: String, component: String },

    #[error("Invalid pre-release tag '{tag}' in version '{version}'")]
    InvalidPrerelease { version: String, tag: String },
}
