use crate::domain::{BackendIdentifier, ProviderDomain};

#[derive(Debug, thiserror::Error)]
pub enum ProviderFactoryError {
    #[error("unsupported {domain} backend: {backend}")]
    UnsupportedBackend {
        domain: ProviderDomain,
        backend: String,
    },
    #[error("missing setting: {0} is required by the selected backend")]
    MissingSetting(&'static str),
}

impl ProviderFactoryError {
    pub fn unsupported(identifier: &BackendIdentifier) -> Self {
        Self::UnsupportedBackend {
            domain: identifier.domain,
            backend: identifier.name.clone(),
        }
    }
}
