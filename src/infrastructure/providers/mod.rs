mod client_factory;
mod provider_factory_error;

pub use client_factory::{ClientFactory, ProviderRegistry};
pub use provider_factory_error::ProviderFactoryError;
