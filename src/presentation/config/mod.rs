mod settings;

pub use settings::{ConfigurationError, Settings};
