mod base;
mod health;
mod metrics;

pub use base::welcome_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
