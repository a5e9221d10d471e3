mod lifecycle_error;
mod manager;
mod teardown;

pub use lifecycle_error::LifecycleError;
pub use manager::Lifecycle;
pub use teardown::{TeardownError, TeardownGuard, TeardownReport};
