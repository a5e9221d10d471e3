pub mod config;
pub mod controllers;
pub mod handlers;
pub mod lifecycle;
pub mod router;
pub mod state;

pub use config::{ConfigurationError, Settings};
pub use controllers::BaseController;
pub use lifecycle::{Lifecycle, LifecycleError, TeardownReport};
pub use router::create_router;
pub use state::AppResources;
