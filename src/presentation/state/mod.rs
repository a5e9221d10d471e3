mod app_resources;

pub use app_resources::AppResources;
