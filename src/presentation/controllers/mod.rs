mod base_controller;

pub use base_controller::BaseController;
