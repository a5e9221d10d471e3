use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::presentation::state::AppResources;

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub app_name: String,
    pub app_version: String,
}

pub async fn welcome_handler(State(resources): State<AppResources>) -> Json<WelcomeResponse> {
    let settings = resources.settings();
    Json(WelcomeResponse {
        app_name: settings.app_name.clone(),
        app_version: settings.app_version.clone(),
    })
}
