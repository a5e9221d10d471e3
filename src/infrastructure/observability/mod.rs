mod http_metrics;
mod init_tracing;
mod prompt_sanitizer;
mod request_id;
mod tracing_config;

pub use http_metrics::{
    HTTP_REQUEST_DURATION_SECONDS, HTTP_REQUESTS_TOTAL, install_metrics_recorder, track_metrics,
};
pub use init_tracing::init_tracing;
pub use prompt_sanitizer::sanitize_prompt;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use tracing_config::TracingConfig;
