pub mod form_error_handler;
pub mod form_handler;
pub mod health_handler;
pub mod metrics_handler;
