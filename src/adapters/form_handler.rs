//! HTTP handlers for the greeting and the form wizard endpoints

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info};

use crate::adapters::metrics_handler::{outcome, MetricsCollector};
use crate::config::{RespondWith, Settings};
use crate::domain::form::{self, post_form, FormError};
use crate::wizards::Variant;

/// Shared application state for form handlers
#[derive(Clone)]
pub struct FormApiState {
    pub settings: Arc<Settings>,
    pub metrics: Arc<MetricsCollector>,
}

/// GET / - fixed greeting
pub async fn read_root() -> Json<Value> {
    Json(json!({"Hello": "World"}))
}

/// POST /form - submit answers to the configured wizard
pub async fn post_default_form(
    State(state): State<FormApiState>,
    body: Bytes,
) -> Result<Response, FormError> {
    let variant = state.settings.form.variant;
    submit(&state, variant, &body)
}

/// POST /form/:variant - submit answers to a named wizard
pub async fn post_variant_form(
    State(state): State<FormApiState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Response, FormError> {
    let variant = name.parse::<Variant>().map_err(|e| {
        state.metrics.record_request("unknown", outcome::UNKNOWN_VARIANT);
        e
    })?;
    submit(&state, variant, &body)
}

/// Parse the request body as a list of per-step answer objects.
/// An empty body means no answers yet.
pub fn parse_user_inputs(body: &[u8]) -> Result<Vec<Value>, FormError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let inputs: Vec<Value> =
        serde_json::from_slice(body).map_err(|e| FormError::MalformedInput(e.to_string()))?;

    if let Some(idx) = inputs.iter().position(|v| !v.is_object()) {
        return Err(FormError::MalformedInput(format!(
            "user input {} is not an object",
            idx
        )));
    }
    Ok(inputs)
}

fn submit(state: &FormApiState, variant: Variant, body: &[u8]) -> Result<Response, FormError> {
    let label = variant.as_str();
    let timer = state
        .metrics
        .form_request_duration
        .with_label_values(&[label])
        .start_timer();

    let mut submitted = 0usize;
    let result = parse_user_inputs(body).and_then(|inputs| {
        submitted = inputs.len();
        info!("Form {} submitted with {} user inputs", label, submitted);
        let initial = form::State::new();
        let mut generator = variant.generator();
        post_form(generator.as_mut(), initial, inputs)
    });
    timer.observe_duration();

    let metrics = &state.metrics;
    match result {
        Ok(data) => {
            metrics.record_request(label, outcome::COMPLETED);
            metrics
                .form_steps_validated
                .with_label_values(&[label])
                .inc_by(submitted as f64);
            debug!("Form {} completed with {} keys", label, data.len());
            Ok(match state.settings.form.respond_with {
                RespondWith::Ok => Json("OK!").into_response(),
                RespondWith::State => Json(Value::Object(data)).into_response(),
            })
        }
        Err(err) => {
            let outcome = match &err {
                FormError::NotComplete { .. } => {
                    metrics
                        .form_steps_validated
                        .with_label_values(&[label])
                        .inc_by(submitted as f64);
                    outcome::NOT_COMPLETE
                }
                FormError::Validation { .. } => outcome::INVALID,
                FormError::Overflow(_) => outcome::OVERFLOW,
                FormError::MalformedInput(_) => outcome::MALFORMED,
                FormError::UnknownVariant(_) => outcome::UNKNOWN_VARIANT,
            };
            metrics.record_request(label, outcome);
            Err(err)
        }
    }
}
