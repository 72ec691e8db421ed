//! Maps form engine errors to the JSON error envelope the frontend reads.
//!
//! A `510 Not Extended` response is not a failure from the client's point of
//! view: it carries the schema of the next page to render.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::domain::form::FormError;

impl FormError {
    /// JSON body for this error
    pub fn to_body(&self) -> Value {
        let status = self.status_code();
        let mut body = json!({
            "type": self.type_name(),
            "title": self.title(),
            "detail": self.to_string(),
            "status": status.as_u16(),
        });

        match self {
            FormError::NotComplete { form, meta, .. } => {
                body["form"] = json!(form);
                body["meta"] = Value::Object(meta.clone());
            }
            FormError::Validation { errors, .. } => {
                body["validation_errors"] = json!(errors);
            }
            FormError::Overflow(_) | FormError::MalformedInput(_) | FormError::UnknownVariant(_) => {}
        }
        body
    }
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{post_form, ErrorDetail, FieldType, FormPage, PageSequence, State};
    use axum::http::StatusCode;

    #[test]
    fn test_not_complete_body() {
        let mut generator =
            PageSequence::new(vec![FormPage::new("NameForm").field("name", FieldType::string())]);
        let err = post_form(&mut generator, State::new(), vec![]).unwrap_err();
        let body = err.to_body();

        assert_eq!(body["type"], "FormNotCompleteError");
        assert_eq!(body["status"], 510);
        assert_eq!(body["title"], "Form not complete");
        assert_eq!(body["form"]["properties"]["name"]["type"], "string");
        assert_eq!(body["meta"]["hasNext"], true);
        assert_eq!(err.into_response().status(), StatusCode::NOT_EXTENDED);
    }

    #[test]
    fn test_validation_body() {
        let err = FormError::Validation {
            form: "NameForm".to_string(),
            errors: vec![ErrorDetail::new("missing", "Field required", &json!({})).under("name")],
        };
        let body = err.to_body();

        assert_eq!(body["type"], "FormValidationError");
        assert_eq!(body["status"], 400);
        assert_eq!(body["validation_errors"][0]["loc"], json!(["name"]));
        assert_eq!(body["validation_errors"][0]["msg"], "Field required");
        assert!(body.get("form").is_none());
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            FormError::Overflow(1).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            FormError::MalformedInput("bad".into()).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            FormError::UnknownVariant("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
    }
}
