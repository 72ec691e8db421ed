//! Form engine error types

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

use super::schema::FormSchema;

/// One segment of an error location: an object key or a list index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocItem {
    Key(String),
    Index(usize),
}

impl From<&str> for LocItem {
    fn from(key: &str) -> Self {
        LocItem::Key(key.to_string())
    }
}

impl From<usize> for LocItem {
    fn from(idx: usize) -> Self {
        LocItem::Index(idx)
    }
}

impl fmt::Display for LocItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocItem::Key(key) => f.write_str(key),
            LocItem::Index(idx) => write!(f, "{}", idx),
        }
    }
}

/// A single validation failure, in the shape the form frontend expects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub kind: String,
    pub loc: Vec<LocItem>,
    pub msg: String,
    pub input: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Value>,
}

impl ErrorDetail {
    pub fn new(kind: &str, msg: impl Into<String>, input: &Value) -> Self {
        Self {
            kind: kind.to_string(),
            loc: Vec::new(),
            msg: msg.into(),
            input: input.clone(),
            ctx: None,
        }
    }

    pub fn with_ctx(mut self, ctx: Value) -> Self {
        self.ctx = Some(ctx);
        self
    }

    /// Prefix the location with a parent segment
    pub fn under(mut self, parent: impl Into<LocItem>) -> Self {
        self.loc.insert(0, parent.into());
        self
    }

    /// Dotted location, e.g. `PersonList.0.age`
    pub fn path(&self) -> String {
        self.loc
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Everything that can stop a form submission
#[derive(Debug, Error)]
pub enum FormError {
    /// The generator yielded a page for which no user input was supplied
    #[error("Form {name} not complete")]
    NotComplete {
        name: String,
        form: Box<FormSchema>,
        meta: Map<String, Value>,
    },

    #[error("{} validation error{} for {form}", .errors.len(), plural(.errors.len()))]
    Validation {
        form: String,
        errors: Vec<ErrorDetail>,
    },

    /// More user inputs than the generator asked for
    #[error("Did not process all user_inputs ({0} remaining)")]
    Overflow(usize),

    #[error("Invalid request body: {0}")]
    MalformedInput(String),

    #[error("Unknown form variant: {0}")]
    UnknownVariant(String),
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

impl FormError {
    /// Convert to HTTP status code for API responses
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            Self::NotComplete { .. } => StatusCode::NOT_EXTENDED,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Overflow(_) => StatusCode::BAD_REQUEST,
            Self::MalformedInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::UnknownVariant(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Name reported in the `type` field of the error envelope
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::NotComplete { .. } => "FormNotCompleteError",
            Self::Validation { .. } => "FormValidationError",
            Self::Overflow(_) => "FormOverflowError",
            Self::MalformedInput(_) => "MalformedInputError",
            Self::UnknownVariant(_) => "UnknownVariantError",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::NotComplete { .. } => "Form not complete",
            Self::Validation { .. } => "Form not valid",
            Self::Overflow(_) => "Form overflow",
            Self::MalformedInput(_) => "Unprocessable request",
            Self::UnknownVariant(_) => "Form not found",
        }
    }
}
