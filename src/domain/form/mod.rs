//! Schema-driven multi-step forms.
//!
//! - [`field`] and [`model`] declare what a page asks for
//! - [`schema`] renders a page as JSON Schema for the frontend
//! - [`validate`] checks user input against a page
//! - [`generator`] sequences pages and replays collected answers

pub mod error;
pub mod field;
pub mod generator;
pub mod model;
pub mod schema;
pub mod validate;

pub use error::{ErrorDetail, FormError, LocItem};
pub use field::{
    choice_list, unique_conlist, Choice, Field, FieldKind, FieldType, IntegerRules, ListRules,
    TextFormat, TextRules,
};
pub use generator::{post_form, FormGenerator, PageSequence, Step};
pub use model::{ExtraPolicy, FormPage, Model};
pub use schema::FormSchema;

/// Accumulated form data: an ordered JSON object
pub type State = serde_json::Map<String, serde_json::Value>;
