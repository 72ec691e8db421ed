//! Validation of user input against declared models.
//!
//! All errors of a model are collected so the frontend can mark every bad
//! field at once; within a single value the first failing constraint wins.

use serde_json::{json, Map, Value};

use super::error::ErrorDetail;
use super::field::{Choice, FieldKind, FieldType, IntegerRules, ListRules, TextRules};
use super::model::{ExtraPolicy, FormPage, Model};
use super::State;

type Outcome = Result<Value, Vec<ErrorDetail>>;

impl FormPage {
    /// Validate one user input against this page
    pub fn validate(&self, input: &Value) -> Result<State, Vec<ErrorDetail>> {
        self.model.validate(input)
    }
}

impl Model {
    pub fn validate(&self, input: &Value) -> Result<State, Vec<ErrorDetail>> {
        let Some(object) = input.as_object() else {
            return Err(vec![ErrorDetail::new(
                "model_type",
                format!(
                    "Input should be a valid dictionary or instance of {}",
                    self.name
                ),
                input,
            )
            .with_ctx(json!({ "class_name": self.name }))]);
        };

        let mut output = Map::new();
        let mut errors = Vec::new();

        for field in &self.fields {
            match object.get(&field.name) {
                Some(value) => match validate_value(&field.ty, value) {
                    Ok(v) => {
                        output.insert(field.name.clone(), v);
                    }
                    Err(errs) => {
                        errors.extend(errs.into_iter().map(|e| e.under(field.name.as_str())));
                    }
                },
                None => match &field.default {
                    Some(default) => {
                        output.insert(field.name.clone(), default.clone());
                    }
                    None => errors.push(
                        ErrorDetail::new("missing", "Field required", input)
                            .under(field.name.as_str()),
                    ),
                },
            }
        }

        if self.extra == ExtraPolicy::Forbid {
            for (key, value) in object {
                if self.get(key).is_none() {
                    errors.push(
                        ErrorDetail::new("extra_forbidden", "Extra inputs are not permitted", value)
                            .under(key.as_str()),
                    );
                }
            }
        }

        if errors.is_empty() {
            Ok(output)
        } else {
            Err(errors)
        }
    }
}

/// Validate and coerce a single value
pub fn validate_value(ty: &FieldType, value: &Value) -> Outcome {
    if value.is_null() && ty.nullable {
        return Ok(Value::Null);
    }

    let validated = match &ty.kind {
        FieldKind::Integer(rules) => validate_integer(rules, value),
        FieldKind::Text(rules) => validate_text(rules, value),
        FieldKind::Choice(choice) => validate_choice(choice, value),
        FieldKind::Object(model) => model.validate(value).map(Value::Object),
        FieldKind::List(rules) => validate_list(rules, value),
    }?;

    for check in &ty.checks {
        if let Err(message) = check.run(&validated) {
            return Err(vec![ErrorDetail::new(
                "value_error",
                format!("Value error, {}", message),
                value,
            )
            .with_ctx(json!({ "error": message }))]);
        }
    }

    Ok(validated)
}

fn single(detail: ErrorDetail) -> Vec<ErrorDetail> {
    vec![detail]
}

fn coerce_integer(value: &Value) -> Result<i64, ErrorDetail> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
                    Ok(f as i64)
                }
                Some(f) if f.fract() != 0.0 => Err(ErrorDetail::new(
                    "int_from_float",
                    "Input should be a valid integer, got a number with a fractional part",
                    value,
                )),
                _ => Err(ErrorDetail::new(
                    "int_parsing_size",
                    "Unable to parse input string as an integer, exceeded maximum size",
                    value,
                )),
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| {
            ErrorDetail::new(
                "int_parsing",
                "Input should be a valid integer, unable to parse string as an integer",
                value,
            )
        }),
        _ => Err(ErrorDetail::new(
            "int_type",
            "Input should be a valid integer",
            value,
        )),
    }
}

fn validate_integer(rules: &IntegerRules, value: &Value) -> Outcome {
    let n = coerce_integer(value).map_err(single)?;

    if let Some(ge) = rules.minimum {
        if n < ge {
            return Err(single(
                ErrorDetail::new(
                    "greater_than_equal",
                    format!("Input should be greater than or equal to {}", ge),
                    value,
                )
                .with_ctx(json!({ "ge": ge })),
            ));
        }
    }
    if let Some(le) = rules.maximum {
        if n > le {
            return Err(single(
                ErrorDetail::new(
                    "less_than_equal",
                    format!("Input should be less than or equal to {}", le),
                    value,
                )
                .with_ctx(json!({ "le": le })),
            ));
        }
    }
    if let Some(step) = rules.multiple_of {
        if step != 0 && n % step != 0 {
            return Err(single(
                ErrorDetail::new(
                    "multiple_of",
                    format!("Input should be a multiple of {}", step),
                    value,
                )
                .with_ctx(json!({ "multiple_of": step })),
            ));
        }
    }

    Ok(json!(n))
}

fn characters(count: usize) -> &'static str {
    if count == 1 {
        "character"
    } else {
        "characters"
    }
}

fn items(count: usize) -> &'static str {
    if count == 1 {
        "item"
    } else {
        "items"
    }
}

fn validate_text(rules: &TextRules, value: &Value) -> Outcome {
    let Some(s) = value.as_str() else {
        return Err(single(ErrorDetail::new(
            "string_type",
            "Input should be a valid string",
            value,
        )));
    };
    let len = s.chars().count();

    if let Some(min) = rules.min_length {
        if len < min {
            return Err(single(
                ErrorDetail::new(
                    "string_too_short",
                    format!("String should have at least {} {}", min, characters(min)),
                    value,
                )
                .with_ctx(json!({ "min_length": min })),
            ));
        }
    }
    if let Some(max) = rules.max_length {
        if len > max {
            return Err(single(
                ErrorDetail::new(
                    "string_too_long",
                    format!("String should have at most {} {}", max, characters(max)),
                    value,
                )
                .with_ctx(json!({ "max_length": max })),
            ));
        }
    }

    Ok(value.clone())
}

fn validate_choice(choice: &Choice, value: &Value) -> Outcome {
    match value.as_str() {
        Some(s) if choice.contains(s) => Ok(value.clone()),
        _ => {
            let expected = choice.expected();
            Err(single(
                ErrorDetail::new("enum", format!("Input should be {}", expected), value)
                    .with_ctx(json!({ "expected": expected })),
            ))
        }
    }
}

fn validate_list(rules: &ListRules, value: &Value) -> Outcome {
    let Some(array) = value.as_array() else {
        return Err(single(ErrorDetail::new(
            "list_type",
            "Input should be a valid list",
            value,
        )));
    };

    let mut output = Vec::with_capacity(array.len());
    let mut errors = Vec::new();
    for (idx, item) in array.iter().enumerate() {
        match validate_value(&rules.items, item) {
            Ok(v) => output.push(v),
            Err(errs) => errors.extend(errs.into_iter().map(|e| e.under(idx))),
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let len = output.len();
    if let Some(min) = rules.min_items {
        if len < min {
            return Err(single(
                ErrorDetail::new(
                    "too_short",
                    format!(
                        "List should have at least {} {} after validation, not {}",
                        min,
                        items(min),
                        len
                    ),
                    value,
                )
                .with_ctx(json!({ "field_type": "List", "min_length": min, "actual_length": len })),
            ));
        }
    }
    if let Some(max) = rules.max_items {
        if len > max {
            return Err(single(
                ErrorDetail::new(
                    "too_long",
                    format!(
                        "List should have at most {} {} after validation, not {}",
                        max,
                        items(max),
                        len
                    ),
                    value,
                )
                .with_ctx(json!({ "field_type": "List", "max_length": max, "actual_length": len })),
            ));
        }
    }

    if rules.unique {
        let duplicated = output
            .iter()
            .enumerate()
            .any(|(i, a)| output[..i].iter().any(|b| a == b));
        if duplicated {
            return Err(single(ErrorDetail::new(
                "unique_list",
                "List must be unique",
                value,
            )));
        }
    }

    Ok(Value::Array(output))
}
