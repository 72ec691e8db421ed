//! JSON Schema generation for form pages.
//!
//! The output follows the layout the pydantic-forms frontend renders from:
//! nested models and choices are hoisted into a top-level `$defs` map and
//! referenced with `#/$defs/<Name>`, nullable fields become an `anyOf` with a
//! `null` branch, and choice definitions carry an `options` map from value to
//! label next to the plain `enum`.

use schemars::schema::{InstanceType, Schema, SchemaObject, SingleOrVec, SubschemaValidation};
use schemars::Map;
use serde::Serialize;
use serde_json::{json, Map as JsonMap, Value};

use super::field::{Choice, Field, FieldKind, FieldType};
use super::model::{ExtraPolicy, FormPage, Model};

/// Root schema of a form page
#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    #[serde(flatten)]
    pub schema: SchemaObject,
    #[serde(rename = "$defs", skip_serializing_if = "defs_empty")]
    pub defs: Map<String, Schema>,
}

fn defs_empty(defs: &Map<String, Schema>) -> bool {
    defs.is_empty()
}

impl FormSchema {
    /// Look up a top-level property schema
    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.schema
            .object
            .as_ref()
            .and_then(|o| o.properties.get(name))
    }

    pub fn definition(&self, name: &str) -> Option<&Schema> {
        self.defs.get(name)
    }
}

impl FormPage {
    pub fn json_schema(&self) -> FormSchema {
        let mut defs = Map::new();
        let mut schema = model_schema(&self.model, &mut defs);
        schema.metadata().title = Some(self.model.display_title().to_string());
        FormSchema { schema, defs }
    }
}

fn ref_to(name: &str) -> SchemaObject {
    SchemaObject::new_ref(format!("#/$defs/{}", name))
}

fn model_schema(model: &Model, defs: &mut Map<String, Schema>) -> SchemaObject {
    let mut schema = SchemaObject {
        instance_type: Some(InstanceType::Object.into()),
        ..Default::default()
    };
    schema.metadata().title = Some(model.display_title().to_string());

    let object = schema.object();
    for field in &model.fields {
        object
            .properties
            .insert(field.name.clone(), Schema::Object(field_schema(field, defs)));
        if field.is_required() {
            object.required.insert(field.name.clone());
        }
    }
    if model.extra == ExtraPolicy::Forbid {
        object.additional_properties = Some(Box::new(Schema::Bool(false)));
    }
    schema
}

fn field_schema(field: &Field, defs: &mut Map<String, Schema>) -> SchemaObject {
    let mut schema = type_schema(&field.ty, defs);
    let metadata = schema.metadata();
    metadata.title = Some(field.display_title());
    if let Some(default) = &field.default {
        metadata.default = Some(default.clone());
    }
    schema
}

fn type_schema(ty: &FieldType, defs: &mut Map<String, Schema>) -> SchemaObject {
    let inner = kind_schema(&ty.kind, defs);
    if !ty.nullable {
        return inner;
    }
    let null = SchemaObject {
        instance_type: Some(InstanceType::Null.into()),
        ..Default::default()
    };
    SchemaObject {
        subschemas: Some(Box::new(SubschemaValidation {
            any_of: Some(vec![Schema::Object(inner), Schema::Object(null)]),
            ..Default::default()
        })),
        ..Default::default()
    }
}

fn kind_schema(kind: &FieldKind, defs: &mut Map<String, Schema>) -> SchemaObject {
    match kind {
        FieldKind::Integer(rules) => {
            let mut schema = SchemaObject {
                instance_type: Some(InstanceType::Integer.into()),
                ..Default::default()
            };
            if rules.minimum.is_some() || rules.maximum.is_some() || rules.multiple_of.is_some() {
                let number = schema.number();
                number.minimum = rules.minimum.map(|v| v as f64);
                number.maximum = rules.maximum.map(|v| v as f64);
                number.multiple_of = rules.multiple_of.map(|v| v as f64);
            }
            schema
        }
        FieldKind::Text(rules) => {
            let mut schema = SchemaObject {
                instance_type: Some(InstanceType::String.into()),
                format: rules.format.map(|f| f.as_str().to_string()),
                ..Default::default()
            };
            if rules.min_length.is_some() || rules.max_length.is_some() {
                let string = schema.string();
                string.min_length = rules.min_length.map(|v| v as u32);
                string.max_length = rules.max_length.map(|v| v as u32);
            }
            schema
        }
        FieldKind::Choice(choice) => {
            if !defs.contains_key(&choice.name) {
                defs.insert(choice.name.clone(), Schema::Object(choice_schema(choice)));
            }
            ref_to(&choice.name)
        }
        FieldKind::Object(model) => {
            if !defs.contains_key(&model.name) {
                // Reserve the slot first so self-referencing models terminate.
                defs.insert(model.name.clone(), Schema::Bool(true));
                let nested = model_schema(model, defs);
                defs.insert(model.name.clone(), Schema::Object(nested));
            }
            ref_to(&model.name)
        }
        FieldKind::List(rules) => {
            let mut schema = SchemaObject {
                instance_type: Some(InstanceType::Array.into()),
                ..Default::default()
            };
            let items = type_schema(&rules.items, defs);
            let array = schema.array();
            array.items = Some(SingleOrVec::Single(Box::new(Schema::Object(items))));
            array.min_items = rules.min_items.map(|v| v as u32);
            array.max_items = rules.max_items.map(|v| v as u32);
            if rules.unique {
                array.unique_items = Some(true);
            }
            schema
        }
    }
}

fn choice_schema(choice: &Choice) -> SchemaObject {
    let mut schema = SchemaObject {
        instance_type: Some(InstanceType::String.into()),
        enum_values: Some(choice.values().map(|v| json!(v)).collect()),
        ..Default::default()
    };
    schema.metadata().title = Some(choice.name.clone());

    let options: JsonMap<String, Value> = choice
        .options
        .iter()
        .map(|(value, label)| (value.clone(), json!(label)))
        .collect();
    schema.extensions.insert("options".to_string(), Value::Object(options));
    schema
}
