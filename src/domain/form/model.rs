use serde_json::{json, Map, Value};

use super::field::{Field, FieldType};

/// What a model does with keys it does not declare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraPolicy {
    /// Report every undeclared key as an error
    Forbid,
    /// Drop undeclared keys from the validated output
    Ignore,
}

/// A named, ordered collection of fields
#[derive(Debug, Clone)]
pub struct Model {
    pub name: String,
    pub title: Option<String>,
    pub fields: Vec<Field>,
    pub extra: ExtraPolicy,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            fields: Vec::new(),
            extra: ExtraPolicy::Ignore,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, ty: impl Into<FieldType>) -> Self {
        self.fields.push(Field::new(name, ty));
        self
    }

    pub fn field_with_default(
        mut self,
        name: impl Into<String>,
        ty: impl Into<FieldType>,
        default: Value,
    ) -> Self {
        self.fields.push(Field::new(name, ty).with_default(default));
        self
    }

    pub fn push(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn forbid_extra(mut self) -> Self {
        self.extra = ExtraPolicy::Forbid;
        self
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    pub fn required(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_required())
    }
}

/// One step of a wizard: a model that rejects undeclared keys plus the
/// metadata the frontend uses to decide how to render the step.
#[derive(Debug, Clone)]
pub struct FormPage {
    pub model: Model,
    pub meta: Map<String, Value>,
}

impl FormPage {
    /// A page that is followed by further pages
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_next(name, true)
    }

    /// The last page of a wizard
    pub fn submit(name: impl Into<String>) -> Self {
        Self::with_next(name, false)
    }

    fn with_next(name: impl Into<String>, has_next: bool) -> Self {
        let mut meta = Map::new();
        meta.insert("hasNext".to_string(), json!(has_next));
        Self {
            model: Model::new(name).forbid_extra(),
            meta,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.model = self.model.title(title);
        self
    }

    pub fn field(mut self, name: impl Into<String>, ty: impl Into<FieldType>) -> Self {
        self.model = self.model.field(name, ty);
        self
    }

    pub fn field_with_default(
        mut self,
        name: impl Into<String>,
        ty: impl Into<FieldType>,
        default: Value,
    ) -> Self {
        self.model = self.model.field_with_default(name, ty, default);
        self
    }

    pub fn name(&self) -> &str {
        &self.model.name
    }

    pub fn has_next(&self) -> bool {
        self.meta
            .get("hasNext")
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }
}
