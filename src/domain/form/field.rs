//! Field types and their declared constraints.
//!
//! A [`FieldType`] is the unit of declaration for a form: it carries the kind
//! of value accepted (integer, text, choice, nested model or list), the
//! constraints on that value, whether `null` is accepted, and any named checks
//! that run after the built-in constraints pass.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use super::model::Model;

/// Signature of a custom check. Returning `Err(message)` rejects the value.
pub type CheckFn = dyn Fn(&Value) -> Result<(), String> + Send + Sync;

/// A named predicate applied to an already type-checked value
#[derive(Clone)]
pub struct Check {
    pub name: String,
    func: Arc<CheckFn>,
}

impl Check {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value) -> Result<(), String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn run(&self, value: &Value) -> Result<(), String> {
        (self.func)(value)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check").field("name", &self.name).finish()
    }
}

/// Inclusive bounds and step for integer fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegerRules {
    pub minimum: Option<i64>,
    pub maximum: Option<i64>,
    pub multiple_of: Option<i64>,
}

impl IntegerRules {
    pub fn ge(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn le(mut self, maximum: i64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn multiple_of(mut self, step: i64) -> Self {
        self.multiple_of = Some(step);
        self
    }
}

/// Presentation hints for text fields; they do not change validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Long,
    Label,
    Divider,
    Hidden,
}

impl TextFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextFormat::Long => "long",
            TextFormat::Label => "label",
            TextFormat::Divider => "divider",
            TextFormat::Hidden => "hidden",
        }
    }
}

/// Length bounds (in characters) for text fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRules {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub format: Option<TextFormat>,
}

impl TextRules {
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn format(mut self, format: TextFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// A named enumeration of allowed string values with display labels.
///
/// The frontend renders a choice as radio buttons, a dropdown or a checkbox
/// group depending on how many options it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub name: String,
    pub options: Vec<(String, String)>,
}

impl Choice {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push((value.into(), label.into()));
        self
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|(value, _)| value.as_str())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values().any(|v| v == value)
    }

    /// Human-readable list of the allowed values: `'1', '2' or '3'`
    pub fn expected(&self) -> String {
        let quoted: Vec<String> = self.values().map(|v| format!("'{}'", v)).collect();
        match quoted.split_last() {
            None => String::new(),
            Some((last, [])) => last.clone(),
            Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
        }
    }
}

/// Size bounds and uniqueness for list fields
#[derive(Debug, Clone)]
pub struct ListRules {
    pub items: Box<FieldType>,
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
    pub unique: bool,
}

impl ListRules {
    pub fn new(items: impl Into<FieldType>) -> Self {
        Self {
            items: Box::new(items.into()),
            min_items: None,
            max_items: None,
            unique: false,
        }
    }

    pub fn min_items(mut self, min: usize) -> Self {
        self.min_items = Some(min);
        self
    }

    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

#[derive(Debug, Clone)]
pub enum FieldKind {
    Integer(IntegerRules),
    Text(TextRules),
    Choice(Choice),
    Object(Model),
    List(ListRules),
}

/// A declared field type: kind, constraints, nullability and custom checks
#[derive(Debug, Clone)]
pub struct FieldType {
    pub kind: FieldKind,
    pub nullable: bool,
    pub checks: Vec<Check>,
}

impl FieldType {
    fn of(kind: FieldKind) -> Self {
        Self {
            kind,
            nullable: false,
            checks: Vec::new(),
        }
    }

    /// Unconstrained integer
    pub fn integer() -> Self {
        Self::of(FieldKind::Integer(IntegerRules::default()))
    }

    /// Unconstrained string
    pub fn string() -> Self {
        Self::of(FieldKind::Text(TextRules::default()))
    }

    pub fn choice(choice: Choice) -> Self {
        Self::of(FieldKind::Choice(choice))
    }

    pub fn object(model: Model) -> Self {
        Self::of(FieldKind::Object(model))
    }

    pub fn long_text() -> Self {
        Self::of(FieldKind::Text(TextRules::default().format(TextFormat::Long)))
    }

    /// Read-only heading; the text to show goes in the field default
    pub fn label() -> Self {
        Self::of(FieldKind::Text(TextRules::default().format(TextFormat::Label))).nullable()
    }

    pub fn divider() -> Self {
        Self::of(FieldKind::Text(TextRules::default().format(TextFormat::Divider))).nullable()
    }

    pub fn hidden() -> Self {
        Self::of(FieldKind::Text(TextRules::default().format(TextFormat::Hidden)))
    }

    /// Accept JSON `null` in addition to the declared kind
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn check<F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value) -> Result<(), String> + Send + Sync + 'static,
    {
        self.checks.push(Check::new(name, func));
        self
    }
}

impl From<IntegerRules> for FieldType {
    fn from(rules: IntegerRules) -> Self {
        Self::of(FieldKind::Integer(rules))
    }
}

impl From<TextRules> for FieldType {
    fn from(rules: TextRules) -> Self {
        Self::of(FieldKind::Text(rules))
    }
}

impl From<ListRules> for FieldType {
    fn from(rules: ListRules) -> Self {
        Self::of(FieldKind::List(rules))
    }
}

impl From<Choice> for FieldType {
    fn from(choice: Choice) -> Self {
        Self::choice(choice)
    }
}

impl From<Model> for FieldType {
    fn from(model: Model) -> Self {
        Self::object(model)
    }
}

/// List of unique items with optional size bounds
pub fn unique_conlist(
    items: impl Into<FieldType>,
    min_items: Option<usize>,
    max_items: Option<usize>,
) -> FieldType {
    let mut rules = ListRules::new(items).unique();
    rules.min_items = min_items;
    rules.max_items = max_items;
    rules.into()
}

/// Multi-select over a choice: a unique list of its values
pub fn choice_list(choice: Choice, min_items: Option<usize>, max_items: Option<usize>) -> FieldType {
    unique_conlist(choice, min_items, max_items)
}

/// A named field of a model
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub title: Option<String>,
    pub ty: FieldType,
    pub default: Option<Value>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<FieldType>) -> Self {
        Self {
            name: name.into(),
            title: None,
            ty: ty.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }

    /// Title shown to users, derived from the name unless set explicitly
    pub fn display_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| default_title(&self.name))
    }
}

/// `name_with_validation` -> `Name With Validation`, `PersonList` -> `Personlist`
pub fn default_title(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_alpha = false;
    for ch in name.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
