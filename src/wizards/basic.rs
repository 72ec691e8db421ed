//! Five-step wizard: a plain name, a validated name, name and age together,
//! a nested person object and a bounded list of unique persons.

use serde_json::Value;

use crate::domain::form::{unique_conlist, FieldType, FormPage, IntegerRules, Model, TextRules};

const STEP_TITLE: &str = "Demo form step 1";

fn reject_karel(value: &Value) -> Result<(), String> {
    if value.as_str() == Some("Karel") {
        return Err("No not Karel!".to_string());
    }
    Ok(())
}

/// Integer in 18..=99, multiple of 3
pub fn number_example() -> FieldType {
    FieldType::from(IntegerRules::default().ge(18).le(99).multiple_of(3))
        .check("example_backend_validation", reject_karel)
}

/// 2 to 10 characters, anything but "Karel"
pub fn string_example() -> FieldType {
    FieldType::from(TextRules::default().min_length(2).max_length(10))
        .check("example_backend_validation", reject_karel)
}

fn person() -> Model {
    Model::new("Person")
        .field("name", string_example())
        .field("age", number_example())
}

pub fn pages() -> Vec<FormPage> {
    vec![
        FormPage::new("NameForm")
            .title(STEP_TITLE)
            .field("name", FieldType::string()),
        FormPage::new("NameValidationForm")
            .title(STEP_TITLE)
            .field("name_with_validation", string_example()),
        FormPage::new("NameAgeForm")
            .title(STEP_TITLE)
            .field("name", string_example())
            .field("age", number_example()),
        FormPage::new("PersonObjectForm")
            .title(STEP_TITLE)
            .field("person", person()),
        FormPage::submit("PersonArrayForm")
            .title(STEP_TITLE)
            .field("PersonList", unique_conlist(person(), Some(1), Some(3))),
    ]
}
