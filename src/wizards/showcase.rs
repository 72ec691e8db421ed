//! Five-step wizard with choice sets, nested education records and lists of
//! numbers, strings and persons.
//!
//! The dropdown, radio and checkbox choice sets are declared here but only
//! rendered by the `widgets` wizard.

use serde_json::{json, Value};

use crate::domain::form::{unique_conlist, Choice, FieldType, FormPage, IntegerRules, Model, TextRules};

fn reject_nine(value: &Value) -> Result<(), String> {
    if value == &json!(9) {
        return Err("Value cannot be 9".to_string());
    }
    Ok(())
}

fn accept_list(_value: &Value) -> Result<(), String> {
    Ok(())
}

fn numbered(name: &str, values: std::ops::RangeInclusive<u32>) -> Choice {
    values.fold(Choice::new(name), |choice, n| {
        choice.option(n.to_string(), format!("Option {}", n))
    })
}

pub fn dropdown_choices() -> Choice {
    numbered("DropdownChoices", 1..=4)
}

pub fn radio_choices() -> Choice {
    numbered("RadioChoices", 1..=3)
}

pub fn multi_checkbox_choices() -> Choice {
    numbered("MultiCheckBoxChoices", 1..=4)
}

pub fn list_choices() -> Choice {
    numbered("ListChoices", 0..=6)
}

/// Integer in 18..=99, multiple of 3, never 9
pub fn number_example() -> FieldType {
    FieldType::from(IntegerRules::default().ge(18).le(99).multiple_of(3))
        .check("example_backend_validation", reject_nine)
}

fn plain_age() -> FieldType {
    IntegerRules::default().ge(18).le(99).multiple_of(3).into()
}

pub fn test_string() -> FieldType {
    TextRules::default().min_length(2).max_length(10).into()
}

fn string_example() -> FieldType {
    test_string().check("example_backend_validation", reject_nine)
}

/// Two to five unique numbers, each a valid [`number_example`]
fn number_list() -> FieldType {
    unique_conlist(number_example(), Some(2), Some(5)).check("example_list_validation", accept_list)
}

fn education() -> Model {
    Model::new("Education")
        .field("degree", FieldType::string())
        .field("years", FieldType::integer().nullable())
}

fn education2() -> Model {
    Model::new("Education2")
        .field("degree", FieldType::string())
        .field("years", FieldType::integer().nullable())
        .field("options", list_choices())
        .field("languages", number_list())
}

fn person() -> Model {
    Model::new("Person")
        .field("name", FieldType::string())
        .field("age", plain_age())
        .field("education", education())
}

fn person2() -> Model {
    Model::new("Person2")
        .field("name", FieldType::string())
        .field("age", plain_age())
        .field("education", education2())
}

fn person_list() -> FieldType {
    unique_conlist(person(), Some(2), Some(5)).check("example_list_validation", accept_list)
}

pub fn pages() -> Vec<FormPage> {
    vec![
        FormPage::new("TestForm0")
            .title("Form Title Page 1")
            .field("number", number_example())
            .field("list", number_list())
            .field("test", test_string())
            .field("textList", unique_conlist(test_string(), Some(1), Some(5)))
            .field("person", person2())
            .field("personList", unique_conlist(person2(), Some(2), Some(5))),
        FormPage::new("TestForm1")
            .title("Form Title Page 1")
            .field("contact_name2", string_example())
            .field("options", list_choices()),
        FormPage::new("TestForm2")
            .title("Form Title Page 2")
            .field("contact_name3", string_example())
            .field("age", number_example()),
        FormPage::new("TestForm3")
            .title("Form Title Page 3")
            .field("contact_person", person()),
        FormPage::submit("TestForm5")
            .title("Form Title Page 4")
            .field("contact_person_list", person_list()),
    ]
}
