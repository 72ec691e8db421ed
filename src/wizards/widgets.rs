//! Single-page wizard rendering every choice set and presentation widget:
//! dropdown, radio and checkbox choices plus label, divider, long text and
//! hidden fields.

use serde_json::{json, Value};

use super::showcase::{dropdown_choices, multi_checkbox_choices, radio_choices};
use crate::domain::form::{choice_list, FieldType, FormPage};

pub fn pages() -> Vec<FormPage> {
    vec![FormPage::submit("WidgetForm")
        .title("Form Title Widgets")
        .field_with_default("label_choices", FieldType::label(), json!("Pick your options"))
        .field("dropdown", dropdown_choices())
        .field("radio", radio_choices())
        .field("checkboxes", choice_list(multi_checkbox_choices(), Some(1), Some(4)))
        .field_with_default("divider_1", FieldType::divider(), Value::Null)
        .field_with_default("remarks", FieldType::long_text(), json!(""))
        .field_with_default("reference", FieldType::hidden(), json!("widgets"))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{post_form, FormError, PageSequence, State};

    #[test]
    fn test_widget_page_schema() {
        let page = &pages()[0];
        assert!(!page.has_next());

        let schema = serde_json::to_value(page.json_schema()).unwrap();
        assert_eq!(schema["title"], "Form Title Widgets");
        assert_eq!(schema["properties"]["label_choices"]["anyOf"][0]["format"], "label");
        assert_eq!(schema["properties"]["remarks"]["format"], "long");
        assert_eq!(schema["properties"]["reference"]["format"], "hidden");
        assert_eq!(schema["properties"]["dropdown"]["$ref"], "#/$defs/DropdownChoices");
        assert_eq!(schema["properties"]["checkboxes"]["items"]["$ref"], "#/$defs/MultiCheckBoxChoices");
        assert_eq!(schema["properties"]["checkboxes"]["uniqueItems"], true);
        assert_eq!(schema["required"], json!(["checkboxes", "dropdown", "radio"]));
        assert_eq!(schema["$defs"]["RadioChoices"]["options"]["3"], "Option 3");
    }

    #[test]
    fn test_defaults_fill_presentation_fields() {
        let mut generator = PageSequence::new(pages());
        let inputs = vec![json!({"dropdown": "4", "radio": "1", "checkboxes": ["1", "3"]})];
        let result = post_form(&mut generator, State::new(), inputs).unwrap();

        assert_eq!(result["label_choices"], "Pick your options");
        assert_eq!(result["divider_1"], Value::Null);
        assert_eq!(result["remarks"], "");
        assert_eq!(result["reference"], "widgets");
        assert_eq!(result["checkboxes"], json!(["1", "3"]));
    }

    #[test]
    fn test_checkboxes_need_one_unique_pick() {
        let mut generator = PageSequence::new(pages());
        let inputs = vec![json!({"dropdown": "4", "radio": "1", "checkboxes": []})];
        let err = post_form(&mut generator, State::new(), inputs).unwrap_err();
        match err {
            FormError::Validation { form, errors } => {
                assert_eq!(form, "WidgetForm");
                assert_eq!(errors[0].kind, "too_short");
                assert_eq!(errors[0].path(), "checkboxes");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
