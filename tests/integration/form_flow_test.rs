use super::common;

use common::test_server::TestServer;
use formwizard::config::{RespondWith, Settings};
use serde_json::{json, Value};

fn person2(name: &str) -> Value {
    json!({
        "name": name,
        "age": 33,
        "education": {"degree": "MSc", "years": null, "options": "3", "languages": [18, 21]}
    })
}

fn person(name: &str, age: i64) -> Value {
    json!({"name": name, "age": age, "education": {"degree": "BSc", "years": 3}})
}

fn showcase_answers() -> Vec<Value> {
    vec![
        json!({
            "number": 21,
            "list": [18, 21, 24],
            "test": "hello",
            "textList": ["a1", "b2"],
            "person": person2("Jan"),
            "personList": [person2("Piet"), person2("Klaas")]
        }),
        json!({"contact_name2": "Marie", "options": "6"}),
        json!({"contact_name3": "Anne", "age": 42}),
        json!({"contact_person": person("Joost", 27)}),
        json!({"contact_person_list": [person("Aa", 21), person("Bb", 24)]}),
    ]
}

#[tokio::test]
async fn test_showcase_wizard_step_by_step() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();
    let answers = showcase_answers();

    let expected_titles = [
        "Form Title Page 1",
        "Form Title Page 1",
        "Form Title Page 2",
        "Form Title Page 3",
        "Form Title Page 4",
    ];

    // Resubmit the growing answer list the way the frontend does
    for (step, title) in expected_titles.iter().enumerate() {
        let response = client
            .post(server.url("/form"))
            .json(&answers[..step])
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 510, "step {}", step);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["form"]["title"], *title, "step {}", step);
        assert_eq!(
            body["meta"]["hasNext"],
            step + 1 < expected_titles.len(),
            "step {}",
            step
        );
    }

    let response = client
        .post(server.url("/form"))
        .json(&answers)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!("OK!"));
}

#[tokio::test]
async fn test_showcase_state_response() {
    let mut settings = Settings::default();
    settings.form.respond_with = RespondWith::State;
    let server = TestServer::with_settings(settings).await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/form"))
        .json(&showcase_answers())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["contact_name3"], "Anne");
    assert_eq!(body["contact_person"]["name"], "Joost");
    assert_eq!(body["contact_person_list"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_widgets_wizard() {
    let mut settings = Settings::default();
    settings.form.respond_with = RespondWith::State;
    let server = TestServer::with_settings(settings).await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/form/widgets"))
        .json(&json!([]))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 510);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["form"]["title"], "Form Title Widgets");
    assert_eq!(body["meta"]["hasNext"], false);

    let response = client
        .post(server.url("/form/widgets"))
        .json(&json!([{"dropdown": "4", "radio": "1", "checkboxes": ["1", "3"]}]))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["reference"], "widgets");
    assert_eq!(body["remarks"], "");
}

#[tokio::test]
async fn test_rejected_value_reports_location() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();

    let mut answers = showcase_answers();
    answers[2] = json!({"contact_name3": "Anne", "age": 9});

    let response = client
        .post(server.url("/form"))
        .json(&answers[..3])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    let error = &body["validation_errors"][0];
    assert_eq!(error["loc"], json!(["age"]));
    assert_eq!(error["type"], "greater_than_equal");
    assert_eq!(error["input"], json!(9));
}

#[tokio::test]
async fn test_cors_headers_on_simple_request() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();

    let response = client
        .get(server.url("/"))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );
    assert_eq!(response.headers()["access-control-allow-credentials"], "true");

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["Hello"], "World");
}
