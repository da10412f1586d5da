mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use common::{owner_header, test_server};

const HAZARDS: [&str; 6] = [
    "Chocolate and caffeine",
    "Grapes and raisins",
    "Onions and garlic",
    "Xylitol (artificial sweetener)",
    "Cooked bones",
    "High-fat foods",
];

fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("array")
        .iter()
        .map(|v| v.as_str().expect("string").to_string())
        .collect()
}

#[tokio::test]
async fn test_generate_puppy_plan() {
    let server = test_server().await;

    let response = server
        .post("/diet-plans/generate")
        .json(&json!({
            "pet_name": "Rex",
            "age": "puppy",
            "breed": "Beagle",
            "condition": "normal"
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let data = &body["data"];
    assert_eq!(data["pet_name"], "Rex");
    assert_eq!(data["age_tier"], "young");
    assert_eq!(data["condition_recognized"], true);
    assert_eq!(data["plan"]["meals_per_day"], "3-4 meals");
    assert_eq!(data["plan"]["meal_schedule"].as_array().map(Vec::len), Some(4));

    let avoid = strings(&data["plan"]["avoid_foods"]);
    assert!(avoid.ends_with(&HAZARDS.map(String::from)));
    assert_eq!(strings(&data["plan"]["important_notes"]).len(), 5);
}

#[tokio::test]
async fn test_generate_senior_retriever_overweight() {
    let server = test_server().await;

    let body: Value = server
        .post("/diet-plans/generate")
        .json(&json!({
            "pet_name": "Goldie",
            "age": "10",
            "breed": "Golden Retriever",
            "condition": "Overweight"
        }))
        .await
        .json();

    let plan = &body["data"]["plan"];
    assert_eq!(plan["meals_per_day"], "2 meals");
    assert_eq!(plan["daily_amount"], "Reduce by 20%");
    assert_eq!(plan["calories"], "Reduce by 20%");
    assert!(strings(&plan["recommended_foods"]).contains(&"Weight management formula".to_string()));

    let schedule: Vec<&str> = plan["meal_schedule"]
        .as_array()
        .expect("schedule")
        .iter()
        .filter_map(|slot| slot["time"].as_str())
        .collect();
    assert_eq!(schedule, vec!["8:00 AM", "6:00 PM"]);
}

#[tokio::test]
async fn test_generate_reports_unknown_condition() {
    let server = test_server().await;

    let body: Value = server
        .post("/diet-plans/generate")
        .json(&json!({
            "pet_name": "Rex",
            "age": "3",
            "breed": "Beagle",
            "condition": "grumpy"
        }))
        .await
        .json();

    assert_eq!(body["data"]["condition"], "grumpy");
    assert_eq!(body["data"]["condition_recognized"], false);
    assert_eq!(body["data"]["plan"]["daily_amount"], "2-3 cups");
}

#[tokio::test]
async fn test_generate_rejects_empty_fields() {
    let server = test_server().await;

    let response = server
        .post("/diet-plans/generate")
        .json(&json!({
            "pet_name": "Rex",
            "age": "",
            "breed": "Beagle",
            "condition": "normal"
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["code"], "E_VALIDATION");
    assert_eq!(body["status"], 400);
    assert_eq!(body["message"], "age is required");
}

#[tokio::test]
async fn test_saved_plan_lifecycle() {
    let server = test_server().await;

    let response = server
        .post("/diet-plans")
        .json(&json!({
            "pet_name": "Luna",
            "age": "1.5 years",
            "breed": "Persian Cat",
            "condition": "allergies"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let saved: Value = response.json();
    let plan_id = saved["data"]["id"].as_str().expect("plan id").to_string();
    assert_eq!(
        strings(&saved["data"]["plan"]["recommended_foods"]),
        vec![
            "Limited ingredient diet",
            "Novel protein sources (duck, venison)",
            "Grain-free options if grain allergic",
            "Hypoallergenic formulas",
        ]
    );

    let list: Value = server.get("/diet-plans").await.json();
    assert_eq!(list["count"], 1);
    assert_eq!(list["limit"], 20);

    let fetched = server.get(&format!("/diet-plans/{plan_id}")).await;
    fetched.assert_status_ok();
    let fetched: Value = fetched.json();
    assert_eq!(fetched["data"]["plan"], saved["data"]["plan"]);

    server
        .delete(&format!("/diet-plans/{plan_id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let missing = server.get(&format!("/diet-plans/{plan_id}")).await;
    missing.assert_status(StatusCode::NOT_FOUND);
    let body: Value = missing.json();
    assert_eq!(body["code"], "E_NOT_FOUND");

    server
        .delete(&format!("/diet-plans/{plan_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_saved_plans_are_scoped_to_owner() {
    let server = test_server().await;
    let other_owner = Uuid::new_v4().to_string();

    let saved: Value = server
        .post("/diet-plans")
        .json(&json!({
            "pet_name": "Max",
            "age": "3",
            "breed": "Labrador Mix",
            "condition": "diabetes"
        }))
        .await
        .json();
    let plan_id = saved["data"]["id"].as_str().expect("plan id").to_string();

    let (name, value) = owner_header(&other_owner);
    server
        .get(&format!("/diet-plans/{plan_id}"))
        .add_header(name.clone(), value.clone())
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let list: Value = server
        .get("/diet-plans")
        .add_header(name, value)
        .await
        .json();
    assert_eq!(list["count"], 0);
}

#[tokio::test]
async fn test_malformed_owner_header_is_rejected() {
    let server = test_server().await;
    let (name, value) = owner_header("not-a-uuid");

    let response = server.get("/diet-plans").add_header(name, value).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid X-Owner-Id header");
}
