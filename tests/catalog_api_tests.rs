use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use vehicle_catalog::middleware::cors_for;
use vehicle_catalog::models::{VehicleCondition, VehicleRecord, VehicleStatus};
use vehicle_catalog::repositories::InMemoryVehicleRepository;
use vehicle_catalog::routes::create_app_router;
use vehicle_catalog::services::result_shaper::DEFAULT_PLACEHOLDER_IMAGE;
use vehicle_catalog::state::AppState;

fn vehicle(
    id: &str,
    make: &str,
    model: &str,
    year: i32,
    price: Option<i64>,
    created: i64,
) -> VehicleRecord {
    let mut record = VehicleRecord::new(id, make, model);
    record.year = Some(year);
    record.price = price.map(Decimal::from);
    record.created_at = Utc.timestamp_opt(created, 0).single();
    record
}

fn inventory() -> Vec<VehicleRecord> {
    let mut supra = vehicle("supra", "Toyota", "Supra", 1997, Some(48_000), 10);
    supra.condition = Some(VehicleCondition::Excellent);
    supra.body_type = Some("Coupe".to_string());
    supra.transmission = Some("Manual".to_string());
    supra.images = vec!["https://cdn.example.com/supra.jpg".to_string()];

    let mut skyline = vehicle("skyline", "Nissan", "Skyline GT-R", 1999, Some(120_000), 30);
    skyline.condition = Some(VehicleCondition::Good);

    let mut hilux = vehicle("hilux", "Toyota", "Hilux", 2005, Some(18_500), 20);
    hilux.condition = Some(VehicleCondition::Fair);
    hilux.status = VehicleStatus::Sold;

    let m3 = vehicle("m3", "BMW", "M3", 2004, Some(62_000), 40);
    let defender = vehicle("defender", "Land Rover", "Defender", 1995, None, 5);

    vec![supra, skyline, hilux, m3, defender]
}

fn app() -> Router {
    let repository = Arc::new(InMemoryVehicleRepository::new(inventory()));
    let state = AppState::with_defaults(repository);
    create_app_router(state, cors_for(&[]))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn item_ids(body: &Value) -> Vec<String> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_defaults_to_newest() {
    let (status, body) = get("/api/vehicles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item_ids(&body), ["m3", "skyline", "hilux", "supra", "defender"]);
    assert_eq!(body["total"], 5);
    assert_eq!(body["page"], 1);
    assert_eq!(body["total_pages"], 1);
}

#[tokio::test]
async fn test_list_with_filters_and_sort() {
    let (status, body) = get("/api/vehicles?make=Toyota&sort=price-high").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item_ids(&body), ["supra", "hilux"]);

    let (_, body) = get("/api/vehicles?price_range=50000-100000").await;
    assert_eq!(item_ids(&body), ["m3"]);

    let (_, body) = get("/api/vehicles?condition=good").await;
    assert_eq!(item_ids(&body), ["skyline"]);
}

#[tokio::test]
async fn test_list_search_is_case_insensitive() {
    let (_, body) = get("/api/vehicles?search=bmw").await;
    assert_eq!(item_ids(&body), ["m3"]);

    let (_, body) = get("/api/vehicles?search=1997%20toyota").await;
    assert_eq!(item_ids(&body), ["supra"]);
}

#[tokio::test]
async fn test_list_price_low_puts_price_on_request_first() {
    let (_, body) = get("/api/vehicles?sort=price-low").await;
    assert_eq!(item_ids(&body), ["defender", "hilux", "supra", "m3", "skyline"]);
}

#[tokio::test]
async fn test_list_unknown_values_degrade_gracefully() {
    let (status, body) = get("/api/vehicles?sort=not-a-real-key").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item_ids(&body), ["m3", "skyline", "hilux", "supra", "defender"]);

    let (status, body) = get("/api/vehicles?price_range=unknown-bucket").await;
    assert_eq!(status, StatusCode::OK);
    assert!(item_ids(&body).is_empty());
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_list_pagination() {
    let (_, body) = get("/api/vehicles?page=2&page_size=2").await;
    assert_eq!(item_ids(&body), ["hilux", "supra"]);
    assert_eq!(body["total"], 5);
    assert_eq!(body["total_pages"], 3);

    let (_, body) = get("/api/vehicles?page=4&page_size=2").await;
    assert!(item_ids(&body).is_empty());
}

#[tokio::test]
async fn test_list_rejects_invalid_page_size() {
    let (status, body) = get("/api/vehicles?page_size=500").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_items_are_shaped() {
    let (_, body) = get("/api/vehicles?make=Toyota&sort=year-old").await;
    let supra = &body["items"][0];
    assert_eq!(supra["title"], "1997 Toyota Supra");
    assert_eq!(supra["subtitle"], "Coupe • Manual");
    assert_eq!(supra["primary_image"], "https://cdn.example.com/supra.jpg");

    let hilux = &body["items"][1];
    assert_eq!(hilux["primary_image"], DEFAULT_PLACEHOLDER_IMAGE);
    assert_eq!(hilux["status"], "sold");
    assert_eq!(hilux["condition"], "fair");
}

#[tokio::test]
async fn test_get_vehicle_by_id() {
    let (status, body) = get("/api/vehicles/skyline").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "skyline");
    assert_eq!(body["title"], "1999 Nissan Skyline GT-R");
    assert_eq!(body["make"], "Nissan");
}

#[tokio::test]
async fn test_get_missing_vehicle() {
    let (status, body) = get("/api/vehicles/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_filters_endpoint() {
    let (status, body) = get("/api/vehicles/filters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["makes"], serde_json::json!(["BMW", "Land Rover", "Nissan", "Toyota"]));
    assert_eq!(body["conditions"], serde_json::json!(["excellent", "good", "fair"]));
    assert_eq!(body["price_ranges"][3], "100000+");
    assert_eq!(body["sort_keys"][0], "newest");
}
