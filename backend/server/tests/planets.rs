use std::time::Duration;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use server::{app, config::Config, state::State};
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const INVALID_PAGE: &str = "The page parameter must be a positive number.";
const UPSTREAM_FAILED: &str = "Could not fetch planet data.";

fn router(swapi_url: &str) -> Router {
    app(State::new(Config::new(0, swapi_url)).unwrap())
}

fn endpoint(server: &MockServer) -> String {
    format!("{}/api/planets/", server.uri())
}

fn planet(name: &str) -> Value {
    json!({
        "name": name,
        "climate": "temperate",
        "terrain": "grasslands",
        "gravity": "1 standard",
        "diameter": "12500",
        "rotation_period": "24",
        "orbital_period": "365",
        "surface_water": "40",
        "population": "1000000",
        "residents": [],
        "films": []
    })
}

async fn mock_page(server: &MockServer, page: &str, count: u64, results: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/api/planets/"))
        .and(query_param("page", page))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": count,
            "next": null,
            "previous": null,
            "results": results
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_returns_transformed_planets() {
    let server = MockServer::start().await;
    mock_page(
        &server,
        "1",
        1,
        vec![json!({
            "name": "Tatooine",
            "climate": "arid",
            "terrain": "desert",
            "gravity": "1 standard",
            "diameter": "10465",
            "rotation_period": "23",
            "orbital_period": "304",
            "surface_water": "1",
            "population": "200000",
            "residents": ["https://swapi.py4e.com/api/people/1/"],
            "films": ["https://swapi.py4e.com/api/films/1/"]
        })],
    )
    .await;

    let (status, body) = get(router(&endpoint(&server)), "/api/planets?page=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": [{
                "name": "Tatooine",
                "climate": ["arid"],
                "terrain": ["desert"],
                "gravity": 9.8,
                "diameter": 10465,
                "rotationPeriod": { "days": 0, "hours": 23 },
                "surfaceWater": 1,
                "population": 200000,
                "residents": 1,
                "films": 1
            }],
            "pagination": { "totalItems": 1, "perPage": 10, "page": 1 }
        })
    );
}

#[tokio::test]
async fn test_unknown_values_become_null() {
    let server = MockServer::start().await;
    mock_page(
        &server,
        "1",
        1,
        vec![json!({
            "name": "Unknown Planet",
            "climate": "unknown",
            "terrain": "unknown",
            "gravity": "unknown",
            "diameter": "unknown",
            "rotation_period": "unknown",
            "orbital_period": "unknown",
            "surface_water": "unknown",
            "population": "unknown",
            "residents": [],
            "films": []
        })],
    )
    .await;

    let (status, body) = get(router(&endpoint(&server)), "/api/planets?page=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"][0],
        json!({
            "name": "Unknown Planet",
            "climate": [],
            "terrain": [],
            "gravity": null,
            "diameter": null,
            "rotationPeriod": null,
            "surfaceWater": null,
            "population": null,
            "residents": 0,
            "films": 0
        })
    );
}

#[tokio::test]
async fn test_rotation_gravity_and_lists() {
    let server = MockServer::start().await;
    let mut record = planet("Test Planet");
    record["rotation_period"] = json!("25");
    record["gravity"] = json!("2 standard");
    record["climate"] = json!("temperate, tropical");
    record["terrain"] = json!("jungle, rainforests");
    record["residents"] = json!([
        "https://swapi.py4e.com/api/people/1/",
        "https://swapi.py4e.com/api/people/2/",
        "https://swapi.py4e.com/api/people/3/"
    ]);
    record["films"] = json!([
        "https://swapi.py4e.com/api/films/1/",
        "https://swapi.py4e.com/api/films/2/"
    ]);
    mock_page(&server, "1", 1, vec![record]).await;

    let (_, body) = get(router(&endpoint(&server)), "/api/planets?page=1").await;
    let planet = &body["data"][0];

    assert_eq!(planet["rotationPeriod"], json!({ "days": 1, "hours": 1 }));
    assert_eq!(planet["gravity"], json!(19.6));
    assert_eq!(planet["climate"], json!(["temperate", " tropical"]));
    assert_eq!(planet["terrain"], json!(["jungle", " rainforests"]));
    assert_eq!(planet["residents"], json!(3));
    assert_eq!(planet["films"], json!(2));
}

#[tokio::test]
async fn test_page_defaults_to_one() {
    let server = MockServer::start().await;
    mock_page(&server, "1", 1, vec![]).await;

    let (status, body) = get(router(&endpoint(&server)), "/api/planets").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], json!(1));
}

#[tokio::test]
async fn test_forwards_requested_page() {
    let server = MockServer::start().await;
    mock_page(&server, "4", 60, vec![planet("Hoth"), planet("Dagobah")]).await;

    let (status, body) = get(router(&endpoint(&server)), "/api/planets?page=4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name"], json!("Hoth"));
    assert_eq!(body["data"][1]["name"], json!("Dagobah"));
    assert_eq!(
        body["pagination"],
        json!({ "totalItems": 60, "perPage": 10, "page": 4 })
    );
}

#[tokio::test]
async fn test_repeated_page_uses_first_value() {
    let server = MockServer::start().await;
    mock_page(&server, "2", 60, vec![planet("Hoth")]).await;

    let (status, body) = get(router(&endpoint(&server)), "/api/planets?page=2&page=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], json!(2));
    assert_eq!(body["data"][0]["name"], json!("Hoth"));
}

#[tokio::test]
async fn test_repeated_invalid_page_is_json_bad_request() {
    let (status, body) = get(
        router("http://127.0.0.1:1/api/planets/"),
        "/api/planets?page=abc&page=2",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!(INVALID_PAGE));
}

#[tokio::test]
async fn test_invalid_pages_are_rejected_without_upstream_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for uri in [
        "/api/planets?page=abc",
        "/api/planets?page=-1",
        "/api/planets?page=0",
    ] {
        let (status, body) = get(router(&endpoint(&server)), uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], json!(INVALID_PAGE), "{uri}");
    }
}

#[tokio::test]
async fn test_upstream_error_status_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (status, body) = get(router(&endpoint(&server)), "/api/planets?page=1").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], json!(UPSTREAM_FAILED));
}

#[tokio::test]
async fn test_upstream_unreachable_is_bad_gateway() {
    let (status, body) = get(router("http://127.0.0.1:1/api/planets/"), "/api/planets?page=1").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], json!(UPSTREAM_FAILED));
}

#[tokio::test]
async fn test_upstream_timeout_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let config =
        Config::new(0, endpoint(&server)).with_upstream_timeout(Duration::from_millis(50));
    let (status, body) = get(app(State::new(config).unwrap()), "/api/planets?page=1").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], json!(UPSTREAM_FAILED));
}

#[tokio::test]
async fn test_upstream_malformed_body_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "detail": "Not found" })))
        .mount(&server)
        .await;

    let (status, body) = get(router(&endpoint(&server)), "/api/planets?page=1").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], json!(UPSTREAM_FAILED));
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = router("http://127.0.0.1:1/api/planets/")
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
