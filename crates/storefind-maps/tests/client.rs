//! Integration tests for `MapsClient` using wiremock HTTP mocks.

use storefind_maps::{ClientConfig, MapsClient, MapsError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> MapsClient {
    MapsClient::with_base_url(
        ClientConfig {
            api_key: "test-key".to_string(),
            geocode_timeout_secs: 5,
            places_timeout_secs: 10,
        },
        base_url,
    )
    .expect("client construction should not fail")
}

#[tokio::test]
async fn geocode_returns_parsed_address() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "geometry": { "location": { "lat": 38.6270, "lng": -90.1994 } },
                "address_components": [
                    { "long_name": "St. Louis", "short_name": "St. Louis", "types": ["locality", "political"] },
                    { "long_name": "Missouri", "short_name": "MO", "types": ["administrative_area_level_1", "political"] },
                    { "long_name": "63101", "short_name": "63101", "types": ["postal_code"] }
                ]
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("address", "63101"))
        .and(query_param("components", "country:US"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let resolved = client
        .geocode("63101")
        .await
        .expect("should parse geocode response")
        .expect("should find a result");

    assert!((resolved.latitude - 38.6270).abs() < 1e-6);
    assert!((resolved.longitude - (-90.1994)).abs() < 1e-6);
    assert_eq!(resolved.city.as_deref(), Some("St. Louis"));
    assert_eq!(resolved.state.as_deref(), Some("MO"));
}

#[tokio::test]
async fn geocode_zero_results_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ZERO_RESULTS",
            "results": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let resolved = client.geocode("00000").await.expect("should not error");
    assert!(resolved.is_none());
}

#[tokio::test]
async fn geocode_error_status_surfaces_as_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "REQUEST_DENIED",
            "results": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.geocode("63101").await;
    assert!(
        matches!(result, Err(MapsError::Api { ref status, .. }) if status == "REQUEST_DENIED"),
        "expected Api error, got: {result:?}"
    );
}

#[tokio::test]
async fn nearby_search_returns_raw_candidates() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "place_id": "place-aldi",
                "name": "ALDI",
                "types": ["supermarket", "food", "store"],
                "vicinity": "456 Natural Bridge Ave",
                "geometry": { "location": { "lat": 38.65, "lng": -90.21 } },
                "rating": 4.4,
                "opening_hours": {
                    "weekday_text": ["Monday: 9:00 AM – 8:00 PM"]
                }
            },
            {
                "place_id": "place-schnucks",
                "name": "Schnucks",
                "types": ["grocery_or_supermarket"],
                "geometry": { "location": { "lat": 38.64, "lng": -90.26 } }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .and(query_param("location", "38.627,-90.1994"))
        .and(query_param("radius", "24945"))
        .and(query_param("type", "supermarket"))
        .and(query_param("language", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let candidates = client
        .nearby_search(38.627, -90.1994, 24_945, "supermarket")
        .await
        .expect("should parse places response");

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].place_id, "place-aldi");
    assert_eq!(candidates[0].rating, Some(4.4));
    assert_eq!(
        candidates[0]
            .opening_hours
            .as_ref()
            .map(|h| h.weekday_text.len()),
        Some(1)
    );
    assert_eq!(candidates[1].name, "Schnucks");
    assert!(candidates[1].rating.is_none());
}

#[tokio::test]
async fn nearby_search_zero_results_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ZERO_RESULTS",
            "results": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let candidates = client
        .nearby_search(38.627, -90.1994, 25_000, "establishment")
        .await
        .expect("should not error");
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn nearby_search_http_500_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.nearby_search(38.627, -90.1994, 25_000, "food").await;
    assert!(
        matches!(result, Err(MapsError::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus(500), got: {result:?}"
    );
}
