use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mystic_client::{
    ClientError, ClientSettings, Horoscope, HoroscopeApi, RemoteHoroscopeClient, SavedHoroscope,
};

fn client_for(server: &MockServer) -> RemoteHoroscopeClient {
    let settings = ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    };
    RemoteHoroscopeClient::new(&settings).expect("client")
}

#[tokio::test]
async fn fetch_returns_the_exact_prediction() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/horoscope"))
        .and(query_param("sign", "Leo"))
        .and(query_param("category", "career"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "prediction": "Great day",
            "lucky_number": 7,
            "date": "2024-01-01",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let horoscope = client.fetch_horoscope("Leo", "career").await.expect("fetch ok");

    assert_eq!(
        horoscope,
        Horoscope {
            sign: "Leo".to_string(),
            category: "career".to_string(),
            text: "Great day".to_string(),
            lucky_number: 7,
            date: "2024-01-01".to_string(),
        }
    );
}

#[tokio::test]
async fn fetch_normalizes_object_predictions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/horoscope"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "prediction": {"text": "Inner text"},
            "lucky_number": 3,
            "date": "2024-01-01",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let horoscope = client.fetch_horoscope("Aries", "love").await.expect("fetch ok");

    assert_eq!(horoscope.text, "Inner text");
}

#[tokio::test]
async fn fetch_defaults_lucky_number_and_date() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/horoscope"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"prediction": "Plain text"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let horoscope = client.fetch_horoscope("Aries", "love").await.expect("fetch ok");

    assert!((1..=100).contains(&horoscope.lucky_number));
    // YYYY-MM-DD
    assert_eq!(horoscope.date.len(), 10);
    assert_eq!(horoscope.date.matches('-').count(), 2);
}

#[tokio::test]
async fn fetch_maps_error_flag_to_domain_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/horoscope"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "message": "bad",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fetch_horoscope("Leo", "career").await.unwrap_err();

    assert_eq!(err, ClientError::DomainError("bad".to_string()));
}

#[tokio::test]
async fn fetch_maps_non_success_status_to_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/horoscope"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fetch_horoscope("Leo", "career").await.unwrap_err();

    assert_eq!(
        err,
        ClientError::ServiceError {
            status: 500,
            body: "boom".to_string(),
        }
    );
}

#[tokio::test]
async fn fetch_times_out_as_connection_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/horoscope"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"prediction": "slow"})),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
    };
    let client = RemoteHoroscopeClient::new(&settings).expect("client");
    let err = client.fetch_horoscope("Leo", "career").await.unwrap_err();

    assert!(matches!(err, ClientError::ConnectionFailed(_)));
}

#[tokio::test]
async fn fetch_maps_refused_connection_to_connection_failure() {
    let settings = ClientSettings {
        // Nothing listens here.
        base_url: "http://127.0.0.1:1".to_string(),
        request_timeout: Duration::from_millis(500),
    };
    let client = RemoteHoroscopeClient::new(&settings).expect("client");

    let err = client.fetch_horoscope("Leo", "career").await.unwrap_err();

    assert!(matches!(err, ClientError::ConnectionFailed(_)));
}

#[tokio::test]
async fn fetch_maps_malformed_body_to_domain_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/horoscope"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fetch_horoscope("Leo", "career").await.unwrap_err();

    assert!(matches!(err, ClientError::DomainError(_)));
}

#[tokio::test]
async fn save_succeeds_only_on_created() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/horoscope/save"))
        .and(body_json(json!({
            "sign": "Leo",
            "prediction": "Great day",
            "category": "career",
        })))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .save_prediction("Leo", "career", "Great day")
        .await
        .expect("save ok");
}

#[tokio::test]
async fn save_treats_any_other_status_as_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/horoscope/save"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok but wrong"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .save_prediction("Leo", "career", "Great day")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ClientError::ServiceError {
            status: 200,
            body: "ok but wrong".to_string(),
        }
    );
}

#[tokio::test]
async fn list_parses_entries_with_tolerant_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/horoscope/saved"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "horoscopes": [
                {
                    "id": "11",
                    "sign": "Leo",
                    "category": "career",
                    "prediction": "Great day",
                    "saved_at": "2024-01-01 10:00",
                },
                {"id": 7},
            ],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let saved = client.list_saved().await.expect("list ok");

    assert_eq!(
        saved,
        vec![
            SavedHoroscope {
                id: "11".to_string(),
                sign: "Leo".to_string(),
                category: "career".to_string(),
                text: "Great day".to_string(),
                saved_at: Some("2024-01-01 10:00".to_string()),
            },
            SavedHoroscope {
                id: "7".to_string(),
                sign: "Unknown".to_string(),
                category: "general".to_string(),
                text: "No prediction text".to_string(),
                saved_at: None,
            },
        ]
    );
}

#[tokio::test]
async fn list_treats_zero_count_and_missing_list_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/horoscope/saved"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 0})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let saved = client.list_saved().await.expect("list ok");

    assert!(saved.is_empty());
}

#[tokio::test]
async fn delete_succeeds_on_ok() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/horoscope/delete/42"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete_prediction("42").await.expect("delete ok");
}

#[tokio::test]
async fn delete_maps_not_found_to_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/horoscope/delete/42"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.delete_prediction("42").await.unwrap_err();

    assert_eq!(
        err,
        ClientError::ServiceError {
            status: 404,
            body: "not found".to_string(),
        }
    );
}
