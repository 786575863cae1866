//! Integration tests for the geocoding clients (wiremock-based)

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_geocoding::{
    CensusGeocodingClient, GeocodingClient, GeocodingConfig, GeocodingError, ZippopotamClient,
};

const fn sample_zip_json() -> &'static str {
    r#"{
        "post code": "90210",
        "country": "United States",
        "country abbreviation": "US",
        "places": [{
            "place name": "Beverly Hills",
            "longitude": "-118.4065",
            "state": "California",
            "state abbreviation": "CA",
            "latitude": "34.0901"
        }]
    }"#
}

const fn sample_census_json() -> &'static str {
    r#"{
        "result": {
            "addressMatches": [{
                "matchedAddress": "1600 PENNSYLVANIA AVE NW, WASHINGTON, DC, 20500",
                "coordinates": {"x": -77.035, "y": 38.8987}
            }]
        }
    }"#
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
}

#[tokio::test]
async fn zip_lookup_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/us/90210"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_zip_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = ZippopotamClient::new(&GeocodingConfig::for_testing(&server.uri())).unwrap();
    let coords = client.geocode("90210").await.unwrap();

    assert_close(coords.lat(), 34.0901);
    assert_close(coords.lon(), -118.4065);
}

#[tokio::test]
async fn zip_lookup_trims_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/us/90210"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_zip_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = ZippopotamClient::new(&GeocodingConfig::for_testing(&server.uri())).unwrap();
    assert!(client.geocode("  90210 ").await.is_ok());
}

#[tokio::test]
async fn zip_unknown_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/us/00000"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = ZippopotamClient::new(&GeocodingConfig::for_testing(&server.uri())).unwrap();
    let err = client.geocode("00000").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn zip_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/us/12345"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = ZippopotamClient::new(&GeocodingConfig::for_testing(&server.uri())).unwrap();
    let err = client.geocode("12345").await.unwrap_err();
    assert!(matches!(err, GeocodingError::RequestFailed { status: 500 }));
}

#[tokio::test]
async fn zip_non_numeric_coordinates_are_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/us/12345"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"places": [{"latitude": "north-ish", "longitude": "-70.0"}]}"#,
        ))
        .mount(&server)
        .await;

    let client = ZippopotamClient::new(&GeocodingConfig::for_testing(&server.uri())).unwrap();
    let err = client.geocode("12345").await.unwrap_err();
    assert!(matches!(err, GeocodingError::ParseError(_)));
}

#[tokio::test]
async fn zip_without_places_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/us/12345"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"places": []}"#))
        .mount(&server)
        .await;

    let client = ZippopotamClient::new(&GeocodingConfig::for_testing(&server.uri())).unwrap();
    assert!(client.geocode("12345").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn zip_malformed_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/us/12345"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = ZippopotamClient::new(&GeocodingConfig::for_testing(&server.uri())).unwrap();
    let err = client.geocode("12345").await.unwrap_err();
    assert!(matches!(err, GeocodingError::ParseError(_)));
}

#[tokio::test]
async fn census_lookup_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoder/locations/onelineaddress"))
        .and(query_param("address", "1600 Pennsylvania Ave NW"))
        .and(query_param("benchmark", "Public_AR_Current"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_census_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        CensusGeocodingClient::new(&GeocodingConfig::for_testing(&server.uri())).unwrap();
    let coords = client.geocode("1600 Pennsylvania Ave NW").await.unwrap();

    assert_close(coords.lat(), 38.8987);
    assert_close(coords.lon(), -77.035);
}

#[tokio::test]
async fn census_no_match_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoder/locations/onelineaddress"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"result": {"addressMatches": []}}"#),
        )
        .mount(&server)
        .await;

    let client =
        CensusGeocodingClient::new(&GeocodingConfig::for_testing(&server.uri())).unwrap();
    assert!(client.geocode("nowhere at all").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn census_string_coordinates_are_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoder/locations/onelineaddress"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"result": {"addressMatches": [{"coordinates": {"x": "-77", "y": "38"}}]}}"#,
        ))
        .mount(&server)
        .await;

    let client =
        CensusGeocodingClient::new(&GeocodingConfig::for_testing(&server.uri())).unwrap();
    let err = client.geocode("1 Main St").await.unwrap_err();
    assert!(matches!(err, GeocodingError::ParseError(_)));
}

#[tokio::test]
async fn census_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoder/locations/onelineaddress"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client =
        CensusGeocodingClient::new(&GeocodingConfig::for_testing(&server.uri())).unwrap();
    let err = client.geocode("1 Main St").await.unwrap_err();
    assert!(matches!(err, GeocodingError::RequestFailed { status: 502 }));
}

#[tokio::test]
async fn blank_queries_make_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = GeocodingConfig::for_testing(&server.uri());
    let zip = ZippopotamClient::new(&config).unwrap();
    let census = CensusGeocodingClient::new(&config).unwrap();

    assert!(matches!(
        zip.geocode("   ").await,
        Err(GeocodingError::InvalidQuery(_))
    ));
    assert!(matches!(
        census.geocode("").await,
        Err(GeocodingError::InvalidQuery(_))
    ));
}

#[tokio::test]
async fn unreachable_server_is_a_connection_error() {
    let config = GeocodingConfig::for_testing("http://127.0.0.1:9");
    let client = ZippopotamClient::new(&config).unwrap();
    let err = client.geocode("12345").await.unwrap_err();
    assert!(matches!(
        err,
        GeocodingError::ConnectionFailed(_) | GeocodingError::Timeout
    ));
}
