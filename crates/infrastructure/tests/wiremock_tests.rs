//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Upstash REST cache against a mock server
//! - Forecast pipeline wired from configuration

use std::time::Duration;

use application::ports::CachePort;
use domain::LocationRequest;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use infrastructure::{AppConfig, CacheConfig, UpstashRedisCache, build_weather_service};

fn upstash(server: &MockServer) -> UpstashRedisCache {
    UpstashRedisCache::new(
        server.uri(),
        SecretString::from("test-token".to_string()),
        Duration::from_secs(5),
    )
    .unwrap()
}

// ============================================================================
// Upstash Cache Tests
// ============================================================================

mod upstash_tests {
    use super::*;

    #[tokio::test]
    async fn get_hit_returns_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_json(json!(["GET", "weather:12345"])))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"result": "{\"ok\":true}"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let value = upstash(&server).get_bytes("weather:12345").await.unwrap();
        assert_eq!(value, Some(b"{\"ok\":true}".to_vec()));
    }

    #[tokio::test]
    async fn get_miss_returns_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": null})))
            .mount(&server)
            .await;

        let value = upstash(&server).get_bytes("weather:none").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn set_sends_expiry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!(["SET", "weather:1,2", "{}", "EX", "3600"])))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "OK"})))
            .expect(1)
            .mount(&server)
            .await;

        upstash(&server)
            .set_bytes("weather:1,2", b"{}".to_vec(), Duration::from_secs(3600))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn error_reply_is_cache_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": "WRONGPASS"})),
            )
            .mount(&server)
            .await;

        let err = upstash(&server).get_bytes("weather:1").await.unwrap_err();
        assert!(err.to_string().contains("WRONGPASS"));
    }

    #[tokio::test]
    async fn non_json_reply_is_cache_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        assert!(upstash(&server).get_bytes("weather:1").await.is_err());
    }

    #[tokio::test]
    async fn unreachable_host_is_cache_error() {
        let cache = UpstashRedisCache::new(
            "http://127.0.0.1:1",
            SecretString::from("t".to_string()),
            Duration::from_secs(1),
        )
        .unwrap();
        assert!(cache.get_bytes("weather:1").await.is_err());
    }
}

// ============================================================================
// Wired Pipeline Tests
// ============================================================================

mod pipeline_tests {
    use super::*;

    fn forecast_body() -> serde_json::Value {
        json!({"properties": {"periods": [{"name": "Today", "isDaytime": true}]}})
    }

    async fn mount_weather(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/points/40.7,-74"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "properties": {"forecast": format!("{}/gridpoints/OKX/33,35/forecast", server.uri())}
            })))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/gridpoints/OKX/33,35/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .mount(server)
            .await;
    }

    fn config_for(server: &MockServer, cache: CacheConfig) -> AppConfig {
        AppConfig {
            weather: integration_weather::WeatherConfig::for_testing(&server.uri()),
            geocoding: integration_geocoding::GeocodingConfig::for_testing(&server.uri()),
            cache,
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn zip_lookup_then_cache_hit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/us/10001"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "places": [{"latitude": "40.7", "longitude": "-74"}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        mount_weather(&server).await;

        let service =
            build_weather_service(&config_for(&server, CacheConfig::in_memory())).unwrap();
        let request = LocationRequest::for_zip("10001");

        let first = service.lookup(&request, None).await.unwrap();
        assert_eq!(first.source.to_string(), "remote");
        assert_eq!(first.data.as_json(), &forecast_body());

        let second = service.lookup(&request, None).await.unwrap();
        assert_eq!(second.source.to_string(), "cache");
        assert_eq!(second.data, first.data);
    }

    #[tokio::test]
    async fn unknown_zip_is_unresolved() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/us/00000"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let service = build_weather_service(&config_for(&server, CacheConfig::default())).unwrap();
        let err = service
            .lookup(&LocationRequest::for_zip("00000"), None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            application::ApplicationError::LocationUnresolved
        ));
    }

    #[tokio::test]
    async fn broken_cache_fails_open() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/cache"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "down"})))
            .mount(&server)
            .await;
        mount_weather(&server).await;

        let cache = CacheConfig {
            upstash_url: Some(format!("{}/cache", server.uri())),
            upstash_token: Some(SecretString::from("t".to_string())),
            ..CacheConfig::default()
        };
        let service = build_weather_service(&config_for(&server, cache)).unwrap();

        let lookup = service
            .lookup(&LocationRequest::for_coordinates(40.7, -74.0), None)
            .await
            .unwrap();
        assert_eq!(lookup.source.to_string(), "remote");
    }
}
