//! Serde deserialization tests for provider envelopes.
//!
//! Payloads mirror what the providers send, in both snake_case and
//! camelCase field spellings.

use serde_json::json;

use crate::{CatFactsPage, ProviderKind, Repository, WeatherReport};

// ============================================================================
// ProviderKind Serde Tests
// ============================================================================

#[test]
fn test_provider_kind_serde_roundtrip_all_variants() {
    for kind in ProviderKind::all() {
        let json = serde_json::to_string(kind).unwrap();
        let deserialized: ProviderKind = serde_json::from_str(&json).unwrap();
        assert_eq!(*kind, deserialized, "Round-trip failed for {:?}", kind);
    }
}

#[test]
fn test_provider_kind_serializes_snake_case() {
    let json = serde_json::to_string(&ProviderKind::RepositoryHost).unwrap();
    assert_eq!(json, r#""repository_host""#);
}

// ============================================================================
// CatFactsPage Serde Tests
// ============================================================================

#[test]
fn test_cat_facts_page_snake_case() {
    let payload = json!({
        "current_page": 1,
        "data": [
            {"fact": "Cats have five toes on their front paws, but only four toes on their back paws.", "length": 70},
            {"fact": "A group of cats is called a clowder.", "length": 29}
        ],
        "first_page_url": "https://catfact.ninja/facts?page=1",
        "from": 1,
        "last_page": 34,
        "last_page_url": "https://catfact.ninja/facts?page=34",
        "next_page_url": "https://catfact.ninja/facts?page=2",
        "path": "https://catfact.ninja/facts",
        "per_page": 10,
        "prev_page_url": null,
        "to": 10,
        "total": 332
    });

    let page: CatFactsPage = serde_json::from_value(payload).unwrap();
    assert_eq!(page.current_page, 1);
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[1].length, 29);
    assert_eq!(page.last_page, Some(34));
    assert_eq!(page.total, Some(332));
    assert!(page.prev_page_url.is_none());
    assert!(page.has_next_page());
}

#[test]
fn test_cat_facts_page_camel_case() {
    let payload = json!({
        "currentPage": 34,
        "data": [],
        "lastPage": 34,
        "lastPageUrl": "https://catfact.ninja/facts?page=34",
        "perPage": 10
    });

    let page: CatFactsPage = serde_json::from_value(payload).unwrap();
    assert_eq!(page.current_page, 34);
    assert!(page.data.is_empty());
    assert_eq!(page.per_page, Some(10));
    assert!(!page.has_next_page());
}

#[test]
fn test_cat_facts_page_requires_data() {
    let result: Result<CatFactsPage, _> = serde_json::from_value(json!({"current_page": 1}));
    assert!(result.is_err());
}

#[test]
fn test_cat_facts_page_serializes_snake_case() {
    let page: CatFactsPage =
        serde_json::from_value(json!({"currentPage": 2, "data": []})).unwrap();
    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(value["current_page"], 2);
    assert!(value.get("currentPage").is_none());
}

// ============================================================================
// Repository Serde Tests
// ============================================================================

#[test]
fn test_repository_list() {
    let payload = json!([
        {
            "id": 1,
            "name": "Repo1",
            "full_name": "testuser/Repo1",
            "html_url": "https://github.com/testuser/Repo1",
            "private": false,
            "description": "First repository",
            "language": "C#",
            "stargazers_count": 12,
            "forks_count": 3,
            "owner": {"login": "testuser"}
        },
        {
            "id": 2,
            "name": "Repo2",
            "fullName": "testuser/Repo2",
            "htmlUrl": "https://github.com/testuser/Repo2",
            "isPrivate": true,
            "description": null,
            "language": null
        }
    ]);

    let repos: Vec<Repository> = serde_json::from_value(payload).unwrap();
    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].language.as_deref(), Some("C#"));
    assert_eq!(repos[0].stargazers_count, 12);
    assert_eq!(repos[1].full_name, "testuser/Repo2");
    assert!(repos[1].private);
    assert!(repos[1].description.is_none());
    assert_eq!(repos[1].forks_count, 0);
}

#[test]
fn test_repository_error_body_is_not_a_list() {
    let result: Result<Vec<Repository>, _> = serde_json::from_value(json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest"
    }));
    assert!(result.is_err());
}

// ============================================================================
// WeatherReport Serde Tests
// ============================================================================

#[test]
fn test_weather_report_minimal() {
    let report: WeatherReport =
        serde_json::from_value(json!({"name": "Athens", "main": {"temp": 20.5}})).unwrap();
    assert_eq!(report.name, "Athens");
    assert!((report.main.temp - 20.5).abs() < f64::EPSILON);
    assert!(report.weather.is_empty());
    assert!(report.summary().is_none());
}

#[test]
fn test_weather_report_full() {
    let payload = json!({
        "coord": {"lon": 23.7162, "lat": 37.9795},
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
        "main": {
            "temp": 293.65,
            "feels_like": 293.1,
            "temp_min": 292.0,
            "temp_max": 295.2,
            "pressure": 1015,
            "humidity": 52
        },
        "visibility": 10000,
        "wind": {"speed": 3.6, "deg": 330},
        "id": 264371,
        "name": "Athens",
        "cod": 200
    });

    let report: WeatherReport = serde_json::from_value(payload).unwrap();
    assert_eq!(report.summary(), Some("clear sky"));
    assert_eq!(report.main.humidity, Some(52.0));
    assert_eq!(report.wind.as_ref().map(|w| w.speed), Some(3.6));
    assert_eq!(report.id, Some(264_371));
}

#[test]
fn test_weather_city_not_found_body_is_rejected() {
    let result: Result<WeatherReport, _> =
        serde_json::from_value(json!({"cod": "404", "message": "city not found"}));
    assert!(result.is_err());
}
