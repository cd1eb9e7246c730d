//! End-to-end flow: configuration → tariff source → snapshot → quotes.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use billboard_pricing::application::services::{
    BookingItem, BookingQuoteService, BookingRequest, PricingService,
};
use billboard_pricing::config::{PricingConfig, SourceKind};
use billboard_pricing::domain::value_objects::{MatchTier, Price, RentalDuration};
use rust_decimal::Decimal;
use serde_json::json;
use std::path::PathBuf;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn export() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "size": "12X4",
            "billboard_level": "A",
            "customer_category": "عادي",
            "one_day": "150",
            "one_month": 3500,
            "2_months": 6800,
            "3_months": 9900,
            "6_months": 18000,
            "full_year": 33600
        },
        {
            "id": 2,
            "size": "4 × 3",
            "billboard_level": "B",
            "customer_category": "شركات",
            "one_day": null,
            "one_month": "1,200 LYD",
            "2_months": null,
            "3_months": null,
            "6_months": null,
            "full_year": null
        },
        {
            "id": 3,
            "size": "4x12",
            "billboard_level": "A",
            "customer_category": "عادي",
            "one_month": 1
        }
    ])
}

fn write_export(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "billboard-pricing-{}-{}.json",
        name,
        std::process::id()
    ));
    std::fs::write(&path, serde_json::to_vec(&export()).unwrap()).unwrap();
    path
}

fn json_file_config(path: &std::path::Path) -> PricingConfig {
    PricingConfig::from_toml_str(&format!(
        "[source]\nkind = \"json_file\"\npath = {:?}\n",
        path.display().to_string()
    ))
    .unwrap()
}

#[tokio::test]
async fn json_export_prices_terms_and_days() {
    let path = write_export("terms");
    let config = json_file_config(&path);
    assert_eq!(config.source.kind, SourceKind::JsonFile);

    let service = PricingService::from_config(&config).unwrap();
    assert_eq!(service.refresh().await.unwrap(), 2);

    assert_eq!(
        service.term_price("4x12", None, "عادي", 6),
        Some(Price::from(18000))
    );
    assert_eq!(
        service.term_price("12x4", Some("A"), "عادي", 5),
        Some(Price::from(3500))
    );
    assert_eq!(
        service.daily_price("4x12", Some("A"), "عادي"),
        Some(Price::from(150))
    );
    assert_eq!(
        service.term_price("3x4", Some("B"), "شركات", 1),
        Some(Price::from(1200))
    );
    assert_eq!(service.term_price("3x4", Some("B"), "شركات", 12), None);
    assert_eq!(service.term_price("3x4", Some("B"), "عادي", 1), None);

    assert_eq!(service.available_sizes(), vec!["12X4", "4 × 3"]);
    assert_eq!(service.customer_categories(), vec!["عادي", "شركات"]);

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn booking_against_loaded_snapshot() {
    let path = write_export("booking");
    let service = PricingService::from_config(&json_file_config(&path)).unwrap();
    service.refresh().await.unwrap();

    let request = BookingRequest::new("عادي", RentalDuration::Months(3))
        .with_item(BookingItem::new("BB-1", "4x12"))
        .with_item(BookingItem::new("BB-2", "12x4").with_level("C"))
        .with_item(BookingItem::new("BB-3", "3x4"))
        .with_discount_pct(Decimal::TEN);

    let quote = BookingQuoteService::new(service.resolver())
        .quote(&service.snapshot(), &request)
        .unwrap();

    assert!(!quote.is_complete());
    assert_eq!(quote.lines()[1].tier(), Some(MatchTier::SizeAndCategory));
    assert_eq!(quote.subtotal(), Price::from(19800));
    assert_eq!(quote.discount(), Price::from(1980));
    assert_eq!(quote.total(), Price::from(17820));

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn missing_export_keeps_empty_snapshot() {
    let config = json_file_config(&std::env::temp_dir().join("billboard-pricing-missing.json"));
    let service = PricingService::from_config(&config).unwrap();

    let err = service.refresh().await.unwrap_err();
    assert!(err.is_not_found());
    assert!(service.snapshot().is_empty());
    assert_eq!(service.customer_categories().len(), 4);
}

#[tokio::test]
async fn rest_backend_with_offline_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/pricing"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let export = write_export("fallback");
    let config = PricingConfig::from_toml_str(&format!(
        "[source]\nkind = \"rest\"\nbase_url = {:?}\napi_key = \"anon\"\npath = {:?}\ntimeout_ms = 2000\n",
        server.uri(),
        export.display().to_string()
    ))
    .unwrap();

    let service = PricingService::from_config(&config).unwrap();
    assert_eq!(service.source_name(), "fallback");
    assert_eq!(service.refresh().await.unwrap(), 2);
    assert_eq!(
        service.term_price("4x12", Some("A"), "عادي", 1),
        Some(Price::from(3500))
    );

    std::fs::remove_file(export).ok();
}
