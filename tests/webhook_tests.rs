use clap::Parser;
use httpmock::prelude::*;
use mensa_webhook::domain::model::{HandlerRef, Session, UserInfo, WebhookRequest};
use mensa_webhook::{CliConfig, Fulfillment, HttpMenuSource};

fn config_for(server: &MockServer) -> CliConfig {
    CliConfig::try_parse_from([
        "mensa-webhook",
        "--api-endpoint",
        &server.url("/api.php"),
        "--image-base-url",
        "https://www.mensa-kl.de/mimg/",
        "--placeholder-image-url",
        "https://img.example/placeholder.png",
    ])
    .unwrap()
}

fn request(intent: &str, locale: Option<&str>) -> WebhookRequest {
    WebhookRequest {
        handler: HandlerRef {
            name: intent.to_string(),
        },
        session: Session {
            id: "test-session".to_string(),
        },
        user: UserInfo {
            locale: locale.map(String::from),
        },
    }
}

#[tokio::test]
async fn test_food_end_to_end() {
    let server = MockServer::start();
    let mock_data = serde_json::json!([
        {"title": "Pizza", "price": "3.50", "loc": "1veg", "icon": "veg", "image": "pizza.jpg", "date": "13.05."},
        {"title": "Schnitzel", "price": "4.20", "loc": "2", "icon": "pork", "image": "", "date": "13.05."}
    ]);

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api.php");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(mock_data);
    });

    let config = config_for(&server);
    let source = HttpMenuSource::new(config.api_endpoint.clone());
    let fulfillment = Fulfillment::new(source, config);

    let response = fulfillment
        .handle(&request("food", Some("en-US")))
        .await
        .unwrap();

    // Exactly one fetch per invocation.
    api_mock.assert();

    // The platform payload uses camelCase keys throughout.
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(
        json["prompt"]["firstSimple"]["speech"],
        "Today, we have 2 items on the menu. Can I help you with anything else? "
    );
    assert_eq!(json["prompt"]["content"]["collection"]["title"], "TUK Mensa");
    assert_eq!(json["prompt"]["content"]["collection"]["subtitle"], "13.05.");
    assert_eq!(json["prompt"]["content"]["collection"]["items"][0]["key"], "1veg");
    assert_eq!(json["prompt"]["content"]["collection"]["items"][1]["key"], "2");
    assert_eq!(json["prompt"]["suggestions"][0]["title"], "Meatless");
    assert_eq!(json["prompt"]["suggestions"][1]["title"], "Cheapest");
    assert_eq!(json["prompt"]["suggestions"][2]["title"], "Cancel");

    let overrides = &json["session"]["typeOverrides"];
    assert_eq!(overrides[0]["name"], "prompt_option");
    assert_eq!(overrides[0]["typeOverrideMode"], "TYPE_REPLACE");
    let entries = overrides[0]["synonym"]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries[0]["display"]["image"]["url"],
        "https://www.mensa-kl.de/mimg/pizza.jpg"
    );
    assert_eq!(
        entries[1]["display"]["image"]["url"],
        "https://img.example/placeholder.png"
    );
}

#[tokio::test]
async fn test_cheap_end_to_end_in_german() {
    let server = MockServer::start();
    let mock_data = serde_json::json!([
        {"title": "Eintopf", "price": "2.00", "loc": "2", "icon": "pork", "image": "a.jpg", "date": "13.05."},
        {"title": "Curry", "price": "2.00", "loc": "Feelgood", "icon": "chicken", "image": "b.jpg", "date": "13.05."},
        {"title": "Steak", "price": "6.50", "loc": "1", "icon": "beef", "image": "c.jpg", "date": "13.05."}
    ]);

    server.mock(|when, then| {
        when.method(GET).path("/api.php");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(mock_data);
    });

    let config = config_for(&server);
    let source = HttpMenuSource::new(config.api_endpoint.clone());
    let fulfillment = Fulfillment::new(source, config);

    let response = fulfillment
        .handle(&request("cheap", Some("de-DE")))
        .await
        .unwrap();

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(
        json["prompt"]["firstSimple"]["speech"],
        "Ausgabe 2 hat das billigste Angebot. Kann ich sonst noch helfen? "
    );

    // Both tied items in feed order, the expensive one excluded.
    let items = json["prompt"]["content"]["collection"]["items"]
        .as_array()
        .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["key"], "2");
    assert_eq!(items[1]["key"], "Feelgood");

    assert_eq!(json["prompt"]["suggestions"][0]["title"], "Fleischlos");
    assert_eq!(json["prompt"]["suggestions"][1]["title"], "Abbrechen");
}

#[tokio::test]
async fn test_veggie_end_to_end_card() {
    let server = MockServer::start();
    let mock_data = serde_json::json!([
        {"title": "Pizza", "price": "3.50", "loc": "1", "icon": "veg", "image": "", "date": "13.05."}
    ]);

    server.mock(|when, then| {
        when.method(GET).path("/api.php");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(mock_data);
    });

    let config = config_for(&server);
    let source = HttpMenuSource::new(config.api_endpoint.clone());
    let fulfillment = Fulfillment::new(source, config);

    let response = fulfillment
        .handle(&request("veggie", Some("en-US")))
        .await
        .unwrap();

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(
        json["prompt"]["firstSimple"]["speech"],
        "The meatless option is in Ausgabe 1. Pizza in €3.50. Can I help you with anything else? "
    );
    assert_eq!(json["prompt"]["content"]["card"]["title"], "Ausgabe 1");
    assert_eq!(json["prompt"]["content"]["card"]["subtitle"], "€3.50 | veg");
    assert_eq!(json["prompt"]["content"]["card"]["text"], "Pizza");
    assert_eq!(
        json["prompt"]["content"]["card"]["image"]["url"],
        "https://img.example/placeholder.png"
    );
    assert_eq!(json["prompt"]["content"]["card"]["image"]["alt"], "Pizza");
}

#[tokio::test]
async fn test_empty_feed_closes_every_intent() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api.php");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("[]");
    });

    for intent in ["food", "veggie", "cheap"] {
        let config = config_for(&server);
        let source = HttpMenuSource::new(config.api_endpoint.clone());
        let fulfillment = Fulfillment::new(source, config);

        let response = fulfillment
            .handle(&request(intent, Some("en-US")))
            .await
            .unwrap();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json["prompt"]["firstSimple"]["speech"],
            "The Mensa is closed today. 😔 Can I help you with anything else? ",
            "intent {} should reply closed",
            intent
        );
        assert!(json["prompt"].get("content").is_none());
        assert_eq!(json["prompt"]["suggestions"][0]["title"], "Cancel");
    }
}

#[tokio::test]
async fn test_feed_outage_closes_like_an_empty_feed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api.php");
        then.status(503);
    });

    let config = config_for(&server);
    let source = HttpMenuSource::new(config.api_endpoint.clone());
    let fulfillment = Fulfillment::new(source, config);

    let response = fulfillment
        .handle(&request("food", Some("en-US")))
        .await
        .unwrap();

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(
        json["prompt"]["firstSimple"]["speech"],
        "The Mensa is closed today. 😔 Can I help you with anything else? "
    );
}

#[tokio::test]
async fn test_webhook_request_decodes_platform_payload() {
    let payload = serde_json::json!({
        "handler": {"name": "veggie"},
        "intent": {"name": "veggie", "params": {}},
        "session": {"id": "ABwppHH", "params": {}},
        "user": {"locale": "de-DE", "params": {}}
    });

    let request: WebhookRequest = serde_json::from_value(payload).unwrap();

    assert_eq!(request.handler.name, "veggie");
    assert_eq!(request.session.id, "ABwppHH");
    assert_eq!(request.user.locale.as_deref(), Some("de-DE"));
}
