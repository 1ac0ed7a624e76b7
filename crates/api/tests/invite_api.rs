//! Integration tests for `GET /api/invite`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, Fixtures};

/// Run one request against a fresh router and parse the body.
async fn lookup_json(fixtures: &Fixtures, uri: &str) -> serde_json::Value {
    body_json(get(common::build_test_app(fixtures), uri).await).await
}

// ---------------------------------------------------------------------------
// Test: exact names return the stored record verbatim
// ---------------------------------------------------------------------------

#[tokio::test]
async fn matching_names_return_the_record() {
    let fixtures = Fixtures::standard();
    let app = common::build_test_app(&fixtures);

    let response = get(app, "/api/invite?bride=Kavya&groom=Vaibhav").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({
            "slug": "kavya-vaibhav",
            "brideName": "Kavya",
            "groomName": "Vaibhav",
            "weddingDate": "12 Dec 2025",
            "events": [],
        })
    );
}

// ---------------------------------------------------------------------------
// Test: lookup ignores case on the input names
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lookup_is_case_insensitive() {
    let fixtures = Fixtures::standard();

    let upper = lookup_json(&fixtures, "/api/invite?bride=Kavya&groom=Vaibhav").await;
    let mixed = lookup_json(&fixtures, "/api/invite?bride=kavya&groom=VAIBHAV").await;

    assert_eq!(upper, mixed);
    assert_eq!(upper["slug"], "kavya-vaibhav");
}

// ---------------------------------------------------------------------------
// Test: stored slugs with capitals still match
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stored_slug_case_is_ignored() {
    let fixtures = Fixtures::new(
        r#"[{"slug":"Asha-Ravi","brideName":"Asha","groomName":"Ravi","weddingDate":"1 Jan 2026"}]"#,
        common::SEGMENTS,
    );
    let app = common::build_test_app(&fixtures);

    let response = get(app, "/api/invite?bride=asha&groom=ravi").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["brideName"], "Asha");
}

// ---------------------------------------------------------------------------
// Test: event order is preserved
// ---------------------------------------------------------------------------

#[tokio::test]
async fn events_keep_their_stored_order() {
    let fixtures = Fixtures::new(
        r#"[{
            "slug": "kavya-vaibhav",
            "brideName": "Kavya",
            "groomName": "Vaibhav",
            "weddingDate": "12 Dec 2025",
            "events": [
                {"title":"Haldi","date":"10 Dec","time":"10 AM","location":"Home","description":"Turmeric"},
                {"title":"Mehendi","date":"11 Dec","time":"4 PM","location":"Lawn","description":"Henna"},
                {"title":"Pheras","date":"12 Dec","time":"8 PM","location":"Palace","description":"Vows"}
            ]
        }]"#,
        common::SEGMENTS,
    );
    let app = common::build_test_app(&fixtures);

    let json = body_json(get(app, "/api/invite?bride=Kavya&groom=Vaibhav").await).await;
    let titles: Vec<_> = json["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Haldi", "Mehendi", "Pheras"]);
}

// ---------------------------------------------------------------------------
// Test: unknown couple returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_names_return_404() {
    let fixtures = Fixtures::standard();
    let app = common::build_test_app(&fixtures);

    let response = get(app, "/api/invite?bride=Asha&groom=Ravi").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "Invitation not found" })
    );
}

// ---------------------------------------------------------------------------
// Test: missing or empty names return 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_groom_returns_400() {
    let fixtures = Fixtures::standard();
    let app = common::build_test_app(&fixtures);

    let response = get(app, "/api/invite?bride=Kavya").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "Missing bride or groom parameters" })
    );
}

#[tokio::test]
async fn missing_both_returns_400() {
    let fixtures = Fixtures::standard();
    let app = common::build_test_app(&fixtures);

    let response = get(app, "/api/invite").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_bride_returns_400() {
    let fixtures = Fixtures::standard();
    let app = common::build_test_app(&fixtures);

    let response = get(app, "/api/invite?bride=&groom=Vaibhav").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn repeated_parameter_uses_first_value() {
    let fixtures = Fixtures::standard();
    let app = common::build_test_app(&fixtures);

    let response = get(app, "/api/invite?bride=Kavya&bride=Asha&groom=Vaibhav").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["slug"], "kavya-vaibhav");
}

#[tokio::test]
async fn repeated_identical_parameter_is_served() {
    let fixtures = Fixtures::standard();
    let app = common::build_test_app(&fixtures);

    let response = get(app, "/api/invite?bride=Kavya&bride=Kavya&groom=Vaibhav").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_params_do_not_touch_the_store() {
    // With no backing files at all, a store read would surface as 500.
    let fixtures = Fixtures::missing();
    let app = common::build_test_app(&fixtures);

    let response = get(app, "/api/invite?groom=Vaibhav").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: store failures return a generic 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_store_returns_generic_500() {
    let fixtures = Fixtures::missing();
    let app = common::build_test_app(&fixtures);

    let response = get(app, "/api/invite?bride=Kavya&groom=Vaibhav").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn malformed_store_does_not_leak_details() {
    let fixtures = Fixtures::new("[{\"slug\": ", common::SEGMENTS);
    let app = common::build_test_app(&fixtures);

    let response = get(app, "/api/invite?bride=Kavya&groom=Vaibhav").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body_text = body_json(response).await.to_string();
    assert!(!body_text.contains("invites.json"));
    assert!(!body_text.contains("EOF"));
}

// ---------------------------------------------------------------------------
// Test: repeated lookups are identical and see edits on disk
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repeated_lookups_are_identical() {
    let fixtures = Fixtures::standard();

    let first = lookup_json(&fixtures, "/api/invite?bride=Kavya&groom=Vaibhav").await;
    let second = lookup_json(&fixtures, "/api/invite?bride=Kavya&groom=Vaibhav").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn store_is_reread_per_request() {
    let fixtures = Fixtures::standard();
    let app = common::build_test_app(&fixtures);

    let response = get(app.clone(), "/api/invite?bride=Asha&groom=Ravi").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    std::fs::write(
        &fixtures.invites_path,
        r#"[{"slug":"asha-ravi","brideName":"Asha","groomName":"Ravi","weddingDate":"1 Jan 2026","events":[]}]"#,
    )
    .unwrap();

    let response = get(app, "/api/invite?bride=Asha&groom=Ravi").await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: duplicate slugs resolve to the first record
// ---------------------------------------------------------------------------

#[tokio::test]
async fn first_duplicate_slug_wins() {
    let fixtures = Fixtures::new(
        r#"[
            {"slug":"kavya-vaibhav","brideName":"Kavya","groomName":"Vaibhav","weddingDate":"first","events":[]},
            {"slug":"kavya-vaibhav","brideName":"Kavya","groomName":"Vaibhav","weddingDate":"second","events":[]}
        ]"#,
        common::SEGMENTS,
    );
    let app = common::build_test_app(&fixtures);

    let json = body_json(get(app, "/api/invite?bride=Kavya&groom=Vaibhav").await).await;
    assert_eq!(json["weddingDate"], "first");
}

// ---------------------------------------------------------------------------
// Test: an incomplete record does not break lookups for other couples
// ---------------------------------------------------------------------------

#[tokio::test]
async fn incomplete_record_does_not_affect_other_couples() {
    let fixtures = Fixtures::new(
        r#"[
            {"slug":"asha-ravi","brideName":"Asha","events":[{"title":"Haldi","date":null}]},
            {"slug":"kavya-vaibhav","brideName":"Kavya","groomName":"Vaibhav","weddingDate":"12 Dec 2025","events":[]}
        ]"#,
        common::SEGMENTS,
    );

    let app = common::build_test_app(&fixtures);
    let response = get(app, "/api/invite?bride=Kavya&groom=Vaibhav").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["weddingDate"], "12 Dec 2025");

    let incomplete = lookup_json(&fixtures, "/api/invite?bride=Asha&groom=Ravi").await;
    assert_eq!(
        incomplete,
        serde_json::json!({
            "slug": "asha-ravi",
            "brideName": "Asha",
            "events": [{ "title": "Haldi", "date": null }],
        })
    );
}

// ---------------------------------------------------------------------------
// Test: keys outside the usual fields are returned unchanged
// ---------------------------------------------------------------------------

#[tokio::test]
async fn extra_record_keys_are_returned() {
    let fixtures = Fixtures::new(
        r#"[{
            "slug":"kavya-vaibhav","brideName":"Kavya","groomName":"Vaibhav","weddingDate":"12 Dec 2025",
            "venueMapUrl":"https://maps.example/x",
            "events":[{"title":"Sangeet","date":"11 Dec","time":"7 PM","location":"Udaipur","description":"Music","dressCode":"Pastels"}]
        }]"#,
        common::SEGMENTS,
    );

    let json = lookup_json(&fixtures, "/api/invite?bride=Kavya&groom=Vaibhav").await;
    assert_eq!(json["venueMapUrl"], "https://maps.example/x");
    assert_eq!(json["events"][0]["dressCode"], "Pastels");
}
