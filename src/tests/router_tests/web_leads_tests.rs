use super::support::{body_string, get, location, post_form, sign_in, try_post_form};
use crate::config::Config;
use crate::db::WebLeadStore;
use crate::domain::{WebLeadFields, WebLeadStatus};
use crate::errors::ServerError;
use crate::lfpe::EntityStore;
use crate::router::{handle, AppState};
use crate::tests::utils::{init_test_db, init_test_state};
use astra::{Body, Response};
use http::{Method, Request};

fn lead(name: &str, status: WebLeadStatus, products: Option<&str>) -> WebLeadFields {
    WebLeadFields {
        full_name: name.into(),
        phone: Some("555-0100".into()),
        email: None,
        status,
        requested_products: products.map(str::to_string),
    }
}

fn post_intake(state: &AppState, key: Option<&str>, json: &str) -> Result<Response, ServerError> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/web-leads")
        .header("Content-Type", "application/json");
    if let Some(key) = key {
        builder = builder.header("X-Api-Key", key);
    }
    handle(builder.body(Body::from(json.to_string())).unwrap(), state)
}

#[test]
fn stats_cards_count_every_lead_regardless_of_filter() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);
    let store = WebLeadStore::new(&state.db);
    store.create(&lead("Marta Ruiz", WebLeadStatus::Interested, None)).unwrap();
    store.create(&lead("Luis Gil", WebLeadStatus::Lost, None)).unwrap();
    store.create(&lead("Eva Sanz", WebLeadStatus::Lost, None)).unwrap();

    let body = body_string(get(&state, &token, "/web-leads?status=interested"));

    assert!(body.contains("<span class=\"stat-label\">Total</span><span class=\"stat-value\">3</span>"));
    assert!(body.contains("<span class=\"stat-label\">Lost</span><span class=\"stat-value\">2</span>"));
    assert!(body.contains("Marta Ruiz"));
    assert!(!body.contains("Luis Gil"));
}

#[test]
fn detail_dialog_shows_contact_data_and_fallback() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);
    let store = WebLeadStore::new(&state.db);
    let bare = store.create(&lead("Marta Ruiz", WebLeadStatus::Contacted, None)).unwrap();
    let asked = store
        .create(&lead("Luis Gil", WebLeadStatus::Negotiating, Some("Sofa, two lamps")))
        .unwrap();

    let body = body_string(get(&state, &token, &format!("/web-leads?detail={}", bare.id)));
    assert!(body.contains("<dialog"));
    assert!(body.contains("555-0100"));
    assert!(body.contains("No requested products recorded"));

    let body = body_string(get(&state, &token, &format!("/web-leads?detail={}", asked.id)));
    assert!(body.contains("Sofa, two lamps"));
    assert!(!body.contains("No requested products recorded"));
}

#[test]
fn blank_full_name_is_rejected() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);

    let resp = post_form(&state, &token, "/web-leads", &[("full_name", " "), ("phone", "1")]);

    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("full_name is required"));
    assert!(WebLeadStore::new(&state.db).list().unwrap().is_empty());
}

#[test]
fn edit_clears_blank_optionals() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);
    let created = WebLeadStore::new(&state.db)
        .create(&lead("Marta Ruiz", WebLeadStatus::Interested, Some("Bed")))
        .unwrap();

    let resp = post_form(
        &state,
        &token,
        &format!("/web-leads/{}?status=interested", created.id),
        &[("phone", ""), ("requested_products", "  "), ("status", "contacted")],
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/web-leads?status=interested");

    let stored = WebLeadStore::new(&state.db).list().unwrap();
    assert_eq!(stored[0].phone, None);
    assert_eq!(stored[0].requested_products, None);
    assert_eq!(stored[0].status, WebLeadStatus::Contacted);
}

#[test]
fn intake_creates_lead_with_valid_key() {
    let (_dir, state) = init_test_state();

    let resp = post_intake(
        &state,
        Some("test-lead-key"),
        r#"{"full_name":"  Marta Ruiz ","email":"marta@x.test","requested_products":"Sofa"}"#,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 201);
    let json: serde_json::Value = serde_json::from_str(&super::support::body_string(resp)).unwrap();
    assert_eq!(json["full_name"], "Marta Ruiz");
    assert_eq!(json["status"], "interested");
    assert_eq!(json["phone"], serde_json::Value::Null);

    let stored = WebLeadStore::new(&state.db).list().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].requested_products.as_deref(), Some("Sofa"));
}

#[test]
fn intake_rejects_bad_key_and_bad_payload() {
    let (_dir, state) = init_test_state();

    let err = post_intake(&state, Some("wrong"), r#"{"full_name":"X"}"#).unwrap_err();
    assert_eq!(err.status(), 401);

    let err = post_intake(&state, None, r#"{"full_name":"X"}"#).unwrap_err();
    assert_eq!(err.status(), 401);

    let err = post_intake(&state, Some("test-lead-key"), r#"{"full_name":"   "}"#).unwrap_err();
    assert_eq!(err.status(), 400);

    let err = post_intake(&state, Some("test-lead-key"), "not json").unwrap_err();
    assert_eq!(err.status(), 400);

    assert!(WebLeadStore::new(&state.db).list().unwrap().is_empty());
}

#[test]
fn intake_is_disabled_without_a_key() {
    let (_dir, db) = init_test_db();
    let state = AppState::new(db, Config::default());

    let err = post_intake(&state, Some("anything"), r#"{"full_name":"X"}"#).unwrap_err();
    assert_eq!(err.status(), 404);
}

#[test]
fn oversized_form_is_refused_and_nothing_is_stored() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);
    let created = WebLeadStore::new(&state.db)
        .create(&lead("Marta Ruiz", WebLeadStatus::Interested, Some("Bed")))
        .unwrap();
    let products = "x".repeat(70 * 1024);

    let err = try_post_form(
        &state,
        &token,
        &format!("/web-leads/{}", created.id),
        &[("requested_products", products.as_str())],
    )
    .unwrap_err();

    assert_eq!(err.status(), 413);
    let stored = WebLeadStore::new(&state.db).list().unwrap();
    assert_eq!(stored[0].requested_products.as_deref(), Some("Bed"));
    assert_eq!(stored[0].updated_at, created.updated_at);
}

#[test]
fn oversized_intake_payload_is_refused() {
    let (_dir, state) = init_test_state();
    let json = format!(r#"{{"full_name":"Marta","requested_products":"{}"}}"#, "x".repeat(70 * 1024));

    let err = post_intake(&state, Some("test-lead-key"), &json).unwrap_err();

    assert_eq!(err.status(), 413);
    assert!(WebLeadStore::new(&state.db).list().unwrap().is_empty());
}
