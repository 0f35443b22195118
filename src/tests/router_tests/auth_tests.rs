use super::support::{body_string, get, location, sign_in, ADMIN_EMAIL};
use crate::router::handle;
use crate::tests::utils::init_test_state;
use astra::Body;
use http::{Method, Request};

#[test]
fn anonymous_visitor_is_sent_to_sign_in() {
    let (_dir, state) = init_test_state();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/customers")
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &state).expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/sign-in");
}

#[test]
fn unknown_session_token_is_redirected() {
    let (_dir, state) = init_test_state();

    let resp = get(&state, "forged-token", "/dashboard");

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/sign-in");
}

#[test]
fn sign_in_page_is_public() {
    let (_dir, state) = init_test_state();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/sign-in")
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &state).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Sign in required"));
}

#[test]
fn session_lookup_failure_shows_verifying_page() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);
    state
        .db
        .with_conn(|conn| {
            conn.execute_batch("drop table sessions;")
                .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
        })
        .unwrap();

    let resp = get(&state, &token, "/customers?q=ana");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Verifying authentication..."));
    assert!(body.contains("url=/customers?q=ana"));
}

#[test]
fn signed_in_user_sees_their_email_and_root_redirects() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);

    let resp = get(&state, &token, "/");
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/dashboard");

    let resp = get(&state, &token, "/products");
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/dashboard");

    let resp = get(&state, &token, "/dashboard");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(ADMIN_EMAIL));
}
