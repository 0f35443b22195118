use crate::auth::sessions::create_session;
use crate::db::now_unix;
use crate::db::users::get_or_create_user;
use crate::errors::ServerError;
use crate::router::{handle, AppState};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

pub const ADMIN_EMAIL: &str = "admin@shop.test";

/// Session token for a freshly created admin user.
pub fn sign_in(state: &AppState) -> String {
    state
        .db
        .with_conn(|conn| -> Result<String, ServerError> {
            let now = now_unix();
            let user_id = get_or_create_user(conn, ADMIN_EMAIL, now)?;
            create_session(conn, user_id, now)
        })
        .expect("Failed to create session")
}

pub fn get(state: &AppState, token: &str, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("Cookie", format!("session={token}"))
        .body(Body::empty())
        .unwrap();
    handle(req, state).expect("Handler failed")
}

pub fn post_form(state: &AppState, token: &str, uri: &str, pairs: &[(&str, &str)]) -> Response {
    try_post_form(state, token, uri, pairs).expect("Handler failed")
}

pub fn try_post_form(
    state: &AppState,
    token: &str,
    uri: &str,
    pairs: &[(&str, &str)],
) -> Result<Response, ServerError> {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Cookie", format!("session={token}"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    handle(req, state)
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers().get("Location").unwrap().to_str().unwrap()
}
