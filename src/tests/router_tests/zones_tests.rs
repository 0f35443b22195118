use super::support::{body_string, get, location, post_form, sign_in};
use crate::db::ZoneStore;
use crate::lfpe::EntityStore;
use crate::tests::utils::init_test_state;

#[test]
fn zones_can_be_created_renamed_and_listed() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);

    let resp = post_form(&state, &token, "/zones", &[("name", " North ")]);
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/zones");

    let north = ZoneStore::new(&state.db).list().unwrap().remove(0);
    assert_eq!(north.name, "North");

    let resp = post_form(&state, &token, &format!("/zones/{}", north.id), &[("name", "North Coast")]);
    assert_eq!(resp.status(), 303);

    let body = body_string(get(&state, &token, "/zones?q=coast"));
    assert!(body.contains("North Coast"));
}

#[test]
fn duplicate_zone_name_is_refused() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);
    post_form(&state, &token, "/zones", &[("name", "North")]);

    let resp = post_form(&state, &token, "/zones", &[("name", "North")]);

    assert_eq!(resp.status(), 422);
    let body = body_string(resp);
    assert!(body.contains("New zone"));
    assert!(body.contains("class=\"form-error\""));
    assert_eq!(ZoneStore::new(&state.db).list().unwrap().len(), 1);
}

#[test]
fn empty_zone_list_still_has_one_page() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);

    let body = body_string(get(&state, &token, "/zones?page=7"));

    assert!(body.contains("No zones found."));
    assert!(body.contains("Showing <strong>0</strong> to <strong>0</strong> of <strong>0</strong>"));
}
