use super::support::{body_string, get, location, post_form, sign_in, try_post_form};
use crate::db::{CustomerStore, ZoneStore};
use crate::domain::{Customer, CustomerFields, CustomerStatus, ZoneFields};
use crate::lfpe::EntityStore;
use crate::router::AppState;
use crate::tests::utils::init_test_state;

fn seed_customers(state: &AppState, n: usize) -> Vec<Customer> {
    let store = CustomerStore::new(&state.db);
    (1..=n)
        .map(|i| {
            store
                .create(&CustomerFields {
                    name: format!("Customer {i:02}"),
                    email: format!("c{i:02}@shop.test"),
                    zone_id: None,
                    status: if i % 4 == 0 {
                        CustomerStatus::Closed
                    } else {
                        CustomerStatus::Interested
                    },
                })
                .unwrap()
        })
        .collect()
}

#[test]
fn first_page_shows_ten_of_twelve_and_next_page_the_rest() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);
    seed_customers(&state, 12);

    let resp = get(&state, &token, "/customers");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Customer 01"));
    assert!(body.contains("Customer 10"));
    assert!(!body.contains("Customer 11"));
    assert!(body.contains("Showing <strong>1</strong> to <strong>10</strong> of <strong>12</strong>"));
    assert!(body.contains("href=\"/customers?page=2\""));
    assert!(body.contains("<li class=\"status-total\"><strong>Total</strong> 12</li>"));

    let body = body_string(get(&state, &token, "/customers?page=2"));
    assert!(body.contains("Customer 11"));
    assert!(body.contains("Customer 12"));
    assert!(!body.contains("Customer 01"));
    assert!(body.contains("Showing <strong>11</strong> to <strong>12</strong> of <strong>12</strong>"));
}

#[test]
fn status_filter_from_a_later_page_lands_on_page_one() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);
    seed_customers(&state, 12);

    let body = body_string(get(&state, &token, "/customers?status=closed&page=2"));

    assert!(body.contains("Showing <strong>1</strong> to <strong>3</strong> of <strong>3</strong>"));
    assert!(body.contains("Customer 04"));
    assert!(body.contains("Customer 12"));
    assert!(!body.contains("Customer 01"));
    assert!(!body.contains("rel=\"next\""));
}

#[test]
fn search_is_case_insensitive() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);
    seed_customers(&state, 3);

    let body = body_string(get(&state, &token, "/customers?q=CUSTOMER+02"));

    assert!(body.contains("Customer 02"));
    assert!(!body.contains("Customer 01"));
}

#[test]
fn blank_email_is_rejected_without_touching_the_store() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);
    let customer = seed_customers(&state, 1).remove(0);

    let resp = post_form(
        &state,
        &token,
        &format!("/customers/{}", customer.id),
        &[("name", "Renamed"), ("email", "  ")],
    );

    assert_eq!(resp.status(), 422);
    let body = body_string(resp);
    assert!(body.contains("email is required"));
    assert!(body.contains("Edit customer"));

    let stored = CustomerStore::new(&state.db).list().unwrap();
    assert_eq!(stored[0].name, "Customer 01");
    assert_eq!(stored[0].updated_at, customer.updated_at);
}

#[test]
fn invalid_status_value_is_a_validation_error() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);
    let customer = seed_customers(&state, 1).remove(0);

    let resp = post_form(
        &state,
        &token,
        &format!("/customers/{}", customer.id),
        &[("status", "archived")],
    );

    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("invalid value for status: archived"));
}

#[test]
fn update_redirects_back_with_filters() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);
    let customers = seed_customers(&state, 12);

    let resp = post_form(
        &state,
        &token,
        &format!("/customers/{}?q=customer&page=2", customers[10].id),
        &[("name", "Customer 11b"), ("email", "c11@shop.test"), ("status", "interested")],
    );

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/customers?q=customer&page=2");

    let stored = CustomerStore::new(&state.db).list().unwrap();
    assert!(stored.iter().any(|c| c.name == "Customer 11b"));
}

#[test]
fn update_that_changes_the_filtered_count_returns_to_page_one() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);
    let customers = seed_customers(&state, 12);

    // Customer 11 leaves the "interested" filter.
    let resp = post_form(
        &state,
        &token,
        &format!("/customers/{}?status=interested&page=2", customers[10].id),
        &[("status", "closed")],
    );

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/customers?status=interested");
}

#[test]
fn duplicate_email_keeps_the_dialog_open() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);
    let customers = seed_customers(&state, 2);

    let resp = post_form(
        &state,
        &token,
        &format!("/customers/{}", customers[1].id),
        &[("email", "c01@shop.test")],
    );

    assert_eq!(resp.status(), 422);
    let body = body_string(resp);
    assert!(body.contains("Edit customer"));
    assert!(body.contains("value=\"c01@shop.test\""));
}

#[test]
fn concurrent_save_of_same_record_conflicts() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);
    let customer = seed_customers(&state, 1).remove(0);

    let _in_flight = state
        .commits
        .try_acquire(format!("customers:{}", customer.id))
        .unwrap();

    let err = try_post_form(
        &state,
        &token,
        &format!("/customers/{}", customer.id),
        &[("name", "Other")],
    )
    .unwrap_err();

    assert_eq!(err.status(), 409);
}

#[test]
fn saving_a_deleted_record_drops_the_draft() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);
    let customer = seed_customers(&state, 1).remove(0);
    CustomerStore::new(&state.db).delete(&customer.id).unwrap();

    let resp = post_form(
        &state,
        &token,
        &format!("/customers/{}?q=x", customer.id),
        &[("name", "Ghost")],
    );

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/customers?q=x");
    assert!(CustomerStore::new(&state.db).list().unwrap().is_empty());
}

#[test]
fn create_then_delete() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);

    let resp = post_form(
        &state,
        &token,
        "/customers",
        &[("name", "Ana López"), ("email", "Ana@Shop.test"), ("zone_id", ""), ("status", "in_progress")],
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/customers");

    let stored = CustomerStore::new(&state.db).list().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].email, "ana@shop.test");
    assert_eq!(stored[0].zone_id, None);
    assert_eq!(stored[0].status, CustomerStatus::InProgress);

    let resp = post_form(&state, &token, &format!("/customers/{}/delete?page=3", stored[0].id), &[]);
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/customers?page=3");
    assert!(CustomerStore::new(&state.db).list().unwrap().is_empty());

    // Deleting again is not an error.
    let resp = post_form(&state, &token, &format!("/customers/{}/delete", stored[0].id), &[]);
    assert_eq!(resp.status(), 303);
}

#[test]
fn missing_zone_reference_shows_fallback() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);
    let north = ZoneStore::new(&state.db)
        .create(&ZoneFields {
            name: "North".into(),
        })
        .unwrap();
    let store = CustomerStore::new(&state.db);
    for (name, zone) in [("Zoned", Some(north.id.clone())), ("Dangling", Some("gone".to_string()))] {
        store
            .create(&CustomerFields {
                name: name.into(),
                email: format!("{name}@shop.test"),
                zone_id: zone,
                status: CustomerStatus::Interested,
            })
            .unwrap();
    }

    let body = body_string(get(&state, &token, "/customers"));
    assert!(body.contains("<td>North</td>"));
    assert!(body.contains("<td>No zone</td>"));

    let body = body_string(get(&state, &token, &format!("/customers?zone={}", north.id)));
    assert!(body.contains("Zoned"));
    assert!(!body.contains("Dangling"));
}

#[test]
fn edit_and_new_links_open_the_dialog() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);
    let customer = seed_customers(&state, 1).remove(0);

    let body = body_string(get(&state, &token, &format!("/customers?edit={}", customer.id)));
    assert!(body.contains("Edit customer"));
    assert!(body.contains("value=\"c01@shop.test\""));

    let body = body_string(get(&state, &token, "/customers?new=1"));
    assert!(body.contains("New customer"));
    assert!(body.contains("<dialog"));

    // A stale link just shows the list.
    let body = body_string(get(&state, &token, "/customers?edit=missing"));
    assert!(!body.contains("<dialog"));
}
