use super::support::{body_string, get, sign_in};
use crate::db::{CustomerStore, WebLeadStore, ZoneStore};
use crate::domain::{CustomerFields, CustomerStatus, WebLeadFields, WebLeadStatus, ZoneFields};
use crate::lfpe::EntityStore;
use crate::tests::utils::init_test_state;

#[test]
fn dashboard_shows_totals_per_section() {
    let (_dir, state) = init_test_state();
    let token = sign_in(&state);

    ZoneStore::new(&state.db)
        .create(&ZoneFields { name: "North".into() })
        .unwrap();
    let customers = CustomerStore::new(&state.db);
    for (i, status) in [CustomerStatus::Closed, CustomerStatus::Closed, CustomerStatus::Inactive]
        .into_iter()
        .enumerate()
    {
        customers
            .create(&CustomerFields {
                name: format!("C{i}"),
                email: format!("c{i}@shop.test"),
                zone_id: None,
                status,
            })
            .unwrap();
    }
    WebLeadStore::new(&state.db)
        .create(&WebLeadFields {
            full_name: "Marta".into(),
            phone: None,
            email: None,
            status: WebLeadStatus::Lost,
            requested_products: None,
        })
        .unwrap();

    let resp = get(&state, &token, "/dashboard");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("<strong>3</strong> total"));
    assert!(body.contains("<strong>1</strong> total"));
    assert!(body.contains("<strong>1</strong> zones"));
    assert!(body.contains("href=\"/customers?status=closed\""));
    assert!(body.contains("<span class=\"badge badge-green\">Closed</span> 2"));
    assert!(body.contains("<title>Dashboard · Catalog Admin</title>"));
}
