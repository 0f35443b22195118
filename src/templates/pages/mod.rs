pub mod checking;
pub mod customers;
pub mod dashboard;
pub mod sign_in;
pub mod web_leads;
pub mod zones;

pub use checking::checking_page;
pub use customers::{customers_page, CustomersVm};
pub use dashboard::{dashboard_page, DashboardVm};
pub use sign_in::sign_in_page;
pub use web_leads::{web_leads_page, WebLeadsVm};
pub use zones::{zones_page, ZonesVm};
