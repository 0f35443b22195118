mod auth_tests;
mod customers_tests;
mod dashboard_tests;
mod support;
mod web_leads_tests;
mod zones_tests;
