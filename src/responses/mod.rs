pub mod errors;
pub mod html;
pub mod json;
pub mod redirect;

pub use errors::{error_to_response, ResultResp};

// Normal HTML response
pub use html::{html_response, html_response_with_status, stylesheet_response};
pub use json::json_response;
pub use redirect::see_other;
