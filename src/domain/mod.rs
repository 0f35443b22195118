pub mod customer;
pub mod format;
pub mod web_lead;
pub mod zone;

pub use customer::{Customer, CustomerDraft, CustomerFields, CustomerStatus};
pub use web_lead::{WebLead, WebLeadDraft, WebLeadFields, WebLeadStatus};
pub use zone::{zone_name, Zone, ZoneDraft, ZoneFields, NO_ZONE};
