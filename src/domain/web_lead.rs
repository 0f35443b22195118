// src/domain/web_lead.rs

use serde::{Deserialize, Serialize};

use crate::lfpe::edit::blank_to_none;
use crate::lfpe::{Dimension, Draft, EditError, Entity, HasStatus, StatusKind};

/// Follow-up stage of an enquiry made through the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WebLeadStatus {
    #[default]
    Interested,
    Contacted,
    Negotiating,
    Closed,
    Lost,
}

impl WebLeadStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            WebLeadStatus::Interested => "💡",
            WebLeadStatus::Contacted => "📞",
            WebLeadStatus::Negotiating => "💼",
            WebLeadStatus::Closed => "✅",
            WebLeadStatus::Lost => "❌",
        }
    }
}

impl StatusKind for WebLeadStatus {
    const ALL: &'static [Self] = &[
        WebLeadStatus::Interested,
        WebLeadStatus::Contacted,
        WebLeadStatus::Negotiating,
        WebLeadStatus::Closed,
        WebLeadStatus::Lost,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            WebLeadStatus::Interested => "interested",
            WebLeadStatus::Contacted => "contacted",
            WebLeadStatus::Negotiating => "negotiating",
            WebLeadStatus::Closed => "closed",
            WebLeadStatus::Lost => "lost",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            WebLeadStatus::Interested => "Interested",
            WebLeadStatus::Contacted => "Contacted",
            WebLeadStatus::Negotiating => "Negotiating",
            WebLeadStatus::Closed => "Closed",
            WebLeadStatus::Lost => "Lost",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            WebLeadStatus::Interested => "badge-blue",
            WebLeadStatus::Contacted => "badge-yellow",
            WebLeadStatus::Negotiating => "badge-orange",
            WebLeadStatus::Closed => "badge-green",
            WebLeadStatus::Lost => "badge-red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebLead {
    pub id: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: WebLeadStatus,
    /// Free text describing what the visitor asked about.
    pub requested_products: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WebLeadFields {
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: WebLeadStatus,
    #[serde(default)]
    pub requested_products: Option<String>,
}

impl WebLeadFields {
    /// Same blank-to-absent normalisation the edit form applies.
    pub fn normalized(self) -> Self {
        let opt = |v: Option<String>| v.as_deref().and_then(blank_to_none);
        Self {
            full_name: self.full_name.trim().to_string(),
            phone: opt(self.phone),
            email: opt(self.email),
            status: self.status,
            requested_products: opt(self.requested_products),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebLeadDraft {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub status: WebLeadStatus,
    pub requested_products: String,
}

impl Entity for WebLead {
    type Fields = WebLeadFields;
    type Draft = WebLeadDraft;

    const DIMENSIONS: &'static [Dimension] = &[Dimension::Status];

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.full_name.as_str()]
    }

    fn dimension_value(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::Status => Some(self.status.as_str()),
            Dimension::Zone => None,
        }
    }
}

impl HasStatus for WebLead {
    type Status = WebLeadStatus;

    fn status(&self) -> WebLeadStatus {
        self.status
    }
}

impl Draft for WebLeadDraft {
    type Record = WebLead;
    type Fields = WebLeadFields;

    const REQUIRED: &'static [&'static str] = &["full_name"];

    fn from_record(lead: &WebLead) -> Self {
        Self {
            full_name: lead.full_name.clone(),
            phone: lead.phone.clone().unwrap_or_default(),
            email: lead.email.clone().unwrap_or_default(),
            status: lead.status,
            requested_products: lead.requested_products.clone().unwrap_or_default(),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "full_name" => Some(self.full_name.as_str()),
            "phone" => Some(self.phone.as_str()),
            "email" => Some(self.email.as_str()),
            "status" => Some(self.status.as_str()),
            "requested_products" => Some(self.requested_products.as_str()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), EditError> {
        match name {
            "full_name" => self.full_name = value.to_string(),
            "phone" => self.phone = value.to_string(),
            "email" => self.email = value.to_string(),
            "requested_products" => self.requested_products = value.to_string(),
            "status" => {
                self.status =
                    WebLeadStatus::parse(value).ok_or_else(|| EditError::InvalidValue {
                        field: "status",
                        value: value.to_string(),
                    })?
            }
            other => return Err(EditError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    fn to_fields(&self) -> WebLeadFields {
        WebLeadFields {
            full_name: self.full_name.clone(),
            phone: Some(self.phone.clone()),
            email: Some(self.email.clone()),
            status: self.status,
            requested_products: Some(self.requested_products.clone()),
        }
        .normalized()
    }
}
