// src/domain/customer.rs

use serde::{Deserialize, Serialize};

use crate::lfpe::edit::blank_to_none;
use crate::lfpe::{Dimension, Draft, EditError, Entity, HasStatus, StatusKind};

/// Where a customer sits in the sales agent's pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    #[default]
    Interested,
    InProgress,
    Closed,
    Inactive,
}

impl StatusKind for CustomerStatus {
    const ALL: &'static [Self] = &[
        CustomerStatus::Interested,
        CustomerStatus::InProgress,
        CustomerStatus::Closed,
        CustomerStatus::Inactive,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Interested => "interested",
            CustomerStatus::InProgress => "in_progress",
            CustomerStatus::Closed => "closed",
            CustomerStatus::Inactive => "inactive",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CustomerStatus::Interested => "Interested",
            CustomerStatus::InProgress => "In Progress",
            CustomerStatus::Closed => "Closed",
            CustomerStatus::Inactive => "Inactive",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            CustomerStatus::Interested => "badge-blue",
            CustomerStatus::InProgress => "badge-yellow",
            CustomerStatus::Closed => "badge-green",
            CustomerStatus::Inactive => "badge-gray",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Not enforced against the zones table; may dangle.
    pub zone_id: Option<String>,
    pub status: CustomerStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Writable columns of a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerFields {
    pub name: String,
    pub email: String,
    pub zone_id: Option<String>,
    pub status: CustomerStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub zone_id: String,
    pub status: CustomerStatus,
}

impl Entity for Customer {
    type Fields = CustomerFields;
    type Draft = CustomerDraft;

    const DIMENSIONS: &'static [Dimension] = &[Dimension::Zone, Dimension::Status];

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn dimension_value(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::Zone => self.zone_id.as_deref(),
            Dimension::Status => Some(self.status.as_str()),
        }
    }
}

impl HasStatus for Customer {
    type Status = CustomerStatus;

    fn status(&self) -> CustomerStatus {
        self.status
    }
}

impl Draft for CustomerDraft {
    type Record = Customer;
    type Fields = CustomerFields;

    const REQUIRED: &'static [&'static str] = &["name", "email"];

    fn from_record(c: &Customer) -> Self {
        Self {
            name: c.name.clone(),
            email: c.email.clone(),
            zone_id: c.zone_id.clone().unwrap_or_default(),
            status: c.status,
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(self.name.as_str()),
            "email" => Some(self.email.as_str()),
            "zone_id" => Some(self.zone_id.as_str()),
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), EditError> {
        match name {
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            "zone_id" => self.zone_id = value.to_string(),
            "status" => {
                self.status =
                    CustomerStatus::parse(value).ok_or_else(|| EditError::InvalidValue {
                        field: "status",
                        value: value.to_string(),
                    })?
            }
            other => return Err(EditError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    fn to_fields(&self) -> CustomerFields {
        CustomerFields {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            zone_id: blank_to_none(&self.zone_id),
            status: self.status,
        }
    }
}
