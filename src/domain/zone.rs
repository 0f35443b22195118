// src/domain/zone.rs

use serde::Serialize;

use crate::lfpe::{Dimension, Draft, EditError, Entity};

/// Shown wherever a customer's zone reference cannot be resolved.
pub const NO_ZONE: &str = "No zone";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneFields {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneDraft {
    pub name: String,
}

/// Name of the zone `zone_id` points at, or the fallback label.
pub fn zone_name<'a>(zones: &'a [Zone], zone_id: Option<&str>) -> &'a str {
    zone_id
        .and_then(|id| zones.iter().find(|z| z.id == id))
        .map(|z| z.name.as_str())
        .unwrap_or(NO_ZONE)
}

impl Entity for Zone {
    type Fields = ZoneFields;
    type Draft = ZoneDraft;

    const DIMENSIONS: &'static [Dimension] = &[];

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn dimension_value(&self, _dimension: Dimension) -> Option<&str> {
        None
    }
}

impl Draft for ZoneDraft {
    type Record = Zone;
    type Fields = ZoneFields;

    const REQUIRED: &'static [&'static str] = &["name"];

    fn from_record(zone: &Zone) -> Self {
        Self {
            name: zone.name.clone(),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(self.name.as_str()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), EditError> {
        match name {
            "name" => {
                self.name = value.to_string();
                Ok(())
            }
            other => Err(EditError::UnknownField(other.to_string())),
        }
    }

    fn to_fields(&self) -> ZoneFields {
        ZoneFields {
            name: self.name.trim().to_string(),
        }
    }
}
