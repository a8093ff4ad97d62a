use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PropertyType {
    Rural,
    Urban,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceInquiry {
    pub id: i64,
    pub contact_submission_id: i64,
    /// Open set: measurement, georeferencing, legalization, full-service, ...
    pub service_category: String,
    /// Hectares.
    pub estimated_area: Option<f64>,
    pub property_type: Option<PropertyType>,
    pub location: Option<String>,
    pub urgency: Urgency,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewServiceInquiry {
    pub contact_submission_id: i64,
    pub service_category: String,
    pub estimated_area: Option<f64>,
    pub property_type: Option<PropertyType>,
    pub location: Option<String>,
    #[serde(default)]
    pub urgency: Urgency,
}

impl NewServiceInquiry {
    pub fn new(contact_submission_id: i64, service_category: impl Into<String>) -> Self {
        Self {
            contact_submission_id,
            service_category: service_category.into(),
            estimated_area: None,
            property_type: None,
            location: None,
            urgency: Urgency::default(),
        }
    }
}
