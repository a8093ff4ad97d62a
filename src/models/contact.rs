use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    New,
    Contacted,
    Completed,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::New => "new",
            SubmissionStatus::Contacted => "contacted",
            SubmissionStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_type: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    pub notes: Option<String>,
}

impl ContactSubmission {
    /// JSON view served by `/admin/submissions.json`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "email": self.email,
            "phone": self.phone,
            "service_type": self.service_type,
            "message": self.message,
            "created_at": self.created_at.to_rfc3339(),
            "status": self.status,
            "notes": self.notes,
        })
    }
}

/// Raw contact form fields as posted by the visitor. Absent fields
/// deserialize as empty strings.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    #[serde(default)]
    pub service_type: String,
}

impl ContactForm {
    /// Strip leading and trailing whitespace from every field.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
            service_type: self.service_type.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_type: Option<String>,
    pub message: String,
}

// Optional fields keep whatever the visitor posted, including an empty string.
impl From<ContactForm> for NewContactSubmission {
    fn from(form: ContactForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone: Some(form.phone),
            service_type: Some(form.service_type),
            message: form.message,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSubmissionStatus {
    pub status: SubmissionStatus,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str() {
        assert_eq!(SubmissionStatus::New.as_str(), "new");
        assert_eq!(SubmissionStatus::Contacted.as_str(), "contacted");
        assert_eq!(SubmissionStatus::Completed.to_string(), "completed");
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::New);
    }

    #[test]
    fn test_trimmed_form_validation() {
        let form = ContactForm {
            name: "   ".to_string(),
            email: " maria@example.com ".to_string(),
            phone: " 11 99999-0000 ".to_string(),
            message: "\tOlá\n".to_string(),
            service_type: String::new(),
        }
        .trimmed();

        assert_eq!(form.email, "maria@example.com");
        assert_eq!(form.phone, "11 99999-0000");
        assert_eq!(form.message, "Olá");

        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(!fields.contains_key("email"));
        assert!(!fields.contains_key("message"));
    }

    #[test]
    fn test_email_format_not_checked() {
        let form = ContactForm {
            name: "Maria".to_string(),
            email: "not-an-email".to_string(),
            message: "Oi".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_to_json_shape() {
        let now = Utc::now();
        let submission = ContactSubmission {
            id: 7,
            name: "Maria Silva".to_string(),
            email: "maria@example.com".to_string(),
            phone: None,
            service_type: Some("georreferenciamento".to_string()),
            message: "Preciso de georreferenciamento".to_string(),
            created_at: now,
            updated_at: now,
            status: SubmissionStatus::New,
            notes: None,
        };

        let json = submission.to_json();
        assert_eq!(json["id"], 7);
        assert_eq!(json["status"], "new");
        assert_eq!(json["created_at"], now.to_rfc3339());
        assert!(json["phone"].is_null());
        assert!(json.get("updated_at").is_none());
    }
}
