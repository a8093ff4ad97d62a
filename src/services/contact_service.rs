use sqlx::SqlitePool;
use validator::Validate;

use crate::middleware::error_handling::{AppError, Result};
use crate::models::{
    ContactForm, ContactSubmission, NewContactSubmission, NewServiceInquiry, ServiceInquiry,
    UpdateSubmissionStatus,
};
use crate::repositories::{ContactSubmissionRepository, ServiceInquiryRepository};
use crate::utils::log_sanitizer::sanitize_for_log;

pub struct ContactService {
    submissions: ContactSubmissionRepository,
    inquiries: ServiceInquiryRepository,
}

impl ContactService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            submissions: ContactSubmissionRepository::new(pool.clone()),
            inquiries: ServiceInquiryRepository::new(pool),
        }
    }

    /// Validate a posted contact form and persist it.
    ///
    /// Every field is trimmed first. Name, email and message must be
    /// non-empty; nothing is written otherwise.
    pub async fn submit(&self, form: ContactForm) -> Result<ContactSubmission> {
        let form = form.trimmed();

        if let Err(errors) = form.validate() {
            tracing::info!(
                "Rejected contact form with missing fields: {:?}",
                errors.field_errors().keys().collect::<Vec<_>>()
            );
            return Err(AppError::Validation(errors));
        }

        let new_submission = NewContactSubmission::from(form);

        match self.submissions.create(&new_submission).await {
            Ok(submission) => {
                tracing::info!(
                    "Contact form submission saved to database: {} ({})",
                    sanitize_for_log(&submission.name),
                    sanitize_for_log(&submission.email)
                );
                Ok(submission)
            }
            Err(e) => {
                tracing::error!(
                    "Error saving contact submission from {}: {}",
                    sanitize_for_log(&new_submission.email),
                    e
                );
                Err(e)
            }
        }
    }

    /// Every submission, most recent first.
    pub async fn list_submissions(&self) -> Result<Vec<ContactSubmission>> {
        self.submissions.list_recent().await
    }

    pub async fn get_submission(&self, id: i64) -> Result<ContactSubmission> {
        self.submissions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Contact submission {}", id)))
    }

    /// Record follow-up progress. Any status may follow any other.
    pub async fn update_status(&self, id: i64, update: UpdateSubmissionStatus) -> Result<ContactSubmission> {
        let updated = self
            .submissions
            .update_status(id, &update)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Contact submission {}", id)))?;

        tracing::info!("Contact submission {} marked {}", id, updated.status);
        Ok(updated)
    }

    /// Attach structured service detail to an existing submission.
    pub async fn record_service_inquiry(&self, inquiry: NewServiceInquiry) -> Result<ServiceInquiry> {
        match self.inquiries.create(&inquiry).await {
            Ok(created) => {
                tracing::info!(
                    "Service inquiry {} ({}) recorded for submission {}",
                    created.id,
                    sanitize_for_log(&created.service_category),
                    created.contact_submission_id
                );
                Ok(created)
            }
            Err(e) => {
                tracing::error!(
                    "Error saving service inquiry for submission {}: {}",
                    inquiry.contact_submission_id,
                    e
                );
                Err(e)
            }
        }
    }

    pub async fn service_inquiries_for(&self, submission_id: i64) -> Result<Vec<ServiceInquiry>> {
        self.inquiries.list_for_submission(submission_id).await
    }
}
