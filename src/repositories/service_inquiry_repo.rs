use chrono::Utc;
use sqlx::SqlitePool;

use crate::middleware::error_handling::Result;
use crate::models::{NewServiceInquiry, ServiceInquiry};

const INQUIRY_COLUMNS: &str = "id, contact_submission_id, service_category, estimated_area, \
     property_type, location, urgency, created_at";

pub struct ServiceInquiryRepository {
    pool: SqlitePool,
}

impl ServiceInquiryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an inquiry under an existing submission. Fails with a foreign
    /// key violation when the parent does not exist.
    pub async fn create(&self, inquiry: &NewServiceInquiry) -> Result<ServiceInquiry> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, ServiceInquiry>(&format!(
            r#"
            INSERT INTO service_inquiries
                (contact_submission_id, service_category, estimated_area, property_type, location, urgency, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            INQUIRY_COLUMNS
        ))
        .bind(inquiry.contact_submission_id)
        .bind(&inquiry.service_category)
        .bind(inquiry.estimated_area)
        .bind(inquiry.property_type)
        .bind(&inquiry.location)
        .bind(inquiry.urgency)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    /// Inquiries belonging to one submission, oldest first.
    pub async fn list_for_submission(&self, contact_submission_id: i64) -> Result<Vec<ServiceInquiry>> {
        let inquiries = sqlx::query_as::<_, ServiceInquiry>(&format!(
            "SELECT {} FROM service_inquiries WHERE contact_submission_id = ? ORDER BY created_at ASC, id ASC",
            INQUIRY_COLUMNS
        ))
        .bind(contact_submission_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(inquiries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::database::create_in_memory_pool;
    use crate::models::{NewContactSubmission, PropertyType, Urgency};
    use crate::repositories::ContactSubmissionRepository;

    async fn setup() -> (ContactSubmissionRepository, ServiceInquiryRepository) {
        let pool = create_in_memory_pool().await.unwrap();
        (
            ContactSubmissionRepository::new(pool.clone()),
            ServiceInquiryRepository::new(pool),
        )
    }

    async fn parent(submissions: &ContactSubmissionRepository) -> i64 {
        submissions
            .create(&NewContactSubmission {
                name: "Gabriela".to_string(),
                email: "gabi@example.com".to_string(),
                phone: None,
                service_type: None,
                message: "Quero legalizar minha chácara".to_string(),
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_create_with_defaults() {
        let (submissions, inquiries) = setup().await;
        let parent_id = parent(&submissions).await;

        let created = inquiries
            .create(&NewServiceInquiry::new(parent_id, "legalization"))
            .await
            .unwrap();

        assert_eq!(created.contact_submission_id, parent_id);
        assert_eq!(created.service_category, "legalization");
        assert_eq!(created.urgency, Urgency::Normal);
        assert!(created.estimated_area.is_none());
        assert!(created.property_type.is_none());
    }

    #[tokio::test]
    async fn test_full_inquiry_round_trip() {
        let (submissions, inquiries) = setup().await;
        let parent_id = parent(&submissions).await;

        let mut inquiry = NewServiceInquiry::new(parent_id, "georeferencing");
        inquiry.estimated_area = Some(12.5);
        inquiry.property_type = Some(PropertyType::Rural);
        inquiry.location = Some("Itapetininga - SP".to_string());
        inquiry.urgency = Urgency::High;
        inquiries.create(&inquiry).await.unwrap();

        let listed = inquiries.list_for_submission(parent_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].estimated_area, Some(12.5));
        assert_eq!(listed[0].property_type, Some(PropertyType::Rural));
        assert_eq!(listed[0].location.as_deref(), Some("Itapetininga - SP"));
        assert_eq!(listed[0].urgency, Urgency::High);
    }

    #[tokio::test]
    async fn test_missing_parent_rejected() {
        let (_submissions, inquiries) = setup().await;

        let result = inquiries.create(&NewServiceInquiry::new(999, "measurement")).await;
        assert!(result.is_err());
        assert!(inquiries.list_for_submission(999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_negative_area_rejected() {
        let (submissions, inquiries) = setup().await;
        let parent_id = parent(&submissions).await;

        let mut inquiry = NewServiceInquiry::new(parent_id, "measurement");
        inquiry.estimated_area = Some(-1.0);
        assert!(inquiries.create(&inquiry).await.is_err());
    }

    #[tokio::test]
    async fn test_list_scoped_to_parent() {
        let (submissions, inquiries) = setup().await;
        let first = parent(&submissions).await;
        let second = parent(&submissions).await;

        inquiries.create(&NewServiceInquiry::new(first, "measurement")).await.unwrap();
        inquiries.create(&NewServiceInquiry::new(first, "full-service")).await.unwrap();
        inquiries.create(&NewServiceInquiry::new(second, "legalization")).await.unwrap();

        let categories: Vec<String> = inquiries
            .list_for_submission(first)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.service_category)
            .collect();
        assert_eq!(categories, vec!["measurement", "full-service"]);
        assert_eq!(inquiries.list_for_submission(second).await.unwrap().len(), 1);
    }
}
