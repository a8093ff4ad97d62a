pub mod contact_submission_repo;
pub mod service_inquiry_repo;

pub use contact_submission_repo::*;
pub use service_inquiry_repo::*;
