pub mod contact;
pub mod service_inquiry;

pub use contact::*;
pub use service_inquiry::*;
