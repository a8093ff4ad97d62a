pub mod error_handling;
pub mod request_id;
pub mod security_headers;

pub use error_handling::*;
pub use request_id::*;
pub use security_headers::*;
