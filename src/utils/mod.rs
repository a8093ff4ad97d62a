pub mod flash;
pub mod log_sanitizer;

pub use flash::{Flash, FlashCategory};
pub use log_sanitizer::*;
