pub mod admin;
pub mod contact;
pub mod pages;

pub use admin::*;
pub use contact::*;
pub use pages::*;
