//! HTTP route modules.

pub mod contact;
pub mod health;
pub mod seo;
pub mod ui;
