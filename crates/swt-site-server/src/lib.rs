//! SWT site HTTP server.
//!
//! Wires the core library into an Axum server: the landing page at `/`, the
//! contact endpoint at `/api/contact`, sitemap and robots files, and static
//! assets from the public directory.

pub mod app;
pub mod config;
pub mod resend;
pub mod routes;
pub mod state;
