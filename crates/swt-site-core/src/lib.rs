//! Core library for the SWT site.
//!
//! Contains the line-based code highlighter used by the quick-start section
//! (pattern table, tokenizer, renderer) and the contact submission pipeline
//! (validation, email provider abstraction, mock mode). This crate knows
//! nothing about HTTP; the server crate wires it to routes.

pub mod contact;
pub mod error;
pub mod mailer;
pub mod pattern;
pub mod render;
pub mod tokenizer;
