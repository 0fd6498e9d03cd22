//! Utility functions shared by the HTTP layer and the admin CLI.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Acceptance check for submitted URLs

pub mod code_generator;
pub mod url_validator;
