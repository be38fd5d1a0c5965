//! Utility functions for hash generation and URL validation.
//!
//! - [`hash_generator`] - Short hash generation
//! - [`url_validator`] - Original-URL validation

pub mod hash_generator;
pub mod url_validator;
