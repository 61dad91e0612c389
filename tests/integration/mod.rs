//! Integration test module
//!
//! Contains end-to-end tests for all API endpoints.

pub mod common;
pub mod function_tests;
