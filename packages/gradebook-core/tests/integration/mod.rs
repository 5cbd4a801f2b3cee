//! Integration test suite.
//!
//! 1. Sample dataset import and queries
//! 2. Grading over the sample dataset
//! 3. File persistence

pub mod grading_tests;
pub mod helpers;
pub mod import_tests;
pub mod persistence_tests;
