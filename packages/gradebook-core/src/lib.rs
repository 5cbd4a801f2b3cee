//! Record keeping for lab coursework.
//!
//! Provides the student/lab/submission record stores, the grading
//! operations built on top of them, JSON import and file persistence,
//! and the longest-run sequence analyzers used by the drill menus.

pub mod config;
pub mod error;
pub mod import;
pub mod model;
pub mod numbers;
pub mod persistence;
pub mod sequence;
pub mod service;
pub mod store;

pub use config::GradebookConfig;
pub use error::{GradebookError, Reference, Result};
pub use service::Gradebook;
