//! State shared by all menu actions.

use std::path::PathBuf;

use gradebook_core::Gradebook;

/// Everything the menus act on, passed explicitly to each action.
pub struct Session {
    pub gradebook: Gradebook,
    /// Sequence typed in the analyzer menu
    pub numbers: Vec<i64>,
    /// Dataset loaded by "Load sample data"
    pub sample_path: PathBuf,
}

impl Session {
    pub fn new(gradebook: Gradebook, sample_path: PathBuf) -> Self {
        Self {
            gradebook,
            numbers: Vec::new(),
            sample_path,
        }
    }
}
