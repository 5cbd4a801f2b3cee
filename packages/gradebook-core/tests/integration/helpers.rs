//! Shared fixtures.

use gradebook_core::import::Dataset;
use gradebook_core::Gradebook;

pub const SAMPLE_JSON: &str = include_str!("../fixtures/sample.json");

pub fn sample_dataset() -> Dataset {
    Dataset::from_json_str(SAMPLE_JSON).unwrap()
}

/// In-memory gradebook loaded with the sample dataset.
pub fn sample_gradebook() -> Gradebook {
    let mut gradebook = Gradebook::in_memory();
    gradebook.load_dataset(sample_dataset()).unwrap();
    gradebook
}
