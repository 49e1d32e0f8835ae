//! Shared dataset for unit tests.

use common::InMemoryDataSource;

pub(crate) fn dataset() -> InMemoryDataSource {
    InMemoryDataSource::from_json(include_str!("../tests/fixtures/dataset.json"))
        .expect("fixture dataset is valid JSON")
}
