use super::DataStore;
use crate::error::Result;
use crate::model::MediaRecord;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<MediaRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<MediaRecord>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[MediaRecord]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::MediaType;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_record(mut self, title: &str, media_type: MediaType, platform: &str) -> Self {
            let mut records = self.store.load().unwrap();
            records.push(MediaRecord::new(
                title.to_string(),
                media_type,
                platform.to_string(),
            ));
            self.store.save(&records).unwrap();
            self
        }

        pub fn with_watched_record(mut self, title: &str, date: &str) -> Self {
            let mut records = self.store.load().unwrap();
            let mut record =
                MediaRecord::new(title.to_string(), MediaType::Movie, "Netflix".to_string());
            record.watched = true;
            record.watch_date = Some(date.to_string());
            records.push(record);
            self.store.save(&records).unwrap();
            self
        }
    }
}
