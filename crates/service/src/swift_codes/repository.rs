use async_trait::async_trait;
use models::swift_code::Model;

use crate::errors::ServiceError;

/// Store seam for swift code records. Implementations must be safe to share
/// across concurrently running requests.
#[async_trait]
pub trait SwiftCodeRepository: Send + Sync {
    /// Every record, in store order.
    async fn list(&self) -> Result<Vec<Model>, ServiceError>;
    async fn find(&self, swift_code: &str) -> Result<Option<Model>, ServiceError>;
    /// Records other than `headquarter` whose first eight characters equal `prefix`.
    async fn find_branches(&self, headquarter: &str, prefix: &str) -> Result<Vec<Model>, ServiceError>;
    /// Records whose `country_iso2` equals `country_iso2` exactly.
    async fn list_by_country(&self, country_iso2: &str) -> Result<Vec<Model>, ServiceError>;
    /// Fails with `ServiceError::Conflict` when the identifier is taken.
    async fn insert(&self, record: Model) -> Result<(), ServiceError>;
    /// Returns the number of rows removed.
    async fn delete(&self, swift_code: &str) -> Result<u64, ServiceError>;
}

/// Simple in-memory repository for tests and local runs
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Mutex, MutexGuard};

    use models::swift_code::is_branch_of;

    /// Keeps insertion order and counts every store call.
    #[derive(Default)]
    pub struct MockSwiftCodeRepository {
        records: Mutex<Vec<Model>>,
        calls: AtomicUsize,
    }

    impl MockSwiftCodeRepository {
        /// Seed the store directly, bypassing validation.
        pub fn with_records(records: Vec<Model>) -> Self {
            Self { records: Mutex::new(records), calls: AtomicUsize::new(0) }
        }

        /// Number of repository calls made so far.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn records(&self) -> Result<MutexGuard<'_, Vec<Model>>, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.records.lock().map_err(|_| ServiceError::Db("in-memory store poisoned".into()))
        }
    }

    #[async_trait]
    impl SwiftCodeRepository for MockSwiftCodeRepository {
        async fn list(&self) -> Result<Vec<Model>, ServiceError> {
            Ok(self.records()?.clone())
        }

        async fn find(&self, swift_code: &str) -> Result<Option<Model>, ServiceError> {
            Ok(self.records()?.iter().find(|r| r.swift_code == swift_code).cloned())
        }

        async fn find_branches(&self, headquarter: &str, prefix: &str) -> Result<Vec<Model>, ServiceError> {
            Ok(self
                .records()?
                .iter()
                .filter(|r| r.swift_code.starts_with(prefix) && is_branch_of(&r.swift_code, headquarter))
                .cloned()
                .collect())
        }

        async fn list_by_country(&self, country_iso2: &str) -> Result<Vec<Model>, ServiceError> {
            Ok(self.records()?.iter().filter(|r| r.country_iso2 == country_iso2).cloned().collect())
        }

        async fn insert(&self, record: Model) -> Result<(), ServiceError> {
            let mut records = self.records()?;
            if records.iter().any(|r| r.swift_code == record.swift_code) {
                return Err(ServiceError::Conflict(record.swift_code));
            }
            records.push(record);
            Ok(())
        }

        async fn delete(&self, swift_code: &str) -> Result<u64, ServiceError> {
            let mut records = self.records()?;
            let before = records.len();
            records.retain(|r| r.swift_code != swift_code);
            Ok((before - records.len()) as u64)
        }
    }
}
