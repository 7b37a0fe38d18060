use std::path::Path;

use tracing::{debug, info, info_span};

use super::sample::{SampleDataset, SAMPLE_DATASET};
use super::seed::{seed_dataset, SeedError, SeedOutcome};
use crate::config::CatalogConfig;
use crate::db::{record_repo, seed_repo, Database, DatabaseError, Persist};
use crate::model::{Record, RecordId};
use crate::query::Predicate;

/// Typed catalog over one SQLite database.
///
/// Holds one insertion-ordered collection per entity type. Records can be
/// added and read but never updated or removed. The store is an explicit
/// value; hand it (or a clone) to whatever needs catalog access.
#[derive(Clone)]
pub struct CatalogStore {
    db: Database,
}

impl CatalogStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Opens a store backed by the database file at `path`.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        Database::open(path).map(Self::new)
    }

    /// Opens a store that lives only as long as this value.
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        Database::open_in_memory().map(Self::new)
    }

    /// Opens the configured database and seeds it when `seed.on_startup`
    /// is set.
    pub fn from_config(config: &CatalogConfig) -> crate::Result<Self> {
        let store = if config.database.in_memory {
            Self::open_in_memory()?
        } else {
            let path = config.database.resolve_path().ok_or_else(|| {
                crate::ConfigError::Validation {
                    message: "No database path configured and no home directory found"
                        .to_string(),
                }
            })?;
            Self::open(&path)?
        };

        if config.seed.on_startup {
            store.seed_once()?;
        }

        Ok(store)
    }

    /// Validates `fields`, assigns a fresh id and the current time, and
    /// appends the record.
    pub fn insert<T: Persist>(&self, fields: T) -> crate::Result<RecordId> {
        self.insert_record(Record::new(fields))
    }

    /// Appends a record that already carries its id and timestamp.
    ///
    /// Fails with [`DatabaseError::DuplicateId`] if the id is taken.
    pub fn insert_record<T: Persist>(&self, record: Record<T>) -> crate::Result<RecordId> {
        let kind = T::KIND;
        let _span = info_span!("catalog.insert", %kind, id = %record.id).entered();

        record.fields.validate()?;
        record_repo::insert(&self.db, &record)?;

        debug!("Record inserted");
        Ok(record.id)
    }

    pub fn get<T: Persist>(&self, id: &RecordId) -> Result<Option<Record<T>>, DatabaseError> {
        record_repo::find_by_id(&self.db, id)
    }

    /// All records of type `T` in insertion order.
    pub fn list<T: Persist>(&self) -> Result<Vec<Record<T>>, DatabaseError> {
        record_repo::list(&self.db)
    }

    /// The records of type `T` for which `predicate` holds, in insertion
    /// order. No match yields an empty list.
    pub fn filter<T, P>(&self, predicate: P) -> Result<Vec<Record<T>>, DatabaseError>
    where
        T: Persist,
        P: Fn(&Record<T>) -> bool,
    {
        let mut records = self.list::<T>()?;
        records.retain(|r| predicate(r));
        Ok(records)
    }

    /// Same as [`filter`](Self::filter) for a composed [`Predicate`].
    pub fn filter_by<T: Persist>(
        &self,
        predicate: &Predicate<T>,
    ) -> Result<Vec<Record<T>>, DatabaseError> {
        self.filter(|r| predicate.matches(r))
    }

    pub fn count<T: Persist>(&self) -> Result<u64, DatabaseError> {
        record_repo::count::<T>(&self.db)
    }

    /// Seeds the sample dataset unless it was seeded before.
    ///
    /// Safe to call on every start; the second and later calls write
    /// nothing and return [`SeedOutcome::AlreadySeeded`].
    pub fn seed_once(&self) -> Result<SeedOutcome, SeedError> {
        let data = SampleDataset::build(chrono::Utc::now());
        let outcome = seed_dataset(&self.db, SAMPLE_DATASET, &data)?;
        if let SeedOutcome::Seeded { inserted } = outcome {
            info!(inserted, "Catalog seeded with sample data");
        }
        Ok(outcome)
    }

    pub fn is_seeded(&self) -> Result<bool, DatabaseError> {
        Ok(seed_repo::find(&self.db, SAMPLE_DATASET)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::model::{Activity, Career, Program, School, Teacher};
    use crate::CampusError;

    fn store() -> CatalogStore {
        CatalogStore::open_in_memory().unwrap()
    }

    #[test]
    fn test_insert_then_list_contains_record() {
        let store = store();
        let id = store
            .insert(School::new("International School", "789 Global Plaza", 2015))
            .unwrap();

        let schools = store.list::<School>().unwrap();
        assert_eq!(schools.len(), 1);
        assert_eq!(schools[0].id, id);
        assert_eq!(schools[0].established_year, 2015);
    }

    #[test]
    fn test_invalid_insert_writes_nothing() {
        let store = store();
        let err = store.insert(Teacher::new("", "Science")).unwrap_err();
        assert!(matches!(
            err,
            CampusError::Validation(ValidationError::EmptyField { field: "name", .. })
        ));
        assert_eq!(store.count::<Teacher>().unwrap(), 0);
    }

    #[test]
    fn test_non_finite_fee_is_a_validation_error() {
        let store = store();
        for fee in [f64::NAN, f64::INFINITY] {
            let err = store
                .insert(Program::new("Bursary", "Ages 6-12", fee))
                .unwrap_err();
            assert!(matches!(
                err,
                CampusError::Validation(ValidationError::InvalidNumber { field: "fee", .. })
            ));
        }
        assert_eq!(store.count::<Program>().unwrap(), 0);
    }

    #[test]
    fn test_insert_record_keeps_given_identity() {
        let store = store();
        let record = Record::new(Activity::new("Robotics", "Academic"));
        let id = store.insert_record(record.clone()).unwrap();
        assert_eq!(id, record.id);
        assert_eq!(store.get::<Activity>(&id).unwrap(), Some(record));
    }

    #[test]
    fn test_filter_returns_empty_on_no_match() {
        let store = store();
        store.insert(Activity::new("Chess", "Academic")).unwrap();
        let none = store
            .filter::<Activity, _>(|r| r.category == "Sports")
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_by_predicate() {
        let store = store();
        store.insert(Career::new("Librarian", "Contract")).unwrap();
        store
            .insert(Career::new("Bus Driver", "Contract").deactivated())
            .unwrap();

        let open = store.filter_by(&Predicate::new(|c: &Record<Career>| c.is_active)).unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].job_title, "Librarian");
    }

    #[test]
    fn test_seed_once_reports_outcome() {
        let store = store();
        assert!(!store.is_seeded().unwrap());
        assert!(matches!(
            store.seed_once().unwrap(),
            SeedOutcome::Seeded { inserted: 21 }
        ));
        assert!(store.is_seeded().unwrap());
        assert_eq!(store.seed_once().unwrap(), SeedOutcome::AlreadySeeded);
    }
}
