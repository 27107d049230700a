//! In-memory storage for salary records.
//!
//! The store exclusively owns the record collection and the id counter; no
//! other component touches them directly. All lookups are linear scans, which
//! is the intended bound for a process-local collection of this size.
//!
//! # Example
//!
//! ```
//! use salary_service::store::SalaryStore;
//!
//! let store = SalaryStore::seeded();
//! assert_eq!(store.len(), 1);
//! assert!(store.find(1).is_some());
//! ```

use rust_decimal::Decimal;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{NewSalary, SalaryPatch, SalaryRecord, SalaryStatus};

/// The process-local collection of salary records.
///
/// Records are kept in insertion order. Ids come from a monotonically
/// increasing counter and are never reused within the lifetime of the store,
/// even after deletes.
#[derive(Debug, Clone)]
pub struct SalaryStore {
    records: Vec<SalaryRecord>,
    next_id: u64,
}

impl SalaryStore {
    /// Creates an empty store with the id counter at 1.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store holding the startup seed record, counter at 2.
    pub fn seeded() -> Self {
        Self {
            records: vec![SalaryRecord {
                id: 1,
                amount: Decimal::from(50000),
                pay_date: "2024-01-25".to_string(),
                bonus: Decimal::from(2000),
                status: SalaryStatus::Paid,
            }],
            next_id: 2,
        }
    }

    /// Returns the records in insertion order.
    pub fn records(&self) -> &[SalaryRecord] {
        &self.records
    }

    /// Returns the number of records in the collection.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by id with a linear scan.
    pub fn find(&self, id: u64) -> Option<&SalaryRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Inserts a new record, assigning the next id.
    ///
    /// The counter is post-incremented, so it always points at the next
    /// unused value. Returns the created record.
    pub fn insert(&mut self, new: NewSalary) -> &SalaryRecord {
        let id = self.next_id;
        self.next_id += 1;

        self.records.push(SalaryRecord {
            id,
            amount: new.amount,
            pay_date: new.pay_date,
            bonus: new.bonus,
            status: new.status,
        });
        // Just pushed, so the collection is non-empty.
        self.records.last().unwrap()
    }

    /// Merges the supplied patch fields onto the record with the given id.
    ///
    /// Absent fields retain their prior values; the id is never altered.
    /// Returns the updated record, or [`ServiceError::NotFound`] if no record
    /// matches — in which case the collection is untouched.
    pub fn update(&mut self, id: u64, patch: SalaryPatch) -> ServiceResult<&SalaryRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ServiceError::NotFound { id })?;

        patch.apply_to(record);
        Ok(record)
    }

    /// Removes the record with the given id, preserving the order of the
    /// remaining records.
    ///
    /// Returns [`ServiceError::NotFound`] if no record matches. The id of a
    /// removed record is not reassigned later.
    pub fn remove(&mut self, id: u64) -> ServiceResult<()> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(ServiceError::NotFound { id })?;

        self.records.remove(index);
        Ok(())
    }
}

impl Default for SalaryStore {
    fn default() -> Self {
        Self::new()
    }
}
