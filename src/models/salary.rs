//! Salary record model and related types.
//!
//! This module defines the SalaryRecord struct, its status enum, and the
//! owned input types (new record, partial patch) consumed by the store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment status of a salary record.
///
/// The status is free-form: any value may change to any other value via an
/// update, no transition rules are enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryStatus {
    /// Not yet paid out. The default for newly created records.
    #[default]
    Pending,
    /// Paid out.
    Paid,
    /// Cancelled before payout.
    Cancelled,
}

/// A single salary entry in the in-memory collection.
///
/// The wire representation is camelCase (`id`, `amount`, `payDate`, `bonus`,
/// `status`). The `id` is assigned by the store and never client-supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    /// Unique identifier, assigned from a monotonically increasing counter.
    pub id: u64,
    /// Gross amount, non-negative.
    pub amount: Decimal,
    /// Pay date as a `YYYY-MM-DD` string.
    pub pay_date: String,
    /// Bonus on top of the amount, non-negative.
    pub bonus: Decimal,
    /// Payment status.
    pub status: SalaryStatus,
}

/// A validated candidate record, everything but the id.
///
/// Produced from a create request after validation; the store assigns the id
/// on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSalary {
    /// Gross amount, non-negative.
    pub amount: Decimal,
    /// Pay date as a `YYYY-MM-DD` string.
    pub pay_date: String,
    /// Bonus, non-negative.
    pub bonus: Decimal,
    /// Payment status.
    pub status: SalaryStatus,
}

/// A partial update to an existing record.
///
/// Each `Some` field overwrites the corresponding stored field; `None` fields
/// are left untouched. The id is never part of a patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryPatch {
    /// Replacement amount, if supplied.
    pub amount: Option<Decimal>,
    /// Replacement pay date, if supplied.
    pub pay_date: Option<String>,
    /// Replacement bonus, if supplied.
    pub bonus: Option<Decimal>,
    /// Replacement status, if supplied.
    pub status: Option<SalaryStatus>,
}

impl SalaryPatch {
    /// Shallow-merges the supplied fields onto `record`.
    pub fn apply_to(&self, record: &mut SalaryRecord) {
        if let Some(amount) = self.amount {
            record.amount = amount;
        }
        if let Some(pay_date) = &self.pay_date {
            record.pay_date = pay_date.clone();
        }
        if let Some(bonus) = self.bonus {
            record.bonus = bonus;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
    }
}
