//! Core data models for the salary records service.
//!
//! This module contains the domain types shared by the store, the validation
//! layer, and the HTTP API.

mod salary;

pub use salary::{NewSalary, SalaryPatch, SalaryRecord, SalaryStatus};
