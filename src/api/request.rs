//! Request types for the salary records API.
//!
//! This module defines the JSON request bodies for the create and update
//! endpoints, and their conversions into the domain types the store accepts.
//! Wire fields are camelCase; the create schema supplies defaults for
//! `bonus` (0) and `status` (`Pending`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{NewSalary, SalaryPatch, SalaryStatus};

/// Request body for `POST /`.
///
/// `amount` and `payDate` are required; `bonus` and `status` fall back to
/// their schema defaults when omitted. Range and pattern rules are checked
/// by the validation layer after deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSalaryRequest {
    /// Gross amount.
    pub amount: Decimal,
    /// Pay date as a `YYYY-MM-DD` string.
    pub pay_date: String,
    /// Bonus, defaulting to 0 when omitted.
    #[serde(default)]
    pub bonus: Decimal,
    /// Payment status, defaulting to `Pending` when omitted.
    #[serde(default)]
    pub status: SalaryStatus,
}

/// Request body for `PUT /:id`.
///
/// Every field is optional; a field absent from the body leaves the stored
/// value unchanged. Fields that are present are validated with the same
/// rules as on create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSalaryRequest {
    /// Replacement amount, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// Replacement pay date, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_date: Option<String>,
    /// Replacement bonus, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus: Option<Decimal>,
    /// Replacement status, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SalaryStatus>,
}

impl From<CreateSalaryRequest> for NewSalary {
    fn from(req: CreateSalaryRequest) -> Self {
        NewSalary {
            amount: req.amount,
            pay_date: req.pay_date,
            bonus: req.bonus,
            status: req.status,
        }
    }
}

impl From<UpdateSalaryRequest> for SalaryPatch {
    fn from(req: UpdateSalaryRequest) -> Self {
        SalaryPatch {
            amount: req.amount,
            pay_date: req.pay_date,
            bonus: req.bonus,
            status: req.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_create_request_with_defaults() {
        let json = r#"{
            "amount": 3000,
            "payDate": "2024-02-01"
        }"#;

        let request: CreateSalaryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.amount, Decimal::from(3000));
        assert_eq!(request.pay_date, "2024-02-01");
        assert_eq!(request.bonus, Decimal::ZERO);
        assert_eq!(request.status, SalaryStatus::Pending);
    }

    #[test]
    fn test_deserialize_create_request_with_all_fields() {
        let json = r#"{
            "amount": 45000,
            "payDate": "2024-03-25",
            "bonus": 1500,
            "status": "Paid"
        }"#;

        let request: CreateSalaryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.bonus, Decimal::from(1500));
        assert_eq!(request.status, SalaryStatus::Paid);
    }

    #[test]
    fn test_create_request_requires_amount_and_pay_date() {
        assert!(serde_json::from_str::<CreateSalaryRequest>(r#"{"payDate":"2024-02-01"}"#).is_err());
        assert!(serde_json::from_str::<CreateSalaryRequest>(r#"{"amount":3000}"#).is_err());
    }

    #[test]
    fn test_deserialize_empty_update_request() {
        let request: UpdateSalaryRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, UpdateSalaryRequest::default());
    }

    #[test]
    fn test_deserialize_partial_update_request() {
        let json = r#"{"status": "Pending"}"#;

        let request: UpdateSalaryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.status, Some(SalaryStatus::Pending));
        assert_eq!(request.amount, None);
        assert_eq!(request.pay_date, None);
        assert_eq!(request.bonus, None);
    }

    #[test]
    fn test_create_request_conversion() {
        let req = CreateSalaryRequest {
            amount: Decimal::from(3000),
            pay_date: "2024-02-01".to_string(),
            bonus: Decimal::ZERO,
            status: SalaryStatus::Pending,
        };

        let new: NewSalary = req.into();
        assert_eq!(new.amount, Decimal::from(3000));
        assert_eq!(new.pay_date, "2024-02-01");
    }

    #[test]
    fn test_update_request_conversion_keeps_absent_fields_absent() {
        let req = UpdateSalaryRequest {
            bonus: Some(Decimal::from(250)),
            ..Default::default()
        };

        let patch: SalaryPatch = req.into();
        assert_eq!(patch.bonus, Some(Decimal::from(250)));
        assert_eq!(patch.amount, None);
        assert_eq!(patch.pay_date, None);
        assert_eq!(patch.status, None);
    }
}
