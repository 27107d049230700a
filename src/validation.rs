//! Field-level validation for candidate salary data.
//!
//! Validation is a pure function over domain types, independent of the HTTP
//! layer: the handlers call it before any mutation, so a rejected body never
//! reaches the store. Type-level failures (a non-numeric amount, an unknown
//! status) are already rejected during deserialization and never get here.

use rust_decimal::Decimal;

use crate::error::{FieldError, ServiceError, ServiceResult};
use crate::models::{NewSalary, SalaryPatch};

const NON_NEGATIVE: &str = "must be greater than or equal to 0";
const DATE_PATTERN: &str = "must match the YYYY-MM-DD date pattern";

/// Returns true if `value` matches `^\d{4}-\d{2}-\d{2}$`.
///
/// This is a pattern check only, mirroring the source schema: it does not
/// reject impossible calendar dates.
pub fn is_date_pattern(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 4 && *i != 7)
            .all(|(_, b)| b.is_ascii_digit())
}

/// Validates a candidate record for the create operation.
///
/// Checks every schema rule and collects all failures, so a client sees each
/// offending field in one response.
pub fn validate_new(new: &NewSalary) -> ServiceResult<()> {
    let mut errors = Vec::new();

    if new.amount < Decimal::ZERO {
        errors.push(FieldError::new("amount", NON_NEGATIVE));
    }
    if !is_date_pattern(&new.pay_date) {
        errors.push(FieldError::new("payDate", DATE_PATTERN));
    }
    if new.bonus < Decimal::ZERO {
        errors.push(FieldError::new("bonus", NON_NEGATIVE));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Validation { errors })
    }
}

/// Validates a partial update.
///
/// The same schema rules as [`validate_new`], applied only to the fields that
/// are present. An empty patch is valid.
pub fn validate_patch(patch: &SalaryPatch) -> ServiceResult<()> {
    let mut errors = Vec::new();

    if let Some(amount) = patch.amount {
        if amount < Decimal::ZERO {
            errors.push(FieldError::new("amount", NON_NEGATIVE));
        }
    }
    if let Some(pay_date) = &patch.pay_date {
        if !is_date_pattern(pay_date) {
            errors.push(FieldError::new("payDate", DATE_PATTERN));
        }
    }
    if let Some(bonus) = patch.bonus {
        if bonus < Decimal::ZERO {
            errors.push(FieldError::new("bonus", NON_NEGATIVE));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Validation { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SalaryStatus;

    fn valid_new() -> NewSalary {
        NewSalary {
            amount: Decimal::from(3000),
            pay_date: "2024-02-01".to_string(),
            bonus: Decimal::ZERO,
            status: SalaryStatus::Pending,
        }
    }

    #[test]
    fn test_date_pattern_accepts_iso_shape() {
        assert!(is_date_pattern("2024-01-25"));
        assert!(is_date_pattern("0000-00-00"));
        // Pattern check only: an impossible calendar date still matches.
        assert!(is_date_pattern("2024-99-99"));
    }

    #[test]
    fn test_date_pattern_rejects_other_shapes() {
        assert!(!is_date_pattern("01-25-2024"));
        assert!(!is_date_pattern("2024/01/25"));
        assert!(!is_date_pattern("2024-1-25"));
        assert!(!is_date_pattern("2024-01-25T00:00"));
        assert!(!is_date_pattern(""));
    }

    #[test]
    fn test_valid_candidate_passes() {
        assert!(validate_new(&valid_new()).is_ok());
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let mut new = valid_new();
        new.amount = Decimal::from(-1);

        let err = validate_new(&new).unwrap_err();
        let ServiceError::Validation { errors } = err else {
            panic!("expected a validation error");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "amount");
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let mut new = valid_new();
        new.pay_date = "01-25-2024".to_string();

        let err = validate_new(&new).unwrap_err();
        let ServiceError::Validation { errors } = err else {
            panic!("expected a validation error");
        };
        assert_eq!(errors[0].field, "payDate");
    }

    #[test]
    fn test_all_failures_are_collected() {
        let new = NewSalary {
            amount: Decimal::from(-1),
            pay_date: "not a date".to_string(),
            bonus: Decimal::from(-5),
            status: SalaryStatus::Pending,
        };

        let err = validate_new(&new).unwrap_err();
        let ServiceError::Validation { errors } = err else {
            panic!("expected a validation error");
        };
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["amount", "payDate", "bonus"]);
    }

    #[test]
    fn test_empty_patch_is_valid() {
        assert!(validate_patch(&SalaryPatch::default()).is_ok());
    }

    #[test]
    fn test_present_patch_fields_are_still_checked() {
        let patch = SalaryPatch {
            bonus: Some(Decimal::from(-100)),
            ..Default::default()
        };

        let err = validate_patch(&patch).unwrap_err();
        let ServiceError::Validation { errors } = err else {
            panic!("expected a validation error");
        };
        assert_eq!(errors[0].field, "bonus");
    }

    #[test]
    fn test_valid_partial_patch_passes() {
        let patch = SalaryPatch {
            status: Some(SalaryStatus::Cancelled),
            pay_date: Some("2024-03-01".to_string()),
            ..Default::default()
        };
        assert!(validate_patch(&patch).is_ok());
    }
}
