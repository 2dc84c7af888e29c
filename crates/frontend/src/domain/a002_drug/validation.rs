//! Checks run on the add-drug form before it is submitted

use crate::shared::date_utils::parse_date;
use crate::shared::number_format::parse_float_lenient;
use chrono::NaiveDate;
use thiserror::Error;

/// Raw field values as typed into the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrugFormInput {
    pub cost_price: String,
    pub selling_price: String,
    pub expiry_date: String,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Selling price cannot be less than cost price!")]
    SellingBelowCost { selling: f64, cost: f64 },

    #[error("Please enter a valid expiry date.")]
    InvalidExpiryDate,

    #[error("Expiry date must be in the future!")]
    ExpiryNotInFuture,
}

/// Validates prices and expiry date against `today`
///
/// Unparsable prices count as zero.
pub fn validate_drug_form(input: &DrugFormInput, today: NaiveDate) -> Result<(), ValidationError> {
    let cost = parse_float_lenient(&input.cost_price).unwrap_or(0.0);
    let selling = parse_float_lenient(&input.selling_price).unwrap_or(0.0);

    if selling < cost {
        return Err(ValidationError::SellingBelowCost { selling, cost });
    }

    let expiry = parse_date(&input.expiry_date).ok_or(ValidationError::InvalidExpiryDate)?;
    if expiry <= today {
        return Err(ValidationError::ExpiryNotInFuture);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn input(cost: &str, selling: &str, expiry: &str) -> DrugFormInput {
        DrugFormInput {
            cost_price: cost.to_string(),
            selling_price: selling.to_string(),
            expiry_date: expiry.to_string(),
        }
    }

    #[test]
    fn test_rejects_selling_below_cost() {
        let err = validate_drug_form(&input("10", "5", "2025-01-01"), today()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::SellingBelowCost {
                selling: 5.0,
                cost: 10.0
            }
        );
        assert_eq!(err.to_string(), "Selling price cannot be less than cost price!");
    }

    #[test]
    fn test_accepts_valid_form() {
        assert_eq!(validate_drug_form(&input("5", "10", "2024-06-02"), today()), Ok(()));
        assert_eq!(validate_drug_form(&input("5", "5", "2030-12-31"), today()), Ok(()));
    }

    #[test]
    fn test_rejects_expiry_today_or_past() {
        assert_eq!(
            validate_drug_form(&input("5", "10", "2024-06-01"), today()),
            Err(ValidationError::ExpiryNotInFuture)
        );
        assert_eq!(
            validate_drug_form(&input("5", "10", "2023-01-01"), today()),
            Err(ValidationError::ExpiryNotInFuture)
        );
    }

    #[test]
    fn test_rejects_missing_expiry() {
        assert_eq!(
            validate_drug_form(&input("5", "10", ""), today()),
            Err(ValidationError::InvalidExpiryDate)
        );
    }

    #[test]
    fn test_malformed_prices_count_as_zero() {
        // cost falls back to zero, so any selling price passes
        assert_eq!(validate_drug_form(&input("abc", "3", "2025-01-01"), today()), Ok(()));
        assert!(matches!(
            validate_drug_form(&input("4", "", "2025-01-01"), today()),
            Err(ValidationError::SellingBelowCost { .. })
        ));
    }
}
