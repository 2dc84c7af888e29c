use crate::shared::number_format::{format_currency, parse_int_lenient, parse_money};

/// quantity × unit price, never negative
///
/// The quantity is read as a leading integer and the unit price may carry a
/// `$` prefix; anything unparsable counts as zero.
pub fn calculate_sale_total(quantity: &str, unit_price: &str) -> f64 {
    let quantity = parse_int_lenient(quantity).unwrap_or(0);
    let unit_price = parse_money(unit_price);
    let total = quantity as f64 * unit_price;

    if total.is_finite() && total > 0.0 {
        total
    } else {
        0.0
    }
}

/// Text written into the sale form's total field
pub fn sale_total_display(quantity: &str, unit_price: &str) -> String {
    format_currency(calculate_sale_total(quantity, unit_price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_total() {
        assert_eq!(calculate_sale_total("3", "$2.50"), 7.5);
        assert_eq!(sale_total_display("3", "$2.50"), "$7.50");
        assert_eq!(sale_total_display("2", "1.25"), "$2.50");
    }

    #[test]
    fn test_unparsable_input_is_zero() {
        assert_eq!(sale_total_display("", "$2.50"), "$0.00");
        assert_eq!(sale_total_display("3", ""), "$0.00");
        assert_eq!(sale_total_display("many", "cheap"), "$0.00");
    }

    #[test]
    fn test_quantity_uses_leading_integer() {
        assert_eq!(sale_total_display("2.9", "$1.00"), "$2.00");
        assert_eq!(sale_total_display("4 boxes", "$0.50"), "$2.00");
    }

    #[test]
    fn test_negative_total_floors_at_zero() {
        assert_eq!(calculate_sale_total("-3", "$2.50"), 0.0);
        assert_eq!(calculate_sale_total("3", "-2.50"), 0.0);
    }

    #[test]
    fn test_huge_quantity_is_not_zeroed() {
        let total = calculate_sale_total("99999999999999999999", "$1");
        assert!(total > 0.0);
        assert_eq!(total, i64::MAX as f64);
    }
}
