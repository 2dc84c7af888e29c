use serde::{Deserialize, Serialize};

/// Inventory alert counters returned by `GET /api/alerts`
///
/// Counts are unsigned, so a negative or fractional value in the body is a
/// decode error rather than a silently wrong banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSummary {
    pub low_stock: u32,
    pub expiring_soon: u32,
    pub expired: u32,
}

impl AlertSummary {
    pub fn is_clear(&self) -> bool {
        self.low_stock == 0 && self.expiring_soon == 0 && self.expired == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_alert_summary() {
        let summary: AlertSummary =
            serde_json::from_str(r#"{"low_stock": 4, "expiring_soon": 0, "expired": 2}"#).unwrap();
        assert_eq!(
            summary,
            AlertSummary {
                low_stock: 4,
                expiring_soon: 0,
                expired: 2
            }
        );
        assert!(!summary.is_clear());
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        assert!(serde_json::from_str::<AlertSummary>(r#"{"low_stock": 1, "expired": 0}"#).is_err());
        assert!(serde_json::from_str::<AlertSummary>(
            r#"{"low_stock": -1, "expiring_soon": 0, "expired": 0}"#
        )
        .is_err());
        assert!(serde_json::from_str::<AlertSummary>(
            r#"{"low_stock": "3", "expiring_soon": 0, "expired": 0}"#
        )
        .is_err());
    }

    #[test]
    fn test_default_is_clear() {
        assert!(AlertSummary::default().is_clear());
    }
}
