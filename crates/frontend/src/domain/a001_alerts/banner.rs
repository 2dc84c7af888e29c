use contracts::domain::a001_alerts::dto::AlertSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Danger,
    Critical,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "alert-success",
            Severity::Warning => "alert-warning",
            Severity::Danger => "alert-danger",
            Severity::Critical => "alert-dark",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Severity::Success => "fas fa-check-circle",
            Severity::Warning => "fas fa-exclamation-triangle",
            Severity::Danger => "fas fa-clock",
            Severity::Critical => "fas fa-skull-crossbones",
        }
    }
}

/// One rendered alert notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub severity: Severity,
    pub message: String,
}

impl Banner {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// Maps alert counters to banners: low stock, expiring soon, expired in
/// that order, or a single success banner when everything is zero
pub fn banners_for(summary: &AlertSummary) -> Vec<Banner> {
    if summary.is_clear() {
        return vec![Banner::new(Severity::Success, "No alerts at this time.")];
    }

    let mut banners = Vec::with_capacity(3);

    if summary.low_stock > 0 {
        banners.push(Banner::new(
            Severity::Warning,
            format!("{} drugs are low in stock", summary.low_stock),
        ));
    }
    if summary.expiring_soon > 0 {
        banners.push(Banner::new(
            Severity::Danger,
            format!("{} drugs are expiring soon", summary.expiring_soon),
        ));
    }
    if summary.expired > 0 {
        banners.push(Banner::new(
            Severity::Critical,
            format!("{} drugs have expired", summary.expired),
        ));
    }

    banners
}
