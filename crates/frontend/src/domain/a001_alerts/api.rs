use super::poller::AlertSource;
use crate::shared::api_utils::{api_url, get_json, ApiError};
use async_trait::async_trait;
use contracts::domain::a001_alerts::dto::AlertSummary;

const ALERTS_PATH: &str = "/api/alerts";

/// Reads alert counters from the server
pub struct HttpAlertSource {
    url: String,
}

impl HttpAlertSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            url: api_url(base_url, ALERTS_PATH),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl AlertSource for HttpAlertSource {
    async fn fetch_alerts(&self) -> Result<AlertSummary, ApiError> {
        get_json(&self.url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alerts_url() {
        assert_eq!(HttpAlertSource::new("").url(), "/api/alerts");
        assert_eq!(
            HttpAlertSource::new("http://localhost:5000/").url(),
            "http://localhost:5000/api/alerts"
        );
    }
}
