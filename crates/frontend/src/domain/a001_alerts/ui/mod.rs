use crate::domain::a001_alerts::api::HttpAlertSource;
use crate::domain::a001_alerts::banner::Banner;
use crate::domain::a001_alerts::poller::{AlertPoller, BannerSink, PollerHandle};
use crate::shared::config::ClientConfig;
use crate::shared::date_utils::format_datetime;
use chrono::Local;
use leptos::prelude::*;

/// Signals behind the alert region; the view below is derived from them
#[derive(Clone, Copy)]
struct AlertRegion {
    banners: RwSignal<Vec<Banner>>,
    updated_at: RwSignal<Option<String>>,
}

impl BannerSink for AlertRegion {
    fn render_banners(&self, banners: Vec<Banner>) {
        if self.banners.try_set(banners).is_some() {
            log::debug!("Alert region is gone, banners dropped");
            return;
        }
        let _ = self
            .updated_at
            .try_set(Some(format_datetime(&Local::now().to_rfc3339())));
    }
}

/// Live inventory alerts, refreshed by the alert poller
#[component]
#[allow(non_snake_case)]
pub fn AlertsPanel() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let region = AlertRegion {
        banners: RwSignal::new(Vec::new()),
        updated_at: RwSignal::new(None),
    };
    let AlertRegion { banners, updated_at } = region;

    let source = HttpAlertSource::new(&config.api.base_url);
    log::debug!("Polling alerts from {}", source.url());

    // the stop switch exists before the task does, so cleanup can never miss it
    let handle = PollerHandle::new();
    AlertPoller::new(source, region, config.alerts.poll_interval())
        .with_handle(handle.clone())
        .start();

    on_cleanup(move || handle.stop());

    // closed banners come back with the next successful poll
    let dismiss = move |index: usize| {
        banners.update(|list| {
            if index < list.len() {
                list.remove(index);
            }
        });
    };

    view! {
        <div id="alerts-container" class="alerts-container">
            {move || {
                banners
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, banner)| {
                        view! {
                            <div
                                class=format!("alert {} alert-dismissible", banner.severity.css_class())
                                role="alert"
                            >
                                <i class=banner.severity.icon_class()></i>
                                " "
                                {banner.message}
                                <button
                                    type="button"
                                    class="btn-close"
                                    aria-label="Close"
                                    on:click=move |_| dismiss(index)
                                ></button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <Show when=move || updated_at.get().is_some()>
                <small class="text-muted">
                    "Updated " {move || updated_at.get().unwrap_or_default()}
                </small>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_alerts::banner::Severity;

    #[test]
    fn test_region_records_banners_and_update_time() {
        let region = AlertRegion {
            banners: RwSignal::new(Vec::new()),
            updated_at: RwSignal::new(None),
        };

        region.render_banners(vec![Banner::new(Severity::Warning, "2 drugs are low in stock")]);

        assert_eq!(region.banners.get_untracked().len(), 1);
        let stamp = region.updated_at.get_untracked().unwrap_or_default();
        // "M/D/YYYY, h:mm:ss AM|PM"
        assert!(stamp.ends_with(" AM") || stamp.ends_with(" PM"), "{}", stamp);
    }
}
