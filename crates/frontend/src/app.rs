use crate::domain::a001_alerts::ui::AlertsPanel;
use crate::domain::a002_drug::ui::form::DrugForm;
use crate::domain::a002_drug::ui::search::{DrugSearch, SelectedDrug};
use crate::domain::a003_sale::ui::SaleForm;
use crate::shared::config::ClientConfig;
use crate::shared::page_utils::schedule_flash_dismiss;
use crate::shared::stock_level::highlight_quantity_cells;
use leptos::prelude::*;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    schedule_flash_dismiss(config.flash.dismiss_after_ms);

    // Provide the configuration and the drug picked in search to the whole app via context.
    provide_context(config);
    provide_context(SelectedDrug::new());

    // quantity cells rendered by the server outside the app
    Effect::new(move |_| {
        highlight_quantity_cells();
    });

    view! {
        <div class="container pharmacy-client">
            <section class="mb-4">
                <h2>"Alerts"</h2>
                <AlertsPanel />
            </section>

            <section class="mb-4">
                <h2>"Drug Search"</h2>
                <DrugSearch />
            </section>

            <div class="row">
                <section class="col-md-6 mb-4">
                    <h2>"Add Drug"</h2>
                    <DrugForm />
                </section>
                <section class="col-md-6 mb-4">
                    <h2>"Record Sale"</h2>
                    <SaleForm />
                </section>
            </div>
        </div>
    }
}
