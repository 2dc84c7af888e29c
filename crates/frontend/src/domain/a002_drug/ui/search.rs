use crate::domain::a002_drug::api::{is_searchable, search_drugs};
use crate::domain::a002_drug::search_state::{LatestRequest, SearchView};
use crate::shared::config::ClientConfig;
use crate::shared::export::export_table_to_csv;
use crate::shared::number_format::format_currency;
use crate::shared::page_utils::print_report;
use crate::shared::stock_level::StockLevel;
use contracts::domain::a002_drug::dto::DrugSearchHit;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Element id of the results table, also the export source
pub const SEARCH_TABLE_ID: &str = "drug-search-results";

/// Drug picked from the search results, shared with the sale form
#[derive(Clone, Copy)]
pub struct SelectedDrug(pub RwSignal<Option<DrugSearchHit>>);

impl SelectedDrug {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }
}

impl Default for SelectedDrug {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DrugSearch() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let selected = use_context::<SelectedDrug>();
    let base_url = config.api.base_url.clone();
    let min_len = config.search.min_query_len;

    let query = RwSignal::new(String::new());
    let (hits, set_hits) = signal::<Vec<DrugSearchHit>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    // only the response to the newest query is shown
    let latest_request = LatestRequest::new();

    Effect::new(move |_| {
        let q = query.get();
        let request_id = latest_request.begin();

        if !is_searchable(&q, min_len) {
            set_hits.set(Vec::new());
            set_error.set(None);
            set_loading.set(false);
            return;
        }

        let base = base_url.clone();
        let latest_request = latest_request.clone();
        set_loading.set(true);
        spawn_local(async move {
            let result = search_drugs(&base, &q, min_len).await;
            if !latest_request.is_current(request_id) {
                log::debug!("Dropping stale search results for '{}'", q);
                return;
            }
            match &result {
                Ok(found) => log::debug!("Search '{}' returned {} drugs", q, found.len()),
                Err(e) => log::warn!("Drug search failed: {}", e),
            }
            let shown = SearchView::from_result(result);
            set_loading.set(false);
            set_hits.set(shown.hits);
            set_error.set(shown.error);
        });
    });

    let on_export = move || {
        if let Err(e) = export_table_to_csv(SEARCH_TABLE_ID, "drug-search") {
            log::error!("CSV export failed: {}", e);
            set_error.set(Some(format!("Export failed: {}", e)));
        }
    };

    let on_pick = move |hit: DrugSearchHit| {
        if let Some(SelectedDrug(signal)) = selected {
            signal.set(Some(hit));
        }
    };

    view! {
        <div class="drug-search">
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <Input value=query placeholder="Search drugs by name..." />
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_export()
                >
                    "Export CSV"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| print_report()
                >
                    "Print"
                </Button>
            </Flex>

            <Show when=move || error.get().is_some()>
                <div class="alert alert-danger">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || loading.get()>
                <p class="text-muted">"Searching..."</p>
            </Show>

            <table id=SEARCH_TABLE_ID class="table table-sm table-hover">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Quantity"</th>
                        <th>"Price"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        hits.get()
                            .into_iter()
                            .map(|hit| {
                                let level = StockLevel::from_quantity(hit.quantity);
                                let name = hit.name.clone();
                                let quantity = hit.quantity.to_string();
                                let price = format_currency(hit.selling_price);
                                view! {
                                    <tr style="cursor: pointer;" on:click=move |_| on_pick(hit.clone())>
                                        <td>{name}</td>
                                        <td class=format!("quantity-cell {}", level.class_attr())>{quantity}</td>
                                        <td>{price}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
