use crate::domain::a002_drug::ui::search::SelectedDrug;
use crate::domain::a003_sale::total::sale_total_display;
use crate::shared::number_format::{format_currency, format_currency_text};
use leptos::prelude::*;

/// Sale entry form; the total follows quantity and unit price as they change
#[component]
#[allow(non_snake_case)]
pub fn SaleForm() -> impl IntoView {
    let (drug_id, set_drug_id) = signal(String::new());
    let (drug_name, set_drug_name) = signal(String::new());
    let (quantity, set_quantity) = signal(String::from("1"));
    let (unit_price, set_unit_price) = signal(String::new());

    let total = Memo::new(move |_| sale_total_display(&quantity.get(), &unit_price.get()));

    // a drug picked in the search table fills the form
    if let Some(SelectedDrug(selected)) = use_context::<SelectedDrug>() {
        Effect::new(move |_| {
            if let Some(hit) = selected.get() {
                set_drug_id.set(hit.id.to_string());
                set_drug_name.set(hit.name.clone());
                set_unit_price.set(format_currency(hit.selling_price));
            }
        });
    }

    view! {
        <form id="sale-form" method="post" action="/sales">
            <div class="form-group">
                <label for="sale_drug_id">"Drug ID"</label>
                <input
                    type="number"
                    id="sale_drug_id"
                    name="drug_id"
                    class="form-control"
                    prop:value=move || drug_id.get()
                    on:input=move |ev| set_drug_id.set(event_target_value(&ev))
                    required
                />
                <small class="text-muted">{move || drug_name.get()}</small>
            </div>
            <div class="form-group">
                <label for="sale_quantity">"Quantity"</label>
                <input
                    type="number"
                    min="1"
                    id="sale_quantity"
                    name="quantity"
                    class="form-control"
                    prop:value=move || quantity.get()
                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                    required
                />
            </div>
            <div class="form-group">
                <label for="unit_price">"Unit Price"</label>
                <input
                    type="text"
                    id="unit_price"
                    class="form-control"
                    prop:value=move || unit_price.get()
                    on:input=move |ev| set_unit_price.set(event_target_value(&ev))
                    on:change=move |ev| {
                        // shown back as money once the user leaves the field
                        let raw = event_target_value(&ev);
                        if !raw.trim().is_empty() {
                            set_unit_price.set(format_currency_text(&raw));
                        }
                    }
                />
            </div>
            <div class="form-group">
                <label for="total_price">"Total"</label>
                <input
                    type="text"
                    id="total_price"
                    class="form-control"
                    prop:value=move || total.get()
                    readonly
                />
            </div>

            <button type="submit" class="btn btn-success">"Record Sale"</button>
        </form>
    }
}
