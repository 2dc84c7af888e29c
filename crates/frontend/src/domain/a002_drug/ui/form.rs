use crate::domain::a002_drug::validation::{validate_drug_form, DrugFormInput};
use crate::shared::date_utils::{default_expiry_date, format_date, today};
use leptos::prelude::*;

/// Add-drug form; posts natively to the server once it validates
#[component]
#[allow(non_snake_case)]
pub fn DrugForm() -> impl IntoView {
    let (cost_price, set_cost_price) = signal(String::new());
    let (selling_price, set_selling_price) = signal(String::new());
    let (expiry_date, set_expiry_date) =
        signal(default_expiry_date(today()).format("%Y-%m-%d").to_string());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        let input = DrugFormInput {
            cost_price: cost_price.get_untracked(),
            selling_price: selling_price.get_untracked(),
            expiry_date: expiry_date.get_untracked(),
        };

        match validate_drug_form(&input, today()) {
            Ok(()) => set_error_message.set(None),
            Err(e) => {
                // blocked: nothing leaves the page
                ev.prevent_default();
                log::debug!("Drug form rejected: {:?}", e);
                set_error_message.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <form id="drug-form" method="post" action="/add_drug" on:submit=on_submit>
            <Show when=move || error_message.get().is_some()>
                <div class="alert alert-danger" role="alert">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="form-group">
                <label for="name">"Name"</label>
                <input type="text" id="name" name="name" class="form-control" required />
            </div>
            <div class="form-group">
                <label for="category">"Category"</label>
                <input type="text" id="category" name="category" class="form-control" required />
            </div>
            <div class="form-group">
                <label for="batch_no">"Batch No"</label>
                <input type="text" id="batch_no" name="batch_no" class="form-control" />
            </div>
            <div class="form-group">
                <label for="manufacturer">"Manufacturer"</label>
                <input type="text" id="manufacturer" name="manufacturer" class="form-control" />
            </div>
            <div class="form-group">
                <label for="quantity">"Quantity"</label>
                <input type="number" id="quantity" name="quantity" class="form-control" min="0" required />
            </div>
            <div class="form-group">
                <label for="cost_price">"Cost Price"</label>
                <input
                    type="number"
                    step="0.01"
                    id="cost_price"
                    name="cost_price"
                    class="form-control"
                    prop:value=move || cost_price.get()
                    on:input=move |ev| set_cost_price.set(event_target_value(&ev))
                    required
                />
            </div>
            <div class="form-group">
                <label for="selling_price">"Selling Price"</label>
                <input
                    type="number"
                    step="0.01"
                    id="selling_price"
                    name="selling_price"
                    class="form-control"
                    prop:value=move || selling_price.get()
                    on:input=move |ev| set_selling_price.set(event_target_value(&ev))
                    required
                />
            </div>
            <div class="form-group">
                <label for="expiry_date">"Expiry Date"</label>
                <input
                    type="date"
                    id="expiry_date"
                    name="expiry_date"
                    class="form-control"
                    prop:value=move || expiry_date.get()
                    on:input=move |ev| set_expiry_date.set(event_target_value(&ev))
                    required
                />
                <small class="text-muted">"Expires " {move || format_date(&expiry_date.get())}</small>
            </div>

            <button type="submit" class="btn btn-primary">"Add Drug"</button>
        </form>
    }
}
