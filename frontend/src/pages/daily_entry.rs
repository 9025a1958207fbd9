use crate::components::litre_stepper::LitreStepper;
use crate::hooks::use_customers::use_customers;
use crate::services::{date_utils, logging::Logger};
use crate::session::use_session;
use crate::Page;
use shared::{entry_amount, CreateEntryRequest, MilkEntry};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DailyEntryPageProps {
    pub on_navigate: Callback<Page>,
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// One delivery per submission: pick a customer, accumulate litres with the
/// stepper, adjust the auto-filled rate if needed. The amount is computed
/// here and sent precomputed.
#[function_component(DailyEntryPage)]
pub fn daily_entry_page(props: &DailyEntryPageProps) -> Html {
    let session = use_session();
    let shift = session.shift;
    let (customers, _) = use_customers(&session.api, shift);

    let entries = use_state(Vec::<MilkEntry>::new);
    let selected_id = use_state(|| None::<i64>);
    let litres = use_state(|| 0.0f64);
    let rate = use_state(String::new);
    let date = use_state(date_utils::current_date);
    let form_error = use_state(|| None::<String>);

    let reload_entries = {
        let entries = entries.clone();
        use_callback((session.api.clone(), shift), move |_, deps| {
            let (api, shift) = deps.clone();
            let entries = entries.clone();
            spawn_local(async move {
                match api.entries(shift).await {
                    Ok(list) => entries.set(list),
                    Err(e) => {
                        Logger::error("daily-entry", &e.to_string());
                        entries.set(Vec::new());
                    }
                }
            });
        })
    };

    use_effect_with((session.api.clone(), shift), {
        let reload_entries = reload_entries.clone();
        move |_| {
            reload_entries.emit(());
            || ()
        }
    });

    let Some(user_id) = session.user_id else {
        return html! {};
    };

    let on_date = {
        let date = date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    // selecting a customer fills in their configured rate, still editable
    let on_customer = {
        let selected_id = selected_id.clone();
        let rate = rate.clone();
        let list = customers.customers.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let id = select.value().parse::<i64>().ok();
            selected_id.set(id);
            if let Some(customer) = id.and_then(|id| list.iter().find(|c| c.id == id)) {
                rate.set(
                    customer
                        .price_per_litre
                        .map(|p| p.to_string())
                        .unwrap_or_default(),
                );
            }
        })
    };

    let on_rate = {
        let rate = rate.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            rate.set(input.value());
        })
    };

    let on_litres = {
        let litres = litres.clone();
        Callback::from(move |value: f64| litres.set(value))
    };

    let on_submit = {
        let api = session.api.clone();
        let selected_id = selected_id.clone();
        let litres = litres.clone();
        let rate = rate.clone();
        let date = date.clone();
        let form_error = form_error.clone();
        let reload_entries = reload_entries.clone();
        let list = customers.customers.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(customer) = (*selected_id).and_then(|id| list.iter().find(|c| c.id == id))
            else {
                form_error.set(Some("Fill all fields".to_string()));
                return;
            };
            let rate_value = rate.trim().parse::<f64>().ok();
            if *litres <= 0.0 || rate_value.is_none() {
                form_error.set(Some("Fill all fields".to_string()));
                return;
            }
            let rate_value = rate_value.unwrap_or(0.0);

            let request = CreateEntryRequest {
                customer_id: customer.id,
                customer_name: customer.display_name().to_string(),
                shift,
                date: (*date).clone(),
                litres: *litres,
                rate: rate_value,
                amount: entry_amount(*litres, rate_value),
                user_id,
            };

            let api = api.clone();
            let litres = litres.clone();
            let form_error = form_error.clone();
            let reload_entries = reload_entries.clone();
            spawn_local(async move {
                form_error.set(None);
                match api.create_entry(&request).await {
                    Ok(_) => {
                        litres.set(0.0);
                        reload_entries.emit(());
                    }
                    Err(e) => {
                        Logger::error("daily-entry", &e.to_string());
                        form_error.set(Some("Failed to add entry".to_string()));
                    }
                }
            });
        })
    };

    let on_delete = {
        let api = session.api.clone();
        let reload_entries = reload_entries.clone();
        let form_error = form_error.clone();
        Callback::from(move |id: i64| {
            if !confirm("Delete this entry?") {
                return;
            }
            let api = api.clone();
            let reload_entries = reload_entries.clone();
            let form_error = form_error.clone();
            spawn_local(async move {
                match api.delete_entry(id).await {
                    Ok(()) => reload_entries.emit(()),
                    Err(e) => {
                        Logger::error("daily-entry", &e.to_string());
                        form_error.set(Some("Failed to delete entry".to_string()));
                    }
                }
            });
        })
    };

    let to_dashboard = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Dashboard))
    };

    html! {
        <div class="page">
            <button class="btn btn-secondary" onclick={to_dashboard}>{"← Dashboard"}</button>

            <h2>{format!("🥛 Day Wise Entry ({})", shift)}</h2>

            <form class="entry-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="entry-date">{"Date"}</label>
                    <input id="entry-date" type="date" value={(*date).clone()} onchange={on_date} />
                </div>

                <div class="form-group">
                    <label for="entry-customer">{"Customer"}</label>
                    <select id="entry-customer" onchange={on_customer}>
                        <option value="" selected={selected_id.is_none()}>{"Select customer"}</option>
                        {for customers.customers.iter().map(|customer| html! {
                            <option
                                value={customer.id.to_string()}
                                selected={*selected_id == Some(customer.id)}
                            >
                                {customer.display_name()}
                            </option>
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label>{"Litres"}</label>
                    <input type="text" readonly=true value={format!("{:.2}", *litres)} />
                    <LitreStepper value={*litres} on_change={on_litres} />
                    <small class="form-text">{"Tap to add litres"}</small>
                </div>

                <div class="form-group">
                    <label for="entry-rate">{"Rate"}</label>
                    <input
                        id="entry-rate"
                        type="number"
                        step="0.01"
                        value={(*rate).clone()}
                        onchange={on_rate}
                    />
                </div>

                <button type="submit" class="btn btn-primary">{"Add Entry"}</button>
            </form>

            {if let Some(error) = (*form_error).as_ref() {
                html! { <p class="form-message error">{error}</p> }
            } else {
                html! {}
            }}

            <h3>{"Recent Entries"}</h3>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Customer"}</th>
                        <th>{"Litres"}</th>
                        <th>{"Rate"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Action"}</th>
                    </tr>
                </thead>
                <tbody>
                    {if entries.is_empty() {
                        html! {
                            <tr><td colspan="6" class="empty">{"No entries"}</td></tr>
                        }
                    } else {
                        html! {
                            <>
                                {for entries.iter().map(|entry| {
                                    let delete = {
                                        let on_delete = on_delete.clone();
                                        let id = entry.id;
                                        Callback::from(move |_: MouseEvent| on_delete.emit(id))
                                    };
                                    html! {
                                        <tr key={entry.id}>
                                            <td>{&entry.date}</td>
                                            <td>{&entry.customer_name}</td>
                                            <td class="numeric">{entry.litres}</td>
                                            <td class="numeric">{entry.rate}</td>
                                            <td class="numeric">
                                                {format!("₹{:.2}", entry.litres * entry.rate)}
                                            </td>
                                            <td>
                                                <button class="btn btn-small btn-danger" onclick={delete}>
                                                    {"Delete"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </>
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
