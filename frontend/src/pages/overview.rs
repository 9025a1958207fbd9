use crate::components::month_filter::MonthFilter;
use crate::hooks::use_overview::use_overview;
use crate::services::{date_utils, logging::Logger};
use crate::session::use_session;
use crate::Page;
use shared::{
    entry_amount, entry_date, step_litres, CreateEntryRequest, Customer, TogglePaymentRequest,
    LITRE_STEPS,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OverviewPageProps {
    pub on_navigate: Callback<Page>,
}

/// Customer × day grid for one month. Each cell opens a quick-add control
/// that submits a delivery for that specific day; the whole matrix is
/// re-fetched after every write. The per-row payment toggle targets today,
/// not the clicked day: paid status is a period-level flag.
#[function_component(OverviewPage)]
pub fn overview_page(props: &OverviewPageProps) -> Html {
    let session = use_session();
    let shift = session.shift;
    let month = use_state(date_utils::current_month);
    let year = use_state(date_utils::current_year);
    let (overview, overview_actions) = use_overview(&session.api, shift, *month, *year);

    // the clicked cell and the litres it held when clicked
    let selected = use_state(|| None::<(u32, Customer)>);
    let baseline = use_state(|| 0.0f64);
    let action_error = use_state(|| None::<String>);

    let Some(user_id) = session.user_id else {
        return html! {};
    };

    let on_month_change = {
        let month = month.clone();
        let selected = selected.clone();
        Callback::from(move |value: u32| {
            month.set(value);
            selected.set(None);
        })
    };
    let on_year_change = {
        let year = year.clone();
        let selected = selected.clone();
        Callback::from(move |value: i32| {
            year.set(value);
            selected.set(None);
        })
    };
    let on_shift_change = {
        let on_shift_change = session.on_shift_change.clone();
        let selected = selected.clone();
        Callback::from(move |value| {
            selected.set(None);
            on_shift_change.emit(value);
        })
    };

    // writes an entry for the selected (day, customer) with the given final
    // litres, then re-fetches the matrix
    let submit_quick = {
        let api = session.api.clone();
        let selected = selected.clone();
        let baseline = baseline.clone();
        let action_error = action_error.clone();
        let reload = overview_actions.reload.clone();
        let month_value = *month;
        let year_value = *year;
        Callback::from(move |updated: f64| {
            let Some((day, customer)) = (*selected).clone() else {
                return;
            };
            let rate = customer.rate();
            let request = CreateEntryRequest {
                customer_id: customer.id,
                customer_name: customer.display_name().to_string(),
                shift,
                date: entry_date(year_value, month_value, day),
                litres: updated,
                rate,
                amount: entry_amount(updated, rate),
                user_id,
            };
            let api = api.clone();
            let baseline = baseline.clone();
            let action_error = action_error.clone();
            let reload = reload.clone();
            spawn_local(async move {
                action_error.set(None);
                match api.create_entry(&request).await {
                    Ok(_) => {
                        baseline.set(updated);
                        reload.emit(());
                    }
                    Err(e) => {
                        Logger::error("overview", &e.to_string());
                        action_error.set(Some("Error saving entry".to_string()));
                    }
                }
            });
        })
    };

    let on_toggle_payment = {
        let api = session.api.clone();
        let action_error = action_error.clone();
        let reload = overview_actions.reload.clone();
        Callback::from(move |(customer, paid_now): (Customer, bool)| {
            let request = TogglePaymentRequest {
                customer_id: customer.id,
                customer_name: customer.display_name().to_string(),
                shift,
                paid: !paid_now,
                user_id,
            };
            let api = api.clone();
            let action_error = action_error.clone();
            let reload = reload.clone();
            spawn_local(async move {
                action_error.set(None);
                match api.toggle_payment(&request).await {
                    Ok(_) => reload.emit(()),
                    Err(e) => {
                        Logger::error("overview", &e.to_string());
                        action_error.set(Some("Failed to update payment status".to_string()));
                    }
                }
            });
        })
    };

    let close_quick = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let to_dashboard = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Dashboard))
    };

    let Some(data) = overview.data.clone() else {
        return html! {
            <div class="page">
                <button class="btn btn-secondary" onclick={to_dashboard}>{"← Dashboard"}</button>
                {if let Some(error) = overview.error.as_ref() {
                    html! { <p class="form-message error">{error}</p> }
                } else {
                    html! { <p class="loading">{"Loading overview…"}</p> }
                }}
            </div>
        };
    };

    html! {
        <div class="page page-wide">
            <button class="btn btn-secondary" onclick={to_dashboard}>{"← Dashboard"}</button>

            <h2>{format!("🧾 Overview ({})", shift)}</h2>

            <MonthFilter
                shift={shift}
                month={*month}
                year={*year}
                on_shift_change={on_shift_change}
                on_month_change={on_month_change}
                on_year_change={on_year_change}
            />

            {if let Some(error) = (*action_error).as_ref() {
                html! { <p class="form-message error">{error}</p> }
            } else {
                html! {}
            }}

            <div class="table-scroll">
                <table class="data-table matrix-table">
                    <thead>
                        <tr>
                            <th class="sticky-name">{"Customer"}</th>
                            {for data.day_numbers().map(|day| html! { <th>{day}</th> })}
                            <th>{"Litres"}</th>
                            <th>{"Amount"}</th>
                            <th>{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for data.customers.iter().map(|customer| {
                            let paid = data.paid_today(customer.id);
                            let toggle = {
                                let on_toggle_payment = on_toggle_payment.clone();
                                let customer = customer.clone();
                                Callback::from(move |_: Event| {
                                    on_toggle_payment.emit((customer.clone(), paid))
                                })
                            };
                            html! {
                                <tr key={customer.id}>
                                    <td class="sticky-name">{customer.display_name()}</td>
                                    {for data.day_numbers().map(|day| {
                                        let litres = data.litres_at(day, customer.id);
                                        let click = {
                                            let selected = selected.clone();
                                            let baseline = baseline.clone();
                                            let customer = customer.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                baseline.set(litres);
                                                selected.set(Some((day, customer.clone())));
                                            })
                                        };
                                        html! {
                                            <td class="matrix-cell" onclick={click}>
                                                {if litres > 0.0 {
                                                    html! { <span class="litres-chip">{format!("{:.2}L", litres)}</span> }
                                                } else {
                                                    html! { {"-"} }
                                                }}
                                            </td>
                                        }
                                    })}
                                    <td class="numeric"><b>{format!("{:.2}", data.total_litres(customer.id))}</b></td>
                                    <td class="numeric">{format!("₹{:.2}", data.total_amount(customer.id))}</td>
                                    <td>
                                        <input
                                            type="checkbox"
                                            class="payment-toggle"
                                            checked={paid}
                                            onchange={toggle}
                                        />
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>

            {if let Some((day, customer)) = (*selected).clone() {
                html! {
                    <div class="quick-add">
                        <p class="quick-add-title">
                            {format!("Quick Add (L): {}, day {}", customer.display_name(), day)}
                        </p>
                        <div class="quick-add-buttons">
                            {for LITRE_STEPS.iter().map(|step| {
                                let submit_quick = submit_quick.clone();
                                let value = step_litres(*baseline, *step);
                                html! {
                                    <button
                                        type="button"
                                        class="stepper-btn"
                                        onclick={Callback::from(move |_| submit_quick.emit(value))}
                                    >
                                        {format!("+{}", step)}
                                    </button>
                                }
                            })}
                            <button
                                type="button"
                                class="stepper-btn stepper-reset"
                                onclick={{
                                    let submit_quick = submit_quick.clone();
                                    Callback::from(move |_| submit_quick.emit(0.0))
                                }}
                            >
                                {"Reset"}
                            </button>
                            <button type="button" class="btn btn-small" onclick={close_quick.clone()}>
                                {"Close"}
                            </button>
                        </div>
                        <p class="quick-add-current">
                            {format!("Current: {:.2} L", *baseline)}
                        </p>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
