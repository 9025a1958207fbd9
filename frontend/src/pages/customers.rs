use crate::components::customer_edit_modal::CustomerEditModal;
use crate::hooks::use_customers::use_customers;
use crate::services::logging::Logger;
use crate::session::use_session;
use crate::Page;
use shared::{CreateCustomerRequest, Customer, Shift, UpdateCustomerRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CustomersPageProps {
    pub on_navigate: Callback<Page>,
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[function_component(CustomersPage)]
pub fn customers_page(props: &CustomersPageProps) -> Html {
    let session = use_session();
    let shift = session.shift;
    let (customers, customers_actions) = use_customers(&session.api, shift);

    let full_name = use_state(String::new);
    let nickname = use_state(String::new);
    let price = use_state(String::new);
    let form_error = use_state(|| None::<String>);
    let editing = use_state(|| None::<Customer>);

    // guarded pages only render with a session id present
    let Some(user_id) = session.user_id else {
        return html! {};
    };

    let on_full_name = {
        let full_name = full_name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            full_name.set(input.value());
        })
    };
    let on_nickname = {
        let nickname = nickname.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            nickname.set(input.value());
        })
    };
    let on_price = {
        let price = price.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            price.set(input.value());
        })
    };

    let on_shift = {
        let on_shift_change = session.on_shift_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(shift) = select.value().parse::<Shift>() {
                on_shift_change.emit(shift);
            }
        })
    };

    let on_submit = {
        let api = session.api.clone();
        let full_name = full_name.clone();
        let nickname = nickname.clone();
        let price = price.clone();
        let form_error = form_error.clone();
        let reload = customers_actions.reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // presence check happens before any network call
            if full_name.trim().is_empty() {
                form_error.set(Some("Customer name is required".to_string()));
                return;
            }
            let api = api.clone();
            let full_name = full_name.clone();
            let nickname = nickname.clone();
            let price = price.clone();
            let form_error = form_error.clone();
            let reload = reload.clone();
            spawn_local(async move {
                form_error.set(None);
                let trimmed_nickname = nickname.trim().to_string();
                let request = CreateCustomerRequest {
                    full_name: full_name.trim().to_string(),
                    nickname: if trimmed_nickname.is_empty() {
                        None
                    } else {
                        Some(trimmed_nickname)
                    },
                    price_per_litre: price.trim().parse::<f64>().ok(),
                    shift,
                    user_id,
                };
                match api.create_customer(&request).await {
                    Ok(_) => {
                        full_name.set(String::new());
                        nickname.set(String::new());
                        price.set(String::new());
                        reload.emit(());
                    }
                    Err(e) => {
                        Logger::error("customers", &e.to_string());
                        form_error.set(Some("Failed to add customer".to_string()));
                    }
                }
            });
        })
    };

    let on_delete = {
        let api = session.api.clone();
        let reload = customers_actions.reload.clone();
        let form_error = form_error.clone();
        Callback::from(move |id: i64| {
            if !confirm("Delete this customer?") {
                return;
            }
            let api = api.clone();
            let reload = reload.clone();
            let form_error = form_error.clone();
            spawn_local(async move {
                match api.delete_customer(id).await {
                    Ok(()) => reload.emit(()),
                    Err(e) => {
                        Logger::error("customers", &e.to_string());
                        form_error.set(Some("Failed to delete customer".to_string()));
                    }
                }
            });
        })
    };

    let on_save_edit = {
        let api = session.api.clone();
        let editing = editing.clone();
        let reload = customers_actions.reload.clone();
        let form_error = form_error.clone();
        Callback::from(move |request: UpdateCustomerRequest| {
            let Some(customer) = (*editing).clone() else {
                return;
            };
            let api = api.clone();
            let editing = editing.clone();
            let reload = reload.clone();
            let form_error = form_error.clone();
            spawn_local(async move {
                match api.update_customer(customer.id, &request).await {
                    Ok(_) => {
                        editing.set(None);
                        reload.emit(());
                    }
                    Err(e) => {
                        Logger::error("customers", &e.to_string());
                        form_error.set(Some("Failed to update customer".to_string()));
                    }
                }
            });
        })
    };

    let close_edit = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    let to_dashboard = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Dashboard))
    };

    html! {
        <div class="page">
            <button class="btn btn-secondary" onclick={to_dashboard}>{"← Dashboard"}</button>

            <div class="page-header">
                <h2>{format!("🧑‍🌾 Customers ({})", shift)}</h2>
                <select class="filter-select" onchange={on_shift}>
                    {for Shift::ALL.iter().map(|s| html! {
                        <option value={s.as_str()} selected={*s == shift}>{s.as_str()}</option>
                    })}
                </select>
            </div>

            <form class="inline-form" onsubmit={on_submit}>
                <input
                    type="text"
                    placeholder="Full Name"
                    value={(*full_name).clone()}
                    onchange={on_full_name}
                />
                <input
                    type="text"
                    placeholder="Nickname"
                    value={(*nickname).clone()}
                    onchange={on_nickname}
                />
                <input
                    type="number"
                    step="0.01"
                    placeholder="₹ / Litre"
                    value={(*price).clone()}
                    onchange={on_price}
                />
                <button type="submit" class="btn btn-primary">{"Add"}</button>
            </form>

            {if let Some(error) = (*form_error).as_ref() {
                html! { <p class="form-message error">{error}</p> }
            } else {
                html! {}
            }}

            {if customers.loading {
                html! { <p class="loading">{"Loading customers..."}</p> }
            } else if customers.customers.is_empty() {
                html! { <p class="empty">{"No customers added for this shift"}</p> }
            } else {
                html! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Name"}</th>
                                <th>{"Nickname"}</th>
                                <th>{"₹ / Litre"}</th>
                                <th>{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for customers.customers.iter().map(|customer| {
                                let edit = {
                                    let editing = editing.clone();
                                    let customer = customer.clone();
                                    Callback::from(move |_: MouseEvent| editing.set(Some(customer.clone())))
                                };
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    let id = customer.id;
                                    Callback::from(move |_: MouseEvent| on_delete.emit(id))
                                };
                                html! {
                                    <tr key={customer.id}>
                                        <td>{&customer.full_name}</td>
                                        <td>{customer.nickname.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td class="numeric">
                                            {customer.price_per_litre
                                                .map(|p| format!("{}", p))
                                                .unwrap_or_else(|| "-".to_string())}
                                        </td>
                                        <td>
                                            <button class="btn btn-small" onclick={edit}>{"Edit"}</button>
                                            <button class="btn btn-small btn-danger" onclick={delete}>{"Delete"}</button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }
            }}

            {if let Some(customer) = (*editing).clone() {
                html! {
                    <CustomerEditModal
                        customer={customer}
                        on_save={on_save_edit}
                        on_close={close_edit}
                    />
                }
            } else {
                html! {}
            }}
        </div>
    }
}
