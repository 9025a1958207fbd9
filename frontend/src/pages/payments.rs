use crate::hooks::use_customers::use_customers;
use crate::hooks::use_payments::use_payments;
use crate::services::{date_utils, download, logging::Logger, report};
use crate::session::use_session;
use crate::Page;
use shared::{name_key, Customer, SaveReminderRequest, TogglePaymentRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaymentsPageProps {
    pub on_navigate: Callback<Page>,
}

/// Payment summary for one shift: per-customer paid toggles, the
/// server-filtered unpaid list with direct mark-as-paid and a downloadable
/// report, reminder settings, and the notification log.
#[function_component(PaymentsPage)]
pub fn payments_page(props: &PaymentsPageProps) -> Html {
    let session = use_session();
    let shift = session.shift;
    let (customers, _) = use_customers(&session.api, shift);
    let (payments, payments_actions) = use_payments(&session.api, shift);

    let enabled = use_state(|| false);
    let time = use_state(|| "08:00".to_string());
    let repeat_days = use_state(|| 1u32);
    let saving = use_state(|| false);
    let status = use_state(|| None::<String>);

    // reminder settings load once per shift change; a failed load keeps the
    // form defaults
    {
        let api = session.api.clone();
        let enabled = enabled.clone();
        let time = time.clone();
        let repeat_days = repeat_days.clone();
        use_effect_with((api.clone(), shift), move |deps| {
            let (api, shift) = deps.clone();
            spawn_local(async move {
                if let Ok(config) = api.reminder(shift).await {
                    enabled.set(config.enabled);
                    time.set(config.time);
                    repeat_days.set(config.repeat_days.max(1));
                }
            });
            || ()
        });
    }

    let Some(user_id) = session.user_id else {
        return html! {};
    };

    let on_enabled = {
        let enabled = enabled.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            enabled.set(input.checked());
        })
    };
    let on_time = {
        let time = time.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            time.set(input.value());
        })
    };
    let on_repeat_days = {
        let repeat_days = repeat_days.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            repeat_days.set(input.value().parse::<u32>().unwrap_or(1).max(1));
        })
    };

    let save_reminder = {
        let api = session.api.clone();
        let enabled = enabled.clone();
        let time = time.clone();
        let repeat_days = repeat_days.clone();
        let saving = saving.clone();
        let status = status.clone();
        let reload_notifications = payments_actions.reload_notifications.clone();
        Callback::from(move |_: MouseEvent| {
            let api = api.clone();
            let saving = saving.clone();
            let status = status.clone();
            let reload_notifications = reload_notifications.clone();
            let request = SaveReminderRequest {
                user_id,
                shift,
                enabled: *enabled,
                time: (*time).clone(),
                repeat_days: *repeat_days,
            };
            spawn_local(async move {
                saving.set(true);
                match api.save_reminder(&request).await {
                    Ok(response) if response.success => {
                        status.set(Some("Reminder saved successfully".to_string()));
                        // an enabled reminder fires a one-shot dispatch now,
                        // not just on schedule
                        if request.enabled {
                            if let Err(e) = api.trigger_reminder(shift).await {
                                Logger::warn("payments", &e.to_string());
                            }
                            reload_notifications.emit(());
                        }
                    }
                    Ok(response) => status.set(Some(
                        response
                            .error
                            .unwrap_or_else(|| "Failed to save reminder".to_string()),
                    )),
                    Err(e) => {
                        Logger::error("payments", &e.to_string());
                        status.set(Some("Failed to save reminder".to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    let send_test_reminder = {
        let api = session.api.clone();
        let status = status.clone();
        let reload_notifications = payments_actions.reload_notifications.clone();
        Callback::from(move |_: MouseEvent| {
            let api = api.clone();
            let status = status.clone();
            let reload_notifications = reload_notifications.clone();
            spawn_local(async move {
                match api.trigger_reminder(shift).await {
                    Ok(response) if response.success => {
                        status.set(Some(
                            "Test reminder triggered. Email will be sent if unpaid customers exist."
                                .to_string(),
                        ));
                        reload_notifications.emit(());
                    }
                    Ok(response) => status.set(Some(
                        response
                            .error
                            .unwrap_or_else(|| "Failed to trigger test reminder".to_string()),
                    )),
                    Err(e) => {
                        Logger::error("payments", &e.to_string());
                        status.set(Some("Failed to trigger test reminder".to_string()));
                    }
                }
            });
        })
    };

    let send_unpaid_email = {
        let api = session.api.clone();
        let status = status.clone();
        let reload_notifications = payments_actions.reload_notifications.clone();
        Callback::from(move |_: MouseEvent| {
            let api = api.clone();
            let status = status.clone();
            let reload_notifications = reload_notifications.clone();
            spawn_local(async move {
                match api.send_unpaid_email(shift).await {
                    Ok(response) if response.success => {
                        status.set(Some("Unpaid customers email sent to admin".to_string()));
                        reload_notifications.emit(());
                    }
                    Ok(response) => status.set(Some(
                        response
                            .error
                            .unwrap_or_else(|| "Failed to send unpaid report".to_string()),
                    )),
                    Err(e) => {
                        Logger::error("payments", &e.to_string());
                        status.set(Some("Failed to send unpaid report".to_string()));
                    }
                }
            });
        })
    };

    // every toggle reconciles through a full reload of both lists
    let toggle_payment = {
        let api = session.api.clone();
        let status = status.clone();
        let reload_payments = payments_actions.reload_payments.clone();
        let reload_unpaid = payments_actions.reload_unpaid.clone();
        Callback::from(move |(customer, paid_now): (Customer, bool)| {
            let request = TogglePaymentRequest {
                customer_id: customer.id,
                customer_name: customer.display_name().to_string(),
                shift,
                paid: !paid_now,
                user_id,
            };
            let api = api.clone();
            let status = status.clone();
            let reload_payments = reload_payments.clone();
            let reload_unpaid = reload_unpaid.clone();
            spawn_local(async move {
                match api.toggle_payment(&request).await {
                    Ok(_) => {
                        reload_payments.emit(());
                        reload_unpaid.emit(());
                    }
                    Err(e) => {
                        Logger::error("payments", &e.to_string());
                        status.set(Some("Failed to update payment status".to_string()));
                    }
                }
            });
        })
    };

    let mark_unpaid_row_paid = {
        let toggle_payment = toggle_payment.clone();
        let status = status.clone();
        let list = customers.customers.clone();
        Callback::from(move |(row_customer_id, row_name): (Option<i64>, String)| {
            let resolved = match row_customer_id {
                Some(id) => list.iter().find(|c| c.id == id),
                None => list
                    .iter()
                    .find(|c| name_key(c.display_name()) == name_key(&row_name)),
            };
            match resolved {
                Some(customer) => toggle_payment.emit((customer.clone(), false)),
                None => status.set(Some(format!("Unknown customer: {}", row_name))),
            }
        })
    };

    let download_unpaid = {
        let rows = payments.unpaid.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            let date = date_utils::current_date();
            let html = report::unpaid_report(
                shift,
                &rows,
                &date,
                &date_utils::format_date_for_display(&date),
            );
            if let Err(e) = download::download_html(&report::unpaid_filename(shift, &date), &html) {
                Logger::error("payments", &e.to_string());
                status.set(Some("Failed to generate report".to_string()));
            }
        })
    };

    let to_dashboard = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Dashboard))
    };

    html! {
        <div class="page">
            <button class="btn btn-secondary" onclick={to_dashboard}>{"← Dashboard"}</button>

            <h2>{format!("Payment Summary ({})", shift)}</h2>

            {if let Some(status) = (*status).as_ref() {
                html! { <p class="form-message">{status}</p> }
            } else {
                html! {}
            }}

            <section class="reminder-panel">
                <h3>{"Email Reminder"}</h3>
                <div class="reminder-row">
                    <label>
                        {format!("{} Shift", shift)}
                        <input
                            type="checkbox"
                            checked={*enabled}
                            disabled={*saving}
                            onchange={on_enabled}
                        />
                    </label>
                </div>

                {if *enabled {
                    html! {
                        <div class="reminder-row reminder-config">
                            <input type="time" value={(*time).clone()} onchange={on_time} />
                            <input
                                type="number"
                                min="1"
                                value={repeat_days.to_string()}
                                onchange={on_repeat_days}
                                title="Repeat every (days)"
                            />
                            <button class="btn btn-primary" disabled={*saving} onclick={save_reminder}>
                                {"Save"}
                            </button>
                            <button class="btn btn-secondary" disabled={*saving} onclick={send_test_reminder}>
                                {"Send Test Reminder"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }}
            </section>

            <section>
                <h3>{"Payment Status"}</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Customer"}</th>
                            <th>{"Status"}</th>
                            <th>{"Action"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for customers.customers.iter().map(|customer| {
                            let paid = payments
                                .payments
                                .iter()
                                .find(|p| p.matches(customer))
                                .map(|p| p.paid)
                                .unwrap_or(false);
                            let toggle = {
                                let toggle_payment = toggle_payment.clone();
                                let customer = customer.clone();
                                Callback::from(move |_: Event| {
                                    toggle_payment.emit((customer.clone(), paid))
                                })
                            };
                            html! {
                                <tr key={customer.id}>
                                    <td>{customer.display_name()}</td>
                                    <td>
                                        <span class={if paid { "chip chip-paid" } else { "chip chip-unpaid" }}>
                                            {if paid { "Paid" } else { "Unpaid" }}
                                        </span>
                                    </td>
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
            </section>

            <section>
                <div class="section-header">
                    <h3>{"Unpaid Customers"}</h3>
                    <div>
                        <button class="btn btn-secondary" onclick={download_unpaid}>
                            {"Download Report"}
                        </button>
                        <button class="btn btn-primary" onclick={send_unpaid_email}>
                            {"Send Unpaid Report to Admin"}
                        </button>
                    </div>
                </div>

                {if payments.unpaid.is_empty() {
                    html! { <p class="empty">{"No unpaid customers."}</p> }
                } else {
                    html! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Name"}</th>
                                    <th>{"Litres"}</th>
                                    <th>{"Rate"}</th>
                                    <th>{"Total"}</th>
                                    <th>{"Action"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for payments.unpaid.iter().map(|row| {
                                    let mark_paid = {
                                        let mark_unpaid_row_paid = mark_unpaid_row_paid.clone();
                                        let customer_id = row.customer_id;
                                        let name = row.customer_name.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            mark_unpaid_row_paid.emit((customer_id, name.clone()))
                                        })
                                    };
                                    html! {
                                        <tr>
                                            <td>{&row.customer_name}</td>
                                            <td class="numeric">{format!("{:.2}", row.litres)}</td>
                                            <td class="numeric">{format!("{:.2}", row.rate)}</td>
                                            <td class="numeric"><b>{format!("₹{:.2}", row.total)}</b></td>
                                            <td>
                                                <button class="btn btn-small" onclick={mark_paid}>
                                                    {"Mark Paid"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    }
                }}
            </section>

            <section>
                <h3>{"Recent Notifications"}</h3>
                {if payments.notifications.is_empty() {
                    html! { <p class="empty">{"No notifications yet."}</p> }
                } else {
                    html! {
                        <ul class="notification-list">
                            {for payments.notifications.iter().map(|n| html! {
                                <li key={n.id}>
                                    <span class="notification-subject">{&n.subject}</span>
                                    <span class="notification-date">
                                        {date_utils::format_timestamp(&n.date_sent)}
                                    </span>
                                </li>
                            })}
                        </ul>
                    }
                }}
            </section>
        </div>
    }
}
