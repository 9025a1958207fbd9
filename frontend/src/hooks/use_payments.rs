use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use shared::{Notification, Payment, Shift, UnpaidRow};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct PaymentsState {
    pub payments: Vec<Payment>,
    pub unpaid: Vec<UnpaidRow>,
    pub notifications: Vec<Notification>,
}

#[derive(Clone)]
pub struct PaymentsActions {
    pub reload_payments: Callback<()>,
    pub reload_unpaid: Callback<()>,
    pub reload_notifications: Callback<()>,
}

/// Payment rows, the server-filtered unpaid list and the notification log
/// for one shift. Each list reloads independently; a failed load leaves an
/// empty list rather than stale rows from another shift.
#[hook]
pub fn use_payments(api: &ApiClient, shift: Shift) -> (PaymentsState, PaymentsActions) {
    let payments = use_state(Vec::<Payment>::new);
    let unpaid = use_state(Vec::<UnpaidRow>::new);
    let notifications = use_state(Vec::<Notification>::new);

    let reload_payments = {
        let payments = payments.clone();
        use_callback((api.clone(), shift), move |_, deps| {
            let (api, shift) = deps.clone();
            let payments = payments.clone();
            spawn_local(async move {
                match api.payments(shift).await {
                    Ok(response) if response.success => payments.set(response.payments),
                    Ok(response) => {
                        if let Some(error) = response.error {
                            Logger::warn("payments", &error);
                        }
                        payments.set(Vec::new());
                    }
                    Err(e) => {
                        Logger::error("payments", &e.to_string());
                        payments.set(Vec::new());
                    }
                }
            });
        })
    };

    let reload_unpaid = {
        let unpaid = unpaid.clone();
        use_callback((api.clone(), shift), move |_, deps| {
            let (api, shift) = deps.clone();
            let unpaid = unpaid.clone();
            spawn_local(async move {
                match api.unpaid_rows(shift).await {
                    Ok(response) if response.success => unpaid.set(response.rows),
                    Ok(_) => unpaid.set(Vec::new()),
                    Err(e) => {
                        Logger::error("payments", &e.to_string());
                        unpaid.set(Vec::new());
                    }
                }
            });
        })
    };

    let reload_notifications = {
        let notifications = notifications.clone();
        use_callback((api.clone(), shift), move |_, deps| {
            let (api, shift) = deps.clone();
            let notifications = notifications.clone();
            spawn_local(async move {
                match api.notifications(shift).await {
                    Ok(list) => notifications.set(list),
                    Err(e) => {
                        Logger::error("notifications", &e.to_string());
                        notifications.set(Vec::new());
                    }
                }
            });
        })
    };

    use_effect_with((api.clone(), shift), {
        let reload_payments = reload_payments.clone();
        let reload_unpaid = reload_unpaid.clone();
        let reload_notifications = reload_notifications.clone();
        move |_| {
            reload_payments.emit(());
            reload_unpaid.emit(());
            reload_notifications.emit(());
            || ()
        }
    });

    (
        PaymentsState {
            payments: (*payments).clone(),
            unpaid: (*unpaid).clone(),
            notifications: (*notifications).clone(),
        },
        PaymentsActions {
            reload_payments,
            reload_unpaid,
            reload_notifications,
        },
    )
}
