use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use shared::{Customer, Shift};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct CustomersState {
    pub customers: Vec<Customer>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct CustomersActions {
    pub reload: Callback<()>,
}

/// Customer list for one shift, reloaded whenever the shift changes.
#[hook]
pub fn use_customers(api: &ApiClient, shift: Shift) -> (CustomersState, CustomersActions) {
    let customers = use_state(Vec::<Customer>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    let reload = {
        let customers = customers.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_callback((api.clone(), shift), move |_, deps| {
            let (api, shift) = deps.clone();
            let customers = customers.clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                loading.set(true);
                match api.customers(shift).await {
                    Ok(list) => {
                        customers.set(list);
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error("customers", &e.to_string());
                        customers.set(Vec::new());
                        error.set(Some(format!("Failed to load customers: {}", e)));
                    }
                }
                loading.set(false);
            });
        })
    };

    use_effect_with((api.clone(), shift), {
        let reload = reload.clone();
        move |_| {
            reload.emit(());
            || ()
        }
    });

    (
        CustomersState {
            customers: (*customers).clone(),
            loading: *loading,
            error: (*error).clone(),
        },
        CustomersActions { reload },
    )
}
