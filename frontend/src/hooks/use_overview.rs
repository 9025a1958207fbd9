use crate::services::api::ApiClient;
use crate::services::latest::RequestSequence;
use crate::services::logging::Logger;
use shared::{OverviewData, Shift};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct OverviewState {
    pub data: Option<OverviewData>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct OverviewActions {
    pub reload: Callback<()>,
}

/// The month matrix for one (shift, month, year) selection. Rapid filter
/// changes start overlapping fetches; responses carry a generation ticket
/// and stale ones are dropped instead of overwriting newer state.
#[hook]
pub fn use_overview(
    api: &ApiClient,
    shift: Shift,
    month: u32,
    year: i32,
) -> (OverviewState, OverviewActions) {
    let data = use_state(|| None::<OverviewData>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let sequence_ref = use_mut_ref(RequestSequence::default);
    let sequence = sequence_ref.borrow().clone();

    let reload = {
        let data = data.clone();
        let loading = loading.clone();
        let error = error.clone();
        let sequence = sequence.clone();
        use_callback((api.clone(), shift, month, year), move |_, deps| {
            let (api, shift, month, year) = deps.clone();
            let data = data.clone();
            let loading = loading.clone();
            let error = error.clone();
            let sequence = sequence.clone();
            let ticket = sequence.begin();
            spawn_local(async move {
                loading.set(true);
                let result = api.overview(shift, month, year).await;
                if !sequence.is_current(ticket) {
                    // a newer filter selection superseded this fetch
                    return;
                }
                match result {
                    Ok(fresh) => {
                        data.set(Some(fresh));
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error("overview", &e.to_string());
                        data.set(None);
                        error.set(Some(format!("Failed to load overview: {}", e)));
                    }
                }
                loading.set(false);
            });
        })
    };

    use_effect_with((api.clone(), shift, month, year), {
        let reload = reload.clone();
        move |_| {
            reload.emit(());
            || ()
        }
    });

    (
        OverviewState {
            data: (*data).clone(),
            loading: *loading,
            error: (*error).clone(),
        },
        OverviewActions { reload },
    )
}
