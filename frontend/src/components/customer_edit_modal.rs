use shared::{Customer, UpdateCustomerRequest};
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CustomerEditModalProps {
    pub customer: Customer,
    pub on_save: Callback<UpdateCustomerRequest>,
    pub on_close: Callback<()>,
}

/// Edit dialog pre-populated with the selected customer. Saving coerces the
/// price field to a number or null; blank nicknames normalize to null.
#[function_component(CustomerEditModal)]
pub fn customer_edit_modal(props: &CustomerEditModalProps) -> Html {
    let full_name = use_state(|| props.customer.full_name.clone());
    let nickname = use_state(|| props.customer.nickname.clone().unwrap_or_default());
    let price = use_state(|| {
        props
            .customer
            .price_per_litre
            .map(|p| p.to_string())
            .unwrap_or_default()
    });

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

    let on_submit = {
        let full_name = full_name.clone();
        let nickname = nickname.clone();
        let price = price.clone();
        let shift = props.customer.shift;
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let nickname = nickname.trim().to_string();
            on_save.emit(UpdateCustomerRequest {
                full_name: full_name.trim().to_string(),
                nickname: if nickname.is_empty() { None } else { Some(nickname) },
                price_per_litre: price.trim().parse::<f64>().ok(),
                shift,
            });
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"Edit Customer"}</h3>
                <form class="modal-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="edit-full-name">{"Full Name"}</label>
                        <input
                            id="edit-full-name"
                            type="text"
                            value={(*full_name).clone()}
                            onchange={on_full_name}
                        />
                    </div>
                    <div class="form-group">
                        <label for="edit-nickname">{"Nickname"}</label>
                        <input
                            id="edit-nickname"
                            type="text"
                            value={(*nickname).clone()}
                            onchange={on_nickname}
                        />
                    </div>
                    <div class="form-group">
                        <label for="edit-price">{"₹ / Litre"}</label>
                        <input
                            id="edit-price"
                            type="number"
                            step="0.01"
                            value={(*price).clone()}
                            onchange={on_price}
                        />
                    </div>
                    <div class="modal-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {"Save"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
