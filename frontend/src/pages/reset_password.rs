use crate::services::logging::Logger;
use crate::session::use_session;
use crate::Page;
use shared::ResetPasswordRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResetPasswordPageProps {
    /// Pre-filled from the emailed link's query string; the field is locked
    /// when present.
    pub email: Option<String>,
    pub on_navigate: Callback<Page>,
}

#[function_component(ResetPasswordPage)]
pub fn reset_password_page(props: &ResetPasswordPageProps) -> Html {
    let session = use_session();
    let email_locked = props.email.is_some();
    let email = use_state(|| props.email.clone().unwrap_or_default());
    let otp = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let message = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_otp = {
        let otp = otp.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            otp.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };
    let on_confirm = {
        let confirm = confirm.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            confirm.set(input.value());
        })
    };

    let on_submit = {
        let api = session.api.clone();
        let email = email.clone();
        let otp = otp.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let message = message.clone();
        let loading = loading.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            message.set(None);

            if password.len() < 6 {
                message.set(Some("Password should be at least 6 characters.".to_string()));
                return;
            }
            if *password != *confirm {
                message.set(Some("Passwords do not match.".to_string()));
                return;
            }
            if otp.trim().len() < 4 {
                message.set(Some("Enter the OTP you received.".to_string()));
                return;
            }

            let api = api.clone();
            let email = email.clone();
            let otp = otp.clone();
            let password = password.clone();
            let message = message.clone();
            let loading = loading.clone();
            let on_navigate = on_navigate.clone();
            spawn_local(async move {
                loading.set(true);
                let request = ResetPasswordRequest {
                    email: email.trim().to_string(),
                    otp: otp.trim().to_string(),
                    new_password: (*password).clone(),
                };
                match api.reset_password(&request).await {
                    Ok(response) if response.success => {
                        on_navigate.emit(Page::Login);
                    }
                    Ok(response) => {
                        let text = response.text().to_string();
                        message.set(Some(if text.is_empty() {
                            "Reset failed".to_string()
                        } else {
                            text
                        }));
                    }
                    Err(e) => {
                        Logger::error("reset-password", &e.to_string());
                        message.set(Some("Network or server error".to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h2 class="auth-title">{"🔐 Reset Password"}</h2>
                <p class="auth-subtitle">
                    {"Enter the OTP sent to your email and choose a new password."}
                </p>

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="reset-email">{"Email"}</label>
                        <input
                            id="reset-email"
                            type="email"
                            value={(*email).clone()}
                            onchange={on_email}
                            disabled={email_locked}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="reset-otp">{"OTP"}</label>
                        <input
                            id="reset-otp"
                            type="text"
                            value={(*otp).clone()}
                            onchange={on_otp}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="reset-password">{"New Password"}</label>
                        <input
                            id="reset-password"
                            type="password"
                            value={(*password).clone()}
                            onchange={on_password}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="reset-confirm">{"Confirm Password"}</label>
                        <input
                            id="reset-confirm"
                            type="password"
                            value={(*confirm).clone()}
                            onchange={on_confirm}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn btn-primary auth-submit" disabled={*loading}>
                        {if *loading { "Resetting..." } else { "Reset Password" }}
                    </button>
                </form>

                {if let Some(message) = (*message).as_ref() {
                    html! { <p class="form-message error">{message}</p> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
