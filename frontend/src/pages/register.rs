use crate::services::logging::Logger;
use crate::session::use_session;
use crate::Page;
use shared::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RegisterPageProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(RegisterPage)]
pub fn register_page(props: &RegisterPageProps) -> Html {
    let session = use_session();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let message = use_state(|| None::<String>);
    let succeeded = use_state(|| false);
    let submitting = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let api = session.api.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let message = message.clone();
        let succeeded = succeeded.clone();
        let submitting = submitting.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api = api.clone();
            let name = name.clone();
            let email = email.clone();
            let password = password.clone();
            let message = message.clone();
            let succeeded = succeeded.clone();
            let submitting = submitting.clone();
            let on_navigate = on_navigate.clone();
            spawn_local(async move {
                message.set(None);
                succeeded.set(false);
                submitting.set(true);
                let request = RegisterRequest {
                    name: (*name).clone(),
                    email: (*email).clone(),
                    password: (*password).clone(),
                };
                match api.register(&request).await {
                    Ok(response) if response.success => {
                        succeeded.set(true);
                        message.set(Some(
                            "Registration successful! Redirecting to login...".to_string(),
                        ));
                        gloo::timers::future::TimeoutFuture::new(1200).await;
                        on_navigate.emit(Page::Login);
                    }
                    Ok(response) => message.set(Some(
                        response
                            .message
                            .unwrap_or_else(|| "Registration failed".to_string()),
                    )),
                    Err(e) => {
                        Logger::error("register", &e.to_string());
                        message.set(Some("Server error. Please try again.".to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let to_login = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Login))
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h2 class="auth-title">{"📝 Create Account"}</h2>
                <p class="auth-subtitle">{"Register to manage your milk attendance"}</p>

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="register-name">{"Full Name"}</label>
                        <input
                            id="register-name"
                            type="text"
                            value={(*name).clone()}
                            onchange={on_name}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-email">{"Email Address"}</label>
                        <input
                            id="register-email"
                            type="email"
                            value={(*email).clone()}
                            onchange={on_email}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-password">{"Password"}</label>
                        <input
                            id="register-password"
                            type="password"
                            value={(*password).clone()}
                            onchange={on_password}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn btn-primary auth-submit" disabled={*submitting}>
                        {"Register"}
                    </button>
                </form>

                {if let Some(message) = (*message).as_ref() {
                    let class = if *succeeded { "form-message success" } else { "form-message error" };
                    html! { <p class={class}>{message}</p> }
                } else {
                    html! {}
                }}

                <p class="auth-footer">
                    {"Already have an account? "}
                    <button type="button" class="link-btn" onclick={to_login}>
                        {"Login"}
                    </button>
                </p>
            </div>
        </div>
    }
}
