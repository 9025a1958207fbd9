use crate::services::logging::Logger;
use crate::session::use_session;
use crate::Page;
use shared::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let session = use_session();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let message = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    // already signed in: go straight to the dashboard
    {
        let on_navigate = props.on_navigate.clone();
        use_effect_with(session.user_id.is_some(), move |signed_in| {
            if *signed_in {
                on_navigate.emit(Page::Dashboard);
            }
            || ()
        });
    }

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
        let on_login = session.on_login.clone();
        let email = email.clone();
        let password = password.clone();
        let message = message.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api = api.clone();
            let on_login = on_login.clone();
            let email = email.clone();
            let password = password.clone();
            let message = message.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                message.set(None);
                submitting.set(true);
                let request = LoginRequest {
                    email: (*email).clone(),
                    password: (*password).clone(),
                };
                match api.login(&request).await {
                    Ok(response) if response.success => match response.user_id {
                        Some(id) => on_login.emit(id),
                        None => message.set(Some("Invalid credentials".to_string())),
                    },
                    Ok(response) => message.set(Some(
                        response
                            .message
                            .unwrap_or_else(|| "Invalid credentials".to_string()),
                    )),
                    Err(e) => {
                        Logger::error("login", &e.to_string());
                        message.set(Some("Server error. Please try again.".to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let to_forgot = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::ForgotPassword))
    };
    let to_register = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Register))
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h2 class="auth-title">{"🥛 Milk Attendance"}</h2>
                <p class="auth-subtitle">{"Sign in to continue"}</p>

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="login-email">{"Email"}</label>
                        <input
                            id="login-email"
                            type="email"
                            value={(*email).clone()}
                            onchange={on_email}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="login-password">{"Password"}</label>
                        <input
                            id="login-password"
                            type="password"
                            value={(*password).clone()}
                            onchange={on_password}
                            required=true
                        />
                    </div>

                    <button type="button" class="link-btn" onclick={to_forgot}>
                        {"Forgot password?"}
                    </button>

                    <button type="submit" class="btn btn-primary auth-submit" disabled={*submitting}>
                        {if *submitting { "Signing in..." } else { "Login" }}
                    </button>
                </form>

                {if let Some(message) = (*message).as_ref() {
                    html! { <p class="form-message error">{message}</p> }
                } else {
                    html! {}
                }}

                <p class="auth-footer">
                    {"Don't have an account? "}
                    <button type="button" class="link-btn" onclick={to_register}>
                        {"Register"}
                    </button>
                </p>
            </div>
        </div>
    }
}
