use crate::services::logging::Logger;
use crate::session::use_session;
use crate::Page;
use shared::{ForgotPasswordRequest, ResetPasswordRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Step {
    RequestOtp,
    SubmitReset,
}

#[derive(Properties, PartialEq)]
pub struct ForgotPasswordPageProps {
    pub on_navigate: Callback<Page>,
}

/// Two-step recovery on one page: request an OTP by email, then submit the
/// OTP with a new password. Server messages are surfaced verbatim.
#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page(props: &ForgotPasswordPageProps) -> Html {
    let session = use_session();
    let step = use_state(|| Step::RequestOtp);
    let email = use_state(String::new);
    let otp = use_state(String::new);
    let new_password = use_state(String::new);
    let message = use_state(|| None::<String>);
    let busy = use_state(|| false);

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
    let on_new_password = {
        let new_password = new_password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_password.set(input.value());
        })
    };

    let send_otp = {
        let api = session.api.clone();
        let email = email.clone();
        let message = message.clone();
        let step = step.clone();
        let busy = busy.clone();
        Callback::from(move |_: MouseEvent| {
            if email.trim().is_empty() {
                message.set(Some("Enter your email".to_string()));
                return;
            }
            let api = api.clone();
            let email = email.clone();
            let message = message.clone();
            let step = step.clone();
            let busy = busy.clone();
            spawn_local(async move {
                busy.set(true);
                let request = ForgotPasswordRequest {
                    email: email.trim().to_string(),
                };
                match api.forgot_password(&request).await {
                    Ok(response) => {
                        message.set(Some(response.text().to_string()));
                        if response.success {
                            step.set(Step::SubmitReset);
                        }
                    }
                    Err(e) => {
                        Logger::error("forgot-password", &e.to_string());
                        message.set(Some("Failed to send OTP".to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };

    let reset_password = {
        let api = session.api.clone();
        let email = email.clone();
        let otp = otp.clone();
        let new_password = new_password.clone();
        let message = message.clone();
        let busy = busy.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            if otp.trim().is_empty() || new_password.is_empty() {
                message.set(Some("Fill all fields".to_string()));
                return;
            }
            let api = api.clone();
            let email = email.clone();
            let otp = otp.clone();
            let new_password = new_password.clone();
            let message = message.clone();
            let busy = busy.clone();
            let on_navigate = on_navigate.clone();
            spawn_local(async move {
                busy.set(true);
                let request = ResetPasswordRequest {
                    email: email.trim().to_string(),
                    otp: otp.trim().to_string(),
                    new_password: (*new_password).clone(),
                };
                match api.reset_password(&request).await {
                    Ok(response) => {
                        message.set(Some(response.text().to_string()));
                        if response.success {
                            on_navigate.emit(Page::Login);
                        }
                    }
                    Err(e) => {
                        Logger::error("forgot-password", &e.to_string());
                        message.set(Some("Failed to reset password".to_string()));
                    }
                }
                busy.set(false);
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
                <h2 class="auth-title">{"🔐 Forgot Password"}</h2>
                <p class="auth-subtitle">
                    {match *step {
                        Step::RequestOtp => "Enter your registered email",
                        Step::SubmitReset => "Enter OTP & new password",
                    }}
                </p>

                {match *step {
                    Step::RequestOtp => html! {
                        <>
                            <div class="form-group">
                                <label for="forgot-email">{"Email"}</label>
                                <input
                                    id="forgot-email"
                                    type="email"
                                    value={(*email).clone()}
                                    onchange={on_email}
                                />
                            </div>
                            <button class="btn btn-primary auth-submit" onclick={send_otp} disabled={*busy}>
                                {"Send OTP"}
                            </button>
                        </>
                    },
                    Step::SubmitReset => html! {
                        <>
                            <div class="form-group">
                                <label for="forgot-otp">{"OTP"}</label>
                                <input
                                    id="forgot-otp"
                                    type="text"
                                    value={(*otp).clone()}
                                    onchange={on_otp}
                                />
                            </div>
                            <div class="form-group">
                                <label for="forgot-new-password">{"New Password"}</label>
                                <input
                                    id="forgot-new-password"
                                    type="password"
                                    value={(*new_password).clone()}
                                    onchange={on_new_password}
                                />
                            </div>
                            <button class="btn btn-primary auth-submit" onclick={reset_password} disabled={*busy}>
                                {"Reset Password"}
                            </button>
                        </>
                    },
                }}

                {if let Some(message) = (*message).as_ref() {
                    html! { <p class="form-message">{message}</p> }
                } else {
                    html! {}
                }}

                <button type="button" class="link-btn" onclick={to_login}>
                    {"← Back to Login"}
                </button>
            </div>
        </div>
    }
}
