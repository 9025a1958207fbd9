mod components;
mod hooks;
mod pages;
mod services;
mod session;

use pages::customers::CustomersPage;
use pages::daily_entry::DailyEntryPage;
use pages::dashboard::DashboardPage;
use pages::export::ExportPage;
use pages::forgot_password::ForgotPasswordPage;
use pages::login::LoginPage;
use pages::overview::OverviewPage;
use pages::payments::PaymentsPage;
use pages::register::RegisterPage;
use pages::reset_password::ResetPasswordPage;
use services::api::ApiClient;
use session::Session;
use shared::Shift;
use yew::prelude::*;

/// Views reachable in the app. Auth pages are public; everything else
/// renders only with a signed-in session.
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Login,
    Register,
    ForgotPassword,
    ResetPassword { email: Option<String> },
    Dashboard,
    Customers,
    DailyEntry,
    Overview,
    Payments,
    Export,
}

impl Page {
    fn requires_session(&self) -> bool {
        !matches!(
            self,
            Page::Login | Page::Register | Page::ForgotPassword | Page::ResetPassword { .. }
        )
    }
}

/// The reset-password mail links to `/reset?email=...`; everything else
/// starts at the login view.
fn initial_page() -> Page {
    let Some(window) = web_sys::window() else {
        return Page::Login;
    };
    let location = window.location();
    if location.pathname().unwrap_or_default().ends_with("/reset") {
        let email = location
            .search()
            .ok()
            .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
            .and_then(|params| params.get("email"));
        return Page::ResetPassword { email };
    }
    Page::Login
}

#[function_component(App)]
fn app() -> Html {
    let user_id = use_state(|| session::load().user_id);
    let shift = use_state(|| session::load().shift);
    let page = use_state(|| {
        let start = initial_page();
        if start == Page::Login && session::load().user_id.is_some() {
            Page::Dashboard
        } else {
            start
        }
    });

    let on_login = {
        let user_id = user_id.clone();
        let shift = shift.clone();
        let page = page.clone();
        Callback::from(move |id: i64| {
            session::store_login(id);
            user_id.set(Some(id));
            // storage was wiped by the login contract, so the shift
            // preference starts over from the default
            shift.set(Shift::default());
            page.set(Page::Dashboard);
        })
    };

    let on_shift_change = {
        let shift = shift.clone();
        Callback::from(move |value: Shift| {
            session::store_shift(value);
            shift.set(value);
        })
    };

    let on_logout = {
        let user_id = user_id.clone();
        let shift = shift.clone();
        let page = page.clone();
        Callback::from(move |_| {
            session::clear();
            user_id.set(None);
            shift.set(Shift::default());
            page.set(Page::Login);
        })
    };

    let navigate = {
        let page = page.clone();
        Callback::from(move |target: Page| page.set(target))
    };

    let context = Session {
        user_id: *user_id,
        shift: *shift,
        api: ApiClient::new(*user_id),
        on_login,
        on_shift_change,
        on_logout,
    };

    // presence check only: a stale id is accepted until the server rejects
    // a later call
    let current = if page.requires_session() && user_id.is_none() {
        Page::Login
    } else {
        (*page).clone()
    };

    html! {
        <ContextProvider<Session> context={context}>
            <div class="app-shell">
                {match current {
                    Page::Login => html! { <LoginPage on_navigate={navigate.clone()} /> },
                    Page::Register => html! { <RegisterPage on_navigate={navigate.clone()} /> },
                    Page::ForgotPassword => html! { <ForgotPasswordPage on_navigate={navigate.clone()} /> },
                    Page::ResetPassword { email } => html! {
                        <ResetPasswordPage email={email} on_navigate={navigate.clone()} />
                    },
                    Page::Dashboard => html! { <DashboardPage on_navigate={navigate.clone()} /> },
                    Page::Customers => html! { <CustomersPage on_navigate={navigate.clone()} /> },
                    Page::DailyEntry => html! { <DailyEntryPage on_navigate={navigate.clone()} /> },
                    Page::Overview => html! { <OverviewPage on_navigate={navigate.clone()} /> },
                    Page::Payments => html! { <PaymentsPage on_navigate={navigate.clone()} /> },
                    Page::Export => html! { <ExportPage on_navigate={navigate.clone()} /> },
                }}
            </div>
        </ContextProvider<Session>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
