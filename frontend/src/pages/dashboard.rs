use crate::session::use_session;
use crate::Page;
use shared::Shift;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

struct NavCard {
    title: &'static str,
    page: Page,
}

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub on_navigate: Callback<Page>,
}

/// Navigation hub: one card per view, the shift preference selector and
/// logout.
#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let session = use_session();

    let cards = [
        NavCard { title: "Customers", page: Page::Customers },
        NavCard { title: "Day Wise Entry", page: Page::DailyEntry },
        NavCard { title: "Overview", page: Page::Overview },
        NavCard { title: "Payment Summary", page: Page::Payments },
        NavCard { title: "Download Overview", page: Page::Export },
    ];

    let on_shift = {
        let on_shift_change = session.on_shift_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(shift) = select.value().parse::<Shift>() {
                on_shift_change.emit(shift);
            }
        })
    };

    let on_logout = {
        let on_logout = session.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <div class="dashboard">
            <header class="dashboard-header">
                <div>
                    <h1 class="dashboard-title">{"🥛 Milk Dashboard"}</h1>
                    <p class="dashboard-subtitle">{"Manage deliveries efficiently"}</p>
                </div>

                <div class="dashboard-controls">
                    <select class="filter-select" onchange={on_shift}>
                        {for Shift::ALL.iter().map(|s| html! {
                            <option value={s.as_str()} selected={*s == session.shift}>{s.as_str()}</option>
                        })}
                    </select>
                    <button class="btn btn-danger" onclick={on_logout}>{"Logout"}</button>
                </div>
            </header>

            <div class="dashboard-cards">
                {for cards.iter().map(|card| {
                    let on_navigate = props.on_navigate.clone();
                    let page = card.page.clone();
                    html! {
                        <div
                            class="dashboard-card"
                            onclick={Callback::from(move |_| on_navigate.emit(page.clone()))}
                        >
                            <h3>{card.title}</h3>
                            <p>{"Tap to open"}</p>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
