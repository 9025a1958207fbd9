use crate::components::month_filter::MonthFilter;
use crate::hooks::use_overview::use_overview;
use crate::services::{date_utils, download, logging::Logger, report};
use crate::session::use_session;
use crate::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExportPageProps {
    pub on_navigate: Callback<Page>,
}

/// Fetches the same month matrix as the overview and serializes it into a
/// self-contained HTML document offered as a client-side download. Nothing
/// is uploaded anywhere.
#[function_component(ExportPage)]
pub fn export_page(props: &ExportPageProps) -> Html {
    let session = use_session();
    let shift = session.shift;
    let month = use_state(date_utils::current_month);
    let year = use_state(date_utils::current_year);
    let (overview, _) = use_overview(&session.api, shift, *month, *year);
    let error = use_state(|| None::<String>);

    let on_month_change = {
        let month = month.clone();
        Callback::from(move |value: u32| month.set(value))
    };
    let on_year_change = {
        let year = year.clone();
        Callback::from(move |value: i32| year.set(value))
    };

    let on_download = {
        let data = overview.data.clone();
        let error = error.clone();
        let month = *month;
        let year = *year;
        Callback::from(move |_: MouseEvent| {
            let Some(data) = data.as_ref() else {
                return;
            };
            let generated_at = date_utils::format_date_for_display(&date_utils::current_date());
            let html = report::overview_report(shift, month, year, data, &generated_at);
            let filename = report::overview_filename(shift, year, month);
            if let Err(e) = download::download_html(&filename, &html) {
                Logger::error("export", &e.to_string());
                error.set(Some("Failed to generate download".to_string()));
            }
        })
    };

    let to_dashboard = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Dashboard))
    };

    let Some(data) = overview.data.clone() else {
        return html! {
            <div class="page">
                <button class="btn btn-secondary" onclick={to_dashboard}>{"← Dashboard"}</button>
                {if let Some(error) = overview.error.as_ref() {
                    html! { <p class="form-message error">{error}</p> }
                } else {
                    html! { <p class="loading">{"Loading..."}</p> }
                }}
            </div>
        };
    };

    html! {
        <div class="page page-wide">
            <button class="btn btn-secondary" onclick={to_dashboard}>{"← Dashboard"}</button>

            <h2>{"📄 Download Overview"}</h2>

            <div class="export-controls">
                <MonthFilter
                    shift={shift}
                    month={*month}
                    year={*year}
                    on_shift_change={session.on_shift_change.clone()}
                    on_month_change={on_month_change}
                    on_year_change={on_year_change}
                />
                <button class="btn btn-primary" onclick={on_download}>{"Download"}</button>
            </div>

            {if let Some(error) = (*error).as_ref() {
                html! { <p class="form-message error">{error}</p> }
            } else {
                html! {}
            }}

            <div class="table-scroll">
                <table class="data-table matrix-table">
                    <thead>
                        <tr>
                            <th class="sticky-name">{"Customer"}</th>
                            {for data.day_numbers().map(|day| html! { <th>{day}</th> })}
                            <th>{"Total Litres"}</th>
                            <th>{"Total Amount"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for data.customers.iter().map(|customer| html! {
                            <tr key={customer.id}>
                                <td class="sticky-name">{customer.display_name()}</td>
                                {for data.day_numbers().map(|day| {
                                    let litres = data.litres_at(day, customer.id);
                                    html! {
                                        <td>
                                            {if litres > 0.0 {
                                                format!("{:.2} L", litres)
                                            } else {
                                                "-".to_string()
                                            }}
                                        </td>
                                    }
                                })}
                                <td class="numeric"><b>{format!("{:.2}", data.total_litres(customer.id))}</b></td>
                                <td class="numeric"><b>{format!("₹{:.2}", data.total_amount(customer.id))}</b></td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
