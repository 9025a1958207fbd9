use crate::services::date_utils;
use shared::{Shift, MONTH_NAMES};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MonthFilterProps {
    pub shift: Shift,
    pub month: u32,
    pub year: i32,
    pub on_shift_change: Callback<Shift>,
    pub on_month_change: Callback<u32>,
    pub on_year_change: Callback<i32>,
}

/// Shift / month / year selectors shared by the overview and export views.
/// The year window spans two years back through two ahead of today.
#[function_component(MonthFilter)]
pub fn month_filter(props: &MonthFilterProps) -> Html {
    let on_shift = {
        let on_shift_change = props.on_shift_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(shift) = select.value().parse::<Shift>() {
                on_shift_change.emit(shift);
            }
        })
    };

    let on_month = {
        let on_month_change = props.on_month_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(month) = select.value().parse::<u32>() {
                on_month_change.emit(month);
            }
        })
    };

    let on_year = {
        let on_year_change = props.on_year_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(year) = select.value().parse::<i32>() {
                on_year_change.emit(year);
            }
        })
    };

    html! {
        <div class="filter-row">
            <select class="filter-select" onchange={on_shift}>
                {for Shift::ALL.iter().map(|s| html! {
                    <option value={s.as_str()} selected={*s == props.shift}>{s.as_str()}</option>
                })}
            </select>

            <select class="filter-select" onchange={on_month}>
                {for MONTH_NAMES.iter().enumerate().map(|(i, name)| {
                    let value = (i + 1) as u32;
                    html! {
                        <option value={value.to_string()} selected={value == props.month}>{*name}</option>
                    }
                })}
            </select>

            <select class="filter-select" onchange={on_year}>
                {for date_utils::year_options().into_iter().map(|year| html! {
                    <option value={year.to_string()} selected={year == props.year}>{year}</option>
                })}
            </select>
        </div>
    }
}
