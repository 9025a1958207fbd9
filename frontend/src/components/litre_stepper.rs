use shared::{step_litres, LITRE_STEPS};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LitreStepperProps {
    pub value: f64,
    pub on_change: Callback<f64>,
}

/// Quick-add buttons for litres. Each press adds one fixed increment to the
/// current value, rounded to two decimals; Reset snaps back to zero.
#[function_component(LitreStepper)]
pub fn litre_stepper(props: &LitreStepperProps) -> Html {
    let on_reset = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| on_change.emit(0.0))
    };

    html! {
        <div class="litre-stepper">
            {for LITRE_STEPS.iter().map(|step| {
                let on_change = props.on_change.clone();
                let value = props.value;
                let step = *step;
                html! {
                    <button
                        type="button"
                        class="stepper-btn"
                        onclick={Callback::from(move |_| on_change.emit(step_litres(value, step)))}
                    >
                        {format!("+{}", step)}
                    </button>
                }
            })}
            <button type="button" class="stepper-btn stepper-reset" onclick={on_reset}>
                {"Reset"}
            </button>
        </div>
    }
}
