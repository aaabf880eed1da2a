//! Pure Yew view components for the visualizer controls.
//!
//! This module contains stateless components that render based on props;
//! all state lives in the parameter store owned by the app component.

use big_o_visualizer::bound::Verdict;
use big_o_visualizer::{BoundReport, GrowthFn, YScale};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Free-text field for the f(n) expression.
#[derive(Properties, PartialEq)]
pub struct ExpressionInputProps {
    pub value: String,
    pub oninput: Callback<InputEvent>,
}

#[function_component(ExpressionInput)]
pub fn expression_input(props: &ExpressionInputProps) -> Html {
    html! {
        <div class="form-group">
            <label for="f_expr">{ "Enter f(n) expression" }</label>
            <input type="text"
                id="f_expr"
                value={props.value.clone()}
                placeholder="e.g., n, n*n, n*log2(n)"
                oninput={props.oninput.clone()}
            />
        </div>
    }
}

/// Dropdown choosing the reference growth function g(n).
#[derive(Properties, PartialEq)]
pub struct GrowthSelectProps {
    pub value: GrowthFn,
    pub onchange: Callback<Event>,
}

#[function_component(GrowthSelect)]
pub fn growth_select(props: &GrowthSelectProps) -> Html {
    html! {
        <div class="form-group">
            <label for="g_type">{ "Select g(n) type" }</label>
            <select id="g_type" onchange={props.onchange.clone()}>
                { for GrowthFn::ALL.iter().map(|g| html! {
                    <option value={g.key()} selected={*g == props.value}>{ g.label() }</option>
                }) }
            </select>
        </div>
    }
}

/// Range slider with its current value printed underneath.
#[derive(Properties, PartialEq)]
pub struct ParamSliderProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub min: AttrValue,
    pub max: AttrValue,
    pub step: AttrValue,
    pub value: AttrValue,
    /// e.g. "c = 2.5"
    pub caption: AttrValue,
    pub oninput: Callback<InputEvent>,
}

#[function_component(ParamSlider)]
pub fn param_slider(props: &ParamSliderProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <div class="slider-with-value">
                <input type="range"
                    id={props.id.clone()}
                    min={props.min.clone()}
                    max={props.max.clone()}
                    step={props.step.clone()}
                    value={props.value.clone()}
                    oninput={props.oninput.clone()}
                />
                <span class="slider-value">{ props.caption.clone() }</span>
            </div>
        </div>
    }
}

/// Checkbox switching the chart's y-axis between linear and log scale.
#[derive(Properties, PartialEq)]
pub struct ScaleToggleProps {
    pub value: YScale,
    pub onchange: Callback<YScale>,
}

#[function_component(ScaleToggle)]
pub fn scale_toggle(props: &ScaleToggleProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            onchange.emit(if input.checked() {
                YScale::Logarithmic
            } else {
                YScale::Linear
            });
        })
    };

    html! {
        <label class="scale-toggle">
            <input type="checkbox"
                checked={props.value == YScale::Logarithmic}
                {onchange}
            />
            { " Logarithmic y-axis" }
        </label>
    }
}

/// One-line verdict on whether c·g(n) bounds f(n) over the plotted range.
#[derive(Properties, PartialEq)]
pub struct BoundSummaryProps {
    pub report: BoundReport,
}

#[function_component(BoundSummary)]
pub fn bound_summary(props: &BoundSummaryProps) -> Html {
    let class = match props.report.verdict() {
        Verdict::Holds => "bound-status holds",
        Verdict::Violated => "bound-status violated",
        Verdict::Inconclusive => "bound-status neutral",
    };
    html! {
        <div {class}>{ props.report.to_string() }</div>
    }
}
