//! Main module for the Big-O visualizer using Yew.
//! Wires the parameter store, series derivation and the Chart.js canvas.

use big_o_visualizer::config::*;
use big_o_visualizer::{BoundReport, ChartPayload, SeriesSet, YScale};
use log::info;
use yew::prelude::*;

mod chart;
mod components;
mod hooks;

use chart::{destroy_complexity_chart, init_complexity_chart, render_chart};
use components::{BoundSummary, ExpressionInput, GrowthSelect, ParamSlider, ScaleToggle};
use hooks::use_parameter_store;

/// Primary application component: controls on one side, chart on the other.
#[function_component(App)]
fn app() -> Html {
    let store = use_parameter_store();
    let params = store.params.clone();
    let y_scale = use_state(YScale::default);

    // Both series are derived synchronously on every parameter change.
    let series = use_memo(params.clone(), SeriesSet::derive);

    // Create the chart once the canvas exists; tear it down on unmount.
    use_effect_with((), move |_| {
        info!("Big-O visualizer mounted");
        init_complexity_chart(CHART_CANVAS_ID);
        move || destroy_complexity_chart()
    });

    {
        let series = series.clone();
        use_effect_with((params.clone(), *y_scale), move |(params, scale)| {
            render_chart(&ChartPayload::build(params, &series, *scale));
        });
    }

    let on_scale_change = {
        let y_scale = y_scale.clone();
        Callback::from(move |scale: YScale| y_scale.set(scale))
    };

    let report = BoundReport::check(&series, params.n0);

    html! {
        <div class="container">
            <div class="controls">
                <h2>{ "Configure f(n), c and n₀ for g(n)" }</h2>

                <ExpressionInput
                    value={params.f_expr.clone()}
                    oninput={store.on_expr_input.clone()}
                />

                <GrowthSelect
                    value={params.growth}
                    onchange={store.on_growth_change.clone()}
                />

                <ParamSlider
                    id="c"
                    label="c (constant multiplier)"
                    min={MIN_C.to_string()}
                    max={MAX_C.to_string()}
                    step={C_STEP.to_string()}
                    value={params.c.to_string()}
                    caption={format!("c = {}", params.c)}
                    oninput={store.on_c_input.clone()}
                />

                <ParamSlider
                    id="n0"
                    label="n₀ (threshold)"
                    min={MIN_N0.to_string()}
                    max={MAX_N0.to_string()}
                    step="1"
                    value={params.n0.to_string()}
                    caption={format!("n₀ = {}", params.n0)}
                    oninput={store.on_n0_input.clone()}
                />

                <ParamSlider
                    id="max_n"
                    label="Max input size (n)"
                    min={MIN_MAX_N.to_string()}
                    max={MAX_MAX_N.to_string()}
                    step={MAX_N_STEP.to_string()}
                    value={params.max_n.to_string()}
                    caption={format!("Max n = {}", params.max_n)}
                    oninput={store.on_max_n_input.clone()}
                />

                <a class="notes-link" href={NOTES_URL} target="_blank" rel="noopener noreferrer">
                    { "📘 View Notes On Time Complexity And Asymptotic Notations" }
                </a>
            </div>

            <div class="chart-section">
                <canvas id={CHART_CANVAS_ID}></canvas>
                <div class="chart-footer">
                    <ScaleToggle value={*y_scale} onchange={on_scale_change} />
                    <BoundSummary {report} />
                </div>
            </div>
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the app.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
