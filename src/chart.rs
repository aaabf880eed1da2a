//! JavaScript interop for Chart.js visualization.
//! Provides Rust bindings to chart helper functions defined in chart_helpers.js.

use big_o_visualizer::ChartPayload;
use log::warn;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/chart_helpers.js")]
extern "C" {
    #[wasm_bindgen(js_name = initComplexityChart)]
    pub fn init_complexity_chart(canvas_id: &str);

    #[wasm_bindgen(js_name = updateComplexityChart)]
    fn update_complexity_chart(payload: JsValue);

    #[wasm_bindgen(js_name = destroyComplexityChart)]
    pub fn destroy_complexity_chart();
}

/// Redraw the chart from a freshly derived payload.
///
/// Gaps are sent as `null` (not `undefined`) so Chart.js breaks the line there.
pub fn render_chart(payload: &ChartPayload) {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    match payload.serialize(&serializer) {
        Ok(value) => update_complexity_chart(value),
        Err(e) => warn!("Chart payload could not be converted: {}", e),
    }
}
