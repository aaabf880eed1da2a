//! Payload handed to the Chart.js helper: labels, two datasets, y-axis scale.
//!
//! Every value that cannot be drawn (absent before n0, NaN, or infinite) is
//! `None`, which serializes to `null` and is rendered by Chart.js as a gap.

use crate::config::{F_COLOR, G_COLOR, G_DASH};
use crate::params::ParameterSet;
use crate::series::SeriesSet;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YScale {
    #[default]
    Linear,
    Logarithmic,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub border_color: &'static str,
    pub border_dash: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub labels: Vec<u32>,
    pub datasets: Vec<Dataset>,
    pub y_scale: YScale,
}

/// Legend label of the c·g(n) line, annotated with n0 once it exceeds 1.
pub fn scaled_g_label(n0: u32) -> String {
    if n0 > 1 {
        format!("c·g(n) (from n ≥ {})", n0)
    } else {
        "c·g(n)".to_string()
    }
}

fn drawable(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

impl ChartPayload {
    pub fn build(params: &ParameterSet, series: &SeriesSet, y_scale: YScale) -> Self {
        let f = Dataset {
            label: "f(n)".to_string(),
            data: series.f.iter().copied().map(drawable).collect(),
            border_color: F_COLOR,
            border_dash: Vec::new(),
        };
        let g = Dataset {
            label: scaled_g_label(params.n0),
            data: series
                .scaled_g
                .iter()
                .copied()
                .map(|v| v.and_then(drawable))
                .collect(),
            border_color: G_COLOR,
            border_dash: G_DASH.to_vec(),
        };

        Self {
            labels: series.labels.clone(),
            datasets: vec![f, g],
            y_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::GrowthFn;
    use serde_json::json;

    #[test]
    fn label_mentions_threshold_only_past_one() {
        assert_eq!(scaled_g_label(1), "c·g(n)");
        assert_eq!(scaled_g_label(5), "c·g(n) (from n ≥ 5)");
    }

    #[test]
    fn payload_serializes_gaps_as_null() {
        let params = ParameterSet {
            c: 1.0,
            n0: 2,
            max_n: 10,
            f_expr: "1/(n-3)".to_string(),
            growth: GrowthFn::Linear,
        };
        let series = SeriesSet::derive(&params);
        let payload = ChartPayload::build(&params, &series, YScale::Logarithmic);
        let value = serde_json::to_value(&payload).expect("serializes");

        assert_eq!(value["labels"].as_array().map(|a| a.len()), Some(10));
        assert_eq!(value["yScale"], json!("logarithmic"));
        assert_eq!(value["datasets"][0]["label"], json!("f(n)"));
        assert_eq!(value["datasets"][0]["data"][2], json!(null));
        assert_eq!(value["datasets"][0]["data"][3], json!(1.0));
        assert_eq!(value["datasets"][1]["label"], json!("c·g(n) (from n ≥ 2)"));
        assert_eq!(value["datasets"][1]["data"][0], json!(null));
        assert_eq!(value["datasets"][1]["data"][1], json!(2.0));
        assert_eq!(value["datasets"][1]["borderDash"], json!([5, 5]));
        assert_eq!(value["datasets"][1]["borderColor"], json!("#ff7f0e"));
    }

    #[test]
    fn payload_keeps_series_order() {
        let params = ParameterSet::default();
        let series = SeriesSet::derive(&params);
        let payload = ChartPayload::build(&params, &series, YScale::default());
        assert_eq!(payload.labels, (1..=100).collect::<Vec<u32>>());
        assert_eq!(payload.datasets[0].data[4], Some(5.0));
    }
}
