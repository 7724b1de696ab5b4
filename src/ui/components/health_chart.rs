use dioxus::prelude::*;

use crate::domain::entities::health::{HealthHistory, HealthMetric};

fn bar_color(value: f64) -> &'static str {
    if value >= 90.0 {
        "#d92d20"
    } else if value >= 70.0 {
        "#f79009"
    } else {
        "#4c6ef5"
    }
}

#[component]
pub fn HealthChart(history: HealthHistory, metric: HealthMetric) -> Element {
    let bars: Vec<(usize, String)> = history
        .series(metric)
        .into_iter()
        .enumerate()
        .map(|(idx, value)| {
            (
                idx,
                format!(
                    "flex: 1; height: {value:.1}%; background: {}; border-radius: 3px 3px 0 0; min-height: 2px;",
                    bar_color(value)
                ),
            )
        })
        .collect();
    let latest = history
        .latest()
        .map(|sample| format!("{:.1}%", metric.value(sample)))
        .unwrap_or_else(|| "-".to_string());

    rsx! {
        div {
            style: "flex: 1; min-width: 220px; border: 1px solid #e2e2e2; border-radius: 8px; padding: 12px;",
            div {
                style: "display: flex; justify-content: space-between; margin-bottom: 8px;",
                strong { {metric.label()} }
                span { "{latest}" }
            }
            div {
                style: "display: flex; align-items: flex-end; gap: 3px; height: 120px; background: #fafafa;",
                for (idx, style) in bars {
                    div { key: "{idx}", style: "{style}" }
                }
            }
        }
    }
}
