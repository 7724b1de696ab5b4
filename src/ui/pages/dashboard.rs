use dioxus::prelude::*;

use crate::domain::entities::health::{HealthHistory, HealthMetric};
use crate::platform::desktop::blocking::run_service;
use crate::ui::components::form::InfoRow;
use crate::ui::components::health_chart::HealthChart;
use crate::ui::pages::common::PageHeader;
use crate::ui::state::app_state::{AppState, Services};
use crate::ui::state::format::display_timestamp;

/// Server health, sampled on mount and then on a fixed interval for as long
/// as the dashboard stays mounted.
#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let interval = services.config.health_poll_interval;
    let mut history = use_signal(HealthHistory::default);

    use_future(move || {
        let health = services.health.clone();
        async move {
            loop {
                let health = health.clone();
                match run_service("health-sample", move || health.sample()).await {
                    Ok(sample) => history.write().push(sample),
                    Err(err) => state.report(&err),
                }
                tokio::time::sleep(interval).await;
            }
        }
    });

    let snapshot = history();
    let latest = snapshot.latest().cloned();
    let connections = latest
        .as_ref()
        .and_then(|sample| sample.active_connections)
        .map(|count| count.to_string())
        .unwrap_or_else(|| "-".to_string());
    let collected_at = display_timestamp(
        latest
            .as_ref()
            .and_then(|sample| sample.collected_at.as_deref()),
    );
    let sample_count = snapshot.len();
    let metrics: Vec<(&'static str, HealthMetric)> = HealthMetric::ALL
        .into_iter()
        .map(|metric| (metric.label(), metric))
        .collect();

    rsx! {
        PageHeader { title: "대시보드" }
        div {
            style: "max-width: 480px; margin-bottom: 16px;",
            InfoRow { label: "활성 연결 수", value: connections }
            InfoRow { label: "마지막 수집", value: collected_at }
            InfoRow { label: "보관 샘플", value: sample_count.to_string() }
        }
        div {
            style: "display: flex; gap: 12px; flex-wrap: wrap;",
            for (label, metric) in metrics {
                HealthChart { key: "{label}", history: snapshot.clone(), metric }
            }
        }
    }
}
