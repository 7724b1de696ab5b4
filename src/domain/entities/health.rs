use std::collections::VecDeque;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSample {
    #[serde(default)]
    pub cpu_usage: f64,
    #[serde(default)]
    pub memory_usage: f64,
    #[serde(default)]
    pub disk_usage: f64,
    pub active_connections: Option<u32>,
    pub collected_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthMetric {
    Cpu,
    Memory,
    Disk,
}

impl HealthMetric {
    pub const ALL: [HealthMetric; 3] = [HealthMetric::Cpu, HealthMetric::Memory, HealthMetric::Disk];

    pub fn label(self) -> &'static str {
        match self {
            HealthMetric::Cpu => "CPU",
            HealthMetric::Memory => "메모리",
            HealthMetric::Disk => "디스크",
        }
    }

    /// Percentage clamped into `0..=100` for drawing.
    pub fn value(self, sample: &HealthSample) -> f64 {
        let raw = match self {
            HealthMetric::Cpu => sample.cpu_usage,
            HealthMetric::Memory => sample.memory_usage,
            HealthMetric::Disk => sample.disk_usage,
        };
        if raw.is_nan() {
            0.0
        } else {
            raw.clamp(0.0, 100.0)
        }
    }
}

pub const HEALTH_HISTORY_LEN: usize = 24;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthHistory {
    samples: VecDeque<HealthSample>,
}

impl HealthHistory {
    pub fn push(&mut self, sample: HealthSample) {
        if self.samples.len() == HEALTH_HISTORY_LEN {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn latest(&self) -> Option<&HealthSample> {
        self.samples.back()
    }

    pub fn series(&self, metric: HealthMetric) -> Vec<f64> {
        self.samples
            .iter()
            .map(|sample| metric.value(sample))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
