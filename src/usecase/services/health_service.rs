use std::sync::Arc;

use crate::domain::entities::health::HealthSample;
use crate::error::AdminResult;
use crate::usecase::services::api_client::ApiClient;

pub const HEALTH_PATH: &str = "/api/admin/health";

pub struct HealthService {
    api: Arc<ApiClient>,
}

impl HealthService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub fn sample(&self) -> AdminResult<HealthSample> {
        self.api.fetch(HEALTH_PATH, Vec::new())
    }
}
