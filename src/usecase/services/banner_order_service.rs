use std::sync::Arc;

use crate::domain::entities::banner::{
    display_order_payload, move_item, renumber, Banner, DisplayOrderEntry,
};
use crate::domain::entities::resource::BANNERS;
use crate::error::AdminResult;
use crate::usecase::ports::http::Method;
use crate::usecase::services::api_client::ApiClient;

/// A move already applied to the local list and waiting to be saved.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedOrder {
    previous: Vec<Banner>,
    payload: Vec<DisplayOrderEntry>,
}

impl StagedOrder {
    pub fn payload(&self) -> &[DisplayOrderEntry] {
        &self.payload
    }

    /// The list as it was before the move.
    pub fn rollback(self) -> Vec<Banner> {
        self.previous
    }
}

/// Moves the banner at `from` to `to` and renumbers from 1, in place. Returns
/// `None` when nothing moved.
pub fn stage(banners: &mut Vec<Banner>, from: usize, to: usize) -> Option<StagedOrder> {
    if from == to {
        return None;
    }
    let previous = banners.clone();
    if !move_item(banners, from, to) {
        return None;
    }
    renumber(banners);
    Some(StagedOrder {
        previous,
        payload: display_order_payload(banners),
    })
}

pub struct BannerOrderService {
    api: Arc<ApiClient>,
}

impl BannerOrderService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub fn path() -> String {
        format!("{}/display-order", BANNERS.path)
    }

    /// Saves the whole order in one PATCH.
    pub fn commit(&self, payload: &[DisplayOrderEntry]) -> AdminResult<Option<String>> {
        let message = self
            .api
            .command(Method::Patch, &Self::path(), Some(payload))?;
        tracing::info!(count = payload.len(), "saved banner order");
        Ok(message)
    }
}
