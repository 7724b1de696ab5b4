use serde::{Deserialize, Serialize};

use crate::domain::entities::resource::{RequiredFields, Resource};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub banner_url: String,
    pub redirect_url: Option<String>,
    pub description: Option<String>,
    pub position: Option<String>,
    #[serde(default)]
    pub display_order: u32,
}

impl Resource for Banner {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerForm {
    pub title: String,
    pub banner_url: String,
    pub redirect_url: String,
    pub description: String,
    pub position: String,
}

impl BannerForm {
    pub fn from_banner(banner: &Banner) -> Self {
        Self {
            title: banner.title.clone(),
            banner_url: banner.banner_url.clone(),
            redirect_url: banner.redirect_url.clone().unwrap_or_default(),
            description: banner.description.clone().unwrap_or_default(),
            position: banner.position.clone().unwrap_or_default(),
        }
    }
}

impl RequiredFields for BannerForm {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("배너 제목", &self.title), ("배너 이미지", &self.banner_url)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOrderEntry {
    pub id: i64,
    pub display_order: u32,
}

/// Moves the item at `from` so it ends up at index `to`. Out of range indices
/// leave the list untouched and return `false`.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    if from == to {
        return true;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

pub fn renumber(banners: &mut [Banner]) {
    for (idx, banner) in banners.iter_mut().enumerate() {
        banner.display_order = idx as u32 + 1;
    }
}

pub fn display_order_payload(banners: &[Banner]) -> Vec<DisplayOrderEntry> {
    banners
        .iter()
        .map(|banner| DisplayOrderEntry {
            id: banner.id,
            display_order: banner.display_order,
        })
        .collect()
}

pub fn sort_by_display_order(banners: &mut [Banner]) {
    banners.sort_by_key(|banner| banner.display_order);
}
