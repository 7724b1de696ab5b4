use serde::{Deserialize, Serialize};

use crate::domain::entities::resource::{malformed, RequiredFields, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub const ALL: [ApprovalStatus; 3] = [
        ApprovalStatus::Pending,
        ApprovalStatus::Approved,
        ApprovalStatus::Rejected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "승인대기",
            ApprovalStatus::Approved => "승인",
            ApprovalStatus::Rejected => "반려",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "PENDING",
            ApprovalStatus::Approved => "APPROVED",
            ApprovalStatus::Rejected => "REJECTED",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionInfo {
    pub title: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub guide: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: Option<String>,
    pub detail_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRef {
    pub id: i64,
    #[serde(default)]
    pub company_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub campaign_type: Option<String>,
    pub category: Option<String>,
    pub approval_status: ApprovalStatus,
    pub recruitment_start_date: Option<String>,
    pub recruitment_end_date: Option<String>,
    pub max_applicants: Option<u32>,
    pub current_applicants: Option<u32>,
    pub mission_info: Option<MissionInfo>,
    pub location: Option<Location>,
    pub company: Option<CompanyRef>,
    pub created_at: Option<String>,
}

impl Resource for Campaign {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Editable copy of a campaign. Numeric inputs stay as text while editing and
/// are parsed when the form is serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(into = "CampaignPayload")]
pub struct CampaignForm {
    pub title: String,
    pub thumbnail_url: String,
    pub campaign_type: String,
    pub category: String,
    pub recruitment_start_date: String,
    pub recruitment_end_date: String,
    pub max_applicants: String,
    pub company_id: String,
    pub mission_title: String,
    pub mission_keywords: String,
    pub mission_guide: String,
    pub address: String,
    pub detail_address: String,
    pub latitude: String,
    pub longitude: String,
}

impl CampaignForm {
    pub fn from_campaign(campaign: &Campaign) -> Self {
        let mission = campaign.mission_info.clone().unwrap_or_default();
        let location = campaign.location.clone().unwrap_or_default();
        Self {
            title: campaign.title.clone(),
            thumbnail_url: campaign.thumbnail_url.clone().unwrap_or_default(),
            campaign_type: campaign.campaign_type.clone().unwrap_or_default(),
            category: campaign.category.clone().unwrap_or_default(),
            recruitment_start_date: campaign.recruitment_start_date.clone().unwrap_or_default(),
            recruitment_end_date: campaign.recruitment_end_date.clone().unwrap_or_default(),
            max_applicants: campaign
                .max_applicants
                .map(|value| value.to_string())
                .unwrap_or_default(),
            company_id: campaign
                .company
                .as_ref()
                .map(|company| company.id.to_string())
                .unwrap_or_default(),
            mission_title: mission.title.unwrap_or_default(),
            mission_keywords: mission.keywords.join(", "),
            mission_guide: mission.guide.unwrap_or_default(),
            address: location.address.unwrap_or_default(),
            detail_address: location.detail_address.unwrap_or_default(),
            latitude: location
                .latitude
                .map(|value| value.to_string())
                .unwrap_or_default(),
            longitude: location
                .longitude
                .map(|value| value.to_string())
                .unwrap_or_default(),
        }
    }
}

impl RequiredFields for CampaignForm {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("캠페인명", &self.title),
            ("캠페인 유형", &self.campaign_type),
            ("모집 시작일", &self.recruitment_start_date),
            ("모집 종료일", &self.recruitment_end_date),
            ("업체 ID", &self.company_id),
        ]
    }

    fn malformed_numbers(&self) -> Vec<&'static str> {
        [
            malformed::<u32>("모집 인원", &self.max_applicants),
            malformed::<i64>("업체 ID", &self.company_id),
            malformed::<f64>("위도", &self.latitude),
            malformed::<f64>("경도", &self.longitude),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPayload {
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub campaign_type: String,
    pub category: Option<String>,
    pub recruitment_start_date: String,
    pub recruitment_end_date: String,
    pub max_applicants: Option<u32>,
    pub company_id: Option<i64>,
    pub mission_info: MissionInfo,
    pub location: Location,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl From<CampaignForm> for CampaignPayload {
    fn from(form: CampaignForm) -> Self {
        Self {
            title: form.title.trim().to_string(),
            thumbnail_url: non_blank(&form.thumbnail_url),
            campaign_type: form.campaign_type.trim().to_string(),
            category: non_blank(&form.category),
            recruitment_start_date: form.recruitment_start_date.trim().to_string(),
            recruitment_end_date: form.recruitment_end_date.trim().to_string(),
            max_applicants: form.max_applicants.trim().parse().ok(),
            company_id: form.company_id.trim().parse().ok(),
            mission_info: MissionInfo {
                title: non_blank(&form.mission_title),
                keywords: form
                    .mission_keywords
                    .split(',')
                    .filter_map(non_blank)
                    .collect(),
                guide: non_blank(&form.mission_guide),
            },
            location: Location {
                address: non_blank(&form.address),
                detail_address: non_blank(&form.detail_address),
                latitude: form.latitude.trim().parse().ok(),
                longitude: form.longitude.trim().parse().ok(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalPatch {
    pub approval_status: ApprovalStatus,
}

impl RequiredFields for ApprovalPatch {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }
}
