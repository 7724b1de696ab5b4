use serde::{Deserialize, Serialize};

use crate::domain::entities::resource::{
    malformed, Endpoint, RequiredFields, Resource, MARKDOWNS, NOTICES, POSTS,
};

/// Markdown articles, notices and posts share one HTML document shape and
/// differ only in their collection (posts also point at a campaign).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleKind {
    Markdown,
    Notice,
    Post,
}

impl ArticleKind {
    pub const ALL: [ArticleKind; 3] = [ArticleKind::Markdown, ArticleKind::Notice, ArticleKind::Post];

    pub fn endpoint(self) -> Endpoint {
        match self {
            ArticleKind::Markdown => MARKDOWNS,
            ArticleKind::Notice => NOTICES,
            ArticleKind::Post => POSTS,
        }
    }

    pub fn has_campaign(self) -> bool {
        matches!(self, ArticleKind::Post)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub campaign_id: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Resource for Article {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Payload for create/update. `content` is HTML; the editor's Markdown buffer
/// is converted before the payload is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePayload {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<i64>,
    #[serde(skip)]
    pub campaign_id_input: String,
    #[serde(skip)]
    pub requires_campaign: bool,
}

impl RequiredFields for ArticlePayload {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("제목", self.title.as_str()), ("내용", self.content.as_str())];
        if self.requires_campaign {
            fields.push(("캠페인 ID", self.campaign_id_input.as_str()));
        }
        fields
    }

    fn malformed_numbers(&self) -> Vec<&'static str> {
        if self.requires_campaign {
            malformed::<i64>("캠페인 ID", &self.campaign_id_input)
                .into_iter()
                .collect()
        } else {
            Vec::new()
        }
    }
}
