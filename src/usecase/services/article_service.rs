use std::sync::Arc;

use crate::domain::entities::article::{Article, ArticleKind, ArticlePayload};
use crate::domain::entities::page::{Page, PageRequest};
use crate::error::{AdminError, AdminResult};
use crate::infra::markdown::bridge::MarkdownBridge;
use crate::usecase::services::api_client::ApiClient;
use crate::usecase::services::resource_service::ResourceService;

/// An article as the editor sees it: stored HTML already turned into Markdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDraft {
    pub title: String,
    pub markdown: String,
    pub campaign_id: String,
}

impl ArticleDraft {
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            markdown: String::new(),
            campaign_id: String::new(),
        }
    }
}

#[derive(Clone)]
pub struct ArticleService {
    kind: ArticleKind,
    resources: ResourceService<Article>,
    bridge: MarkdownBridge,
}

impl ArticleService {
    pub fn new(api: Arc<ApiClient>, kind: ArticleKind, bridge: MarkdownBridge) -> Self {
        Self {
            kind,
            resources: ResourceService::new(api, kind.endpoint()),
            bridge,
        }
    }

    pub fn list(&self, request: &PageRequest) -> AdminResult<Page<Article>> {
        self.resources.list(request)
    }

    pub fn load(&self, id: i64) -> AdminResult<ArticleDraft> {
        let article = self.resources.get(id)?;
        let markdown = self
            .bridge
            .html_to_markdown(&article.content)
            .map_err(|err| AdminError::Decode(format!("{err:#}")))?;
        Ok(ArticleDraft {
            title: article.title,
            markdown,
            campaign_id: article
                .campaign_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        })
    }

    pub fn to_payload(&self, draft: &ArticleDraft) -> ArticlePayload {
        let content = if draft.markdown.trim().is_empty() {
            String::new()
        } else {
            self.bridge.markdown_to_html(&draft.markdown)
        };
        let requires_campaign = self.kind.has_campaign();
        ArticlePayload {
            title: draft.title.trim().to_string(),
            content,
            campaign_id: if requires_campaign {
                draft.campaign_id.trim().parse().ok()
            } else {
                None
            },
            campaign_id_input: draft.campaign_id.clone(),
            requires_campaign,
        }
    }

    pub fn create(&self, draft: &ArticleDraft) -> AdminResult<Option<String>> {
        self.resources.create(&self.to_payload(draft))
    }

    pub fn update(&self, id: i64, draft: &ArticleDraft) -> AdminResult<Option<String>> {
        self.resources.update(id, &self.to_payload(draft))
    }

    pub fn delete(&self, id: i64) -> AdminResult<Option<String>> {
        self.resources.delete(id)
    }
}
