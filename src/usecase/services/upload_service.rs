use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{AdminError, AdminResult};
use crate::usecase::ports::http::{HttpRequest, Method};
use crate::usecase::services::api_client::ApiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadScope {
    Banner,
    Campaign,
    Markdown,
}

impl UploadScope {
    pub fn as_path_segment(self) -> &'static str {
        match self {
            UploadScope::Banner => "banners",
            UploadScope::Campaign => "campaigns",
            UploadScope::Markdown => "markdowns",
        }
    }

    pub fn presign_path(self) -> String {
        format!("/api/images/{}/presigned-url", self.as_path_segment())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PresignRequest<'a> {
    file_extension: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PresignedUrl {
    presigned_url: String,
}

pub fn file_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

pub fn content_type_for(extension: &str) -> &'static str {
    match extension {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// The object's public address is the write URL without its signature.
pub fn public_url(presigned_url: &str) -> String {
    presigned_url
        .split('?')
        .next()
        .unwrap_or(presigned_url)
        .to_string()
}

pub struct UploadService {
    api: Arc<ApiClient>,
}

impl UploadService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Presign, then PUT the bytes straight to storage. Either step failing
    /// ends the flow; nothing is retried.
    pub fn upload(&self, scope: UploadScope, file_name: &str, bytes: Vec<u8>) -> AdminResult<String> {
        let extension = file_extension(file_name)
            .ok_or_else(|| AdminError::InvalidFile(format!("{file_name}: 확장자가 없습니다")))?;

        let presigned: PresignedUrl = self
            .api
            .send(
                Method::Post,
                &scope.presign_path(),
                Vec::new(),
                Some(&PresignRequest {
                    file_extension: &extension,
                }),
            )?
            .data
            .ok_or_else(|| AdminError::Decode("presigned url response has no data".to_string()))?;

        let size = bytes.len();
        let request = HttpRequest::new(Method::Put, presigned.presigned_url.clone())
            .with_body(content_type_for(&extension), bytes);
        let response = self.api.transport().send(request)?;
        if !response.is_success() {
            tracing::warn!(status = response.status, scope = scope.as_path_segment(), "storage rejected upload");
            return Err(AdminError::UnexpectedStatus {
                status: response.status,
                message: "storage rejected upload".to_string(),
            });
        }

        let url = public_url(&presigned.presigned_url);
        tracing::info!(scope = scope.as_path_segment(), size, url = %url, "uploaded file");
        Ok(url)
    }

    pub fn upload_path(&self, scope: UploadScope, path: &Path) -> AdminResult<String> {
        let bytes = std::fs::read(path)
            .map_err(|err| AdminError::InvalidFile(format!("{}: {err}", path.display())))?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        self.upload(scope, file_name, bytes)
    }
}
