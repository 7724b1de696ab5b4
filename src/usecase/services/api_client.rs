use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{AdminError, AdminResult};
use crate::usecase::ports::http::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::usecase::ports::session::SessionStore;

/// Uniform `{ data, message }` envelope returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    fn empty() -> Self {
        Self {
            data: None,
            message: None,
        }
    }
}

pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        transport: Arc<dyn HttpTransport>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            session,
        }
    }

    pub fn transport(&self) -> Arc<dyn HttpTransport> {
        self.transport.clone()
    }

    pub fn session(&self) -> Arc<dyn SessionStore> {
        self.session.clone()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET that requires a `data` payload.
    pub fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> AdminResult<T> {
        let envelope = self.send::<(), T>(Method::Get, path, query, None)?;
        envelope
            .data
            .ok_or_else(|| AdminError::Decode(format!("{path}: response has no data")))
    }

    /// Mutation whose response payload is not needed; returns the server message.
    pub fn command<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> AdminResult<Option<String>> {
        let envelope = self.send::<B, serde_json::Value>(method, path, Vec::new(), body)?;
        Ok(envelope.message)
    }

    pub fn send<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<&B>,
    ) -> AdminResult<Envelope<T>> {
        let mut request = HttpRequest::new(method, self.url(path))
            .with_query(query)
            .with_header("Accept", "application/json");
        if let Some(token) = self.session.load_token()? {
            request = request.with_header("Authorization", &format!("Bearer {token}"));
        }
        if let Some(body) = body {
            let bytes = serde_json::to_vec(body)
                .map_err(|err| AdminError::Decode(format!("failed to encode body: {err}")))?;
            request = request.with_body("application/json", bytes);
        }

        let response = self.transport.send(request).map_err(|err| {
            tracing::warn!(method = method.as_str(), path, error = %err, "request failed");
            AdminError::from(err)
        })?;
        tracing::debug!(
            method = method.as_str(),
            path,
            status = response.status,
            "api response"
        );

        if !response.is_success() {
            return Err(self.reject(method, path, &response));
        }

        decode_envelope(&response.body)
    }

    fn reject(&self, method: Method, path: &str, response: &HttpResponse) -> AdminError {
        let message = decode_envelope::<serde_json::Value>(&response.body)
            .ok()
            .and_then(|envelope| envelope.message);
        let err = AdminError::from_status(response.status, message);
        if err.requires_login() {
            if let Err(clear_err) = self.session.clear_token() {
                tracing::error!(error = %clear_err, "failed to clear expired session");
            }
        }
        tracing::warn!(
            method = method.as_str(),
            path,
            status = response.status,
            error = %err,
            "api rejected request"
        );
        err
    }
}

fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> AdminResult<Envelope<T>> {
    if body.iter().all(|byte| byte.is_ascii_whitespace()) {
        return Ok(Envelope::empty());
    }
    serde_json::from_slice(body).map_err(|err| AdminError::Decode(err.to_string()))
}
