use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{AdminError, AdminResult};
use crate::usecase::ports::http::Method;
use crate::usecase::services::api_client::ApiClient;

pub const LOGIN_PATH: &str = "/api/auth/login";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access_token: String,
}

pub struct AuthService {
    api: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub fn is_logged_in(&self) -> AdminResult<bool> {
        Ok(self.api.session().load_token()?.is_some())
    }

    pub fn login(&self, email: &str, password: &str) -> AdminResult<()> {
        let mut missing = Vec::new();
        if email.trim().is_empty() {
            missing.push("이메일");
        }
        if password.is_empty() {
            missing.push("비밀번호");
        }
        if !missing.is_empty() {
            return Err(AdminError::MissingFields(missing));
        }

        let session = self.api.session();
        // A stale token must not ride along on the login request.
        session.clear_token()?;
        let response: LoginResponse = self
            .api
            .send(
                Method::Post,
                LOGIN_PATH,
                Vec::new(),
                Some(&LoginRequest {
                    email: email.trim(),
                    password,
                }),
            )?
            .data
            .ok_or_else(|| AdminError::Decode("login response has no token".to_string()))?;
        session.save_token(&response.access_token)?;
        tracing::info!("signed in");
        Ok(())
    }

    pub fn logout(&self) -> AdminResult<()> {
        self.api.session().clear_token()?;
        tracing::info!("signed out");
        Ok(())
    }
}
