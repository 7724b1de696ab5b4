use crate::error::{AdminError, AdminResult};
use crate::ui::state::navigation::{Screen, Section};
use crate::ui::state::toast::ToastLevel;

/// What a screen does after a mutation returns: toast, and maybe navigate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success {
        message: String,
        next: Option<Screen>,
    },
    Failure {
        message: String,
        relogin: bool,
    },
}

impl Outcome {
    fn from_result(
        result: AdminResult<Option<String>>,
        default_message: String,
        next: Option<Screen>,
    ) -> Self {
        match result {
            Ok(server_message) => Outcome::Success {
                message: server_message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or(default_message),
                next,
            },
            Err(err) => {
                tracing::warn!(error = %err, "mutation failed");
                Outcome::Failure {
                    message: err.toast_message(),
                    relogin: err.requires_login(),
                }
            }
        }
    }

    /// For errors raised outside the service call itself.
    pub fn failed(err: AdminError) -> Self {
        Outcome::from_result(Err(err), String::new(), None)
    }

    pub fn toast_level(&self) -> ToastLevel {
        match self {
            Outcome::Success { .. } => ToastLevel::Success,
            Outcome::Failure { .. } => ToastLevel::Error,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Success { message, .. } | Outcome::Failure { message, .. } => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

pub fn created(result: AdminResult<Option<String>>, section: Section) -> Outcome {
    Outcome::from_result(
        result,
        format!("{} 등록이 완료되었습니다.", section.label()),
        Some(Screen::List(section)),
    )
}

/// Updates stay on the detail screen; the caller refetches.
pub fn updated(result: AdminResult<Option<String>>, section: Section) -> Outcome {
    Outcome::from_result(
        result,
        format!("{} 정보가 수정되었습니다.", section.label()),
        None,
    )
}

pub fn deleted(result: AdminResult<Option<String>>, section: Section) -> Outcome {
    Outcome::from_result(
        result,
        format!("{} 삭제가 완료되었습니다.", section.label()),
        Some(Screen::List(section)),
    )
}
