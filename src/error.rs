use crate::usecase::ports::http::TransportError;
use crate::usecase::ports::session::SessionStoreError;

/// Error surfaced to screens. Every variant maps to exactly one toast message;
/// the HTTP status categories mirror what the backend returns.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdminError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("session expired or missing")]
    Unauthorized,

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    #[error("network error: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("not a number: {}", .0.join(", "))]
    InvalidNumber(Vec<&'static str>),

    #[error("invalid file: {0}")]
    InvalidFile(String),

    #[error("local storage error: {0}")]
    Storage(String),

    #[error("background task failed: {0}")]
    Task(String),
}

pub type AdminResult<T> = Result<T, AdminError>;

impl AdminError {
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message.unwrap_or_default();
        match status {
            400 => AdminError::BadRequest(message),
            401 => AdminError::Unauthorized,
            403 => AdminError::Forbidden(message),
            404 => AdminError::NotFound(message),
            500..=599 => AdminError::Server { status, message },
            _ => AdminError::UnexpectedStatus { status, message },
        }
    }

    pub fn requires_login(&self) -> bool {
        matches!(self, AdminError::Unauthorized)
    }

    pub fn toast_message(&self) -> String {
        match self {
            AdminError::BadRequest(_) => "잘못된 요청입니다.".to_string(),
            AdminError::Unauthorized => "세션이 만료되었습니다. 다시 로그인해주세요.".to_string(),
            AdminError::Forbidden(_) => "권한이 없습니다.".to_string(),
            AdminError::NotFound(_) => "요청한 정보를 찾을 수 없습니다.".to_string(),
            AdminError::Server { .. } => {
                "서버 오류가 발생했습니다. 잠시 후 다시 시도해주세요.".to_string()
            }
            AdminError::MissingFields(fields) => {
                format!("필수 항목을 입력해주세요: {}", fields.join(", "))
            }
            AdminError::InvalidNumber(fields) => {
                format!("숫자로 입력해주세요: {}", fields.join(", "))
            }
            AdminError::InvalidFile(reason) => format!("업로드할 수 없는 파일입니다: {reason}"),
            AdminError::UnexpectedStatus { .. }
            | AdminError::Transport(_)
            | AdminError::Decode(_)
            | AdminError::Storage(_)
            | AdminError::Task(_) => "요청 처리 중 오류가 발생했습니다.".to_string(),
        }
    }
}

impl From<TransportError> for AdminError {
    fn from(err: TransportError) -> Self {
        AdminError::Transport(err.to_string())
    }
}

impl From<SessionStoreError> for AdminError {
    fn from(err: SessionStoreError) -> Self {
        AdminError::Storage(err.to_string())
    }
}
