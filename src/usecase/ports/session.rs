#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStoreError {
    Message(String),
}

impl std::fmt::Display for SessionStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStoreError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for SessionStoreError {}

/// Local persistent storage for the bearer token.
pub trait SessionStore: Send + Sync {
    fn init(&self) -> Result<(), SessionStoreError>;
    fn load_token(&self) -> Result<Option<String>, SessionStoreError>;
    fn save_token(&self, token: &str) -> Result<(), SessionStoreError>;
    fn clear_token(&self) -> Result<(), SessionStoreError>;
}
