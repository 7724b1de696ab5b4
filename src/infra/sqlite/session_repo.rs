use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use crate::infra::sqlite::schema::{init_db, open_connection};
use crate::usecase::ports::session::{SessionStore, SessionStoreError};

pub struct SqliteSessionStore {
    pub db_path: PathBuf,
}

fn load_token(db_path: &Path) -> Result<Option<String>> {
    let conn = open_connection(db_path)?;
    conn.query_row("SELECT token FROM session WHERE id = 1", [], |row| {
        row.get::<_, String>(0)
    })
    .optional()
    .context("failed to load session token")
}

fn save_token(db_path: &Path, token: &str) -> Result<()> {
    let conn = open_connection(db_path)?;
    let saved_at = chrono::Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO session (id, token, saved_at) VALUES (1, ?1, ?2)
         ON CONFLICT(id) DO UPDATE SET token = excluded.token, saved_at = excluded.saved_at",
        params![token, saved_at],
    )
    .context("failed to save session token")?;
    Ok(())
}

fn clear_token(db_path: &Path) -> Result<()> {
    let conn = open_connection(db_path)?;
    conn.execute("DELETE FROM session", [])
        .context("failed to clear session token")?;
    Ok(())
}

impl SessionStore for SqliteSessionStore {
    fn init(&self) -> Result<(), SessionStoreError> {
        init_db(&self.db_path).map_err(|err| SessionStoreError::Message(format!("{err:#}")))
    }

    fn load_token(&self) -> Result<Option<String>, SessionStoreError> {
        load_token(&self.db_path).map_err(|err| SessionStoreError::Message(format!("{err:#}")))
    }

    fn save_token(&self, token: &str) -> Result<(), SessionStoreError> {
        save_token(&self.db_path, token)
            .map_err(|err| SessionStoreError::Message(format!("{err:#}")))
    }

    fn clear_token(&self) -> Result<(), SessionStoreError> {
        clear_token(&self.db_path).map_err(|err| SessionStoreError::Message(format!("{err:#}")))
    }
}
