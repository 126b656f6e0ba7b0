//! Login state persisted between invocations.
//!
//! The store is created once in `run()` and handed to whoever needs the
//! token; nothing reads the file behind its back.

use crate::errors::AppResult;
use crate::models::user::AuthUser;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    current: RefCell<Option<Credentials>>,
}

impl CredentialStore {
    /// Open the store at `path`. A missing or unreadable file means logged out.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = Self::read(&path);
        Self {
            path,
            current: RefCell::new(current),
        }
    }

    /// Store that never touches the filesystem.
    pub fn in_memory(creds: Option<Credentials>) -> Self {
        Self {
            path: PathBuf::new(),
            current: RefCell::new(creds),
        }
    }

    fn read(path: &Path) -> Option<Credentials> {
        let content = fs::read_to_string(path).ok()?;
        match serde_yaml::from_str(&content) {
            Ok(c) => Some(c),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable credentials file");
                None
            }
        }
    }

    pub fn get(&self) -> Option<Credentials> {
        self.current.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|c| c.access_token.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn save(&self, creds: Credentials) -> AppResult<()> {
        if !self.path.as_os_str().is_empty() {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_yaml::to_string(&creds)?)?;
        }
        *self.current.borrow_mut() = Some(creds);
        Ok(())
    }

    /// Forget the token, user and refresh token.
    pub fn clear(&self) -> AppResult<()> {
        *self.current.borrow_mut() = None;
        if !self.path.as_os_str().is_empty() && self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
