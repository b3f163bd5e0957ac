//! Authentication session: the API token and the signed-in user, kept on
//! disk between runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::ApiClient;
use crate::error::{GoBarberError, GoBarberResult};
use crate::user::{SignInCredentials, User};

const SESSION_FILE: &str = "session.json";

/// Response of `POST /sessions`, stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// Location of the persisted session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionStore { path: path.into() }
    }

    /// ~/.local/share/gobarber/session.json (platform data dir)
    pub fn default_location() -> GoBarberResult<Self> {
        let dir = dirs::data_dir()
            .ok_or_else(|| GoBarberError::Config("Could not determine data directory".into()))?
            .join("gobarber");

        Ok(Self::new(dir.join(SESSION_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> GoBarberResult<Option<AuthSession>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    pub fn save(&self, session: &AuthSession) -> GoBarberResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(session)?;
        let temp = self.path.with_extension("json.tmp");

        std::fs::write(&temp, contents)?;

        // Owner-only, the file holds the API token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&temp, std::fs::Permissions::from_mode(0o600))?;
        }

        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }

    pub fn clear(&self) -> GoBarberResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// The signed-in state of the client.
pub struct Auth {
    store: SessionStore,
    session: Option<AuthSession>,
}

impl Auth {
    /// Restore the session saved by a previous sign-in, if any.
    pub fn load(store: SessionStore) -> GoBarberResult<Self> {
        let session = store.load()?;
        Ok(Auth { store, session })
    }

    pub fn session(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn require_user(&self) -> GoBarberResult<&User> {
        self.user().ok_or(GoBarberError::NotSignedIn)
    }

    /// Authenticate, persist the session and authorize `api` with the new token.
    pub async fn sign_in(
        &mut self,
        api: &mut ApiClient,
        credentials: &SignInCredentials,
    ) -> GoBarberResult<&User> {
        let session = api.create_session(credentials).await?;
        self.store.save(&session)?;
        api.set_token(Some(session.token.clone()));

        debug!(user = %session.user.id, "Signed in");
        Ok(&self.session.insert(session).user)
    }

    pub fn sign_out(&mut self, api: &mut ApiClient) -> GoBarberResult<()> {
        self.store.clear()?;
        self.session = None;
        api.set_token(None);
        Ok(())
    }
}
