use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use crate::auth::application::domain::{Identity, Session, User, UserId};
use crate::auth::application::ports::outgoing::{
    BlacklistError, HashError, IdentityError, IdentityProvider, NewUser, PasswordHasher,
    TokenBlacklist, UserRepository, UserRepositoryError,
};
use crate::document::application::domain::document::{Document, JsonObject};
use crate::document::application::ports::outgoing::{
    DocumentQuery, DocumentStore, DocumentStoreError,
};
use crate::media::application::domain::{MediaFile, MediaKind};
use crate::media::application::ports::outgoing::{MediaHost, MediaHostError};

// ──────────────────────────────────────────────────────────
// Identity
// ──────────────────────────────────────────────────────────

/// Identity provider keeping accounts and sessions in memory.
#[derive(Default)]
pub struct StubIdentityProvider {
    accounts: Mutex<HashMap<String, (String, UserId)>>,
    sessions: Mutex<HashMap<String, Identity>>,
    unavailable: bool,
}

impl StubIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a backend error.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn register(&self, email: &str, password: &str) -> UserId {
        let user_id = UserId::from(Uuid::new_v4());
        self.accounts
            .lock()
            .unwrap()
            .insert(email.to_lowercase(), (password.to_string(), user_id));
        user_id
    }

    /// Opens a session for `user_id` and returns its token.
    pub fn issue(&self, user_id: UserId, email: &str) -> String {
        let token = format!("session-{}", Uuid::new_v4());
        self.sessions.lock().unwrap().insert(
            token.clone(),
            Identity {
                user_id,
                email: email.to_lowercase(),
            },
        );
        token
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    fn check_available(&self) -> Result<(), IdentityError> {
        if self.unavailable {
            return Err(IdentityError::Backend(
                "identity service unavailable".to_string(),
            ));
        }
        Ok(())
    }

    fn session_for(&self, user_id: UserId, email: &str) -> Session {
        Session {
            user_id,
            email: email.to_lowercase(),
            access_token: self.issue(user_id, email),
            expires_at: Utc::now() + Duration::hours(1),
        }
    }
}

#[async_trait]
impl IdentityProvider for StubIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        self.check_available()?;

        let account = self
            .accounts
            .lock()
            .unwrap()
            .get(&email.to_lowercase())
            .cloned();

        match account {
            Some((stored, user_id)) if stored == password => Ok(self.session_for(user_id, email)),
            _ => Err(IdentityError::InvalidCredentials),
        }
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        self.check_available()?;

        if self
            .accounts
            .lock()
            .unwrap()
            .contains_key(&email.to_lowercase())
        {
            return Err(IdentityError::EmailAlreadyInUse);
        }

        let user_id = self.register(email, password);
        Ok(self.session_for(user_id, email))
    }

    async fn sign_out(&self, token: &str) -> Result<(), IdentityError> {
        self.check_available()?;
        self.sessions.lock().unwrap().remove(token);
        Ok(())
    }

    async fn current_identity(&self, token: &str) -> Result<Option<Identity>, IdentityError> {
        self.check_available()?;
        Ok(self.sessions.lock().unwrap().get(token).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let now = Utc::now();
        let created = User {
            id: UserId::from(Uuid::new_v4()),
            email: user.email,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());
        Ok(created)
    }
}

/// Stores `plain$<password>`; only for tests.
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("plain${}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("plain${}", password))
    }
}

#[derive(Default)]
pub struct InMemoryBlacklist {
    revoked: Mutex<HashSet<String>>,
}

impl InMemoryBlacklist {
    pub fn contains(&self, token: &str) -> bool {
        self.revoked.lock().unwrap().contains(token)
    }
}

#[async_trait]
impl TokenBlacklist for InMemoryBlacklist {
    async fn revoke(&self, token: &str, _expires_at: DateTime<Utc>) -> Result<(), BlacklistError> {
        self.revoked.lock().unwrap().insert(token.to_string());
        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, BlacklistError> {
        Ok(self.contains(token))
    }
}

// ──────────────────────────────────────────────────────────
// Documents
// ──────────────────────────────────────────────────────────

/// Store that rejects every call with the same error.
pub struct FailingDocumentStore {
    error: DocumentStoreError,
}

impl FailingDocumentStore {
    pub fn new(error: DocumentStoreError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn insert(&self, _document: Document) -> Result<Document, DocumentStoreError> {
        Err(self.error.clone())
    }

    async fn merge(
        &self,
        _collection: &str,
        _id: Uuid,
        _partial: JsonObject,
        _updated_at: DateTime<Utc>,
    ) -> Result<Document, DocumentStoreError> {
        Err(self.error.clone())
    }

    async fn remove(&self, _collection: &str, _id: Uuid) -> Result<(), DocumentStoreError> {
        Err(self.error.clone())
    }

    async fn fetch(
        &self,
        _collection: &str,
        _id: Uuid,
    ) -> Result<Option<Document>, DocumentStoreError> {
        Err(self.error.clone())
    }

    async fn query(&self, _query: DocumentQuery) -> Result<Vec<Document>, DocumentStoreError> {
        Err(self.error.clone())
    }
}

// ──────────────────────────────────────────────────────────
// Media
// ──────────────────────────────────────────────────────────

/// Media host answering `https://media.test/{folder}/{file_name}`.
#[derive(Default)]
pub struct StubMediaHost {
    failure: Option<String>,
    uploads: AtomicUsize,
}

impl StubMediaHost {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn uploads(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaHost for StubMediaHost {
    async fn upload(
        &self,
        _kind: MediaKind,
        folder: &str,
        file: MediaFile,
    ) -> Result<String, MediaHostError> {
        self.uploads.fetch_add(1, Ordering::SeqCst);

        match &self.failure {
            Some(message) => Err(MediaHostError(message.clone())),
            None => Ok(format!("https://media.test/{}/{}", folder, file.file_name)),
        }
    }
}
