//! In-memory implementations of the outbound ports for tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use super::{
    AvatarRecordStore, AvatarStorage, EmailNotifier, EventPublisher, RemoteUserClient,
    UserRepository,
};
use crate::domain::{
    models::{AvatarFilename, AvatarRecord, DeleteReceipt, NewUser, RemoteUser, User, UserId},
    AvatarError, UserError,
};

/// Record store backed by a `Vec`, preserving insertion order.
#[derive(Clone, Default)]
pub struct MockAvatarRecordStore {
    records: Arc<RwLock<Vec<AvatarRecord>>>,
    fail_inserts: Arc<AtomicBool>,
    unacknowledged_deletes: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockAvatarRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(self, records: Vec<AvatarRecord>) -> Self {
        self.records.write().unwrap().extend(records);
        self
    }

    pub fn fail_inserts(&self) {
        self.fail_inserts.store(true, Ordering::SeqCst);
    }

    pub fn leave_deletes_unacknowledged(&self) {
        self.unacknowledged_deletes.store(true, Ordering::SeqCst);
    }

    /// Get all records (for test assertions).
    pub fn all_records(&self) -> Vec<AvatarRecord> {
        self.records.read().unwrap().clone()
    }
}

#[async_trait]
impl AvatarRecordStore for MockAvatarRecordStore {
    async fn insert(&self, record: &AvatarRecord) -> Result<AvatarRecord, AvatarError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(AvatarError::RecordStore("insert rejected".to_string()));
        }
        self.records.write().unwrap().push(record.clone());
        Ok(record.clone())
    }

    async fn find_one(&self, user_id: UserId) -> Result<Option<AvatarRecord>, AvatarError> {
        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .find(|record| record.user_id == user_id)
            .cloned())
    }

    async fn delete_all(&self, user_id: UserId) -> Result<DeleteReceipt, AvatarError> {
        if self.unacknowledged_deletes.load(Ordering::SeqCst) {
            return Ok(DeleteReceipt {
                acknowledged: false,
                deleted_count: 0,
            });
        }

        let mut records = self.records.write().unwrap();
        let before = records.len();
        records.retain(|record| record.user_id != user_id);

        Ok(DeleteReceipt {
            acknowledged: true,
            deleted_count: (before - records.len()) as u64,
        })
    }
}

/// File storage backed by a `HashMap` keyed on filename.
#[derive(Clone, Default)]
pub struct MockAvatarStorage {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    fail_writes: Arc<AtomicBool>,
    failing_deletes: Arc<RwLock<HashSet<String>>>,
}

#[allow(dead_code)]
impl MockAvatarStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, filename: &str, bytes: &[u8]) -> Self {
        self.files
            .write()
            .unwrap()
            .insert(filename.to_string(), bytes.to_vec());
        self
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn fail_delete_of(&self, filename: &str) {
        self.failing_deletes
            .write()
            .unwrap()
            .insert(filename.to_string());
    }

    pub fn file(&self, filename: &str) -> Option<Vec<u8>> {
        self.files.read().unwrap().get(filename).cloned()
    }

    /// Sorted filenames (for test assertions).
    pub fn filenames(&self) -> Vec<String> {
        let mut names: Vec<_> = self.files.read().unwrap().keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl AvatarStorage for MockAvatarStorage {
    async fn read(&self, filename: &AvatarFilename) -> Result<Vec<u8>, AvatarError> {
        self.file(filename.as_str())
            .ok_or_else(|| AvatarError::StorageRead(format!("{filename}: no such file")))
    }

    async fn write(&self, filename: &AvatarFilename, bytes: &[u8]) -> Result<(), AvatarError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AvatarError::StorageWrite(format!("{filename}: disk full")));
        }
        self.files
            .write()
            .unwrap()
            .insert(filename.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn delete(&self, filename: &AvatarFilename) -> Result<(), AvatarError> {
        if self.failing_deletes.read().unwrap().contains(filename.as_str()) {
            return Err(AvatarError::StorageWrite(format!(
                "{filename}: permission denied"
            )));
        }
        self.files
            .write()
            .unwrap()
            .remove(filename.as_str())
            .map(|_| ())
            .ok_or_else(|| AvatarError::StorageWrite(format!("{filename}: no such file")))
    }

    async fn list(&self) -> Result<Vec<AvatarFilename>, AvatarError> {
        Ok(self
            .files
            .read()
            .unwrap()
            .keys()
            .filter_map(|name| AvatarFilename::parse(name.as_str()))
            .collect())
    }
}

/// Remote API serving fixed users and images, counting every call.
#[derive(Clone, Default)]
pub struct MockRemoteUserClient {
    users: Arc<RwLock<HashMap<UserId, RemoteUser>>>,
    images: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    latency: Option<Duration>,
    lookups: Arc<AtomicUsize>,
    downloads: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockRemoteUserClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user whose avatar lives at `https://img.test/{id}.jpg`.
    pub fn with_avatar(self, user_id: i32, bytes: &[u8]) -> Self {
        let avatar_url = format!("https://img.test/{user_id}.jpg");
        self.images
            .write()
            .unwrap()
            .insert(avatar_url.clone(), bytes.to_vec());
        self.with_user(user_id, avatar_url)
    }

    /// Register a user without serving their avatar image.
    pub fn with_user(self, user_id: i32, avatar_url: String) -> Self {
        let user = RemoteUser {
            id: UserId::new(user_id),
            email: format!("user{user_id}@reqres.in"),
            avatar_url,
        };
        self.users.write().unwrap().insert(user.id, user);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn downloads(&self) -> usize {
        self.downloads.load(Ordering::SeqCst)
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl RemoteUserClient for MockRemoteUserClient {
    async fn get_user_by_id(&self, user_id: UserId) -> Result<RemoteUser, AvatarError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        self.users
            .read()
            .unwrap()
            .get(&user_id)
            .cloned()
            .ok_or(AvatarError::UserNotFound(user_id))
    }

    async fn download_bytes(&self, url: &str) -> Result<Vec<u8>, AvatarError> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        self.images
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| AvatarError::RemoteDownload(format!("{url}: 404 Not Found")))
    }

    async fn get_user_payload(&self, user_id: UserId) -> Result<serde_json::Value, AvatarError> {
        let user = self.get_user_by_id(user_id).await?;
        Ok(json!({
            "data": {
                "id": user.id,
                "email": user.email,
                "first_name": "Janet",
                "last_name": "Weaver",
                "avatar": user.avatar_url,
            },
            "support": {
                "url": "https://reqres.in/#support-heading",
                "text": "support"
            }
        }))
    }
}

#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

#[allow(dead_code)]
impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self, user_id: UserId) -> Option<User> {
        self.users.read().unwrap().get(&user_id).cloned()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, UserError> {
        let mut users = self.users.write().unwrap();
        if users.contains_key(&user.id) {
            return Err(UserError::AlreadyExists(user.id));
        }
        let created = User::from(user.clone());
        users.insert(created.id, created.clone());
        Ok(created)
    }
}

/// Sent e-mail as `(to, subject, content)`.
#[derive(Clone, Default)]
pub struct RecordingEmailNotifier {
    sent: Arc<RwLock<Vec<(String, String, String)>>>,
}

impl RecordingEmailNotifier {
    pub fn sent(&self) -> Vec<(String, String, String)> {
        self.sent.read().unwrap().clone()
    }
}

#[async_trait]
impl EmailNotifier for RecordingEmailNotifier {
    async fn send(&self, to: &str, subject: &str, content: &str) {
        self.sent
            .write()
            .unwrap()
            .push((to.to_string(), subject.to_string(), content.to_string()));
    }
}

/// Published events as `(queue, message)`.
#[derive(Clone, Default)]
pub struct RecordingEventPublisher {
    published: Arc<RwLock<Vec<(String, serde_json::Value)>>>,
}

impl RecordingEventPublisher {
    pub fn published(&self) -> Vec<(String, serde_json::Value)> {
        self.published.read().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingEventPublisher {
    async fn publish(&self, queue: &str, message: serde_json::Value) {
        self.published
            .write()
            .unwrap()
            .push((queue.to_string(), message));
    }
}
