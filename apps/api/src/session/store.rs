use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::brief::RoleForm;
use crate::session::models::FormSession;

/// Shared map of live form sessions. Cloning the store clones the handle.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, FormSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, form: RoleForm) -> (Uuid, FormSession) {
        let id = Uuid::new_v4();
        let session = FormSession::new(form);
        self.inner.write().await.insert(id, session.clone());
        (id, session)
    }

    /// Snapshot of the session as it is right now.
    pub async fn snapshot(&self, id: Uuid) -> Option<FormSession> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Runs `edit` against the live session and returns its result together
    /// with the post-edit snapshot.
    pub async fn update<F, R>(&self, id: Uuid, edit: F) -> Option<(R, FormSession)>
    where
        F: FnOnce(&mut FormSession) -> R,
    {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id)?;
        let result = edit(session);
        Some((result, session.clone()))
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
