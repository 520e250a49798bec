use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::domain::{
    chatbot::{
        entities::{ChatSession, ChatTurn},
        ports::ChatSessionRepository,
    },
    common::entities::app_errors::CoreError,
};

type SessionHandle = Arc<Mutex<ChatSession>>;

/// Process-local session store. History is lost on restart.
///
/// The outer lock only guards the id -> session map; each session carries its
/// own lock so appends to one session are serialised without blocking others.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChatSessionRepository {
    sessions: Arc<RwLock<HashMap<String, SessionHandle>>>,
}

impl InMemoryChatSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn handle(&self, session_id: &str) -> SessionHandle {
        if let Some(session) = self.sessions.read().await.get(session_id) {
            return session.clone();
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                debug!(session_id = %session_id, "Creating chat session");
                Arc::new(Mutex::new(ChatSession::new(session_id.to_string())))
            })
            .clone()
    }
}

impl ChatSessionRepository for InMemoryChatSessionRepository {
    async fn append_turn(
        &self,
        session_id: String,
        turn: ChatTurn,
    ) -> Result<ChatSession, CoreError> {
        let handle = self.handle(&session_id).await;
        let mut session = handle.lock().await;
        session.history.push(turn);

        Ok(session.clone())
    }

    async fn get_session(&self, session_id: String) -> Result<Option<ChatSession>, CoreError> {
        let handle = self.sessions.read().await.get(&session_id).cloned();

        match handle {
            Some(handle) => Ok(Some(handle.lock().await.clone())),
            None => Ok(None),
        }
    }
}
