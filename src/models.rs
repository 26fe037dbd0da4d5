//! Frontend Models
//!
//! Data structures exchanged with the intake API.

use serde::{Deserialize, Serialize};

use crate::draft::Draft;

/// `GET /api/health`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub ollama_ok: bool,
}

/// Badge shown in the nav bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerState {
    #[default]
    Checking,
    Online,
    ModelOffline,
    Offline,
}

impl ServerState {
    pub fn from_health(health: Option<HealthStatus>) -> Self {
        match health {
            Some(HealthStatus { ok: true, ollama_ok: true }) => ServerState::Online,
            Some(HealthStatus { ok: true, ollama_ok: false }) => ServerState::ModelOffline,
            _ => ServerState::Offline,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServerState::Checking => "Checking…",
            ServerState::Online => "Online",
            ServerState::ModelOffline => "Assistant offline",
            ServerState::Offline => "Offline",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ServerState::Checking => "status-badge checking",
            ServerState::Online => "status-badge online",
            ServerState::ModelOffline => "status-badge degraded",
            ServerState::Offline => "status-badge offline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    /// Local-only marker for failed turns; never sent
    #[serde(skip)]
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into(), is_error: false }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, content: content.into(), is_error: false }
    }

    pub fn assistant_error(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, content: content.into(), is_error: true }
    }
}

/// Who the assistant is talking to; selects the server's system prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    #[default]
    Client,
    Attorney,
}

impl ChatMode {
    pub const ALL: [ChatMode; 2] = [ChatMode::Client, ChatMode::Attorney];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChatMode::Client => "client",
            ChatMode::Attorney => "attorney",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChatMode::Client => "Client helper",
            ChatMode::Attorney => "Attorney assistant",
        }
    }
}

/// `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub mode: ChatMode,
    pub messages: Vec<ChatMessage>,
    pub intake_context: Option<Draft>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IntakeSummary {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub digital: Vec<String>,
}

/// Row of `GET /api/intake/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeListItem {
    pub id: String,
    #[serde(default)]
    pub summary: IntakeSummary,
    #[serde(rename = "submittedAt", default)]
    pub submitted_at: String,
}
