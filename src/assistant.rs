//! Assistant Session
//!
//! Chat transcript and profile generation state, each allowing a single
//! request in flight.

use thiserror::Error;

use crate::commands::ApiError;
use crate::draft::Draft;
use crate::models::{ChatMessage, ChatMode, ChatRequest};

pub const ASSISTANT_UNAVAILABLE: &str =
    "The assistant is unavailable right now. Make sure the local server is running, then try again.";

/// Quick prompt asking for the questions the draft still leaves open
pub const DRAFT_CHECKLIST_PROMPT: &str = "Create an intake completion checklist for this client. \
Ask only the missing questions and prioritize digital assets.";

pub const PROFILE_UNAVAILABLE: &str =
    "Could not reach the server to generate a profile. Start the local server and try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    #[error("the assistant is still working on the previous request")]
    Busy,
    #[error("type a message first")]
    EmptyMessage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    mode: ChatMode,
    /// Send the current draft along with each turn
    include_context: bool,
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self { mode: ChatMode::default(), include_context: true, messages: Vec::new(), pending: false }
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_context(&self) -> bool {
        self.include_context
    }

    pub fn set_include_context(&mut self, include: bool) {
        self.include_context = include;
    }

    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ChatMode) {
        self.mode = mode;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record the user's message and build the request for it. Failed
    /// turns stay visible locally but are not sent back as history.
    pub fn begin_turn(&mut self, text: &str, draft: &Draft) -> Result<ChatRequest, AssistantError> {
        if self.pending {
            return Err(AssistantError::Busy);
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(AssistantError::EmptyMessage);
        }
        self.messages.push(ChatMessage::user(text));
        self.pending = true;

        Ok(ChatRequest {
            mode: self.mode,
            messages: self.messages.iter().filter(|m| !m.is_error).cloned().collect(),
            intake_context: self.include_context.then(|| draft.clone()),
        })
    }

    pub fn finish_turn(&mut self, result: Result<String, ApiError>) {
        self.pending = false;
        let message = match result {
            Ok(reply) => ChatMessage::assistant(reply),
            Err(e) => ChatMessage::assistant_error(e.user_message(ASSISTANT_UNAVAILABLE)),
        };
        self.messages.push(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.pending = false;
    }
}

/// Generated client profile shown on the summary page
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ProfileState {
    #[default]
    Idle,
    Generating,
    Ready(String),
    Failed(String),
}

impl ProfileState {
    pub fn begin(&mut self) -> Result<(), AssistantError> {
        if *self == ProfileState::Generating {
            return Err(AssistantError::Busy);
        }
        *self = ProfileState::Generating;
        Ok(())
    }

    pub fn finish(&mut self, result: Result<String, ApiError>) {
        *self = match result {
            Ok(profile) => ProfileState::Ready(profile),
            Err(e) => ProfileState::Failed(e.user_message(PROFILE_UNAVAILABLE)),
        };
    }
}
