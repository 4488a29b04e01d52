//! Language-model provider abstraction.
//!
//! The planner and the chat assistant only see [`LanguageModel`]; the Gemini
//! wire format stays inside [`crate::gemini_client`]. Tests plug in a scripted
//! model instead of the network.

use async_trait::async_trait;
use futures::stream::BoxStream;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Request(String),
    #[error("provider returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("failed to decode provider response: {0}")]
    Decode(String),
    #[error("response stream interrupted: {0}")]
    Stream(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// A web citation attached to a grounded answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub uri: String,
    pub title: String,
}

/// One completed exchange entry kept in a chat session's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

/// Everything the provider needs for one streamed chat turn.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub system_instruction: String,
    pub history: Vec<Turn>,
    pub message: String,
    pub web_search: bool,
}

/// An incremental piece of a streamed reply.
///
/// `sources` is `None` when the chunk carried no grounding metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub sources: Option<Vec<Source>>,
}

pub type FragmentStream = BoxStream<'static, Result<Fragment, ProviderError>>;

#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// One-shot generation. An empty string means the provider produced no text.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Start a streamed chat turn.
    async fn stream_chat(&self, request: ChatRequest) -> Result<FragmentStream, ProviderError>;
}
