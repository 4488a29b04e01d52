//! Gemini REST client (`generateContent` and `streamGenerateContent`).
//!
//! All Gemini wire types are private to this module. Streaming uses the
//! server-sent-events variant (`alt=sse`), one JSON document per `data:` line.

use std::collections::VecDeque;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace};
use url::Url;

use crate::config::Config;
use crate::provider::{
    ChatRequest, Fragment, FragmentStream, LanguageModel, ProviderError, Role, Source, Turn,
};

#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: Url,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.api_base_url.clone(),
            client: reqwest::Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self, method: &str, sse: bool) -> Result<Url, ProviderError> {
        let mut url = self
            .base_url
            .join(&format!("models/{}:{}", self.model, method))
            .map_err(|e| ProviderError::Request(format!("invalid endpoint for {method}: {e}")))?;
        {
            let mut query = url.query_pairs_mut();
            if sse {
                query.append_pair("alt", "sse");
            }
            query.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    async fn post(&self, url: Url, body: &GenerateContentRequest<'_>) -> Result<reqwest::Response, ProviderError> {
        if tracing::enabled!(tracing::Level::TRACE) {
            let json = serde_json::to_string_pretty(body)
                .unwrap_or_else(|e| format!("<serialization failed: {e}>"));
            trace!(payload = %json, "full Gemini request payload");
        }

        let response = self.client.post(url).json(body).send().await.map_err(|e| {
            error!(model = %self.model, error = %e, "Gemini HTTP request failed (transport)");
            ProviderError::Request(e.to_string())
        })?;

        check_status(response).await
    }
}

#[async_trait]
impl LanguageModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let body = GenerateContentRequest {
            contents: vec![WireContent::new(Role::User, prompt)],
            system_instruction: None,
            tools: Vec::new(),
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "sending generateContent request");
        let response = self.post(self.endpoint("generateContent", false)?, &body).await?;

        let parsed = response.json::<GenerateContentResponse>().await.map_err(|e| {
            error!(error = %e, "failed to deserialize Gemini response");
            ProviderError::Decode(e.to_string())
        })?;

        debug!(
            candidates = parsed.candidates.len(),
            finish_reason = ?parsed.finish_reason(),
            "received generateContent response"
        );
        Ok(parsed.text())
    }

    async fn stream_chat(&self, request: ChatRequest) -> Result<FragmentStream, ProviderError> {
        let body = GenerateContentRequest::for_chat(&request);

        debug!(
            model = %self.model,
            history_turns = request.history.len(),
            web_search = request.web_search,
            "sending streamGenerateContent request"
        );
        let response = self.post(self.endpoint("streamGenerateContent", true)?, &body).await?;

        let bytes = Box::pin(response.bytes_stream());
        let state = (bytes, SseBuffer::default(), VecDeque::<String>::new(), false);

        let fragments = stream::unfold(state, |(mut bytes, mut buffer, mut pending, mut finished)| async move {
            loop {
                if let Some(data) = pending.pop_front() {
                    let fragment = decode_stream_chunk(&data);
                    if fragment.is_err() {
                        pending.clear();
                        finished = true;
                    }
                    return Some((fragment, (bytes, buffer, pending, finished)));
                }
                if finished {
                    return None;
                }
                match bytes.next().await {
                    Some(Ok(chunk)) => pending.extend(buffer.push(&chunk)),
                    Some(Err(e)) => {
                        error!(error = %e, "Gemini stream interrupted");
                        finished = true;
                        let err = ProviderError::Stream(e.to_string());
                        return Some((Err(err), (bytes, buffer, pending, finished)));
                    }
                    None => {
                        finished = true;
                        pending.extend(buffer.finish());
                    }
                }
            }
        });

        Ok(fragments.boxed())
    }
}

/// Consume the response and return it if successful, or a structured error.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read error body>".to_string());
    error!(status = status.as_u16(), "Gemini API request failed");
    debug!(body = %body, "Gemini error body");

    Err(ProviderError::Status {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Pull the human-readable message out of Google's error envelope.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(status) => format!("{} ({status})", envelope.error.message),
            None => envelope.error.message,
        },
        Err(_) => body.trim().to_string(),
    }
}

fn decode_stream_chunk(data: &str) -> Result<Fragment, ProviderError> {
    let chunk: StreamChunk =
        serde_json::from_str(data).map_err(|e| ProviderError::Decode(e.to_string()))?;
    if let Some(err) = chunk.error {
        return Err(ProviderError::Stream(err.message));
    }
    Ok(Fragment {
        text: chunk.response.text(),
        sources: chunk.response.sources(),
    })
}

// ── SSE framing ──────────────────────────────────────────────────────────────

/// Splits a byte stream into `data:` payloads.
///
/// Bytes are buffered until a full line is available so multi-byte
/// characters split across network chunks decode correctly.
#[derive(Debug, Default)]
struct SseBuffer {
    pending: Vec<u8>,
}

impl SseBuffer {
    fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);
        let mut payloads = Vec::new();
        while let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            if let Some(data) = data_payload(&line) {
                payloads.push(data);
            }
        }
        payloads
    }

    fn finish(&mut self) -> Option<String> {
        let rest = std::mem::take(&mut self.pending);
        data_payload(&rest)
    }
}

fn data_payload(line: &[u8]) -> Option<String> {
    let line = String::from_utf8_lossy(line);
    let line = line.trim_end_matches(|c| c == '\r' || c == '\n');
    let data = line.strip_prefix("data:")?.trim_start();
    if data.is_empty() {
        None
    } else {
        Some(data.to_string())
    }
}

// ── Private wire types ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<WireContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool>,
}

impl<'a> GenerateContentRequest<'a> {
    fn for_chat(request: &'a ChatRequest) -> Self {
        let mut contents: Vec<WireContent<'a>> = request
            .history
            .iter()
            .map(|Turn { role, text }| WireContent::new(*role, text))
            .collect();
        contents.push(WireContent::new(Role::User, &request.message));

        let system_instruction = Some(request.system_instruction.as_str())
            .filter(|s| !s.is_empty())
            .map(|text| SystemInstruction { parts: vec![WirePart { text }] });

        let tools = if request.web_search {
            vec![WireTool { google_search: GoogleSearch {} }]
        } else {
            Vec::new()
        };

        Self { contents, system_instruction, tools }
    }
}

#[derive(Debug, Serialize)]
struct WireContent<'a> {
    role: &'static str,
    parts: Vec<WirePart<'a>>,
}

impl<'a> WireContent<'a> {
    fn new(role: Role, text: &'a str) -> Self {
        Self { role: role.as_str(), parts: vec![WirePart { text }] }
    }
}

#[derive(Debug, Serialize)]
struct WirePart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<WirePart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireTool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, skipping thought parts.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter(|p| !p.thought.unwrap_or(false))
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    /// Web citations of the first candidate.
    ///
    /// `None` unless the metadata lists grounding chunks, so a chunk that only
    /// reports its search queries leaves earlier citations alone.
    fn sources(&self) -> Option<Vec<Source>> {
        let metadata = self.candidates.first()?.grounding_metadata.as_ref()?;
        let sources = metadata
            .grounding_chunks
            .as_ref()?
            .iter()
            .filter_map(|chunk| chunk.web.as_ref())
            .filter_map(|web| {
                let uri = web.uri.clone()?;
                let title = web.title.clone().unwrap_or_else(|| uri.clone());
                Some(Source { uri, title })
            })
            .collect();
        Some(sources)
    }

    fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Option<Vec<GroundingChunk>>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebChunk>,
}

#[derive(Debug, Deserialize)]
struct WebChunk {
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StreamChunk {
    #[serde(default)]
    error: Option<ErrorBody>,
    #[serde(flatten)]
    response: GenerateContentResponse,
}

// Error envelope used by Google APIs.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    status: Option<String>,
}
