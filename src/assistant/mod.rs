//! "Frag einen Local": the grounded chat assistant.
//!
//! A [`ChatSession`] owns the persona, the search tool setting and the turn
//! history the provider needs; clones share the same session. The visible
//! chat log lives separately in a [`Transcript`].

pub mod transcript;

use std::sync::{Arc, Mutex};

use futures::stream::{self, StreamExt};
use tracing::{debug, error, warn};

use crate::provider::{ChatRequest, Fragment, FragmentStream, LanguageModel, ProviderError, Role, Turn};

pub use transcript::{ChatMessage, Transcript, TurnInFlight, CHAT_ERROR_MESSAGE, GREETING};

pub const PERSONA: &str = "Du bist ein hilfsbereiter und freundlicher lokaler Führer für die Stadt Bad Belzig in Deutschland. Dein Wissen basiert auf den Informationen der offiziellen Tourismus-Website. Antworte auf Fragen prägnant und auf Deutsch. Wenn du Informationen aus dem Internet verwendest, um eine Frage zu beantworten, musst du deine Quellen nennen.";

struct SessionInner {
    model: Arc<dyn LanguageModel>,
    system_instruction: String,
    web_search: bool,
    history: Mutex<Vec<Turn>>,
}

#[derive(Clone)]
pub struct ChatSession {
    inner: Arc<SessionInner>,
}

/// Open a session with the local-guide persona and web search enabled.
pub fn start_session(model: Arc<dyn LanguageModel>) -> ChatSession {
    ChatSession {
        inner: Arc::new(SessionInner {
            model,
            system_instruction: PERSONA.to_string(),
            web_search: true,
            history: Mutex::new(Vec::new()),
        }),
    }
}

impl ChatSession {
    pub fn history(&self) -> Vec<Turn> {
        self.lock_history().clone()
    }

    fn lock_history(&self) -> std::sync::MutexGuard<'_, Vec<Turn>> {
        self.inner.history.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Send a user message and stream the reply.
    ///
    /// The exchange joins the session history once the stream ends cleanly;
    /// a failed turn leaves the history untouched.
    pub async fn send_message(&self, message: &str) -> Result<FragmentStream, ProviderError> {
        let request = ChatRequest {
            system_instruction: self.inner.system_instruction.clone(),
            history: self.history(),
            message: message.to_string(),
            web_search: self.inner.web_search,
        };
        let upstream = self.inner.model.stream_chat(request).await?;

        let state = TurnState {
            upstream,
            session: self.clone(),
            message: message.to_string(),
            reply: String::new(),
            done: false,
        };
        let fragments = stream::unfold(state, |mut state| async move {
            if state.done {
                return None;
            }
            match state.upstream.next().await {
                Some(Ok(fragment)) => {
                    state.reply.push_str(&fragment.text);
                    Some((Ok(fragment), state))
                }
                Some(Err(e)) => {
                    state.done = true;
                    Some((Err(e), state))
                }
                None => {
                    state.session.commit(state.message, state.reply);
                    None
                }
            }
        });
        Ok(fragments.boxed())
    }

    fn commit(&self, message: String, reply: String) {
        let mut history = self.lock_history();
        history.push(Turn { role: Role::User, text: message });
        history.push(Turn { role: Role::Model, text: reply });
    }
}

struct TurnState {
    upstream: FragmentStream,
    session: ChatSession,
    message: String,
    reply: String,
    done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Completed,
    Failed,
}

/// Run one chat turn and record it in the transcript.
///
/// `on_fragment` sees each fragment as it arrives, so a renderer can print
/// text live. Errors never escape: the transcript gets the
/// fixed fallback message instead and any partial reply stays visible.
pub async fn send_and_record(
    session: &ChatSession,
    transcript: &mut Transcript,
    message: &str,
    mut on_fragment: impl FnMut(&Fragment),
) -> Result<TurnOutcome, TurnInFlight> {
    transcript.begin_turn(message)?;

    let mut stream = match session.send_message(message).await {
        Ok(stream) => stream,
        Err(e) => {
            error!(error = %e, "chat request failed");
            transcript.fail_turn();
            return Ok(TurnOutcome::Failed);
        }
    };

    let mut fragments = 0usize;
    while let Some(item) = stream.next().await {
        match item {
            Ok(fragment) => {
                fragments += 1;
                on_fragment(&fragment);
                transcript.apply_fragment(fragment);
            }
            Err(e) => {
                error!(error = %e, fragments, "chat stream failed");
                transcript.fail_turn();
                return Ok(TurnOutcome::Failed);
            }
        }
    }

    if fragments == 0 {
        warn!("chat stream ended without any fragment");
    }
    debug!(fragments, "chat turn completed");
    transcript.finish_turn();
    Ok(TurnOutcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::testing::{text, text_with_sources, ScriptedModel, Step};
    use crate::provider::Source;

    fn session(model: ScriptedModel) -> (ChatSession, Arc<ScriptedModel>) {
        let model = Arc::new(model);
        (start_session(model.clone()), model)
    }

    #[tokio::test]
    async fn session_sends_persona_and_search_tool() {
        let (session, model) = session(ScriptedModel::default().with_stream(vec![text("Ja")]));
        let mut transcript = Transcript::new();
        send_and_record(&session, &mut transcript, "Hallo?", |_| {}).await.unwrap();

        let requests = model.chat_requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].system_instruction, PERSONA);
        assert!(requests[0].web_search);
        assert_eq!(requests[0].message, "Hallo?");
        assert!(requests[0].history.is_empty());
    }

    #[tokio::test]
    async fn streamed_reply_is_merged() {
        let (session, _) = session(ScriptedModel::default().with_stream(vec![
            text("Hallo"),
            text_with_sources(" Welt", &[("a", "A")]),
        ]));
        let mut transcript = Transcript::new();
        let mut seen = Vec::new();
        let outcome = send_and_record(&session, &mut transcript, "Grüß dich", |f| {
            seen.push(f.text.clone())
        })
        .await
        .unwrap();

        assert_eq!(outcome, TurnOutcome::Completed);
        assert_eq!(seen, vec!["Hallo".to_string(), " Welt".to_string()]);
        let reply = transcript.last().unwrap();
        assert_eq!(reply.text, "Hallo Welt");
        assert_eq!(reply.sources, vec![Source { uri: "a".into(), title: "A".into() }]);
        assert!(!transcript.is_loading());
    }

    #[tokio::test]
    async fn completed_turns_feed_the_history() {
        let (session, model) = session(
            ScriptedModel::default()
                .with_stream(vec![text("Die Therme"), text(" öffnet um 10.")])
                .with_stream(vec![text("Gern!")]),
        );
        let mut transcript = Transcript::new();
        send_and_record(&session, &mut transcript, "Wann öffnet die Therme?", |_| {})
            .await
            .unwrap();
        send_and_record(&session, &mut transcript, "Danke", |_| {}).await.unwrap();

        let requests = model.chat_requests.lock().unwrap();
        assert_eq!(
            requests[1].history,
            vec![
                Turn { role: Role::User, text: "Wann öffnet die Therme?".into() },
                Turn { role: Role::Model, text: "Die Therme öffnet um 10.".into() },
            ]
        );
        assert_eq!(session.history().len(), 4);
    }

    #[tokio::test]
    async fn failed_request_appends_one_fallback() {
        let (session, _) = session(ScriptedModel::default().with_failed_stream("API key not valid"));
        let mut transcript = Transcript::new();
        let outcome = send_and_record(&session, &mut transcript, "Hallo", |_| {}).await.unwrap();

        assert_eq!(outcome, TurnOutcome::Failed);
        let messages = transcript.get_messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].text, "Hallo");
        assert_eq!(messages[2].role, Role::Model);
        assert_eq!(messages[2].text, CHAT_ERROR_MESSAGE);
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn mid_stream_failure_keeps_partial_reply() {
        let (session, _) = session(ScriptedModel::default().with_stream(vec![
            text("Die Burg ist"),
            Step::Fail("connection reset".into()),
            text(" nie zu sehen"),
        ]));
        let mut transcript = Transcript::new();
        let outcome = send_and_record(&session, &mut transcript, "Burg?", |_| {}).await.unwrap();

        assert_eq!(outcome, TurnOutcome::Failed);
        let texts: Vec<_> = transcript.get_messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec![GREETING, "Burg?", "Die Burg ist", CHAT_ERROR_MESSAGE]);
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn busy_transcript_refuses_second_send() {
        let (session, model) = session(ScriptedModel::default());
        let mut transcript = Transcript::new();
        transcript.begin_turn("läuft noch").unwrap();

        let result = send_and_record(&session, &mut transcript, "noch eine", |_| {}).await;
        assert_eq!(result, Err(TurnInFlight));
        assert!(model.chat_requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn clones_share_the_session() {
        let (session, model) = session(
            ScriptedModel::default()
                .with_stream(vec![text("eins")])
                .with_stream(vec![text("zwei")]),
        );
        let other = session.clone();
        let mut transcript = Transcript::new();
        send_and_record(&session, &mut transcript, "a", |_| {}).await.unwrap();
        send_and_record(&other, &mut transcript, "b", |_| {}).await.unwrap();
        assert_eq!(model.chat_requests.lock().unwrap()[1].history.len(), 2);
    }
}
