use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::warn;

use crate::provider::{Fragment, Role, Source};

pub const GREETING: &str = "Hallo! Wie kann ich dir bei deiner Planung für Bad Belzig helfen?";
pub const CHAT_ERROR_MESSAGE: &str = "Entschuldigung, es ist ein Fehler aufgetreten.";

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub sources: Vec<Source>,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    fn new(role: Role, text: &str, sources: Vec<Source>) -> Self {
        Self {
            role,
            text: text.to_string(),
            sources,
            sent_at: Local::now(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("a reply is still streaming")]
pub struct TurnInFlight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnState {
    Idle,
    /// User message recorded, no fragment seen yet.
    AwaitingReply,
    Streaming,
}

/// The locally rendered chat log.
///
/// Only one turn may be open at a time; the reply of the open turn is the
/// last message and grows as fragments arrive.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    state: TurnState,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(Role::Model, GREETING, Vec::new())],
            state: TurnState::Idle,
        }
    }

    pub fn add_user_message(&mut self, message: &str) {
        self.messages.push(ChatMessage::new(Role::User, message, Vec::new()));
    }

    pub fn add_assistant_message(&mut self, message: &str) {
        self.messages.push(ChatMessage::new(Role::Model, message, Vec::new()));
    }

    pub fn get_messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn is_loading(&self) -> bool {
        self.state != TurnState::Idle
    }

    /// Record the user's message and open a turn.
    pub fn begin_turn(&mut self, message: &str) -> Result<(), TurnInFlight> {
        if self.is_loading() {
            return Err(TurnInFlight);
        }
        self.add_user_message(message);
        self.state = TurnState::AwaitingReply;
        Ok(())
    }

    /// Merge a streamed fragment into the open turn's reply.
    ///
    /// The first fragment creates the reply. Later fragments append their text
    /// and replace the source list when they carry one.
    pub fn apply_fragment(&mut self, fragment: Fragment) {
        match self.state {
            TurnState::AwaitingReply => {
                let sources = fragment.sources.unwrap_or_default();
                self.messages
                    .push(ChatMessage::new(Role::Model, &fragment.text, sources));
                self.state = TurnState::Streaming;
            }
            TurnState::Streaming => {
                if let Some(reply) = self.messages.last_mut() {
                    reply.text.push_str(&fragment.text);
                    if let Some(sources) = fragment.sources {
                        reply.sources = sources;
                    }
                }
            }
            TurnState::Idle => {
                warn!("dropping fragment that arrived outside of a turn");
            }
        }
    }

    /// Close the open turn after a failure. Partial text stays as it is.
    pub fn fail_turn(&mut self) {
        self.add_assistant_message(CHAT_ERROR_MESSAGE);
        self.state = TurnState::Idle;
    }

    pub fn finish_turn(&mut self) {
        self.state = TurnState::Idle;
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(text: &str, sources: Option<Vec<(&str, &str)>>) -> Fragment {
        Fragment {
            text: text.to_string(),
            sources: sources.map(|s| {
                s.into_iter()
                    .map(|(uri, title)| Source { uri: uri.into(), title: title.into() })
                    .collect()
            }),
        }
    }

    #[test]
    fn starts_with_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.get_messages().len(), 1);
        assert_eq!(transcript.get_messages()[0].role, Role::Model);
        assert_eq!(transcript.get_messages()[0].text, GREETING);
        assert!(!transcript.is_loading());
    }

    #[test]
    fn fragments_accumulate_into_one_reply() {
        let mut transcript = Transcript::new();
        transcript.begin_turn("Was gibt es?").unwrap();
        transcript.apply_fragment(fragment("Hallo", None));
        transcript.apply_fragment(fragment(" Welt", Some(vec![("a", "A")])));
        transcript.finish_turn();

        let messages = transcript.get_messages();
        assert_eq!(messages.len(), 3);
        let reply = transcript.last().unwrap();
        assert_eq!(reply.role, Role::Model);
        assert_eq!(reply.text, "Hallo Welt");
        assert_eq!(reply.sources, vec![Source { uri: "a".into(), title: "A".into() }]);
    }

    #[test]
    fn later_sources_replace_earlier_ones() {
        let mut transcript = Transcript::new();
        transcript.begin_turn("Frage").unwrap();
        transcript.apply_fragment(fragment("a", Some(vec![("x", "X"), ("y", "Y")])));
        transcript.apply_fragment(fragment("b", None));
        assert_eq!(transcript.last().unwrap().sources.len(), 2);
        transcript.apply_fragment(fragment("c", Some(vec![("z", "Z"), ("z", "Z")])));
        let reply = transcript.last().unwrap();
        assert_eq!(reply.text, "abc");
        assert_eq!(
            reply.sources,
            vec![
                Source { uri: "z".into(), title: "Z".into() },
                Source { uri: "z".into(), title: "Z".into() },
            ]
        );
    }

    #[test]
    fn overlapping_turn_is_refused() {
        let mut transcript = Transcript::new();
        transcript.begin_turn("eins").unwrap();
        assert_eq!(transcript.begin_turn("zwei"), Err(TurnInFlight));
        assert_eq!(transcript.get_messages().len(), 2);
        transcript.finish_turn();
        assert!(transcript.begin_turn("zwei").is_ok());
    }

    #[test]
    fn failure_keeps_partial_reply_and_adds_fallback() {
        let mut transcript = Transcript::new();
        transcript.begin_turn("Frage").unwrap();
        transcript.apply_fragment(fragment("Die Burg", None));
        transcript.fail_turn();

        let texts: Vec<_> = transcript.get_messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec![GREETING, "Frage", "Die Burg", CHAT_ERROR_MESSAGE]);
        assert!(!transcript.is_loading());
    }

    #[test]
    fn fragment_outside_turn_is_ignored() {
        let mut transcript = Transcript::new();
        transcript.apply_fragment(fragment("verirrt", None));
        assert_eq!(transcript.get_messages().len(), 1);
    }

    #[test]
    fn clear_resets_to_greeting() {
        let mut transcript = Transcript::new();
        transcript.begin_turn("Frage").unwrap();
        transcript.clear();
        assert_eq!(transcript.get_messages().len(), 1);
        assert!(!transcript.is_loading());
    }
}
