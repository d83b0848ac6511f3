//! Chat Engine - transcripts and simulated replies
//!
//! Transcripts are append-only. Every write, including a simulated reply,
//! goes through [`send`], which applies the safety filter for the mode
//! active at write time.
//!
//! Replies are scheduled with a due instant and delivered by
//! [`ChatEngine::deliver_due`]. A pending reply is keyed by chat id only: it
//! lands in that chat at fire time even if the user navigated away or
//! blocked the profile in the meantime.

use std::ops::RangeInclusive;
use std::time::Duration;

use tokio::time::Instant;

use crate::domain::{Message, Sender, State};
use crate::ports::RandomSource;
use crate::services::safety::redact;

/// Lines the simulated counterpart answers with
pub const REPLIES: [&str; 5] = [
    "О, привет 🙂 как вечер?",
    "Хаха, забавно 😄 чем занимаешься?",
    "Я тоже люблю такой вайб. Откуда ты?",
    "Давай коротко: музыка/кино/игры — что ближе?",
    "Я на связи. Только без токсика 🙂",
];

/// Reply delay windows, in milliseconds
#[derive(Debug, Clone)]
pub struct ReplyConfig {
    /// After the user sends a message
    pub reply_delay_ms: RangeInclusive<u32>,
    /// After a chat is opened
    pub open_chat_delay_ms: RangeInclusive<u32>,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 700..=1600,
            open_chat_delay_ms: 300..=900,
        }
    }
}

/// What caused a reply to be scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyTrigger {
    UserMessage,
    ChatOpened,
}

/// A reply waiting for its delay to elapse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub chat_id: String,
    pub text: String,
    pub due_at: Instant,
}

/// Append a filtered message to a chat, creating the chat if needed
pub fn send(state: &mut State, chat_id: &str, from: Sender, raw_text: &str) -> Message {
    let message = Message::new(from, redact(raw_text, state.mode));
    state
        .chats
        .entry(chat_id.to_string())
        .or_default()
        .push(message.clone());
    message
}

/// Transcript of a chat, oldest first
pub fn render<'a>(state: &'a State, chat_id: &str) -> &'a [Message] {
    state.transcript(chat_id)
}

/// Reply scheduler
pub struct ChatEngine {
    config: ReplyConfig,
    pending: Vec<PendingReply>,
}

impl ChatEngine {
    pub fn new(config: Option<ReplyConfig>) -> Self {
        Self {
            config: config.unwrap_or_default(),
            pending: Vec::new(),
        }
    }

    /// Schedule exactly one reply for `chat_id`
    pub fn simulate_reply<R: RandomSource>(
        &mut self,
        chat_id: &str,
        trigger: ReplyTrigger,
        rng: &mut R,
        now: Instant,
    ) -> &PendingReply {
        let window = match trigger {
            ReplyTrigger::UserMessage => &self.config.reply_delay_ms,
            ReplyTrigger::ChatOpened => &self.config.open_chat_delay_ms,
        };
        let delay = Duration::from_millis(rng.int_in(*window.start(), *window.end()) as u64);
        let text = rng.pick(&REPLIES).to_string();

        tracing::debug!("Reply scheduled for {} in {:?} ({:?})", chat_id, delay, trigger);

        self.pending.push(PendingReply {
            chat_id: chat_id.to_string(),
            text,
            due_at: now + delay,
        });
        &self.pending[self.pending.len() - 1]
    }

    /// Drop pending replies for a chat. Returns how many were dropped.
    pub fn cancel(&mut self, chat_id: &str) -> usize {
        let before = self.pending.len();
        self.pending.retain(|reply| reply.chat_id != chat_id);
        before - self.pending.len()
    }

    /// Drop every pending reply
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, chat_id: &str) -> bool {
        self.pending.iter().any(|reply| reply.chat_id == chat_id)
    }

    pub fn pending(&self) -> &[PendingReply] {
        &self.pending
    }

    /// Earliest due instant among pending replies
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|reply| reply.due_at).min()
    }

    /// Append every reply due at `now`, in due order
    pub fn deliver_due(&mut self, state: &mut State, now: Instant) -> Vec<Message> {
        let (mut due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|reply| reply.due_at <= now);
        self.pending = rest;
        due.sort_by_key(|reply| reply.due_at);

        due.into_iter()
            .map(|reply| send(state, &reply.chat_id, Sender::Them, &reply.text))
            .collect()
    }
}
