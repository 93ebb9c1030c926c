//! Conversation state: the ordered message thread and the turn phase.
//!
//! DESIGN
//! ======
//! A turn is one user query plus its single bot reply. `begin_turn` appends
//! the user message and marks the turn in flight; `settle_turn` is the only
//! way back to idle and appends exactly one bot message regardless of how
//! the request ended, so the phase reset cannot be missed on any path.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::AskError;

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single message in the conversation thread.
///
/// Immutable once appended; ordering is append order and duplicates are
/// allowed. A user message carries the display name of its attachment,
/// never the attachment content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub attachment_name: Option<String>,
}

/// Whether a turn is currently in flight.
///
/// A tagged enum rather than a bare boolean so future states (cancelled,
/// timed out locally) can be added without ad-hoc flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnPhase {
    #[default]
    Idle,
    AwaitingReply,
}

impl TurnPhase {
    /// True while a request is in flight; drives the loading indicator and
    /// the disabled send controls.
    pub fn is_pending(self) -> bool {
        matches!(self, Self::AwaitingReply)
    }
}

/// Bot text for a non-success HTTP status from the ask endpoint.
pub const SERVER_ERROR_TEXT: &str = "Error connecting to the server. Please try again later.";

/// Bot text for a transport failure or a malformed response body.
pub const REQUEST_FAILED_TEXT: &str = "Sorry, something went wrong while sending your message.";

/// Bot text for a request that exceeded the bounded timeout.
pub const TIMED_OUT_TEXT: &str = "The request timed out. Please try again.";

/// Bot text for a success response without a usable reply field.
pub const MISSING_REPLY_TEXT: &str = "No response field in the server reply.";

/// State for the conversation panel.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub phase: TurnPhase,
}

impl ChatState {
    /// Append the user's message and mark the turn in flight.
    pub fn begin_turn(&mut self, text: String, attachment_name: Option<String>) {
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text,
            attachment_name,
        });
        self.phase = TurnPhase::AwaitingReply;
    }

    /// Settle the in-flight turn: append exactly one bot message for the
    /// outcome and return to idle.
    pub fn settle_turn(&mut self, outcome: Result<Option<String>, AskError>) {
        let text = match outcome {
            Ok(Some(reply)) => reply,
            Ok(None) => MISSING_REPLY_TEXT.to_owned(),
            Err(AskError::Status(_)) => SERVER_ERROR_TEXT.to_owned(),
            Err(AskError::TimedOut) => TIMED_OUT_TEXT.to_owned(),
            Err(AskError::Transport(_)) => REQUEST_FAILED_TEXT.to_owned(),
        };
        self.messages.push(ChatMessage {
            sender: Sender::Bot,
            text,
            attachment_name: None,
        });
        self.phase = TurnPhase::Idle;
    }
}
