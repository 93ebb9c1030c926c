//! Error taxonomy and response-body handling for the ask endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// JSON field of the response body that carries the display text.
pub const REPLY_FIELD: &str = "response";

/// Terminal failure kinds for one ask request.
///
/// All variants settle the turn with a bot-authored error message; none is
/// retried and none is fatal to the component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AskError {
    /// The endpoint answered with a non-success HTTP status.
    Status(u16),
    /// Network failure, malformed response body, or a browser API error
    /// while building the request.
    Transport(String),
    /// The request exceeded the bounded timeout.
    TimedOut,
}

/// Read the reply text out of a response body.
///
/// Returns `None` for any shape other than a string-valued reply field, so
/// malformed successes degrade to the fallback notice instead of failing.
pub fn extract_reply(body: &serde_json::Value) -> Option<String> {
    body.get(REPLY_FIELD)
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}
