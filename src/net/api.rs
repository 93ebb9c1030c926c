//! HTTP helper for the ask endpoint.
//!
//! Client-side (hydrate): one multipart POST via `gloo-net`, raced against
//! a bounded timeout. Server-side (SSR): a stub error, since the endpoint
//! is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every exit maps into `Result<Option<String>, AskError>`, so the caller
//! settles the turn exactly once whichever way the request ends.

#![allow(clippy::unused_async)]

use crate::net::types::AskError;
use crate::state::composer::StagedFile;

/// Fixed endpoint path queried for every turn.
pub const ASK_ENDPOINT: &str = "/api/ask";

/// Multipart field carrying the question text.
pub const QUESTION_FIELD: &str = "question";

/// Multipart field carrying the staged file bytes.
pub const FILE_FIELD: &str = "file";

/// Upper bound on one request before the turn settles as timed out.
#[cfg(feature = "hydrate")]
const ASK_TIMEOUT_MS: u32 = 30_000;

/// POST the question (and the staged PDF, if any) to the ask endpoint.
///
/// Resolves exactly once with the reply text, `None` when the success body
/// lacks a usable reply field, or the failure kind.
///
/// # Errors
///
/// `AskError::Status` for a non-success HTTP status, `AskError::Transport`
/// for network/body failures, `AskError::TimedOut` past the bound.
pub async fn ask(question: &str, file: Option<&StagedFile>) -> Result<Option<String>, AskError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let form = web_sys::FormData::new()
            .map_err(|_| AskError::Transport("form construction failed".to_owned()))?;
        form.append_with_str(QUESTION_FIELD, question)
            .map_err(|_| AskError::Transport("form construction failed".to_owned()))?;
        if let Some(staged) = file {
            // The blob carries the bytes; the display name travels as the
            // multipart filename.
            form.append_with_blob_and_filename(FILE_FIELD, &staged.file, &staged.name)
                .map_err(|_| AskError::Transport("form construction failed".to_owned()))?;
        }

        // The browser supplies the multipart boundary; setting a content
        // type by hand would break it.
        let request = gloo_net::http::Request::post(ASK_ENDPOINT)
            .body(form)
            .map_err(|e| AskError::Transport(e.to_string()))?;

        let send = request.send();
        let timeout = gloo_timers::future::TimeoutFuture::new(ASK_TIMEOUT_MS);
        futures::pin_mut!(send);
        futures::pin_mut!(timeout);

        let resp = match select(send, timeout).await {
            Either::Left((result, _)) => result.map_err(|e| AskError::Transport(e.to_string()))?,
            Either::Right(((), _)) => return Err(AskError::TimedOut),
        };

        if !resp.ok() {
            return Err(AskError::Status(resp.status()));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| AskError::Transport(e.to_string()))?;
        Ok(super::types::extract_reply(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (question, file);
        Err(AskError::Transport("not available on server".to_owned()))
    }
}
