//! Use case for asking the chat service a question.
//!
//! Every failure of the request collapses into one fixed bot reply; the
//! cause is only logged.

use std::future::Future;

use thiserror::Error;

/// Shown when the request fails for any reason.
pub const SERVER_ERROR_REPLY: &str = "Server error. Try again later.";

/// Shown when the server answers without a usable `reply`.
pub const NO_REPLY_FALLBACK: &str = "Sorry, I didn't understand that.";

const CHAT_REQUEST_FAILED: &str = "CHAT_REQUEST_FAILED";
const CHAT_REPLY_MISSING: &str = "CHAT_REPLY_MISSING";

/// Command to ask one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageCommand {
    pub text: String,
}

/// Errors surfaced to the caller before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    #[error("message is empty")]
    EmptyMessage,
}

/// Why a chat request did not produce a response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatBackendError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("response body is not valid JSON: {0}")]
    InvalidBody(String),
}

/// Remote chat service.
pub trait ChatBackend: Send + Sync {
    /// Posts `message` and returns the `reply` field, if the server sent one.
    fn send(
        &self,
        message: &str,
    ) -> impl Future<Output = Result<Option<String>, ChatBackendError>> + Send;
}

/// Validates the command, then asks the backend.
///
/// # Errors
/// Returns `SendMessageError::EmptyMessage` if text is empty/whitespace.
/// Backend failures are not errors: they become the fallback reply.
pub async fn send_message<B: ChatBackend>(
    backend: &B,
    command: SendMessageCommand,
) -> Result<String, SendMessageError> {
    if command.text.trim().is_empty() {
        return Err(SendMessageError::EmptyMessage);
    }

    Ok(request_reply(backend, &command.text).await)
}

/// Sends `text` as typed and returns the text to show as the bot reply.
pub async fn request_reply<B: ChatBackend>(backend: &B, text: &str) -> String {
    match backend.send(text).await {
        Ok(Some(reply)) if !reply.is_empty() => reply,
        Ok(_) => {
            tracing::warn!(code = CHAT_REPLY_MISSING, "chat response carried no reply");
            NO_REPLY_FALLBACK.to_owned()
        }
        Err(error) => {
            tracing::warn!(code = CHAT_REQUEST_FAILED, error = %error, "chat request failed");
            SERVER_ERROR_REPLY.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct ScriptedBackend {
        result: Result<Option<String>, ChatBackendError>,
        captured: Mutex<Option<String>>,
    }

    impl ScriptedBackend {
        fn with_result(result: Result<Option<String>, ChatBackendError>) -> Self {
            Self {
                result,
                captured: Mutex::new(None),
            }
        }

        fn captured(&self) -> Option<String> {
            self.captured.lock().expect("lock not poisoned").clone()
        }
    }

    impl ChatBackend for ScriptedBackend {
        async fn send(&self, message: &str) -> Result<Option<String>, ChatBackendError> {
            *self.captured.lock().expect("lock not poisoned") = Some(message.to_owned());
            self.result.clone()
        }
    }

    fn command(text: &str) -> SendMessageCommand {
        SendMessageCommand {
            text: text.to_owned(),
        }
    }

    #[tokio::test]
    async fn rejects_whitespace_only_message() {
        let backend = ScriptedBackend::with_result(Ok(Some("unused".to_owned())));

        let result = send_message(&backend, command("  \n\t ")).await;

        assert_eq!(result, Err(SendMessageError::EmptyMessage));
        assert_eq!(backend.captured(), None);
    }

    #[tokio::test]
    async fn sends_text_exactly_as_typed() {
        let backend = ScriptedBackend::with_result(Ok(Some("ok".to_owned())));

        let _ = send_message(&backend, command("  penalty for speeding?  ")).await;

        assert_eq!(
            backend.captured().as_deref(),
            Some("  penalty for speeding?  ")
        );
    }

    #[tokio::test]
    async fn returns_server_reply() {
        let backend =
            ScriptedBackend::with_result(Ok(Some("Section 183 imposes a fine.".to_owned())));

        let reply = send_message(&backend, command("speeding")).await;

        assert_eq!(reply.as_deref(), Ok("Section 183 imposes a fine."));
    }

    #[tokio::test]
    async fn missing_reply_uses_fallback() {
        let backend = ScriptedBackend::with_result(Ok(None));

        assert_eq!(request_reply(&backend, "hi").await, NO_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn empty_reply_uses_fallback() {
        let backend = ScriptedBackend::with_result(Ok(Some(String::new())));

        assert_eq!(request_reply(&backend, "hi").await, NO_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn every_backend_failure_collapses_to_server_error() {
        let failures = [
            ChatBackendError::Transport("connection refused".to_owned()),
            ChatBackendError::Status(500),
            ChatBackendError::InvalidBody("expected value".to_owned()),
        ];

        for failure in failures {
            let backend = ScriptedBackend::with_result(Err(failure.clone()));

            assert_eq!(
                request_reply(&backend, "hi").await,
                SERVER_ERROR_REPLY,
                "failed for {failure:?}"
            );
        }
    }
}
