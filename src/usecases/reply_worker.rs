//! Runs chat requests off the UI thread and reports replies as events.

use std::sync::{mpsc::Sender, Arc};

use tokio::runtime::{Builder, Runtime};

use crate::{
    domain::events::AppEvent,
    infra::error::AppError,
    usecases::{
        contracts::ReplyDispatcher,
        send_message::{request_reply, ChatBackend},
    },
};

const REPLY_WORKER_STARTED: &str = "REPLY_WORKER_STARTED";
const REPLY_WORKER_STOPPED: &str = "REPLY_WORKER_STOPPED";
const REPLY_DELIVERY_FAILED: &str = "REPLY_DELIVERY_FAILED";

const WORKER_THREADS: usize = 2;

/// Owns the async runtime that performs chat requests.
///
/// Each dispatch spawns one task; the task always ends by sending exactly
/// one `AppEvent::BotReplied` to the UI loop. In-flight requests are
/// abandoned when the worker is dropped.
pub struct ReplyWorker<B: ChatBackend + 'static> {
    runtime: Option<Runtime>,
    backend: Arc<B>,
    reply_tx: Sender<AppEvent>,
}

impl<B: ChatBackend + 'static> ReplyWorker<B> {
    pub fn start(backend: B, reply_tx: Sender<AppEvent>) -> Result<Self, AppError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(WORKER_THREADS)
            .thread_name("lexchat-reply")
            .enable_all()
            .build()
            .map_err(AppError::Runtime)?;

        tracing::info!(code = REPLY_WORKER_STARTED, "reply worker started");

        Ok(Self {
            runtime: Some(runtime),
            backend: Arc::new(backend),
            reply_tx,
        })
    }
}

impl<B: ChatBackend + 'static> ReplyDispatcher for ReplyWorker<B> {
    fn dispatch(&self, text: String) {
        let Some(runtime) = &self.runtime else {
            return;
        };

        let backend = Arc::clone(&self.backend);
        let reply_tx = self.reply_tx.clone();

        runtime.spawn(async move {
            let reply = request_reply(backend.as_ref(), &text).await;

            if let Err(error) = reply_tx.send(AppEvent::BotReplied(reply)) {
                tracing::warn!(
                    code = REPLY_DELIVERY_FAILED,
                    error = %error,
                    "reply arrived after the UI loop stopped listening"
                );
            }
        });
    }
}

impl<B: ChatBackend + 'static> Drop for ReplyWorker<B> {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
            tracing::info!(code = REPLY_WORKER_STOPPED, "reply worker stopped");
        }
    }
}
