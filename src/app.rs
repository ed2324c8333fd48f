use std::{
    io::{self, Read},
    sync::mpsc,
};

use anyhow::{Context, Result};
use tokio::runtime::Builder;

use crate::{
    api::{self, HttpChatBackend},
    cli::{Cli, Command},
    domain::{
        self, conversation::Conversation, formatting::format, shell_state::ShellState,
    },
    infra::{self, error::AppError},
    ui::{self, ChannelEventSource, CrosstermEventSource},
    usecases::{
        self, bootstrap,
        context::AppContext,
        reply_worker::ReplyWorker,
        send_message::{send_message, SendMessageCommand},
        shell::DefaultShellOrchestrator,
    },
};

pub fn run(cli: Cli) -> Result<()> {
    let (context, _log_guard) = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        api = api::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Run => run_shell(&context),
        Command::Ask { message, plain } => ask(&context, message, plain),
        Command::Format { plain } => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read text from stdin")?;
            println!("{}", formatted(&context, &input, plain));
            Ok(())
        }
    }
}

fn run_shell(context: &AppContext) -> Result<()> {
    let (reply_tx, reply_rx) = mpsc::channel();
    let worker = ReplyWorker::start(HttpChatBackend::from_config(&context.config.api)?, reply_tx)?;

    let mut event_source = ChannelEventSource::new(reply_rx, CrosstermEventSource);
    let mut orchestrator = DefaultShellOrchestrator::new(
        ShellState::new(Conversation::with_greeting(&context.config.ui.greeting)),
        worker,
    );

    ui::shell::start(context, &mut event_source, &mut orchestrator)
}

fn ask(context: &AppContext, message: String, plain: bool) -> Result<()> {
    let backend = HttpChatBackend::from_config(&context.config.api)?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(AppError::Runtime)?;

    tracing::info!(endpoint = backend.endpoint(), "asking single question");

    let reply = runtime.block_on(send_message(
        &backend,
        SendMessageCommand { text: message },
    ))?;

    println!("{}", formatted(context, &reply, plain));
    Ok(())
}

fn formatted(context: &AppContext, text: &str, plain: bool) -> String {
    ui::print::render_blocks(&format(text, &context.keywords), plain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::formatting::KeywordSet, infra::config::AppConfig};

    fn context_with(keywords: &[&str]) -> AppContext {
        AppContext::new(
            AppConfig::default(),
            KeywordSet::new(keywords).expect("keywords compile"),
        )
    }

    #[test]
    fn formatted_applies_configured_keywords() {
        let context = context_with(&["court"]);

        let styled = formatted(&context, "Go to court.", false);
        let plain = formatted(&context, "Go to court.", true);

        assert_eq!(plain, "Go to court.");
        assert_ne!(styled, plain);
    }

    #[test]
    fn ask_rejects_blank_message_before_sending() {
        let mut config = AppConfig::default();
        config.api.endpoint = "http://127.0.0.1:9/api/chat".to_owned();
        let context = AppContext::new(config, KeywordSet::empty());

        let error = ask(&context, "   ".to_owned(), true).expect_err("blank question must fail");

        assert!(error.to_string().contains("empty"));
    }
}
