use anyhow::Result;
use ratatui::Frame;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        endpoint = %context.config.api.endpoint,
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;
    run_loop(context, event_source, orchestrator, |render| {
        terminal.draw(render)
    })?;

    tracing::info!(
        messages = orchestrator.state().conversation().len(),
        "TUI shell stopped"
    );
    Ok(())
}

fn run_loop<D>(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
    mut draw: D,
) -> Result<()>
where
    D: FnMut(&mut dyn FnMut(&mut Frame<'_>)) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(&mut |frame: &mut Frame<'_>| {
            view::render(frame, orchestrator.state_mut(), &context.keywords)
        })?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}
